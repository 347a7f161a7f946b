//! Bindings to libssh2, resolved at runtime.

use std::ffi::{c_char, c_int, CStr};

use crate::error::ProbeError;

use super::NativeLibrary;

type VersionFn = unsafe extern "C" fn(c_int) -> *const c_char;
type InitFn = unsafe extern "C" fn(c_int) -> c_int;
type ExitFn = unsafe extern "C" fn();

/// A loaded libssh2.
pub struct LibSsh2 {
    lib: NativeLibrary,
}

impl LibSsh2 {
    /// Load the first libssh2 candidate that opens.
    pub fn load(candidates: &[String]) -> Result<Self, ProbeError> {
        Ok(Self {
            lib: NativeLibrary::open_any(candidates)?,
        })
    }

    /// Name the library was opened with.
    pub fn name(&self) -> &str {
        self.lib.name()
    }

    /// Library version string (`libssh2_version(0)`).
    pub fn version(&self) -> Result<String, ProbeError> {
        // SAFETY: matches `const char *libssh2_version(int required_version)`;
        // 0 never exceeds the loaded version so the result is non-NULL.
        unsafe {
            let version: VersionFn = self.lib.symbol("libssh2_version")?;
            let ptr = version(0);
            if ptr.is_null() {
                return Err(ProbeError::backend("libssh2_version", "returned NULL"));
            }
            Ok(CStr::from_ptr(ptr).to_string_lossy().into_owned())
        }
    }

    /// Initialize and tear down the library's global state once.
    pub fn init_and_exit(&self) -> Result<(), ProbeError> {
        // SAFETY: matches `int libssh2_init(int flags)` and `void libssh2_exit(void)`.
        unsafe {
            let init: InitFn = self.lib.symbol("libssh2_init")?;
            let exit: ExitFn = self.lib.symbol("libssh2_exit")?;
            let rc = init(0);
            if rc != 0 {
                return Err(ProbeError::backend(
                    "libssh2_init",
                    format!("returned {}", rc),
                ));
            }
            exit();
        }
        Ok(())
    }
}
