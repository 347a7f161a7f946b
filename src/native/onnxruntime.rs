//! Bindings to the ONNX Runtime C API, resolved at runtime.
//!
//! The only exported symbol is `OrtGetApiBase`; everything else is reached
//! through the function table it returns.

use std::ffi::{c_char, c_void, CStr};

use crate::error::ProbeError;

use super::NativeLibrary;

/// Oldest API table every onnxruntime release serves.
pub const MIN_API_VERSION: u32 = 1;

/// `OrtApiBase` from `onnxruntime_c_api.h`.
#[repr(C)]
struct OrtApiBase {
    get_api: unsafe extern "C" fn(u32) -> *const c_void,
    get_version_string: unsafe extern "C" fn() -> *const c_char,
}

type GetApiBaseFn = unsafe extern "C" fn() -> *const OrtApiBase;

/// A loaded onnxruntime.
pub struct OnnxRuntime {
    lib: NativeLibrary,
}

impl OnnxRuntime {
    /// Load the first onnxruntime candidate that opens.
    pub fn load(candidates: &[String]) -> Result<Self, ProbeError> {
        Ok(Self {
            lib: NativeLibrary::open_any(candidates)?,
        })
    }

    /// Name the library was opened with.
    pub fn name(&self) -> &str {
        self.lib.name()
    }

    fn api_base(&self) -> Result<&OrtApiBase, ProbeError> {
        // SAFETY: matches `const OrtApiBase* OrtGetApiBase(void)`. The table is
        // static inside the library, which outlives the returned borrow.
        unsafe {
            let get_api_base: GetApiBaseFn = self.lib.symbol("OrtGetApiBase")?;
            let base = get_api_base();
            base.as_ref()
                .ok_or_else(|| ProbeError::backend("OrtGetApiBase", "returned NULL"))
        }
    }

    /// Runtime version string.
    pub fn version(&self) -> Result<String, ProbeError> {
        let base = self.api_base()?;
        // SAFETY: returns a static NUL-terminated string.
        unsafe {
            let ptr = (base.get_version_string)();
            if ptr.is_null() {
                return Err(ProbeError::backend("GetVersionString", "returned NULL"));
            }
            Ok(CStr::from_ptr(ptr).to_string_lossy().into_owned())
        }
    }

    /// Check that the API table for `version` is served.
    pub fn check_api(&self, version: u32) -> Result<(), ProbeError> {
        let base = self.api_base()?;
        // SAFETY: GetApi returns NULL for unsupported versions and never fails otherwise.
        let api = unsafe { (base.get_api)(version) };
        if api.is_null() {
            return Err(ProbeError::backend(
                format!("GetApi({})", version),
                "API version not supported by this runtime",
            ));
        }
        Ok(())
    }
}
