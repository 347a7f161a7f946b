//! Bindings to libssl and libcrypto, resolved at runtime.
//!
//! Only the handful of entry points the probes need are bound. Every
//! pointer returned by libcrypto is owned by a guard that frees it on drop.

use std::ffi::{c_char, c_int, c_ulong, c_void, CStr};

use crate::error::ProbeError;

use super::NativeLibrary;

/// `OPENSSL_VERSION` selector for `OpenSSL_version`.
const OPENSSL_VERSION: c_int = 0;

/// `NID_X25519` from `obj_mac.h`.
const NID_X25519: c_int = 1034;

/// Size of an X25519 public key.
pub const X25519_PUBLIC_KEY_LEN: usize = 32;

type VersionFn = unsafe extern "C" fn(c_int) -> *const c_char;
type VersionNumFn = unsafe extern "C" fn() -> c_ulong;
type InitSslFn = unsafe extern "C" fn(u64, *const c_void) -> c_int;
type CtxNewIdFn = unsafe extern "C" fn(c_int, *mut c_void) -> *mut c_void;
type CtxFreeFn = unsafe extern "C" fn(*mut c_void);
type KeygenInitFn = unsafe extern "C" fn(*mut c_void) -> c_int;
type KeygenFn = unsafe extern "C" fn(*mut c_void, *mut *mut c_void) -> c_int;
type PkeyFreeFn = unsafe extern "C" fn(*mut c_void);
type RawPublicKeyFn = unsafe extern "C" fn(*const c_void, *mut u8, *mut usize) -> c_int;
type ErrGetFn = unsafe extern "C" fn() -> c_ulong;
type ErrStringFn = unsafe extern "C" fn(c_ulong, *mut c_char, usize);

/// Decoded `OPENSSL_VERSION_NUMBER` (`0xMNNFFPPS`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionInfo {
    pub major: u8,
    pub minor: u8,
    pub fix: u8,
    pub patch: u8,
    pub status: u8,
}

impl VersionInfo {
    /// Split a packed version number into its fields.
    pub fn from_packed(n: u64) -> Self {
        Self {
            major: ((n >> 28) & 0xf) as u8,
            minor: ((n >> 20) & 0xff) as u8,
            fix: ((n >> 12) & 0xff) as u8,
            patch: ((n >> 4) & 0xff) as u8,
            status: (n & 0xf) as u8,
        }
    }
}

impl std::fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}, {}, {}, {})",
            self.major, self.minor, self.fix, self.patch, self.status
        )
    }
}

/// Version strings reported by a loaded libcrypto/libssl.
fn read_version(lib: &NativeLibrary) -> Result<(String, VersionInfo), ProbeError> {
    // SAFETY: signatures match OpenSSL >= 1.1.0 declarations in crypto.h.
    let (version, version_num) = unsafe {
        let version: VersionFn = lib.symbol("OpenSSL_version")?;
        let version_num: VersionNumFn = lib.symbol("OpenSSL_version_num")?;
        (version, version_num)
    };

    // SAFETY: OpenSSL_version returns a static NUL-terminated string.
    let text = unsafe {
        let ptr = version(OPENSSL_VERSION);
        if ptr.is_null() {
            return Err(ProbeError::backend(
                "OpenSSL_version",
                "returned NULL",
            ));
        }
        CStr::from_ptr(ptr).to_string_lossy().into_owned()
    };
    // SAFETY: takes no arguments and returns a plain integer.
    let packed = unsafe { version_num() };

    Ok((text, VersionInfo::from_packed(packed as u64)))
}

/// A loaded libssl.
pub struct LibSsl {
    lib: NativeLibrary,
}

impl LibSsl {
    /// Load the first libssl candidate that opens.
    pub fn load(candidates: &[String]) -> Result<Self, ProbeError> {
        Ok(Self {
            lib: NativeLibrary::open_any(candidates)?,
        })
    }

    /// Name the library was opened with.
    pub fn name(&self) -> &str {
        self.lib.name()
    }

    /// Run `OPENSSL_init_ssl` with default settings.
    pub fn init(&self) -> Result<(), ProbeError> {
        // SAFETY: matches `int OPENSSL_init_ssl(uint64_t, const OPENSSL_INIT_SETTINGS *)`.
        let rc = unsafe {
            let init: InitSslFn = self.lib.symbol("OPENSSL_init_ssl")?;
            init(0, std::ptr::null())
        };
        if rc != 1 {
            return Err(ProbeError::backend(
                "OPENSSL_init_ssl",
                format!("returned {}", rc),
            ));
        }
        Ok(())
    }

    /// Version text and decoded version number. libcrypto symbols are
    /// reachable through libssl's dependency chain.
    pub fn version(&self) -> Result<(String, VersionInfo), ProbeError> {
        read_version(&self.lib)
    }
}

/// A loaded libcrypto.
pub struct LibCrypto {
    lib: NativeLibrary,
}

impl LibCrypto {
    /// Load the first libcrypto candidate that opens.
    pub fn load(candidates: &[String]) -> Result<Self, ProbeError> {
        Ok(Self {
            lib: NativeLibrary::open_any(candidates)?,
        })
    }

    /// Name the library was opened with.
    pub fn name(&self) -> &str {
        self.lib.name()
    }

    /// Version text and decoded version number.
    pub fn version(&self) -> Result<(String, VersionInfo), ProbeError> {
        read_version(&self.lib)
    }

    /// Generate an X25519 key pair and return its raw public key.
    pub fn generate_x25519(&self) -> Result<[u8; X25519_PUBLIC_KEY_LEN], ProbeError> {
        // SAFETY: signatures match the EVP declarations in evp.h (OpenSSL >= 1.1.1).
        let (ctx_new, ctx_free, keygen_init, keygen, pkey_free, raw_public) = unsafe {
            (
                self.lib.symbol::<CtxNewIdFn>("EVP_PKEY_CTX_new_id")?,
                self.lib.symbol::<CtxFreeFn>("EVP_PKEY_CTX_free")?,
                self.lib.symbol::<KeygenInitFn>("EVP_PKEY_keygen_init")?,
                self.lib.symbol::<KeygenFn>("EVP_PKEY_keygen")?,
                self.lib.symbol::<PkeyFreeFn>("EVP_PKEY_free")?,
                self.lib
                    .symbol::<RawPublicKeyFn>("EVP_PKEY_get_raw_public_key")?,
            )
        };

        // SAFETY: NULL engine selects the default implementation.
        let ctx = unsafe { ctx_new(NID_X25519, std::ptr::null_mut()) };
        if ctx.is_null() {
            return Err(self.failure("EVP_PKEY_CTX_new_id(X25519)"));
        }
        let ctx = Owned {
            ptr: ctx,
            free: ctx_free,
        };

        // SAFETY: ctx is a live EVP_PKEY_CTX.
        if unsafe { keygen_init(ctx.ptr) } != 1 {
            return Err(self.failure("EVP_PKEY_keygen_init"));
        }

        let mut pkey: *mut c_void = std::ptr::null_mut();
        // SAFETY: ctx is initialized for keygen; pkey receives a new key on success.
        if unsafe { keygen(ctx.ptr, &mut pkey) } != 1 || pkey.is_null() {
            return Err(self.failure("EVP_PKEY_keygen"));
        }
        let pkey = Owned {
            ptr: pkey,
            free: pkey_free,
        };

        let mut public = [0u8; X25519_PUBLIC_KEY_LEN];
        let mut len = public.len();
        // SAFETY: public has room for len bytes; len is updated with the written size.
        if unsafe { raw_public(pkey.ptr, public.as_mut_ptr(), &mut len) } != 1 {
            return Err(self.failure("EVP_PKEY_get_raw_public_key"));
        }
        if len != X25519_PUBLIC_KEY_LEN {
            return Err(ProbeError::backend(
                "EVP_PKEY_get_raw_public_key",
                format!("expected {} bytes, got {}", X25519_PUBLIC_KEY_LEN, len),
            ));
        }

        Ok(public)
    }

    /// Build a backend error from the libcrypto error queue.
    fn failure(&self, operation: &str) -> ProbeError {
        let queued = self.drain_errors();
        let message = if queued.is_empty() {
            "no error reported by libcrypto".to_string()
        } else {
            queued.join("; ")
        };
        ProbeError::backend(operation, message)
    }

    /// Pop every queued libcrypto error as text.
    fn drain_errors(&self) -> Vec<String> {
        // SAFETY: signatures match err.h.
        let resolved = unsafe {
            (
                self.lib.symbol::<ErrGetFn>("ERR_get_error"),
                self.lib.symbol::<ErrStringFn>("ERR_error_string_n"),
            )
        };
        let (Ok(get_error), Ok(error_string)) = resolved else {
            return Vec::new();
        };

        let mut errors = Vec::new();
        loop {
            // SAFETY: ERR_get_error pops from this thread's queue.
            let code = unsafe { get_error() };
            if code == 0 {
                break;
            }
            let mut buf = [0 as c_char; 256];
            // SAFETY: buf is writable for buf.len() bytes and is NUL-terminated by the callee.
            let text = unsafe {
                error_string(code, buf.as_mut_ptr(), buf.len());
                CStr::from_ptr(buf.as_ptr()).to_string_lossy().into_owned()
            };
            errors.push(text);
        }
        errors
    }
}

/// A libcrypto object freed with its matching `*_free` on drop.
struct Owned {
    ptr: *mut c_void,
    free: unsafe extern "C" fn(*mut c_void),
}

impl Drop for Owned {
    fn drop(&mut self) {
        // SAFETY: ptr was allocated by libcrypto and is freed exactly once.
        unsafe { (self.free)(self.ptr) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_openssl_3_version_number() {
        // OpenSSL 3.0.13
        let info = VersionInfo::from_packed(0x3000_00d0);
        assert_eq!(info.major, 3);
        assert_eq!(info.minor, 0);
        assert_eq!(info.fix, 0);
        assert_eq!(info.patch, 13);
        assert_eq!(info.status, 0);
    }

    #[test]
    fn decodes_openssl_1_1_version_number() {
        // OpenSSL 1.1.1w
        let info = VersionInfo::from_packed(0x1010_117f);
        assert_eq!(info.to_string(), "(1, 1, 1, 23, 15)");
    }

    #[test]
    fn missing_libcrypto_is_load_error() {
        let err = LibCrypto::load(&["libcrypto-hostprobe-missing.so".to_string()])
            .err()
            .unwrap();
        assert!(matches!(
            err,
            ProbeError::Load { .. } | ProbeError::Unsupported(_)
        ));
    }
}
