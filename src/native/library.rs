//! Runtime loading of shared objects.
//!
//! [`NativeLibrary`] wraps `dlopen`/`dlsym`/`dlclose`. It is the compiled
//! equivalent of "importing" a library: a probe that cannot open its
//! library, or cannot find an entry point in it, fails at this layer.

use crate::error::ProbeError;

/// An open handle to a shared object, closed on drop.
#[derive(Debug)]
pub struct NativeLibrary {
    name: String,
    #[cfg(unix)]
    handle: *mut libc::c_void,
}

impl NativeLibrary {
    /// Open a single shared object by name or path.
    #[cfg(unix)]
    pub fn open(name: &str) -> Result<Self, ProbeError> {
        let c_name = std::ffi::CString::new(name).map_err(|_| ProbeError::Load {
            library: name.to_string(),
            message: "name contains an interior NUL byte".to_string(),
        })?;

        // SAFETY: c_name is a valid NUL-terminated string for the duration of the call.
        let handle = unsafe { libc::dlopen(c_name.as_ptr(), libc::RTLD_NOW | libc::RTLD_LOCAL) };
        if handle.is_null() {
            return Err(ProbeError::Load {
                library: name.to_string(),
                message: last_dl_error().unwrap_or_else(|| "dlopen returned NULL".to_string()),
            });
        }

        Ok(Self {
            name: name.to_string(),
            handle,
        })
    }

    /// Runtime loading is unix-only.
    #[cfg(not(unix))]
    pub fn open(name: &str) -> Result<Self, ProbeError> {
        Err(ProbeError::Unsupported(format!(
            "cannot load {}: runtime library loading is not supported on {}",
            name,
            std::env::consts::OS
        )))
    }

    /// Open the first candidate that loads.
    ///
    /// Candidates are tried in order. When none loads, the error names
    /// every attempt and keeps each loader message, so a candidate that
    /// exists but is broken is not hidden behind later "not found" ones.
    pub fn open_any(candidates: &[String]) -> Result<Self, ProbeError> {
        let mut reasons = Vec::with_capacity(candidates.len());

        for candidate in candidates {
            tracing::debug!("Trying to load {}", candidate);
            match Self::open(candidate) {
                Ok(lib) => {
                    tracing::debug!("Loaded {}", candidate);
                    return Ok(lib);
                }
                Err(ProbeError::Unsupported(msg)) => return Err(ProbeError::Unsupported(msg)),
                Err(e) => {
                    tracing::debug!("Failed to load {}: {}", candidate, e);
                    reasons.push(load_reason(candidate, e));
                }
            }
        }

        let message = if reasons.is_empty() {
            "no candidates".to_string()
        } else {
            reasons.join("; ")
        };

        Err(ProbeError::Load {
            library: candidates.join(", "),
            message,
        })
    }

    /// Name or path this library was opened with.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolve `symbol` as a value of type `F`, normally an `extern "C" fn`.
    ///
    /// # Safety
    ///
    /// `F` must be pointer-sized and match the real signature of the
    /// symbol. The returned value must not outlive `self`.
    #[cfg(unix)]
    pub unsafe fn symbol<F: Copy>(&self, symbol: &str) -> Result<F, ProbeError> {
        assert_eq!(
            std::mem::size_of::<F>(),
            std::mem::size_of::<*mut libc::c_void>(),
            "symbol type must be pointer-sized"
        );

        let c_symbol = std::ffi::CString::new(symbol)
            .map_err(|_| self.missing(symbol, "invalid symbol name"))?;

        // Clear any stale error so a NULL result can be told apart from a NULL symbol value.
        libc::dlerror();
        let ptr = libc::dlsym(self.handle, c_symbol.as_ptr());
        if ptr.is_null() {
            let message = last_dl_error().unwrap_or_else(|| "symbol resolved to NULL".to_string());
            return Err(self.missing(symbol, &message));
        }

        Ok(std::mem::transmute_copy::<*mut libc::c_void, F>(&ptr))
    }

    /// Runtime loading is unix-only.
    ///
    /// # Safety
    ///
    /// Always returns an error; never dereferences anything.
    #[cfg(not(unix))]
    pub unsafe fn symbol<F: Copy>(&self, symbol: &str) -> Result<F, ProbeError> {
        Err(self.missing(symbol, "runtime library loading is not supported"))
    }

    fn missing(&self, symbol: &str, message: &str) -> ProbeError {
        ProbeError::Symbol {
            library: self.name.clone(),
            symbol: symbol.to_string(),
            message: message.to_string(),
        }
    }
}

#[cfg(unix)]
impl Drop for NativeLibrary {
    fn drop(&mut self) {
        // SAFETY: handle came from a successful dlopen and is closed exactly once.
        unsafe {
            libc::dlclose(self.handle);
        }
    }
}

/// Loader message for one candidate, prefixed with its name unless the
/// loader already put it there.
fn load_reason(candidate: &str, error: ProbeError) -> String {
    let message = match error {
        ProbeError::Load { message, .. } => message,
        other => other.to_string(),
    };
    if message.starts_with(candidate) {
        message
    } else {
        format!("{}: {}", candidate, message)
    }
}

#[cfg(unix)]
fn last_dl_error() -> Option<String> {
    // SAFETY: dlerror returns NULL or a NUL-terminated string owned by the loader.
    unsafe {
        let err = libc::dlerror();
        if err.is_null() {
            None
        } else {
            Some(std::ffi::CStr::from_ptr(err).to_string_lossy().into_owned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_missing_library_is_load_error() {
        let err = NativeLibrary::open("libhostprobe-does-not-exist.so.42").unwrap_err();
        if cfg!(unix) {
            assert_eq!(err.category(), "LoadError");
            assert!(err.to_string().contains("libhostprobe-does-not-exist.so.42"));
        } else {
            assert_eq!(err.category(), "Unsupported");
        }
    }

    #[test]
    fn open_any_with_no_candidates_is_load_error() {
        let err = NativeLibrary::open_any(&[]).unwrap_err();
        assert_eq!(err.category(), "LoadError");
        assert!(err.to_string().contains("no candidates"));
    }

    #[cfg(unix)]
    #[test]
    fn open_any_lists_every_attempt() {
        let candidates = vec![
            "libhostprobe-missing-a.so".to_string(),
            "libhostprobe-missing-b.so".to_string(),
        ];
        let err = NativeLibrary::open_any(&candidates).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("libhostprobe-missing-a.so"));
        assert!(msg.contains("libhostprobe-missing-b.so"));
    }

    #[cfg(unix)]
    #[test]
    fn open_any_keeps_reason_of_broken_candidate() {
        let temp = tempfile::TempDir::new().unwrap();
        let broken = temp.path().join("libbroken.so");
        std::fs::write(&broken, vec![b'x'; 4096]).unwrap();
        let broken = broken.to_string_lossy().into_owned();
        let candidates = vec![broken.clone(), "libhostprobe-missing-x.so".to_string()];

        let err = NativeLibrary::open_any(&candidates).unwrap_err();

        let ProbeError::Load { message, .. } = err else {
            panic!("expected a load error");
        };
        let reasons: Vec<&str> = message.split("; ").collect();
        assert_eq!(reasons.len(), 2);
        assert!(reasons[0].starts_with(&broken));
        assert!(reasons[0].len() > broken.len() + 2);
        assert!(reasons[1].starts_with("libhostprobe-missing-x.so"));
    }

    #[test]
    fn load_reason_adds_missing_prefix() {
        let err = ProbeError::Load {
            library: "libssl.so.3".into(),
            message: "undefined symbol: EVP_MD_size".into(),
        };
        assert_eq!(
            load_reason("libssl.so.3", err),
            "libssl.so.3: undefined symbol: EVP_MD_size"
        );

        let prefixed = ProbeError::Load {
            library: "libssl.so.3".into(),
            message: "libssl.so.3: cannot open shared object file".into(),
        };
        assert_eq!(
            load_reason("libssl.so.3", prefixed),
            "libssl.so.3: cannot open shared object file"
        );
    }

    #[test]
    fn interior_nul_is_rejected() {
        let err = NativeLibrary::open("lib\0ssl").unwrap_err();
        assert!(matches!(
            err,
            ProbeError::Load { .. } | ProbeError::Unsupported(_)
        ));
    }

    #[cfg(all(target_os = "linux", target_env = "gnu"))]
    #[test]
    fn resolves_symbol_from_libc() {
        let lib = NativeLibrary::open_any(&["libc.so.6".to_string()]).unwrap();
        let strlen: unsafe extern "C" fn(*const libc::c_char) -> libc::size_t =
            unsafe { lib.symbol("strlen").unwrap() };
        let len = unsafe { strlen(c"probe".as_ptr()) };
        assert_eq!(len, 5);
        assert_eq!(lib.name(), "libc.so.6");
    }

    #[cfg(all(target_os = "linux", target_env = "gnu"))]
    #[test]
    fn missing_symbol_is_symbol_error() {
        let lib = NativeLibrary::open("libc.so.6").unwrap();
        let err = unsafe { lib.symbol::<unsafe extern "C" fn()>("hostprobe_no_such_symbol") }
            .unwrap_err();
        assert_eq!(err.category(), "SymbolError");
        assert!(err.to_string().contains("hostprobe_no_such_symbol"));
    }
}
