//! Host environment information shown before the probes.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::config::LibraryConfig;
use crate::error::ProbeError;
use crate::native::LibCrypto;

static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\.(\d+)\.(\d+)([a-z]?)").expect("valid version regex"));

/// Crypto backend identity as reported by libcrypto.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackendVersion {
    /// Library the version was read from.
    pub library: String,
    /// Full `OpenSSL_version` text, e.g. "OpenSSL 3.0.13 30 Jan 2024".
    pub text: String,
    /// `major.minor.patch[letter]` extracted from `text`, when present.
    pub number: Option<String>,
}

/// Extract the first `x.y.z` version (with optional letter suffix) from text.
pub fn extract_version(text: &str) -> Option<String> {
    VERSION_RE.find(text).map(|m| m.as_str().to_string())
}

/// Read-only facts about the host, gathered once per run.
#[derive(Debug, Clone, Serialize)]
pub struct EnvironmentInfo {
    /// Tool name and version, plus the C runtime version when known.
    pub runtime: String,
    /// `<os>-<arch>`, plus the kernel release on unix.
    pub platform: String,
    /// libcrypto version, or why it could not be read.
    #[serde(serialize_with = "serialize_backend")]
    pub crypto_backend: Result<BackendVersion, ProbeError>,
}

impl EnvironmentInfo {
    /// Gather environment facts. Never fails; a backend lookup failure is
    /// kept in `crypto_backend`.
    pub fn gather(libraries: &LibraryConfig) -> Self {
        let crypto_backend = crypto_backend_version(&libraries.crypto);
        if let Err(e) = &crypto_backend {
            tracing::debug!("Crypto backend version unavailable: {}", e);
        }

        Self {
            runtime: runtime_version(),
            platform: platform_identifier(),
            crypto_backend,
        }
    }

    /// Lines printed under the banner.
    pub fn display_lines(&self) -> Vec<String> {
        let backend = match &self.crypto_backend {
            Ok(v) => format!("Crypto backend: {} ({})", v.text, v.library),
            Err(e) => format!("Crypto backend: unavailable ({}: {})", e.category(), e),
        };
        vec![
            format!("Runtime: {}", self.runtime),
            format!("Platform: {}", self.platform),
            backend,
        ]
    }
}

fn crypto_backend_version(candidates: &[String]) -> Result<BackendVersion, ProbeError> {
    let crypto = LibCrypto::load(candidates)?;
    let (text, _) = crypto.version()?;
    Ok(BackendVersion {
        library: crypto.name().to_string(),
        number: extract_version(&text),
        text,
    })
}

/// Tool version with the C runtime version where it can be read.
pub fn runtime_version() -> String {
    let tool = format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    match libc_version() {
        Some(libc) => format!("{} ({})", tool, libc),
        None => tool,
    }
}

#[cfg(all(target_os = "linux", target_env = "gnu"))]
fn libc_version() -> Option<String> {
    // SAFETY: returns a static NUL-terminated string.
    let version = unsafe {
        let ptr = libc::gnu_get_libc_version();
        if ptr.is_null() {
            return None;
        }
        std::ffi::CStr::from_ptr(ptr).to_string_lossy().into_owned()
    };
    Some(format!("glibc {}", version))
}

#[cfg(not(all(target_os = "linux", target_env = "gnu")))]
fn libc_version() -> Option<String> {
    None
}

/// `<os>-<arch>`, with the kernel release appended when `uname` succeeds.
pub fn platform_identifier() -> String {
    let base = format!("{}-{}", std::env::consts::OS, std::env::consts::ARCH);
    match kernel_release() {
        Some(release) => format!("{} (kernel {})", base, release),
        None => base,
    }
}

#[cfg(unix)]
fn kernel_release() -> Option<String> {
    // SAFETY: utsname is plain data; uname fills it with NUL-terminated fields.
    unsafe {
        let mut uts: libc::utsname = std::mem::zeroed();
        if libc::uname(&mut uts) != 0 {
            return None;
        }
        let release = std::ffi::CStr::from_ptr(uts.release.as_ptr());
        Some(release.to_string_lossy().into_owned())
    }
}

#[cfg(not(unix))]
fn kernel_release() -> Option<String> {
    None
}

fn serialize_backend<S>(
    value: &Result<BackendVersion, ProbeError>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    use serde::ser::SerializeStruct;

    match value {
        Ok(version) => version.serialize(serializer),
        Err(e) => {
            let mut s = serializer.serialize_struct("BackendError", 2)?;
            s.serialize_field("error", &e.to_string())?;
            s.serialize_field("error_type", e.category())?;
            s.end()
        }
    }
}
