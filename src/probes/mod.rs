//! Library probes.
//!
//! Each probe loads one native library and exercises a single small
//! operation. Probes are independent: the [`runner`](crate::runner) runs
//! them in order and isolates their failures.
//!
//! # Example
//!
//! ```
//! use hostprobe::config::LibraryConfig;
//! use hostprobe::probes::default_probes;
//!
//! let probes = default_probes(&LibraryConfig::default());
//! let labels: Vec<&str> = probes.iter().map(|p| p.label()).collect();
//! assert_eq!(
//!     labels,
//!     ["TLS backend", "X25519 key generation", "SSH client library", "Background removal runtime"]
//! );
//! ```

pub mod background_removal;
pub mod ssh;
pub mod tls;
pub mod x25519;

pub use background_removal::BackgroundRemovalProbe;
pub use ssh::SshProbe;
pub use tls::TlsProbe;
pub use x25519::X25519Probe;

use crate::config::LibraryConfig;
use crate::error::ProbeError;

/// Detail lines from a successful probe.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeReport {
    /// Extra lines shown after the success line (version, library path).
    pub details: Vec<String>,
}

impl ProbeReport {
    /// A report with no details.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a detail line.
    pub fn detail(mut self, line: impl Into<String>) -> Self {
        self.details.push(line.into());
        self
    }
}

/// A single self-contained library check.
pub trait Probe {
    /// Name shown in the label and status lines.
    fn label(&self) -> &str;

    /// Library candidates this probe will try, for `list`.
    fn candidates(&self) -> &[String];

    /// Load the library and exercise it.
    fn run(&self) -> Result<ProbeReport, ProbeError>;
}

/// The standard probes in their fixed run order.
pub fn default_probes(libraries: &LibraryConfig) -> Vec<Box<dyn Probe>> {
    vec![
        Box::new(TlsProbe::new(libraries.ssl.clone())),
        Box::new(X25519Probe::new(libraries.crypto.clone())),
        Box::new(SshProbe::new(libraries.ssh.clone())),
        Box::new(BackgroundRemovalProbe::new(libraries.onnxruntime.clone())),
    ]
}
