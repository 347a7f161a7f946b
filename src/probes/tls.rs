//! TLS backend probe: load libssl, initialize it, report its version.

use crate::error::ProbeError;
use crate::native::LibSsl;

use super::{Probe, ProbeReport};

/// Probe for the libssl TLS backend.
pub struct TlsProbe {
    candidates: Vec<String>,
}

impl TlsProbe {
    pub fn new(candidates: Vec<String>) -> Self {
        Self { candidates }
    }
}

impl Probe for TlsProbe {
    fn label(&self) -> &str {
        "TLS backend"
    }

    fn candidates(&self) -> &[String] {
        &self.candidates
    }

    fn run(&self) -> Result<ProbeReport, ProbeError> {
        let ssl = LibSsl::load(&self.candidates)?;
        ssl.init()?;
        let (version, info) = ssl.version()?;

        Ok(ProbeReport::new()
            .detail(format!("SSL version: {}", version))
            .detail(format!("SSL version info: {}", info))
            .detail(format!("Library: {}", ssl.name())))
    }
}
