//! SSH client library probe: load libssh2 and cycle its global init.

use crate::error::ProbeError;
use crate::native::LibSsh2;

use super::{Probe, ProbeReport};

/// Probe for libssh2.
pub struct SshProbe {
    candidates: Vec<String>,
}

impl SshProbe {
    pub fn new(candidates: Vec<String>) -> Self {
        Self { candidates }
    }
}

impl Probe for SshProbe {
    fn label(&self) -> &str {
        "SSH client library"
    }

    fn candidates(&self) -> &[String] {
        &self.candidates
    }

    fn run(&self) -> Result<ProbeReport, ProbeError> {
        let ssh = LibSsh2::load(&self.candidates)?;
        let version = ssh.version()?;
        ssh.init_and_exit()?;

        Ok(ProbeReport::new()
            .detail(format!("libssh2 version: {}", version))
            .detail(format!("Library: {}", ssh.name())))
    }
}
