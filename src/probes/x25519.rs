//! X25519 key generation through the libcrypto EVP interface.
//!
//! This is the check most likely to fail on a host whose crypto backend
//! was built without elliptic-curve support; that outcome is reported as
//! a normal negative result.

use crate::error::ProbeError;
use crate::native::LibCrypto;

use super::{Probe, ProbeReport};

/// Probe for X25519 key pair generation.
pub struct X25519Probe {
    candidates: Vec<String>,
}

impl X25519Probe {
    pub fn new(candidates: Vec<String>) -> Self {
        Self { candidates }
    }
}

impl Probe for X25519Probe {
    fn label(&self) -> &str {
        "X25519 key generation"
    }

    fn candidates(&self) -> &[String] {
        &self.candidates
    }

    fn run(&self) -> Result<ProbeReport, ProbeError> {
        let crypto = LibCrypto::load(&self.candidates)?;
        let public = crypto.generate_x25519()?;

        Ok(ProbeReport::new()
            .detail(format!("Public key: {} bytes", public.len()))
            .detail(format!("Library: {}", crypto.name())))
    }
}
