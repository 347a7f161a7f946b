//! Background-removal runtime probe.
//!
//! Background-removal models run on ONNX Runtime, so loading it and
//! fetching its API table is the host-level prerequisite.

use crate::error::ProbeError;
use crate::native::onnxruntime::{OnnxRuntime, MIN_API_VERSION};

use super::{Probe, ProbeReport};

/// Probe for the ONNX Runtime inference library.
pub struct BackgroundRemovalProbe {
    candidates: Vec<String>,
}

impl BackgroundRemovalProbe {
    pub fn new(candidates: Vec<String>) -> Self {
        Self { candidates }
    }
}

impl Probe for BackgroundRemovalProbe {
    fn label(&self) -> &str {
        "Background removal runtime"
    }

    fn candidates(&self) -> &[String] {
        &self.candidates
    }

    fn run(&self) -> Result<ProbeReport, ProbeError> {
        let ort = OnnxRuntime::load(&self.candidates)?;
        let version = ort.version()?;
        ort.check_api(MIN_API_VERSION)?;

        Ok(ProbeReport::new()
            .detail(format!("onnxruntime version: {}", version))
            .detail(format!("Library: {}", ort.name())))
    }
}
