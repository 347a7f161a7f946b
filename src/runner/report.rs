//! Probe outcomes and the run report.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::environment::EnvironmentInfo;
use crate::error::ProbeError;

/// Result of one probe: success with details, or failure with a
/// description and category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeOutcome {
    /// Probe label.
    pub probe: String,
    /// Whether the library loaded and its operation succeeded.
    pub success: bool,
    /// Detail lines on success.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
    /// Error description on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Error category label on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
}

impl ProbeOutcome {
    /// A successful outcome.
    pub fn passed(probe: &str, details: Vec<String>) -> Self {
        Self {
            probe: probe.to_string(),
            success: true,
            details,
            error: None,
            error_type: None,
        }
    }

    /// A failed outcome built from a probe error.
    pub fn failed(probe: &str, error: &ProbeError) -> Self {
        Self {
            probe: probe.to_string(),
            success: false,
            details: Vec::new(),
            error: Some(error.to_string()),
            error_type: Some(error.category().to_string()),
        }
    }
}

/// Everything a run produced, in probe order.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// When the run started.
    pub generated_at: DateTime<Utc>,
    /// Host facts shown before the probes.
    pub environment: EnvironmentInfo,
    /// One outcome per probe, in run order.
    pub probes: Vec<ProbeOutcome>,
}

impl RunReport {
    /// Number of successful probes.
    pub fn passed(&self) -> usize {
        self.probes.iter().filter(|p| p.success).count()
    }

    /// Summary line, e.g. "3 of 4 probes passed".
    pub fn summary(&self) -> String {
        format!("{} of {} probes passed", self.passed(), self.probes.len())
    }
}
