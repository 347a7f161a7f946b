//! Probe orchestration and reporting.

pub mod diagnostic;
pub mod report;

pub use diagnostic::{DiagnosticRunner, BANNER};
pub use report::{ProbeOutcome, RunReport};
