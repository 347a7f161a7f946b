//! Host environment information.
//!
//! See [`EnvironmentInfo`] for what is gathered and how failures are kept.

pub mod info;

pub use info::{extract_version, platform_identifier, runtime_version, BackendVersion, EnvironmentInfo};
