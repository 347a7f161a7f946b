//! Error types for hostprobe.
//!
//! Two families live here:
//!
//! - [`ProbeError`] describes why a single probe failed. It is always
//!   caught by the runner and rendered as text; it never ends the process.
//! - [`HostprobeError`] covers tool-level failures (config I/O, YAML,
//!   JSON) that happen outside the probe sequence.

use std::path::PathBuf;
use thiserror::Error;

/// Why a probe could not load or exercise its library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeError {
    /// No candidate shared object could be loaded.
    #[error("could not load {library}: {message}")]
    Load { library: String, message: String },

    /// The library loaded but an entry point is missing.
    #[error("symbol '{symbol}' not found in {library}: {message}")]
    Symbol {
        library: String,
        symbol: String,
        message: String,
    },

    /// The library call itself reported a failure.
    #[error("{operation} failed: {message}")]
    Backend { operation: String, message: String },

    /// Runtime loading is not available on this platform.
    #[error("{0}")]
    Unsupported(String),

    /// The probe body panicked.
    #[error("probe panicked: {0}")]
    Panic(String),
}

impl ProbeError {
    /// Stable category label printed as the error type.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Load { .. } => "LoadError",
            Self::Symbol { .. } => "SymbolError",
            Self::Backend { .. } => "BackendError",
            Self::Unsupported(_) => "Unsupported",
            Self::Panic(_) => "Panic",
        }
    }

    /// Shorthand for a [`ProbeError::Backend`].
    pub fn backend(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Backend {
            operation: operation.into(),
            message: message.into(),
        }
    }
}

/// Tool-level error type.
#[derive(Debug, Error)]
pub enum HostprobeError {
    /// A named config file does not exist.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse the config file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Report serialization failed.
    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for hostprobe operations.
pub type Result<T> = std::result::Result<T, HostprobeError>;
