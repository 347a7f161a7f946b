//! hostprobe - check whether native libraries work on this host.
//!
//! hostprobe loads a TLS backend, a crypto backend, an SSH client library
//! and a background-removal inference runtime at runtime, exercises one
//! small operation in each, and prints a status line per library. A
//! failing library never stops the others from being checked.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Library candidate configuration
//! - [`environment`] - Host environment information
//! - [`error`] - Error types and result aliases
//! - [`native`] - Runtime library loading and bindings
//! - [`probes`] - The individual library probes
//! - [`runner`] - Probe orchestration and reporting
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use hostprobe::config::LibraryConfig;
//! use hostprobe::runner::DiagnosticRunner;
//! use hostprobe::ui::MockUI;
//!
//! let libraries = LibraryConfig {
//!     ssh: vec!["libssh2-not-installed.so".to_string()],
//!     ..LibraryConfig::default()
//! };
//! let mut ui = MockUI::new();
//! let report = DiagnosticRunner::new(libraries).run(&mut ui);
//!
//! assert_eq!(report.probes.len(), 4);
//! assert!(!report.probes[2].success);
//! ```

pub mod cli;
pub mod config;
pub mod environment;
pub mod error;
pub mod native;
pub mod probes;
pub mod runner;
pub mod ui;

pub use error::{HostprobeError, ProbeError, Result};
