//! Terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] writing the report to stdout
//! - [`MockUI`] capturing output for tests
//!
//! # Example
//!
//! ```
//! use hostprobe::ui::{create_ui, OutputMode};
//!
//! let mut ui = create_ui(OutputMode::Quiet, true);
//! ui.success("TLS backend successful");
//! ```

pub mod icons;
pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use icons::StatusKind;
pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, HostprobeTheme};

/// Trait for user interface output.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Show the banner.
    fn show_header(&mut self, title: &str);

    /// Display an informational line.
    fn message(&mut self, msg: &str);

    /// Display a probe label line ("1. Testing ...").
    fn label(&mut self, msg: &str);

    /// Display an indented detail line under a result.
    fn detail(&mut self, msg: &str);

    /// Display a positive status line.
    fn success(&mut self, msg: &str);

    /// Display a negative status line. Goes to stdout with the report.
    fn failure(&mut self, msg: &str);

    /// Display a non-fatal tool warning (stderr, shown in every mode).
    fn warning(&mut self, msg: &str);

    /// Display a tool-level error (stderr).
    fn error(&mut self, msg: &str);
}
