//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. Every call is also appended to a
//! single ordered transcript so tests can check line ordering.
//!
//! # Example
//!
//! ```
//! use hostprobe::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.label("1. Testing TLS backend...");
//! ui.success("TLS backend successful");
//!
//! assert!(ui.has_success("TLS backend"));
//! assert_eq!(ui.transcript().len(), 2);
//! ```

use super::{OutputMode, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    headers: Vec<String>,
    messages: Vec<String>,
    labels: Vec<String>,
    details: Vec<String>,
    successes: Vec<String>,
    failures: Vec<String>,
    warnings: Vec<String>,
    transcript: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured probe labels.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Get all captured detail lines.
    pub fn details(&self) -> &[String] {
        &self.details
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured failure messages.
    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    /// Get all captured warnings.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Every call in order, prefixed with its kind (`success: ...`).
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific failure was shown.
    pub fn has_failure(&self, msg: &str) -> bool {
        self.failures.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific detail was shown.
    pub fn has_detail(&self, msg: &str) -> bool {
        self.details.iter().any(|m| m.contains(msg))
    }

    fn record(&mut self, kind: &str, msg: &str) {
        self.transcript.push(format!("{}: {}", kind, msg));
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
        self.record("header", title);
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
        self.record("message", msg);
    }

    fn label(&mut self, msg: &str) {
        self.labels.push(msg.to_string());
        self.record("label", msg);
    }

    fn detail(&mut self, msg: &str) {
        self.details.push(msg.to_string());
        self.record("detail", msg);
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
        self.record("success", msg);
    }

    fn failure(&mut self, msg: &str) {
        self.failures.push(msg.to_string());
        self.record("failure", msg);
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
        self.record("warning", msg);
    }

    fn error(&mut self, msg: &str) {
        self.record("error", msg);
    }
}
