//! Status vocabulary shared by every output path.

use super::theme::HostprobeTheme;

/// Status of a printed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Probe succeeded.
    Success,
    /// Probe failed.
    Failed,
    /// Non-fatal warning.
    Warning,
}

impl StatusKind {
    /// Unicode icon.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Failed => "✗",
            Self::Warning => "⚠",
        }
    }

    /// Icon followed by the message, styled with the given theme.
    pub fn format(self, theme: &HostprobeTheme, msg: &str) -> String {
        let text = format!("{} {}", self.icon(), msg);
        match self {
            Self::Success => theme.success.apply_to(text).to_string(),
            Self::Failed => theme.error.apply_to(text).to_string(),
            Self::Warning => theme.warning.apply_to(text).to_string(),
        }
    }
}
