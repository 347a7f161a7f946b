//! Visual theme and styling.

use console::Style;

use super::icons::StatusKind;

/// Colors and text styles used by the terminal output.
#[derive(Debug, Clone)]
pub struct HostprobeTheme {
    /// Style for success lines (green).
    pub success: Style,
    /// Style for warnings (orange).
    pub warning: Style,
    /// Style for failures (red bold).
    pub error: Style,
    /// Style for the banner (magenta bold).
    pub header: Style,
    /// Style for probe labels (bold).
    pub label: Style,
    /// Style for detail lines (dim).
    pub dim: Style,
}

impl Default for HostprobeTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl HostprobeTheme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            header: Style::new().bold().magenta(),
            label: Style::new().bold(),
            dim: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            header: Style::new(),
            label: Style::new(),
            dim: Style::new(),
        }
    }

    /// Format a success message.
    pub fn format_success(&self, msg: &str) -> String {
        StatusKind::Success.format(self, msg)
    }

    /// Format a failure message.
    pub fn format_failure(&self, msg: &str) -> String {
        StatusKind::Failed.format(self, msg)
    }

    /// Format a warning message.
    pub fn format_warning(&self, msg: &str) -> String {
        StatusKind::Warning.format(self, msg)
    }

    /// Format the banner.
    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(format!("=== {} ===", title)))
    }

    /// Format a probe label line.
    pub fn format_label(&self, label: &str) -> String {
        format!("{}", self.label.apply_to(label))
    }

    /// Format a detail line.
    pub fn format_detail(&self, detail: &str) -> String {
        format!("{}", self.dim.apply_to(format!("  {}", detail)))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_header() {
        let theme = HostprobeTheme::plain();
        assert_eq!(theme.format_header("Host Probe"), "=== Host Probe ===");
    }

    #[test]
    fn theme_formats_failure() {
        let theme = HostprobeTheme::plain();
        let msg = theme.format_failure("SSH client library failed");
        assert!(msg.starts_with("✗"));
        assert!(msg.contains("SSH client library failed"));
    }

    #[test]
    fn theme_indents_details() {
        let theme = HostprobeTheme::plain();
        assert_eq!(theme.format_detail("Library: libssl.so.3"), "  Library: libssl.so.3");
    }

    #[test]
    fn plain_label_is_unchanged() {
        let theme = HostprobeTheme::plain();
        assert_eq!(theme.format_label("1. Testing TLS backend..."), "1. Testing TLS backend...");
    }
}
