//! Output verbosity mode.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Also show the candidates each probe tries.
    Verbose,
    /// Banner, environment info, probe results and details.
    #[default]
    Normal,
    /// Probe status lines only.
    Quiet,
    /// Show nothing except tool warnings and errors (used for `--json`).
    Silent,
}

impl OutputMode {
    /// Check if this mode shows candidate lists and other debugging aids.
    pub fn shows_verbose(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows informational messages.
    pub fn shows_messages(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Check if this mode shows probe status lines.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Silent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_mode_shows_messages() {
        assert!(OutputMode::Verbose.shows_messages());
        assert!(OutputMode::Normal.shows_messages());
        assert!(!OutputMode::Quiet.shows_messages());
        assert!(!OutputMode::Silent.shows_messages());
    }

    #[test]
    fn output_mode_shows_status() {
        assert!(OutputMode::Verbose.shows_status());
        assert!(OutputMode::Normal.shows_status());
        assert!(OutputMode::Quiet.shows_status());
        assert!(!OutputMode::Silent.shows_status());
    }

    #[test]
    fn only_verbose_shows_verbose() {
        assert!(OutputMode::Verbose.shows_verbose());
        assert!(!OutputMode::Normal.shows_verbose());
    }

    #[test]
    fn default_is_normal() {
        assert_eq!(OutputMode::default(), OutputMode::Normal);
    }
}
