//! Terminal UI writing to stdout.

use console::Term;
use std::io::Write;

use super::{should_use_colors, HostprobeTheme, OutputMode, UserInterface};

/// Terminal UI implementation.
///
/// Report lines (banner, labels, results) go to stdout. Only tool-level
/// errors and warnings go to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: HostprobeTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a terminal UI, picking colors from the environment.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            HostprobeTheme::new()
        } else {
            HostprobeTheme::plain()
        };
        Self::with_theme(mode, theme)
    }

    /// Create a terminal UI with an explicit theme.
    pub fn with_theme(mode: OutputMode, theme: HostprobeTheme) -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_messages() {
            writeln!(self.out, "{}", self.theme.format_header(title)).ok();
        }
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_messages() {
            writeln!(self.out, "{}", msg).ok();
        }
    }

    fn label(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.format_label(msg)).ok();
        }
    }

    fn detail(&mut self, msg: &str) {
        if self.mode.shows_messages() {
            writeln!(self.out, "{}", self.theme.format_detail(msg)).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn failure(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.format_failure(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_failure(msg)).ok();
    }
}

/// Create the UI for a run.
pub fn create_ui(mode: OutputMode, no_color: bool) -> Box<dyn UserInterface> {
    if no_color {
        Box::new(TerminalUI::with_theme(mode, HostprobeTheme::plain()))
    } else {
        Box::new(TerminalUI::new(mode))
    }
}
