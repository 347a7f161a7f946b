//! The `hostprobe run` command (also the default).

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::cli::args::RunArgs;
use crate::config::{ConfigSource, LibraryOverrides};
use crate::error::Result;
use crate::runner::{DiagnosticRunner, RunReport};
use crate::ui::UserInterface;

use super::dispatcher::{load_libraries, Command, CommandResult};

/// The run command implementation.
pub struct RunCommand {
    working_dir: PathBuf,
    config: Option<ConfigSource>,
    overrides: LibraryOverrides,
    args: RunArgs,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(
        working_dir: &Path,
        config: Option<ConfigSource>,
        overrides: LibraryOverrides,
        args: RunArgs,
    ) -> Self {
        Self {
            working_dir: working_dir.to_path_buf(),
            config,
            overrides,
            args,
        }
    }
}

impl Command for RunCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let libraries =
            load_libraries(self.config.as_ref(), &self.working_dir, &self.overrides, ui)?;

        let report = DiagnosticRunner::new(libraries).run(ui);

        if self.args.json {
            write_json(&report, &mut io::stdout().lock())?;
        }

        // Probe failures are the report, not a command failure.
        Ok(CommandResult::success())
    }
}

/// Write the report as pretty JSON. A reader that went away early
/// (`hostprobe run --json | head`) is not an error.
fn write_json(report: &RunReport, out: &mut impl Write) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    match writeln!(out, "{}", json).and_then(|()| out.flush()) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            tracing::debug!("stdout closed before the report was written");
            Ok(())
        }
        other => Ok(other?),
    }
}
