//! The `hostprobe list` command.

use std::path::{Path, PathBuf};

use crate::config::{ConfigSource, LibraryOverrides};
use crate::error::Result;
use crate::probes::default_probes;
use crate::ui::UserInterface;

use super::dispatcher::{load_libraries, Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    working_dir: PathBuf,
    config: Option<ConfigSource>,
    overrides: LibraryOverrides,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(
        working_dir: &Path,
        config: Option<ConfigSource>,
        overrides: LibraryOverrides,
    ) -> Self {
        Self {
            working_dir: working_dir.to_path_buf(),
            config,
            overrides,
        }
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let libraries =
            load_libraries(self.config.as_ref(), &self.working_dir, &self.overrides, ui)?;

        for (index, probe) in default_probes(&libraries).iter().enumerate() {
            ui.message(&format!("{}. {}", index + 1, probe.label()));
            ui.detail(&probe.candidates().join(", "));
        }

        Ok(CommandResult::success())
    }
}
