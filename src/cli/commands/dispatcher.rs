//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands, RunArgs};
use crate::config::{resolve_libraries, ConfigSource, LibraryConfig, LibraryOverrides};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }
}

/// Resolve library candidates for a command, warning about a config file
/// that had to be skipped.
pub(crate) fn load_libraries(
    config: Option<&ConfigSource>,
    working_dir: &Path,
    overrides: &LibraryOverrides,
    ui: &mut dyn UserInterface,
) -> Result<LibraryConfig> {
    let resolved = resolve_libraries(config, working_dir, overrides)?;
    if let Some(e) = resolved.config_error {
        ui.warning(&format!("{}; ignoring the config file", e));
    }
    Ok(resolved.libraries)
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    working_dir: PathBuf,
    config: Option<ConfigSource>,
}

impl CommandDispatcher {
    /// Create a dispatcher; `config` is the `--config`/`HOSTPROBE_CONFIG` path, if any.
    pub fn new(working_dir: PathBuf, config: Option<ConfigSource>) -> Self {
        Self {
            working_dir,
            config,
        }
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let overrides = LibraryOverrides::from(&cli.libraries);

        match &cli.command {
            Some(Commands::Run(args)) => {
                let cmd = super::run::RunCommand::new(
                    &self.working_dir,
                    self.config.clone(),
                    overrides,
                    args.clone(),
                );
                cmd.execute(ui)
            }
            Some(Commands::List) => {
                let cmd =
                    super::list::ListCommand::new(&self.working_dir, self.config.clone(), overrides);
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                let cmd = super::run::RunCommand::new(
                    &self.working_dir,
                    self.config.clone(),
                    overrides,
                    RunArgs::default(),
                );
                cmd.execute(ui)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use clap::Parser;
    use tempfile::TempDir;

    const MISSING: [&str; 8] = [
        "--libssl",
        "libssl-hostprobe-missing.so",
        "--libcrypto",
        "libcrypto-hostprobe-missing.so",
        "--libssh2",
        "libssh2-hostprobe-missing.so",
        "--onnxruntime",
        "libonnxruntime-hostprobe-missing.so",
    ];

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn dispatch_list_prints_probes() {
        let temp = TempDir::new().unwrap();
        let dispatcher = CommandDispatcher::new(temp.path().to_path_buf(), None);
        let cli = Cli::parse_from(["hostprobe", "list"]);
        let mut ui = MockUI::new();

        let result = dispatcher.dispatch(&cli, &mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("TLS backend"));
        assert!(ui.has_message("Background removal runtime"));
    }

    #[test]
    fn dispatch_without_command_runs_probes() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join(".hostprobe.yml"),
            "libraries:\n  ssl: [libssl-hostprobe-missing.so]\n  crypto: [libcrypto-hostprobe-missing.so]\n  ssh: [libssh2-hostprobe-missing.so]\n  onnxruntime: [libonnxruntime-hostprobe-missing.so]\n",
        )
        .unwrap();
        let dispatcher = CommandDispatcher::new(temp.path().to_path_buf(), None);
        let cli = Cli::parse_from(["hostprobe"]);
        let mut ui = MockUI::new();

        let result = dispatcher.dispatch(&cli, &mut ui).unwrap();

        assert_eq!(result.exit_code, 0);
        assert_eq!(ui.failures().len(), 4);
    }

    #[test]
    fn dispatch_without_command_applies_library_flags() {
        let temp = TempDir::new().unwrap();
        let dispatcher = CommandDispatcher::new(temp.path().to_path_buf(), None);
        let cli = Cli::parse_from(std::iter::once("hostprobe").chain(MISSING));
        let mut ui = MockUI::new();

        let result = dispatcher.dispatch(&cli, &mut ui).unwrap();

        assert_eq!(result.exit_code, 0);
        assert_eq!(ui.failures().len(), 4);
        assert!(ui.has_failure("libssh2-hostprobe-missing.so"));
        assert!(ui.has_failure("libonnxruntime-hostprobe-missing.so"));
    }

    #[test]
    fn malformed_discovered_config_warns_and_still_runs() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(".hostprobe.yml"), "libraries: [").unwrap();
        let dispatcher = CommandDispatcher::new(temp.path().to_path_buf(), None);
        let cli = Cli::parse_from(std::iter::once("hostprobe").chain(MISSING));
        let mut ui = MockUI::new();

        let result = dispatcher.dispatch(&cli, &mut ui).unwrap();

        assert_eq!(result.exit_code, 0);
        assert_eq!(ui.warnings().len(), 1);
        assert!(ui.warnings()[0].contains("Failed to parse config"));
        assert_eq!(ui.labels().len(), 4);
    }

    #[test]
    fn env_config_pointing_nowhere_warns_and_still_runs() {
        let temp = TempDir::new().unwrap();
        let dispatcher = CommandDispatcher::new(
            temp.path().to_path_buf(),
            Some(ConfigSource::Env(temp.path().join("gone.yml"))),
        );
        let cli = Cli::parse_from(std::iter::once("hostprobe").chain(MISSING));
        let mut ui = MockUI::new();

        let result = dispatcher.dispatch(&cli, &mut ui).unwrap();

        assert_eq!(result.exit_code, 0);
        assert!(ui.warnings()[0].contains("Configuration not found"));
        assert_eq!(ui.failures().len(), 4);
    }
}
