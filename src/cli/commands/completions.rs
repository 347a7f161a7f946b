//! `hostprobe completions <shell>`.
//!
//! Prints a completion script covering the subcommands and every global
//! flag, including the per-library overrides.

use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::{Cli, CompletionsArgs};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Binary name the scripts complete for.
const BIN_NAME: &str = "hostprobe";

/// The completions command implementation.
pub struct CompletionsCommand {
    args: CompletionsArgs,
}

impl CompletionsCommand {
    /// Create a new completions command.
    pub fn new(args: CompletionsArgs) -> Self {
        Self { args }
    }
}

impl Command for CompletionsCommand {
    fn execute(&self, _ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut out = io::stdout().lock();
        write_completions(self.args.shell, &mut out);
        out.flush()?;
        Ok(CommandResult::success())
    }
}

fn write_completions(shell: Shell, out: &mut impl Write) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, BIN_NAME, out);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script(shell: Shell) -> String {
        let mut buf = Vec::new();
        write_completions(shell, &mut buf);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn bash_offers_subcommands_and_library_flags() {
        let output = script(Shell::Bash);
        assert!(output.contains("list"));
        assert!(output.contains("completions"));
        assert!(output.contains("--libssh2"));
        assert!(output.contains("--json"));
    }

    #[test]
    fn zsh_offers_library_flags() {
        let output = script(Shell::Zsh);
        assert!(output.contains("--libcrypto"));
        assert!(output.contains("--libssl"));
    }

    #[test]
    fn fish_offers_onnxruntime_override() {
        let output = script(Shell::Fish);
        assert!(output.contains("onnxruntime"));
        assert!(output.contains("-c hostprobe") || output.contains("-c 'hostprobe'"));
    }
}
