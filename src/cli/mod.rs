//! Command-line interface for hostprobe.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, CompletionsArgs, LibraryArgs, RunArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
