//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::parser::ValueSource;
use clap::{ArgMatches, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::{ConfigSource, LibraryOverrides};

/// hostprobe - check native TLS, crypto, SSH and inference libraries on this host.
#[derive(Debug, Parser)]
#[command(name = "hostprobe")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides ./.hostprobe.yml)
    #[arg(short, long, global = true, env = "HOSTPROBE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Show the library candidates each probe tries
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only show probe status lines
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(flatten)]
    pub libraries: LibraryArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Tag the config path with where it came from.
    ///
    /// `matches` must be the matches this `Cli` was built from.
    pub fn config_source(&self, matches: &ArgMatches) -> Option<ConfigSource> {
        let path = self.config.clone()?;
        match matches.value_source("config") {
            Some(ValueSource::EnvVariable) => Some(ConfigSource::Env(path)),
            _ => Some(ConfigSource::Flag(path)),
        }
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run every probe (default if no command specified)
    Run(RunArgs),

    /// List probes in run order with their library candidates
    List,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Library candidate overrides, accepted with or without a subcommand.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct LibraryArgs {
    /// libssl names or paths to try (comma-separated or repeated)
    #[arg(long, global = true, env = "HOSTPROBE_LIBSSL", value_delimiter = ',')]
    pub libssl: Vec<String>,

    /// libcrypto names or paths to try
    #[arg(long, global = true, env = "HOSTPROBE_LIBCRYPTO", value_delimiter = ',')]
    pub libcrypto: Vec<String>,

    /// libssh2 names or paths to try
    #[arg(long, global = true, env = "HOSTPROBE_LIBSSH2", value_delimiter = ',')]
    pub libssh2: Vec<String>,

    /// onnxruntime names or paths to try
    #[arg(long, global = true, env = "HOSTPROBE_ONNXRUNTIME", value_delimiter = ',')]
    pub onnxruntime: Vec<String>,
}

impl From<&LibraryArgs> for LibraryOverrides {
    fn from(args: &LibraryArgs) -> Self {
        Self {
            ssl: args.libssl.clone(),
            crypto: args.libcrypto.clone(),
            ssh: args.libssh2.clone(),
            onnxruntime: args.onnxruntime.clone(),
        }
    }
}

/// Arguments for the `run` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RunArgs {
    /// Print the report as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, FromArgMatches};

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_args_has_no_command() {
        let cli = Cli::try_parse_from(["hostprobe"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.debug);
    }

    #[test]
    fn run_accepts_json_and_overrides() {
        let cli = Cli::try_parse_from([
            "hostprobe",
            "run",
            "--json",
            "--libssh2",
            "a.so,b.so",
            "--libssl",
            "ssl.so",
        ])
        .unwrap();
        assert!(matches!(cli.command, Some(Commands::Run(RunArgs { json: true }))));
        assert_eq!(cli.libraries.libssh2, vec!["a.so", "b.so"]);
        let overrides = LibraryOverrides::from(&cli.libraries);
        assert_eq!(overrides.ssl, vec!["ssl.so".to_string()]);
        assert!(overrides.crypto.is_empty());
    }

    #[test]
    fn library_overrides_without_subcommand() {
        let cli = Cli::try_parse_from(["hostprobe", "--libcrypto", "/opt/ssl/libcrypto.so.3"])
            .unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.libraries.libcrypto, vec!["/opt/ssl/libcrypto.so.3"]);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "hostprobe",
            "list",
            "--verbose",
            "--no-color",
            "--onnxruntime",
            "ort.so",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert_eq!(cli.libraries.onnxruntime, vec!["ort.so"]);
        assert!(matches!(cli.command, Some(Commands::List)));
    }

    #[test]
    fn config_flag_is_strict_source() {
        let matches = Cli::command()
            .try_get_matches_from(["hostprobe", "--config", "custom.yml"])
            .unwrap();
        let cli = Cli::from_arg_matches(&matches).unwrap();
        assert_eq!(
            cli.config_source(&matches),
            Some(ConfigSource::Flag(PathBuf::from("custom.yml")))
        );
    }

    #[test]
    fn completions_requires_shell() {
        assert!(Cli::try_parse_from(["hostprobe", "completions"]).is_err());
        assert!(Cli::try_parse_from(["hostprobe", "completions", "bash"]).is_ok());
    }
}
