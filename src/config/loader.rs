//! Configuration file discovery and loading.
//!
//! Layer order (later overrides earlier):
//! 1. Built-in candidate lists
//! 2. Config file: `--config` or `HOSTPROBE_CONFIG` path, else `./.hostprobe.yml`
//! 3. CLI flags and `HOSTPROBE_LIB*` environment variables

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::{HostprobeConfig, LibraryConfig, LibraryOverrides};
use crate::error::{HostprobeError, Result};

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".hostprobe.yml";

/// Parse config file contents.
pub fn parse_config(content: &str, path: &Path) -> Result<HostprobeConfig> {
    if content.trim().is_empty() {
        return Ok(HostprobeConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| HostprobeError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a config file from disk.
pub fn load_config_file(path: &Path) -> Result<HostprobeConfig> {
    if !path.exists() {
        return Err(HostprobeError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = fs::read_to_string(path)?;
    parse_config(&content, path)
}

/// Where an explicitly named config path came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// `--config` on the command line. Problems with the file are errors.
    Flag(PathBuf),
    /// `HOSTPROBE_CONFIG`. Problems with the file are warnings.
    Env(PathBuf),
}

impl ConfigSource {
    /// Path of the config file.
    pub fn path(&self) -> &Path {
        match self {
            Self::Flag(path) | Self::Env(path) => path,
        }
    }

    fn is_strict(&self) -> bool {
        matches!(self, Self::Flag(_))
    }
}

/// Library candidates after layering, plus any config problem that was
/// skipped over.
#[derive(Debug)]
pub struct ResolvedLibraries {
    pub libraries: LibraryConfig,
    /// Config file error that was downgraded so the run could go ahead.
    pub config_error: Option<HostprobeError>,
}

/// Find which config file applies, if any.
///
/// An explicit path is always returned (it may not exist); the default
/// file is only returned when present.
pub fn discover_config(explicit: Option<&ConfigSource>, working_dir: &Path) -> Option<PathBuf> {
    if let Some(source) = explicit {
        return Some(source.path().to_path_buf());
    }
    let default = working_dir.join(CONFIG_FILE_NAME);
    if default.is_file() {
        Some(default)
    } else {
        None
    }
}

/// Resolve library candidates from every layer.
///
/// Only a file named with `--config` can fail the call. A broken default
/// file or `HOSTPROBE_CONFIG` target is skipped and returned in
/// [`ResolvedLibraries::config_error`], so the probes still run.
pub fn resolve_libraries(
    explicit: Option<&ConfigSource>,
    working_dir: &Path,
    cli: &LibraryOverrides,
) -> Result<ResolvedLibraries> {
    let mut libraries = LibraryConfig::default();
    let mut config_error = None;

    if let Some(path) = discover_config(explicit, working_dir) {
        tracing::debug!("Loading config from {}", path.display());
        match load_config_file(&path) {
            Ok(file) => libraries.apply(&file.libraries),
            Err(e) if explicit.is_some_and(ConfigSource::is_strict) => return Err(e),
            Err(e) => {
                tracing::debug!("Ignoring config: {}", e);
                config_error = Some(e);
            }
        }
    }

    libraries.apply(cli);
    Ok(ResolvedLibraries {
        libraries,
        config_error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn empty_file_is_default_config() {
        let config = parse_config("  \n", Path::new("x.yml")).unwrap();
        assert_eq!(config, HostprobeConfig::default());
    }

    #[test]
    fn invalid_yaml_reports_path() {
        let err = parse_config("libraries: [", Path::new("/tmp/bad.yml")).unwrap_err();
        assert!(matches!(err, HostprobeError::ConfigParseError { .. }));
        assert!(err.to_string().contains("/tmp/bad.yml"));
    }

    #[test]
    fn explicit_missing_file_is_error() {
        let temp = TempDir::new().unwrap();
        let missing = ConfigSource::Flag(temp.path().join("nope.yml"));
        let err = resolve_libraries(Some(&missing), temp.path(), &LibraryOverrides::default())
            .unwrap_err();
        assert!(matches!(err, HostprobeError::ConfigNotFound { .. }));
    }

    #[test]
    fn env_missing_file_falls_back_to_builtins() {
        let temp = TempDir::new().unwrap();
        let missing = ConfigSource::Env(temp.path().join("nope.yml"));
        let resolved =
            resolve_libraries(Some(&missing), temp.path(), &LibraryOverrides::default()).unwrap();
        assert_eq!(resolved.libraries, LibraryConfig::default());
        assert!(matches!(
            resolved.config_error,
            Some(HostprobeError::ConfigNotFound { .. })
        ));
    }

    #[test]
    fn missing_default_file_uses_builtins() {
        let temp = TempDir::new().unwrap();
        let resolved = resolve_libraries(None, temp.path(), &LibraryOverrides::default()).unwrap();
        assert_eq!(resolved.libraries, LibraryConfig::default());
        assert!(resolved.config_error.is_none());
    }

    #[test]
    fn default_file_is_discovered() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "libraries:\n  ssh: [custom-ssh2.so]\n",
        )
        .unwrap();
        let resolved = resolve_libraries(None, temp.path(), &LibraryOverrides::default()).unwrap();
        assert_eq!(resolved.libraries.ssh, vec!["custom-ssh2.so".to_string()]);
    }

    #[test]
    fn malformed_default_file_is_skipped_but_cli_still_applies() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "libraries: [").unwrap();
        let cli = LibraryOverrides {
            ssh: vec!["from-cli.so".to_string()],
            ..Default::default()
        };

        let resolved = resolve_libraries(None, temp.path(), &cli).unwrap();

        assert_eq!(resolved.libraries.ssh, vec!["from-cli.so".to_string()]);
        assert_eq!(resolved.libraries.ssl, LibraryConfig::default().ssl);
        assert!(matches!(
            resolved.config_error,
            Some(HostprobeError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn malformed_flag_file_is_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.yml");
        fs::write(&path, "libraries: [").unwrap();
        let err = resolve_libraries(
            Some(&ConfigSource::Flag(path)),
            temp.path(),
            &LibraryOverrides::default(),
        )
        .unwrap_err();
        assert!(matches!(err, HostprobeError::ConfigParseError { .. }));
    }

    #[test]
    fn cli_overrides_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("probe.yml");
        fs::write(&path, "libraries:\n  ssl: [from-file.so]\n  ssh: [ssh-file.so]\n").unwrap();
        let cli = LibraryOverrides {
            ssl: vec!["from-cli.so".to_string()],
            ..Default::default()
        };
        let resolved =
            resolve_libraries(Some(&ConfigSource::Flag(path)), temp.path(), &cli).unwrap();
        assert_eq!(resolved.libraries.ssl, vec!["from-cli.so".to_string()]);
        assert_eq!(resolved.libraries.ssh, vec!["ssh-file.so".to_string()]);
    }
}
