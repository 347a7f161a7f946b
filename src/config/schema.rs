//! Configuration schema definitions.
//!
//! [`HostprobeConfig`] maps to the optional `.hostprobe.yml` file;
//! [`LibraryConfig`] is the resolved set of candidates each probe loads.

use serde::Deserialize;

/// Root structure of `.hostprobe.yml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HostprobeConfig {
    /// Per-library candidate overrides.
    pub libraries: LibraryOverrides,
}

/// Candidate lists from a config layer. An empty list means "not set".
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LibraryOverrides {
    /// libssl names or paths.
    pub ssl: Vec<String>,

    /// libcrypto names or paths.
    pub crypto: Vec<String>,

    /// libssh2 names or paths.
    pub ssh: Vec<String>,

    /// onnxruntime names or paths.
    pub onnxruntime: Vec<String>,
}

/// Resolved library candidates, tried in order by each probe.
#[derive(Debug, Clone, PartialEq)]
pub struct LibraryConfig {
    pub ssl: Vec<String>,
    pub crypto: Vec<String>,
    pub ssh: Vec<String>,
    pub onnxruntime: Vec<String>,
}

fn owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            ssl: owned(&[
                "libssl.so.3",
                "libssl.so.1.1",
                "libssl.so",
                "libssl.3.dylib",
                "libssl.dylib",
            ]),
            crypto: owned(&[
                "libcrypto.so.3",
                "libcrypto.so.1.1",
                "libcrypto.so",
                "libcrypto.3.dylib",
                "libcrypto.dylib",
            ]),
            ssh: owned(&[
                "libssh2.so.1",
                "libssh2.so",
                "libssh2.1.dylib",
                "libssh2.dylib",
            ]),
            onnxruntime: owned(&[
                "libonnxruntime.so",
                "libonnxruntime.so.1",
                "libonnxruntime.dylib",
            ]),
        }
    }
}

impl LibraryConfig {
    /// Apply a layer on top of this one. Non-empty lists replace.
    pub fn apply(&mut self, layer: &LibraryOverrides) {
        fn replace(target: &mut Vec<String>, source: &[String]) {
            if !source.is_empty() {
                *target = source.to_vec();
            }
        }

        replace(&mut self.ssl, &layer.ssl);
        replace(&mut self.crypto, &layer.crypto);
        replace(&mut self.ssh, &layer.ssh);
        replace(&mut self.onnxruntime, &layer.onnxruntime);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_try_soname_before_dev_symlink() {
        let config = LibraryConfig::default();
        assert_eq!(config.ssl[0], "libssl.so.3");
        assert_eq!(config.crypto[0], "libcrypto.so.3");
        assert_eq!(config.ssh[0], "libssh2.so.1");
        assert_eq!(config.onnxruntime[0], "libonnxruntime.so");
    }

    #[test]
    fn apply_replaces_only_non_empty_lists() {
        let mut config = LibraryConfig::default();
        config.apply(&LibraryOverrides {
            ssh: vec!["/opt/ssh2/lib/libssh2.so".to_string()],
            ..Default::default()
        });
        assert_eq!(config.ssh, vec!["/opt/ssh2/lib/libssh2.so".to_string()]);
        assert_eq!(config.ssl, LibraryConfig::default().ssl);
    }

    #[test]
    fn parses_yaml_overrides() {
        let yaml = "libraries:\n  crypto: [libcrypto.so.1.1]\n";
        let config: HostprobeConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.libraries.crypto, vec!["libcrypto.so.1.1".to_string()]);
        assert!(config.libraries.ssl.is_empty());
    }

    #[test]
    fn rejects_unknown_keys() {
        let yaml = "libraries:\n  openssh: [libssh.so]\n";
        assert!(serde_yaml::from_str::<HostprobeConfig>(yaml).is_err());
    }
}
