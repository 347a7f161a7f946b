//! Configuration loading for hostprobe.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and layering in [`loader`]
//!
//! # Example
//!
//! ```
//! use hostprobe::config::{resolve_libraries, LibraryOverrides};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".hostprobe.yml"), "libraries:\n  ssh: [libssh2.so.1]\n").unwrap();
//!
//! let resolved = resolve_libraries(None, temp.path(), &LibraryOverrides::default()).unwrap();
//! assert_eq!(resolved.libraries.ssh, vec!["libssh2.so.1".to_string()]);
//! assert!(resolved.config_error.is_none());
//! ```

pub mod loader;
pub mod schema;

pub use loader::{
    discover_config, load_config_file, parse_config, resolve_libraries, ConfigSource,
    ResolvedLibraries, CONFIG_FILE_NAME,
};
pub use schema::{HostprobeConfig, LibraryConfig, LibraryOverrides};
