//! Native library loading and typed bindings.
//!
//! - [`library`] - `dlopen`/`dlsym` wrapper shared by every binding
//! - [`openssl`] - libssl and libcrypto
//! - [`libssh2`] - libssh2
//! - [`onnxruntime`] - ONNX Runtime C API

pub mod libssh2;
pub mod library;
pub mod onnxruntime;
pub mod openssl;

pub use library::NativeLibrary;
pub use libssh2::LibSsh2;
pub use onnxruntime::OnnxRuntime;
pub use openssl::{LibCrypto, LibSsl, VersionInfo};
