//! Error types for the doc smell engine
//!
//! Malformed documentation is never an error here, it becomes a finding.
//! These errors cover the surrounding plumbing: reading files, loading
//! options and getting a syntax tree out of tree-sitter.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for doc smell operations
#[derive(Error, Debug)]
pub enum DocSmellError {
    /// IO errors (file operations, directory access, etc.)
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON option file errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// YAML option file errors
    #[error("YAML error: {message}")]
    Yaml {
        message: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// Option file with an extension we don't know how to read
    #[error("Unsupported options file {path:?}, expected .json, .yaml or .yml")]
    UnsupportedOptionsFile { path: PathBuf },

    /// Tree-sitter produced no tree for the source
    #[error("Parse error in file {file:?}: {message}")]
    Parse { file: PathBuf, message: String },

    /// Tree-sitter language setup errors
    #[error("Failed to set up tree-sitter language: {message}")]
    TreeSitterLanguage { message: String },
}

/// Result type alias for doc smell operations
pub type DocResult<T> = Result<T, DocSmellError>;

impl From<std::io::Error> for DocSmellError {
    fn from(err: std::io::Error) -> Self {
        DocSmellError::Io {
            source: err,
            message: "IO operation failed".to_string(),
        }
    }
}

impl From<serde_json::Error> for DocSmellError {
    fn from(err: serde_json::Error) -> Self {
        DocSmellError::Json {
            source: err,
            message: "JSON operation failed".to_string(),
        }
    }
}

impl From<serde_yaml::Error> for DocSmellError {
    fn from(err: serde_yaml::Error) -> Self {
        DocSmellError::Yaml {
            source: err,
            message: "YAML operation failed".to_string(),
        }
    }
}

/// Helper trait for converting IO errors with context
pub trait IoContext<T> {
    fn with_io_context(self, message: &str) -> DocResult<T>;
}

impl<T> IoContext<T> for Result<T, std::io::Error> {
    fn with_io_context(self, message: &str) -> DocResult<T> {
        self.map_err(|e| DocSmellError::Io {
            message: message.to_string(),
            source: e,
        })
    }
}
