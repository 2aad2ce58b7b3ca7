//! Error types for lint-core

use std::path::PathBuf;

/// Result type for lint-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving, installing or writing configuration
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An external process exited with a non-zero status.
    #[error("command failed{}: {command}", exit_suffix(.exit_code))]
    ExternalCommand {
        /// The reconstructed command line.
        command: String,
        /// Exit code, if the process was not killed by a signal.
        exit_code: Option<i32>,
    },

    /// Registry output did not match the expected peer dependency schema.
    #[error("failed to parse output of `{command}`: {source}")]
    Parse {
        command: String,
        #[source]
        source: serde_json::Error,
    },

    /// A template copy or config write failed.
    #[error("failed to write {path}: {source}")]
    FileOperation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The package manager binary could not be spawned.
    #[error("{tool} not found on PATH{}", .hint.as_deref().unwrap_or(""))]
    PackageManagerNotFound { tool: String, hint: Option<String> },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize config document: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn file_operation(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileOperation {
            path: path.into(),
            source,
        }
    }
}

fn exit_suffix(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!(" (exit code {})", code),
        None => " (terminated by signal)".to_string(),
    }
}
