//! Error types for atlas-data

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to parse authored module {module}: {message}")]
    ModuleParse { module: String, message: String },

    #[error("Duplicate country code {code}: declared by both {first} and {second}")]
    DuplicateCode {
        code: String,
        first: String,
        second: String,
    },

    #[error("Authored module for {module} declares no country code")]
    MissingCode { module: String },

    #[error("Failed to serialize authored module: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid module path: {message}")]
    InvalidPath { message: String },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },
}

impl Error {
    pub fn invalid_path(message: impl Into<String>) -> Self {
        Self::InvalidPath {
            message: message.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
