use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::model::task::TaskId;

/// Rejected store operations. The collection is left untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaskError {
    #[error("Task cannot be empty")]
    EmptyText,

    #[error("Task {0} not found")]
    NotFound(TaskId),

    #[error("No task ids left")]
    IdsExhausted,
}

/// Storage read/write failures. Never fatal: in-memory state stays authoritative.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not encode tasks: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("could not decode stored tasks: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("stored tasks use version {found}, newest supported is {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not determine home directory")]
    NoHomeDir,

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
