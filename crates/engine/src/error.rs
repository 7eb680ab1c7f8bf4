use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Errors that stop the pipeline before any worker is dispatched.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to read file list '{path}': {source}")]
    FilesFrom {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Failure of a single worker. Always local: it is reported and skipped, never fatal.
#[derive(Debug, Error)]
pub enum WorkerError {
    #[error("Failed to open '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Worker for '{path}' crashed: {message}")]
    Crashed { path: PathBuf, message: String },

    #[error("Failed to start worker for '{path}': {source}")]
    Spawn {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Worker for '{path}' did not report within {waited:?}")]
    TimedOut { path: PathBuf, waited: Duration },
}

impl WorkerError {
    /// The identifier the failed worker was bound to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Open { path, .. }
            | Self::Read { path, .. }
            | Self::Crashed { path, .. }
            | Self::Spawn { path, .. }
            | Self::TimedOut { path, .. } => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
