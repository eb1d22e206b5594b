//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Covers the fail-fast checks done before a batch starts, directory scanning,
//! and configuration/preset persistence.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("ExifTool path not selected")]
    ConfigurationMissing,

    #[error("ExifTool not found at {path:?}")]
    InvalidToolPath { path: PathBuf },

    #[error("Not a directory: {path:?}")]
    NotADirectory { path: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not save config {path:?}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No per-user data directory available")]
    NoDataDir,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid preset file: {0}")]
    InvalidPreset(String),
}
