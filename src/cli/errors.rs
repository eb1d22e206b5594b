use std::path::PathBuf;

use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing required argument: {arg}")]
    MissingArgument { arg: String },

    #[error("Config error: {0}")]
    Config(exifstrip::Error),

    #[error("Cannot clean {folder:?}: {source}")]
    Batch {
        folder: PathBuf,
        #[source]
        source: exifstrip::Error,
    },

    #[error(transparent)]
    Library(#[from] exifstrip::Error),
}
