use std::path::PathBuf;

use opendota_api::OpenDotaError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("OpenDota API error: {0}")]
    Api(#[from] OpenDotaError),

    #[error("Required file not found: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("Invalid content in {} at line {line}: {message}", .path.display())]
    InvalidFile {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Logging setup error: {0}")]
    Logging(String),
}

impl AppError {
    /// Map a `NotFound` IO error on `path` to [`AppError::MissingFile`].
    pub fn from_io_at(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => AppError::MissingFile(path.into()),
            _ => AppError::Io(err),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
