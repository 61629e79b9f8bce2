use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading exclusions or scanning a tree.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("failed to read config '{path}': {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config '{path}': {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),

    #[error("invalid glob pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        source: globset::Error,
    },

    #[error("failed to list '{path}': {source}")]
    Walk {
        path: PathBuf,
        source: ignore::Error,
    },

    #[error("I/O error on '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ScanError>;
