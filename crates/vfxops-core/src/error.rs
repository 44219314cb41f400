use std::path::PathBuf;

use thiserror::Error;

/// Raised before any scan or store I/O when the resolved configuration is unusable.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config {path}: {message}")]
    Malformed { path: PathBuf, message: String },
    #[error("config must be a mapping, got {found}")]
    NotAMapping { found: &'static str },
    #[error("unsupported tracking backend: {0}. Only 'json' is implemented.")]
    UnsupportedBackend(String),
    #[error("frame_padding must be at least 1, got {0}")]
    InvalidPadding(usize),
}
