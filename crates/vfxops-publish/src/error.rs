use std::path::PathBuf;

use thiserror::Error;
use vfxops_core::ConfigError;

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("shot not eligible for publish: shot directory not found: {0}")]
    ShotMissing(PathBuf),
    #[error("shot not eligible for publish: renders directory not found: {0}")]
    RendersMissing(PathBuf),
    #[error("invalid {field} {value:?}: must be a single non-empty path component")]
    InvalidIdentifier { field: &'static str, value: String },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Tracking(#[from] anyhow::Error),
}

impl PublishError {
    /// True for the precondition failures that leave the tracker untouched.
    pub fn is_not_eligible(&self) -> bool {
        matches!(self, PublishError::ShotMissing(_) | PublishError::RendersMissing(_))
    }
}

/// Show, shot and version become directory names; reject anything that would
/// not stay a single component.
pub fn check_identifier(field: &'static str, value: &str) -> Result<(), PublishError> {
    let bad = value.is_empty()
        || value == "."
        || value == ".."
        || value.contains('/')
        || value.contains('\\')
        || value.contains('\0');
    if bad {
        return Err(PublishError::InvalidIdentifier {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}
