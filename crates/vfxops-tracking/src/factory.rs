use std::path::PathBuf;

use vfxops_core::ConfigError;

use crate::{JsonTracker, Tracker};

pub const DEFAULT_BACKEND: &str = "json";

/// Pick a tracker backend by name. Unknown names fail before any I/O.
pub fn make_tracker(backend: &str, location: PathBuf) -> Result<Box<dyn Tracker>, ConfigError> {
    match backend {
        "json" => Ok(Box::new(JsonTracker::new(location))),
        other => Err(ConfigError::UnsupportedBackend(other.to_string())),
    }
}
