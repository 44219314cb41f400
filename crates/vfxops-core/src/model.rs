use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Frames present and missing in one shot's render directory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotValidationResult {
    pub show: String,
    pub shot: String,
    pub render_dir: PathBuf,
    pub frames_found: Vec<u64>,
    pub missing_frames: Vec<u64>,
}

impl ShotValidationResult {
    pub fn has_gaps(&self) -> bool {
        !self.missing_frames.is_empty()
    }
}

/// Recursive size of one shot's render directory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotDiskUsage {
    pub show: String,
    pub shot: String,
    pub render_dir: PathBuf,
    pub total_bytes: u64,
    pub file_count: u64,
}

impl ShotDiskUsage {
    pub fn total_mb(&self) -> f64 {
        bytes_to_mb(self.total_bytes)
    }

    pub fn exceeds_threshold(&self, threshold_mb: f64) -> bool {
        self.total_mb() >= threshold_mb
    }
}

pub fn bytes_to_mb(num_bytes: u64) -> f64 {
    num_bytes as f64 / (1024.0 * 1024.0)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublishStatus {
    Ok,
    Warnings,
    Failed,
}

impl PublishStatus {
    /// `Ok` only when at least one frame exists and the sequence has no holes.
    pub fn from_frames(frames_found: &[u64], missing_frames: &[u64]) -> Self {
        if !frames_found.is_empty() && missing_frames.is_empty() {
            PublishStatus::Ok
        } else {
            PublishStatus::Warnings
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PublishStatus::Ok => "ok",
            PublishStatus::Warnings => "warnings",
            PublishStatus::Failed => "failed",
        }
    }
}

impl std::fmt::Display for PublishStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Point-in-time snapshot of a shot at a version tag.
///
/// Serialized as a flat object with exactly these field names; rows carrying
/// any other key are rejected so the tracking store can skip them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PublishRecord {
    pub show: String,
    pub shot: String,
    pub version: String,
    pub status: PublishStatus,
    pub note: String,
    pub timestamp_utc: String,
    pub frames_found: Vec<u64>,
    pub missing_frames: Vec<u64>,
    pub total_bytes: u64,
    pub file_count: u64,
}

impl PublishRecord {
    pub fn matches(&self, show: Option<&str>, shot: Option<&str>) -> bool {
        show.map_or(true, |s| self.show == s) && shot.map_or(true, |s| self.shot == s)
    }
}
