use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use vfxops_core::{ConfigError, FrameNaming};

pub const DEFAULT_CONFIG_FILE: &str = "toolkit.yaml";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub shows_root: String,
    pub publish_root: String,
    pub log_dir: String,
    pub naming: FrameNaming,
    pub tracking: TrackingConfig,
    pub thresholds: ThresholdsConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackingConfig {
    pub backend: String, // "json"
    pub json_path: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdsConfig {
    pub disk_warning_mb: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            shows_root: "shows".to_string(),
            publish_root: "published".to_string(),
            log_dir: "logs".to_string(),
            naming: FrameNaming::default(),
            tracking: TrackingConfig::default(),
            thresholds: ThresholdsConfig::default(),
        }
    }
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            backend: vfxops_tracking::DEFAULT_BACKEND.to_string(),
            json_path: "data/tracking_db.json".to_string(),
        }
    }
}

impl Default for ThresholdsConfig {
    fn default() -> Self {
        Self { disk_warning_mb: 500.0 }
    }
}

impl Config {
    /// Load `explicit` if given, else `<cwd>/toolkit.yaml` if present, else defaults.
    pub fn load(explicit: Option<&Path>, cwd: &Path) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(p) => cwd.join(p),
            None => {
                let candidate = cwd.join(DEFAULT_CONFIG_FILE);
                if !candidate.exists() {
                    return Ok(Self::default());
                }
                candidate
            }
        };
        let text = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        Self::from_yaml_str(&text, &path)
    }

    pub fn from_yaml_str(text: &str, origin: &Path) -> Result<Self, ConfigError> {
        let malformed = |e: serde_yaml::Error| ConfigError::Malformed {
            path: origin.to_path_buf(),
            message: e.to_string(),
        };
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let value: Value = serde_yaml::from_str(text).map_err(malformed)?;
        match value {
            Value::Null => Ok(Self::default()),
            Value::Mapping(_) => serde_yaml::from_value(value).map_err(malformed),
            other => Err(ConfigError::NotAMapping {
                found: yaml_type_name(&other),
            }),
        }
    }

    /// Expand `~` and anchor relative paths at `cwd`.
    pub fn resolve_path(cwd: &Path, raw: &str) -> PathBuf {
        let expanded = shellexpand::tilde(raw);
        cwd.join(expanded.as_ref())
    }

    pub fn shows_root(&self, cwd: &Path) -> PathBuf {
        Self::resolve_path(cwd, &self.shows_root)
    }

    pub fn publish_root(&self, cwd: &Path) -> PathBuf {
        Self::resolve_path(cwd, &self.publish_root)
    }

    pub fn log_dir(&self, cwd: &Path) -> PathBuf {
        Self::resolve_path(cwd, &self.log_dir)
    }

    pub fn tracking_path(&self, cwd: &Path) -> PathBuf {
        Self::resolve_path(cwd, &self.tracking.json_path)
    }
}

fn yaml_type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
