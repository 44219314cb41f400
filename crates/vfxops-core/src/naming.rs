use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Parameters of the frame file name: `<prefix><zero padded number><ext>`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameNaming {
    pub frame_prefix: String,
    pub frame_padding: usize,
    /// Includes the leading dot, e.g. `.exr`. Matched case-sensitively.
    pub frame_ext: String,
}

impl Default for FrameNaming {
    fn default() -> Self {
        Self {
            frame_prefix: "frame_".to_string(),
            frame_padding: 4,
            frame_ext: ".exr".to_string(),
        }
    }
}

impl FrameNaming {
    pub fn new(prefix: impl Into<String>, padding: usize, ext: impl Into<String>) -> Self {
        Self {
            frame_prefix: prefix.into(),
            frame_padding: padding,
            frame_ext: ext.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frame_padding == 0 {
            return Err(ConfigError::InvalidPadding(self.frame_padding));
        }
        Ok(())
    }

    pub fn file_name(&self, frame: u64) -> String {
        format!(
            "{}{:0width$}{}",
            self.frame_prefix,
            frame,
            self.frame_ext,
            width = self.frame_padding
        )
    }
}
