use serde::{Deserialize, Serialize};
use vfxops_core::PublishRecord;

pub const MANIFEST_SCHEMA: &str = "vfx-ops-toolkit.publish_manifest";
pub const MANIFEST_FILE: &str = "publish.json";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishManifest {
    pub schema: String,
    pub record: PublishRecord,
    pub source_render_dir: String,
}

impl PublishManifest {
    pub fn new(record: PublishRecord, source_render_dir: impl Into<String>) -> Self {
        Self {
            schema: MANIFEST_SCHEMA.to_string(),
            record,
            source_render_dir: source_render_dir.into(),
        }
    }
}
