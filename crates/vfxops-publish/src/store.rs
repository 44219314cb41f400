use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use vfxops_core::PublishRecord;
use vfxops_scan::render_dir;

use crate::manifest::{PublishManifest, MANIFEST_FILE};

/// Publish root on disk: `<root>/<show>/<shot>/<version>/publish.json`.
#[derive(Clone, Debug)]
pub struct FsPublishStore {
    pub root: PathBuf,
}

impl FsPublishStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn version_dir(&self, show: &str, shot: &str, version: &str) -> PathBuf {
        self.root.join(show).join(shot).join(version)
    }

    pub fn manifest_path(&self, record: &PublishRecord) -> PathBuf {
        self.version_dir(&record.show, &record.shot, &record.version).join(MANIFEST_FILE)
    }

    /// Write the manifest for `record`, replacing any earlier one for the same
    /// show/shot/version. Returns the manifest path.
    pub fn write_manifest(&self, shows_root: &Path, record: &PublishRecord) -> Result<PathBuf> {
        for (field, value) in [("show", &record.show), ("shot", &record.shot), ("version", &record.version)] {
            crate::check_identifier(field, value)?;
        }
        let source = render_dir(shows_root, &record.show, &record.shot);
        let manifest = PublishManifest::new(record.clone(), source.to_string_lossy());

        let path = self.manifest_path(record);
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).with_context(|| format!("create publish dir {}", dir.display()))?;
        }
        let bytes = serde_json::to_vec_pretty(&manifest)?;
        std::fs::write(&path, bytes).with_context(|| format!("write manifest {}", path.display()))?;
        tracing::info!(path = %path.display(), "publish manifest written");
        Ok(path)
    }

    pub fn read_manifest(&self, path: &Path) -> Result<PublishManifest> {
        let bytes = std::fs::read(path).with_context(|| format!("read manifest {}", path.display()))?;
        let manifest = serde_json::from_slice(&bytes).with_context(|| format!("parse manifest {}", path.display()))?;
        Ok(manifest)
    }
}
