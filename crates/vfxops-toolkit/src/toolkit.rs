use std::path::{Path, PathBuf};

use anyhow::Result;
use vfxops_core::{ConfigError, PublishRecord, ShotDiskUsage, ShotValidationResult};
use vfxops_publish::{publish_shot, FsPublishStore, PublishError, PublishRequest};
use vfxops_scan::{disk_usage_by_shot, render_dir, validate_renders, FramePattern};
use vfxops_tracking::{make_tracker, Tracker};

use crate::{write_demo_frames, Config, DEMO_SHOT, DEMO_SHOW};

/// Resolved configuration plus the backends it selects.
pub struct Toolkit {
    pub cwd: PathBuf,
    pub cfg: Config,
    pub tracker: Box<dyn Tracker>,
    pattern: FramePattern,
}

impl Toolkit {
    /// Validates naming and picks the tracker backend. No filesystem access.
    pub fn open(cfg: Config, cwd: PathBuf) -> Result<Self, ConfigError> {
        let pattern = FramePattern::new(&cfg.naming)?;
        let tracker = make_tracker(&cfg.tracking.backend, cfg.tracking_path(&cwd))?;
        Ok(Self {
            cwd,
            cfg,
            tracker,
            pattern,
        })
    }

    pub fn load(explicit_config: Option<&Path>, cwd: PathBuf) -> Result<Self, ConfigError> {
        let cfg = Config::load(explicit_config, &cwd)?;
        Self::open(cfg, cwd)
    }

    pub fn shows_root(&self) -> PathBuf {
        self.cfg.shows_root(&self.cwd)
    }

    pub fn validate(&self) -> Vec<ShotValidationResult> {
        let root = self.shows_root();
        tracing::info!(shows_root = %root.display(), "validating renders");
        validate_renders(&root, &self.pattern)
    }

    pub fn disk_usage(&self) -> Vec<ShotDiskUsage> {
        let root = self.shows_root();
        tracing::info!(shows_root = %root.display(), "computing disk usage");
        disk_usage_by_shot(&root)
    }

    pub fn publish(&self, show: &str, shot: &str, version: &str, note: &str) -> Result<PublishRecord, PublishError> {
        let req = PublishRequest {
            shows_root: self.shows_root(),
            show: show.to_string(),
            shot: shot.to_string(),
            version: version.to_string(),
            note: note.to_string(),
            naming: self.cfg.naming.clone(),
        };
        publish_shot(&req, self.tracker.as_ref())
    }

    /// Write `publish.json` for `record` under `publish_root` (config default when `None`).
    pub fn write_manifest(&self, record: &PublishRecord, publish_root: Option<&Path>) -> Result<PathBuf> {
        let root = match publish_root {
            Some(p) => self.cwd.join(p),
            None => self.cfg.publish_root(&self.cwd),
        };
        FsPublishStore::new(root).write_manifest(&self.shows_root(), record)
    }

    /// Newest first; `limit` keeps the first N after filtering.
    pub fn list_publishes(&self, show: Option<&str>, shot: Option<&str>, limit: Option<usize>) -> Result<Vec<PublishRecord>> {
        let mut records = self.tracker.list_publishes(show, shot)?;
        if let Some(n) = limit {
            records.truncate(n);
        }
        Ok(records)
    }

    /// Seed a demo shot with a one-frame gap. Returns the render directory.
    pub fn make_demo_frames(&self, dest: Option<&Path>) -> Result<PathBuf> {
        let dir = match dest {
            Some(p) => self.cwd.join(p),
            None => render_dir(&self.shows_root(), DEMO_SHOW, DEMO_SHOT),
        };
        write_demo_frames(&dir, &self.cfg.naming)?;
        Ok(dir)
    }
}
