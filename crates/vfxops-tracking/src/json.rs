use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::Value;
use vfxops_core::PublishRecord;

use crate::traits::{select_newest_first, Tracker};

/// Tracker backed by a single JSON file holding an array of flat record objects.
///
/// Every write reads the whole file, appends one row and rewrites it. There is
/// no locking: two processes publishing at once can lose one of the writes.
#[derive(Clone, Debug)]
pub struct JsonTracker {
    path: PathBuf,
}

impl JsonTracker {
    /// No I/O happens here; the file and its parent are created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw rows, kept as JSON values so rows this version cannot parse still
    /// survive a rewrite.
    fn load_rows(&self) -> Result<Vec<Value>> {
        if !self.path.exists() {
            return Ok(vec![]);
        }
        let bytes = std::fs::read(&self.path).with_context(|| format!("read tracking db {}", self.path.display()))?;
        let data: Value =
            serde_json::from_slice(&bytes).with_context(|| format!("parse tracking db {}", self.path.display()))?;
        match data {
            Value::Array(rows) => Ok(rows),
            _ => {
                tracing::warn!(path = %self.path.display(), "tracking db is not a JSON array, treating as empty");
                Ok(vec![])
            }
        }
    }

    fn save_rows(&self, rows: &[Value]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).with_context(|| format!("create dir {}", parent.display()))?;
        }
        let bytes = serde_json::to_vec_pretty(rows)?;
        std::fs::write(&self.path, bytes).with_context(|| format!("write tracking db {}", self.path.display()))?;
        Ok(())
    }
}

impl Tracker for JsonTracker {
    fn backend(&self) -> &'static str {
        "json"
    }

    fn record_publish(&self, record: &PublishRecord) -> Result<()> {
        let mut rows = self.load_rows()?;
        rows.push(serde_json::to_value(record)?);
        self.save_rows(&rows)?;
        tracing::info!(
            path = %self.path.display(),
            show = %record.show,
            shot = %record.shot,
            version = %record.version,
            rows = rows.len(),
            "publish recorded"
        );
        Ok(())
    }

    fn list_publishes(&self, show: Option<&str>, shot: Option<&str>) -> Result<Vec<PublishRecord>> {
        let rows = self.load_rows()?;
        let records = rows.into_iter().enumerate().filter_map(|(i, row)| {
            match serde_json::from_value::<PublishRecord>(row) {
                Ok(r) => Some(r),
                Err(err) => {
                    tracing::debug!(index = i, error = %err, "skipping unreadable tracking row");
                    None
                }
            }
        });
        Ok(select_newest_first(records, show, shot))
    }
}
