use std::path::Path;

use vfxops_core::ShotDiskUsage;
use walkdir::WalkDir;

use crate::shot_render_dirs;

/// `(total_bytes, file_count)` over every regular file below `root`.
///
/// Symlinks to files count with the size of their target; symlinked
/// directories are not descended into. Best effort: entries that cannot be
/// read or stat'ed are left out and the walk carries on. A missing root is
/// `(0, 0)`.
pub fn dir_size_bytes(root: &Path) -> (u64, u64) {
    let mut total = 0u64;
    let mut count = 0u64;
    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                if err.depth() > 0 {
                    tracing::warn!(error = %err, "skipping unreadable entry");
                }
                continue;
            }
        };
        let ft = entry.file_type();
        if !ft.is_file() && !ft.is_symlink() {
            continue;
        }
        match std::fs::metadata(entry.path()) {
            Ok(meta) if meta.is_file() => {
                total += meta.len();
                count += 1;
            }
            Ok(_) => {}
            Err(err) => {
                tracing::warn!(path = %entry.path().display(), error = %err, "cannot stat file, skipping");
            }
        }
    }
    (total, count)
}

/// Disk usage of each shot's `renders` directory under `shows_root`.
pub fn disk_usage_by_shot(shows_root: &Path) -> Vec<ShotDiskUsage> {
    shot_render_dirs(shows_root)
        .into_iter()
        .map(|dir| {
            let (total_bytes, file_count) = dir_size_bytes(&dir.render_dir);
            ShotDiskUsage {
                show: dir.show,
                shot: dir.shot,
                render_dir: dir.render_dir,
                total_bytes,
                file_count,
            }
        })
        .collect()
}
