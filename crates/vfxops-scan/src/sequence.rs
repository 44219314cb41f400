use std::path::{Path, PathBuf};

use vfxops_core::{missing_frames, ShotValidationResult};
use walkdir::WalkDir;

use crate::FramePattern;

/// One `<root>/<show>/shots/<shot>/renders` directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShotRenderDir {
    pub show: String,
    pub shot: String,
    pub render_dir: PathBuf,
}

pub fn shot_root(shows_root: &Path, show: &str, shot: &str) -> PathBuf {
    shows_root.join(show).join("shots").join(shot)
}

pub fn render_dir(shows_root: &Path, show: &str, shot: &str) -> PathBuf {
    shot_root(shows_root, show, shot).join("renders")
}

/// Immediate subdirectories of `dir`, sorted by name, symlinked ones included.
/// Missing or unreadable directories yield nothing.
fn child_dirs(dir: &Path) -> Vec<(String, PathBuf)> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_dir())
        .map(|e| {
            let name = e.file_name().to_string_lossy().into_owned();
            (name, e.into_path())
        })
        .collect()
}

/// Every shot that has a `renders` directory, ordered by show then shot.
pub fn shot_render_dirs(shows_root: &Path) -> Vec<ShotRenderDir> {
    let mut out = vec![];
    for (show, show_dir) in child_dirs(shows_root) {
        let shots_dir = show_dir.join("shots");
        if !shots_dir.is_dir() {
            continue;
        }
        for (shot, shot_dir) in child_dirs(&shots_dir) {
            let render_dir = shot_dir.join("renders");
            if render_dir.is_dir() {
                out.push(ShotRenderDir {
                    show: show.clone(),
                    shot,
                    render_dir,
                });
            }
        }
    }
    out
}

/// Sorted frame numbers of the regular files directly inside `render_dir`.
/// A symlink to a regular file (a held frame) counts; a dangling one does not.
pub fn collect_frame_numbers(render_dir: &Path, pattern: &FramePattern) -> Vec<u64> {
    let mut frames: Vec<u64> = WalkDir::new(render_dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| e.file_name().to_str().and_then(|name| pattern.frame_number(name)))
        .collect();
    frames.sort_unstable();
    frames
}

pub fn validate_shot(dir: &ShotRenderDir, pattern: &FramePattern) -> ShotValidationResult {
    let frames = collect_frame_numbers(&dir.render_dir, pattern);
    let missing = missing_frames(&frames);
    tracing::debug!(
        show = %dir.show,
        shot = %dir.shot,
        found = frames.len(),
        missing = missing.len(),
        "scanned render dir"
    );
    ShotValidationResult {
        show: dir.show.clone(),
        shot: dir.shot.clone(),
        render_dir: dir.render_dir.clone(),
        frames_found: frames,
        missing_frames: missing,
    }
}

/// Scan all shot render dirs under `shows_root` and report their gaps.
pub fn validate_renders(shows_root: &Path, pattern: &FramePattern) -> Vec<ShotValidationResult> {
    shot_render_dirs(shows_root)
        .iter()
        .map(|dir| validate_shot(dir, pattern))
        .collect()
}
