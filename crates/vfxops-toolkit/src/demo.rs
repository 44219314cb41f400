use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use vfxops_core::FrameNaming;

pub const DEMO_SHOW: &str = "demo_show";
pub const DEMO_SHOT: &str = "shot010";

/// Frame 3 is left out on purpose so validation has a gap to report.
const DEMO_FRAMES: [(u64, usize); 3] = [(1, 1024), (2, 2048), (4, 1024)];

pub fn write_demo_frames(render_dir: &Path, naming: &FrameNaming) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(render_dir).with_context(|| format!("create {}", render_dir.display()))?;
    let mut written = vec![];
    for (frame, size) in DEMO_FRAMES {
        let path = render_dir.join(naming.file_name(frame));
        std::fs::write(&path, vec![b'x'; size]).with_context(|| format!("write {}", path.display()))?;
        written.push(path);
    }
    Ok(written)
}
