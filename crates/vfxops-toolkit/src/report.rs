use serde::Serialize;
use vfxops_core::{PublishRecord, ShotDiskUsage, ShotValidationResult};

/// Process exit status for a command outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    MissingFrames,
    Error,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::MissingFrames => 1,
            ExitStatus::Error => 2,
        }
    }

    pub fn for_validation(results: &[ShotValidationResult]) -> Self {
        if results.iter().any(ShotValidationResult::has_gaps) {
            ExitStatus::MissingFrames
        } else {
            ExitStatus::Success
        }
    }
}

/// Human readable size, e.g. 1536 -> "1.5 KB". Bytes are printed as integers.
pub fn format_bytes(num_bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
    let mut size = num_bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} {}", num_bytes, UNITS[0])
    } else {
        format!("{:.1} {}", size, UNITS[unit])
    }
}

/// Collapse ascending frame numbers into runs: `[3, 7, 8, 9]` -> "3, 7-9".
pub fn format_frame_ranges(frames: &[u64]) -> String {
    let mut parts = vec![];
    let mut i = 0;
    while i < frames.len() {
        let start = frames[i];
        let mut end = start;
        while i + 1 < frames.len() && frames[i + 1] == end + 1 {
            i += 1;
            end = frames[i];
        }
        if start == end {
            parts.push(start.to_string());
        } else {
            parts.push(format!("{}-{}", start, end));
        }
        i += 1;
    }
    parts.join(", ")
}

#[derive(Debug, Serialize)]
pub struct ValidationReport<'a> {
    pub shows_root: String,
    pub results: &'a [ShotValidationResult],
}

pub fn render_validation_text(results: &[ShotValidationResult]) -> String {
    if results.is_empty() {
        return "No shot render directories found.\n".to_string();
    }
    let mut out = String::new();
    for r in results {
        let line = if r.frames_found.is_empty() {
            "No frames found".to_string()
        } else if r.has_gaps() {
            format!("Missing frames: {}", format_frame_ranges(&r.missing_frames))
        } else {
            format!("OK ({} frames, {})", r.frames_found.len(), format_frame_ranges(&r.frames_found))
        };
        out.push_str(&format!("{}/{}: {}\n", r.show, r.shot, line));
    }
    out
}

#[derive(Debug, Serialize)]
pub struct DiskRow<'a> {
    #[serde(flatten)]
    pub usage: &'a ShotDiskUsage,
    pub over_threshold: bool,
}

#[derive(Debug, Serialize)]
pub struct DiskReport<'a> {
    pub shows_root: String,
    pub disk_warning_mb: f64,
    pub results: Vec<DiskRow<'a>>,
}

impl<'a> DiskReport<'a> {
    pub fn new(shows_root: String, disk_warning_mb: f64, usage: &'a [ShotDiskUsage]) -> Self {
        let results = usage
            .iter()
            .map(|u| DiskRow {
                usage: u,
                over_threshold: u.exceeds_threshold(disk_warning_mb),
            })
            .collect();
        Self {
            shows_root,
            disk_warning_mb,
            results,
        }
    }

    pub fn render_text(&self) -> String {
        if self.results.is_empty() {
            return "No shot render directories found.\n".to_string();
        }
        let mut out = String::new();
        for row in &self.results {
            let u = row.usage;
            out.push_str(&format!(
                "{}/{}: {} ({} files)",
                u.show,
                u.shot,
                format_bytes(u.total_bytes),
                u.file_count
            ));
            if row.over_threshold {
                out.push_str(&format!(" [WARN >= {} MB]", self.disk_warning_mb));
            }
            out.push('\n');
        }
        out
    }
}

#[derive(Debug, Serialize)]
pub struct ListFilters {
    pub show: Option<String>,
    pub shot: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct PublishListing<'a> {
    pub filters: ListFilters,
    pub count: usize,
    pub records: &'a [PublishRecord],
}

pub fn render_publishes_text(records: &[PublishRecord]) -> String {
    if records.is_empty() {
        return "No publishes recorded.\n".to_string();
    }
    let mut out = String::new();
    for r in records {
        out.push_str(&format!(
            "{} {}/{} {} [{}] frames={} missing={} size={}",
            r.timestamp_utc,
            r.show,
            r.shot,
            r.version,
            r.status,
            r.frames_found.len(),
            r.missing_frames.len(),
            format_bytes(r.total_bytes)
        ));
        if !r.note.is_empty() {
            out.push_str(&format!(" - {}", r.note));
        }
        out.push('\n');
    }
    out
}
