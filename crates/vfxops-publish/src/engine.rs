use std::path::PathBuf;

use vfxops_core::{now_utc_iso, FrameNaming, PublishRecord, PublishStatus};
use vfxops_scan::{dir_size_bytes, render_dir, shot_root, validate_shot, FramePattern, ShotRenderDir};
use vfxops_tracking::Tracker;

use crate::error::{check_identifier, PublishError};

/// Inputs for publishing one shot at a version tag.
#[derive(Clone, Debug)]
pub struct PublishRequest {
    pub shows_root: PathBuf,
    pub show: String,
    pub shot: String,
    pub version: String,
    pub note: String,
    pub naming: FrameNaming,
}

/// Snapshot the shot's frames and render disk usage into a record and append it
/// to `tracker`.
///
/// Preconditions, checked in order and before touching the tracker:
///
/// 1. `show`, `shot` and `version` are single path components (non-empty, no
///    `/` or `\`, not `.` or `..`), else [`PublishError::InvalidIdentifier`].
///    They become directory and file names, so this runs first, ahead of any
///    filesystem lookup.
/// 2. The frame naming compiles, else [`PublishError::Config`].
/// 3. The shot directory exists, else [`PublishError::ShotMissing`].
/// 4. Its `renders` directory exists, else [`PublishError::RendersMissing`].
pub fn publish_shot(req: &PublishRequest, tracker: &dyn Tracker) -> Result<PublishRecord, PublishError> {
    check_identifier("show", &req.show)?;
    check_identifier("shot", &req.shot)?;
    check_identifier("version", &req.version)?;
    let pattern = FramePattern::new(&req.naming)?;

    let shot_dir = shot_root(&req.shows_root, &req.show, &req.shot);
    if !shot_dir.exists() {
        return Err(PublishError::ShotMissing(shot_dir));
    }
    let renders = render_dir(&req.shows_root, &req.show, &req.shot);
    if !renders.is_dir() {
        return Err(PublishError::RendersMissing(renders));
    }

    let validation = validate_shot(
        &ShotRenderDir {
            show: req.show.clone(),
            shot: req.shot.clone(),
            render_dir: renders.clone(),
        },
        &pattern,
    );
    let (total_bytes, file_count) = dir_size_bytes(&renders);

    let record = PublishRecord {
        show: req.show.clone(),
        shot: req.shot.clone(),
        version: req.version.clone(),
        status: PublishStatus::from_frames(&validation.frames_found, &validation.missing_frames),
        note: req.note.clone(),
        timestamp_utc: now_utc_iso(),
        frames_found: validation.frames_found,
        missing_frames: validation.missing_frames,
        total_bytes,
        file_count,
    };

    tracker.record_publish(&record)?;
    tracing::info!(
        show = %record.show,
        shot = %record.shot,
        version = %record.version,
        status = %record.status,
        backend = tracker.backend(),
        "shot published"
    );
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::tempdir;
    use vfxops_tracking::InMemoryTracker;

    fn write_sized(p: &Path, size: usize) {
        std::fs::create_dir_all(p.parent().unwrap()).unwrap();
        std::fs::write(p, vec![b'x'; size]).unwrap();
    }

    fn request(shows_root: &Path) -> PublishRequest {
        PublishRequest {
            shows_root: shows_root.to_path_buf(),
            show: "demo_show".into(),
            shot: "shot010".into(),
            version: "v001".into(),
            note: "test publish".into(),
            naming: FrameNaming::default(),
        }
    }

    #[test]
    fn creates_record_with_gaps_as_warnings() {
        let dir = tempdir().unwrap();
        let rd = render_dir(dir.path(), "demo_show", "shot010");
        for f in ["frame_0001.exr", "frame_0002.exr", "frame_0004.exr"] {
            write_sized(&rd.join(f), 10);
        }
        let tracker = InMemoryTracker::new();

        let record = publish_shot(&request(dir.path()), &tracker).unwrap();
        assert_eq!(record.show, "demo_show");
        assert_eq!(record.version, "v001");
        assert_eq!(record.status, PublishStatus::Warnings);
        assert_eq!(record.frames_found, vec![1, 2, 4]);
        assert_eq!(record.missing_frames, vec![3]);
        assert_eq!(record.total_bytes, 30);
        assert_eq!(record.file_count, 3);
        assert!(record.timestamp_utc.ends_with('Z'));

        let stored = tracker.list_publishes(Some("demo_show"), Some("shot010")).unwrap();
        assert_eq!(stored, vec![record]);
    }

    #[test]
    fn complete_sequence_is_ok() {
        let dir = tempdir().unwrap();
        let rd = render_dir(dir.path(), "demo_show", "shot010");
        for f in ["frame_0001.exr", "frame_0002.exr", "notes.txt"] {
            write_sized(&rd.join(f), 5);
        }
        let tracker = InMemoryTracker::new();
        let record = publish_shot(&request(dir.path()), &tracker).unwrap();
        assert_eq!(record.status, PublishStatus::Ok);
        // every regular file counts toward disk usage, frame or not
        assert_eq!((record.total_bytes, record.file_count), (15, 3));
    }

    #[test]
    fn empty_renders_is_warnings() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(render_dir(dir.path(), "demo_show", "shot010")).unwrap();
        let tracker = InMemoryTracker::new();
        let record = publish_shot(&request(dir.path()), &tracker).unwrap();
        assert_eq!(record.status, PublishStatus::Warnings);
        assert!(record.frames_found.is_empty());
        assert!(record.missing_frames.is_empty());
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn missing_shot_is_not_eligible_and_writes_nothing() {
        let dir = tempdir().unwrap();
        let tracker = InMemoryTracker::new();
        let err = publish_shot(&request(dir.path()), &tracker).unwrap_err();
        assert!(matches!(err, PublishError::ShotMissing(ref p) if p.ends_with("shot010")));
        assert!(err.is_not_eligible());
        assert!(tracker.is_empty());
    }

    #[test]
    fn missing_renders_is_not_eligible_and_writes_nothing() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(shot_root(dir.path(), "demo_show", "shot010")).unwrap();
        let tracker = InMemoryTracker::new();
        let err = publish_shot(&request(dir.path()), &tracker).unwrap_err();
        assert!(matches!(err, PublishError::RendersMissing(ref p) if p.ends_with("renders")));
        assert!(tracker.is_empty());
    }

    #[test]
    fn renders_file_instead_of_dir_is_not_eligible() {
        let dir = tempdir().unwrap();
        write_sized(&render_dir(dir.path(), "demo_show", "shot010"), 1);
        let tracker = InMemoryTracker::new();
        let err = publish_shot(&request(dir.path()), &tracker).unwrap_err();
        assert!(matches!(err, PublishError::RendersMissing(_)));
        assert!(tracker.is_empty());
    }

    #[test]
    fn publishing_twice_appends_twice() {
        let dir = tempdir().unwrap();
        write_sized(&render_dir(dir.path(), "demo_show", "shot010").join("frame_0001.exr"), 1);
        let tracker = InMemoryTracker::new();
        publish_shot(&request(dir.path()), &tracker).unwrap();
        publish_shot(&request(dir.path()), &tracker).unwrap();
        assert_eq!(tracker.len(), 2);
    }

    #[test]
    fn bad_naming_is_a_config_error_before_any_check() {
        let dir = tempdir().unwrap();
        let tracker = InMemoryTracker::new();
        let mut req = request(dir.path());
        req.naming.frame_padding = 0;
        assert!(matches!(publish_shot(&req, &tracker), Err(PublishError::Config(_))));
        assert!(tracker.is_empty());
    }

    #[test]
    fn path_like_version_is_rejected() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(render_dir(dir.path(), "demo_show", "shot010")).unwrap();
        let tracker = InMemoryTracker::new();
        let mut req = request(dir.path());
        req.version = "../v001".into();
        assert!(matches!(
            publish_shot(&req, &tracker),
            Err(PublishError::InvalidIdentifier { field: "version", .. })
        ));
        assert!(tracker.is_empty());
    }

    #[test]
    fn identifiers_are_checked_before_the_shot_lookup() {
        let dir = tempdir().unwrap();
        let tracker = InMemoryTracker::new();
        let mut req = request(dir.path());
        req.shot = "seq01\\shot010".into();
        assert!(matches!(
            publish_shot(&req, &tracker),
            Err(PublishError::InvalidIdentifier { field: "shot", .. })
        ));
        req.shot = "shot010".into();
        req.show = "a/b".into();
        assert!(matches!(
            publish_shot(&req, &tracker),
            Err(PublishError::InvalidIdentifier { field: "show", .. })
        ));
        assert!(tracker.is_empty());
    }
}
