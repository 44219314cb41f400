use std::path::Path;

use tempfile::tempdir;
use vfxops_core::{FrameNaming, PublishStatus};
use vfxops_publish::{publish_shot, FsPublishStore, PublishError, PublishRequest, MANIFEST_SCHEMA};
use vfxops_tracking::{JsonTracker, Tracker};

fn write_sized(p: &Path, size: usize) {
    std::fs::create_dir_all(p.parent().unwrap()).unwrap();
    std::fs::write(p, vec![b'x'; size]).unwrap();
}

fn request(shows_root: &Path, show: &str, shot: &str, version: &str) -> PublishRequest {
    PublishRequest {
        shows_root: shows_root.to_path_buf(),
        show: show.into(),
        shot: shot.into(),
        version: version.into(),
        note: String::new(),
        naming: FrameNaming::default(),
    }
}

#[test]
fn publish_then_list_roundtrips_through_json_store() {
    let dir = tempdir().unwrap();
    let shows_root = dir.path().join("shows");
    let renders = shows_root.join("demo_show").join("shots").join("shot010").join("renders");
    write_sized(&renders.join("frame_0001.exr"), 1024);
    write_sized(&renders.join("frame_0002.exr"), 2048);
    write_sized(&renders.join("frame_0004.exr"), 1024);

    let tracker = JsonTracker::new(dir.path().join("data").join("tracking_db.json"));
    let record = publish_shot(&request(&shows_root, "demo_show", "shot010", "v001"), &tracker).unwrap();
    assert_eq!(record.status, PublishStatus::Warnings);
    assert_eq!(record.total_bytes, 4096);

    let listed = tracker.list_publishes(None, None).unwrap();
    assert_eq!(listed, vec![record.clone()]);

    let store = FsPublishStore::new(dir.path().join("published"));
    let path = store.write_manifest(&shows_root, &record).unwrap();
    let manifest = store.read_manifest(&path).unwrap();
    assert_eq!(manifest.schema, MANIFEST_SCHEMA);
    assert_eq!(manifest.record, record);
    assert_eq!(Path::new(&manifest.source_render_dir), renders);
}

#[test]
fn failed_precondition_leaves_store_untouched() {
    let dir = tempdir().unwrap();
    let shows_root = dir.path().join("shows");
    write_sized(
        &shows_root.join("demo_show").join("shots").join("shot010").join("renders").join("frame_0001.exr"),
        8,
    );
    std::fs::create_dir_all(shows_root.join("demo_show").join("shots").join("shot020")).unwrap();

    let tracker = JsonTracker::new(dir.path().join("tracking_db.json"));
    publish_shot(&request(&shows_root, "demo_show", "shot010", "v001"), &tracker).unwrap();
    let before = std::fs::read(tracker.path()).unwrap();

    let err = publish_shot(&request(&shows_root, "demo_show", "shot020", "v001"), &tracker).unwrap_err();
    assert!(matches!(err, PublishError::RendersMissing(_)));
    let err = publish_shot(&request(&shows_root, "demo_show", "shot999", "v001"), &tracker).unwrap_err();
    assert!(matches!(err, PublishError::ShotMissing(_)));

    assert_eq!(std::fs::read(tracker.path()).unwrap(), before);
    assert_eq!(tracker.list_publishes(None, None).unwrap().len(), 1);
}
