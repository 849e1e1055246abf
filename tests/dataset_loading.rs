use std::fs;
use std::path::{Path, PathBuf};

use anatomy_atlas::Atlas;
use anatomy_atlas::anatomy::{EntityKind, load_dataset};
use tempfile::tempdir;

fn write_minimal_dataset(dir: &Path) {
    fs::write(
        dir.join("muscles.json"),
        r#"[{"id":"biceps","name_ja":"上腕二頭筋","region":"upper_limb",
             "origins":[{"bone":"humerus"}],"insertions":[],"innervation":[]}]"#,
    )
    .unwrap();
    fs::write(
        dir.join("bones.json"),
        r#"[{"id":"humerus","name_ja":"上腕骨","region":"upper_limb"}]"#,
    )
    .unwrap();
    for name in ["nerves", "joints", "skin", "ligaments"] {
        fs::write(dir.join(format!("{name}.json")), "[]").unwrap();
    }
}

fn bundled_data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}

#[test]
fn loads_all_six_collections_from_a_directory() {
    let tmp = tempdir().unwrap();
    write_minimal_dataset(tmp.path());

    let dataset = load_dataset(tmp.path()).unwrap();
    assert_eq!(dataset.muscles.len(), 1);
    assert_eq!(dataset.bones.len(), 1);
    assert!(dataset.nerves.is_empty());
    assert_eq!(dataset.muscles[0].origins[0].bone, "humerus");
}

#[test]
fn a_missing_collection_fails_the_whole_load() {
    let tmp = tempdir().unwrap();
    write_minimal_dataset(tmp.path());
    fs::remove_file(tmp.path().join("skin.json")).unwrap();

    let error = load_dataset(tmp.path()).unwrap_err();
    assert!(format!("{error:#}").contains("skin.json"));
    assert!(Atlas::initialize(tmp.path()).is_err());
}

#[test]
fn malformed_json_fails_the_whole_load() {
    let tmp = tempdir().unwrap();
    write_minimal_dataset(tmp.path());
    fs::write(tmp.path().join("joints.json"), r#"[{"id": "elbow""#).unwrap();

    let error = load_dataset(tmp.path()).unwrap_err();
    assert!(format!("{error:#}").contains("joints"));
}

#[test]
fn a_record_with_the_wrong_shape_fails_the_whole_load() {
    let tmp = tempdir().unwrap();
    write_minimal_dataset(tmp.path());
    fs::write(
        tmp.path().join("nerves.json"),
        r#"{"id":"radial","name_ja":"橈骨神経","region":"upper_limb"}"#,
    )
    .unwrap();

    assert!(load_dataset(tmp.path()).is_err());
}

#[test]
fn a_missing_directory_is_reported() {
    let tmp = tempdir().unwrap();
    let missing = tmp.path().join("nowhere");

    let error = load_dataset(&missing).unwrap_err();
    assert!(error.to_string().contains("does not exist"));
}

#[test]
fn every_record_round_trips_through_the_store() {
    let atlas = Atlas::initialize(&bundled_data_dir()).unwrap();
    let store = atlas.store();

    for kind in EntityKind::ALL {
        for record in store.all(kind) {
            let fetched = store.get(kind, record.id()).unwrap();
            assert_eq!(fetched, record);
        }
    }
}

#[test]
fn the_bundled_dataset_has_no_integrity_issues() {
    let atlas = Atlas::initialize(&bundled_data_dir()).unwrap();

    assert!(atlas.diagnostics().is_empty(), "{:?}", atlas.diagnostics());
    assert_eq!(atlas.graph().dropped_edges(), 0);
    assert!(atlas.graph().node("biceps_brachii").is_some());
}
