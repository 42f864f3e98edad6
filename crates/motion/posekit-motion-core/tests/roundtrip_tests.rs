//! Round-trip and classification behavior of the document codec.

use posekit_motion_core::{is_frame_shaped, Entry, MotionEditor, MotionError};

const MOTION_YAML: &str = r#"
- meta
- label: test-motion
  version: 3
- time: 100
  delay: 5
  repeat: 1
  name: wave_start
  selected: true
  dxl:
    - id: 0
      position: 0.1
    - id: 1
      position: -0.25
    - id: 22
      position: 1.5
- checksum: abc123
- time: 250
  name: wave_end
  dxl: []
"#;

fn loaded(yaml: &str) -> MotionEditor {
    let mut editor = MotionEditor::new();
    editor.load_from_str(yaml).expect("load fixture");
    editor
}

fn entry_shape(editor: &MotionEditor) -> Vec<&'static str> {
    editor
        .document()
        .entries()
        .iter()
        .map(|entry| match entry {
            Entry::Frame(_) => "frame",
            Entry::Blob(_) => "blob",
        })
        .collect()
}

#[test]
fn frames_survive_a_save_load_cycle_unchanged() {
    let editor = loaded(MOTION_YAML);
    let text = editor.to_yaml_string().expect("serialize");
    let reloaded = loaded(&text);

    assert_eq!(editor.frame_names(), reloaded.frame_names());
    let before = editor.frame("wave_start").expect("wave_start before");
    let after = reloaded.frame("wave_start").expect("wave_start after");
    assert_eq!(before, after);
    assert_eq!(
        editor.frame("wave_end").expect("wave_end before"),
        reloaded.frame("wave_end").expect("wave_end after"),
    );
}

#[test]
fn blobs_survive_a_save_load_cycle_structurally() {
    let editor = loaded(MOTION_YAML);
    let text = editor.to_yaml_string().expect("serialize");
    let reloaded = loaded(&text);

    let before: Vec<_> = editor.document().blobs().cloned().collect();
    let after: Vec<_> = reloaded.document().blobs().cloned().collect();
    assert_eq!(before, after);

    // The bare scalar and the mapping blobs are intact, contents included.
    assert_eq!(after[0], serde_yaml::Value::from("meta"));
    assert_eq!(after[1].get("label").and_then(|v| v.as_str()), Some("test-motion"));
    assert_eq!(after[1].get("version").and_then(|v| v.as_i64()), Some(3));
    assert_eq!(after[2].get("checksum").and_then(|v| v.as_str()), Some("abc123"));
}

#[test]
fn entry_interleaving_is_preserved_on_save() {
    let editor = loaded(MOTION_YAML);
    let shape = entry_shape(&editor);
    assert_eq!(shape, ["blob", "blob", "frame", "blob", "frame"]);

    let text = editor.to_yaml_string().expect("serialize");
    let reloaded = loaded(&text);
    assert_eq!(entry_shape(&reloaded), shape);
}

#[test]
fn frames_are_emitted_with_canonical_key_order() {
    let editor = loaded(MOTION_YAML);
    let text = editor.to_yaml_string().expect("serialize");
    let root: serde_yaml::Value = serde_yaml::from_str(&text).expect("reparse");
    let frame = root
        .as_sequence()
        .expect("sequence root")
        .iter()
        .find(|node| is_frame_shaped(node))
        .expect("at least one frame");
    let keys: Vec<&str> = frame
        .as_mapping()
        .expect("frame mapping")
        .keys()
        .filter_map(|k| k.as_str())
        .collect();
    assert_eq!(keys, ["time", "delay", "repeat", "name", "selected", "dxl"]);
}

#[test]
fn mapping_without_joints_key_stays_a_blob() {
    // `time` and `name` alone do not make a frame.
    let editor = loaded("- {time: 10, name: imposter}\n");
    assert!(editor.frame_names().is_empty());
    assert_eq!(editor.document().blobs().count(), 1);
}

#[test]
fn malformed_frame_rejects_the_whole_document() {
    let mut editor = loaded(MOTION_YAML);
    let err = editor
        .load_from_str("- {time: 10, name: broken, dxl: 5}\n")
        .unwrap_err();
    assert!(matches!(err, MotionError::Parse { name, .. } if name == "broken"));
    // The failed load leaves an empty document, not the previous one.
    assert!(editor.document().is_empty());
    assert!(editor.frame_names().is_empty());
}

#[test]
fn non_sequence_root_is_a_format_error() {
    let mut editor = MotionEditor::new();
    assert!(matches!(
        editor.load_from_str("key: value\n").unwrap_err(),
        MotionError::Format
    ));
    assert!(matches!(
        editor.load_from_str("42\n").unwrap_err(),
        MotionError::Format
    ));
}

#[test]
fn load_and_save_work_against_the_filesystem() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("motion.yaml");
    std::fs::write(&path, MOTION_YAML).expect("write fixture");

    let mut editor = MotionEditor::new();
    editor.load(&path).expect("load from disk");
    assert_eq!(editor.frame_names(), ["wave_start", "wave_end"]);

    let out = dir.path().join("motion_out.yaml");
    editor.save(&out).expect("save to disk");
    let mut reloaded = MotionEditor::new();
    reloaded.load(&out).expect("reload from disk");
    assert_eq!(reloaded.frame("wave_start"), editor.frame("wave_start"));
}

#[test]
fn missing_file_and_unwritable_target_are_io_errors() {
    let dir = tempfile::tempdir().expect("tempdir");

    let mut editor = MotionEditor::new();
    let err = editor.load(dir.path().join("nope.yaml")).unwrap_err();
    assert!(matches!(err, MotionError::Io(_)));

    editor.load_from_str(MOTION_YAML).expect("load fixture");
    let err = editor
        .save(dir.path().join("no_such_dir").join("out.yaml"))
        .unwrap_err();
    assert!(matches!(err, MotionError::Io(_)));
}
