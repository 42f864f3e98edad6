//! Stored YAML shape of a motion document.
//!
//! The on-disk document is a top-level sequence. An entry is frame-shaped
//! when it is a mapping carrying the `dxl`, `time`, and `name` keys; key
//! presence alone decides classification, values are only checked while
//! parsing. Every other entry stays an opaque blob.

use log::warn;
use serde_yaml::Value;

use crate::data::{Frame, JointValue};
use crate::document::{Entry, MotionDocument};
use crate::error::MotionError;

/// On-disk key of the joint list.
pub const JOINTS_KEY: &str = "dxl";

/// Whether a top-level entry parses as a [`Frame`] (key presence only).
pub fn is_frame_shaped(node: &Value) -> bool {
    node.is_mapping()
        && node.get(JOINTS_KEY).is_some()
        && node.get("time").is_some()
        && node.get("name").is_some()
}

/// Split a loaded top-level value into classified entries.
///
/// Fails with [`MotionError::Format`] when the root is not a sequence and
/// with [`MotionError::Parse`] when any frame-shaped entry is malformed; the
/// whole document is rejected in either case.
pub fn parse_document(root: Value) -> Result<MotionDocument, MotionError> {
    let seq = match root {
        Value::Sequence(seq) => seq,
        _ => return Err(MotionError::Format),
    };

    let mut doc = MotionDocument::new();
    for node in seq {
        if is_frame_shaped(&node) {
            doc.push(Entry::Frame(parse_frame(&node)?));
        } else {
            doc.push(Entry::Blob(node));
        }
    }
    Ok(doc)
}

/// Parse a frame-shaped mapping into a [`Frame`].
///
/// Scalar fields fall back to their defaults when absent; a present field of
/// the wrong type is an error. The `dxl` list is mandatory: a missing or
/// non-sequence value is fatal, a non-mapping element is skipped, and an
/// element without `id`/`position` is fatal (those two have no default).
pub fn parse_frame(node: &Value) -> Result<Frame, MotionError> {
    // Name first, so later errors can identify the frame.
    let name = match node.get("name") {
        Some(value) => scalar_to_string(value)
            .ok_or_else(|| parse_err("", "'name' must be a scalar"))?,
        None => String::new(),
    };

    let time = int_field(node, "time", &name)?;
    let delay = int_field(node, "delay", &name)?;
    let repeat = int_field(node, "repeat", &name)?;
    let selected = match node.get("selected") {
        Some(value) => value
            .as_bool()
            .ok_or_else(|| parse_err(&name, "'selected' must be a boolean"))?,
        None => false,
    };

    let joint_nodes = node
        .get(JOINTS_KEY)
        .and_then(Value::as_sequence)
        .ok_or_else(|| parse_err(&name, "'dxl' must be a sequence"))?;

    let mut joints = Vec::with_capacity(joint_nodes.len());
    for elem in joint_nodes {
        if !elem.is_mapping() {
            warn!("skipping non-mapping dxl element in frame '{name}'");
            continue;
        }
        let id = elem
            .get("id")
            .and_then(Value::as_i64)
            .ok_or_else(|| parse_err(&name, "dxl element missing integer 'id'"))?;
        let position = elem
            .get("position")
            .and_then(Value::as_f64)
            .ok_or_else(|| parse_err(&name, "dxl element missing numeric 'position'"))?;
        joints.push(JointValue { id, position });
    }

    Ok(Frame {
        time,
        delay,
        repeat,
        name,
        selected,
        joints,
    })
}

/// Re-expand the document into the top-level sequence written on save.
///
/// Blobs are cloned from their stored node; frames are serialized through
/// their serde derive, so the six keys come out in declaration order.
pub fn to_stored_value(doc: &MotionDocument) -> Result<Value, MotionError> {
    let mut out = Vec::with_capacity(doc.entries().len());
    for entry in doc.entries() {
        match entry {
            Entry::Blob(value) => out.push(value.clone()),
            Entry::Frame(frame) => out.push(serde_yaml::to_value(frame)?),
        }
    }
    Ok(Value::Sequence(out))
}

fn parse_err(name: &str, reason: &str) -> MotionError {
    MotionError::Parse {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}

fn int_field(node: &Value, key: &str, frame: &str) -> Result<i64, MotionError> {
    match node.get(key) {
        Some(value) => value
            .as_i64()
            .ok_or_else(|| parse_err(frame, &format!("'{key}' must be an integer"))),
        None => Ok(0),
    }
}

// YAML scalars coerce to strings the way the wire format expects: an
// unquoted numeric frame name like `name: 2` still addresses frame "2".
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
