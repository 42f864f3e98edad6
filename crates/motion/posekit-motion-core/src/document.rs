//! In-memory model of a loaded motion document.
//!
//! Every top-level entry stays in its original document position: frames are
//! typed, everything else is an opaque YAML node re-emitted structurally on
//! save. Entries are owned exclusively by the document.

use serde_yaml::Value;

use crate::data::Frame;

/// One top-level document entry.
#[derive(Clone, Debug, PartialEq)]
pub enum Entry {
    /// A parsed motion keyframe.
    Frame(Frame),
    /// Anything that is not frame-shaped, preserved uninterpreted.
    Blob(Value),
}

/// Ordered top-level entries of the most recent successful load.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MotionDocument {
    entries: Vec<Entry>,
}

impl MotionDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Frames in document order.
    pub fn frames(&self) -> impl Iterator<Item = &Frame> {
        self.entries.iter().filter_map(|entry| match entry {
            Entry::Frame(frame) => Some(frame),
            Entry::Blob(_) => None,
        })
    }

    /// Opaque entries in document order.
    pub fn blobs(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().filter_map(|entry| match entry {
            Entry::Blob(value) => Some(value),
            Entry::Frame(_) => None,
        })
    }

    /// First frame with the given name, document order.
    pub fn frame_by_name(&self, name: &str) -> Option<&Frame> {
        self.frames().find(|frame| frame.name == name)
    }

    pub(crate) fn frame_by_name_mut(&mut self, name: &str) -> Option<&mut Frame> {
        self.entries.iter_mut().find_map(|entry| match entry {
            Entry::Frame(frame) if frame.name == name => Some(frame),
            _ => None,
        })
    }
}
