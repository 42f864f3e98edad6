//! The editor: owns the loaded document and the joint table, and exposes the
//! public load/save/lookup/edit API.
//!
//! All operations are synchronous and blocking. One editor instance owns its
//! document exclusively; concurrent use must be serialized by the caller.

use std::collections::HashMap;
use std::path::Path;

use log::debug;

use crate::binding::{default_joint_map, JointMap, ARM_TORSO_JOINTS};
use crate::data::{Frame, JointValue};
use crate::document::MotionDocument;
use crate::error::MotionError;
use crate::stored_motion;

/// Editor over one motion document.
///
/// Each successful [`load`](Self::load) replaces the document wholesale;
/// edits mutate frames in place. The joint table resolves names to servo ids
/// at edit time only and never re-associates already-loaded frame data.
#[derive(Debug)]
pub struct MotionEditor {
    doc: MotionDocument,
    joint_map: JointMap,
}

impl Default for MotionEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl MotionEditor {
    /// Editor with the stock joint table.
    pub fn new() -> Self {
        Self::with_joint_map(default_joint_map())
    }

    /// Editor with an explicit joint table.
    pub fn with_joint_map(joint_map: JointMap) -> Self {
        Self {
            doc: MotionDocument::new(),
            joint_map,
        }
    }

    /// Load a motion document from `path`, replacing any previous state.
    ///
    /// State is cleared up front: a failed load leaves the editor empty, not
    /// on its previous document.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<(), MotionError> {
        self.doc.clear();
        let text = std::fs::read_to_string(path)?;
        self.load_from_str(&text)
    }

    /// Parse a document from YAML text, replacing any previous state.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), MotionError> {
        self.doc.clear();
        let root: serde_yaml::Value = serde_yaml::from_str(text)?;
        self.doc = stored_motion::parse_document(root)?;
        debug!(
            "loaded {} frames, {} blobs",
            self.doc.frames().count(),
            self.doc.blobs().count()
        );
        Ok(())
    }

    /// Serialize the document back to YAML text, original entry order.
    pub fn to_yaml_string(&self) -> Result<String, MotionError> {
        let value = stored_motion::to_stored_value(&self.doc)?;
        Ok(serde_yaml::to_string(&value)?)
    }

    /// Write the document to `path`, overwriting any existing content.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), MotionError> {
        let text = self.to_yaml_string()?;
        std::fs::write(path.as_ref(), text)?;
        debug!("saved document to {}", path.as_ref().display());
        Ok(())
    }

    /// Names of every frame, document order, duplicates included.
    pub fn frame_names(&self) -> Vec<String> {
        self.doc.frames().map(|frame| frame.name.clone()).collect()
    }

    /// Snapshot of the first frame with the given name.
    ///
    /// The returned frame is a copy; mutating it does not touch the stored
    /// document.
    pub fn frame(&self, name: &str) -> Option<Frame> {
        self.doc.frame_by_name(name).cloned()
    }

    /// Borrow the loaded document.
    pub fn document(&self) -> &MotionDocument {
        &self.doc
    }

    /// Current joint table.
    pub fn joint_map(&self) -> &JointMap {
        &self.joint_map
    }

    /// Replace the joint table. Applies to subsequent edits only.
    pub fn set_joint_map(&mut self, joint_map: JointMap) {
        self.joint_map = joint_map;
    }

    /// Apply named joint-position updates to the first frame called `name`.
    ///
    /// Each update resolves through the joint table to a servo id, then
    /// overwrites the matching joint entry or appends a new `{id, position}`
    /// entry when the id is absent from the frame. A missing frame is always
    /// an error. With `strict`, every name is resolved before anything is
    /// written, so an unknown name fails the call with the frame untouched;
    /// otherwise unknown names are skipped.
    pub fn edit_joints(
        &mut self,
        name: &str,
        updates: &HashMap<String, f64>,
        strict: bool,
    ) -> Result<(), MotionError> {
        let Self { doc, joint_map } = self;
        let frame = doc
            .frame_by_name_mut(name)
            .ok_or_else(|| MotionError::FrameNotFound(name.to_string()))?;

        if strict {
            if let Some(unknown) = updates
                .keys()
                .find(|joint| !joint_map.contains_key(joint.as_str()))
            {
                return Err(MotionError::UnknownJoint(unknown.clone()));
            }
        }

        for (joint_name, &position) in updates {
            let Some(&id) = joint_map.get(joint_name) else {
                debug!("skipping unknown joint name '{joint_name}'");
                continue;
            };
            match frame.joint_mut(id) {
                Some(joint) => joint.position = position,
                None => frame.joints.push(JointValue { id, position }),
            }
        }
        Ok(())
    }

    /// Update only the fixed arm+torso group of joints, ignoring every other
    /// name in `updates`.
    ///
    /// An update set with no whitelisted name is a no-op, even when the frame
    /// itself does not exist; the frame lookup only runs once there is
    /// something to change.
    pub fn edit_arm_torso_joints(
        &mut self,
        name: &str,
        updates: &HashMap<String, f64>,
    ) -> Result<(), MotionError> {
        let subset: HashMap<String, f64> = updates
            .iter()
            .filter(|(joint, _)| ARM_TORSO_JOINTS.contains(&joint.as_str()))
            .map(|(joint, &position)| (joint.clone(), position))
            .collect();
        if subset.is_empty() {
            return Ok(());
        }
        self.edit_joints(name, &subset, false)
    }

    /// Dump a frame to stdout for eyeballing.
    pub fn print_frame(frame: &Frame) {
        print!("{frame}");
    }
}
