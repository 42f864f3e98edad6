//! Posekit Motion Core (engine-agnostic)
//!
//! Loads robot motion-sequence YAML documents, classifies top-level entries
//! into typed frames and opaque blobs, applies named joint edits, and writes
//! the document back preserving original entry order and blob structure.

pub mod binding;
pub mod data;
pub mod document;
pub mod editor;
pub mod error;
pub mod stored_motion;

// Re-exports for consumers
pub use binding::{default_joint_map, JointMap, ARM_TORSO_JOINTS};
pub use data::{Frame, JointValue};
pub use document::{Entry, MotionDocument};
pub use editor::MotionEditor;
pub use error::MotionError;
pub use stored_motion::{is_frame_shaped, parse_frame, JOINTS_KEY};
