//! Joint-name resolution table.
//!
//! Maps human-readable joint names to servo ids during edits. The table is
//! editor-instance state: replacing it affects subsequent edits only, never
//! frames that are already loaded.

use std::collections::HashMap;

/// Joint name -> servo id.
pub type JointMap = HashMap<String, i64>;

/// Joint names covered by [`crate::MotionEditor::edit_arm_torso_joints`].
pub const ARM_TORSO_JOINTS: [&str; 6] = [
    "rotate_torso",
    "rotate_0",
    "rotate_1",
    "rotate_2",
    "rotate_3",
    "rotate_5",
];

/// The stock humanoid table used when no explicit map is supplied.
pub fn default_joint_map() -> JointMap {
    [
        ("rotate_torso", 22),
        ("rotate_0", 0),
        ("rotate_1", 1),
        ("rotate_2", 2),
        ("rotate_3", 3),
        ("rotate_5", 5),
    ]
    .into_iter()
    .map(|(name, id)| (name.to_string(), id))
    .collect()
}
