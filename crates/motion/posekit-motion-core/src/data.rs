//! Canonical motion data model.
//!
//! A `Frame` is one keyframe of a motion sequence: timing metadata plus a
//! list of servo targets. On disk the joint list lives under the `dxl` key;
//! field declaration order here fixes the emitted key order.

use serde::Serialize;
use std::fmt;

/// One servo target: dynamixel id and goal position in radians.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct JointValue {
    pub id: i64,
    pub position: f64,
}

/// A single motion keyframe.
///
/// `time`, `delay`, and `repeat` are tick counts taken verbatim from the
/// document; none of them is validated here. `name` is the lookup key used
/// by the editor — uniqueness is by convention, not enforced, and name-based
/// operations resolve to the first match in document order.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Frame {
    pub time: i64,
    pub delay: i64,
    pub repeat: i64,
    pub name: String,
    pub selected: bool,
    #[serde(rename = "dxl")]
    pub joints: Vec<JointValue>,
}

impl Frame {
    /// First joint entry with the given id, if any.
    pub fn joint(&self, id: i64) -> Option<&JointValue> {
        self.joints.iter().find(|j| j.id == id)
    }

    /// Mutable counterpart of [`joint`](Self::joint).
    pub fn joint_mut(&mut self, id: i64) -> Option<&mut JointValue> {
        self.joints.iter_mut().find(|j| j.id == id)
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "frame '{}'", self.name)?;
        writeln!(f, "  time     : {}", self.time)?;
        writeln!(f, "  delay    : {}", self.delay)?;
        writeln!(f, "  repeat   : {}", self.repeat)?;
        writeln!(f, "  selected : {}", self.selected)?;
        writeln!(f, "  dxl      :")?;
        for j in &self.joints {
            writeln!(f, "    - id: {:<3} position(rad): {}", j.id, j.position)?;
        }
        Ok(())
    }
}
