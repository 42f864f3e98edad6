//! Error types for the motion document editor.

use thiserror::Error;

/// Errors raised while loading, editing, or saving a motion document.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MotionError {
    /// The document root is not a sequence.
    #[error("top level of a motion document must be a sequence")]
    Format,

    /// A frame-shaped entry could not be parsed into a `Frame`.
    #[error("malformed frame '{name}': {reason}")]
    Parse { name: String, reason: String },

    /// No frame with the requested name exists in the document.
    #[error("frame not found: '{0}'")]
    FrameNotFound(String),

    /// A strict edit referenced a joint name missing from the joint map.
    #[error("unknown joint name: '{0}'")]
    UnknownJoint(String),

    /// File open, read, or write failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML text could not be scanned or emitted at all.
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
