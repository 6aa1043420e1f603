use std::fmt;

use crate::scene::{ShapeId, ShapeKind};

/// Failure to resolve a [`ShapeId`] against a scene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// The handle was issued before the scene was last cleared.
    StaleHandle { id: ShapeId },
    /// The handle points past the end of the registry.
    OutOfRange { id: ShapeId, len: usize },
    /// The shape exists but is not of the requested kind.
    KindMismatch {
        id: ShapeId,
        expected: ShapeKind,
        found: ShapeKind,
    },
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::StaleHandle { id } => {
                write!(f, "shape {id} was removed when the scene was cleared")
            }
            SceneError::OutOfRange { id, len } => {
                write!(f, "shape {id} is out of range (scene holds {len} shapes)")
            }
            SceneError::KindMismatch { id, expected, found } => {
                write!(f, "shape {id} is a {found}, expected a {expected}")
            }
        }
    }
}

impl std::error::Error for SceneError {}

#[cfg(test)]
mod tests {
    use core::num::NonZeroU64;

    use super::*;

    #[test]
    fn messages_name_the_handle() {
        let id = ShapeId::new(3, NonZeroU64::MIN);
        let err = SceneError::KindMismatch {
            id,
            expected: ShapeKind::Circle,
            found: ShapeKind::Point,
        };
        assert_eq!(err.to_string(), "shape #3@1 is a Point, expected a Circle");

        let err = SceneError::OutOfRange { id, len: 2 };
        assert_eq!(err.to_string(), "shape #3@1 is out of range (scene holds 2 shapes)");
    }
}
