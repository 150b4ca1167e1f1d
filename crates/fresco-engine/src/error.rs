use std::fmt;

use crate::coords::Axis;
use crate::scene::NodeId;

/// Configuration and scene-graph errors.
///
/// Node configuration problems found during fragment generation are not
/// fatal: they are recorded on the pass's [`FragmentList`](crate::fragment::FragmentList)
/// and the offending node contributes nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneError {
    /// Data-mesh axes do not name each of X, Y and Z exactly once.
    InvalidAxes { value: Axis, axis1: Axis, axis2: Axis },
    /// Data-mesh edge counts do not match the number of cell values.
    SizeMismatch { cells: usize, values: usize },
    /// Handle does not refer to a node in this scene.
    UnknownNode(NodeId),
    /// Children can only be attached to container nodes.
    NotAContainer(NodeId),
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::InvalidAxes { value, axis1, axis2 } => write!(
                f,
                "data mesh axes are not a permutation of x/y/z: value={value:?} axis1={axis1:?} axis2={axis2:?}"
            ),
            SceneError::SizeMismatch { cells, values } => {
                write!(f, "data mesh has {cells} cells but {values} values")
            }
            SceneError::UnknownNode(id) => write!(f, "unknown scene node {}", id.index()),
            SceneError::NotAContainer(id) => {
                write!(f, "scene node {} is not a container", id.index())
            }
        }
    }
}

impl std::error::Error for SceneError {}
