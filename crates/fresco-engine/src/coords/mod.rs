//! Coordinate and geometry types shared by the scene and the split engine.
//!
//! Spaces:
//! - object space: coordinates as supplied by the caller
//! - camera space: after the accumulated outer transform (view included),
//!   +Z toward the viewer
//! - projected space: after the camera projection and homogeneous divide,
//!   `x`/`y` on screen and `z` as depth growing away from the viewer
//!
//! Everything is `f64`; missing data travels as non-finite components.
//! Vectors and matrices are `glam`'s double-precision types, re-exported so
//! callers do not need their own `glam` dependency.

mod rect;

pub use glam::{DMat4, DVec2, DVec3, DVec4};
pub use rect::Rect;

/// One of the three spatial axes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum Axis {
    #[default]
    X,
    Y,
    Z,
}

impl Axis {
    /// Component index of this axis in a `DVec3` or `DVec4`.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Returns `true` when `a`, `b` and `c` name each axis exactly once.
    pub fn is_permutation(a: Axis, b: Axis, c: Axis) -> bool {
        a != b && b != c && a != c
    }
}
