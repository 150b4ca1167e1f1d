pub(crate) mod container;
pub(crate) mod data_mesh;
pub(crate) mod mesh;
pub(crate) mod points;
pub(crate) mod polyline;
pub(crate) mod segments;
pub(crate) mod text;
pub(crate) mod triangle;

use crate::camera::Camera;
use crate::coords::{Axis, DMat4, DVec3, DVec4};

/// Camera-space position and clip-space image of an object-space point.
#[inline]
pub(crate) fn place(outer: &DMat4, camera: &Camera, p: DVec3) -> (DVec3, DVec4) {
    let c = *outer * p.extend(1.0);
    (c.truncate(), camera.clip(c))
}

/// Facing test shared by facing triangles and facing containers.
///
/// `normal` is pushed through `m` like a point and compared with the
/// transformed origin: the geometry faces the viewer when the tip ends up
/// nearer (larger camera-space `z`).
#[inline]
pub(crate) fn faces_viewer(m: &DMat4, normal: DVec3) -> bool {
    let origin = *m * DVec4::W;
    let tip = *m * normal.extend(1.0);
    tip.z > origin.z
}

/// Component indices for (height, in-plane axis 1, in-plane axis 2) when
/// `height` is the out-of-plane axis.
#[inline]
pub(crate) fn grid_axes(height: Axis) -> (usize, usize, usize) {
    match height {
        Axis::X => (0, 1, 2),
        Axis::Y => (1, 2, 0),
        Axis::Z => (2, 0, 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_axes_are_cyclic() {
        assert_eq!(grid_axes(Axis::X), (0, 1, 2));
        assert_eq!(grid_axes(Axis::Y), (1, 2, 0));
        assert_eq!(grid_axes(Axis::Z), (2, 0, 1));
    }

    #[test]
    fn facing_follows_transform() {
        let n = DVec3::new(0.0, 0.0, 1.0);
        assert!(faces_viewer(&DMat4::IDENTITY, n));
        let flipped = DMat4::from_rotation_y(core::f64::consts::PI);
        assert!(!faces_viewer(&flipped, n));
    }
}
