//! Camera: view and perspective matrices plus the projection helper used by
//! every primitive.

use crate::coords::{DMat4, DVec3, DVec4};

/// View + perspective pair.
///
/// The view matrix maps world space into camera space (eye at the origin,
/// looking down -Z, +Z toward the viewer). The perspective matrix maps
/// camera space into clip space; after the homogeneous divide the depth
/// grows away from the viewer, in `[-1, 1]` between the clip planes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera {
    pub view: DMat4,
    pub perspective: DMat4,
}

impl Default for Camera {
    fn default() -> Self {
        let mut cam = Self { view: DMat4::IDENTITY, perspective: DMat4::IDENTITY };
        cam.look_at(DVec3::new(0.0, 0.0, 5.0), DVec3::ZERO, DVec3::Y);
        cam.set_perspective(45.0, 1.0, 1.0, 100.0);
        cam
    }
}

impl Camera {
    /// Points the camera from `eye` at `target` with `up` as the vertical hint.
    pub fn look_at(&mut self, eye: DVec3, target: DVec3, up: DVec3) {
        self.view = DMat4::look_at_rh(eye, target, up);
    }

    /// Sets a symmetric perspective frustum. `fov_degrees` is the vertical
    /// field of view.
    pub fn set_perspective(&mut self, fov_degrees: f64, aspect: f64, znear: f64, zfar: f64) {
        self.perspective = DMat4::perspective_rh_gl(fov_degrees.to_radians(), aspect, znear, zfar);
    }

    /// Replaces the projection matrix outright (orthographic setups, tests).
    pub fn set_projection(&mut self, m: DMat4) {
        self.perspective = m;
    }

    /// Camera-space point into clip space, before the divide.
    #[inline]
    pub fn clip(&self, p: DVec4) -> DVec4 {
        self.perspective * p
    }

    /// Projects a camera-space point into projected space.
    #[inline]
    pub fn project(&self, p: DVec4) -> DVec3 {
        calc_proj_vec(&self.perspective, p)
    }
}

/// Applies `m` to `p` and performs the homogeneous divide.
#[inline]
pub fn calc_proj_vec(m: &DMat4, p: DVec4) -> DVec3 {
    let n = *m * p;
    n.truncate() / n.w
}
