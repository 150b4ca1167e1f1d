use crate::camera::Camera;
use crate::coords::{DMat4, DVec3};
use crate::fragment::{Fragment, FragmentKind, FragmentList};
use crate::paint::SurfaceStyleId;
use crate::scene::NodeId;

use super::{faces_viewer, place};

/// Single filled triangle.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    pub points: [DVec3; 3],
    pub surface: Option<SurfaceStyleId>,
    /// Only draw when the winding normal `(p1-p0) x (p2-p0)` faces the viewer.
    pub facing: bool,
}

impl Triangle {
    #[inline]
    pub fn new(points: [DVec3; 3], surface: Option<SurfaceStyleId>) -> Self {
        Self { points, surface, facing: false }
    }

    /// Back-face culled triangle.
    #[inline]
    pub fn facing(points: [DVec3; 3], surface: Option<SurfaceStyleId>) -> Self {
        Self { points, surface, facing: true }
    }

    #[inline]
    pub fn normal(&self) -> DVec3 {
        let [p0, p1, p2] = self.points;
        (p1 - p0).cross(p2 - p0)
    }

    pub(crate) fn emit(&self, id: NodeId, outer: &DMat4, camera: &Camera, out: &mut FragmentList) {
        if self.facing && !faces_viewer(outer, self.normal()) {
            return;
        }

        let mut f = Fragment::new(FragmentKind::Triangle);
        f.source = Some(id);
        f.surface = self.surface;
        for (i, p) in self.points.iter().enumerate() {
            f.set_point(i, place(outer, camera, *p));
        }

        if f.is_finite() {
            out.push(f);
        }
    }
}
