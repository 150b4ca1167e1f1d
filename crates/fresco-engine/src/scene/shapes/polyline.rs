use crate::camera::Camera;
use crate::coords::{DMat4, DVec3};
use crate::fragment::{Fragment, FragmentKind, FragmentList};
use crate::paint::LineStyleId;
use crate::scene::NodeId;

use super::place;

/// Connected line through an ordered list of points.
///
/// A non-finite point breaks the line: no segment touches it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolyLine {
    pub points: Vec<DVec3>,
    pub line: Option<LineStyleId>,
}

impl PolyLine {
    #[inline]
    pub fn new(line: Option<LineStyleId>) -> Self {
        Self { points: Vec::new(), line }
    }

    /// Appends points from separate coordinate columns, truncated to the
    /// shortest column.
    pub fn add_points(&mut self, x: &[f64], y: &[f64], z: &[f64]) {
        let size = x.len().min(y.len()).min(z.len());
        self.points.reserve(size);
        self.points
            .extend((0..size).map(|i| DVec3::new(x[i], y[i], z[i])));
    }

    pub(crate) fn emit(&self, id: NodeId, outer: &DMat4, camera: &Camera, out: &mut FragmentList) {
        let mut f = Fragment::new(FragmentKind::LineSegment);
        f.source = Some(id);
        f.line = self.line;

        let mut prev = None;
        for p in &self.points {
            let cur = place(outer, camera, *p);
            if !cur.0.is_finite() {
                prev = None;
                continue;
            }
            if let Some(prev) = prev {
                f.set_point(0, prev);
                f.set_point(1, cur);
                out.push(f);
            }
            prev = Some(cur);
        }
    }
}
