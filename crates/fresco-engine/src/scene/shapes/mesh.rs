use crate::camera::Camera;
use crate::coords::{Axis, DMat4, DVec3};
use crate::error::SceneError;
use crate::fragment::{Fragment, FragmentKind, FragmentList};
use crate::paint::{LineStyleId, SurfaceStyleId};
use crate::scene::NodeId;

use super::{grid_axes, place};

/// Height field over a regular grid.
///
/// `heights[i1 * pos2.len() + i2]` is the height at `(pos1[i1], pos2[i2])`.
/// Which spatial axes `pos1`, `pos2` and the height map onto is picked by
/// `height_axis` (see [`grid_axes`]).
///
/// The wireframe is drawn when `line` is set, the surface when `surface` is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub pos1: Vec<f64>,
    pub pos2: Vec<f64>,
    pub heights: Vec<f64>,
    pub height_axis: Axis,
    pub line: Option<LineStyleId>,
    pub surface: Option<SurfaceStyleId>,
    /// Suppress wireframe lines running along axis 1.
    pub hide_lines_1: bool,
    /// Suppress wireframe lines running along axis 2.
    pub hide_lines_2: bool,
}

impl Mesh {
    pub fn new(
        pos1: Vec<f64>,
        pos2: Vec<f64>,
        heights: Vec<f64>,
        height_axis: Axis,
        line: Option<LineStyleId>,
        surface: Option<SurfaceStyleId>,
    ) -> Self {
        Self {
            pos1,
            pos2,
            heights,
            height_axis,
            line,
            surface,
            hide_lines_1: false,
            hide_lines_2: false,
        }
    }

    pub(crate) fn emit(&self, id: NodeId, outer: &DMat4, camera: &Camera, out: &mut FragmentList) {
        let cells = self.pos1.len() * self.pos2.len();
        if self.heights.len() < cells {
            out.report(SceneError::SizeMismatch { cells, values: self.heights.len() });
            return;
        }

        self.emit_lines(id, outer, camera, out);
        self.emit_surface(id, outer, camera, out);
    }

    fn emit_lines(&self, id: NodeId, outer: &DMat4, camera: &Camera, out: &mut FragmentList) {
        let Some(line) = self.line else {
            return;
        };
        let (vidx_h, vidx_1, vidx_2) = grid_axes(self.height_axis);

        let mut f = Fragment::new(FragmentKind::LineSegment);
        f.source = Some(id);
        f.line = Some(line);

        let n2 = self.pos2.len();

        // Step 0 walks along axis 1 with axis 2 fixed, step 1 the reverse.
        // The two walks own disjoint edges.
        for step in 0..2 {
            if (step == 0 && self.hide_lines_1) || (step == 1 && self.hide_lines_2) {
                continue;
            }
            let (vec_step, vec_const) = if step == 0 { (&self.pos1, &self.pos2) } else { (&self.pos2, &self.pos1) };
            let (vidx_step, vidx_const) = if step == 0 { (vidx_1, vidx_2) } else { (vidx_2, vidx_1) };

            let mut pt = DVec3::ZERO;
            for (ci, &cv) in vec_const.iter().enumerate() {
                pt[vidx_const] = cv;
                let mut prev = None;

                for (si, &sv) in vec_step.iter().enumerate() {
                    let hidx = if step == 0 { si * n2 + ci } else { ci * n2 + si };
                    pt[vidx_step] = sv;
                    pt[vidx_h] = self.heights[hidx];

                    let cur = place(outer, camera, pt);
                    if let Some(prev) = prev {
                        f.set_point(0, prev);
                        f.set_point(1, cur);
                        if f.is_finite() {
                            out.push(f);
                        }
                    }
                    prev = Some(cur);
                }
            }
        }
    }

    fn emit_surface(&self, id: NodeId, outer: &DMat4, camera: &Camera, out: &mut FragmentList) {
        let Some(surface) = self.surface else {
            return;
        };
        let (vidx_h, vidx_1, vidx_2) = grid_axes(self.height_axis);

        let mut f = Fragment::new(FragmentKind::Triangle);
        f.source = Some(id);
        f.surface = Some(surface);

        let n1 = self.pos1.len();
        let n2 = self.pos2.len();

        let corner = |i1: usize, i2: usize| {
            let mut p = DVec3::ZERO;
            p[vidx_h] = self.heights[i1 * n2 + i2];
            p[vidx_1] = self.pos1[i1];
            p[vidx_2] = self.pos2[i2];
            p
        };

        for i1 in 0..n1.saturating_sub(1) {
            for i2 in 0..n2.saturating_sub(1) {
                let p0 = corner(i1, i2);
                let p1 = corner(i1 + 1, i2);
                let p2 = corner(i1, i2 + 1);
                let p3 = corner(i1 + 1, i2 + 1);
                if !(p0 + p1 + p2 + p3).is_finite() {
                    continue;
                }

                f.set_point(1, place(outer, camera, p1));
                f.set_point(2, place(outer, camera, p2));

                // Two triangles sharing the p1-p2 diagonal.
                for p in [p0, p3] {
                    f.set_point(0, place(outer, camera, p));
                    out.push(f);
                }
            }
        }
    }
}
