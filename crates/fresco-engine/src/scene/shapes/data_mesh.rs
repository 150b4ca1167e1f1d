use crate::camera::Camera;
use crate::coords::{Axis, DMat4, DVec3};
use crate::error::SceneError;
use crate::fragment::{Fragment, FragmentKind, FragmentList};
use crate::paint::{LineStyleId, SurfaceStyleId};
use crate::scene::NodeId;

use super::place;

// Each cell synthesizes 9 points, indexed `a * 3 + b` where `a` steps along
// axis 1 (low edge, middle, high edge) and `b` along axis 2:
//
//   b:   0   1   2
//   a=0  0 - 1 - 2
//        |   |   |
//   a=1  3 - 4 - 5
//        |   |   |
//   a=2  6 - 7 - 8
//
// 4 is the cell center, 1/3/5/7 edge midpoints, 0/2/6/8 corners.

const TRIS_LOW_RES: [[usize; 3]; 2] = [[0, 2, 8], [0, 6, 8]];

const TRIS_HIGH_RES: [[usize; 3]; 8] = [
    [0, 1, 4],
    [1, 2, 4],
    [2, 5, 4],
    [5, 8, 4],
    [8, 7, 4],
    [7, 6, 4],
    [6, 3, 4],
    [3, 0, 4],
];

/// Point indices of each cell edge, in the local edge-id order used by
/// [`EdgeTracker`]: 0 = low axis-1 side, 1 = high axis-2 side,
/// 2 = high axis-1 side, 3 = low axis-2 side.
const EDGE_POINTS: [[usize; 3]; 4] = [[0, 1, 2], [2, 5, 8], [6, 7, 8], [0, 3, 6]];

/// Records which grid edges have been drawn so shared edges are drawn once.
///
/// Edges are stored at their lower grid vertex with one bit per direction,
/// so the two cells adjoining an interior edge map it to the same bit.
#[derive(Debug, Clone)]
pub struct EdgeTracker {
    n2: usize,
    bits: Vec<u8>,
}

impl EdgeTracker {
    const ALONG_1: u8 = 1;
    const ALONG_2: u8 = 2;

    /// Tracker for a grid of `n1 x n2` cells.
    pub fn new(n1: usize, n2: usize) -> Self {
        Self { n2: n2 + 1, bits: vec![0; (n1 + 1) * (n2 + 1)] }
    }

    /// Claims local edge `edge` (0-3) of cell `(i1, i2)`. Returns `true` the
    /// first time the underlying grid edge is claimed.
    pub fn claim(&mut self, i1: usize, i2: usize, edge: usize) -> bool {
        let (v1, v2, bit) = match edge {
            0 => (i1, i2, Self::ALONG_2),
            1 => (i1, i2 + 1, Self::ALONG_1),
            2 => (i1 + 1, i2, Self::ALONG_2),
            _ => (i1, i2, Self::ALONG_1),
        };
        let slot = &mut self.bits[v1 * self.n2 + v2];
        let fresh = *slot & bit == 0;
        *slot |= bit;
        fresh
    }
}

/// Irregular grid with one value per cell, drawn as a smoothed surface.
///
/// `values[i1 * (edges2.len() - 1) + i2]` is the value of the cell spanning
/// `edges1[i1]..edges1[i1 + 1]` and `edges2[i2]..edges2[i2 + 1]`. The value
/// goes on `value_axis`; the cell edges on `axis1`/`axis2`.
///
/// Corner and edge heights are averaged from the adjoining cells, ignoring
/// missing ones, so the surface stays continuous around gaps.
#[derive(Debug, Clone, PartialEq)]
pub struct DataMesh {
    pub edges1: Vec<f64>,
    pub edges2: Vec<f64>,
    pub values: Vec<f64>,
    pub value_axis: Axis,
    pub axis1: Axis,
    pub axis2: Axis,
    /// 8 triangles per cell around the center instead of 2.
    pub high_res: bool,
    pub line: Option<LineStyleId>,
    pub surface: Option<SurfaceStyleId>,
    /// Suppress grid lines running along axis 1.
    pub hide_lines_1: bool,
    /// Suppress grid lines running along axis 2.
    pub hide_lines_2: bool,
}

impl DataMesh {
    pub fn new(
        edges1: Vec<f64>,
        edges2: Vec<f64>,
        values: Vec<f64>,
        value_axis: Axis,
        axis1: Axis,
        axis2: Axis,
    ) -> Self {
        Self {
            edges1,
            edges2,
            values,
            value_axis,
            axis1,
            axis2,
            high_res: false,
            line: None,
            surface: None,
            hide_lines_1: false,
            hide_lines_2: false,
        }
    }

    /// Number of cells along each axis.
    #[inline]
    pub fn cell_counts(&self) -> (usize, usize) {
        (self.edges1.len().saturating_sub(1), self.edges2.len().saturating_sub(1))
    }

    /// Checks axes and sizes.
    pub fn validate(&self) -> Result<(), SceneError> {
        if !Axis::is_permutation(self.value_axis, self.axis1, self.axis2) {
            return Err(SceneError::InvalidAxes {
                value: self.value_axis,
                axis1: self.axis1,
                axis2: self.axis2,
            });
        }
        let (n1, n2) = self.cell_counts();
        if n1 * n2 != self.values.len() {
            return Err(SceneError::SizeMismatch { cells: n1 * n2, values: self.values.len() });
        }
        Ok(())
    }

    pub(crate) fn emit(&self, id: NodeId, outer: &DMat4, camera: &Camera, out: &mut FragmentList) {
        if let Err(err) = self.validate() {
            out.report(err);
            return;
        }
        if self.line.is_none() && self.surface.is_none() {
            return;
        }

        let mut tri = Fragment::new(FragmentKind::Triangle);
        tri.source = Some(id);
        tri.surface = self.surface;

        let mut seg = Fragment::new(FragmentKind::LineSegment);
        seg.source = Some(id);
        seg.line = self.line;

        let (n1, n2) = self.cell_counts();
        let mut tracker = EdgeTracker::new(n1, n2);

        for i1 in 0..n1 {
            for i2 in 0..n2 {
                if !self.values[i1 * n2 + i2].is_finite() {
                    continue;
                }

                let heights = self.cell_heights(i1, i2);
                let placed = self.cell_points(i1, i2, &heights).map(|p| place(outer, camera, p));

                if self.surface.is_some() {
                    let tris: &[[usize; 3]] = if self.high_res { &TRIS_HIGH_RES } else { &TRIS_LOW_RES };
                    for t in tris {
                        for (k, &pi) in t.iter().enumerate() {
                            tri.set_point(k, placed[pi]);
                        }
                        if tri.is_finite() {
                            out.push(tri);
                        }
                    }
                }

                if self.line.is_some() {
                    for (edge, pts) in EDGE_POINTS.iter().enumerate() {
                        // Edges 1 and 3 run along axis 1, 0 and 2 along axis 2.
                        let along_1 = edge % 2 == 1;
                        if (along_1 && self.hide_lines_1) || (!along_1 && self.hide_lines_2) {
                            continue;
                        }
                        if !tracker.claim(i1, i2, edge) {
                            continue;
                        }

                        let halves = [[pts[0], pts[1]], [pts[1], pts[2]]];
                        let whole = [[pts[0], pts[2]]];
                        let spans: &[[usize; 2]] = if self.high_res { &halves } else { &whole };
                        for &[a, b] in spans {
                            seg.set_point(0, placed[a]);
                            seg.set_point(1, placed[b]);
                            if seg.is_finite() {
                                out.push(seg);
                            }
                        }
                    }
                }
            }
        }
    }

    /// Heights of the 9 synthesized points of cell `(i1, i2)`.
    fn cell_heights(&self, i1: usize, i2: usize) -> [f64; 9] {
        let (n1, n2) = self.cell_counts();

        // 3x3 neighbourhood, clamped at the grid boundary.
        let mut nv = [0.0; 9];
        for d1 in 0..3 {
            let c1 = (i1 + d1).saturating_sub(1).min(n1 - 1);
            for d2 in 0..3 {
                let c2 = (i2 + d2).saturating_sub(1).min(n2 - 1);
                nv[d1 * 3 + d2] = self.values[c1 * n2 + c2];
            }
        }

        [
            average(&[nv[0], nv[1], nv[3], nv[4]]),
            average(&[nv[1], nv[4]]),
            average(&[nv[1], nv[2], nv[4], nv[5]]),
            average(&[nv[3], nv[4]]),
            nv[4],
            average(&[nv[4], nv[5]]),
            average(&[nv[3], nv[4], nv[6], nv[7]]),
            average(&[nv[4], nv[7]]),
            average(&[nv[4], nv[5], nv[7], nv[8]]),
        ]
    }

    /// Object-space positions of the 9 synthesized points.
    fn cell_points(&self, i1: usize, i2: usize, heights: &[f64; 9]) -> [DVec3; 9] {
        let e1 = [self.edges1[i1], 0.5 * (self.edges1[i1] + self.edges1[i1 + 1]), self.edges1[i1 + 1]];
        let e2 = [self.edges2[i2], 0.5 * (self.edges2[i2] + self.edges2[i2 + 1]), self.edges2[i2 + 1]];

        let mut pts = [DVec3::ZERO; 9];
        for (k, p) in pts.iter_mut().enumerate() {
            p[self.value_axis.index()] = heights[k];
            p[self.axis1.index()] = e1[k / 3];
            p[self.axis2.index()] = e2[k % 3];
        }
        pts
    }
}

/// Mean of the finite entries; NaN when none are finite.
fn average(vals: &[f64]) -> f64 {
    let (sum, n) = vals
        .iter()
        .filter(|v| v.is_finite())
        .fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if n == 0 { f64::NAN } else { sum / n as f64 }
}
