use crate::camera::Camera;
use crate::coords::{DMat4, DVec3};
use crate::fragment::{Fragment, FragmentKind, FragmentList, FragmentParams};
use crate::paint::{LineStyleId, MarkerPath, SurfaceStyleId};
use crate::scene::NodeId;

use super::place;

/// Scattered markers, one path marker fragment per finite point.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Points {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
    /// Per-point marker scale. Empty means every marker has size 1.
    pub sizes: Vec<f64>,
    pub marker: MarkerPath,
    /// Scale outline stroke width together with the marker.
    pub scale_edges: bool,
    /// Outline stroke.
    pub line: Option<LineStyleId>,
    /// Marker fill.
    pub surface: Option<SurfaceStyleId>,
}

impl Points {
    pub fn new(x: Vec<f64>, y: Vec<f64>, z: Vec<f64>, marker: MarkerPath) -> Self {
        Self {
            x,
            y,
            z,
            sizes: Vec::new(),
            marker,
            scale_edges: true,
            line: None,
            surface: None,
        }
    }

    pub(crate) fn emit(&self, id: NodeId, outer: &DMat4, camera: &Camera, out: &mut FragmentList) {
        let mut f = Fragment::new(FragmentKind::PathMarker);
        f.source = Some(id);
        f.params = Some(FragmentParams::Marker { scale_edges: self.scale_edges });
        f.surface = self.surface;
        f.line = self.line;
        f.path_size = 1.0;

        let has_sizes = !self.sizes.is_empty();
        let mut size = self.x.len().min(self.y.len()).min(self.z.len());
        if has_sizes {
            size = size.min(self.sizes.len());
        }

        for i in 0..size {
            f.set_point(0, place(outer, camera, DVec3::new(self.x[i], self.y[i], self.z[i])));
            if has_sizes {
                f.path_size = self.sizes[i];
            }
            if f.is_finite() && f.path_size.is_finite() {
                out.push(f);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit(points: &Points) -> FragmentList {
        let mut cam = Camera::default();
        cam.set_projection(DMat4::IDENTITY);
        let mut out = FragmentList::new();
        points.emit(NodeId(0), &DMat4::IDENTITY, &cam, &mut out);
        out
    }

    #[test]
    fn one_marker_per_finite_point() {
        let pts = Points::new(
            vec![0.0, 1.0, f64::NAN, 3.0],
            vec![0.0; 4],
            vec![0.0; 4],
            MarkerPath::square(1.0),
        );
        let out = emit(&pts);
        assert_eq!(out.len(), 3);
        assert!(out.fragments().iter().all(|f| f.kind == FragmentKind::PathMarker && f.path_size == 1.0));
    }

    #[test]
    fn sizes_override_and_truncate() {
        let mut pts = Points::new(vec![0.0, 1.0, 2.0], vec![0.0; 3], vec![0.0; 3], MarkerPath::circle(1.0, 8));
        pts.sizes = vec![2.0, 5.0];
        let out = emit(&pts);
        let sizes: Vec<f64> = out.fragments().iter().map(|f| f.path_size).collect();
        assert_eq!(sizes, vec![2.0, 5.0]);
    }

    #[test]
    fn markers_carry_edge_scaling_flag() {
        let mut pts = Points::new(vec![0.0], vec![0.0], vec![0.0], MarkerPath::square(1.0));
        pts.scale_edges = false;
        let out = emit(&pts);
        assert_eq!(out.fragments()[0].params, Some(FragmentParams::Marker { scale_edges: false }));
    }
}
