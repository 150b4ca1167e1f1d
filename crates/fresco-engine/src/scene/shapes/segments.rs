use crate::camera::Camera;
use crate::coords::{DMat4, DVec3};
use crate::fragment::{Fragment, FragmentKind, FragmentList};
use crate::paint::LineStyleId;
use crate::scene::NodeId;

use super::place;

/// Independent line segments given as start/end pairs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineSegments {
    pub segments: Vec<[DVec3; 2]>,
    pub line: Option<LineStyleId>,
}

impl LineSegments {
    /// Builds segments from six coordinate columns, truncated to the shortest.
    pub fn from_columns(
        x1: &[f64],
        y1: &[f64],
        z1: &[f64],
        x2: &[f64],
        y2: &[f64],
        z2: &[f64],
        line: Option<LineStyleId>,
    ) -> Self {
        let size = [x1.len(), y1.len(), z1.len(), x2.len(), y2.len(), z2.len()]
            .into_iter()
            .min()
            .unwrap_or(0);
        let segments = (0..size)
            .map(|i| [DVec3::new(x1[i], y1[i], z1[i]), DVec3::new(x2[i], y2[i], z2[i])])
            .collect();
        Self { segments, line }
    }

    /// Builds segments from two flat `x, y, z, x, y, z, ...` sequences.
    pub fn from_triples(starts: &[f64], ends: &[f64], line: Option<LineStyleId>) -> Self {
        let segments = starts
            .chunks_exact(3)
            .zip(ends.chunks_exact(3))
            .map(|(a, b)| [DVec3::new(a[0], a[1], a[2]), DVec3::new(b[0], b[1], b[2])])
            .collect();
        Self { segments, line }
    }

    pub(crate) fn emit(&self, id: NodeId, outer: &DMat4, camera: &Camera, out: &mut FragmentList) {
        let mut f = Fragment::new(FragmentKind::LineSegment);
        f.source = Some(id);
        f.line = self.line;

        for [a, b] in &self.segments {
            f.set_point(0, place(outer, camera, *a));
            f.set_point(1, place(outer, camera, *b));
            if f.is_finite() {
                out.push(f);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_with_missing_end_are_skipped() {
        let segs = LineSegments::from_columns(
            &[0.0, 1.0, 2.0],
            &[0.0; 3],
            &[0.0; 3],
            &[0.0, f64::INFINITY, 2.0],
            &[1.0; 3],
            &[0.0; 3],
            None,
        );
        let mut cam = Camera::default();
        cam.set_projection(DMat4::IDENTITY);
        let mut out = FragmentList::new();
        segs.emit(NodeId(0), &DMat4::IDENTITY, &cam, &mut out);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn triples_ignore_trailing_partial_point() {
        let segs = LineSegments::from_triples(&[0.0, 0.0, 0.0, 1.0], &[1.0, 1.0, 1.0], None);
        assert_eq!(segs.segments.len(), 1);
        assert_eq!(segs.segments[0][1], DVec3::new(1.0, 1.0, 1.0));
    }
}
