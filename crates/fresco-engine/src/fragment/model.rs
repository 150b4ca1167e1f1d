use crate::coords::{DMat4, DVec2, DVec3, DVec4, Rect};
use crate::paint::{LineStyleId, SurfaceStyleId};
use crate::scene::NodeId;

use super::FragmentKind;

/// Depth bias subtracted from line segments (twice for markers), so that at
/// equal nominal depth lines paint over surfaces and markers over lines.
pub const LINE_DELTA_DEPTH: f64 = 1e-3;

/// Side-channel data for the painting backend.
///
/// The payload the backend actually draws (marker outline, label drawer)
/// stays on the source node and is looked up through [`Fragment::source`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum FragmentParams {
    /// Marker outline from the source `Points` node.
    Marker {
        /// Whether outline stroke width scales with `path_size`.
        scale_edges: bool,
    },
    /// Label anchor from the source `Text` node.
    Label {
        /// Item index within the source node.
        index: usize,
        /// Second anchor, in the same space as `points[0]`.
        anchor: DVec3,
    },
}

/// A projected drawable piece: triangle, line segment or path marker.
///
/// Only the first `kind.n_points()` entries of `points`, `projected` and `clip_w` are
/// meaningful.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Fragment {
    pub kind: FragmentKind,
    /// Node that produced this fragment. Fragments sharing a source are never
    /// split against each other.
    pub source: Option<NodeId>,
    pub params: Option<FragmentParams>,
    pub surface: Option<SurfaceStyleId>,
    pub line: Option<LineStyleId>,
    /// Camera-space control points.
    pub points: [DVec3; 3],
    /// Projected control points; `z` is depth.
    pub projected: [DVec3; 3],
    /// Clip-space `w` of each control point before the divide. Stays 1 under
    /// affine projections; splitting needs it for perspective-correct points.
    pub clip_w: [f64; 3],
    /// Marker scale (path markers only).
    pub path_size: f64,
    /// Number of subdivisions between this fragment and its generated ancestor.
    pub split_count: u32,
    /// Assigned by [`FragmentList::push`](super::FragmentList::push).
    pub creation_index: u32,
}

impl Default for Fragment {
    fn default() -> Self {
        Self::new(FragmentKind::None)
    }
}

impl Fragment {
    #[inline]
    pub const fn new(kind: FragmentKind) -> Self {
        Self {
            kind,
            source: None,
            params: None,
            surface: None,
            line: None,
            points: [DVec3::ZERO; 3],
            projected: [DVec3::ZERO; 3],
            clip_w: [1.0; 3],
            path_size: 0.0,
            split_count: 0,
            creation_index: 0,
        }
    }

    #[inline]
    pub fn n_points(&self) -> usize {
        self.kind.n_points()
    }

    pub fn min_depth(&self) -> f64 {
        let p = &self.projected;
        match self.kind {
            FragmentKind::Triangle => p[0].z.min(p[1].z).min(p[2].z),
            FragmentKind::LineSegment => p[0].z.min(p[1].z) - LINE_DELTA_DEPTH,
            FragmentKind::PathMarker => p[0].z - 2.0 * LINE_DELTA_DEPTH,
            FragmentKind::None => f64::INFINITY,
        }
    }

    pub fn max_depth(&self) -> f64 {
        let p = &self.projected;
        match self.kind {
            FragmentKind::Triangle => p[0].z.max(p[1].z).max(p[2].z),
            FragmentKind::LineSegment => p[0].z.max(p[1].z) - LINE_DELTA_DEPTH,
            FragmentKind::PathMarker => p[0].z - 2.0 * LINE_DELTA_DEPTH,
            FragmentKind::None => f64::INFINITY,
        }
    }

    pub fn mean_depth(&self) -> f64 {
        let p = &self.projected;
        match self.kind {
            FragmentKind::Triangle => (p[0].z + p[1].z + p[2].z) / 3.0,
            FragmentKind::LineSegment => (p[0].z + p[1].z) * 0.5 - LINE_DELTA_DEPTH,
            FragmentKind::PathMarker => p[0].z - 2.0 * LINE_DELTA_DEPTH,
            FragmentKind::None => f64::INFINITY,
        }
    }

    /// Depth bias applied to this kind by the depth metrics.
    #[inline]
    pub fn depth_bias(&self) -> f64 {
        match self.kind {
            FragmentKind::LineSegment => LINE_DELTA_DEPTH,
            FragmentKind::PathMarker => 2.0 * LINE_DELTA_DEPTH,
            FragmentKind::Triangle | FragmentKind::None => 0.0,
        }
    }

    /// Sets control point `i` from its camera-space position and clip-space
    /// image.
    #[inline]
    pub fn set_point(&mut self, i: usize, (point, clip): (DVec3, DVec4)) {
        self.points[i] = point;
        self.projected[i] = clip.truncate() / clip.w;
        self.clip_w[i] = clip.w;
    }

    /// Recomputes `projected` from `points`. Must be called after `points`
    /// change; nothing tracks staleness.
    pub fn update_proj_coords(&mut self, proj: &DMat4) {
        for i in 0..self.n_points() {
            let p = self.points[i];
            self.set_point(i, (p, *proj * p.extend(1.0)));
        }
    }

    /// Screen-space positions of the meaningful points.
    pub fn screen_points(&self) -> impl Iterator<Item = DVec2> + '_ {
        self.projected[..self.n_points()].iter().map(|p| p.truncate())
    }

    /// Screen-space bounds of the meaningful points.
    pub fn bounds(&self) -> Rect {
        let n = self.n_points();
        let mut pts = [DVec2::ZERO; 3];
        for (dst, p) in pts.iter_mut().zip(&self.projected[..n]) {
            *dst = p.truncate();
        }
        Rect::from_points(&pts[..n])
    }

    /// `true` when every meaningful control point is finite.
    pub fn is_finite(&self) -> bool {
        self.points[..self.n_points()].iter().all(|p| p.is_finite())
    }
}
