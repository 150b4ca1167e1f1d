//! Overlap resolution for painter's-order drawing.
//!
//! Two triangles whose screen footprints overlap and whose depth planes cross
//! inside that overlap cannot be ordered as wholes. The splitter cuts them
//! along the crossing line so every piece has a single unambiguous order.
//! Line segments and markers are never cut; their biased scalar depth is
//! enough to place them.
//!
//! Every operation reports how many pieces each input became, `(1, 1)`
//! meaning both were left untouched. Pieces inherit their parent's
//! `creation_index` and carry `split_count + 1`; parents already at
//! [`SplitConfig::max_split_depth`] are never cut again.

mod clip;
mod interp;

use crate::coords::DVec2;
use crate::fragment::{Fragment, FragmentKind};

use clip::HalfPlane;
use interp::TriangleInterp;

/// Parents at this split count are no longer subdivided.
pub const MAX_SPLIT_DEPTH: u32 = 6;
/// Overlaps and pieces at or below this projected area are ignored.
pub const AREA_EPSILON: f64 = 1e-9;
/// Depth differences within this tolerance count as ties.
pub const DEPTH_EPSILON: f64 = 1e-9;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SplitConfig {
    pub max_split_depth: u32,
    pub area_epsilon: f64,
    pub depth_epsilon: f64,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            max_split_depth: MAX_SPLIT_DEPTH,
            area_epsilon: AREA_EPSILON,
            depth_epsilon: DEPTH_EPSILON,
        }
    }
}

/// Geometry shared by the two triangle operations.
struct Overlap<'a> {
    interp: [TriangleInterp<'a>; 2],
    footprint: [Vec<DVec2>; 2],
    polygon: Vec<DVec2>,
    /// `depth1 - depth2 >= 0` side, when the planes cross inside `polygon`.
    cut: Option<HalfPlane>,
}

/// Overlap/split engine with a fixed configuration.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Splitter {
    pub config: SplitConfig,
}

impl Splitter {
    #[inline]
    pub fn new(config: SplitConfig) -> Self {
        Self { config }
    }

    /// Representative depth of each fragment over the region where their
    /// screen footprints overlap.
    ///
    /// Falls back to [`Fragment::mean_depth`] when there is no such region
    /// (including pairs of markers, which have no extent).
    pub fn overlap_depth(&self, f1: &Fragment, f2: &Fragment) -> (f64, f64) {
        use FragmentKind::{LineSegment, PathMarker, Triangle};

        let swap = |(a, b): (f64, f64)| (b, a);
        let sampled = match (f1.kind, f2.kind) {
            (Triangle, Triangle) => self.triangle_pair_depth(f1, f2),
            (Triangle, LineSegment) => triangle_segment_depth(f1, f2),
            (LineSegment, Triangle) => triangle_segment_depth(f2, f1).map(swap),
            (Triangle, PathMarker) => triangle_marker_depth(f1, f2),
            (PathMarker, Triangle) => triangle_marker_depth(f2, f1).map(swap),
            (LineSegment, LineSegment) => segment_pair_depth(f1, f2),
            _ => None,
        };
        sampled.unwrap_or_else(|| (f1.mean_depth(), f2.mean_depth()))
    }

    /// Cuts two depth-interleaved triangles along their depth crossing,
    /// appending `f1`'s pieces and then `f2`'s to `out`.
    ///
    /// Anything that needs no cut is appended unchanged as `(1, 1)`.
    pub fn split_fragments(&self, f1: &Fragment, f2: &Fragment, out: &mut Vec<Fragment>) -> (usize, usize) {
        let cut = self
            .overlap(f1, f2)
            .filter(|_| self.depths_interleave(f1, f2))
            .and_then(|o| o.cut.map(|cut| (o, cut)));

        let Some((overlap, cut)) = cut else {
            out.push(*f1);
            out.push(*f2);
            return (1, 1);
        };

        let eps = self.config.area_epsilon;
        let mut counts = [0usize; 2];
        for (k, parent) in [f1, f2].into_iter().enumerate() {
            let fp = &overlap.footprint[k];
            let tris: Vec<[DVec2; 3]> = [clip::clip(fp, cut), clip::clip(fp, cut.flipped())]
                .iter()
                .flat_map(|half| clip::triangulate(half, eps))
                .collect();

            if tris.len() <= 1 {
                out.push(*parent);
                counts[k] = 1;
            } else {
                counts[k] = tris.len();
                out.extend(tris.into_iter().map(|t| overlap.interp[k].piece(t)));
            }
        }
        log::trace!("split pair into {}+{} pieces", counts[0], counts[1]);
        (counts[0], counts[1])
    }

    /// In-place variant over a shared fragment buffer.
    ///
    /// Each triangle becomes the overlap region (cut along the depth crossing
    /// when there is one) plus its remainder outside the other footprint. The
    /// first piece of each input replaces it at its index; the rest are
    /// appended, `n1 - 1` pieces of the first input followed by `n2 - 1` of
    /// the second. An input that comes out as a single piece keeps its
    /// original fragment.
    pub fn split_on_2d_overlap(&self, fragments: &mut Vec<Fragment>, idx1: usize, idx2: usize) -> (usize, usize) {
        if idx1 == idx2 || idx1 >= fragments.len() || idx2 >= fragments.len() {
            return (1, 1);
        }
        let (f1, f2) = (fragments[idx1], fragments[idx2]);
        let Some(overlap) = self.overlap(&f1, &f2) else {
            return (1, 1);
        };

        let eps = self.config.area_epsilon;
        let shared: Vec<Vec<DVec2>> = match overlap.cut {
            Some(cut) => vec![clip::clip(&overlap.polygon, cut), clip::clip(&overlap.polygon, cut.flipped())],
            None => vec![overlap.polygon.clone()],
        };

        let mut pieces: [Vec<Fragment>; 2] = [Vec::new(), Vec::new()];
        for k in 0..2 {
            let rest = clip::subtract_convex(&overlap.footprint[k], &overlap.footprint[1 - k], eps);
            pieces[k] = shared
                .iter()
                .chain(rest.iter())
                .flat_map(|poly| clip::triangulate(poly, eps))
                .map(|t| overlap.interp[k].piece(t))
                .collect();
        }
        if pieces.iter().any(Vec::is_empty) {
            return (1, 1);
        }

        let [p1, p2] = pieces;
        let (n1, n2) = (p1.len(), p2.len());
        if n1 == 1 && n2 == 1 {
            return (1, 1);
        }
        if n1 > 1 {
            fragments[idx1] = p1[0];
        }
        if n2 > 1 {
            fragments[idx2] = p2[0];
        }
        fragments.extend_from_slice(&p1[1..]);
        fragments.extend_from_slice(&p2[1..]);
        log::trace!("split overlap of #{idx1} and #{idx2} into {n1}+{n2} pieces");
        (n1, n2)
    }

    /// Overlap geometry of two splittable triangles, or `None` when the pair
    /// must be left alone.
    fn overlap<'a>(&self, f1: &'a Fragment, f2: &'a Fragment) -> Option<Overlap<'a>> {
        if f1.source.is_some() && f1.source == f2.source {
            return None;
        }
        let cap = self.config.max_split_depth;
        if f1.split_count >= cap || f2.split_count >= cap {
            return None;
        }

        let interp = [TriangleInterp::new(f1)?, TriangleInterp::new(f2)?];
        f1.bounds().intersect(f2.bounds())?;
        let footprint = [interp[0].footprint(), interp[1].footprint()];
        let polygon = clip::intersect_convex(&footprint[0], &footprint[1]);
        if clip::area(&polygon) <= self.config.area_epsilon {
            return None;
        }

        let (p1, p2) = (interp[0].depth_plane(), interp[1].depth_plane());
        let diff = HalfPlane::new(p1.normal - p2.normal, p1.offset - p2.offset);
        let (lo, hi) = polygon
            .iter()
            .map(|&v| diff.eval(v))
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), d| (lo.min(d), hi.max(d)));
        let eps = self.config.depth_epsilon;
        let cut = (lo < -eps && hi > eps).then_some(diff);

        Some(Overlap { interp, footprint, polygon, cut })
    }

    fn depths_interleave(&self, f1: &Fragment, f2: &Fragment) -> bool {
        let eps = self.config.depth_epsilon;
        f1.max_depth() > f2.min_depth() + eps && f2.max_depth() > f1.min_depth() + eps
    }

    fn triangle_pair_depth(&self, f1: &Fragment, f2: &Fragment) -> Option<(f64, f64)> {
        let (i1, i2) = (TriangleInterp::new(f1)?, TriangleInterp::new(f2)?);
        let polygon = clip::intersect_convex(&i1.footprint(), &i2.footprint());
        if clip::area(&polygon) <= self.config.area_epsilon {
            return None;
        }
        let (p1, p2) = (i1.depth_plane(), i2.depth_plane());
        let n = polygon.len() as f64;
        let (s1, s2) = polygon
            .iter()
            .fold((0.0, 0.0), |(s1, s2), &v| (s1 + p1.eval(v), s2 + p2.eval(v)));
        Some((s1 / n, s2 / n))
    }
}

fn segment_depth_at(f: &Fragment, t: f64) -> f64 {
    let (a, b) = (f.projected[0].z, f.projected[1].z);
    a + (b - a) * t - f.depth_bias()
}

fn triangle_segment_depth(tri: &Fragment, seg: &Fragment) -> Option<(f64, f64)> {
    let it = TriangleInterp::new(tri)?;
    let footprint = it.footprint();
    let (a, b) = (seg.projected[0].truncate(), seg.projected[1].truncate());
    let (t0, t1) = clip::clip_segment(a, b, clip::edge_planes(&footprint))?;
    let t = 0.5 * (t0 + t1);
    let q = a + (b - a) * t;
    Some((it.depth_plane().eval(q), segment_depth_at(seg, t)))
}

fn triangle_marker_depth(tri: &Fragment, marker: &Fragment) -> Option<(f64, f64)> {
    let it = TriangleInterp::new(tri)?;
    let footprint = it.footprint();
    let q = marker.projected[0].truncate();
    clip::edge_planes(&footprint)
        .all(|plane| plane.eval(q) >= 0.0)
        .then(|| (it.depth_plane().eval(q), marker.mean_depth()))
}

fn segment_pair_depth(f1: &Fragment, f2: &Fragment) -> Option<(f64, f64)> {
    let (a0, a1) = (f1.projected[0].truncate(), f1.projected[1].truncate());
    let (b0, b1) = (f2.projected[0].truncate(), f2.projected[1].truncate());
    let (t, u) = clip::segment_crossing(a0, a1, b0, b1)?;
    Some((segment_depth_at(f1, t), segment_depth_at(f2, u)))
}

/// [`Splitter::overlap_depth`] with the default configuration.
pub fn overlap_depth(f1: &Fragment, f2: &Fragment) -> (f64, f64) {
    Splitter::default().overlap_depth(f1, f2)
}

/// [`Splitter::split_fragments`] with the default configuration.
pub fn split_fragments(f1: &Fragment, f2: &Fragment, out: &mut Vec<Fragment>) -> (usize, usize) {
    Splitter::default().split_fragments(f1, f2, out)
}

/// [`Splitter::split_on_2d_overlap`] with the default configuration.
pub fn split_on_2d_overlap(fragments: &mut Vec<Fragment>, idx1: usize, idx2: usize) -> (usize, usize) {
    Splitter::default().split_on_2d_overlap(fragments, idx1, idx2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Camera;
    use crate::coords::{DMat4, DVec3};
    use crate::fragment::LINE_DELTA_DEPTH;
    use crate::scene::{Container, NodeId, Scene, Triangle};

    fn frag(kind: FragmentKind, source: u32, pts: &[(f64, f64, f64)]) -> Fragment {
        let mut f = Fragment::new(kind);
        f.source = Some(NodeId(source));
        for (i, &(x, y, z)) in pts.iter().enumerate() {
            f.projected[i] = DVec3::new(x, y, z);
            f.points[i] = DVec3::new(x, y, -z);
        }
        f
    }

    fn tri(source: u32, pts: [(f64, f64, f64); 3]) -> Fragment {
        frag(FragmentKind::Triangle, source, &pts)
    }

    /// Depth grows with x.
    fn ramp_up(source: u32) -> Fragment {
        tri(source, [(0.0, 0.0, 0.0), (2.0, 0.0, 2.0), (0.0, 2.0, 0.0)])
    }

    /// Same footprint as `ramp_up`, depth shrinks with x.
    fn ramp_down(source: u32) -> Fragment {
        tri(source, [(0.0, 0.0, 2.0), (2.0, 0.0, 0.0), (0.0, 2.0, 2.0)])
    }

    fn screen_area(f: &Fragment) -> f64 {
        clip::area(&f.screen_points().collect::<Vec<_>>())
    }

    fn total_area(fs: &[Fragment]) -> f64 {
        fs.iter().map(screen_area).sum()
    }

    // ── overlap_depth ─────────────────────────────────────────────────────

    #[test]
    fn disjoint_depth_ranges_order_cleanly() {
        let near = tri(0, [(0.0, 0.0, 0.0), (2.0, 0.0, 1.0), (0.0, 2.0, 0.5)]);
        let far = tri(1, [(0.0, 0.0, 5.0), (2.0, 0.0, 6.0), (0.0, 2.0, 5.5)]);
        let (d1, d2) = overlap_depth(&near, &far);
        assert!(d1 <= 1.0 && d2 >= 5.0);

        let mut out = Vec::new();
        assert_eq!(split_fragments(&near, &far, &mut out), (1, 1));
        assert_eq!(out, vec![near, far]);
    }

    #[test]
    fn triangle_depth_is_sampled_over_the_overlap() {
        let a = ramp_up(0);
        let b = tri(1, [(1.0, 0.0, 5.0), (3.0, 0.0, 5.0), (1.0, 2.0, 5.0)]);
        let (d1, d2) = overlap_depth(&a, &b);
        // overlap is (1,0) (2,0) (1,1)
        assert!((d1 - 4.0 / 3.0).abs() < 1e-12);
        assert!((d2 - 5.0).abs() < 1e-12);
        assert!(d1 > a.mean_depth());
    }

    #[test]
    fn no_overlap_falls_back_to_mean_depth() {
        let a = ramp_up(0);
        let b = tri(1, [(10.0, 0.0, 1.0), (12.0, 0.0, 1.0), (10.0, 2.0, 4.0)]);
        assert_eq!(overlap_depth(&a, &b), (a.mean_depth(), b.mean_depth()));
    }

    #[test]
    fn segment_over_triangle_samples_clipped_midpoint() {
        let a = ramp_up(0);
        let line = frag(FragmentKind::LineSegment, 1, &[(-1.0, 0.5, 0.25), (3.0, 0.5, 0.25)]);
        let (dl, dt) = overlap_depth(&line, &a);
        assert!((dl - (0.25 - LINE_DELTA_DEPTH)).abs() < 1e-12);
        assert!((dt - 0.75).abs() < 1e-12);
    }

    #[test]
    fn marker_inside_triangle_uses_plane_depth() {
        let a = ramp_up(0);
        let marker = frag(FragmentKind::PathMarker, 1, &[(0.5, 0.5, 0.1)]);
        let (dt, dm) = overlap_depth(&a, &marker);
        assert!((dt - 0.5).abs() < 1e-12);
        assert!((dm - (0.1 - 2.0 * LINE_DELTA_DEPTH)).abs() < 1e-12);

        let outside = frag(FragmentKind::PathMarker, 1, &[(5.0, 5.0, 0.1)]);
        assert_eq!(overlap_depth(&a, &outside), (a.mean_depth(), outside.mean_depth()));
    }

    #[test]
    fn crossing_segments_sample_at_the_crossing() {
        let l1 = frag(FragmentKind::LineSegment, 0, &[(0.0, 0.0, 1.0), (2.0, 2.0, 3.0)]);
        let l2 = frag(FragmentKind::LineSegment, 1, &[(0.0, 2.0, 0.0), (2.0, 0.0, 0.0)]);
        let (d1, d2) = overlap_depth(&l1, &l2);
        assert!((d1 - (2.0 - LINE_DELTA_DEPTH)).abs() < 1e-12);
        assert!((d2 + LINE_DELTA_DEPTH).abs() < 1e-12);
    }

    // ── split_fragments ───────────────────────────────────────────────────

    #[test]
    fn interleaved_triangles_split_along_crossing() {
        let mut a = ramp_up(0);
        a.creation_index = 7;
        let b = ramp_down(1);

        let mut out = Vec::new();
        let (n1, n2) = split_fragments(&a, &b, &mut out);
        assert_eq!((n1, n2), (3, 3));
        assert_eq!(out.len(), 6);

        let (pa, pb) = out.split_at(n1);
        assert!((total_area(pa) - 2.0).abs() < 1e-12);
        assert!((total_area(pb) - 2.0).abs() < 1e-12);
        assert!(pa.iter().all(|f| f.source == a.source && f.creation_index == 7));
        assert!(out.iter().all(|f| f.split_count == 1 && f.split_count <= MAX_SPLIT_DEPTH));

        // pieces of `a` lie entirely on one side of x = 1
        for f in pa {
            let xs: Vec<f64> = f.screen_points().map(|p| p.x).collect();
            let left = xs.iter().all(|&x| x <= 1.0 + 1e-12);
            let right = xs.iter().all(|&x| x >= 1.0 - 1e-12);
            assert!(left || right);
        }
    }

    #[test]
    fn split_output_does_not_split_again() {
        let mut out = Vec::new();
        let (n1, _) = split_fragments(&ramp_up(0), &ramp_down(1), &mut out);
        let (pa, pb) = out.split_at(n1);

        for p in pa {
            for q in pb {
                let mut again = Vec::new();
                assert_eq!(split_fragments(p, q, &mut again), (1, 1));
                assert_eq!(again, vec![*p, *q]);
            }
        }
    }

    #[test]
    fn coplanar_overlap_is_not_split() {
        let a = ramp_up(0);
        let b = tri(1, [(0.0, 0.0, 0.0), (1.0, 0.0, 1.0), (0.0, 1.0, 0.0)]);
        let mut out = Vec::new();
        assert_eq!(split_fragments(&a, &b, &mut out), (1, 1));
        assert_eq!(out, vec![a, b]);
    }

    #[test]
    fn same_source_is_exempt() {
        let mut out = Vec::new();
        assert_eq!(split_fragments(&ramp_up(3), &ramp_down(3), &mut out), (1, 1));
    }

    #[test]
    fn split_cap_stops_subdivision() {
        let a = ramp_up(0);
        let mut b = ramp_down(1);
        b.split_count = MAX_SPLIT_DEPTH;
        let mut out = Vec::new();
        assert_eq!(split_fragments(&a, &b, &mut out), (1, 1));

        let never = Splitter::new(SplitConfig { max_split_depth: 0, ..SplitConfig::default() });
        out.clear();
        assert_eq!(never.split_fragments(&a, &ramp_down(1), &mut out), (1, 1));
    }

    #[test]
    fn touching_triangles_are_not_split() {
        let a = tri(0, [(0.0, 0.0, 0.0), (1.0, 0.0, 2.0), (0.0, 1.0, 0.0)]);
        let b = tri(1, [(1.0, 0.0, 2.0), (2.0, 0.0, 0.0), (1.0, 1.0, 2.0)]);
        let mut out = Vec::new();
        assert_eq!(split_fragments(&a, &b, &mut out), (1, 1));
    }

    #[test]
    fn lines_and_markers_are_never_cut() {
        let a = ramp_up(0);
        let line = frag(FragmentKind::LineSegment, 1, &[(0.0, 0.5, 2.0), (2.0, 0.5, -1.0)]);
        let marker = frag(FragmentKind::PathMarker, 2, &[(0.5, 0.5, 0.5)]);
        let mut out = Vec::new();
        assert_eq!(split_fragments(&a, &line, &mut out), (1, 1));
        assert_eq!(split_fragments(&marker, &a, &mut out), (1, 1));
        assert_eq!(out, vec![a, line, marker, a]);
    }

    // ── split_on_2d_overlap ───────────────────────────────────────────────

    #[test]
    fn in_place_split_replaces_slots_and_appends() {
        let a = ramp_up(0);
        let b = tri(1, [(1.0, 0.0, 5.0), (3.0, 0.0, 5.0), (1.0, 2.0, 5.0)]);
        let marker = frag(FragmentKind::PathMarker, 2, &[(9.0, 9.0, 0.0)]);
        let mut fragments = vec![a, b, marker];

        let (n1, n2) = split_on_2d_overlap(&mut fragments, 0, 1);
        // overlap triangle plus a two-triangle remainder each
        assert_eq!((n1, n2), (3, 3));
        assert_eq!(fragments.len(), 3 + (n1 - 1) + (n2 - 1));
        assert_eq!(fragments[2], marker);

        let of_a: Vec<Fragment> = [0, 3, 4].iter().map(|&i| fragments[i]).collect();
        let of_b: Vec<Fragment> = [1, 5, 6].iter().map(|&i| fragments[i]).collect();
        assert!(of_a.iter().all(|f| f.source == a.source && f.split_count == 1));
        assert!(of_b.iter().all(|f| f.source == b.source && f.split_count == 1));
        assert!((total_area(&of_a) - 2.0).abs() < 1e-12);
        assert!((total_area(&of_b) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn in_place_split_cuts_shared_region_at_crossing() {
        let mut fragments = vec![ramp_up(0), ramp_down(1)];
        let (n1, n2) = split_on_2d_overlap(&mut fragments, 0, 1);
        assert_eq!((n1, n2), (3, 3));
        assert_eq!(fragments.len(), 6);
        assert!((total_area(&fragments) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn in_place_split_leaves_unsplittable_pairs_alone() {
        let line = frag(FragmentKind::LineSegment, 1, &[(0.0, 0.5, 2.0), (2.0, 0.5, -1.0)]);
        let mut fragments = vec![ramp_up(0), line, ramp_down(0)];
        let before = fragments.clone();

        assert_eq!(split_on_2d_overlap(&mut fragments, 0, 1), (1, 1));
        assert_eq!(split_on_2d_overlap(&mut fragments, 0, 2), (1, 1));
        assert_eq!(split_on_2d_overlap(&mut fragments, 0, 0), (1, 1));
        assert_eq!(split_on_2d_overlap(&mut fragments, 0, 9), (1, 1));
        assert_eq!(fragments, before);
    }

    #[test]
    fn in_place_split_keeps_contained_triangle_whole() {
        let small = tri(0, [(0.5, 0.5, 1.0), (1.5, 0.5, 1.0), (0.5, 1.5, 1.0)]);
        let big = tri(1, [(0.0, 0.0, 5.0), (4.0, 0.0, 5.0), (0.0, 4.0, 5.0)]);
        let mut fragments = vec![small, big];

        let (n1, n2) = split_on_2d_overlap(&mut fragments, 0, 1);
        assert_eq!(n1, 1);
        assert!(n2 > 1);
        assert_eq!(fragments[0], small);
        assert_eq!(fragments.len(), 2 + (n2 - 1));
        assert!(fragments[1..].iter().all(|f| f.source == big.source && f.split_count == 1));
        assert!((total_area(&fragments[1..]) - 8.0).abs() < 1e-12);

        // Repeating the call never spends the inner triangle's split budget.
        split_on_2d_overlap(&mut fragments, 0, 1);
        assert_eq!(fragments[0].split_count, 0);
    }

    // ── perspective camera ────────────────────────────────────────────────

    /// Two world-space triangles crossing along `x = 0`, rendered through the
    /// default perspective camera.
    fn crossing_pair(cam: &Camera) -> (Fragment, Fragment) {
        let mut scene = Scene::new();
        let root = scene.add(Container::new(DMat4::IDENTITY));
        let a = [DVec3::new(-1.0, -1.0, 0.5), DVec3::new(1.0, -1.0, -0.5), DVec3::new(-1.0, 1.0, 0.5)];
        let b = [DVec3::new(-1.0, -1.0, -0.5), DVec3::new(1.0, -1.0, 0.5), DVec3::new(-1.0, 1.0, -0.5)];
        scene.add_child(root, Triangle::new(a, None)).unwrap();
        scene.add_child(root, Triangle::new(b, None)).unwrap();

        let list = scene.render_pass(root, cam);
        let [f1, f2] = list.fragments() else {
            panic!("expected two fragments, got {}", list.len());
        };
        (*f1, *f2)
    }

    fn assert_reprojects(pieces: &[Fragment], cam: &Camera) {
        for p in pieces {
            let mut again = *p;
            again.update_proj_coords(&cam.perspective);
            for i in 0..3 {
                assert!((again.projected[i] - p.projected[i]).length() < 1e-9, "{again:?} vs {p:?}");
                assert!((p.clip_w[i] + p.points[i].z).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn perspective_split_pieces_tile_and_reproject() {
        let cam = Camera::default();
        let (f1, f2) = crossing_pair(&cam);
        assert!(f1.clip_w.iter().all(|&w| w > 1.0));

        let mut out = Vec::new();
        let (n1, n2) = split_fragments(&f1, &f2, &mut out);
        assert!(n1 > 1 && n2 > 1);
        assert_eq!(out.len(), n1 + n2);

        let (of_1, of_2) = out.split_at(n1);
        assert!((total_area(of_1) - screen_area(&f1)).abs() < 1e-12);
        assert!((total_area(of_2) - screen_area(&f2)).abs() < 1e-12);
        assert_reprojects(&out, &cam);

        // Each piece now lies entirely on one side of the crossing.
        assert!(of_1.iter().all(|p| of_2.iter().all(|q| split_fragments(p, q, &mut Vec::new()) == (1, 1))));
    }

    #[test]
    fn perspective_in_place_split_reprojects() {
        let cam = Camera::default();
        let (f1, f2) = crossing_pair(&cam);
        let mut fragments = vec![f1, f2];

        let (n1, n2) = split_on_2d_overlap(&mut fragments, 0, 1);
        assert!(n1 > 1 && n2 > 1);
        assert_reprojects(&fragments, &cam);
    }
}
