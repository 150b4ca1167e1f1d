//! Convex polygon clipping in screen space.

use crate::coords::DVec2;

/// Vertices closer than this are merged after clipping.
const MERGE_EPSILON: f64 = 1e-12;

/// `normal · p + offset >= 0` is inside.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct HalfPlane {
    pub normal: DVec2,
    pub offset: f64,
}

impl HalfPlane {
    #[inline]
    pub fn new(normal: DVec2, offset: f64) -> Self {
        Self { normal, offset }
    }

    /// Left side of the directed edge `a -> b`.
    #[inline]
    pub fn left_of(a: DVec2, b: DVec2) -> Self {
        let d = b - a;
        let normal = DVec2::new(-d.y, d.x);
        Self::new(normal, -normal.dot(a))
    }

    #[inline]
    pub fn eval(&self, p: DVec2) -> f64 {
        self.normal.dot(p) + self.offset
    }

    #[inline]
    pub fn flipped(&self) -> Self {
        Self::new(self.normal * -1.0, -self.offset)
    }
}

/// Signed area; positive for counter-clockwise winding.
pub(crate) fn signed_area(poly: &[DVec2]) -> f64 {
    if poly.len() < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    let mut prev = poly[poly.len() - 1];
    for &cur in poly {
        sum += prev.perp_dot(cur);
        prev = cur;
    }
    0.5 * sum
}

#[inline]
pub(crate) fn area(poly: &[DVec2]) -> f64 {
    signed_area(poly).abs()
}

/// Sutherland–Hodgman step: keeps the part of convex `input` inside `plane`.
pub(crate) fn clip(input: &[DVec2], plane: HalfPlane) -> Vec<DVec2> {
    let mut output = Vec::with_capacity(input.len() + 1);
    let Some(&last) = input.last() else {
        return output;
    };

    let mut prev = last;
    let mut prev_s = plane.eval(prev);

    for &curr in input {
        let curr_s = plane.eval(curr);
        match (prev_s >= 0.0, curr_s >= 0.0) {
            (true, true) => output.push(curr),
            (true, false) => output.push(intersect(prev, curr, prev_s, curr_s)),
            (false, true) => {
                output.push(intersect(prev, curr, prev_s, curr_s));
                output.push(curr);
            }
            (false, false) => {}
        }
        prev = curr;
        prev_s = curr_s;
    }

    merge_close(output)
}

#[inline]
fn intersect(a: DVec2, b: DVec2, sa: f64, sb: f64) -> DVec2 {
    let t = sa / (sa - sb);
    a + (b - a) * t
}

fn merge_close(mut poly: Vec<DVec2>) -> Vec<DVec2> {
    poly.dedup_by(|b, a| (*b - *a).dot(*b - *a) <= MERGE_EPSILON * MERGE_EPSILON);
    while poly.len() > 1 {
        let d = poly[poly.len() - 1] - poly[0];
        if d.dot(d) > MERGE_EPSILON * MERGE_EPSILON {
            break;
        }
        poly.pop();
    }
    poly
}

/// Edges of a counter-clockwise convex polygon as inward half-planes.
pub(crate) fn edge_planes(poly: &[DVec2]) -> impl Iterator<Item = HalfPlane> + '_ {
    (0..poly.len()).map(move |i| HalfPlane::left_of(poly[i], poly[(i + 1) % poly.len()]))
}

/// Intersection of two counter-clockwise convex polygons.
pub(crate) fn intersect_convex(subject: &[DVec2], clipper: &[DVec2]) -> Vec<DVec2> {
    let mut out = subject.to_vec();
    for plane in edge_planes(clipper) {
        if out.is_empty() {
            break;
        }
        out = clip(&out, plane);
    }
    out
}

/// `subject` minus `clipper` as disjoint convex pieces (both CCW convex).
///
/// Each clipper edge peels off the part of what remains that lies outside it.
pub(crate) fn subtract_convex(subject: &[DVec2], clipper: &[DVec2], min_area: f64) -> Vec<Vec<DVec2>> {
    let mut pieces = Vec::new();
    let mut remaining = subject.to_vec();
    for plane in edge_planes(clipper) {
        if area(&remaining) <= min_area {
            break;
        }
        let outside = clip(&remaining, plane.flipped());
        if area(&outside) > min_area {
            pieces.push(outside);
        }
        remaining = clip(&remaining, plane);
    }
    pieces
}

/// Fan triangulation of a convex polygon, dropping slivers.
pub(crate) fn triangulate(poly: &[DVec2], min_area: f64) -> Vec<[DVec2; 3]> {
    let mut tris = Vec::with_capacity(poly.len().saturating_sub(2));
    for i in 1..poly.len().saturating_sub(1) {
        let t = [poly[0], poly[i], poly[i + 1]];
        if area(&t) > min_area {
            tris.push(t);
        }
    }
    tris
}

/// Parameter range `[t0, t1]` of segment `a -> b` inside every plane, if any.
pub(crate) fn clip_segment(a: DVec2, b: DVec2, planes: impl IntoIterator<Item = HalfPlane>) -> Option<(f64, f64)> {
    let (mut t0, mut t1) = (0.0_f64, 1.0_f64);
    for plane in planes {
        let sa = plane.eval(a);
        let sb = plane.eval(b);
        match (sa >= 0.0, sb >= 0.0) {
            (true, true) => {}
            (false, false) => return None,
            (true, false) => t1 = t1.min(sa / (sa - sb)),
            (false, true) => t0 = t0.max(sa / (sa - sb)),
        }
        if t0 > t1 {
            return None;
        }
    }
    Some((t0, t1))
}

/// Crossing parameters `(t, u)` of segments `a0 -> a1` and `b0 -> b1`.
pub(crate) fn segment_crossing(a0: DVec2, a1: DVec2, b0: DVec2, b1: DVec2) -> Option<(f64, f64)> {
    let r = a1 - a0;
    let s = b1 - b0;
    let den = r.perp_dot(s);
    if den.abs() <= f64::EPSILON {
        return None;
    }
    let q = b0 - a0;
    let t = q.perp_dot(s) / den;
    let u = q.perp_dot(r) / den;
    ((0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u)).then_some((t, u))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f64, y: f64) -> DVec2 {
        DVec2::new(x, y)
    }

    fn square(x0: f64, y0: f64, s: f64) -> Vec<DVec2> {
        vec![v(x0, y0), v(x0 + s, y0), v(x0 + s, y0 + s), v(x0, y0 + s)]
    }

    // ── area / winding ────────────────────────────────────────────────────

    #[test]
    fn area_sign_follows_winding() {
        let sq = square(0.0, 0.0, 2.0);
        assert_eq!(signed_area(&sq), 4.0);
        let mut cw = sq.clone();
        cw.reverse();
        assert_eq!(signed_area(&cw), -4.0);
        assert_eq!(area(&cw), 4.0);
    }

    // ── clipping ──────────────────────────────────────────────────────────

    #[test]
    fn clip_keeps_inside_half() {
        // x >= 1
        let out = clip(&square(0.0, 0.0, 2.0), HalfPlane::new(v(1.0, 0.0), -1.0));
        assert!((area(&out) - 2.0).abs() < 1e-12);
        assert!(out.iter().all(|p| p.x >= 1.0 - 1e-12));
    }

    #[test]
    fn clip_fully_outside_is_empty() {
        let out = clip(&square(0.0, 0.0, 1.0), HalfPlane::new(v(1.0, 0.0), -5.0));
        assert!(out.is_empty());
    }

    #[test]
    fn intersect_offset_squares() {
        let i = intersect_convex(&square(0.0, 0.0, 2.0), &square(1.0, 1.0, 2.0));
        assert!((area(&i) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn touching_squares_have_zero_area_overlap() {
        let i = intersect_convex(&square(0.0, 0.0, 1.0), &square(1.0, 0.0, 1.0));
        assert!(area(&i) < 1e-12);
    }

    #[test]
    fn subtract_tiles_the_subject() {
        let a = square(0.0, 0.0, 2.0);
        let b = square(1.0, 1.0, 2.0);
        let rest = subtract_convex(&a, &b, 1e-12);
        let total: f64 = rest.iter().map(|p| area(p)).sum();
        assert!((total + area(&intersect_convex(&a, &b)) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn triangulate_square_into_two() {
        let tris = triangulate(&square(0.0, 0.0, 1.0), 1e-12);
        assert_eq!(tris.len(), 2);
        let total: f64 = tris.iter().map(|t| area(t)).sum();
        assert!((total - 1.0).abs() < 1e-12);
    }

    // ── segments ──────────────────────────────────────────────────────────

    #[test]
    fn segment_clipped_to_square() {
        let sq = square(0.0, 0.0, 2.0);
        let (t0, t1) = clip_segment(v(-1.0, 1.0), v(3.0, 1.0), edge_planes(&sq)).unwrap();
        assert!((t0 - 0.25).abs() < 1e-12);
        assert!((t1 - 0.75).abs() < 1e-12);
    }

    #[test]
    fn segments_cross_at_center() {
        let (t, u) = segment_crossing(v(0.0, 0.0), v(2.0, 2.0), v(0.0, 2.0), v(2.0, 0.0)).unwrap();
        assert!((t - 0.5).abs() < 1e-12 && (u - 0.5).abs() < 1e-12);
        assert!(segment_crossing(v(0.0, 0.0), v(1.0, 0.0), v(0.0, 1.0), v(1.0, 1.0)).is_none());
    }
}
