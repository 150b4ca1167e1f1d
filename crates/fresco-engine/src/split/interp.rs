use core::ops::{Add, Mul};

use crate::coords::DVec2;
use crate::fragment::{Fragment, FragmentKind};

use super::clip::HalfPlane;

/// Screen-space barycentric interpolation over a triangle fragment.
#[derive(Debug, Copy, Clone)]
pub(crate) struct TriangleInterp<'a> {
    frag: &'a Fragment,
    origin: DVec2,
    e1: DVec2,
    e2: DVec2,
    inv_den: f64,
}

impl<'a> TriangleInterp<'a> {
    /// `None` for non-triangles and triangles with no projected area.
    pub fn new(frag: &'a Fragment) -> Option<Self> {
        if frag.kind != FragmentKind::Triangle {
            return None;
        }
        let [a, b, c] = frag.projected.map(|p| p.truncate());
        let (e1, e2) = (b - a, c - a);
        let den = e1.perp_dot(e2);
        if !den.is_finite() || den.abs() <= f64::EPSILON {
            return None;
        }
        Some(Self { frag, origin: a, e1, e2, inv_den: 1.0 / den })
    }

    pub fn weights(&self, q: DVec2) -> [f64; 3] {
        let d = q - self.origin;
        let wb = d.perp_dot(self.e2) * self.inv_den;
        let wc = self.e1.perp_dot(d) * self.inv_den;
        [1.0 - wb - wc, wb, wc]
    }

    /// Depth as an affine function of screen position.
    pub fn depth_plane(&self) -> HalfPlane {
        let z = self.frag.projected.map(|p| p.z);
        let (dzb, dzc) = (z[1] - z[0], z[2] - z[0]);
        let grad = (DVec2::new(self.e2.y, -self.e2.x) * dzb + DVec2::new(-self.e1.y, self.e1.x) * dzc) * self.inv_den;
        HalfPlane::new(grad, z[0] - grad.dot(self.origin))
    }

    /// Counter-clockwise screen footprint.
    pub fn footprint(&self) -> Vec<DVec2> {
        let [a, b, c] = self.frag.projected.map(|p| p.truncate());
        if self.inv_den > 0.0 { vec![a, b, c] } else { vec![a, c, b] }
    }

    /// Child fragment covering `tri`, which must lie inside the parent.
    ///
    /// Projected depth is affine in screen space and blends linearly. Camera
    /// space points blend with the weights divided by each parent vertex's
    /// clip `w`, so the piece still projects onto its screen vertices.
    pub fn piece(&self, tri: [DVec2; 3]) -> Fragment {
        let parent = self.frag;
        let mut f = *parent;
        for (i, q) in tri.into_iter().enumerate() {
            let w = self.weights(q);
            f.projected[i] = blend(&parent.projected, w);
            f.projected[i].x = q.x;
            f.projected[i].y = q.y;

            let pw = [0, 1, 2].map(|k| w[k] / parent.clip_w[k]);
            let inv_w = pw[0] + pw[1] + pw[2];
            if inv_w.is_finite() && inv_w != 0.0 {
                f.points[i] = blend(&parent.points, pw.map(|x| x / inv_w));
                f.clip_w[i] = 1.0 / inv_w;
            } else {
                f.points[i] = blend(&parent.points, w);
                f.clip_w[i] = blend(&parent.clip_w, w);
            }
        }
        f.split_count = parent.split_count.saturating_add(1);
        f
    }
}

#[inline]
fn blend<T>(p: &[T; 3], w: [f64; 3]) -> T
where
    T: Copy + Add<Output = T> + Mul<f64, Output = T>,
{
    p[0] * w[0] + p[1] * w[1] + p[2] * w[2]
}
