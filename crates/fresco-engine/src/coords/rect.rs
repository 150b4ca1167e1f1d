use super::DVec2;

/// Axis-aligned screen-space bounds.
///
/// Unlike a layout rect this is closed (`[min, max]`) and may be degenerate:
/// the bounds of a vertical line segment have zero width but still matter
/// for overlap tests.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub min: DVec2,
    pub max: DVec2,
}

impl Rect {
    #[inline]
    pub const fn new(min: DVec2, max: DVec2) -> Self {
        Self { min, max }
    }

    /// Smallest rect containing every point. Empty input gives an inverted rect.
    pub fn from_points(points: &[DVec2]) -> Self {
        let mut r = Rect::new(
            DVec2::new(f64::INFINITY, f64::INFINITY),
            DVec2::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        );
        for p in points {
            r.min.x = r.min.x.min(p.x);
            r.min.y = r.min.y.min(p.y);
            r.max.x = r.max.x.max(p.x);
            r.max.y = r.max.y.max(p.y);
        }
        r
    }

    #[inline]
    pub fn width(self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(self) -> f64 {
        self.max.y - self.min.y
    }

    /// `true` when `max < min` on either axis.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.max.x < self.min.x || self.max.y < self.min.y
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// Closed containment: [min, max].
    #[inline]
    pub fn contains(self, p: DVec2) -> bool {
        p.x >= self.min.x && p.y >= self.min.y && p.x <= self.max.x && p.y <= self.max.y
    }

    /// Intersection of two closed rects. Touching rects intersect in a
    /// degenerate rect; disjoint ones give `None`.
    #[inline]
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let r = Rect::new(
            DVec2::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y)),
            DVec2::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y)),
        );
        if r.is_empty() { None } else { Some(r) }
    }
}
