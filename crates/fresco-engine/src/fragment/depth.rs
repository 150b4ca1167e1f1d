use core::cmp::Ordering;

/// Projected depth with a total order.
///
/// Larger values are further from the viewer. `+inf` (empty fragments)
/// sorts after every finite depth; NaN sorts last of all.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Depth(pub f64);

impl Depth {
    #[inline]
    pub const fn new(v: f64) -> Self {
        Self(v)
    }
}

impl Eq for Depth {}

impl Ord for Depth {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for Depth {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
