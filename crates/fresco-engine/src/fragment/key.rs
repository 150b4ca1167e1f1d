use core::cmp::Ordering;

use super::Depth;

/// Stable sort key for painting fragments.
///
/// Ordering rules:
/// 1) `depth`: descending (furthest first, back-to-front)
/// 2) `order`: ascending (creation order for equal depth)
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct PaintKey {
    /// Mean projected depth of the fragment.
    pub depth: Depth,
    /// Creation index, ensuring deterministic ordering of depth ties.
    pub order: u32,
}

impl PaintKey {
    #[inline]
    pub const fn new(depth: Depth, order: u32) -> Self {
        Self { depth, order }
    }
}

impl Ord for PaintKey {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        match other.depth.cmp(&self.depth) {
            Ordering::Equal => self.order.cmp(&other.order),
            o => o,
        }
    }
}

impl PartialOrd for PaintKey {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
