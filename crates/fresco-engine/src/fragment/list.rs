use crate::error::SceneError;

use super::{Depth, Fragment, PaintKey};

/// Fragments recorded for one render pass.
///
/// This is the per-pass context threaded through scene traversal: primitives
/// append to it, it hands out creation indices, and it collects configuration
/// diagnostics from nodes that refused to draw.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - paint-order iteration reuses an internal index buffer; no per-pass
///   allocation once warmed
#[derive(Debug, Default)]
pub struct FragmentList {
    fragments: Vec<Fragment>,
    next_index: u32,

    diagnostics: Vec<SceneError>,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
}

impl FragmentList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears fragments and diagnostics and restarts creation indices at 0.
    /// Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.fragments.clear();
        self.next_index = 0;
        self.diagnostics.clear();
        self.sorted_indices.clear();
        self.sorted_dirty = true;
    }

    /// Returns fragments in creation order (until split passes reorder them).
    #[inline]
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Mutable access to the backing vector, for the in-place split engine.
    ///
    /// Invalidates the cached paint order.
    #[inline]
    pub fn fragments_mut(&mut self) -> &mut Vec<Fragment> {
        self.sorted_dirty = true;
        &mut self.fragments
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Appends a fragment, stamping it with the next creation index.
    #[inline]
    pub fn push(&mut self, mut fragment: Fragment) {
        fragment.creation_index = self.next_index;
        self.next_index = self.next_index.wrapping_add(1);
        self.fragments.push(fragment);
        self.sorted_dirty = true;
    }

    /// Records a configuration problem reported by a node.
    pub fn report(&mut self, err: SceneError) {
        log::warn!("{err}");
        self.diagnostics.push(err);
    }

    /// Configuration problems reported during this pass.
    #[inline]
    pub fn diagnostics(&self) -> &[SceneError] {
        &self.diagnostics
    }

    /// Returns indices into `fragments` in paint order (back-to-front).
    ///
    /// This buffer is owned by `FragmentList` and reused across passes.
    pub fn indices_in_paint_order(&mut self) -> &[usize] {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }
        &self.sorted_indices
    }

    /// Iterates fragments in paint order without cloning.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &Fragment> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.fragments[i])
    }

    /// Consumes the list, returning the fragments in their current order.
    pub fn into_fragments(self) -> Vec<Fragment> {
        self.fragments
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.fragments.len());

        let frags = &self.fragments;
        self.sorted_indices.sort_by_cached_key(|&i| {
            PaintKey::new(Depth(frags[i].mean_depth()), frags[i].creation_index)
        });

        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::DVec3;
    use crate::fragment::FragmentKind;

    fn tri_at(depth: f64) -> Fragment {
        let mut f = Fragment::new(FragmentKind::Triangle);
        f.projected = [DVec3::new(0.0, 0.0, depth); 3];
        f
    }

    #[test]
    fn push_assigns_increasing_indices() {
        let mut list = FragmentList::new();
        for _ in 0..4 {
            list.push(tri_at(0.0));
        }
        let idx: Vec<u32> = list.fragments().iter().map(|f| f.creation_index).collect();
        assert_eq!(idx, vec![0, 1, 2, 3]);
    }

    #[test]
    fn clear_restarts_indices() {
        let mut list = FragmentList::new();
        list.push(tri_at(0.0));
        list.push(tri_at(0.0));
        list.clear();
        list.push(tri_at(0.0));
        assert_eq!(list.fragments()[0].creation_index, 0);
    }

    #[test]
    fn paint_order_is_back_to_front_with_stable_ties() {
        let mut list = FragmentList::new();
        list.push(tri_at(0.1)); // 0: nearest
        list.push(tri_at(0.9)); // 1: furthest
        list.push(tri_at(0.5)); // 2
        list.push(tri_at(0.5)); // 3: tie with 2, created later
        assert_eq!(list.indices_in_paint_order(), &[1, 2, 3, 0]);
    }

    #[test]
    fn paint_order_refreshes_after_mutation() {
        let mut list = FragmentList::new();
        list.push(tri_at(0.1));
        list.push(tri_at(0.9));
        assert_eq!(list.indices_in_paint_order(), &[1, 0]);
        list.fragments_mut()[0].projected = [DVec3::new(0.0, 0.0, 2.0); 3];
        assert_eq!(list.indices_in_paint_order(), &[0, 1]);
    }
}
