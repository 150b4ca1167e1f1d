/// Handle to a node in a [`Scene`](super::Scene).
///
/// Fragments keep one as a non-owning back-reference to the node that
/// produced them.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Arena slot of this node.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}
