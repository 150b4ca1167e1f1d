use crate::coords::{DMat4, DVec3};
use crate::scene::NodeId;

use super::faces_viewer;

/// Group of child nodes sharing a local transform.
///
/// Children are visited in the order they were added with
/// [`Scene::add_child`](crate::scene::Scene::add_child).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Container {
    pub transform: DMat4,
    pub(crate) children: Vec<NodeId>,
}

impl Container {
    #[inline]
    pub fn new(transform: DMat4) -> Self {
        Self { transform, children: Vec::new() }
    }

    #[inline]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// Container whose whole subtree is skipped unless `normal` faces the viewer.
///
/// `normal` is given in the container's own frame (after `transform`).
#[derive(Debug, Clone, PartialEq)]
pub struct FacingContainer {
    pub transform: DMat4,
    pub normal: DVec3,
    pub(crate) children: Vec<NodeId>,
}

impl FacingContainer {
    #[inline]
    pub fn new(transform: DMat4, normal: DVec3) -> Self {
        Self { transform, normal, children: Vec::new() }
    }

    #[inline]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// `total` is the parent transform composed with `self.transform`.
    #[inline]
    pub(crate) fn faces_viewer(&self, total: &DMat4) -> bool {
        faces_viewer(total, self.normal)
    }
}
