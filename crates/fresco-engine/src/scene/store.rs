use std::any::Any;

use crate::camera::Camera;
use crate::coords::{DMat4, DVec2};
use crate::error::SceneError;
use crate::fragment::{Fragment, FragmentList, FragmentParams};

use super::{Node, NodeId};

/// Arena of scene nodes.
///
/// Nodes are added either as roots ([`add`](Self::add)) or under an existing
/// container ([`add_child`](Self::add_child)). Every node has at most one
/// parent, so traversal cannot cycle. Dropping the scene drops every node.
#[derive(Debug, Default)]
pub struct Scene {
    nodes: Vec<Node>,
}

impl Scene {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Adds a parentless node.
    pub fn add(&mut self, node: impl Into<Node>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node.into());
        id
    }

    /// Adds `node` as the last child of container `parent`.
    pub fn add_child(&mut self, parent: NodeId, node: impl Into<Node>) -> Result<NodeId, SceneError> {
        match self.nodes.get(parent.index()) {
            None => return Err(SceneError::UnknownNode(parent)),
            Some(n) if !n.is_container() => return Err(SceneError::NotAContainer(parent)),
            Some(_) => {}
        }

        let id = self.add(node);
        if let Some(children) = self.nodes[parent.index()].children_mut() {
            children.push(id);
        }
        Ok(id)
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    #[inline]
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Appends the fragments of node `id` (and its subtree) to `out`.
    ///
    /// `outer` maps the node's parent frame into camera space; at the root
    /// this is the camera's view matrix.
    pub fn emit_fragments(&self, id: NodeId, outer: &DMat4, camera: &Camera, out: &mut FragmentList) {
        let Some(node) = self.node(id) else {
            out.report(SceneError::UnknownNode(id));
            return;
        };

        match node {
            Node::Triangle(t) => t.emit(id, outer, camera, out),
            Node::PolyLine(p) => p.emit(id, outer, camera, out),
            Node::LineSegments(s) => s.emit(id, outer, camera, out),
            Node::Mesh(m) => m.emit(id, outer, camera, out),
            Node::DataMesh(m) => m.emit(id, outer, camera, out),
            Node::Points(p) => p.emit(id, outer, camera, out),
            Node::Text(t) => t.emit(id, outer, camera, out),
            Node::Container(c) => {
                let total = *outer * c.transform;
                for &child in &c.children {
                    self.emit_fragments(child, &total, camera, out);
                }
            }
            Node::FacingContainer(c) => {
                let total = *outer * c.transform;
                if !c.faces_viewer(&total) {
                    log::trace!("facing container {} culled", id.index());
                    return;
                }
                for &child in &c.children {
                    self.emit_fragments(child, &total, camera, out);
                }
            }
        }
    }

    /// Runs one full pass from `root` with the camera's view as the outer
    /// transform.
    pub fn render_pass(&self, root: NodeId, camera: &Camera) -> FragmentList {
        let mut out = FragmentList::new();
        self.emit_fragments(root, &camera.view, camera, &mut out);
        log::debug!(
            "render pass from node {}: {} fragments, {} diagnostics",
            root.index(),
            out.len(),
            out.diagnostics().len()
        );
        out
    }

    /// Invokes the label drawer of the `Text` node that produced `fragment`.
    ///
    /// Called by the painting backend once it has placed the fragment on
    /// screen. Returns `false` when the fragment is not a label.
    pub fn draw_label(
        &self,
        fragment: &Fragment,
        surface: &mut dyn Any,
        pt1: DVec2,
        pt2: DVec2,
        scale: f64,
        line_scale: f64,
    ) -> bool {
        let Some(FragmentParams::Label { index, .. }) = fragment.params else {
            return false;
        };
        match fragment.source.and_then(|id| self.node(id)) {
            Some(Node::Text(text)) => {
                text.drawer.draw(surface, pt1, pt2, index, scale, line_scale);
                true
            }
            _ => false,
        }
    }
}
