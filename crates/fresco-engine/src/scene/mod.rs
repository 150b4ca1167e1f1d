//! Scene graph of primitives that emit fragments.
//!
//! Responsibilities:
//! - own primitive nodes in an arena addressed by [`NodeId`]
//! - compose container transforms and visit children in registration order
//! - keep shape-specific generation isolated per shape file under `scene::shapes`
//!
//! Extending the scene:
//! - add a new shape module under `scene::shapes::*` with an `emit` method
//! - add a new variant to [`Node`]
//! - dispatch to it from `Scene::emit_fragments`

mod id;
mod node;
mod store;

mod shapes;

pub use id::NodeId;
pub use node::Node;
pub use shapes::container::{Container, FacingContainer};
pub use shapes::data_mesh::{DataMesh, EdgeTracker};
pub use shapes::mesh::Mesh;
pub use shapes::points::Points;
pub use shapes::polyline::PolyLine;
pub use shapes::segments::LineSegments;
pub use shapes::text::{LabelDraw, Text};
pub use shapes::triangle::Triangle;
pub use store::Scene;
