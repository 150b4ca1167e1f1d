//! Fragment model: the depth-annotated drawable unit produced by primitives.
//!
//! Responsibilities:
//! - store projected geometry for triangles, line segments and markers
//! - compute depth metrics with the line/marker bias applied
//! - collect one render pass worth of fragments with a deterministic
//!   creation order and back-to-front paint ordering

mod depth;
mod key;
mod kind;
mod list;
mod model;

pub use depth::Depth;
pub use key::PaintKey;
pub use kind::FragmentKind;
pub use list::FragmentList;
pub use model::{Fragment, FragmentParams, LINE_DELTA_DEPTH};
