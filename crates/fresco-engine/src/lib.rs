//! Fresco engine crate.
//!
//! Turns a scene of parametric 3D primitives into a flat list of projected,
//! depth-annotated fragments, and resolves overlapping fragments so they can
//! be painted back to front without a depth buffer.
//!
//! A render pass is [`scene::Scene::render_pass`] followed by sorting with
//! [`fragment::FragmentList::iter_in_paint_order`] and, where depths
//! interleave, subdivision with [`split::Splitter`].

pub mod camera;
pub mod coords;
pub mod error;
pub mod fragment;
pub mod logging;
pub mod paint;
pub mod scene;
pub mod split;

pub use error::SceneError;
