//! Paint-side handles carried by fragments.
//!
//! Scope:
//! - style handles (surface fill, line stroke), compared by identity only
//! - marker outlines owned by point primitives
//!
//! The engine never dereferences a style. Resolving a handle to colors and
//! widths is the painting backend's job.

mod marker;
mod style;

pub use marker::MarkerPath;
pub use style::{LineStyleId, SurfaceStyleId};
