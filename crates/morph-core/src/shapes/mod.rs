/// Procedural target shapes.
///
/// Contains 7 solids and curves, 9 parametric and minimal surfaces, and a
/// dispatcher that samples any of them by [`ShapeKind`].
pub mod primitives;
pub mod surfaces;
pub mod dispatcher;

pub use dispatcher::{sample, ShapeKind};
