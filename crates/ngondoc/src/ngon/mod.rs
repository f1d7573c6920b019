//! Regular polygons built from a center and one vertex.
//!
//! Purpose
//! - Generate the vertex list of a regular triangle, square or octagon from
//!   two points, and derive area, centroid and display name from it.
//!
//! Model
//! - The construction center is not stored. The centroid (mean of vertices)
//!   stands in for it everywhere, including when a figure is persisted or
//!   recorded for undo; it matches the construction center up to rounding.
//! - Geometry depends only on the kind and the vertex list, so there is one
//!   `Ngon` struct and no per-kind behavior.
//!
//! Code cross-refs: `factory::create`, `document::Document`, `codec`.

mod build;
mod measure;
mod types;

pub use build::generate;
pub use types::{FigureSpec, GeomError, Ngon, NgonKind, Point, Vertex};

#[cfg(test)]
mod tests;
