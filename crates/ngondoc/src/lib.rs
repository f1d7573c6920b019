//! Document model for an editor of regular polygons.
//!
//! Layers (leaves first)
//! - `ngon`: regular triangle/square/octagon from a center and one vertex;
//!   area, centroid, display name.
//! - `factory`: vertex count → polygon of the matching kind.
//! - `codec`: plain-text persistence of a figure collection.
//! - `document`: ordered figures with linear undo/redo of insert/remove.
//!
//! The interactive command loop lives in the `ngon-cli` crate and only talks
//! to `Document`.

pub mod cfg;
pub mod codec;
pub mod document;
pub mod factory;
pub mod ngon;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use document::{Action, ActionKind, DocError, Document, ErrorKind};
pub use ngon::{FigureSpec, GeomError, Ngon, NgonKind, Point, Vertex};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::codec::{read_figures, write_figures, DecodeError};
    pub use crate::document::{Action, ActionKind, DocError, Document, ErrorKind};
    pub use crate::factory::create;
    pub use crate::ngon::{generate, FigureSpec, GeomError, Ngon, NgonKind, Point, Vertex};
    pub use nalgebra::Vector2 as Vec2;
}
