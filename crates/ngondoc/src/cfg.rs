//! Tolerance defaults for polygon geometry (internal).
//!
//! Policy
//! - Fixed constants, no runtime configuration. Call sites that need a
//!   different tolerance pass it explicitly.

/// Radius below which a (center, vertex) pair is rejected as degenerate.
/// Direction `(V - C) / r` is meaningless at this scale.
pub(crate) const ZERO_RADIUS_EPS: f64 = 1e-12;

/// Default absolute tolerance for geometric comparisons (tests, `approx_eq`).
pub const GEOM_EPS: f64 = 1e-9;
