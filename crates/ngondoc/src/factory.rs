//! Figure factory: vertex count + two points → polygon of the matching kind.
//!
//! This is the only place a raw vertex count is turned into an `NgonKind`,
//! for CLI input and persisted data alike.

use nalgebra::vector;

use crate::ngon::{FigureSpec, GeomError, Ngon, NgonKind};

/// Build a figure with `n` vertices around center `(ox, oy)` through `(ax, ay)`.
pub fn create(n: usize, ox: f64, oy: f64, ax: f64, ay: f64) -> Result<Ngon, GeomError> {
    let kind = NgonKind::from_vertex_count(n)?;
    Ngon::new(kind, vector![ox, oy], vector![ax, ay])
}

/// Rebuild a figure from recorded parameters.
pub fn rebuild(spec: &FigureSpec) -> Result<Ngon, GeomError> {
    Ngon::from_spec(spec)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_supported_kinds() {
        let tri = create(3, 0.0, 0.0, 1.0, 0.0).unwrap();
        assert_eq!(tri.kind(), NgonKind::Triangle);
        assert_eq!(tri.vertex_count(), 3);
        let sq = create(4, 0.0, 0.0, 1.0, 0.0).unwrap();
        assert_eq!(sq.kind(), NgonKind::Square);
        let oct = create(8, 0.0, 0.0, 0.0, 2.0).unwrap();
        assert_eq!(oct.kind(), NgonKind::Octagon);
        assert_eq!(oct.vertex_count(), 8);
    }

    #[test]
    fn rejects_unknown_counts() {
        for n in [0, 1, 2, 5, 6, 7, 9, 100] {
            let err = create(n, 0.0, 0.0, 1.0, 0.0).unwrap_err();
            assert_eq!(err, GeomError::UnknownFigure { vertices: n });
        }
        assert_eq!(
            create(5, 0.0, 0.0, 1.0, 0.0).unwrap_err().to_string(),
            "unknown figure with 5 vertices"
        );
    }

    #[test]
    fn rebuild_matches_create() {
        let sq = create(4, 2.0, 2.0, 3.0, 2.0).unwrap();
        let again = rebuild(&sq.spec()).unwrap();
        assert_eq!(again.kind(), sq.kind());
        assert_eq!(again.first_vertex(), sq.first_vertex());
    }

    #[test]
    fn rejects_zero_radius() {
        assert!(matches!(
            create(4, 1.0, 1.0, 1.0, 1.0),
            Err(GeomError::DegenerateRadius { .. })
        ));
    }
}
