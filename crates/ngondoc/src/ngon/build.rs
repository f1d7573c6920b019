use std::f64::consts::TAU;

use nalgebra::Rotation2;

use super::types::{FigureSpec, GeomError, Ngon, NgonKind, Vertex};
use crate::cfg::ZERO_RADIUS_EPS;

/// Vertices of a regular `n`-gon around `center`, starting at `vertex`.
///
/// Vertex 0 is `vertex` unchanged; vertex k is `center + r·R(2πk/n)·d` with
/// `r = |vertex - center|` and unit direction `d`.
pub fn generate(center: Vertex, vertex: Vertex, n: usize) -> Result<Vec<Vertex>, GeomError> {
    let offset = vertex - center;
    let r = offset.norm();
    if !r.is_finite() || r <= ZERO_RADIUS_EPS {
        return Err(GeomError::DegenerateRadius { center, vertex });
    }
    let dir = offset / r;
    let step = TAU / n as f64;
    let mut out = Vec::with_capacity(n);
    out.push(vertex);
    for k in 1..n {
        let rot = Rotation2::new(step * k as f64);
        out.push(center + (rot * dir) * r);
    }
    Ok(out)
}

impl Ngon {
    /// Build a polygon of the given kind from its center and first vertex.
    pub fn new(kind: NgonKind, center: Vertex, vertex: Vertex) -> Result<Self, GeomError> {
        let vertices = generate(center, vertex, kind.vertex_count())?;
        Ok(Self { kind, vertices })
    }

    pub fn from_spec(spec: &FigureSpec) -> Result<Self, GeomError> {
        Self::new(spec.kind, spec.center, spec.vertex)
    }

    /// Parameters that rebuild this figure: kind, centroid, first vertex.
    pub fn spec(&self) -> FigureSpec {
        FigureSpec::new(self.kind, self.centroid(), self.first_vertex())
    }
}
