use std::f64::consts::PI;

use super::types::{Ngon, Vertex};

impl Ngon {
    /// Regular N-gon area `N·s² / (4·tan(π/N))`, `s` = edge v0→v1.
    pub fn area(&self) -> f64 {
        let n = self.vertices.len() as f64;
        let s2 = (self.vertices[0] - self.vertices[1]).norm_squared();
        n * s2 / (4.0 * (PI / n).tan())
    }

    /// Arithmetic mean of the vertices. Reported as the figure's center.
    pub fn centroid(&self) -> Vertex {
        let sum = self
            .vertices
            .iter()
            .fold(Vertex::zeros(), |acc, v| acc + v);
        sum / self.vertices.len() as f64
    }

    /// Circumradius measured from the centroid to vertex 0.
    pub fn radius(&self) -> f64 {
        (self.vertices[0] - self.centroid()).norm()
    }
}
