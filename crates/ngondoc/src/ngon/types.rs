//! Basic polygon types: vertex alias, figure kind, reconstruction spec, errors.
//!
//! - `NgonKind`: closed set of supported regular polygons (3, 4, 8 vertices).
//! - `Ngon`: kind plus its generated vertex list. Center is not stored.
//! - `FigureSpec`: the two points (and kind) a figure is rebuilt from.

use std::fmt;

use nalgebra::Vector2;

/// A polygon vertex (or any 2D point).
pub type Vertex = Vector2<f64>;

/// Errors raised while building or naming a polygon.
#[derive(Debug, Clone, PartialEq)]
pub enum GeomError {
    /// Vertex count outside the supported set {3, 4, 8}.
    UnknownFigure { vertices: usize },
    /// Center and vertex coincide (or are not finite); no radius to build from.
    DegenerateRadius { center: Vertex, vertex: Vertex },
}

impl fmt::Display for GeomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeomError::UnknownFigure { vertices } => {
                write!(f, "unknown figure with {vertices} vertices")
            }
            GeomError::DegenerateRadius { center, vertex } => write!(
                f,
                "degenerate figure: vertex {} coincides with center {}",
                Point(*vertex),
                Point(*center)
            ),
        }
    }
}

impl std::error::Error for GeomError {}

/// Supported regular polygons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NgonKind {
    Triangle,
    Square,
    Octagon,
}

impl NgonKind {
    pub const ALL: [NgonKind; 3] = [NgonKind::Triangle, NgonKind::Square, NgonKind::Octagon];

    /// Map a vertex count back to its kind.
    pub fn from_vertex_count(n: usize) -> Result<Self, GeomError> {
        match n {
            3 => Ok(NgonKind::Triangle),
            4 => Ok(NgonKind::Square),
            8 => Ok(NgonKind::Octagon),
            vertices => Err(GeomError::UnknownFigure { vertices }),
        }
    }

    #[inline]
    pub fn vertex_count(self) -> usize {
        match self {
            NgonKind::Triangle => 3,
            NgonKind::Square => 4,
            NgonKind::Octagon => 8,
        }
    }

    /// Display label ("Triangle", "Square", "Octagon").
    pub fn name(self) -> &'static str {
        match self {
            NgonKind::Triangle => "Triangle",
            NgonKind::Square => "Square",
            NgonKind::Octagon => "Octagon",
        }
    }
}

impl TryFrom<usize> for NgonKind {
    type Error = GeomError;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        NgonKind::from_vertex_count(n)
    }
}

impl fmt::Display for NgonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parameters a figure is (re)built from: kind, center, and its first vertex.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FigureSpec {
    pub kind: NgonKind,
    pub center: Vertex,
    pub vertex: Vertex,
}

impl FigureSpec {
    #[inline]
    pub fn new(kind: NgonKind, center: Vertex, vertex: Vertex) -> Self {
        Self {
            kind,
            center,
            vertex,
        }
    }
}

/// Regular polygon with its generated vertices.
///
/// Invariants:
/// - `vertices.len() == kind.vertex_count()`.
/// - `vertices[0]` is the vertex supplied at construction, bit for bit.
/// - All vertices lie on one circle around the construction center,
///   spaced by `2π / N` counterclockwise.
#[derive(Clone, Debug, PartialEq)]
pub struct Ngon {
    pub(crate) kind: NgonKind,
    pub(crate) vertices: Vec<Vertex>,
}

impl Ngon {
    #[inline]
    pub fn kind(&self) -> NgonKind {
        self.kind
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// First vertex (the one the figure was built from).
    #[inline]
    pub fn first_vertex(&self) -> Vertex {
        self.vertices[0]
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }
}

/// Display adapter printing a point as `{ x, y }`.
#[derive(Clone, Copy, Debug)]
pub struct Point(pub Vertex);

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ {}, {} }}", self.0.x, self.0.y)
    }
}

impl fmt::Display for Ngon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (k, v) in self.vertices.iter().enumerate() {
            if k > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", Point(*v))?;
        }
        Ok(())
    }
}
