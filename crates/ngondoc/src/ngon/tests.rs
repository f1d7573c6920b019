use super::*;
use crate::cfg::GEOM_EPS;
use nalgebra::vector;
use proptest::prelude::*;
use std::f64::consts::TAU;

fn kind_strategy() -> impl Strategy<Value = NgonKind> {
    prop_oneof![
        Just(NgonKind::Triangle),
        Just(NgonKind::Square),
        Just(NgonKind::Octagon),
    ]
}

fn signed_angle(a: Vertex, b: Vertex) -> f64 {
    let ang = (a.x * b.y - a.y * b.x).atan2(a.dot(&b));
    if ang < 0.0 {
        ang + TAU
    } else {
        ang
    }
}

#[test]
fn unit_square_vertices() {
    let sq = Ngon::new(NgonKind::Square, vector![0.0, 0.0], vector![1.0, 0.0]).unwrap();
    let expected = [
        vector![1.0, 0.0],
        vector![0.0, 1.0],
        vector![-1.0, 0.0],
        vector![0.0, -1.0],
    ];
    assert_eq!(sq.vertex_count(), 4);
    for (v, e) in sq.vertices().iter().zip(expected) {
        assert!((v - e).norm() < 1e-12, "{v:?} vs {e:?}");
    }
}

#[test]
fn area_uses_first_edge() {
    // Circumradius 1 square: side √2, area 2.
    let sq = Ngon::new(NgonKind::Square, vector![0.0, 0.0], vector![1.0, 0.0]).unwrap();
    assert!((sq.area() - 2.0).abs() < 1e-12);

    // Equilateral triangle with circumradius 1: area 3√3/4.
    let tri = Ngon::new(NgonKind::Triangle, vector![0.0, 0.0], vector![1.0, 0.0]).unwrap();
    assert!((tri.area() - 3.0 * 3f64.sqrt() / 4.0).abs() < 1e-12);

    // Octagon with circumradius r: 2√2 r².
    let oct = Ngon::new(NgonKind::Octagon, vector![1.0, -2.0], vector![1.0, 1.0]).unwrap();
    assert!((oct.area() - 2.0 * 2f64.sqrt() * 9.0).abs() < 1e-9);
}

#[test]
fn centroid_is_mean_of_vertices() {
    let tri = Ngon::new(NgonKind::Triangle, vector![2.0, 3.0], vector![4.0, 3.0]).unwrap();
    let c = tri.centroid();
    assert!((c - vector![2.0, 3.0]).norm() < GEOM_EPS);
    assert!((tri.radius() - 2.0).abs() < GEOM_EPS);
}

#[test]
fn coincident_points_are_rejected() {
    let p = vector![1.5, -0.5];
    let err = Ngon::new(NgonKind::Octagon, p, p).unwrap_err();
    assert!(matches!(err, GeomError::DegenerateRadius { .. }));
    assert!(generate(p, vector![f64::NAN, 0.0], 3).is_err());
}

#[test]
fn kind_names_and_counts() {
    for kind in NgonKind::ALL {
        assert_eq!(NgonKind::from_vertex_count(kind.vertex_count()), Ok(kind));
    }
    assert_eq!(NgonKind::Triangle.name(), "Triangle");
    assert_eq!(NgonKind::Square.to_string(), "Square");
    assert_eq!(NgonKind::Octagon.name(), "Octagon");
    assert_eq!(
        NgonKind::try_from(5),
        Err(GeomError::UnknownFigure { vertices: 5 })
    );
}

#[test]
fn display_lists_vertices() {
    let sq = Ngon::new(NgonKind::Square, vector![0.0, 0.0], vector![2.0, 0.0]).unwrap();
    let shown = sq.to_string();
    assert!(shown.starts_with("{ 2, 0 }, "));
    assert_eq!(shown.matches('{').count(), 4);
    assert_eq!(Point(vector![-1.5, 0.25]).to_string(), "{ -1.5, 0.25 }");
}

#[test]
fn spec_rebuilds_same_figure() {
    let oct = Ngon::new(NgonKind::Octagon, vector![-3.0, 0.5], vector![-1.0, 2.0]).unwrap();
    let again = Ngon::from_spec(&oct.spec()).unwrap();
    assert_eq!(again.kind(), NgonKind::Octagon);
    assert_eq!(again.first_vertex(), oct.first_vertex());
    for (a, b) in again.vertices().iter().zip(oct.vertices()) {
        assert!((a - b).norm() < GEOM_EPS);
    }
}

proptest! {
    #[test]
    fn generated_vertices_are_regular(
        kind in kind_strategy(),
        cx in -50.0f64..50.0,
        cy in -50.0f64..50.0,
        dx in -20.0f64..20.0,
        dy in -20.0f64..20.0,
    ) {
        prop_assume!(dx.hypot(dy) > 1e-3);
        let center = vector![cx, cy];
        let vertex = vector![cx + dx, cy + dy];
        let p = Ngon::new(kind, center, vertex).unwrap();
        let r = (vertex - center).norm();
        let n = kind.vertex_count();
        let tol = 1e-9 * (1.0 + r + center.norm());

        prop_assert_eq!(p.vertex_count(), n);
        prop_assert_eq!(p.first_vertex(), vertex);
        for v in p.vertices() {
            prop_assert!(((v - center).norm() - r).abs() < tol);
        }
        for k in 0..n {
            let a = p.vertices()[k] - center;
            let b = p.vertices()[(k + 1) % n] - center;
            prop_assert!((signed_angle(a, b) - TAU / n as f64).abs() < 1e-6);
        }
        prop_assert!((p.centroid() - center).norm() < tol);
    }
}
