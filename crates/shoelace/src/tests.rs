use super::*;
use proptest::prelude::*;

fn pts(raw: &[[f64; 2]]) -> Vec<Point> {
    raw.iter().copied().map(Point::from).collect()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * (1.0 + a.abs().max(b.abs()))
}

/// Bare capability implementor: exposes whatever it holds, no count check.
struct Raw(Vec<Point>);

impl Polygon for Raw {
    type V = Point;
    fn vertices(&self) -> &[Point] {
        &self.0
    }
}

#[test]
fn unit_right_triangle() {
    let t = Triangle::new(pts(&[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]])).unwrap();
    assert!((t.area() - 0.5).abs() < 1e-12);
}

#[test]
fn unit_square() {
    let s = Square::new(pts(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]])).unwrap();
    assert!((s.area() - 1.0).abs() < 1e-12);
}

#[test]
fn concave_octagon() {
    let ngon = CcwNgon::new(pts(&[
        [0.0, 0.0],
        [0.5, 0.25],
        [1.0, 0.0],
        [0.75, 0.5],
        [1.0, 1.0],
        [0.5, 0.75],
        [0.0, 1.0],
        [0.25, 5.0],
    ]))
    .unwrap();
    assert!((ngon.area() - 0.5).abs() < 1e-12, "area {}", ngon.area());
}

#[test]
fn triangle_with_four_points_fails() {
    let err = Triangle::new(pts(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]])).unwrap_err();
    assert_eq!(
        err,
        GeomError::InvalidVertexCount {
            shape: "triangle",
            expected: Arity::Exactly(3),
            got: 4
        }
    );
}

#[test]
fn point_with_three_coordinates_fails() {
    assert_eq!(
        Point::new(&[0.0, 1.0, 2.0]),
        Err(GeomError::InvalidDimension { got: 3 })
    );
}

#[test]
fn rectangle_two_by_one() {
    let r = Square::new(pts(&[[0.0, 0.0], [2.0, 0.0], [2.0, 1.0], [0.0, 1.0]])).unwrap();
    assert!((r.area() - 2.0).abs() < 1e-12);
    let as_ngon = Ngon::new(r.into_vertices()).unwrap();
    assert!((as_ngon.area() - 2.0).abs() < 1e-12);
}

#[test]
fn degenerate_capability_yields_zero() {
    assert_eq!(Raw(vec![]).area(), 0.0);
    assert_eq!(Raw(pts(&[[3.0, 4.0]])).area(), 0.0);
    assert_eq!(Raw(pts(&[[3.0, 4.0], [-1.0, 7.0]])).area(), 0.0);
}

#[test]
fn collinear_vertices_have_zero_area() {
    let line = Triangle::new(pts(&[[0.0, 0.0], [1.0, 1.0], [2.0, 2.0]])).unwrap();
    assert_eq!(line.area(), 0.0);
}

#[test]
fn area_is_the_same_through_any_vertex_type() {
    let arrays = [[0.0, 0.0], [2.0, 0.0], [2.0, 1.0], [0.0, 1.0]];
    let tuples = arrays.map(|[x, y]| (x, y));
    let vectors = arrays.map(|[x, y]| prelude::Vec2::new(x, y));
    let points = pts(&arrays);
    assert_eq!(area(&arrays), 2.0);
    assert_eq!(area(&tuples), 2.0);
    assert_eq!(area(&vectors), 2.0);
    assert_eq!(area(&points), 2.0);
}

/// Star polygon around the origin from `(angle_offset, radius)` pairs. Offsets in
/// [0, 0.45) of the 2π/n spacing keep every gap below π, so the result is simple
/// and counter-clockwise.
fn star(offsets: &[(f64, f64)]) -> Ngon {
    let delta = std::f64::consts::TAU / offsets.len() as f64;
    let points = offsets
        .iter()
        .enumerate()
        .map(|(k, &(j, r))| {
            let th = (k as f64 + j) * delta;
            Point::from_xy(r * th.cos(), r * th.sin())
        })
        .collect();
    Ngon::new(points).unwrap()
}

fn star_offsets() -> impl Strategy<Value = Vec<(f64, f64)>> {
    prop::collection::vec((0.0f64..0.45, 0.1f64..2.0), 3..64)
}

proptest! {
    #[test]
    fn area_invariant_under_reversal(offsets in star_offsets()) {
        let poly = star(&offsets);
        let mut rev = poly.clone().into_vertices();
        rev.reverse();
        let rev = Ngon::new(rev).unwrap();
        prop_assert!(close(poly.area(), rev.area()));
        prop_assert!(close(signed_area(poly.vertices()), -signed_area(rev.vertices())));
    }

    #[test]
    fn area_invariant_under_rotation(offsets in star_offsets(), k in 0usize..64) {
        let poly = star(&offsets);
        prop_assert!(signed_area(poly.vertices()) > 0.0);
        let mut rot = poly.clone().into_vertices();
        rot.rotate_left(k % offsets.len());
        let rot = Ngon::new(rot).unwrap();
        prop_assert!(close(poly.area(), rot.area()));
    }

    #[test]
    fn area_is_non_negative_for_arbitrary_sequences(
        raw in prop::collection::vec((-1e3f64..1e3, -1e3f64..1e3), 0..32)
    ) {
        let a = area(&raw);
        prop_assert!(a >= 0.0);
        let mut rev = raw.clone();
        rev.reverse();
        prop_assert!((a - area(&rev)).abs() <= 1e-9 * (1.0 + a) + 1e-6);
    }

    #[test]
    fn point_accessors_roundtrip(x in any::<f64>(), y in any::<f64>()) {
        prop_assume!(x.is_finite() && y.is_finite());
        let p = Point::new(&[x, y]).unwrap();
        prop_assert_eq!(p.x(), x);
        prop_assert_eq!(p.y(), y);
    }

    #[test]
    fn point_rejects_wrong_lengths(coords in prop::collection::vec(any::<f64>(), 0..8)) {
        prop_assume!(coords.len() != 2);
        prop_assert_eq!(
            Point::new(&coords),
            Err(GeomError::InvalidDimension { got: coords.len() })
        );
    }

    #[test]
    fn shape_arity_rules(n in 0usize..10) {
        let points = vec![Point::from_xy(0.0, 0.0); n];
        prop_assert_eq!(Triangle::new(points.clone()).is_ok(), n == 3);
        prop_assert_eq!(Square::new(points.clone()).is_ok(), n == 4);
        prop_assert_eq!(Ngon::new(points).is_ok(), n >= 3);
    }
}
