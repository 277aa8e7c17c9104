use polyturn::{
    assert_fuzzy_eq,
    core::{
        math::{vec2, Vector2},
        traits::FuzzyEq,
    },
    polygon,
    polygon::{MismatchPolicy, Polygon, PolygonOptions, PolygonSource, RegularPolygon, Triangle},
    PolygonError,
};

fn square(side: f64) -> Polygon {
    Polygon::new([side; 4], [90.0; 4]).unwrap()
}

#[test]
fn square_vertex_coordinates() {
    let vertexes = square(100.0).vertex_coordinates(true).unwrap();
    let expected = [
        vec2(0.0, 0.0),
        vec2(100.0, 0.0),
        vec2(100.0, 100.0),
        vec2(0.0, 100.0),
        vec2(0.0, 0.0),
    ];
    assert_eq!(vertexes.len(), expected.len());
    for (v, e) in vertexes.iter().zip(expected) {
        assert_fuzzy_eq!(*v, e);
    }
}

#[test]
fn square_vertex_coordinates_traversing_right() {
    let vertexes = square(100.0).vertex_coordinates(false).unwrap();
    assert_fuzzy_eq!(vertexes[1], vec2(100.0, 0.0));
    assert_fuzzy_eq!(vertexes[2], vec2(100.0, -100.0));
    assert_fuzzy_eq!(vertexes[3], vec2(0.0, -100.0));
    assert_fuzzy_eq!(vertexes[4], Vector2::zero());
}

#[test]
fn closure() {
    assert!(square(100.0).is_closed().unwrap());
    assert!(square(0.5).is_closed().unwrap());

    let open = Polygon::new([100.0; 3], [90.0; 3]).unwrap();
    assert!(!open.is_closed().unwrap());
    let end = *open.vertex_coordinates(true).unwrap().last().unwrap();
    assert_fuzzy_eq!(end, vec2(0.0, 100.0));

    let angle1 = 0.8f64.asin().to_degrees();
    let angle2 = 0.8f64.acos().to_degrees();
    let right_triangle =
        Polygon::new([400.0, 300.0, 500.0], [90.0, 180.0 - angle1, 180.0 - angle2]).unwrap();
    assert!(right_triangle.is_closed().unwrap());
}

#[test]
fn closure_f32() {
    let square = Polygon::<f32>::new([100.0; 4], [90.0; 4]).unwrap();
    assert!(square.is_closed().unwrap());
    let end = *square.vertex_coordinates(true).unwrap().last().unwrap();
    assert!(end.fuzzy_eq(Vector2::zero()));

    let hexagon = RegularPolygon::<f32>::new(6, 50.0).unwrap();
    assert!(hexagon.is_closed().unwrap());

    let open = Polygon::<f32>::new([100.0; 3], [90.0; 3]).unwrap();
    assert!(!open.is_closed().unwrap());
}

#[test]
fn closure_uses_configured_epsilon() {
    let edges = [100.0, 100.0, 100.0, 99.5];
    let almost = Polygon::new(edges, [90.0; 4]).unwrap();
    assert!(!almost.is_closed().unwrap());

    let options = PolygonOptions {
        closure_eps: 0.6,
        ..Default::default()
    };
    let tolerant = Polygon::with_options(edges, [90.0; 4], options).unwrap();
    assert!(tolerant.is_closed().unwrap());
}

#[test]
fn mean_edge_length_and_is_larger() {
    let a = Polygon::new([40.0, 60.0, 50.0], [120.0; 3]).unwrap();
    let b = RegularPolygon::new(4, 80.0).unwrap();
    assert_fuzzy_eq!(a.mean_edge_length(), 50.0);
    assert_fuzzy_eq!(b.mean_edge_length(), 80.0);
    assert!(!a.is_larger(&b));
    assert!(b.is_larger(&a));

    // equal means are not larger either way
    let c = Triangle::new([50.0; 3], [120.0; 3]).unwrap();
    assert!(!a.is_larger(&c));
    assert!(!c.is_larger(&a));
}

#[test]
fn perimeter() {
    let poly = Polygon::new([120.0, 66.0, 25.0, 21.0, 110.0, 56.0, 233.0], [0.0; 7]).unwrap();
    assert_fuzzy_eq!(poly.perimeter(), 631.0);
    assert_eq!(poly.edge_count(), 7);
}

#[test]
fn describe() {
    assert_eq!(
        square(100.0).to_string(),
        "Polygon with 4 edges, mean edge length: 100cm"
    );
    let poly = Polygon::new([40.0, 60.0], [180.0, 180.0]).unwrap();
    assert_eq!(
        poly.to_string(),
        "Polygon with 2 edges, mean edge length: 50cm"
    );
}

#[test]
fn regularity_checks() {
    let sq = square(10.0);
    assert!(sq.is_regular());
    assert!(sq.is_regular_source_compatible());
    assert!(sq.is_regular_strict());

    // only the second edge is compared against the first
    let first_two_match = Polygon::new([10.0, 10.0, 30.0], [90.0, 90.0, 45.0]).unwrap();
    assert!(first_two_match.is_regular());
    assert!(first_two_match.is_regular_source_compatible());
    assert!(!first_two_match.is_regular_strict());

    let second_differs = Polygon::new([10.0, 20.0, 10.0], [90.0; 3]).unwrap();
    assert!(!second_differs.is_regular_source_compatible());
    assert!(!second_differs.is_regular_strict());

    let angle_differs = Polygon::new([10.0; 3], [90.0, 45.0, 90.0]).unwrap();
    assert!(!angle_differs.is_regular_source_compatible());

    let single = Polygon::new([5.0], [0.0]).unwrap();
    assert!(!single.is_regular_source_compatible());
    assert!(single.is_regular_strict());
}

#[test]
fn generic_area() {
    assert_fuzzy_eq!(square(100.0).area().unwrap(), 10000.0, 1e-6);

    let angle1 = 0.8f64.asin().to_degrees();
    let angle2 = 0.8f64.acos().to_degrees();
    let right_triangle =
        Polygon::new([400.0, 300.0, 500.0], [90.0, 180.0 - angle1, 180.0 - angle2]).unwrap();
    assert_fuzzy_eq!(right_triangle.area().unwrap(), 60000.0, 1e-6);

    // shoelace over the traversed path agrees with the closed form
    let hexagon = Polygon::new([10.0; 6], [60.0; 6]).unwrap();
    let regular = RegularPolygon::new(6, 10.0).unwrap();
    assert_fuzzy_eq!(hexagon.area().unwrap(), regular.area().unwrap(), 1e-9);
}

#[test]
fn extents() {
    let aabb = square(100.0).extents().unwrap();
    assert_fuzzy_eq!(aabb.min_x, 0.0);
    assert_fuzzy_eq!(aabb.min_y, 0.0);
    assert_fuzzy_eq!(aabb.max_x, 100.0);
    assert_fuzzy_eq!(aabb.max_y, 100.0);

    let line = Polygon::new([10.0, 10.0], [180.0, 180.0]).unwrap();
    let aabb = line.extents().unwrap();
    assert_fuzzy_eq!(aabb.min_x, 0.0);
    assert_fuzzy_eq!(aabb.max_x, 10.0);
    assert_fuzzy_eq!(aabb.min_y, 0.0);
    assert_fuzzy_eq!(aabb.max_y, 0.0);
}

#[test]
fn macro_construction() {
    let poly = polygon![(100.0, 90.0), (100.0, 90.0), (100.0, 90.0), (100.0, 90.0)].unwrap();
    assert_eq!(poly, square(100.0));
}

#[test]
fn invalid_arguments() {
    let is_invalid = |r: Result<Polygon, PolygonError>| {
        matches!(r, Err(PolygonError::InvalidArgument { .. }))
    };
    assert!(is_invalid(Polygon::new(Vec::<f64>::new(), Vec::<f64>::new())));
    assert!(is_invalid(Polygon::new([10.0, 0.0], [90.0, 90.0])));
    assert!(is_invalid(Polygon::new([10.0, -1.0], [90.0, 90.0])));
    assert!(is_invalid(Polygon::new([f64::NAN], [90.0])));
    assert!(is_invalid(Polygon::new([f64::INFINITY], [90.0])));
    assert!(is_invalid(Polygon::new([10.0], [f64::NAN])));

    let options = PolygonOptions {
        closure_eps: 0.0,
        ..Default::default()
    };
    assert!(is_invalid(Polygon::with_options([10.0], [90.0], options)));
}

#[test]
fn mismatched_lengths_warn_by_default() {
    let poly = Polygon::new([10.0, 10.0, 10.0], [90.0, 90.0]).unwrap();
    assert_eq!(poly.edge_count(), 3);
    assert_eq!(poly.turn_angles().len(), 2);
    assert_fuzzy_eq!(poly.mean_edge_length(), 10.0);
    assert!(!poly.is_regular_strict());

    let expected = PolygonError::IndexOutOfRange { index: 2, len: 2 };
    assert_eq!(poly.vertex_coordinates(true).unwrap_err(), expected);
    assert_eq!(poly.is_closed().unwrap_err(), expected);
    assert_eq!(poly.diameter().unwrap_err(), expected);
    assert_eq!(poly.circumscribed_circle(true).unwrap_err(), expected);
    assert_eq!(poly.area().unwrap_err(), expected);

    // extra turn angles are never read
    let extra = Polygon::new([10.0, 10.0], [90.0, 90.0, 90.0]).unwrap();
    assert_eq!(extra.vertex_coordinates(true).unwrap().len(), 3);
    assert!(extra.is_regular_source_compatible());
}

#[test]
fn mismatched_lengths_rejected_when_configured() {
    let options = PolygonOptions {
        mismatch_policy: MismatchPolicy::Reject,
        ..Default::default()
    };
    let err = Polygon::with_options([10.0, 10.0, 10.0], [90.0, 90.0], options).unwrap_err();
    assert_eq!(err, PolygonError::LengthMismatch { edges: 3, angles: 2 });
    assert_eq!(
        err.to_string(),
        "edge lengths (3) and turn angles (2) differ in length"
    );
}
