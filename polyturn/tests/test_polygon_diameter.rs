use polyturn::{
    assert_fuzzy_eq,
    core::{
        math::{dist_squared, vec2, Vector2},
        traits::FuzzyEq,
    },
    polygon::{Circle, Polygon, PolygonSource},
};

fn right_triangle() -> Polygon {
    let angle1 = 0.8f64.asin().to_degrees();
    let angle2 = 0.8f64.acos().to_degrees();
    Polygon::new([400.0, 300.0, 500.0], [90.0, 180.0 - angle1, 180.0 - angle2]).unwrap()
}

fn irregular() -> Polygon {
    Polygon::new(
        [120.0, 66.0, 25.0, 21.0, 110.0, 56.0, 233.0],
        [25.0, 33.0, 66.0, 54.0, 89.0, 120.0, 80.0],
    )
    .unwrap()
}

#[test]
fn square_diameter_is_diagonal() {
    let square = Polygon::new([100.0; 4], [90.0; 4]).unwrap();
    let d = square.diameter().unwrap();
    assert_fuzzy_eq!(d.length, 100.0 * 2f64.sqrt());

    let vertexes = square.vertex_coordinates(true).unwrap();
    let (p0, p1) = (vertexes[d.start_index], vertexes[d.end_index]);
    assert!(d.start_index < d.end_index);
    // opposite corners differ in both coordinates by the side length
    assert_fuzzy_eq!((p1.x - p0.x).abs(), 100.0, 1e-9);
    assert_fuzzy_eq!((p1.y - p0.y).abs(), 100.0, 1e-9);
}

#[test]
fn diameter_is_farthest_pair() {
    let poly = irregular();
    let d = poly.diameter().unwrap();
    let vertexes = poly.vertex_coordinates(true).unwrap();
    assert_eq!(vertexes.len(), 8);
    assert_fuzzy_eq!(
        d.length,
        dist_squared(vertexes[d.start_index], vertexes[d.end_index]).sqrt()
    );

    for (i, &p0) in vertexes.iter().enumerate() {
        for &p1 in &vertexes[i + 1..] {
            assert!(dist_squared(p0, p1).sqrt() <= d.length);
        }
    }
}

#[test]
fn right_triangle_circumscribed_circle_is_exact() {
    let tri = right_triangle();
    assert_fuzzy_eq!(tri.diameter().unwrap().length, 500.0, 1e-9);

    let circle = tri.circumscribed_circle(true).unwrap();
    assert_fuzzy_eq!(circle.center, vec2(200.0, 150.0), 1e-6);
    assert_fuzzy_eq!(circle.radius, 250.0, 1e-9);

    // every vertex of a right triangle lies on the circle over its hypotenuse
    for v in tri.vertex_coordinates(true).unwrap() {
        assert_fuzzy_eq!((v - circle.center).length(), circle.radius, 1e-6);
    }
}

#[test]
fn circumscribed_circle_traversing_right_is_mirrored() {
    let tri = right_triangle();
    let left = tri.circumscribed_circle(true).unwrap();
    let right = tri.circumscribed_circle(false).unwrap();
    assert_fuzzy_eq!(right, Circle::new(vec2(left.center.x, -left.center.y), left.radius));
}

#[test]
fn circumscribed_circle_approximation_contains_diameter_pair() {
    let poly = irregular();
    let d = poly.diameter().unwrap();
    let circle = poly.circumscribed_circle(true).unwrap();
    assert_fuzzy_eq!(circle.radius, d.length / 2.0);

    let vertexes = poly.vertex_coordinates(true).unwrap();
    assert_fuzzy_eq!(
        (vertexes[d.start_index] - circle.center).length(),
        circle.radius
    );
    assert_fuzzy_eq!(
        (vertexes[d.end_index] - circle.center).length(),
        circle.radius
    );
    assert_fuzzy_eq!(circle.bottom(), circle.center - vec2(0.0, circle.radius));
}

#[test]
fn degenerate_back_and_forth_path() {
    // walks out and straight back, the end point coincides with the start
    let poly = Polygon::new([10.0, 10.0], [180.0, 180.0]).unwrap();
    assert!(poly.is_closed().unwrap());
    let d = poly.diameter().unwrap();
    assert_eq!((d.start_index, d.end_index), (0, 1));
    assert_fuzzy_eq!(d.length, 10.0);
    let circle = poly.circumscribed_circle(true).unwrap();
    assert_fuzzy_eq!(circle.center, Vector2::new(5.0, 0.0));
    assert_fuzzy_eq!(poly.area().unwrap(), 0.0);
}
