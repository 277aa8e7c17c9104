//! Traces the example polygons with turtles and writes the drawing to an SVG file.
//!
//! Run with: cargo run --example turtle_polygons -- [output.svg]
//! Set `RUST_LOG=debug` to see the computed diameters and circles.

use polyturn::{
    core::math::Vector2,
    polygon::{Polygon, PolygonSource, RegularPolygon, Triangle},
    render::{Renderer, Stroke, Turtle},
    PolygonResult,
};
use std::error::Error;
use svg::{
    node::element::{Circle, Line, Rectangle},
    Document,
};

const MARGIN: f64 = 20.0;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| String::from("polyturn_demo.svg"));
    if let Err(e) = run(&path) {
        log::error!("demo failed: {}", e);
        std::process::exit(1);
    }
}

fn run(path: &str) -> Result<(), Box<dyn Error>> {
    let mut turtle = Turtle::new();
    outlines(&mut turtle)?;

    // second turtle starts fresh at the origin
    let mut second = Turtle::new();
    let pentagon = RegularPolygon::new(5, 120.0)?;
    println!("{}", pentagon);
    pentagon.draw(&mut second, "green", 2, false)?;
    pentagon.draw_circumscribed_circle(&mut second, "green", 1, false)?;

    let equilateral = RegularPolygon::new(3, 30.0)?;
    let same_triangle = Triangle::new([30.0, 30.0, 30.0], [120.0, 120.0, 120.0])?;
    println!("area1: {}", equilateral.area()?);
    println!("area2: {}", same_triangle.area()?);

    let strokes: Vec<&Stroke> = turtle.strokes().iter().chain(second.strokes()).collect();
    svg::save(path, &to_svg(&strokes))?;
    log::info!("wrote {} strokes to {}", strokes.len(), path);
    Ok(())
}

fn outlines(turtle: &mut Turtle) -> PolygonResult<()> {
    let square = Polygon::new([100.0; 4], [90.0; 4])?;
    println!("{}", square);
    square.draw(turtle, "red", 2, true)?;
    println!("{:?}", square.vertex_coordinates(true)?);
    println!("{}", square.is_closed()?);

    let angle1 = 0.8f64.asin().to_degrees();
    let angle2 = 0.8f64.acos().to_degrees();
    let right_triangle =
        Polygon::new([400.0, 300.0, 500.0], [90.0, 180.0 - angle1, 180.0 - angle2])?;
    println!("{:?}", right_triangle.vertex_coordinates(true)?);
    println!("{}", right_triangle.is_closed()?);
    right_triangle.draw(turtle, "red", 2, true)?;

    right_triangle.draw_circumscribed_circle(turtle, "black", 1, true)?;
    square.draw_circumscribed_circle(turtle, "black", 1, true)?;

    turtle.pen_up();
    turtle.move_to(Vector2::zero());
    turtle.set_heading_degrees(0.0);

    let irregular = Polygon::new(
        [120.0, 66.0, 25.0, 21.0, 110.0, 56.0, 233.0],
        [25.0, 33.0, 66.0, 54.0, 89.0, 120.0, 80.0],
    )?;
    irregular.draw(turtle, "blue", 2, true)?;
    irregular.draw_circumscribed_circle(turtle, "black", 1, true)?;
    Ok(())
}

/// Bounds as (min_x, min_y, max_x, max_y) of everything drawn.
fn stroke_bounds(strokes: &[&Stroke]) -> (f64, f64, f64, f64) {
    let mut bounds = (0.0f64, 0.0f64, 0.0f64, 0.0f64);
    let mut add = |x: f64, y: f64| {
        bounds.0 = bounds.0.min(x);
        bounds.1 = bounds.1.min(y);
        bounds.2 = bounds.2.max(x);
        bounds.3 = bounds.3.max(y);
    };
    for stroke in strokes {
        match stroke {
            Stroke::Line { from, to, .. } => {
                add(from.x, from.y);
                add(to.x, to.y);
            }
            Stroke::Circle { center, radius, .. } => {
                add(center.x - radius, center.y - radius);
                add(center.x + radius, center.y + radius);
            }
        }
    }
    bounds
}

/// SVG document with the y axis flipped so positive y points up like the turtle's.
fn to_svg(strokes: &[&Stroke]) -> Document {
    let (min_x, min_y, max_x, max_y) = stroke_bounds(strokes);
    let width = max_x - min_x + 2.0 * MARGIN;
    let height = max_y - min_y + 2.0 * MARGIN;
    let tx = |x: f64| x - min_x + MARGIN;
    let ty = |y: f64| max_y - y + MARGIN;

    let background = Rectangle::new()
        .set("width", "100%")
        .set("height", "100%")
        .set("fill", "white");
    let mut document = Document::new()
        .set("width", width.ceil())
        .set("height", height.ceil())
        .set("viewBox", format!("0 0 {:.3} {:.3}", width, height))
        .add(background);

    for stroke in strokes {
        document = match stroke {
            Stroke::Line {
                from,
                to,
                color,
                width,
            } => document.add(
                Line::new()
                    .set("x1", tx(from.x))
                    .set("y1", ty(from.y))
                    .set("x2", tx(to.x))
                    .set("y2", ty(to.y))
                    .set("stroke", color.as_str())
                    .set("stroke-width", *width),
            ),
            Stroke::Circle {
                center,
                radius,
                color,
                width,
            } => document.add(
                Circle::new()
                    .set("cx", tx(center.x))
                    .set("cy", ty(center.y))
                    .set("r", *radius)
                    .set("fill", "none")
                    .set("stroke", color.as_str())
                    .set("stroke-width", *width),
            ),
        };
    }

    document
}
