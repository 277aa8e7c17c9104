use super::Renderer;
use crate::core::{
    math::{advance, Vector2},
    traits::Real,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Primitive recorded by a [Turtle] while its pen is down.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Clone, PartialEq)]
pub enum Stroke<T = f64> {
    Line {
        from: Vector2<T>,
        to: Vector2<T>,
        color: String,
        width: u32,
    },
    Circle {
        center: Vector2<T>,
        radius: T,
        color: String,
        width: u32,
    },
}

/// In-memory drawing context implementing [Renderer].
///
/// Holds the pen state (position, heading, color, width, up/down) that turtle graphics keep as
/// process wide state, and records every drawn primitive as a [Stroke] so the result can be
/// inspected or exported.
///
/// # Examples
///
/// ```
/// # use polyturn::render::*;
/// # use polyturn::core::math::*;
/// let mut turtle = Turtle::new();
/// turtle.forward(10.0);
/// turtle.turn(90.0);
/// turtle.forward(10.0);
/// assert!(turtle.position().fuzzy_eq(Vector2::new(10.0, 10.0)));
/// assert_eq!(turtle.strokes().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Turtle<T = f64> {
    position: Vector2<T>,
    heading: T,
    pen_is_down: bool,
    color: String,
    pen_width: u32,
    strokes: Vec<Stroke<T>>,
}

impl<T> Default for Turtle<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Turtle<T>
where
    T: Real,
{
    /// New turtle at the origin, heading 0, pen down, black pen of width 1.
    pub fn new() -> Self {
        Turtle {
            position: Vector2::zero(),
            heading: T::zero(),
            pen_is_down: true,
            color: String::from("black"),
            pen_width: 1,
            strokes: Vec::new(),
        }
    }

    #[inline]
    pub fn position(&self) -> Vector2<T> {
        self.position
    }

    /// Current heading in degrees (not normalized).
    #[inline]
    pub fn heading(&self) -> T {
        self.heading
    }

    #[inline]
    pub fn is_pen_down(&self) -> bool {
        self.pen_is_down
    }

    #[inline]
    pub fn color(&self) -> &str {
        &self.color
    }

    #[inline]
    pub fn pen_width(&self) -> u32 {
        self.pen_width
    }

    /// All primitives drawn so far, in drawing order.
    #[inline]
    pub fn strokes(&self) -> &[Stroke<T>] {
        &self.strokes
    }

    /// Move back to the origin with heading 0 and the pen down. Recorded strokes are kept.
    pub fn reset(&mut self) {
        self.position = Vector2::zero();
        self.heading = T::zero();
        self.pen_is_down = true;
    }

    /// Remove all recorded strokes. Pen state is kept.
    pub fn clear(&mut self) {
        self.strokes.clear();
    }

    fn line_to(&mut self, to: Vector2<T>) {
        if self.pen_is_down {
            self.strokes.push(Stroke::Line {
                from: self.position,
                to,
                color: self.color.clone(),
                width: self.pen_width,
            });
        }
        self.position = to;
    }
}

impl<T> Renderer<T> for Turtle<T>
where
    T: Real,
{
    fn set_color(&mut self, color: &str) {
        self.color = color.to_owned();
    }

    fn set_pen_width(&mut self, width: u32) {
        self.pen_width = width;
    }

    fn pen_down(&mut self) {
        self.pen_is_down = true;
    }

    fn pen_up(&mut self) {
        self.pen_is_down = false;
    }

    fn move_to(&mut self, position: Vector2<T>) {
        self.line_to(position);
    }

    fn set_heading_degrees(&mut self, heading: T) {
        self.heading = heading;
    }

    fn forward(&mut self, distance: T) {
        let to = advance(self.position, self.heading, distance);
        self.line_to(to);
    }

    fn turn(&mut self, angle: T) {
        self.heading = self.heading + angle;
    }

    fn draw_circle(&mut self, radius: T) {
        if !self.pen_is_down {
            return;
        }

        // center lies `radius` to the left of the heading (right for negative radius)
        let quarter_turn = T::half_turn() / T::two();
        let center = advance(self.position, self.heading + quarter_turn, radius);
        log::trace!("turtle circle at {:?} radius {}", center, radius);
        self.strokes.push(Stroke::Circle {
            center,
            radius: radius.abs(),
            color: self.color.clone(),
            width: self.pen_width,
        });
    }
}
