//! Drawing surface contract used by the polygon draw operations, plus an in-memory turtle that
//! implements it.
//!
//! The polygon types never own a drawing surface, every draw call receives one as an explicit
//! `&mut` argument.
mod turtle;

pub use turtle::{Stroke, Turtle};

use crate::core::{math::Vector2, traits::Real};

/// Pen based drawing surface (turtle graphics style).
///
/// Headings and turns are in degrees. A heading of 0 points along the positive x axis and
/// positive turns rotate counter clockwise.
pub trait Renderer<T = f64>
where
    T: Real,
{
    /// Set the color used for subsequently drawn primitives.
    fn set_color(&mut self, color: &str);

    /// Set the pen width used for subsequently drawn primitives.
    fn set_pen_width(&mut self, width: u32);

    /// Lower the pen, movement draws.
    fn pen_down(&mut self);

    /// Lift the pen, movement does not draw.
    fn pen_up(&mut self);

    /// Move to an absolute `position`, drawing a line if the pen is down.
    fn move_to(&mut self, position: Vector2<T>);

    /// Set the absolute heading in degrees.
    fn set_heading_degrees(&mut self, heading: T);

    /// Move `distance` along the current heading, drawing a line if the pen is down.
    fn forward(&mut self, distance: T);

    /// Rotate the heading by `angle` degrees (positive is left/counter clockwise).
    fn turn(&mut self, angle: T);

    /// Draw a full circle of `radius` with the current position as the point on the circle and
    /// the current heading as its tangent. For heading 0 and a positive radius the current
    /// position is the bottom-most point. Position and heading are unchanged afterwards.
    fn draw_circle(&mut self, radius: T);
}
