//! Core/common math functions for working with headings, angles and 2D points.
mod base_math;
mod vector2;

pub use base_math::*;
pub use vector2::{vec2, Vector2};
