//! Polygons traced turtle style from a sequence of edge lengths and turn angles.
//!
//! Starting at the origin heading along the positive x axis, each edge is walked and then the
//! heading turns by the edge's (exterior) turn angle. From that description the crate computes
//! vertex coordinates, whether the path closes, the polygon's diameter (farthest vertex pair),
//! the circumscribed circle and the area, and draws polygons on any [render::Renderer].
//!
//! # Examples
//!
//! ```
//! use polyturn::{polygon::*, render::Turtle};
//! # use polyturn::core::traits::*;
//!
//! let square = RegularPolygon::new(4, 100.0)?;
//! assert!(square.is_closed()?);
//! assert!(square.diameter()?.length.fuzzy_eq(100.0 * 2f64.sqrt()));
//!
//! let mut turtle = Turtle::new();
//! square.draw(&mut turtle, "red", 2, true)?;
//! square.draw_circumscribed_circle(&mut turtle, "black", 1, true)?;
//! assert_eq!(turtle.strokes().len(), 5);
//! # Ok::<(), polyturn::PolygonError>(())
//! ```

#[macro_use]
mod macros;
pub mod core;
pub mod error;
pub mod polygon;
pub mod render;
pub mod shape;

/// Internal modules made public for benchmarking and testing purposes.
pub mod internal {
    pub mod diameter {
        pub use crate::polygon::internal::diameter::*;
    }
    pub mod traversal {
        pub use crate::polygon::internal::traversal::*;
    }
}

pub use static_aabb2d_index::AABB;

pub use crate::error::{PolygonError, PolygonResult};
