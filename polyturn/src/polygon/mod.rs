//! Polygons described by edge lengths and turn angles.
//!
//! [PolygonSource] holds every query and drawing operation with generic default
//! implementations. [Polygon], [RegularPolygon] and [Triangle] implement it, the latter two
//! overriding the queries that have closed form answers.
pub(crate) mod internal;
mod poly;
mod poly_types;
mod regular;
mod traits;
mod triangle;

pub use poly::Polygon;
pub use poly_types::*;
pub use regular::RegularPolygon;
pub use traits::{diameter_circle, PolygonSource};
pub use triangle::Triangle;
