//! Tagged union over the polygon variants.
use std::fmt;

use static_aabb2d_index::AABB;

use crate::{
    core::{math::Vector2, traits::Real},
    error::PolygonResult,
    polygon::{Circle, Diameter, Polygon, PolygonOptions, PolygonSource, RegularPolygon, Triangle},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Any of the polygon variants. Every [PolygonSource] query dispatches to the wrapped variant so
/// its specialized formulas apply, which allows mixing variants in one collection.
///
/// # Examples
///
/// ```
/// # use polyturn::polygon::*;
/// # use polyturn::shape::Shape;
/// let shapes: Vec<Shape> = vec![
///     Polygon::new([100.0; 4], [90.0; 4]).unwrap().into(),
///     RegularPolygon::new(5, 120.0).unwrap().into(),
///     Triangle::new([30.0; 3], [120.0; 3]).unwrap().into(),
/// ];
/// let largest = shapes
///     .iter()
///     .fold(&shapes[0], |acc, s| if s.is_larger(acc) { s } else { acc });
/// assert_eq!(largest.edge_count(), 5);
/// ```
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(
        rename_all = "camelCase",
        bound(deserialize = "T: Real + Deserialize<'de>")
    )
)]
#[derive(Debug, Clone, PartialEq)]
pub enum Shape<T = f64> {
    Generic(Polygon<T>),
    Regular(RegularPolygon<T>),
    Triangle(Triangle<T>),
}

macro_rules! dispatch {
    ($self:expr, $p:ident => $e:expr) => {
        match $self {
            Shape::Generic($p) => $e,
            Shape::Regular($p) => $e,
            Shape::Triangle($p) => $e,
        }
    };
}

impl<T> From<Polygon<T>> for Shape<T> {
    #[inline]
    fn from(value: Polygon<T>) -> Self {
        Shape::Generic(value)
    }
}

impl<T> From<RegularPolygon<T>> for Shape<T> {
    #[inline]
    fn from(value: RegularPolygon<T>) -> Self {
        Shape::Regular(value)
    }
}

impl<T> From<Triangle<T>> for Shape<T> {
    #[inline]
    fn from(value: Triangle<T>) -> Self {
        Shape::Triangle(value)
    }
}

impl<T> PolygonSource for Shape<T>
where
    T: Real,
{
    type Num = T;

    #[inline]
    fn edge_lengths(&self) -> &[T] {
        dispatch!(self, p => p.edge_lengths())
    }

    #[inline]
    fn turn_angles(&self) -> &[T] {
        dispatch!(self, p => p.turn_angles())
    }

    #[inline]
    fn options(&self) -> &PolygonOptions<T> {
        dispatch!(self, p => p.options())
    }

    #[inline]
    fn is_regular(&self) -> bool {
        dispatch!(self, p => p.is_regular())
    }

    #[inline]
    fn vertex_coordinates(&self, traverse_left: bool) -> PolygonResult<Vec<Vector2<T>>> {
        dispatch!(self, p => p.vertex_coordinates(traverse_left))
    }

    #[inline]
    fn is_closed(&self) -> PolygonResult<bool> {
        dispatch!(self, p => p.is_closed())
    }

    #[inline]
    fn diameter(&self) -> PolygonResult<Diameter<T>> {
        dispatch!(self, p => p.diameter())
    }

    #[inline]
    fn circumscribed_circle(&self, traverse_left: bool) -> PolygonResult<Circle<T>> {
        dispatch!(self, p => p.circumscribed_circle(traverse_left))
    }

    #[inline]
    fn area(&self) -> PolygonResult<T> {
        dispatch!(self, p => p.area())
    }

    #[inline]
    fn extents(&self) -> PolygonResult<AABB<T>> {
        dispatch!(self, p => p.extents())
    }
}

impl<T> fmt::Display for Shape<T>
where
    T: Real,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        dispatch!(self, p => fmt::Display::fmt(p, f))
    }
}
