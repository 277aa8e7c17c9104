use std::fmt;

use crate::{
    core::{
        math::{turn_multiplier, vec2},
        traits::Real,
    },
    error::{PolygonError, PolygonResult},
};

use super::{
    diameter_circle, poly::validate, Circle, Diameter, PolygonOptions, PolygonSource,
};

#[cfg(feature = "serde")]
use super::PolygonData;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Regular polygon: `n` edges of equal length with every turn angle equal to `360 / n` degrees.
///
/// The first edge runs along the positive x axis from the origin. Queries with closed form
/// answers (regularity, area, diameter, circumscribed circle) override the generic
/// [PolygonSource] implementations.
///
/// # Examples
///
/// ```
/// # use polyturn::polygon::*;
/// # use polyturn::core::traits::*;
/// let square = RegularPolygon::new(4, 100.0).unwrap();
/// assert!(square.area().unwrap().fuzzy_eq(10000.0));
/// assert_eq!(
///     square.to_string(),
///     "Regular polygon with 4 edges (edge length: 100, inner angles: 90)"
/// );
/// ```
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(
        rename_all = "camelCase",
        try_from = "PolygonData<T>",
        bound(deserialize = "T: Real + Deserialize<'de>")
    )
)]
#[derive(Debug, Clone, PartialEq)]
pub struct RegularPolygon<T = f64> {
    edge_lengths: Vec<T>,
    turn_angles: Vec<T>,
    options: PolygonOptions<T>,
}

impl<T> RegularPolygon<T>
where
    T: Real,
{
    /// Create a regular polygon with `num_edges` edges of `edge_length` using default
    /// [PolygonOptions].
    ///
    /// Fails with [PolygonError::InvalidArgument] if `num_edges < 3` or `edge_length` is not a
    /// positive finite number.
    #[inline]
    pub fn new(num_edges: usize, edge_length: T) -> PolygonResult<Self> {
        Self::with_options(num_edges, edge_length, PolygonOptions::new())
    }

    /// Same as [RegularPolygon::new] but using the `options` given.
    pub fn with_options(
        num_edges: usize,
        edge_length: T,
        options: PolygonOptions<T>,
    ) -> PolygonResult<Self> {
        if num_edges < 3 {
            return Err(PolygonError::invalid(format!(
                "regular polygon needs at least 3 edges, got {}",
                num_edges
            )));
        }

        let turn_angle = T::full_turn() / T::from_count(num_edges);
        let edge_lengths = vec![edge_length; num_edges];
        let turn_angles = vec![turn_angle; num_edges];
        validate(&edge_lengths, &turn_angles, &options)?;
        Ok(RegularPolygon {
            edge_lengths,
            turn_angles,
            options,
        })
    }

    #[inline]
    pub fn edge_length(&self) -> T {
        self.edge_lengths[0]
    }

    /// Exterior turn angle in degrees (`360 / n`).
    #[inline]
    pub fn turn_angle(&self) -> T {
        self.turn_angles[0]
    }

    /// Interior angle in degrees (`180 - turn_angle`).
    #[inline]
    pub fn interior_angle(&self) -> T {
        T::half_turn() - self.turn_angle()
    }

    /// Radius of the circle through every vertex, `l / (2 * sin(pi / n))`.
    #[inline]
    pub fn circumradius(&self) -> T {
        self.edge_length() / (T::two() * self.half_central_angle().sin())
    }

    /// Distance from the center to the middle of each edge, `l / (2 * tan(pi / n))`.
    #[inline]
    pub fn apothem(&self) -> T {
        self.edge_length() / (T::two() * self.half_central_angle().tan())
    }

    /// `pi / n` in radians.
    #[inline]
    fn half_central_angle(&self) -> T {
        T::pi() / T::from_count(self.edge_count())
    }
}

/// Rebuilds the polygon from its edge count and first edge length, the given sequences must match
/// the synthesized ones (fuzzy compared).
#[cfg(feature = "serde")]
impl<T> TryFrom<PolygonData<T>> for RegularPolygon<T>
where
    T: Real,
{
    type Error = PolygonError;

    fn try_from(data: PolygonData<T>) -> PolygonResult<Self> {
        let edge_length = data.edge_lengths.first().copied().unwrap_or_else(T::zero);
        let regular = Self::with_options(data.edge_lengths.len(), edge_length, data.options)?;
        let uniform = data.edge_lengths.iter().all(|&e| e.fuzzy_eq(edge_length))
            && data.turn_angles.len() == regular.edge_count()
            && data
                .turn_angles
                .iter()
                .all(|&a| a.fuzzy_eq(regular.turn_angle()));
        if !uniform {
            return Err(PolygonError::invalid(
                "regular polygon needs equal edge lengths and turn angles of 360 / n degrees",
            ));
        }

        Ok(regular)
    }
}

impl<T> PolygonSource for RegularPolygon<T>
where
    T: Real,
{
    type Num = T;

    #[inline]
    fn edge_lengths(&self) -> &[T] {
        &self.edge_lengths
    }

    #[inline]
    fn turn_angles(&self) -> &[T] {
        &self.turn_angles
    }

    #[inline]
    fn options(&self) -> &PolygonOptions<T> {
        &self.options
    }

    #[inline]
    fn is_regular(&self) -> bool {
        true
    }

    /// `n * l^2 / (4 * tan(pi / n))`.
    fn area(&self) -> PolygonResult<T> {
        let n = T::from_count(self.edge_count());
        let l = self.edge_length();
        Ok(n * l * l / (T::four() * self.half_central_angle().tan()))
    }

    /// Vertex 0 paired with vertex `n / 2`, by symmetry the farthest pair.
    fn diameter(&self) -> PolygonResult<Diameter<T>> {
        let vertexes = self.vertex_coordinates(true)?;
        let opposite = self.edge_count() / 2;
        let length = (vertexes[opposite] - vertexes[0]).length();
        Ok(Diameter::new(0, opposite, length))
    }

    /// Exact circumscribed circle. For an even number of edges the diameter pair spans the
    /// circle, for an odd number the center sits at `(l / 2, +/- apothem)` above (traversing
    /// left) or below (traversing right) the first edge.
    fn circumscribed_circle(&self, traverse_left: bool) -> PolygonResult<Circle<T>> {
        if self.edge_count() % 2 == 0 {
            return diameter_circle(self, traverse_left);
        }

        let center = vec2(
            self.edge_length() / T::two(),
            turn_multiplier::<T>(traverse_left) * self.apothem(),
        );
        Ok(Circle::new(center, self.circumradius()))
    }
}

impl<T> fmt::Display for RegularPolygon<T>
where
    T: Real,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Regular polygon with {} edges (edge length: {}, inner angles: {})",
            self.edge_count(),
            self.edge_length(),
            self.interior_angle()
        )
    }
}
