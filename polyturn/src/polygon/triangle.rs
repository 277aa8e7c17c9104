use std::fmt;

use crate::{
    core::traits::Real,
    error::{PolygonError, PolygonResult},
};

use super::{poly::validate, PolygonOptions, PolygonSource};

#[cfg(feature = "serde")]
use super::PolygonData;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Triangle given by its three edge lengths and turn angles.
///
/// Height and area are computed from the base (first edge) and the turn angle after it, which
/// assumes an isosceles triangle over the base (the supplement of the first turn angle is the
/// base angle). Diameter and circumscribed circle use the generic [PolygonSource]
/// implementations.
///
/// # Examples
///
/// ```
/// # use polyturn::polygon::*;
/// let tri = Triangle::<f64>::new([30.0, 30.0, 30.0], [120.0, 120.0, 120.0]).unwrap();
/// assert!((tri.area().unwrap() - 389.711).abs() < 1e-3);
/// assert_eq!(tri.to_string(), "Triangle with edges 30, 30 and 30");
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
pub struct Triangle<T = f64> {
    edge_lengths: Vec<T>,
    turn_angles: Vec<T>,
    options: PolygonOptions<T>,
}

impl<T> Triangle<T>
where
    T: Real,
{
    /// Create a triangle using default [PolygonOptions].
    ///
    /// Fails with [PolygonError::InvalidArgument] if there are not exactly 3 edge lengths, see
    /// [Polygon::new](super::Polygon::new) for the other checks.
    #[inline]
    pub fn new(
        edge_lengths: impl Into<Vec<T>>,
        turn_angles: impl Into<Vec<T>>,
    ) -> PolygonResult<Self> {
        Self::with_options(edge_lengths, turn_angles, PolygonOptions::new())
    }

    /// Same as [Triangle::new] but using the `options` given.
    pub fn with_options(
        edge_lengths: impl Into<Vec<T>>,
        turn_angles: impl Into<Vec<T>>,
        options: PolygonOptions<T>,
    ) -> PolygonResult<Self> {
        let edge_lengths = edge_lengths.into();
        let turn_angles = turn_angles.into();
        if edge_lengths.len() != 3 {
            return Err(PolygonError::invalid(format!(
                "triangle needs exactly 3 edges, got {}",
                edge_lengths.len()
            )));
        }

        validate(&edge_lengths, &turn_angles, &options)?;
        Ok(Triangle {
            edge_lengths,
            turn_angles,
            options,
        })
    }

    /// First edge, used as the base for [Triangle::height].
    #[inline]
    pub fn base(&self) -> T {
        self.edge_lengths[0]
    }

    /// Height over the base, `base / 2 * tan(180 - turn_angles[0])` with the angle in degrees.
    pub fn height(&self) -> PolygonResult<T> {
        let first_turn = self
            .turn_angles
            .first()
            .copied()
            .ok_or(PolygonError::IndexOutOfRange { index: 0, len: 0 })?;
        let base_angle = T::deg_to_rad(T::half_turn() - first_turn);
        Ok(self.base() / T::two() * base_angle.tan())
    }
}

#[cfg(feature = "serde")]
impl<T> TryFrom<PolygonData<T>> for Triangle<T>
where
    T: Real,
{
    type Error = PolygonError;

    fn try_from(data: PolygonData<T>) -> PolygonResult<Self> {
        Self::with_options(data.edge_lengths, data.turn_angles, data.options)
    }
}

impl<T> PolygonSource for Triangle<T>
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

    /// `base * height / 2`.
    fn area(&self) -> PolygonResult<T> {
        Ok(self.base() * self.height()? / T::two())
    }
}

impl<T> fmt::Display for Triangle<T>
where
    T: Real,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let e = &self.edge_lengths;
        write!(f, "Triangle with edges {}, {} and {}", e[0], e[1], e[2])
    }
}
