use std::fmt;

use crate::{
    core::traits::Real,
    error::{PolygonError, PolygonResult},
};

use super::{MismatchPolicy, PolygonOptions, PolygonSource, UNIT};

#[cfg(feature = "serde")]
use super::PolygonData;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Generic polygon given by edge lengths and turn angles. Implements [PolygonSource], see the
/// trait documentation for all the queries and drawing operations available.
///
/// # Examples
///
/// ```
/// # use polyturn::polygon::*;
/// let square = Polygon::new([100.0; 4], [90.0; 4]).unwrap();
/// assert_eq!(square.edge_count(), 4);
/// assert!(square.is_closed().unwrap());
/// assert_eq!(
///     square.to_string(),
///     "Polygon with 4 edges, mean edge length: 100cm"
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
pub struct Polygon<T = f64> {
    edge_lengths: Vec<T>,
    turn_angles: Vec<T>,
    options: PolygonOptions<T>,
}

impl<T> Polygon<T>
where
    T: Real,
{
    /// Create a new polygon using default [PolygonOptions].
    ///
    /// Fails with [PolygonError::InvalidArgument] if there are no edges, an edge length is not a
    /// positive finite number or a turn angle is not finite. Sequences of different lengths are
    /// logged as a warning and kept as given.
    #[inline]
    pub fn new(
        edge_lengths: impl Into<Vec<T>>,
        turn_angles: impl Into<Vec<T>>,
    ) -> PolygonResult<Self> {
        Self::with_options(edge_lengths, turn_angles, PolygonOptions::new())
    }

    /// Same as [Polygon::new] but using the `options` given.
    pub fn with_options(
        edge_lengths: impl Into<Vec<T>>,
        turn_angles: impl Into<Vec<T>>,
        options: PolygonOptions<T>,
    ) -> PolygonResult<Self> {
        let edge_lengths = edge_lengths.into();
        let turn_angles = turn_angles.into();
        validate(&edge_lengths, &turn_angles, &options)?;
        Ok(Polygon {
            edge_lengths,
            turn_angles,
            options,
        })
    }
}

#[cfg(feature = "serde")]
impl<T> TryFrom<PolygonData<T>> for Polygon<T>
where
    T: Real,
{
    type Error = PolygonError;

    fn try_from(data: PolygonData<T>) -> PolygonResult<Self> {
        Self::with_options(data.edge_lengths, data.turn_angles, data.options)
    }
}

/// Checks the inputs shared by every polygon type.
pub(crate) fn validate<T>(
    edge_lengths: &[T],
    turn_angles: &[T],
    options: &PolygonOptions<T>,
) -> PolygonResult<()>
where
    T: Real,
{
    if edge_lengths.is_empty() {
        return Err(PolygonError::invalid("polygon must have at least one edge"));
    }

    if let Some((i, e)) = edge_lengths
        .iter()
        .enumerate()
        .find(|(_, e)| !(e.is_finite() && **e > T::zero()))
    {
        return Err(PolygonError::invalid(format!(
            "edge length {} at index {} is not a positive finite number",
            e, i
        )));
    }

    if let Some((i, a)) = turn_angles.iter().enumerate().find(|(_, a)| !a.is_finite()) {
        return Err(PolygonError::invalid(format!(
            "turn angle {} at index {} is not finite",
            a, i
        )));
    }

    if !(options.closure_eps.is_finite() && options.closure_eps > T::zero()) {
        return Err(PolygonError::invalid(format!(
            "closure epsilon {} must be a positive finite number",
            options.closure_eps
        )));
    }

    if edge_lengths.len() != turn_angles.len() {
        match options.mismatch_policy {
            MismatchPolicy::Warn => log::warn!(
                "constructing polygon from {} edge lengths and {} turn angles",
                edge_lengths.len(),
                turn_angles.len()
            ),
            MismatchPolicy::Reject => {
                return Err(PolygonError::LengthMismatch {
                    edges: edge_lengths.len(),
                    angles: turn_angles.len(),
                })
            }
        }
    }

    Ok(())
}

impl<T> PolygonSource for Polygon<T>
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
}

impl<T> fmt::Display for Polygon<T>
where
    T: Real,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Polygon with {} edges, mean edge length: {}{}",
            self.edge_count(),
            self.mean_edge_length(),
            UNIT
        )
    }
}
