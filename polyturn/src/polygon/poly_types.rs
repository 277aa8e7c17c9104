use crate::core::{math::Vector2, traits::Real};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Unit suffix used when describing polygons.
pub const UNIT: &str = "cm";

/// How polygon construction treats edge length and turn angle sequences of different lengths.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum MismatchPolicy {
    /// Log a warning and construct the polygon as given. Traversals that need a missing turn
    /// angle fail with [PolygonError::IndexOutOfRange](crate::PolygonError::IndexOutOfRange).
    #[default]
    Warn,
    /// Fail construction with [PolygonError::LengthMismatch](crate::PolygonError::LengthMismatch).
    Reject,
}

/// Struct to hold options parameters used when constructing polygons.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PolygonOptions<T = f64> {
    /// Absolute per axis tolerance used to decide if the traversed path ends at the origin.
    pub closure_eps: T,
    /// Handling of edge length and turn angle sequences of different lengths.
    pub mismatch_policy: MismatchPolicy,
}

impl<T> PolygonOptions<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            closure_eps: T::closure_eps(),
            mismatch_policy: MismatchPolicy::Warn,
        }
    }
}

impl<T> Default for PolygonOptions<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Serialized fields shared by the polygon types. Deserialized polygons are rebuilt from it by
/// their constructors, so invalid data fails to deserialize instead of producing a polygon that
/// breaks the construction checks.
#[cfg(feature = "serde")]
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolygonData<T = f64> {
    pub edge_lengths: Vec<T>,
    pub turn_angles: Vec<T>,
    pub options: PolygonOptions<T>,
}

/// Result from calling [PolygonSource::diameter](super::PolygonSource::diameter): the farthest
/// pair of vertexes (indexes into the traversed vertex list) and their distance.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Diameter<T = f64> {
    pub start_index: usize,
    pub end_index: usize,
    pub length: T,
}

impl<T> Diameter<T>
where
    T: Real,
{
    #[inline]
    pub fn new(start_index: usize, end_index: usize, length: T) -> Self {
        Self {
            start_index,
            end_index,
            length,
        }
    }
}

/// Circle given by center and radius.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Circle<T = f64> {
    pub center: Vector2<T>,
    pub radius: T,
}

impl<T> Circle<T>
where
    T: Real,
{
    #[inline]
    pub fn new(center: Vector2<T>, radius: T) -> Self {
        Self { center, radius }
    }

    /// Bottom-most point of the circle (where a turtle starts tracing it with heading 0).
    #[inline]
    pub fn bottom(&self) -> Vector2<T> {
        Vector2::new(self.center.x, self.center.y - self.radius)
    }

    /// Fuzzy equal comparison with another circle using `fuzzy_epsilon` given.
    pub fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: T) -> bool {
        self.center.fuzzy_eq_eps(other.center, fuzzy_epsilon)
            && self.radius.fuzzy_eq_eps(other.radius, fuzzy_epsilon)
    }

    /// Fuzzy equal comparison with another circle using T::fuzzy_epsilon().
    pub fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }
}
