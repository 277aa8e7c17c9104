//! Error types for polygon construction and traversal.

use thiserror::Error;

/// Errors that can occur when constructing or traversing a polygon.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolygonError {
    /// Input values can not describe a polygon (no edges, non-positive edge length, etc.).
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// Human readable description of the rejected input.
        reason: String,
    },

    /// Edge length and turn angle sequences differ in length and the options reject that.
    #[error("edge lengths ({edges}) and turn angles ({angles}) differ in length")]
    LengthMismatch {
        /// Number of edge lengths given.
        edges: usize,
        /// Number of turn angles given.
        angles: usize,
    },

    /// Traversal needed a turn angle that does not exist.
    #[error("index {index} out of range for {len} turn angles")]
    IndexOutOfRange {
        /// Index that was requested.
        index: usize,
        /// Number of turn angles available.
        len: usize,
    },
}

impl PolygonError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        PolygonError::InvalidArgument {
            reason: reason.into(),
        }
    }
}

pub type PolygonResult<T> = Result<T, PolygonError>;
