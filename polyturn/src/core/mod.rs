//! Core module has common/shared math and traits used by the polygon types.
pub mod math;
pub mod traits;
