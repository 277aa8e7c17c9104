//! Internal algorithms shared by the polygon types. Made public through
//! [crate::internal] for benchmarking and testing purposes.
pub mod diameter;
pub mod traversal;
