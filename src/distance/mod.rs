//! Distance matrices and the metrics used to fill them.
//!
//! The tour heuristics only read a [`DistanceMatrix`]; [`Metric`] is how the
//! command-line front end builds one from coordinates.

mod matrix;
mod metric;

pub use matrix::DistanceMatrix;
pub use metric::Metric;
