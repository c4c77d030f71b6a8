//! Local search for improving a tour.
//!
//! - [`path_segments`] — Enumerates candidate cut positions for k-opt moves
//! - [`two_opt_improve`] — Best-improvement 2-opt to a local optimum

mod segments;
mod two_opt;

pub use segments::{path_segments, segment_pairs, Segments};
pub use two_opt::{two_opt_delta, two_opt_improve, IMPROVEMENT_EPSILON};
