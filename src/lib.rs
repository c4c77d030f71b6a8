//! # u-tsp
//!
//! Traveling-salesperson heuristics: a greedy nearest-neighbor tour refined
//! by best-improvement 2-opt until no single segment reversal shortens it.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Location, Tour)
//! - [`distance`] — Distance matrix and metrics
//! - [`constructive`] — Nearest-neighbor tour construction
//! - [`local_search`] — Segment enumeration and 2-opt improvement
//! - [`solver`] — Construction + improvement, mapped back to location names
//! - [`etl`] — Loading and scaling location files

pub mod constructive;
pub mod distance;
mod error;
pub mod etl;
pub mod local_search;
pub mod models;
pub mod solver;

pub use error::{Error, Result};
