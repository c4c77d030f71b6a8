//! Domain model types for tour construction.
//!
//! Locations are the named points to visit; a tour is an ordering of their
//! indices read as a closed cycle.

mod location;
mod tour;

pub use location::Location;
pub use tour::Tour;
