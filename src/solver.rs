//! Tour assembly: nearest-neighbor construction followed by 2-opt.
//!
//! [`determine_path`] is the entry point most callers want. It owns the one
//! tour of a solve from construction to the final name projection and never
//! touches anything but its two inputs.
//!
//! # Tour length accounting
//!
//! The nearest-neighbor length is an open path (no edge back to the start),
//! while 2-opt deltas are changes to the closed cycle. A 2-opt move whose
//! segment runs to the end of the tour replaces the closing edge itself, so
//! adding deltas to an open length does not give the open length of the
//! resulting tour. The closing edge of the constructed tour is therefore
//! added before optimizing: the running length is the closed length at every
//! step, and the reported total is the final open path plus its closing edge.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::constructive::nearest_neighbor;
use crate::distance::DistanceMatrix;
use crate::local_search::two_opt_improve;
use crate::models::{Location, Tour};

/// The result of a solve: the visiting order and its closed length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourSolution {
    names: Vec<String>,
    order: Vec<usize>,
    total_length: f64,
}

impl TourSolution {
    /// Location names in visiting order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Location indices in visiting order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Length of the closed tour, including the edge back to the start.
    pub fn total_length(&self) -> f64 {
        self.total_length
    }

    /// Number of visited locations.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if nothing was visited.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Sums the closed tour from scratch, independent of the tracked total.
    pub fn recompute_length(&self, distances: &DistanceMatrix) -> f64 {
        Tour::from_order(self.order.clone()).closed_length(distances)
    }
}

/// Finds a short round trip through `locations`.
///
/// `distances` must be a square matrix indexed like `locations`. Nothing
/// about it is validated here; see [`DistanceMatrix::is_symmetric`].
///
/// # Examples
///
/// ```
/// use u_tsp::models::Location;
/// use u_tsp::distance::{DistanceMatrix, Metric};
/// use u_tsp::solver::determine_path;
///
/// let locations = vec![
///     Location::new("a", 0.0, 0.0),
///     Location::new("b", 500.0, 1000.0),
///     Location::new("c", 1000.0, 2000.0),
/// ];
/// let dm = DistanceMatrix::from_locations(&locations, Metric::Manhattan);
///
/// let solution = determine_path(&locations, &dm);
/// assert_eq!(solution.names(), &["a", "b", "c"]);
/// assert_eq!(solution.total_length(), 6000.0);
/// ```
pub fn determine_path(locations: &[Location], distances: &DistanceMatrix) -> TourSolution {
    let n = locations.len();
    let (tour, open_length) = nearest_neighbor(n, distances);
    let closed_length = open_length + tour.closing_edge(distances);

    let (tour, total_length) = two_opt_improve(tour, distances, closed_length);
    debug!(
        "solved {n} locations: nearest neighbor {closed_length}, after 2-opt {total_length}"
    );

    let order = tour.into_order();
    let names = order
        .iter()
        .map(|&idx| locations[idx].name().to_string())
        .collect();

    TourSolution {
        names,
        order,
        total_length,
    }
}
