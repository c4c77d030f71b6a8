//! Nearest-neighbor constructive heuristic.
//!
//! Builds a tour greedily: starting from location 0, always move to the
//! nearest location not yet visited. Among equally near locations the one
//! with the smallest index is taken.
//!
//! # Complexity
//!
//! O(n²) where n = number of locations.
//!
//! # Reference
//!
//! This is the simplest constructive heuristic for the TSP. Tours are
//! typically around 25% above optimal, which makes it a cheap starting point
//! for 2-opt.

use log::{debug, error};

use crate::distance::DistanceMatrix;
use crate::models::Tour;

/// Constructs a tour over `0..n` with the nearest-neighbor heuristic.
///
/// Returns the tour and its open-path length: the sum of the `n - 1` edges
/// walked, without the edge from the last location back to location 0.
///
/// Running out of unvisited candidates before all `n` are placed cannot
/// happen for `n <= distances.size()`. Should it happen anyway, the partial
/// tour is returned and an error is logged; debug builds panic instead.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::constructive::nearest_neighbor;
///
/// let dm = DistanceMatrix::from_rows(&[
///     vec![0.0, 10.0, 9.0, 11.0],
///     vec![10.0, 0.0, 2.0, 10.0],
///     vec![9.0, 2.0, 0.0, 5.0],
///     vec![11.0, 10.0, 5.0, 0.0],
/// ])
/// .unwrap();
///
/// let (tour, length) = nearest_neighbor(4, &dm);
/// assert_eq!(tour.as_slice(), &[0, 2, 1, 3]);
/// assert_eq!(length, 21.0);
/// ```
pub fn nearest_neighbor(n: usize, distances: &DistanceMatrix) -> (Tour, f64) {
    if n == 0 {
        return (Tour::new(), 0.0);
    }

    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n);
    let mut total_distance = 0.0;

    visited[0] = true;
    order.push(0);
    let mut current = 0;

    while order.len() < n {
        let unvisited = (0..n).filter(|&i| !visited[i]);
        match distances.nearest_neighbor(current, unvisited) {
            Some(next) => {
                visited[next] = true;
                order.push(next);
                total_distance += distances.get(current, next);
                current = next;
            }
            None => {
                error!(
                    "nearest neighbor ran out of candidates after {} of {n} locations",
                    order.len()
                );
                debug_assert_eq!(order.len(), n, "tour ended before visiting every location");
                break;
            }
        }
    }

    debug!("nearest neighbor tour over {n} locations, open length {total_distance}");
    (Tour::from_order(order), total_distance)
}
