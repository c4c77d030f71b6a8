//! Best-improvement 2-opt on a closed tour.
//!
//! # Algorithm
//!
//! For every candidate cut pair `(i, j)` from [`segment_pairs`], compute the
//! change in length from reversing `t[i+1..=j]`, with the tour read as a
//! cycle (`t[n]` wraps to `t[0]`):
//!
//! ```text
//! delta = d(t[i], t[j]) + d(t[i+1], t[j+1]) - d(t[i], t[i+1]) - d(t[j], t[j+1])
//! ```
//!
//! Scan all pairs, keep the most negative delta (the first one found wins a
//! tie), apply that single reversal and scan again. Stop when no pair
//! improves the tour: it is then a 2-opt local optimum.
//!
//! # Complexity
//!
//! O(n²) per scan. The number of scans has no closed-form bound but is
//! finite, since every applied move strictly shortens the tour.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use log::{debug, trace};

use super::segments::segment_pairs;
use crate::distance::DistanceMatrix;
use crate::models::Tour;

/// Deltas at or above `-IMPROVEMENT_EPSILON` are not worth applying.
///
/// Keeps floating-point noise from producing an endless sequence of
/// zero-gain reversals.
pub const IMPROVEMENT_EPSILON: f64 = 1e-10;

/// Improves a tour with best-improvement 2-opt until no move helps.
///
/// `length` is whatever running length the caller tracks for `tour`; the
/// returned length is `length` plus the sum of the applied deltas. Deltas are
/// closed-cycle changes, so pass the closed length of `tour` to get the
/// closed length of the result back. Tours with fewer than three locations
/// are returned unchanged.
///
/// A move is applied only when its delta is below `-IMPROVEMENT_EPSILON`.
/// Improvements smaller than that are ignored, so on non-integer matrices the
/// result may admit a reversal that would shorten it by less than `1e-10`.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::local_search::two_opt_improve;
/// use u_tsp::models::Tour;
///
/// let dm = DistanceMatrix::from_rows(&[
///     vec![0.0, 10.0, 9.0, 11.0],
///     vec![10.0, 0.0, 2.0, 10.0],
///     vec![9.0, 2.0, 0.0, 5.0],
///     vec![11.0, 10.0, 5.0, 0.0],
/// ])
/// .unwrap();
///
/// let (tour, length) = two_opt_improve(Tour::from_order(vec![0, 2, 1, 3]), &dm, 21.0);
/// assert_eq!(tour.as_slice(), &[0, 1, 2, 3]);
/// assert_eq!(length, 17.0);
/// ```
pub fn two_opt_improve(mut tour: Tour, distances: &DistanceMatrix, length: f64) -> (Tour, f64) {
    let mut length = length;
    let mut moves = 0usize;

    while let Some((i, j, delta)) = best_move(tour.as_slice(), distances) {
        tour.reverse_segment(i, j);
        length += delta;
        moves += 1;
        trace!("2-opt move {moves}: reversed ({i}, {j}], delta {delta}, length {length}");
    }

    debug!(
        "2-opt converged after {moves} moves on {} locations, length {length}",
        tour.len()
    );
    (tour, length)
}

/// Finds the most improving cut pair, or `None` at a local optimum.
fn best_move(tour: &[usize], distances: &DistanceMatrix) -> Option<(usize, usize, f64)> {
    if tour.len() < 3 {
        return None;
    }

    let mut best: Option<(usize, usize, f64)> = None;
    for (i, j) in segment_pairs(0, tour.len() - 1) {
        let delta = two_opt_delta(tour, distances, i, j);
        let best_delta = best.map_or(-IMPROVEMENT_EPSILON, |(_, _, d)| d);
        if delta < best_delta {
            best = Some((i, j, delta));
        }
    }
    best
}

/// Computes the length change from reversing `tour[i+1..=j]`, clamped to
/// zero from above.
///
/// The tour is read as a closed cycle, so the edge leaving `tour[j]` goes to
/// `tour[(j + 1) % n]`. A move that would lengthen the tour returns `0.0`;
/// an improving move returns its (negative) gain.
///
/// Requires `i < j < tour.len()`.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::local_search::two_opt_delta;
///
/// let dm = DistanceMatrix::from_rows(&[
///     vec![0.0, 10.0, 9.0, 11.0],
///     vec![10.0, 0.0, 2.0, 10.0],
///     vec![9.0, 2.0, 0.0, 5.0],
///     vec![11.0, 10.0, 5.0, 0.0],
/// ])
/// .unwrap();
///
/// assert_eq!(two_opt_delta(&[0, 2, 1, 3], &dm, 0, 2), -4.0);
/// assert_eq!(two_opt_delta(&[0, 2, 1, 3], &dm, 1, 3), 0.0);
/// ```
pub fn two_opt_delta(tour: &[usize], distances: &DistanceMatrix, i: usize, j: usize) -> f64 {
    let n = tour.len();
    let a = tour[i];
    let b = tour[i + 1];
    let c = tour[j];
    let d = tour[(j + 1) % n];

    let removed = distances.get(a, b) + distances.get(c, d);
    let added = distances.get(a, c) + distances.get(b, d);

    (added - removed).min(0.0)
}
