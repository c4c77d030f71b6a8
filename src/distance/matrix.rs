//! Dense distance matrix.

use super::Metric;
use crate::models::Location;

/// A dense n×n distance matrix stored in row-major order.
///
/// The tour heuristics treat it as opaque, read-only data: they never check
/// symmetry or non-negativity. Use [`DistanceMatrix::is_symmetric`] at the
/// boundary where the matrix is built if that matters.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Location;
/// use u_tsp::distance::{DistanceMatrix, Metric};
///
/// let locations = vec![
///     Location::new("a", 0.0, 0.0),
///     Location::new("b", 3.0, 4.0),
///     Location::new("c", 6.0, 8.0),
/// ];
/// let dm = DistanceMatrix::from_locations(&locations, Metric::Euclidean);
/// assert_eq!(dm.get(0, 1), 5.0);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes a symmetric distance matrix from location coordinates.
    pub fn from_locations(locations: &[Location], metric: Metric) -> Self {
        let n = locations.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = metric.distance(&locations[i], &locations[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Creates a distance matrix from a flat row-major n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Creates a distance matrix from nested rows.
    ///
    /// Returns `None` if the rows do not form a square.
    pub fn from_rows(rows: &[Vec<f64>]) -> Option<Self> {
        let size = rows.len();
        if rows.iter().any(|row| row.len() != size) {
            return None;
        }
        Self::from_data(size, rows.concat())
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[self.offset(from, to)]
    }

    /// Sets the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        let offset = self.offset(from, to);
        self.data[offset] = distance;
    }

    /// Row-major offset of `(from, to)`; a column past the last one would
    /// otherwise alias into the next row.
    fn offset(&self, from: usize, to: usize) -> usize {
        assert!(
            from < self.size && to < self.size,
            "index ({from}, {to}) out of bounds for {n}x{n} distance matrix",
            n = self.size
        );
        from * self.size + to
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Returns the nearest of `candidates` to `from`.
    ///
    /// Ties go to the candidate yielded first, so ascending candidates give
    /// the smallest index among equally near ones. Returns `None` if
    /// `candidates` is empty.
    pub fn nearest_neighbor<I>(&self, from: usize, candidates: I) -> Option<usize>
    where
        I: IntoIterator<Item = usize>,
    {
        candidates
            .into_iter()
            .min_by(|&a, &b| self.get(from, a).total_cmp(&self.get(from, b)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_locations() -> Vec<Location> {
        vec![
            Location::new("a", 0.0, 0.0),
            Location::new("b", 3.0, 4.0),
            Location::new("c", 0.0, 8.0),
        ]
    }

    #[test]
    fn test_from_locations() {
        let dm = DistanceMatrix::from_locations(&sample_locations(), Metric::Euclidean);
        assert_eq!(dm.size(), 3);
        assert_eq!(dm.get(0, 1), 5.0);
        assert_eq!(dm.get(0, 2), 8.0);
        assert_eq!(dm.get(0, 0), 0.0);
    }

    #[test]
    fn test_symmetric() {
        let dm = DistanceMatrix::from_locations(&sample_locations(), Metric::Manhattan);
        assert!(dm.is_symmetric(1e-10));
    }

    #[test]
    fn test_from_data() {
        let dm = DistanceMatrix::from_data(2, vec![0.0, 5.0, 5.0, 0.0]).expect("valid");
        assert_eq!(dm.get(0, 1), 5.0);
        assert_eq!(dm.get(1, 0), 5.0);
    }

    #[test]
    fn test_from_data_invalid_size() {
        assert!(DistanceMatrix::from_data(2, vec![0.0, 1.0, 2.0]).is_none());
    }

    #[test]
    fn test_from_rows() {
        let dm = DistanceMatrix::from_rows(&[vec![0.0, 7.0], vec![7.0, 0.0]]).expect("square");
        assert_eq!(dm.size(), 2);
        assert_eq!(dm.get(1, 0), 7.0);
        assert!(DistanceMatrix::from_rows(&[vec![0.0, 7.0], vec![7.0]]).is_none());
        assert_eq!(DistanceMatrix::from_rows(&[]).map(|dm| dm.size()), Some(0));
    }

    #[test]
    fn test_set_get() {
        let mut dm = DistanceMatrix::new(3);
        dm.set(0, 1, 42.0);
        assert_eq!(dm.get(0, 1), 42.0);
        assert_eq!(dm.get(1, 0), 0.0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_get_rejects_column_past_end() {
        let mut dm = DistanceMatrix::new(2);
        dm.set(1, 0, 7.0);
        // (0, 2) lands on the same flat slot as (1, 0).
        let _ = dm.get(0, 2);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_set_rejects_row_past_end() {
        let mut dm = DistanceMatrix::new(2);
        dm.set(2, 0, 1.0);
    }

    #[test]
    fn test_nearest_neighbor() {
        let dm = DistanceMatrix::from_locations(&sample_locations(), Metric::Euclidean);
        assert_eq!(dm.nearest_neighbor(0, [1, 2]), Some(1));
        assert_eq!(dm.nearest_neighbor(0, [2]), Some(2));
        assert_eq!(dm.nearest_neighbor(0, []), None);
    }

    #[test]
    fn test_nearest_neighbor_tie_takes_first() {
        let dm = DistanceMatrix::from_rows(&[
            vec![0.0, 4.0, 4.0],
            vec![4.0, 0.0, 1.0],
            vec![4.0, 1.0, 0.0],
        ])
        .expect("square");
        assert_eq!(dm.nearest_neighbor(0, [1, 2]), Some(1));
        assert_eq!(dm.nearest_neighbor(0, [2, 1]), Some(2));
    }

    #[test]
    fn test_asymmetric_matrix() {
        let mut dm = DistanceMatrix::new(2);
        dm.set(0, 1, 10.0);
        dm.set(1, 0, 15.0);
        assert!(!dm.is_symmetric(1e-10));
    }
}
