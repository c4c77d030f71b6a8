//! Tour type: an ordered visiting sequence of location indices.

use crate::distance::DistanceMatrix;

/// An ordered, duplicate-free sequence of location indices, read as a closed
/// cycle (the last index connects back to the first).
///
/// [`Tour::reverse_segment`] is the only way to rearrange a tour once it is
/// built. Everything that only inspects a tour works on
/// [`Tour::as_slice`].
///
/// # Examples
///
/// ```
/// use u_tsp::models::Tour;
///
/// let mut tour = Tour::from_order(vec![0, 2, 1, 3]);
/// tour.reverse_segment(0, 2);
/// assert_eq!(tour.as_slice(), &[0, 1, 2, 3]);
/// assert!(tour.is_permutation_of(4));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tour {
    order: Vec<usize>,
}

impl Tour {
    /// Creates an empty tour.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing visiting order.
    pub fn from_order(order: Vec<usize>) -> Self {
        Self { order }
    }

    /// The visiting order.
    pub fn as_slice(&self) -> &[usize] {
        &self.order
    }

    /// Consumes the tour and returns the visiting order.
    pub fn into_order(self) -> Vec<usize> {
        self.order
    }

    /// Number of visited locations.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the tour visits nothing.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// First visited index.
    pub fn first(&self) -> Option<usize> {
        self.order.first().copied()
    }

    /// Last visited index.
    pub fn last(&self) -> Option<usize> {
        self.order.last().copied()
    }

    /// Reverses positions `i+1..=j` in place.
    ///
    /// This swaps the edges `(t[i], t[i+1])` and `(t[j], t[j+1])` for
    /// `(t[i], t[j])` and `(t[i+1], t[j+1])`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= j` or `j` is out of bounds.
    pub fn reverse_segment(&mut self, i: usize, j: usize) {
        assert!(i < j, "segment start {i} must precede end {j}");
        self.order[i + 1..=j].reverse();
    }

    /// Sum of consecutive edges, without the edge back to the start.
    pub fn open_length(&self, distances: &DistanceMatrix) -> f64 {
        self.order
            .windows(2)
            .map(|w| distances.get(w[0], w[1]))
            .sum()
    }

    /// Distance of the edge from the last index back to the first.
    pub fn closing_edge(&self, distances: &DistanceMatrix) -> f64 {
        match (self.first(), self.last()) {
            (Some(first), Some(last)) => distances.get(last, first),
            _ => 0.0,
        }
    }

    /// Total length of the closed cycle.
    pub fn closed_length(&self, distances: &DistanceMatrix) -> f64 {
        self.open_length(distances) + self.closing_edge(distances)
    }

    /// Returns `true` if every index in `0..n` appears exactly once.
    pub fn is_permutation_of(&self, n: usize) -> bool {
        if self.order.len() != n {
            return false;
        }
        let mut seen = vec![false; n];
        for &idx in &self.order {
            if idx >= n || seen[idx] {
                return false;
            }
            seen[idx] = true;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pyramid() -> DistanceMatrix {
        DistanceMatrix::from_rows(&[
            vec![0.0, 10.0, 9.0, 11.0],
            vec![10.0, 0.0, 2.0, 10.0],
            vec![9.0, 2.0, 0.0, 5.0],
            vec![11.0, 10.0, 5.0, 0.0],
        ])
        .expect("square")
    }

    #[test]
    fn test_lengths() {
        let dm = pyramid();
        let tour = Tour::from_order(vec![0, 2, 1, 3]);
        assert_eq!(tour.open_length(&dm), 21.0);
        assert_eq!(tour.closing_edge(&dm), 11.0);
        assert_eq!(tour.closed_length(&dm), 32.0);
    }

    #[test]
    fn test_empty_and_single() {
        let dm = pyramid();
        let empty = Tour::new();
        assert!(empty.is_empty());
        assert_eq!(empty.closed_length(&dm), 0.0);

        let single = Tour::from_order(vec![2]);
        assert_eq!(single.open_length(&dm), 0.0);
        assert_eq!(single.closed_length(&dm), 0.0);
    }

    #[test]
    fn test_reverse_segment_to_end() {
        let mut tour = Tour::from_order(vec![0, 1, 2, 3, 4]);
        tour.reverse_segment(1, 4);
        assert_eq!(tour.as_slice(), &[0, 1, 4, 3, 2]);
    }

    #[test]
    #[should_panic]
    fn test_reverse_segment_rejects_inverted_bounds() {
        let mut tour = Tour::from_order(vec![0, 1, 2]);
        tour.reverse_segment(2, 1);
    }

    #[test]
    fn test_is_permutation_of() {
        assert!(Tour::from_order(vec![2, 0, 1]).is_permutation_of(3));
        assert!(!Tour::from_order(vec![0, 0, 1]).is_permutation_of(3));
        assert!(!Tour::from_order(vec![0, 1]).is_permutation_of(3));
        assert!(!Tour::from_order(vec![0, 1, 3]).is_permutation_of(3));
        assert!(Tour::new().is_permutation_of(0));
    }
}
