//! Candidate segment enumeration for k-opt moves.
//!
//! A k-opt move is described by k cut positions `(i_1, ..., i_k)` into the
//! tour. Consecutive cuts must be at least two positions apart so every
//! reversed segment has at least two nodes; the first `k-1` cuts range over
//! `[start, end)` while the last one may also sit on `end` itself.
//!
//! ```text
//! path_segments(0, 3, 2) -> (0,2) (0,3) (1,3)
//! path_segments(0, 5, 3) -> (0,2,4) (0,2,5) (0,3,5) (1,3,5)
//! ```
//!
//! Tuples come out in lexicographic order. The 2-opt optimizer relies on
//! this order to break ties between equally good moves.

/// Returns an iterator over all k-tuples of cut positions in `[start, end]`.
///
/// Each call returns a fresh iterator, so the same arguments always replay
/// the same sequence.
///
/// # Examples
///
/// ```
/// use u_tsp::local_search::path_segments;
///
/// let segments: Vec<Vec<usize>> = path_segments(0, 3, 2).collect();
/// assert_eq!(segments, vec![vec![0, 2], vec![0, 3], vec![1, 3]]);
/// ```
pub fn path_segments(start: usize, end: usize, k: usize) -> Segments {
    Segments {
        start,
        end,
        k,
        stack: Vec::with_capacity(k),
        exhausted: k == 0,
    }
}

/// Returns an iterator over the `(i, j)` cut pairs used by 2-opt.
///
/// Yields every `(i, j)` with `start <= i < end` and `i + 2 <= j <= end`.
///
/// # Examples
///
/// ```
/// use u_tsp::local_search::segment_pairs;
///
/// let pairs: Vec<(usize, usize)> = segment_pairs(0, 3).collect();
/// assert_eq!(pairs, vec![(0, 2), (0, 3), (1, 3)]);
/// ```
pub fn segment_pairs(start: usize, end: usize) -> impl Iterator<Item = (usize, usize)> {
    path_segments(start, end, 2).map(|segment| (segment[0], segment[1]))
}

/// Iterator over k-tuples of cut positions, in lexicographic order.
///
/// Keeps the partially built tuple on an explicit stack and advances it like
/// an odometer: bump the deepest position, and when it runs past its bound,
/// pop it and bump the one above.
#[derive(Debug, Clone)]
pub struct Segments {
    start: usize,
    end: usize,
    k: usize,
    stack: Vec<usize>,
    exhausted: bool,
}

impl Segments {
    /// Exclusive upper bound for the cut at `level`.
    fn bound(&self, level: usize) -> usize {
        if self.k >= 2 && level == self.k - 1 {
            self.end.saturating_add(1)
        } else {
            self.end
        }
    }
}

impl Iterator for Segments {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        match self.stack.last_mut() {
            Some(last) => *last += 1,
            None => self.stack.push(self.start),
        }

        loop {
            let level = self.stack.len() - 1;
            if self.stack[level] >= self.bound(level) {
                self.stack.pop();
                match self.stack.last_mut() {
                    Some(parent) => {
                        *parent += 1;
                        continue;
                    }
                    None => {
                        self.exhausted = true;
                        return None;
                    }
                }
            }

            if self.stack.len() == self.k {
                return Some(self.stack.clone());
            }
            let floor = self.stack[level].saturating_add(2);
            self.stack.push(floor);
        }
    }
}

impl std::iter::FusedIterator for Segments {}

#[cfg(test)]
mod tests {
    use super::*;

    /// Straightforward nested-loop reference for k = 2.
    fn brute_force_pairs(start: usize, end: usize) -> Vec<(usize, usize)> {
        let mut pairs = Vec::new();
        for i in start..end {
            for j in (i + 2)..=end {
                pairs.push((i, j));
            }
        }
        pairs
    }

    #[test]
    fn test_pairs_small() {
        let pairs: Vec<_> = segment_pairs(0, 3).collect();
        assert_eq!(pairs, vec![(0, 2), (0, 3), (1, 3)]);
    }

    #[test]
    fn test_pairs_match_nested_loops() {
        for end in 0..12 {
            for start in 0..=end {
                let pairs: Vec<_> = segment_pairs(start, end).collect();
                assert_eq!(pairs, brute_force_pairs(start, end), "start={start} end={end}");
            }
        }
    }

    #[test]
    fn test_triples() {
        let triples: Vec<_> = path_segments(0, 5, 3).collect();
        assert_eq!(
            triples,
            vec![vec![0, 2, 4], vec![0, 2, 5], vec![0, 3, 5], vec![1, 3, 5]]
        );
    }

    #[test]
    fn test_single_cut_excludes_end() {
        let singles: Vec<_> = path_segments(1, 4, 1).collect();
        assert_eq!(singles, vec![vec![1], vec![2], vec![3]]);
    }

    #[test]
    fn test_degenerate_ranges() {
        assert_eq!(path_segments(0, 3, 0).count(), 0);
        assert_eq!(segment_pairs(0, 1).count(), 0);
        assert_eq!(segment_pairs(0, 2).collect::<Vec<_>>(), vec![(0, 2)]);
        assert_eq!(segment_pairs(5, 3).count(), 0);
    }

    #[test]
    fn test_restartable() {
        let first: Vec<_> = path_segments(0, 7, 2).collect();
        let second: Vec<_> = path_segments(0, 7, 2).collect();
        assert_eq!(first, second);

        let mut iter = path_segments(0, 7, 3);
        iter.next();
        let snapshot = iter.clone();
        assert_eq!(iter.collect::<Vec<_>>(), snapshot.collect::<Vec<_>>());
    }

    #[test]
    fn test_fused_after_exhaustion() {
        let mut iter = path_segments(0, 2, 2);
        assert_eq!(iter.next(), Some(vec![0, 2]));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_cuts_are_spaced_and_increasing() {
        for segment in path_segments(0, 9, 4) {
            assert_eq!(segment.len(), 4);
            for w in segment.windows(2) {
                assert!(w[1] >= w[0] + 2, "{segment:?}");
            }
            assert!(segment[..3].iter().all(|&c| c < 9));
            assert!(segment[3] <= 9);
        }
    }
}
