//! Lazy fixed-size subset enumeration.
//!
//! `Combinations` walks every `k`-element subset of a slice in
//! lexicographic index order, so each subset keeps the relative order of
//! the input. Only the current index vector is held; subsets are built one
//! at a time as the iterator is driven.

use std::iter::FusedIterator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Fresh,
    Running,
    Done,
}

/// Iterator over all `k`-element subsets of a slice.
///
/// Restartable: [`Combinations::restart`] rewinds to the first subset.
#[derive(Debug, Clone)]
pub struct Combinations<'a, T> {
    items: &'a [T],
    indices: Vec<usize>,
    state: State,
}

/// All `k`-element subsets of `items`, in lexicographic index order.
///
/// `k == 0` yields a single empty subset; `k > items.len()` yields nothing.
pub fn combinations<T>(items: &[T], k: usize) -> Combinations<'_, T> {
    Combinations {
        items,
        indices: (0..k).collect(),
        state: State::Fresh,
    }
}

impl<'a, T> Combinations<'a, T> {
    /// Rewind to the first subset.
    pub fn restart(&mut self) {
        for (slot, index) in self.indices.iter_mut().enumerate() {
            *index = slot;
        }
        self.state = State::Fresh;
    }

    /// Step the index vector to the next subset. Returns false when exhausted.
    fn advance(&mut self) -> bool {
        let n = self.items.len();
        let k = self.indices.len();
        // Rightmost slot that can still move right
        let Some(slot) = (0..k).rev().find(|&i| self.indices[i] != i + n - k) else {
            return false;
        };
        self.indices[slot] += 1;
        for next in slot + 1..k {
            self.indices[next] = self.indices[next - 1] + 1;
        }
        true
    }
}

impl<'a, T: Clone> Iterator for Combinations<'a, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        match self.state {
            State::Done => return None,
            State::Fresh => {
                if self.indices.len() > self.items.len() {
                    self.state = State::Done;
                    return None;
                }
                self.state = State::Running;
            }
            State::Running => {
                if !self.advance() {
                    self.state = State::Done;
                    return None;
                }
            }
        }
        Some(self.indices.iter().map(|&i| self.items[i].clone()).collect())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let total = binomial(self.items.len(), self.indices.len());
        match self.state {
            State::Fresh if total == usize::MAX => (usize::MAX, None),
            State::Fresh => (total, Some(total)),
            State::Running => (0, Some(total.saturating_sub(1))),
            State::Done => (0, Some(0)),
        }
    }
}

impl<'a, T: Clone> FusedIterator for Combinations<'a, T> {}

/// Number of `k`-element subsets of an `n`-element set, saturating at `usize::MAX`.
pub fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut acc: u128 = 1;
    for i in 0..k {
        acc = acc * (n - i) as u128 / (i + 1) as u128;
        if acc > usize::MAX as u128 {
            return usize::MAX;
        }
    }
    acc as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairs_in_lexicographic_order() {
        let got: Vec<Vec<char>> = combinations(&['a', 'b', 'c', 'd'], 2).collect();
        assert_eq!(
            got,
            vec![
                vec!['a', 'b'],
                vec!['a', 'c'],
                vec!['a', 'd'],
                vec!['b', 'c'],
                vec!['b', 'd'],
                vec!['c', 'd'],
            ]
        );
    }

    #[test]
    fn test_zero_size_yields_one_empty_subset() {
        let got: Vec<Vec<u8>> = combinations(&[1u8, 2, 3], 0).collect();
        assert_eq!(got, vec![Vec::<u8>::new()]);

        let empty: [u8; 0] = [];
        let got: Vec<Vec<u8>> = combinations(&empty, 0).collect();
        assert_eq!(got.len(), 1);
    }

    #[test]
    fn test_too_few_items_yields_nothing() {
        assert_eq!(combinations(&[1, 2], 3).count(), 0);
    }

    #[test]
    fn test_full_size_yields_input() {
        let got: Vec<Vec<i32>> = combinations(&[3, 1, 2], 3).collect();
        assert_eq!(got, vec![vec![3, 1, 2]]);
    }

    #[test]
    fn test_subsets_preserve_input_order() {
        let input = [9, 4, 7, 1, 5];
        for subset in combinations(&input, 3) {
            let positions: Vec<usize> = subset
                .iter()
                .map(|x| input.iter().position(|y| y == x).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_count_matches_binomial() {
        let items: Vec<u32> = (0..20).collect();
        assert_eq!(combinations(&items, 5).count(), 15504);
        assert_eq!(binomial(20, 5), 15504);
        for n in 0..12 {
            for k in 0..=n + 1 {
                assert_eq!(combinations(&items[..n], k).count(), binomial(n, k));
            }
        }
    }

    #[test]
    fn test_restart_replays_sequence() {
        let items = [1, 2, 3, 4];
        let mut iter = combinations(&items, 2);
        let first: Vec<_> = iter.by_ref().take(4).collect();
        iter.restart();
        assert_eq!(iter.size_hint(), (6, Some(6)));
        let again: Vec<_> = iter.take(4).collect();
        assert_eq!(first, again);
    }

    #[test]
    fn test_size_hint_tracks_progress() {
        let items: Vec<u32> = (0..20).collect();
        let mut iter = combinations(&items, 5);
        assert_eq!(iter.size_hint(), (15504, Some(15504)));
        iter.next();
        assert_eq!(iter.size_hint(), (0, Some(15503)));
        assert_eq!(combinations(&items, 21).size_hint(), (0, Some(0)));

        let mut pair = combinations(&[1, 2], 2);
        pair.next();
        pair.next();
        assert_eq!(pair.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_fused_after_exhaustion() {
        let mut iter = combinations(&[1, 2], 2);
        assert!(iter.next().is_some());
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_binomial_edges() {
        assert_eq!(binomial(5, 0), 1);
        assert_eq!(binomial(5, 5), 1);
        assert_eq!(binomial(3, 4), 0);
        assert_eq!(binomial(97, 5), 64_446_024);
    }
}
