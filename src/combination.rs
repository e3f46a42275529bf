// Copyright (c) 2024 Botho Foundation

//! Deterministic mixed-radix enumeration over per-position candidate lists.
//!
//! The decoder only has the commitment hash to pick between ambiguous
//! candidates. It tries every combination in a fixed order until one
//! reconstructs the committed hash, so two implementations enumerating the
//! same candidate lists must try combinations in the same order, or they
//! could accept different (both hash-consistent, but likely only one of
//! which is right) reconstructions. This module defines that order.

/// Enumerates the cartesian product of `candidates` in mixed-radix order.
///
/// Index `0` selects the first candidate at every position; incrementing the
/// index rolls the first list fastest, matching
/// `(C_1[i % |C_1|], C_2[(i / |C_1|) % |C_2|], ...)`.
pub struct CombinationEnumerator<'a, T> {
    candidates: &'a [Vec<T>],
    total: u64,
}

impl<'a, T> CombinationEnumerator<'a, T> {
    /// Build an enumerator over `candidates`. Any empty candidate list makes
    /// the total zero (there is nothing to enumerate without a choice at
    /// every position); callers resolving a decode should never hand this an
    /// empty list for a position they're calling ambiguous.
    pub fn new(candidates: &'a [Vec<T>]) -> Self {
        let total = candidates
            .iter()
            .map(|c| c.len() as u64)
            .fold(1u64, |acc, n| acc.saturating_mul(n));
        Self { candidates, total }
    }

    /// The total number of distinct combinations, i.e. `Π |C_k|`.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// The combination at index `i`, or `None` once `i >= total()`.
    pub fn nth(&self, i: u64) -> Option<Vec<&'a T>> {
        if i >= self.total {
            return None;
        }
        let mut remaining = i;
        let mut picked = Vec::with_capacity(self.candidates.len());
        for list in self.candidates {
            let radix = list.len() as u64;
            let choice = (remaining % radix) as usize;
            remaining /= radix;
            picked.push(&list[choice]);
        }
        Some(picked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enumerates_full_cartesian_product_exactly_once() {
        let candidates = vec![vec![1, 2], vec![10, 20, 30]];
        let enumerator = CombinationEnumerator::new(&candidates);
        assert_eq!(enumerator.total(), 6);

        let mut seen = std::collections::HashSet::new();
        for i in 0..enumerator.total() {
            let combo: Vec<i32> = enumerator.nth(i).unwrap().into_iter().copied().collect();
            assert!(seen.insert(combo));
        }
        assert_eq!(seen.len(), 6);
        assert!(enumerator.nth(6).is_none());
    }

    #[test]
    fn mixed_radix_order_rolls_first_list_fastest() {
        let candidates = vec![vec!['a', 'b'], vec!['x', 'y']];
        let enumerator = CombinationEnumerator::new(&candidates);
        assert_eq!(enumerator.nth(0).unwrap(), vec![&'a', &'x']);
        assert_eq!(enumerator.nth(1).unwrap(), vec![&'b', &'x']);
        assert_eq!(enumerator.nth(2).unwrap(), vec![&'a', &'y']);
        assert_eq!(enumerator.nth(3).unwrap(), vec![&'b', &'y']);
    }

    #[test]
    fn single_position_is_just_that_positions_candidates() {
        let candidates = vec![vec![1, 2, 3]];
        let enumerator = CombinationEnumerator::new(&candidates);
        assert_eq!(enumerator.total(), 3);
        assert_eq!(enumerator.nth(2).unwrap(), vec![&3]);
    }
}
