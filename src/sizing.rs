// Copyright (c) 2024 Botho Foundation

//! Derives the interpolation search's initial hex-digit window from a set size.

/// The smallest `k` such that `16^k >= n.max(1)`.
///
/// An empty or singleton mempool has nothing to interpolate against, so `k`
/// bottoms out at 1: the finder still works, it just starts with the widest
/// possible window.
pub fn start_length(n: usize) -> usize {
    let mut k = 1usize;
    let mut capacity: u128 = 16;
    let n = n.max(1) as u128;
    while capacity < n {
        capacity = capacity.saturating_mul(16);
        k += 1;
    }
    k
}
