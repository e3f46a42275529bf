// Copyright (c) 2024 Botho Foundation

//! Interpolation search over a sorted array of hex-uniform txids.
//!
//! Txids are SHA-256 outputs, so their leading hex digits are close to
//! uniform on `[0, 1)`. That lets an interpolation guess -- "this target's
//! high digits are `X`% of the way through hex-space, so it should sit `X`%
//! of the way through the sorted array" -- converge in a handful of steps
//! instead of `log2(n)` binary-search steps. The guess can still oscillate
//! between two indices without converging; when that happens this module
//! collapses to a bounded linear sweep from the midpoint of the last two
//! guesses.

use crate::txid::{Txid, TXID_HEX_LEN};
use std::collections::HashSet;

/// Outcome of a single [`find`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindOutcome {
    /// `sorted[index]` starts with the searched-for target.
    Found(usize),
    /// No entry in `sorted` starts with the target.
    NotPresent,
}

/// A [`find`] outcome plus whether it required an oscillation sweep, so
/// callers can fold that into their own diagnostics without this module
/// reaching into [`crate::stats`] itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FindResult {
    pub outcome: FindOutcome,
    pub oscillated: bool,
}

/// Find the index of the (unique, by construction of a sorted prefix-free
/// array) entry in `sorted` that starts with `target`.
///
/// `start_length` is normally [`crate::sizing::start_length`] applied to
/// `sorted.len()`, widened internally by up to 3 extra hex digits for the
/// interpolation key. `oscillation_probe_cap` bounds the fallback linear
/// sweep (see [`crate::config::CodecConfig::oscillation_probe_cap`]).
pub fn find(
    sorted: &[Txid],
    target: &str,
    start_length: usize,
    oscillation_probe_cap: usize,
) -> FindResult {
    let length = sorted.len();
    if length == 0 || target.is_empty() {
        return FindResult {
            outcome: FindOutcome::NotPresent,
            oscillated: false,
        };
    }

    let w = (start_length + 3).min(target.len()).min(TXID_HEX_LEN);
    let denom = 16u128.pow(w as u32);
    let t_val = parse_hex_window(target, w);

    let mut g: i64 = ((t_val as f64 / denom as f64) * length as f64).round() as i64;
    g = g.clamp(0, length as i64 - 1);

    let outer_cap = (length as f64).log2().ceil() as usize + 64;

    let mut visited: HashSet<i64> = HashSet::new();
    let mut prev_g: i64 = g;
    let mut steps = 0usize;

    loop {
        if g + 1 >= length as i64 {
            g = length as i64 - 1;
        }

        if visited.contains(&g) || steps >= outer_cap {
            let avg = (prev_g + g) / 2;
            let outcome = oscillation_sweep(sorted, target, avg, oscillation_probe_cap);
            return FindResult {
                outcome,
                oscillated: true,
            };
        }
        visited.insert(g);
        steps += 1;

        let candidate = &sorted[g as usize];
        if candidate.hex_prefix(target.len()) == target {
            return FindResult {
                outcome: FindOutcome::Found(g as usize),
                oscillated: false,
            };
        }

        let f_val = parse_hex_window(candidate.as_hex(), w);
        let off_by = f_val as i128 - t_val as i128;
        let off_by_pct = off_by as f64 / denom as f64;
        let adjust_by = if off_by < 0 {
            (off_by_pct * length as f64).floor() as i64
        } else {
            (off_by_pct * length as f64).ceil() as i64
        };

        prev_g = g;
        g -= adjust_by;
        g = g.clamp(0, length as i64);
    }
}

/// Bidirectional linear sweep outward from `center`, offsets `0, +1, -1, +2,
/// -2, ...`, stopping after `probe_cap` offsets with no match.
fn oscillation_sweep(sorted: &[Txid], target: &str, center: i64, probe_cap: usize) -> FindOutcome {
    let length = sorted.len() as i64;
    let mut j: i64 = 0;
    loop {
        let forward = center + j;
        if forward >= 0 && forward < length && sorted[forward as usize].hex_prefix(target.len()) == target {
            return FindOutcome::Found(forward as usize);
        }
        let backward = center - j;
        if backward > 0 && backward < length && sorted[backward as usize].hex_prefix(target.len()) == target {
            return FindOutcome::Found(backward as usize);
        }
        j += 1;
        if j as usize > probe_cap {
            return FindOutcome::NotPresent;
        }
    }
}

/// Parse the leading `w` hex digits of `s` as an integer, padding a short `s`
/// with trailing `f` digits (never observed for fixed-width [`Txid`]
/// entries, but part of the documented contract for variable-length inputs).
fn parse_hex_window(s: &str, w: usize) -> u128 {
    let available = s.len().min(w);
    if available == w {
        u128::from_str_radix(&s[..w], 16).expect("hex digits only")
    } else {
        let mut padded = String::with_capacity(w);
        padded.push_str(&s[..available]);
        for _ in available..w {
            padded.push('f');
        }
        u128::from_str_radix(&padded, 16).expect("hex digits only")
    }
}
