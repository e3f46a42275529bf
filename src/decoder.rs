// Copyright (c) 2024 Botho Foundation

//! Commitment-gated decoder: the receiver side of the codec.

use crate::combination::CombinationEnumerator;
use crate::config::CodecConfig;
use crate::digest::commit;
use crate::error::CodecError;
use crate::finder::{self, FindOutcome};
use crate::stats::DecodeStats;
use crate::txid::Txid;
use crate::Commitment;
use rayon::prelude::*;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Decode `prefixes` (as produced by [`crate::encode`] against the sender's
/// mempool) against `local_mempool`, the receiver's own, possibly-divergent
/// view.
///
/// Each prefix resolves against zero, one, or many contiguous entries in the
/// receiver's sorted mempool. Any position with zero candidates fails the
/// whole decode with [`CodecError::MissingTransactions`] -- the receiver is
/// genuinely missing a transaction the sender has, and no amount of
/// commitment-hash guessing recovers it. Positions with more than one
/// candidate are resolved by trying combinations (in [`CombinationEnumerator`]
/// order) against `commitment`, bounded by `config.ambiguity_budget`.
///
/// `deadline`, if given, is checked between combination attempts and fails
/// the decode with [`CodecError::Deadline`] once passed, so a caller on a
/// tight latency budget isn't stuck behind a large but still-budget-legal
/// ambiguity resolution.
pub fn decode(
    local_mempool: &[Txid],
    prefixes: &[String],
    commitment: Commitment,
    config: &CodecConfig,
    deadline: Option<Instant>,
) -> Result<(Vec<Txid>, DecodeStats), CodecError> {
    let mut sorted = local_mempool.to_vec();
    sorted.sort();
    // Per-position resolution uses a fixed start length rather than one
    // derived from `|S'|`: the receiver's set size is not necessarily close
    // to the sender's, so the sender's `start_length` assumption wouldn't
    // transfer; 5 hex digits is a reasonable interpolation seed regardless
    // of set size.
    const RESOLVE_START_LENGTH: usize = 5;

    let outcomes: Vec<PositionOutcome> = if prefixes.len() > 256 {
        prefixes
            .par_iter()
            .map(|p| resolve_one(&sorted, p, RESOLVE_START_LENGTH, config))
            .collect()
    } else {
        prefixes
            .iter()
            .map(|p| resolve_one(&sorted, p, RESOLVE_START_LENGTH, config))
            .collect()
    };

    let mut finder_time = Duration::ZERO;
    let mut oscillations_triggered = 0usize;
    let mut missing_prefixes = Vec::new();
    let mut candidate_lists: Vec<Vec<Txid>> = Vec::with_capacity(outcomes.len());
    let mut unique = 0usize;
    let mut ambiguous = 0usize;

    for (outcome, prefix) in outcomes.iter().zip(prefixes.iter()) {
        finder_time += outcome.elapsed;
        if outcome.oscillated {
            oscillations_triggered += 1;
        }
        match outcome.candidates.len() {
            0 => missing_prefixes.push(prefix.clone()),
            1 => unique += 1,
            _ => ambiguous += 1,
        }
        candidate_lists.push(outcome.candidates.clone());
    }

    if !missing_prefixes.is_empty() {
        warn!(
            missing = missing_prefixes.len(),
            "decoder found no local candidate for one or more prefixes"
        );
        return Err(CodecError::MissingTransactions(missing_prefixes));
    }

    let stats_base = DecodeStats {
        positions: prefixes.len(),
        unique,
        ambiguous,
        missing: 0,
        finder_time,
        oscillations_triggered,
        combinations_tried: 0,
    };

    if ambiguous == 0 {
        let txids: Vec<Txid> = candidate_lists
            .into_iter()
            .map(|mut c| c.pop().expect("non-missing position has at least one candidate"))
            .collect();
        if commit(&txids, config.digest_domain) != commitment {
            return Err(CodecError::HashMismatch);
        }
        debug!(positions = stats_base.positions, "decoded with no ambiguity");
        return Ok((txids, stats_base));
    }

    let enumerator = CombinationEnumerator::new(&candidate_lists);
    let total = enumerator.total();
    if total > config.ambiguity_budget as u64 {
        return Err(CodecError::TooAmbiguous {
            budget: config.ambiguity_budget,
            product: total,
        });
    }

    for i in 0..total {
        if let Some(deadline) = deadline {
            if Instant::now() >= deadline {
                return Err(CodecError::Deadline);
            }
        }
        let combo = enumerator.nth(i).expect("i < total by loop bound");
        let txids: Vec<Txid> = combo.into_iter().copied().collect();
        if commit(&txids, config.digest_domain) == commitment {
            let stats = DecodeStats {
                combinations_tried: (i + 1) as usize,
                ..stats_base
            };
            debug!(combinations_tried = i + 1, "resolved ambiguity against commitment");
            return Ok((txids, stats));
        }
    }

    warn!(total_combinations = total, "exhausted ambiguity budget with no hash match");
    Err(CodecError::HashMismatch)
}

struct PositionOutcome {
    candidates: Vec<Txid>,
    elapsed: Duration,
    oscillated: bool,
}

/// Resolve one prefix against `sorted`: find any matching entry, then widen
/// to the full contiguous run of entries sharing that prefix, since a prefix
/// shorter than the receiver's local minimal-unique length can match more
/// than one entry.
fn resolve_one(sorted: &[Txid], prefix: &str, start_length: usize, config: &CodecConfig) -> PositionOutcome {
    let window = start_length.min(prefix.len().max(1));
    let t0 = Instant::now();
    let result = finder::find(sorted, prefix, window, config.oscillation_probe_cap);
    let elapsed = t0.elapsed();

    let candidates = match result.outcome {
        FindOutcome::NotPresent => Vec::new(),
        FindOutcome::Found(i) => {
            let mut lo = i;
            while lo > 0 && sorted[lo - 1].hex_prefix(prefix.len()) == prefix {
                lo -= 1;
            }
            let mut hi = i;
            while hi + 1 < sorted.len() && sorted[hi + 1].hex_prefix(prefix.len()) == prefix {
                hi += 1;
            }
            sorted[lo..=hi].to_vec()
        }
    };

    PositionOutcome {
        candidates,
        elapsed,
        oscillated: result.oscillated,
    }
}
