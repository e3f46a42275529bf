// Copyright (c) 2024 Botho Foundation

//! Minimal-unique-prefix encoder: the sender side of the codec.

use crate::config::CodecConfig;
use crate::digest::commit;
use crate::error::CodecError;
use crate::finder::{self, FindOutcome};
use crate::sizing::start_length;
use crate::stats::EncodeStats;
use crate::txid::Txid;
use crate::Commitment;
use rayon::prelude::*;
use std::collections::HashSet;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Encode `mempool` (in the given, sender-significant order) as a list of
/// minimal unique hex prefixes plus a commitment over the full list.
///
/// Fails fast with [`CodecError::DuplicateInInput`] if `mempool` contains the
/// same txid twice, and with [`CodecError::PrefixGrowthExceeded`] if any
/// entry's minimal prefix grows past `config.prefix_growth_cap` -- both
/// indicate a malformed mempool rather than a property of honest input.
pub fn encode(
    mempool: &[Txid],
    config: &CodecConfig,
) -> Result<(Vec<String>, Commitment, EncodeStats), CodecError> {
    if has_duplicates(mempool) {
        return Err(CodecError::DuplicateInInput);
    }

    let commitment = commit(mempool, config.digest_domain);

    let mut sorted = mempool.to_vec();
    sorted.sort();

    let sl = start_length(sorted.len());

    let outcomes: Vec<Result<PrefixOutcome, CodecError>> = if mempool.len() > 256 {
        mempool
            .par_iter()
            .map(|t| encode_one(t, &sorted, sl, config))
            .collect()
    } else {
        mempool
            .iter()
            .map(|t| encode_one(t, &sorted, sl, config))
            .collect()
    };

    let mut prefixes = Vec::with_capacity(mempool.len());
    let mut finder_time = Duration::ZERO;
    let mut oscillations_triggered = 0usize;
    for outcome in outcomes {
        let outcome = outcome?;
        finder_time += outcome.elapsed;
        if outcome.oscillated {
            oscillations_triggered += 1;
        }
        prefixes.push(outcome.prefix);
    }

    if oscillations_triggered > 0 {
        warn!(oscillations_triggered, "encoder hit interpolation oscillation");
    }
    debug!(txids = mempool.len(), start_length = sl, "encoded mempool");

    let stats = EncodeStats {
        txids: mempool.len(),
        finder_time,
        oscillations_triggered,
    };

    Ok((prefixes, commitment, stats))
}

struct PrefixOutcome {
    prefix: String,
    elapsed: Duration,
    oscillated: bool,
}

fn encode_one(
    t: &Txid,
    sorted: &[Txid],
    start_length: usize,
    config: &CodecConfig,
) -> Result<PrefixOutcome, CodecError> {
    let t0 = Instant::now();
    let result = finder::find(sorted, t.as_hex(), start_length, config.oscillation_probe_cap);
    let elapsed = t0.elapsed();

    let index = match result.outcome {
        FindOutcome::Found(i) => Some(i),
        FindOutcome::NotPresent => None,
    }
    .expect("txid is always present in its own sorted view");

    let before = index.checked_sub(1).map(|i| &sorted[i]);
    let after = sorted.get(index + 1);

    let k = minimal_unique_length(t, before, after, start_length, config.prefix_growth_cap)?;
    let prefix_len = (k + config.extra_bytes).min(crate::txid::TXID_HEX_LEN);

    Ok(PrefixOutcome {
        prefix: t.hex_prefix(prefix_len).to_string(),
        elapsed,
        oscillated: result.oscillated,
    })
}

/// Grow `k` from `start_length` until `t`'s `k`-digit prefix no longer
/// collides with either sorted neighbor's `k`-digit prefix.
fn minimal_unique_length(
    t: &Txid,
    before: Option<&Txid>,
    after: Option<&Txid>,
    start_length: usize,
    growth_cap: usize,
) -> Result<usize, CodecError> {
    let mut k = start_length.max(1);
    loop {
        let prefix = t.hex_prefix(k);
        let clashes = before.is_some_and(|b| b.hex_prefix(k) == prefix)
            || after.is_some_and(|a| a.hex_prefix(k) == prefix);
        if !clashes {
            return Ok(k);
        }
        k += 1;
        if k > growth_cap {
            return Err(CodecError::PrefixGrowthExceeded { cap: growth_cap });
        }
    }
}

fn has_duplicates(mempool: &[Txid]) -> bool {
    let mut seen = HashSet::with_capacity(mempool.len());
    !mempool.iter().all(|t| seen.insert(*t))
}
