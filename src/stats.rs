// Copyright (c) 2024 Botho Foundation

//! Per-call diagnostics, returned alongside encode/decode results.
//!
//! Rather than a process-wide running total of time spent in the index
//! finder, every [`crate::encode`] and [`crate::decode`] call returns one of
//! these records as a value it owns: nothing outlives the call that produced
//! it.

use std::time::Duration;

/// Diagnostics for a single [`crate::encode`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeStats {
    /// Number of txids encoded.
    pub txids: usize,
    /// Total time spent inside the index finder across all lookups.
    pub finder_time: Duration,
    /// Number of times the finder fell back to an oscillation sweep.
    pub oscillations_triggered: usize,
}

/// Diagnostics for a single [`crate::decode`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeStats {
    /// Number of prefixes resolved.
    pub positions: usize,
    /// Positions that matched exactly one local candidate.
    pub unique: usize,
    /// Positions with two or more local candidates.
    pub ambiguous: usize,
    /// Positions with no local candidate.
    pub missing: usize,
    /// Total time spent inside the index finder across all lookups.
    pub finder_time: Duration,
    /// Number of times the finder fell back to an oscillation sweep.
    pub oscillations_triggered: usize,
    /// Number of candidate combinations tried before a hash match (or
    /// exhaustion) during ambiguity resolution. Zero when there was no
    /// ambiguity to resolve.
    pub combinations_tried: usize,
}
