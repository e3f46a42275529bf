// Copyright (c) 2024 Botho Foundation

//! Tunable safety margins and budgets for the super-thin codec.

use serde::{Deserialize, Serialize};

/// Which byte representation of a txid feeds the commitment digest.
///
/// Existing super-thin deployments hash the hex-string form of each txid;
/// [`DigestDomain::HexString`] preserves wire compatibility with them.
/// [`DigestDomain::RawBytes`] hashes the decoded 32-byte form instead, which
/// is cheaper and is the better choice for a deployment with no compatibility
/// constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DigestDomain {
    /// Hash the 64-byte ASCII hex-string form of each txid.
    HexString,
    /// Hash the decoded 32-byte binary form of each txid.
    RawBytes,
}

impl Default for DigestDomain {
    fn default() -> Self {
        DigestDomain::HexString
    }
}

/// Configuration for [`crate::encode`] and [`crate::decode`].
///
/// Construct with [`CodecConfig::default`] and override only the fields that
/// need to differ from the defaults used by existing super-thin deployments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Hex digits appended to each minimal unique prefix as a safety margin
    /// against small divergence between sender and receiver mempools.
    #[serde(default = "default_extra_bytes")]
    pub extra_bytes: usize,

    /// Maximum product of per-position candidate counts the decoder will
    /// attempt to enumerate before giving up with `TooAmbiguous`.
    #[serde(default = "default_ambiguity_budget")]
    pub ambiguity_budget: usize,

    /// Maximum number of bidirectional sweep probes the finder will try
    /// after detecting interpolation-search oscillation.
    #[serde(default = "default_oscillation_probe_cap")]
    pub oscillation_probe_cap: usize,

    /// Maximum hex-digit length a minimal unique prefix may grow to before
    /// the encoder gives up with `PrefixGrowthExceeded`.
    #[serde(default = "default_prefix_growth_cap")]
    pub prefix_growth_cap: usize,

    /// Byte domain the commitment digest is computed over.
    #[serde(default)]
    pub digest_domain: DigestDomain,
}

const fn default_extra_bytes() -> usize {
    2
}

const fn default_ambiguity_budget() -> usize {
    1500
}

const fn default_oscillation_probe_cap() -> usize {
    400
}

const fn default_prefix_growth_cap() -> usize {
    30
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            extra_bytes: default_extra_bytes(),
            ambiguity_budget: default_ambiguity_budget(),
            oscillation_probe_cap: default_oscillation_probe_cap(),
            prefix_growth_cap: default_prefix_growth_cap(),
            digest_domain: DigestDomain::default(),
        }
    }
}
