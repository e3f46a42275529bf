// Copyright (c) 2024 Botho Foundation

//! Error taxonomy for the super-thin codec.

use thiserror::Error;

/// Errors raised by [`crate::encode`] and [`crate::decode`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CodecError {
    /// a string is not exactly 64 lowercase hex characters
    #[error("invalid txid, expected 64 lowercase hex characters: {0}")]
    InvalidTxid(String),

    /// encode called with duplicate txids in the input mempool
    #[error("encode called with duplicate txids in the input mempool")]
    DuplicateInInput,

    /// minimal-unique-prefix growth exceeded the configured cap
    #[error("minimal-unique-prefix growth exceeded {cap} hex digits for a txid; likely a duplicate input or corrupt mempool")]
    PrefixGrowthExceeded {
        /// the configured cap that was exceeded
        cap: usize,
    },

    /// one or more prefixes had no matching candidate in the local mempool
    #[error("{} prefixes had no matching candidate in the local mempool", .0.len())]
    MissingTransactions(Vec<String>),

    /// ambiguity budget exceeded before the candidate product could be enumerated
    #[error("ambiguity budget of {budget} exceeded: candidate product was {product}")]
    TooAmbiguous {
        /// the configured ambiguity budget
        budget: usize,
        /// the actual product of per-position candidate counts
        product: u64,
    },

    /// no candidate combination produced a digest matching the commitment
    #[error("no candidate combination produced a digest matching the commitment")]
    HashMismatch,

    /// caller-supplied deadline elapsed before decode completed
    #[error("caller-supplied deadline elapsed before decode completed")]
    Deadline,
}
