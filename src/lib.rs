// Copyright (c) 2024 Botho Foundation

//! Minimal-unique-prefix mempool set-reconciliation codec.
//!
//! Two peers each hold a mostly-overlapping set of 32-byte transaction ids.
//! Rather than ship full txids, the sender ([`encode`]) replaces each one with
//! the shortest hex prefix that still disambiguates it against its own sorted
//! mempool, plus a commitment hash over the full list. The receiver
//! ([`decode`]) resolves each prefix against its own (possibly divergent)
//! mempool and uses the commitment to pick among any ambiguous matches. This
//! is the "super-thin block" relay trick: short ids instead of full txids,
//! with the commitment hash standing in for the block's merkle root.
//!
//! See [`finder`] for the interpolation-search index lookup both directions
//! build on, and [`config::CodecConfig`] for the tunables that govern safety
//! margins and budgets.

#![deny(clippy::print_stdout)]

pub mod combination;
pub mod config;
pub mod decoder;
pub mod digest;
pub mod encoder;
pub mod error;
pub mod finder;
pub mod sizing;
pub mod stats;
pub mod txid;

pub use config::{CodecConfig, DigestDomain};
pub use decoder::decode;
pub use encoder::encode;
pub use error::CodecError;
pub use stats::{DecodeStats, EncodeStats};
pub use txid::Txid;

/// A 32-byte SHA-256 commitment over a mempool's txids in sender order.
pub type Commitment = [u8; 32];
