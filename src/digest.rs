// Copyright (c) 2024 Botho Foundation

//! Commitment digest over an ordered list of txids.

use crate::config::DigestDomain;
use crate::txid::Txid;
use crate::Commitment;
use sha2::{Digest, Sha256};

/// SHA-256 over `txids` concatenated in order, in the byte domain selected
/// by `domain`.
pub fn commit(txids: &[Txid], domain: DigestDomain) -> Commitment {
    let mut hasher = Sha256::new();
    match domain {
        DigestDomain::HexString => {
            for t in txids {
                hasher.update(t.as_hex().as_bytes());
            }
        }
        DigestDomain::RawBytes => {
            for t in txids {
                hasher.update(t.to_raw());
            }
        }
    }
    hasher.finalize().into()
}
