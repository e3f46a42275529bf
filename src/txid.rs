// Copyright (c) 2024 Botho Foundation

//! The 32-byte transaction identifier, rendered as 64 lowercase hex digits.

use crate::error::CodecError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of ASCII hex characters in a txid (32 bytes, two hex digits each).
pub const TXID_HEX_LEN: usize = 64;

/// A 32-byte transaction id, stored as its 64 lowercase ASCII hex digits.
///
/// Keeping the hex form (rather than the decoded 32 bytes) as the primary
/// representation matches how the codec actually operates: every step of the
/// finder, encoder, and decoder slices hex-digit prefixes, and the default
/// commitment digest hashes this same hex form for wire compatibility with
/// existing super-thin deployments (see [`crate::config::DigestDomain`]).
/// Byte-wise ordering of the ASCII form agrees with numeric ordering of the
/// underlying hex value, so `Txid`'s derived `Ord` is the same ordering the
/// spec's "sorted view" relies on.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Txid([u8; TXID_HEX_LEN]);

impl Txid {
    /// Parse a txid from a 64-character lowercase hex string.
    pub fn from_hex(s: &str) -> Result<Self, CodecError> {
        let bytes = s.as_bytes();
        if bytes.len() != TXID_HEX_LEN || !bytes.iter().all(|b| is_lower_hex(*b)) {
            return Err(CodecError::InvalidTxid(s.to_string()));
        }
        let mut buf = [0u8; TXID_HEX_LEN];
        buf.copy_from_slice(bytes);
        Ok(Self(buf))
    }

    /// Build a txid from its decoded 32-byte form.
    pub fn from_raw(raw: &[u8; 32]) -> Self {
        let mut buf = [0u8; TXID_HEX_LEN];
        hex::encode_to_slice(raw, &mut buf).expect("fixed 32-byte input always fits");
        Self(buf)
    }

    /// The txid's 64 lowercase hex digits.
    pub fn as_hex(&self) -> &str {
        // SAFETY net: `from_hex`/`from_raw` are the only constructors and
        // both guarantee ASCII hex content.
        std::str::from_utf8(&self.0).expect("Txid always holds ASCII hex digits")
    }

    /// The txid's decoded 32-byte form.
    pub fn to_raw(self) -> [u8; 32] {
        let mut raw = [0u8; 32];
        hex::decode_to_slice(self.as_hex(), &mut raw).expect("Txid always holds valid hex");
        raw
    }

    /// The leading `len` hex digits, for prefix comparisons. `len` is clamped
    /// to the txid's length.
    pub fn hex_prefix(&self, len: usize) -> &str {
        &self.as_hex()[..len.min(TXID_HEX_LEN)]
    }
}

fn is_lower_hex(b: u8) -> bool {
    b.is_ascii_digit() || (b'a'..=b'f').contains(&b)
}

impl fmt::Debug for Txid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Txid({}…)", &self.as_hex()[..8])
    }
}

impl fmt::Display for Txid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_hex())
    }
}

impl FromStr for Txid {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Txid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_hex())
    }
}

impl<'de> Deserialize<'de> for Txid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Txid::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
