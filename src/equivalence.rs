// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! EquivalenceHash per OMG DDS-XTypes v1.3, section 7.3.4.8.

use std::fmt;

/// 14-byte truncated MD5 hash identifying a type by structure.
///
/// Per XTypes v1.3 section 7.3.4.8 the hash is computed over the CDR2
/// serialization of the (Minimal or Complete) TypeObject and truncated to
/// 14 bytes. Serialization is a collaborator concern; this crate only
/// hashes whatever canonical bytes the caller provides.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct EquivalenceHash([u8; 14]);

impl EquivalenceHash {
    /// Wrap a raw 14-byte hash (e.g. received over discovery).
    pub const fn from_bytes(bytes: [u8; 14]) -> Self {
        Self(bytes)
    }

    /// Raw 14-byte view.
    pub const fn as_bytes(&self) -> &[u8; 14] {
        &self.0
    }

    /// All-zero placeholder hash.
    pub const fn zero() -> Self {
        Self([0u8; 14])
    }

    /// Hash canonical TypeObject bytes: MD5, truncated to 14 bytes.
    pub fn compute(canonical_bytes: &[u8]) -> Self {
        use md5::{Digest, Md5};

        let mut hasher = Md5::new();
        hasher.update(canonical_bytes);
        let digest = hasher.finalize();

        let mut bytes = [0u8; 14];
        bytes.copy_from_slice(&digest[..14]);
        Self(bytes)
    }
}

impl fmt::Debug for EquivalenceHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EquivalenceHash({self})")
    }
}

impl fmt::Display for EquivalenceHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl From<[u8; 14]> for EquivalenceHash {
    fn from(bytes: [u8; 14]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl AsRef<[u8]> for EquivalenceHash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
