// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Minimal bitset (IDL 4.2) representation per OMG DDS-XTypes v1.3.
//!
//! Carried in the model and in the delimited-type check; the assignability
//! relation defines no rule for bitsets and reports them as incompatible.

use super::{BitfieldFlag, BitsetTypeFlag, MinimalMemberDetail, MinimalTypeDetail};
use crate::TypeKind;

/// MinimalBitsetType - fixed-layout bitfield container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimalBitsetType {
    /// Extensibility bits.
    pub bitset_flags: BitsetTypeFlag,
    /// Minimal detail (empty).
    pub header: MinimalBitsetHeader,
    /// Bitfields in declaration order.
    pub field_seq: Vec<MinimalBitfield>,
}

/// MinimalBitsetHeader - bitset-level metadata.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MinimalBitsetHeader {
    /// Minimal detail (empty).
    pub detail: MinimalTypeDetail,
}

/// MinimalBitfield - one bitfield.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimalBitfield {
    /// Position, width, and holder kind.
    pub common: CommonBitfield,
    /// Name hash.
    pub name_hash: MinimalMemberDetail,
}

/// CommonBitfield - bitfield info shared with the complete representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommonBitfield {
    /// 0-based starting bit position.
    pub position: u16,
    /// Flags (reserved).
    pub flags: BitfieldFlag,
    /// Width in bits (1-64).
    pub bitcount: u8,
    /// Unsigned integer kind holding the field.
    pub holder_type: TypeKind,
}
