// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Minimal enumerated type representation per OMG DDS-XTypes v1.3.

use super::{EnumTypeFlag, EnumeratedLiteralFlag, MinimalMemberDetail, MinimalTypeDetail};

/// MinimalEnumeratedType - enum literals with names erased to hashes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimalEnumeratedType {
    /// Extensibility bits.
    pub enum_flags: EnumTypeFlag,
    /// Bit bound and detail.
    pub header: MinimalEnumeratedHeader,
    /// Literals in declaration order.
    pub literal_seq: Vec<MinimalEnumeratedLiteral>,
}

impl MinimalEnumeratedType {
    /// Literal with the given name hash, if any.
    pub fn literal_by_name(&self, name_hash: u32) -> Option<&MinimalEnumeratedLiteral> {
        self.literal_seq
            .iter()
            .find(|l| l.detail.name_hash == name_hash)
    }
}

/// MinimalEnumeratedHeader - enum-level metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimalEnumeratedHeader {
    /// Serialized holder width in bits.
    pub bit_bound: i16,
    /// Minimal detail (empty).
    pub detail: MinimalTypeDetail,
}

/// MinimalEnumeratedLiteral - one enum value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimalEnumeratedLiteral {
    /// Value and flags.
    pub common: CommonEnumeratedLiteral,
    /// Name hash.
    pub detail: MinimalMemberDetail,
}

/// CommonEnumeratedLiteral - literal info shared with the complete form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommonEnumeratedLiteral {
    /// Numeric literal value.
    pub value: i32,
    /// IS_DEFAULT marks the @default_literal.
    pub flags: EnumeratedLiteralFlag,
}
