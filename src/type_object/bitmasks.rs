// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Minimal bitmask type representation per OMG DDS-XTypes v1.3.

use super::{BitflagFlag, MinimalMemberDetail, MinimalTypeDetail};

/// MinimalBitmaskType - named bit positions with names erased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimalBitmaskType {
    /// Bit bound and detail.
    pub header: MinimalBitmaskHeader,
    /// Named bit positions in declaration order.
    pub flag_seq: Vec<MinimalBitflag>,
}

/// MinimalBitmaskHeader - bitmask-level metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimalBitmaskHeader {
    /// Holder width in bits (1-64); decides the unsigned-integer bracket.
    pub bit_bound: i16,
    /// Minimal detail (empty).
    pub detail: MinimalTypeDetail,
}

/// MinimalBitflag - one named bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimalBitflag {
    /// Position and flags.
    pub common: CommonBitflag,
    /// Name hash.
    pub detail: MinimalMemberDetail,
}

/// CommonBitflag - bit info shared with the complete representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommonBitflag {
    /// 0-based bit position.
    pub position: u16,
    /// Flags (reserved).
    pub flags: BitflagFlag,
}
