// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Minimal struct type representation per OMG DDS-XTypes v1.3, 7.3.4.4.4.

use super::{MemberFlag, MinimalMemberDetail, MinimalTypeDetail, StructTypeFlag};
use crate::TypeIdentifier;

/// MinimalStructType - structural shape of a struct, names erased.
///
/// Exactly one of the final/appendable/mutable bits is set in
/// `struct_flags` by construction. A member's index is its position in
/// `member_seq` (declaration order).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimalStructType {
    /// Extensibility and struct properties.
    pub struct_flags: StructTypeFlag,
    /// Base type and detail.
    pub header: MinimalStructHeader,
    /// Members in declaration order.
    pub member_seq: Vec<MinimalStructMember>,
}

/// MinimalStructHeader - struct-level metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimalStructHeader {
    /// Base type for inheritance, `None` if the struct has no base.
    pub base_type: Option<TypeIdentifier>,
    /// Minimal detail (empty).
    pub detail: MinimalTypeDetail,
}

/// MinimalStructMember - one struct field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimalStructMember {
    /// Identity, flags, and type.
    pub common: CommonStructMember,
    /// Name hash.
    pub detail: MinimalMemberDetail,
}

impl MinimalStructMember {
    /// Stable numeric member id.
    pub const fn id(&self) -> u32 {
        self.common.member_id
    }

    /// Member flags.
    pub const fn flags(&self) -> MemberFlag {
        self.common.member_flags
    }

    /// Type of this member.
    pub const fn type_id(&self) -> &TypeIdentifier {
        &self.common.member_type_id
    }

    /// Erased name hash.
    pub const fn name_hash(&self) -> u32 {
        self.detail.name_hash
    }
}

/// CommonStructMember - member info shared with the complete representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonStructMember {
    /// Member id, unique within the struct. Sequential for
    /// @final/@appendable, hash-derived for @mutable.
    pub member_id: u32,
    /// @key, @optional, @must_understand, @external, try-construct.
    pub member_flags: MemberFlag,
    /// Type of this member.
    pub member_type_id: TypeIdentifier,
}
