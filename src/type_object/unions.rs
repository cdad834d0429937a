// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Minimal union type representation per OMG DDS-XTypes v1.3.

use super::{MemberFlag, MinimalMemberDetail, MinimalTypeDetail, UnionTypeFlag};
use crate::TypeIdentifier;

/// MinimalUnionType - structural shape of a discriminated union.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimalUnionType {
    /// Extensibility and union properties.
    pub union_flags: UnionTypeFlag,
    /// Discriminator and detail.
    pub header: MinimalUnionHeader,
    /// Case members in declaration order.
    pub member_seq: Vec<MinimalUnionMember>,
}

impl MinimalUnionType {
    /// The member carrying the @default arm, if any.
    pub fn default_member(&self) -> Option<&MinimalUnionMember> {
        self.member_seq
            .iter()
            .find(|m| m.common.member_flags.contains(MemberFlag::IS_DEFAULT))
    }

    /// The member selected by a non-default discriminator value, if any.
    pub fn member_for_label(&self, label: i32) -> Option<&MinimalUnionMember> {
        self.member_seq
            .iter()
            .find(|m| m.common.label_seq.contains(&label))
    }
}

/// MinimalUnionHeader - union-level metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimalUnionHeader {
    /// Discriminator member (type and flags, may be @key).
    pub discriminator: MinimalDiscriminatorMember,
    /// Minimal detail (empty).
    pub detail: MinimalTypeDetail,
}

/// MinimalDiscriminatorMember - the union discriminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimalDiscriminatorMember {
    /// Discriminator flags (IS_KEY is the meaningful one).
    pub member_flags: MemberFlag,
    /// Discriminator type (integer, char, boolean, or enum).
    pub type_id: TypeIdentifier,
}

/// MinimalUnionMember - one union case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimalUnionMember {
    /// Identity, flags, type, labels.
    pub common: CommonUnionMember,
    /// Name hash.
    pub detail: MinimalMemberDetail,
}

impl MinimalUnionMember {
    pub const fn id(&self) -> u32 {
        self.common.member_id
    }

    pub const fn type_id(&self) -> &TypeIdentifier {
        &self.common.member_type_id
    }

    pub fn is_default(&self) -> bool {
        self.common.member_flags.contains(MemberFlag::IS_DEFAULT)
    }
}

/// CommonUnionMember - case info shared with the complete representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonUnionMember {
    /// Member id, unique within the union.
    pub member_id: u32,
    /// Case flags (IS_DEFAULT marks the default arm).
    pub member_flags: MemberFlag,
    /// Payload type of this case.
    pub member_type_id: TypeIdentifier,
    /// Discriminator values selecting this case. Empty is legal for a
    /// member flagged IS_DEFAULT.
    pub label_seq: Vec<i32>,
}
