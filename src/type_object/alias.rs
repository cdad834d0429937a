// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Minimal alias (typedef) representation per OMG DDS-XTypes v1.3.
//!
//! Aliases are a pure naming indirection; the assignability relation sees
//! straight through them to the related type.

use super::{AliasTypeFlag, MinimalTypeDetail, TypeRelationFlag};
use crate::TypeIdentifier;

/// MinimalAliasType - `typedef Related Name;` with the name erased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimalAliasType {
    /// Alias flags (reserved).
    pub alias_flags: AliasTypeFlag,
    /// Minimal header (empty detail).
    pub header: MinimalAliasHeader,
    /// The aliased type.
    pub body: MinimalAliasBody,
}

impl MinimalAliasType {
    /// The type this alias stands for.
    pub const fn related_type(&self) -> &TypeIdentifier {
        &self.body.common.related_type
    }
}

/// MinimalAliasHeader - alias-level metadata.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MinimalAliasHeader {
    /// Minimal detail (empty).
    pub detail: MinimalTypeDetail,
}

/// MinimalAliasBody - the related type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimalAliasBody {
    /// Shared alias body info.
    pub common: CommonAliasBody,
}

/// CommonAliasBody - info shared with the complete representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonAliasBody {
    /// Relation flags (reserved).
    pub related_flags: TypeRelationFlag,
    /// The aliased type.
    pub related_type: TypeIdentifier,
}
