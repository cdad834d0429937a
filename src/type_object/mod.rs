// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Minimal TypeObject per OMG DDS-XTypes v1.3, section 7.3.4.
//!
//! The minimal representation carries exactly what type assignability
//! needs: kinds, member ids and flags, bounds, and name hashes. Names,
//! annotations, and documentation live only in the complete representation,
//! which is out of scope here.

use crate::TypeKind;

mod alias;
mod bitmasks;
mod bitsets;
mod collections;
mod details;
mod enums;
mod structs;
mod unions;

pub use alias::*;
pub use bitmasks::*;
pub use bitsets::*;
pub use collections::*;
pub use details::*;
pub use enums::*;
pub use structs::*;
pub use unions::*;

/// MinimalTypeObject - full structural shape of a user-defined type.
///
/// The kind tag is fixed at construction. Values are immutable once built;
/// the key-erasure/key-holder transforms in the assignability module
/// produce rewritten copies, never in-place edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MinimalTypeObject {
    /// Structure
    Struct(MinimalStructType),
    /// Discriminated union
    Union(MinimalUnionType),
    /// Type alias (typedef)
    Alias(MinimalAliasType),
    /// Sequence
    Sequence(MinimalSequenceType),
    /// Array
    Array(MinimalArrayType),
    /// Map
    Map(MinimalMapType),
    /// Enumeration
    Enumerated(MinimalEnumeratedType),
    /// Bitmask
    Bitmask(MinimalBitmaskType),
    /// Bitset (IDL 4.2); modeled, but never assignable
    Bitset(MinimalBitsetType),
}

impl MinimalTypeObject {
    /// Kind tag of this descriptor.
    pub const fn kind(&self) -> TypeKind {
        match self {
            MinimalTypeObject::Struct(_) => TypeKind::TK_STRUCTURE,
            MinimalTypeObject::Union(_) => TypeKind::TK_UNION,
            MinimalTypeObject::Alias(_) => TypeKind::TK_ALIAS,
            MinimalTypeObject::Sequence(_) => TypeKind::TK_SEQUENCE,
            MinimalTypeObject::Array(_) => TypeKind::TK_ARRAY,
            MinimalTypeObject::Map(_) => TypeKind::TK_MAP,
            MinimalTypeObject::Enumerated(_) => TypeKind::TK_ENUM,
            MinimalTypeObject::Bitmask(_) => TypeKind::TK_BITMASK,
            MinimalTypeObject::Bitset(_) => TypeKind::TK_BITSET,
        }
    }

    /// True for struct and union descriptors.
    pub const fn is_aggregate(&self) -> bool {
        matches!(
            self,
            MinimalTypeObject::Struct(_) | MinimalTypeObject::Union(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tags() {
        let alias = MinimalTypeObject::Alias(MinimalAliasType {
            alias_flags: AliasTypeFlag::empty(),
            header: MinimalAliasHeader::default(),
            body: MinimalAliasBody {
                common: CommonAliasBody {
                    related_flags: TypeRelationFlag::empty(),
                    related_type: crate::TypeIdentifier::TK_INT32,
                },
            },
        });
        assert_eq!(alias.kind(), TypeKind::TK_ALIAS);
        assert!(!alias.is_aggregate());
    }
}
