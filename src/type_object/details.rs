// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Member detail and flag types per OMG DDS-XTypes v1.3.
//!
//! The minimal representation erases names: members carry a fixed-width
//! hash of the name instead of the name itself.

// ============================================================================
// Detail structures
// ============================================================================

/// MinimalTypeDetail - type-level metadata in the minimal representation.
///
/// Deliberately empty: names and annotations exist only in the complete
/// representation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MinimalTypeDetail {}

impl MinimalTypeDetail {
    pub const fn new() -> Self {
        Self {}
    }
}

/// MinimalMemberDetail - member-level metadata in the minimal representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimalMemberDetail {
    /// First 4 bytes (little-endian) of the MD5 hash of the member name.
    pub name_hash: u32,
}

impl MinimalMemberDetail {
    /// Compute the detail from an IDL member name.
    pub fn from_name(name: &str) -> Self {
        use md5::{Digest, Md5};

        let mut hasher = Md5::new();
        hasher.update(name.as_bytes());
        let digest = hasher.finalize();
        let name_hash = u32::from_le_bytes([digest[0], digest[1], digest[2], digest[3]]);
        Self { name_hash }
    }
}

// ============================================================================
// Flags
// ============================================================================

/// Extensibility bits shared by the aggregate flag types.
const EXTENSIBILITY_MASK: u16 = 0x0007;

/// StructTypeFlag - struct extensibility and properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct StructTypeFlag(pub u16);

impl StructTypeFlag {
    /// @final - no schema evolution allowed.
    pub const IS_FINAL: Self = Self(0x0001);
    /// @appendable - members may be added at the end.
    pub const IS_APPENDABLE: Self = Self(0x0002);
    /// @mutable - members may be added or removed anywhere.
    pub const IS_MUTABLE: Self = Self(0x0004);
    /// Struct is nested inside another type.
    pub const IS_NESTED: Self = Self(0x0008);
    /// @autoid(HASH) member ids.
    pub const IS_AUTOID_HASH: Self = Self(0x0010);

    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn contains(self, flag: Self) -> bool {
        (self.0 & flag.0) != 0
    }

    /// The final/appendable/mutable bits only.
    pub const fn extensibility(self) -> u16 {
        self.0 & EXTENSIBILITY_MASK
    }
}

/// UnionTypeFlag - union extensibility and properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct UnionTypeFlag(pub u16);

impl UnionTypeFlag {
    /// @final
    pub const IS_FINAL: Self = Self(0x0001);
    /// @appendable
    pub const IS_APPENDABLE: Self = Self(0x0002);
    /// @mutable
    pub const IS_MUTABLE: Self = Self(0x0004);
    /// Union is nested inside another type.
    pub const IS_NESTED: Self = Self(0x0008);

    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn contains(self, flag: Self) -> bool {
        (self.0 & flag.0) != 0
    }

    pub const fn extensibility(self) -> u16 {
        self.0 & EXTENSIBILITY_MASK
    }
}

/// EnumTypeFlag - enumeration extensibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct EnumTypeFlag(pub u16);

impl EnumTypeFlag {
    /// @final
    pub const IS_FINAL: Self = Self(0x0001);
    /// @appendable
    pub const IS_APPENDABLE: Self = Self(0x0002);
    /// @mutable
    pub const IS_MUTABLE: Self = Self(0x0004);

    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn contains(self, flag: Self) -> bool {
        (self.0 & flag.0) != 0
    }

    pub const fn extensibility(self) -> u16 {
        self.0 & EXTENSIBILITY_MASK
    }
}

/// BitsetTypeFlag - bitset extensibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct BitsetTypeFlag(pub u16);

impl BitsetTypeFlag {
    /// @final
    pub const IS_FINAL: Self = Self(0x0001);
    /// @appendable
    pub const IS_APPENDABLE: Self = Self(0x0002);
    /// @mutable
    pub const IS_MUTABLE: Self = Self(0x0004);

    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn contains(self, flag: Self) -> bool {
        (self.0 & flag.0) != 0
    }

    pub const fn extensibility(self) -> u16 {
        self.0 & EXTENSIBILITY_MASK
    }
}

/// MemberFlag - per-member properties (@key, @optional, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct MemberFlag(pub u16);

impl MemberFlag {
    /// TRY_CONSTRUCT1
    pub const TRY_CONSTRUCT1: Self = Self(0x0001);
    /// TRY_CONSTRUCT2
    pub const TRY_CONSTRUCT2: Self = Self(0x0002);
    /// @external
    pub const IS_EXTERNAL: Self = Self(0x0004);
    /// @optional
    pub const IS_OPTIONAL: Self = Self(0x0008);
    /// @must_understand
    pub const IS_MUST_UNDERSTAND: Self = Self(0x0010);
    /// @key
    pub const IS_KEY: Self = Self(0x0020);
    /// @default union arm
    pub const IS_DEFAULT: Self = Self(0x0040);

    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn contains(self, flag: Self) -> bool {
        (self.0 & flag.0) != 0
    }

    /// Copy with `flag` set. Used by the key-holder transform.
    pub const fn with(self, flag: Self) -> Self {
        Self(self.0 | flag.0)
    }

    /// Copy with `flag` cleared. Used by the key-erasure transform.
    pub const fn without(self, flag: Self) -> Self {
        Self(self.0 & !flag.0)
    }
}

/// EnumeratedLiteralFlag - literal properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct EnumeratedLiteralFlag(pub u16);

impl EnumeratedLiteralFlag {
    /// @default_literal
    pub const IS_DEFAULT: Self = Self(0x0001);

    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn contains(self, flag: Self) -> bool {
        (self.0 & flag.0) != 0
    }
}

/// CollectionElementFlag - element properties (reserved).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct CollectionElementFlag(pub u16);

impl CollectionElementFlag {
    pub const fn empty() -> Self {
        Self(0)
    }
}

/// BitflagFlag - bitmask flag properties (reserved).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct BitflagFlag(pub u16);

impl BitflagFlag {
    pub const fn empty() -> Self {
        Self(0)
    }
}

/// BitfieldFlag - bitset field properties (reserved).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct BitfieldFlag(pub u16);

impl BitfieldFlag {
    pub const fn empty() -> Self {
        Self(0)
    }
}

/// AliasTypeFlag - alias properties (reserved).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct AliasTypeFlag(pub u16);

impl AliasTypeFlag {
    pub const fn empty() -> Self {
        Self(0)
    }
}

/// TypeRelationFlag - alias-to-related-type properties (reserved).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct TypeRelationFlag(pub u16);

impl TypeRelationFlag {
    pub const fn empty() -> Self {
        Self(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_flag_with_without() {
        let flags = MemberFlag::IS_KEY.with(MemberFlag::IS_MUST_UNDERSTAND);
        assert!(flags.contains(MemberFlag::IS_KEY));
        assert!(flags.contains(MemberFlag::IS_MUST_UNDERSTAND));

        let erased = flags.without(MemberFlag::IS_KEY);
        assert!(!erased.contains(MemberFlag::IS_KEY));
        assert!(erased.contains(MemberFlag::IS_MUST_UNDERSTAND));
    }

    #[test]
    fn test_extensibility_bits() {
        let f = StructTypeFlag(StructTypeFlag::IS_APPENDABLE.0 | StructTypeFlag::IS_NESTED.0);
        assert_eq!(f.extensibility(), StructTypeFlag::IS_APPENDABLE.0);
        assert_ne!(f.extensibility(), StructTypeFlag::IS_FINAL.0);
    }

    #[test]
    fn test_member_detail_hash_stable() {
        let a = MinimalMemberDetail::from_name("sensor_id");
        let b = MinimalMemberDetail::from_name("sensor_id");
        let c = MinimalMemberDetail::from_name("sensor_idx");
        assert_eq!(a, b);
        assert_ne!(a.name_hash, c.name_hash);
    }
}
