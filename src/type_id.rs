// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! TypeIdentifier per OMG DDS-XTypes v1.3, section 7.3.4.
//!
//! A TypeIdentifier is the compact, self-describing reference exchanged
//! during discovery. Primitives, strings, and plain collections are fully
//! described inline; everything else is identified by a 14-byte
//! EquivalenceHash resolved through the [`TypeLookup`](crate::TypeLookup)
//! cache.

use super::{EquivalenceHash, TypeKind};
use crate::type_object::CollectionElementFlag;
use std::convert::TryFrom;
use std::fmt;

/// Which equivalence relation a hash-based identifier participates in.
///
/// Per XTypes v1.3 section 7.3.1:
/// - **Minimal**: assignability (can writer data be read by the reader?)
/// - **Complete**: full equivalence including names and annotations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum EquivalenceKind {
    /// Minimal equivalence (assignability-based).
    Minimal = 0x10,
    /// Complete equivalence (full structural equality).
    Complete = 0x20,
}

impl EquivalenceKind {
    pub const fn to_u8(self) -> u8 {
        self as u8
    }
}

/// Identifier for a member of a strongly connected component of mutually
/// recursive types (XTypes v1.3 section 7.3.4.11).
///
/// The assignability relation does not define rules for these; they always
/// compare as not assignable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StronglyConnectedComponentId {
    /// Hash over the whole component.
    pub sc_component_id: EquivalenceHash,
    /// Number of types in the component.
    pub scc_length: i32,
    /// Index of this type within the component (0-based).
    pub scc_index: i32,
}

/// TypeIdentifier - compact reference to a DDS type.
///
/// Structural equality (`==`) is the `equal_type_id` relation: kind tags
/// and every embedded field, recursively for collections, must match.
/// Identical identifiers are assignable by definition.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeIdentifier {
    /// Primitive types (boolean, integers, floats, chars) and the
    /// unbounded string kinds TK_STRING8/TK_STRING16.
    Primitive(TypeKind),

    /// 8-bit string, bound <= 255 (0 = unbounded).
    StringSmall { bound: u8 },

    /// 8-bit string, bound > 255.
    StringLarge { bound: u32 },

    /// 16-bit (UTF-16) string, bound <= 255 (0 = unbounded).
    WStringSmall { bound: u8 },

    /// 16-bit (UTF-16) string, bound > 255.
    WStringLarge { bound: u32 },

    /// `sequence<T, N>` with N <= 255; element type embedded inline.
    PlainSequenceSmall {
        element_flags: CollectionElementFlag,
        bound: u8,
        element: Box<TypeIdentifier>,
    },

    /// `sequence<T, N>` with N > 255 (0 = unbounded).
    PlainSequenceLarge {
        element_flags: CollectionElementFlag,
        bound: u32,
        element: Box<TypeIdentifier>,
    },

    /// `T arr[N0][N1]...` where every dimension fits in a u8.
    PlainArraySmall {
        element_flags: CollectionElementFlag,
        bound_seq: Vec<u8>,
        element: Box<TypeIdentifier>,
    },

    /// `T arr[N0][N1]...` with at least one dimension > 255.
    PlainArrayLarge {
        element_flags: CollectionElementFlag,
        bound_seq: Vec<u32>,
        element: Box<TypeIdentifier>,
    },

    /// `map<K, V, N>` with N <= 255; key and element types embedded.
    PlainMapSmall {
        element_flags: CollectionElementFlag,
        bound: u8,
        element: Box<TypeIdentifier>,
        key_flags: CollectionElementFlag,
        key: Box<TypeIdentifier>,
    },

    /// `map<K, V, N>` with N > 255 (0 = unbounded).
    PlainMapLarge {
        element_flags: CollectionElementFlag,
        bound: u32,
        element: Box<TypeIdentifier>,
        key_flags: CollectionElementFlag,
        key: Box<TypeIdentifier>,
    },

    /// Hash-based identifier under Minimal equivalence. The common case
    /// for structs, unions, enums, bitmasks, and aliases.
    Minimal(EquivalenceHash),

    /// Hash-based identifier under Complete equivalence.
    Complete(EquivalenceHash),

    /// Member of a strongly connected (mutually recursive) component.
    StronglyConnected(StronglyConnectedComponentId),
}

impl TypeIdentifier {
    /// Identifier for a primitive type.
    pub const fn primitive(kind: TypeKind) -> Self {
        TypeIdentifier::Primitive(kind)
    }

    /// Bounded 8-bit string, picking the small/large encoding by bound.
    pub fn string(bound: u32) -> Self {
        match u8::try_from(bound) {
            Ok(small) => TypeIdentifier::StringSmall { bound: small },
            Err(_) => TypeIdentifier::StringLarge { bound },
        }
    }

    /// Bounded 16-bit string, picking the small/large encoding by bound.
    pub fn wstring(bound: u32) -> Self {
        match u8::try_from(bound) {
            Ok(small) => TypeIdentifier::WStringSmall { bound: small },
            Err(_) => TypeIdentifier::WStringLarge { bound },
        }
    }

    /// Plain sequence identifier, picking the small/large encoding by bound.
    pub fn sequence(bound: u32, element: TypeIdentifier) -> Self {
        let element = Box::new(element);
        match u8::try_from(bound) {
            Ok(small) if small > 0 => TypeIdentifier::PlainSequenceSmall {
                element_flags: CollectionElementFlag::empty(),
                bound: small,
                element,
            },
            _ => TypeIdentifier::PlainSequenceLarge {
                element_flags: CollectionElementFlag::empty(),
                bound,
                element,
            },
        }
    }

    /// Plain array identifier; large encoding if any dimension exceeds 255.
    pub fn array(bound_seq: Vec<u32>, element: TypeIdentifier) -> Self {
        let element = Box::new(element);
        if bound_seq.iter().all(|&b| b > 0 && b <= u32::from(u8::MAX)) {
            TypeIdentifier::PlainArraySmall {
                element_flags: CollectionElementFlag::empty(),
                bound_seq: bound_seq.iter().map(|&b| b as u8).collect(),
                element,
            }
        } else {
            TypeIdentifier::PlainArrayLarge {
                element_flags: CollectionElementFlag::empty(),
                bound_seq,
                element,
            }
        }
    }

    /// Plain map identifier, picking the small/large encoding by bound.
    pub fn map(bound: u32, key: TypeIdentifier, element: TypeIdentifier) -> Self {
        let key = Box::new(key);
        let element = Box::new(element);
        match u8::try_from(bound) {
            Ok(small) if small > 0 => TypeIdentifier::PlainMapSmall {
                element_flags: CollectionElementFlag::empty(),
                bound: small,
                element,
                key_flags: CollectionElementFlag::empty(),
                key,
            },
            _ => TypeIdentifier::PlainMapLarge {
                element_flags: CollectionElementFlag::empty(),
                bound,
                element,
                key_flags: CollectionElementFlag::empty(),
                key,
            },
        }
    }

    /// Identifier from a Minimal EquivalenceHash.
    pub const fn minimal(hash: EquivalenceHash) -> Self {
        TypeIdentifier::Minimal(hash)
    }

    /// Identifier from a Complete EquivalenceHash.
    pub const fn complete(hash: EquivalenceHash) -> Self {
        TypeIdentifier::Complete(hash)
    }

    /// True for primitive identifiers (including unbounded string kinds).
    pub const fn is_primitive(&self) -> bool {
        matches!(self, TypeIdentifier::Primitive(_))
    }

    /// True for any bounded or unbounded string identifier.
    pub const fn is_string(&self) -> bool {
        matches!(
            self,
            TypeIdentifier::Primitive(TypeKind::TK_STRING8 | TypeKind::TK_STRING16)
                | TypeIdentifier::StringSmall { .. }
                | TypeIdentifier::StringLarge { .. }
                | TypeIdentifier::WStringSmall { .. }
                | TypeIdentifier::WStringLarge { .. }
        )
    }

    /// True for plain (inline) sequence, array, and map identifiers.
    pub const fn is_plain_collection(&self) -> bool {
        matches!(
            self,
            TypeIdentifier::PlainSequenceSmall { .. }
                | TypeIdentifier::PlainSequenceLarge { .. }
                | TypeIdentifier::PlainArraySmall { .. }
                | TypeIdentifier::PlainArrayLarge { .. }
                | TypeIdentifier::PlainMapSmall { .. }
                | TypeIdentifier::PlainMapLarge { .. }
        )
    }

    /// True for hash-based identifiers (Minimal or Complete).
    pub const fn is_hash_based(&self) -> bool {
        matches!(
            self,
            TypeIdentifier::Minimal(_) | TypeIdentifier::Complete(_)
        )
    }

    /// True for strongly-connected-component identifiers.
    pub const fn is_strongly_connected(&self) -> bool {
        matches!(self, TypeIdentifier::StronglyConnected(_))
    }

    /// EquivalenceKind of a hash-based identifier.
    pub const fn equivalence_kind(&self) -> Option<EquivalenceKind> {
        match self {
            TypeIdentifier::Minimal(_) => Some(EquivalenceKind::Minimal),
            TypeIdentifier::Complete(_) => Some(EquivalenceKind::Complete),
            _ => None,
        }
    }

    /// EquivalenceHash of a hash-based identifier.
    pub const fn get_hash(&self) -> Option<&EquivalenceHash> {
        match self {
            TypeIdentifier::Minimal(h) | TypeIdentifier::Complete(h) => Some(h),
            _ => None,
        }
    }

    /// TypeKind of a primitive identifier.
    pub const fn get_primitive_kind(&self) -> Option<TypeKind> {
        match self {
            TypeIdentifier::Primitive(kind) => Some(*kind),
            _ => None,
        }
    }
}

impl fmt::Display for TypeIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeIdentifier::Primitive(kind) => write!(f, "{kind:?}"),
            TypeIdentifier::StringSmall { bound } => write!(f, "string<{bound}>"),
            TypeIdentifier::StringLarge { bound } => write!(f, "string<{bound}>"),
            TypeIdentifier::WStringSmall { bound } => write!(f, "wstring<{bound}>"),
            TypeIdentifier::WStringLarge { bound } => write!(f, "wstring<{bound}>"),
            TypeIdentifier::PlainSequenceSmall { bound, element, .. } => {
                write!(f, "sequence<{element}, {bound}>")
            }
            TypeIdentifier::PlainSequenceLarge { bound, element, .. } => {
                write!(f, "sequence<{element}, {bound}>")
            }
            TypeIdentifier::PlainArraySmall {
                bound_seq, element, ..
            } => {
                write!(f, "{element}")?;
                for b in bound_seq {
                    write!(f, "[{b}]")?;
                }
                Ok(())
            }
            TypeIdentifier::PlainArrayLarge {
                bound_seq, element, ..
            } => {
                write!(f, "{element}")?;
                for b in bound_seq {
                    write!(f, "[{b}]")?;
                }
                Ok(())
            }
            TypeIdentifier::PlainMapSmall {
                bound,
                element,
                key,
                ..
            } => write!(f, "map<{key}, {element}, {bound}>"),
            TypeIdentifier::PlainMapLarge {
                bound,
                element,
                key,
                ..
            } => write!(f, "map<{key}, {element}, {bound}>"),
            TypeIdentifier::Minimal(hash) => write!(f, "TypeId(MIN:{hash})"),
            TypeIdentifier::Complete(hash) => write!(f, "TypeId(COM:{hash})"),
            TypeIdentifier::StronglyConnected(sc) => {
                write!(
                    f,
                    "TypeId(SC:{}[{}/{}])",
                    sc.sc_component_id, sc.scc_index, sc.scc_length
                )
            }
        }
    }
}

// Convenience identifiers for the primitive kinds.
impl TypeIdentifier {
    /// TypeIdentifier for boolean
    pub const TK_BOOLEAN: Self = TypeIdentifier::Primitive(TypeKind::TK_BOOLEAN);
    /// TypeIdentifier for byte/octet
    pub const TK_BYTE: Self = TypeIdentifier::Primitive(TypeKind::TK_BYTE);
    /// TypeIdentifier for int8
    pub const TK_INT8: Self = TypeIdentifier::Primitive(TypeKind::TK_INT8);
    /// TypeIdentifier for int16
    pub const TK_INT16: Self = TypeIdentifier::Primitive(TypeKind::TK_INT16);
    /// TypeIdentifier for int32
    pub const TK_INT32: Self = TypeIdentifier::Primitive(TypeKind::TK_INT32);
    /// TypeIdentifier for int64
    pub const TK_INT64: Self = TypeIdentifier::Primitive(TypeKind::TK_INT64);
    /// TypeIdentifier for uint8
    pub const TK_UINT8: Self = TypeIdentifier::Primitive(TypeKind::TK_UINT8);
    /// TypeIdentifier for uint16
    pub const TK_UINT16: Self = TypeIdentifier::Primitive(TypeKind::TK_UINT16);
    /// TypeIdentifier for uint32
    pub const TK_UINT32: Self = TypeIdentifier::Primitive(TypeKind::TK_UINT32);
    /// TypeIdentifier for uint64
    pub const TK_UINT64: Self = TypeIdentifier::Primitive(TypeKind::TK_UINT64);
    /// TypeIdentifier for float32
    pub const TK_FLOAT32: Self = TypeIdentifier::Primitive(TypeKind::TK_FLOAT32);
    /// TypeIdentifier for float64
    pub const TK_FLOAT64: Self = TypeIdentifier::Primitive(TypeKind::TK_FLOAT64);
    /// TypeIdentifier for float128
    pub const TK_FLOAT128: Self = TypeIdentifier::Primitive(TypeKind::TK_FLOAT128);
    /// TypeIdentifier for char8
    pub const TK_CHAR8: Self = TypeIdentifier::Primitive(TypeKind::TK_CHAR8);
    /// TypeIdentifier for char16
    pub const TK_CHAR16: Self = TypeIdentifier::Primitive(TypeKind::TK_CHAR16);
    /// TypeIdentifier for string8 (unbounded)
    pub const TK_STRING8: Self = TypeIdentifier::Primitive(TypeKind::TK_STRING8);
    /// TypeIdentifier for string16 (unbounded)
    pub const TK_STRING16: Self = TypeIdentifier::Primitive(TypeKind::TK_STRING16);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_identifier() {
        let id = TypeIdentifier::primitive(TypeKind::TK_INT32);
        assert!(id.is_primitive());
        assert_eq!(id.get_primitive_kind(), Some(TypeKind::TK_INT32));
        assert!(!id.is_string());
        assert!(!id.is_hash_based());
    }

    #[test]
    fn test_string_encoding_split() {
        assert_eq!(
            TypeIdentifier::string(64),
            TypeIdentifier::StringSmall { bound: 64 }
        );
        assert_eq!(
            TypeIdentifier::string(1024),
            TypeIdentifier::StringLarge { bound: 1024 }
        );
        assert_eq!(
            TypeIdentifier::wstring(300),
            TypeIdentifier::WStringLarge { bound: 300 }
        );
        assert!(TypeIdentifier::TK_STRING8.is_string());
    }

    #[test]
    fn test_plain_collection_encoding_split() {
        let small = TypeIdentifier::sequence(10, TypeIdentifier::TK_INT32);
        assert!(matches!(
            small,
            TypeIdentifier::PlainSequenceSmall { bound: 10, .. }
        ));

        let unbounded = TypeIdentifier::sequence(0, TypeIdentifier::TK_INT32);
        assert!(matches!(
            unbounded,
            TypeIdentifier::PlainSequenceLarge { bound: 0, .. }
        ));

        let arr = TypeIdentifier::array(vec![3, 4], TypeIdentifier::TK_FLOAT32);
        assert!(matches!(arr, TypeIdentifier::PlainArraySmall { .. }));
        assert!(arr.is_plain_collection());

        let map = TypeIdentifier::map(1000, TypeIdentifier::TK_INT32, TypeIdentifier::string(16));
        assert!(matches!(map, TypeIdentifier::PlainMapLarge { .. }));
    }

    #[test]
    fn test_structural_equality_recurses() {
        let a = TypeIdentifier::sequence(8, TypeIdentifier::string(32));
        let b = TypeIdentifier::sequence(8, TypeIdentifier::string(32));
        let c = TypeIdentifier::sequence(8, TypeIdentifier::string(33));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_hash_identifiers() {
        let hash = EquivalenceHash::from_bytes([1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14]);
        let min = TypeIdentifier::minimal(hash);
        let com = TypeIdentifier::complete(hash);

        assert!(min.is_hash_based());
        assert_eq!(min.equivalence_kind(), Some(EquivalenceKind::Minimal));
        assert_eq!(com.equivalence_kind(), Some(EquivalenceKind::Complete));
        assert_eq!(min.get_hash(), Some(&hash));
        assert_ne!(min, com);
    }

    #[test]
    fn test_strongly_connected() {
        let sc = StronglyConnectedComponentId {
            sc_component_id: EquivalenceHash::zero(),
            scc_length: 2,
            scc_index: 0,
        };
        let id = TypeIdentifier::StronglyConnected(sc);
        assert!(id.is_strongly_connected());
        assert!(!id.is_hash_based());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", TypeIdentifier::TK_INT32), "TK_INT32");
        assert_eq!(format!("{}", TypeIdentifier::string(64)), "string<64>");
        assert_eq!(
            format!(
                "{}",
                TypeIdentifier::array(vec![3, 4], TypeIdentifier::TK_INT16)
            ),
            "TK_INT16[3][4]"
        );
    }
}
