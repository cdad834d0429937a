// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Cross-cutting predicates and transforms backing the per-kind rules:
//! delimited-ness, strong assignability, bound ordering, collection view
//! normalization, and the key-erasure/key-holder descriptor rewrites.

use super::{TypeAssignability, TypeOperand};
use crate::type_object::{
    BitsetTypeFlag, MemberFlag, MinimalUnionType, StructTypeFlag, UnionTypeFlag,
};
use crate::{MinimalTypeObject, TypeIdentifier, TypeKind};

/// Character width of a string type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum StringWidth {
    Narrow,
    Wide,
}

/// Width and bound of a string identifier, in any of its encodings
/// (bounded small/large, or the unbounded primitive kinds).
pub(super) fn string_bound(id: &TypeIdentifier) -> Option<(StringWidth, u32)> {
    match id {
        TypeIdentifier::Primitive(TypeKind::TK_STRING8) => Some((StringWidth::Narrow, 0)),
        TypeIdentifier::Primitive(TypeKind::TK_STRING16) => Some((StringWidth::Wide, 0)),
        TypeIdentifier::StringSmall { bound } => Some((StringWidth::Narrow, u32::from(*bound))),
        TypeIdentifier::StringLarge { bound } => Some((StringWidth::Narrow, *bound)),
        TypeIdentifier::WStringSmall { bound } => Some((StringWidth::Wide, u32::from(*bound))),
        TypeIdentifier::WStringLarge { bound } => Some((StringWidth::Wide, *bound)),
        _ => None,
    }
}

/// Bound ordering with 0 meaning unbounded (larger than any finite bound).
pub(super) fn bound_at_least(reader: u32, writer: u32) -> bool {
    let widen = |b: u32| {
        if b == 0 {
            u64::from(u32::MAX) + 1
        } else {
            u64::from(b)
        }
    };
    widen(reader) >= widen(writer)
}

/// True when the unsigned integer kind's bit-width bracket contains the
/// bitmask bit bound (uint8 for 1-8, uint16 for 9-16, uint32 for 17-32,
/// uint64 for 33-64).
pub(super) fn bitmask_bracket_holds(kind: TypeKind, bit_bound: i16) -> bool {
    match kind {
        TypeKind::TK_UINT8 => (1..=8).contains(&bit_bound),
        TypeKind::TK_UINT16 => (9..=16).contains(&bit_bound),
        TypeKind::TK_UINT32 => (17..=32).contains(&bit_bound),
        TypeKind::TK_UINT64 => (33..=64).contains(&bit_bound),
        _ => false,
    }
}

/// Normalized view over a collection in either of its representations
/// (plain inline identifier or resolved TypeObject), so sequence/array/map
/// rules apply regardless of which form each side arrived in.
#[derive(Debug)]
pub(super) enum CollectionView<'a> {
    Sequence {
        bound: u32,
        element: &'a TypeIdentifier,
    },
    Array {
        bound_seq: Vec<u32>,
        element: &'a TypeIdentifier,
    },
    Map {
        bound: u32,
        key: &'a TypeIdentifier,
        element: &'a TypeIdentifier,
    },
}

impl<'a> CollectionView<'a> {
    pub(super) fn from_identifier(id: &'a TypeIdentifier) -> Option<Self> {
        match id {
            TypeIdentifier::PlainSequenceSmall { bound, element, .. } => {
                Some(CollectionView::Sequence {
                    bound: u32::from(*bound),
                    element,
                })
            }
            TypeIdentifier::PlainSequenceLarge { bound, element, .. } => {
                Some(CollectionView::Sequence {
                    bound: *bound,
                    element,
                })
            }
            TypeIdentifier::PlainArraySmall {
                bound_seq, element, ..
            } => Some(CollectionView::Array {
                bound_seq: bound_seq.iter().map(|&b| u32::from(b)).collect(),
                element,
            }),
            TypeIdentifier::PlainArrayLarge {
                bound_seq, element, ..
            } => Some(CollectionView::Array {
                bound_seq: bound_seq.clone(),
                element,
            }),
            TypeIdentifier::PlainMapSmall {
                bound,
                element,
                key,
                ..
            } => Some(CollectionView::Map {
                bound: u32::from(*bound),
                key,
                element,
            }),
            TypeIdentifier::PlainMapLarge {
                bound,
                element,
                key,
                ..
            } => Some(CollectionView::Map {
                bound: *bound,
                key,
                element,
            }),
            _ => None,
        }
    }

    pub(super) fn from_object(obj: &'a MinimalTypeObject) -> Option<Self> {
        match obj {
            MinimalTypeObject::Sequence(s) => Some(CollectionView::Sequence {
                bound: s.header.bound,
                element: &s.element.type_id,
            }),
            MinimalTypeObject::Array(a) => Some(CollectionView::Array {
                bound_seq: a.bound_seq.clone(),
                element: &a.element.type_id,
            }),
            MinimalTypeObject::Map(m) => Some(CollectionView::Map {
                bound: m.header.bound,
                key: &m.key.type_id,
                element: &m.element.type_id,
            }),
            _ => None,
        }
    }
}

/// Copy of an aggregate descriptor with every key flag cleared.
///
/// Never mutates the input; callers hold the copy only for the duration of
/// one member comparison.
pub(super) fn erase_keys(obj: &MinimalTypeObject) -> MinimalTypeObject {
    match obj {
        MinimalTypeObject::Struct(s) => {
            let mut s = s.clone();
            for member in &mut s.member_seq {
                member.common.member_flags =
                    member.common.member_flags.without(MemberFlag::IS_KEY);
            }
            MinimalTypeObject::Struct(s)
        }
        MinimalTypeObject::Union(u) => {
            let mut u = u.clone();
            u.header.discriminator.member_flags = u
                .header
                .discriminator
                .member_flags
                .without(MemberFlag::IS_KEY);
            for member in &mut u.member_seq {
                member.common.member_flags =
                    member.common.member_flags.without(MemberFlag::IS_KEY);
            }
            MinimalTypeObject::Union(u)
        }
        other => other.clone(),
    }
}

/// Copy of an aggregate descriptor reduced to its key-bearing view.
///
/// For a struct: only the key members if any exist, otherwise all members
/// marked as keys. For a union: nothing but the discriminator when the
/// discriminator itself is a key.
pub(super) fn hold_keys(obj: &MinimalTypeObject) -> MinimalTypeObject {
    match obj {
        MinimalTypeObject::Struct(s) => {
            let mut s = s.clone();
            if s.member_seq
                .iter()
                .any(|m| m.flags().contains(MemberFlag::IS_KEY))
            {
                s.member_seq
                    .retain(|m| m.flags().contains(MemberFlag::IS_KEY));
            } else {
                for member in &mut s.member_seq {
                    member.common.member_flags =
                        member.common.member_flags.with(MemberFlag::IS_KEY);
                }
            }
            MinimalTypeObject::Struct(s)
        }
        MinimalTypeObject::Union(u) => {
            let mut u = u.clone();
            if u.header
                .discriminator
                .member_flags
                .contains(MemberFlag::IS_KEY)
            {
                u.member_seq.clear();
            }
            MinimalTypeObject::Union(u)
        }
        other => other.clone(),
    }
}

/// A hash identifier chased through any alias levels: either the descriptor
/// it lands on, or the identifier itself when nothing further resolves.
#[derive(Debug)]
pub(super) enum Resolved {
    Id(TypeIdentifier),
    Object(MinimalTypeObject),
}

pub(super) fn resolved_collection_view(res: &Resolved) -> Option<CollectionView<'_>> {
    match res {
        Resolved::Id(id) => CollectionView::from_identifier(id),
        Resolved::Object(obj) => CollectionView::from_object(obj),
    }
}

impl TypeAssignability<'_> {
    /// Structural equality, or assignability with a self-delimiting writer.
    ///
    /// Required where plain assignability is not enough: union
    /// discriminators and collection element/key types.
    pub fn strongly_assignable(&self, reader: &TypeIdentifier, writer: &TypeIdentifier) -> bool {
        reader == writer
            || (self.assignable_id_id(reader, writer) && self.is_delimited(writer))
    }

    /// True when the serialized form of `id` can be skipped without full
    /// decoding under XCDR2: all primitives and strings, enums and
    /// bitmasks, collections of delimited elements, and non-final
    /// aggregates.
    pub fn is_delimited(&self, id: &TypeIdentifier) -> bool {
        match id {
            TypeIdentifier::Primitive(_)
            | TypeIdentifier::StringSmall { .. }
            | TypeIdentifier::StringLarge { .. }
            | TypeIdentifier::WStringSmall { .. }
            | TypeIdentifier::WStringLarge { .. } => true,
            TypeIdentifier::PlainSequenceSmall { element, .. }
            | TypeIdentifier::PlainSequenceLarge { element, .. }
            | TypeIdentifier::PlainArraySmall { element, .. }
            | TypeIdentifier::PlainArrayLarge { element, .. } => self.is_delimited(element),
            TypeIdentifier::PlainMapSmall { element, key, .. }
            | TypeIdentifier::PlainMapLarge { element, key, .. } => {
                self.is_delimited(key) && self.is_delimited(element)
            }
            TypeIdentifier::Minimal(_) | TypeIdentifier::Complete(_) => self
                .lookup
                .resolve(id)
                .is_some_and(|obj| self.is_delimited_object(&obj)),
            TypeIdentifier::StronglyConnected(_) => false,
        }
    }

    fn is_delimited_object(&self, obj: &MinimalTypeObject) -> bool {
        match obj {
            MinimalTypeObject::Enumerated(_) | MinimalTypeObject::Bitmask(_) => true,
            MinimalTypeObject::Struct(s) => !s.struct_flags.contains(StructTypeFlag::IS_FINAL),
            MinimalTypeObject::Union(u) => !u.union_flags.contains(UnionTypeFlag::IS_FINAL),
            MinimalTypeObject::Bitset(b) => !b.bitset_flags.contains(BitsetTypeFlag::IS_FINAL),
            MinimalTypeObject::Alias(a) => self.is_delimited(a.related_type()),
            MinimalTypeObject::Sequence(s) => self.is_delimited(&s.element.type_id),
            MinimalTypeObject::Array(a) => self.is_delimited(&a.element.type_id),
            MinimalTypeObject::Map(m) => {
                self.is_delimited(&m.key.type_id) && self.is_delimited(&m.element.type_id)
            }
        }
    }

    /// Chase `id` through alias descriptors until a non-alias descriptor or
    /// an unresolvable identifier remains. Alias chains are acyclic by
    /// construction of the type system.
    pub(super) fn resolve_through_aliases(&self, id: &TypeIdentifier) -> Resolved {
        let mut current = id.clone();
        loop {
            match self.lookup.resolve(&current) {
                Some(MinimalTypeObject::Alias(alias)) => {
                    current = alias.related_type().clone();
                }
                Some(obj) => return Resolved::Object(obj),
                None => return Resolved::Id(current),
            }
        }
    }

    /// Key-erased descriptor for a member type, when it resolves to an
    /// aggregate. Non-aggregates and unresolvable identifiers recurse by
    /// reference instead.
    pub(super) fn erased_aggregate(&self, id: &TypeIdentifier) -> Option<MinimalTypeObject> {
        match self.lookup.resolve(id) {
            Some(obj) if obj.is_aggregate() => Some(erase_keys(&obj)),
            _ => None,
        }
    }

    /// Key-holder descriptor for a member type, when it resolves to an
    /// aggregate.
    pub(super) fn holder_aggregate(&self, id: &TypeIdentifier) -> Option<MinimalTypeObject> {
        match self.lookup.resolve(id) {
            Some(obj) if obj.is_aggregate() => Some(hold_keys(&obj)),
            _ => None,
        }
    }

    /// Member matching per the id/name-hash cross-consistency rule shared
    /// by the struct and union rules.
    ///
    /// Returns `None` on a violation (a name hash shared without the id,
    /// or an id shared without the name hash, unless names are ignored by
    /// configuration); otherwise the list of matched (reader, writer)
    /// pairs, possibly empty.
    pub(super) fn match_member_pairs<'m, M>(
        &self,
        reader: &'m [M],
        writer: &'m [M],
        identity: impl Fn(&M) -> (u32, u32),
    ) -> Option<Vec<(&'m M, &'m M)>> {
        let mut matched = Vec::new();
        for rm in reader {
            let (rid, rname) = identity(rm);
            for wm in writer {
                let (wid, wname) = identity(wm);
                if self.config.ignore_member_names {
                    if rid == wid {
                        matched.push((rm, wm));
                    }
                } else {
                    let ids_match = rid == wid;
                    if ids_match != (rname == wname) {
                        return None;
                    }
                    if ids_match {
                        matched.push((rm, wm));
                    }
                }
            }
        }
        Some(matched)
    }

    /// Recurse into a matched member pair with key semantics stripped from
    /// both sides.
    pub(super) fn assignable_key_erased(
        &self,
        reader: &TypeIdentifier,
        writer: &TypeIdentifier,
    ) -> bool {
        let reader_erased = self.erased_aggregate(reader);
        let writer_erased = self.erased_aggregate(writer);
        let reader_op = reader_erased
            .as_ref()
            .map_or(TypeOperand::Reference(reader), TypeOperand::Descriptor);
        let writer_op = writer_erased
            .as_ref()
            .map_or(TypeOperand::Reference(writer), TypeOperand::Descriptor);
        self.assignable(reader_op, writer_op)
    }

    /// Key-holder comparison for aggregate key members, including the
    /// per-label mutual check for union pairs.
    pub(super) fn key_holder_compatible(
        &self,
        reader: &MinimalTypeObject,
        writer: &MinimalTypeObject,
    ) -> bool {
        let reader_holder = hold_keys(reader);
        let writer_holder = hold_keys(writer);
        if let (MinimalTypeObject::Union(ru), MinimalTypeObject::Union(wu)) =
            (&reader_holder, &writer_holder)
        {
            // Keyed discriminators discard the case members, so the key
            // reduces to the discriminator; the full union rule's label
            // and matched-member gates do not apply to the emptied pair.
            if ru.member_seq.is_empty() && wu.member_seq.is_empty() {
                return ru.union_flags.extensibility() == wu.union_flags.extensibility()
                    && ru.header.discriminator.member_flags.contains(MemberFlag::IS_KEY)
                        == wu.header.discriminator.member_flags.contains(MemberFlag::IS_KEY)
                    && self.strongly_assignable(
                        &ru.header.discriminator.type_id,
                        &wu.header.discriminator.type_id,
                    );
            }
            return self.assignable(
                TypeOperand::Descriptor(&reader_holder),
                TypeOperand::Descriptor(&writer_holder),
            ) && self.union_key_labels_compatible(ru, wu);
        }
        self.assignable(
            TypeOperand::Descriptor(&reader_holder),
            TypeOperand::Descriptor(&writer_holder),
        )
    }

    /// For every label the writer's key-holder union recognizes that also
    /// selects a reader member, the payload key-holders must be mutually
    /// assignable (by descriptor when one resolves, by reference
    /// otherwise).
    fn union_key_labels_compatible(
        &self,
        reader: &MinimalUnionType,
        writer: &MinimalUnionType,
    ) -> bool {
        for wm in &writer.member_seq {
            for &label in &wm.common.label_seq {
                let Some(rm) = reader.member_for_label(label) else {
                    continue;
                };
                let reader_holder = self.holder_aggregate(rm.type_id());
                let writer_holder = self.holder_aggregate(wm.type_id());
                let reader_op = reader_holder
                    .as_ref()
                    .map_or(TypeOperand::Reference(rm.type_id()), TypeOperand::Descriptor);
                let writer_op = writer_holder
                    .as_ref()
                    .map_or(TypeOperand::Reference(wm.type_id()), TypeOperand::Descriptor);
                if !self.assignable(reader_op, writer_op)
                    || !self.assignable(writer_op, reader_op)
                {
                    return false;
                }
            }
        }
        true
    }
}
