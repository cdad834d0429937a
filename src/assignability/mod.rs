// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! XTypes v1.3 type assignability.
//!
//! [`TypeAssignability`] decides whether a reader type can consume data
//! published as a writer type, per the DDS-XTypes structural rules:
//!
//! - Primitives and strings match on kind and character width.
//! - Enumerations and bitmasks match on bit bound and literal/flag
//!   agreement; bitmasks interoperate with the unsigned integer of the
//!   matching width bracket.
//! - Sequences, arrays, and maps require strongly assignable elements,
//!   with equal dimensions for arrays.
//! - Structs and unions follow the extensibility-gated member rules,
//!   including key and must-understand coverage.
//! - Aliases are transparent on either side.
//!
//! The relation is fail-closed: an identifier that cannot be resolved
//! through the [`TypeLookup`], or a construct outside the supported set,
//! makes the answer `false` rather than an error.

mod enums;
mod helpers;
mod structs;
mod unions;

#[cfg(test)]
mod tests;

use std::borrow::Cow;

use helpers::{bitmask_bracket_holds, string_bound, CollectionView};

use crate::{MinimalTypeObject, TypeConsistencyConfig, TypeIdentifier, TypeLookup};

/// One side of an assignability query: a type either by identifier or by
/// fully described TypeObject.
#[derive(Debug, Clone, Copy)]
pub enum TypeOperand<'a> {
    Reference(&'a TypeIdentifier),
    Descriptor(&'a MinimalTypeObject),
}

/// An operand after resolution: a terminal identifier (primitive, string,
/// or plain collection) or a descriptor, owned when it came out of the
/// lookup and borrowed when the caller supplied it.
enum TypeView<'a> {
    Terminal(&'a TypeIdentifier),
    Object(Cow<'a, MinimalTypeObject>),
}

impl TypeView<'_> {
    fn as_operand(&self) -> TypeOperand<'_> {
        match self {
            TypeView::Terminal(id) => TypeOperand::Reference(id),
            TypeView::Object(obj) => TypeOperand::Descriptor(obj.as_ref()),
        }
    }

    fn collection_view(&self) -> Option<CollectionView<'_>> {
        match self {
            TypeView::Terminal(id) => CollectionView::from_identifier(id),
            TypeView::Object(obj) => CollectionView::from_object(obj.as_ref()),
        }
    }
}

/// The assignability relation, evaluated against a [`TypeLookup`] for
/// hash-identified dependencies.
pub struct TypeAssignability<'a> {
    lookup: &'a TypeLookup,
    config: TypeConsistencyConfig,
}

impl<'a> TypeAssignability<'a> {
    pub fn new(lookup: &'a TypeLookup) -> Self {
        Self::with_config(lookup, TypeConsistencyConfig::default())
    }

    pub fn with_config(lookup: &'a TypeLookup, config: TypeConsistencyConfig) -> Self {
        TypeAssignability { lookup, config }
    }

    pub fn config(&self) -> &TypeConsistencyConfig {
        &self.config
    }

    /// True when data written as `writer` can be consumed as `reader`.
    ///
    /// Identical references are assignable without resolution. A hash
    /// reference that cannot be resolved answers `false` regardless of the
    /// other operand; the relation never registers a reference/descriptor
    /// pairing itself, since the two operands name different types.
    /// Preloading the cache is the discovery layer's job, through
    /// [`TypeLookup::insert`].
    pub fn assignable(&self, reader: TypeOperand<'_>, writer: TypeOperand<'_>) -> bool {
        if let (TypeOperand::Reference(r), TypeOperand::Reference(w)) = (reader, writer) {
            if r == w {
                return true;
            }
        }
        let Some(reader_view) = self.resolve_view(reader) else {
            return false;
        };
        let Some(writer_view) = self.resolve_view(writer) else {
            return false;
        };
        self.assignable_views(&reader_view, &writer_view)
    }

    pub fn assignable_id_id(&self, reader: &TypeIdentifier, writer: &TypeIdentifier) -> bool {
        self.assignable(TypeOperand::Reference(reader), TypeOperand::Reference(writer))
    }

    pub fn assignable_id_obj(&self, reader: &TypeIdentifier, writer: &MinimalTypeObject) -> bool {
        self.assignable(TypeOperand::Reference(reader), TypeOperand::Descriptor(writer))
    }

    pub fn assignable_obj_id(&self, reader: &MinimalTypeObject, writer: &TypeIdentifier) -> bool {
        self.assignable(TypeOperand::Descriptor(reader), TypeOperand::Reference(writer))
    }

    pub fn assignable_obj_obj(
        &self,
        reader: &MinimalTypeObject,
        writer: &MinimalTypeObject,
    ) -> bool {
        self.assignable(TypeOperand::Descriptor(reader), TypeOperand::Descriptor(writer))
    }

    fn resolve_view<'b>(&self, operand: TypeOperand<'b>) -> Option<TypeView<'b>> {
        match operand {
            TypeOperand::Descriptor(obj) => Some(TypeView::Object(Cow::Borrowed(obj))),
            TypeOperand::Reference(id) => match id {
                TypeIdentifier::Minimal(_) | TypeIdentifier::Complete(_) => {
                    match self.lookup.resolve(id) {
                        Some(obj) => Some(TypeView::Object(Cow::Owned(obj))),
                        None => {
                            log::debug!("[assignability] unresolved type identifier {id}");
                            None
                        }
                    }
                }
                TypeIdentifier::StronglyConnected(_) => {
                    log::debug!("[assignability] strongly connected component {id} unsupported");
                    None
                }
                _ => Some(TypeView::Terminal(id)),
            },
        }
    }

    fn assignable_views(&self, reader: &TypeView<'_>, writer: &TypeView<'_>) -> bool {
        // Aliases are transparent: unwrap one level and re-enter.
        if let TypeView::Object(obj) = reader {
            if let MinimalTypeObject::Alias(alias) = obj.as_ref() {
                return self.assignable(
                    TypeOperand::Reference(alias.related_type()),
                    writer.as_operand(),
                );
            }
        }
        if let TypeView::Object(obj) = writer {
            if let MinimalTypeObject::Alias(alias) = obj.as_ref() {
                return self.assignable(
                    reader.as_operand(),
                    TypeOperand::Reference(alias.related_type()),
                );
            }
        }

        if let (Some(rv), Some(wv)) = (reader.collection_view(), writer.collection_view()) {
            return self.assignable_collections(&rv, &wv);
        }

        match (reader, writer) {
            (TypeView::Object(r), TypeView::Object(w)) => {
                self.assignable_objects(r.as_ref(), w.as_ref())
            }
            (TypeView::Object(r), TypeView::Terminal(w)) => bitmask_primitive(r.as_ref(), w),
            (TypeView::Terminal(r), TypeView::Object(w)) => primitive_bitmask(r, w.as_ref()),
            (TypeView::Terminal(r), TypeView::Terminal(w)) => assignable_terminals(r, w),
        }
    }

    fn assignable_objects(&self, reader: &MinimalTypeObject, writer: &MinimalTypeObject) -> bool {
        match (reader, writer) {
            (MinimalTypeObject::Struct(r), MinimalTypeObject::Struct(w)) => {
                self.assignable_struct(r, w)
            }
            (MinimalTypeObject::Union(r), MinimalTypeObject::Union(w)) => {
                self.assignable_union(r, w)
            }
            (MinimalTypeObject::Enumerated(r), MinimalTypeObject::Enumerated(w)) => {
                enums::assignable_enum(r, w)
            }
            (MinimalTypeObject::Bitmask(r), MinimalTypeObject::Bitmask(w)) => {
                r.header.bit_bound == w.header.bit_bound
            }
            // Bitsets and cross-kind pairs are never assignable.
            _ => false,
        }
    }

    fn assignable_collections(
        &self,
        reader: &CollectionView<'_>,
        writer: &CollectionView<'_>,
    ) -> bool {
        match (reader, writer) {
            (
                CollectionView::Sequence { element: re, .. },
                CollectionView::Sequence { element: we, .. },
            ) => self.strongly_assignable(re, we),
            (
                CollectionView::Array {
                    bound_seq: rb,
                    element: re,
                },
                CollectionView::Array {
                    bound_seq: wb,
                    element: we,
                },
            ) => rb == wb && self.strongly_assignable(re, we),
            (
                CollectionView::Map {
                    key: rk,
                    element: re,
                    ..
                },
                CollectionView::Map {
                    key: wk,
                    element: we,
                    ..
                },
            ) => self.strongly_assignable(rk, wk) && self.strongly_assignable(re, we),
            _ => false,
        }
    }
}

fn assignable_terminals(reader: &TypeIdentifier, writer: &TypeIdentifier) -> bool {
    // Strings match on character width alone; bounds never constrain
    // plain assignability.
    if let (Some((rw, _)), Some((ww, _))) = (string_bound(reader), string_bound(writer)) {
        return rw == ww;
    }
    match (reader, writer) {
        (TypeIdentifier::Primitive(r), TypeIdentifier::Primitive(w)) => r == w,
        _ => false,
    }
}

fn bitmask_primitive(reader: &MinimalTypeObject, writer: &TypeIdentifier) -> bool {
    match (reader, writer) {
        (MinimalTypeObject::Bitmask(bm), TypeIdentifier::Primitive(kind)) => {
            bitmask_bracket_holds(*kind, bm.header.bit_bound)
        }
        _ => false,
    }
}

fn primitive_bitmask(reader: &TypeIdentifier, writer: &MinimalTypeObject) -> bool {
    match (reader, writer) {
        (TypeIdentifier::Primitive(kind), MinimalTypeObject::Bitmask(bm)) => {
            bitmask_bracket_holds(*kind, bm.header.bit_bound)
        }
        _ => false,
    }
}
