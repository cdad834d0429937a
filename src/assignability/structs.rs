// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Struct-to-struct assignability: extensibility gate, positional checks
//! for final/appendable, member matching, key-erased recursion,
//! must-understand and key coverage, and the writer-key refinements.

use std::collections::HashSet;

use super::helpers::{
    bound_at_least, resolved_collection_view, string_bound, CollectionView, Resolved,
};
use super::TypeAssignability;
use crate::type_object::{MemberFlag, MinimalStructType, StructTypeFlag};
use crate::{MinimalTypeObject, TypeIdentifier};

impl TypeAssignability<'_> {
    pub(super) fn assignable_struct(
        &self,
        reader: &MinimalStructType,
        writer: &MinimalStructType,
    ) -> bool {
        if reader.struct_flags.extensibility() != writer.struct_flags.extensibility() {
            log::debug!(
                "[assignability] struct extensibility mismatch: reader={:#x} writer={:#x}",
                reader.struct_flags.0,
                writer.struct_flags.0
            );
            return false;
        }

        let is_final = reader.struct_flags.contains(StructTypeFlag::IS_FINAL);
        if is_final && reader.member_seq.len() != writer.member_seq.len() {
            return false;
        }

        // Final and appendable structs keep members positional: every
        // shared index must carry the same id and optionality, with a
        // strongly assignable type.
        if is_final || reader.struct_flags.contains(StructTypeFlag::IS_APPENDABLE) {
            for (rm, wm) in reader.member_seq.iter().zip(&writer.member_seq) {
                if rm.id() != wm.id() {
                    return false;
                }
                if rm.flags().contains(MemberFlag::IS_OPTIONAL)
                    != wm.flags().contains(MemberFlag::IS_OPTIONAL)
                {
                    return false;
                }
                if !self.strongly_assignable(rm.type_id(), wm.type_id()) {
                    return false;
                }
            }
        }

        let Some(matched) = self.match_member_pairs(
            &reader.member_seq,
            &writer.member_seq,
            |m| (m.id(), m.name_hash()),
        ) else {
            return false;
        };
        if matched.is_empty() {
            return false;
        }

        for &(rm, wm) in &matched {
            if !self.assignable_key_erased(rm.type_id(), wm.type_id()) {
                return false;
            }
        }

        // Members either side cannot afford to miss must pair up: keys,
        // and non-optional must-understand members.
        let matched_ids: HashSet<u32> = matched.iter().map(|&(rm, _)| rm.id()).collect();
        let demands_match = |flags: MemberFlag| {
            flags.contains(MemberFlag::IS_KEY)
                || (flags.contains(MemberFlag::IS_MUST_UNDERSTAND)
                    && !flags.contains(MemberFlag::IS_OPTIONAL))
        };
        for member in reader.member_seq.iter().chain(&writer.member_seq) {
            if demands_match(member.flags()) && !matched_ids.contains(&member.id()) {
                return false;
            }
        }

        for &(rm, wm) in &matched {
            if wm.flags().contains(MemberFlag::IS_KEY)
                && !self.key_member_compatible(rm.type_id(), wm.type_id())
            {
                return false;
            }
        }

        true
    }

    /// Extra constraints on a matched pair whose writer side is a key
    /// member. Key values must survive the reader's representation, so
    /// bounds and value sets tighten beyond plain assignability.
    fn key_member_compatible(&self, reader: &TypeIdentifier, writer: &TypeIdentifier) -> bool {
        if reader == writer {
            return true;
        }

        let reader_res = self.resolve_through_aliases(reader);
        let writer_res = self.resolve_through_aliases(writer);

        if let (Resolved::Id(rid), Resolved::Id(wid)) = (&reader_res, &writer_res) {
            if let (Some((_, rb)), Some((_, wb))) = (string_bound(rid), string_bound(wid)) {
                return bound_at_least(rb, wb);
            }
        }

        if let (Some(rv), Some(wv)) = (
            resolved_collection_view(&reader_res),
            resolved_collection_view(&writer_res),
        ) {
            return match (rv, wv) {
                (
                    CollectionView::Sequence { bound: rb, .. },
                    CollectionView::Sequence { bound: wb, .. },
                )
                | (CollectionView::Map { bound: rb, .. }, CollectionView::Map { bound: wb, .. }) => {
                    bound_at_least(rb, wb)
                }
                // Array bounds were already forced equal by the main rule.
                _ => true,
            };
        }

        match (&reader_res, &writer_res) {
            (
                Resolved::Object(MinimalTypeObject::Enumerated(re)),
                Resolved::Object(MinimalTypeObject::Enumerated(we)),
            ) => {
                // The reader must recognize every literal the writer can
                // emit as a key value.
                we.literal_seq
                    .iter()
                    .all(|wl| re.literal_by_name(wl.detail.name_hash).is_some())
            }
            (Resolved::Object(r_obj), Resolved::Object(w_obj))
                if r_obj.is_aggregate() && w_obj.is_aggregate() =>
            {
                self.key_holder_compatible(r_obj, w_obj)
            }
            _ => true,
        }
    }
}
