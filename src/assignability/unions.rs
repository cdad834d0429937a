// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Union-to-union assignability: label-set overlap, discriminator
//! agreement, member matching, and the per-label payload checks.

use std::collections::BTreeSet;

use super::TypeAssignability;
use crate::type_object::{MemberFlag, MinimalUnionType, UnionTypeFlag};

fn explicit_labels(union: &MinimalUnionType) -> BTreeSet<i32> {
    union
        .member_seq
        .iter()
        .flat_map(|m| m.common.label_seq.iter().copied())
        .collect()
}

impl TypeAssignability<'_> {
    pub(super) fn assignable_union(
        &self,
        reader: &MinimalUnionType,
        writer: &MinimalUnionType,
    ) -> bool {
        if reader.union_flags.extensibility() != writer.union_flags.extensibility() {
            log::debug!(
                "[assignability] union extensibility mismatch: reader={:#x} writer={:#x}",
                reader.union_flags.0,
                writer.union_flags.0
            );
            return false;
        }

        let reader_labels = explicit_labels(reader);
        let writer_labels = explicit_labels(writer);
        if reader.union_flags.contains(UnionTypeFlag::IS_FINAL) {
            if reader_labels != writer_labels {
                return false;
            }
        } else if reader_labels.is_disjoint(&writer_labels) {
            return false;
        }

        let reader_disc = &reader.header.discriminator;
        let writer_disc = &writer.header.discriminator;
        if !self.strongly_assignable(&reader_disc.type_id, &writer_disc.type_id) {
            return false;
        }
        if reader_disc.member_flags.contains(MemberFlag::IS_KEY)
            != writer_disc.member_flags.contains(MemberFlag::IS_KEY)
        {
            return false;
        }

        let Some(matched) = self.match_member_pairs(
            &reader.member_seq,
            &writer.member_seq,
            |m| (m.id(), m.detail.name_hash),
        ) else {
            return false;
        };
        if matched.is_empty() {
            return false;
        }

        // Any discriminant the writer can select that the reader also
        // recognizes must land on an assignable payload.
        for wm in &writer.member_seq {
            for &label in &wm.common.label_seq {
                if let Some(rm) = reader.member_for_label(label) {
                    if !self.assignable_id_id(rm.type_id(), wm.type_id()) {
                        return false;
                    }
                }
            }
        }

        // Reader labels unknown to the writer select the writer's default
        // arm on the wire, so that arm must be readable as each of them.
        if let Some(writer_default) = writer.default_member() {
            for rm in reader.member_seq.iter().filter(|m| !m.is_default()) {
                for &label in &rm.common.label_seq {
                    if writer.member_for_label(label).is_none()
                        && !self.assignable_id_id(rm.type_id(), writer_default.type_id())
                    {
                        return false;
                    }
                }
            }
            if let Some(reader_default) = reader.default_member() {
                if !self.assignable_id_id(reader_default.type_id(), writer_default.type_id()) {
                    return false;
                }
            }
        }

        true
    }
}
