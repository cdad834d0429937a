// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Enumeration assignability: bit-bound and extensibility gates, literal
//! agreement across the shared name/value sets.

use crate::type_object::{EnumTypeFlag, MinimalEnumeratedType};

pub(super) fn assignable_enum(
    reader: &MinimalEnumeratedType,
    writer: &MinimalEnumeratedType,
) -> bool {
    if reader.enum_flags.extensibility() != writer.enum_flags.extensibility() {
        return false;
    }
    if reader.header.bit_bound != writer.header.bit_bound {
        return false;
    }

    if reader.enum_flags.contains(EnumTypeFlag::IS_FINAL) {
        // Final enums must agree literal for literal.
        if reader.literal_seq.len() != writer.literal_seq.len() {
            return false;
        }
        return writer.literal_seq.iter().all(|wl| {
            reader
                .literal_by_name(wl.detail.name_hash)
                .is_some_and(|rl| rl.common.value == wl.common.value)
        });
    }

    // Otherwise any literal the two types share, by name or by value, must
    // agree on the other half of the pair.
    for rl in &reader.literal_seq {
        for wl in &writer.literal_seq {
            let names_match = rl.detail.name_hash == wl.detail.name_hash;
            let values_match = rl.common.value == wl.common.value;
            if names_match != values_match {
                return false;
            }
        }
    }
    true
}
