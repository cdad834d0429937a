// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type consistency enforcement configuration.
//!
//! Mirrors the TypeConsistencyEnforcement QoS knobs from DDS-XTypes v1.3
//! section 7.6.3.4. Only `ignore_member_names` is consulted by the
//! assignability rules today; the other three are accepted for forward
//! compatibility and must stay inert. Bounds are already unconditionally
//! ignored for plain collection and string compatibility and only checked
//! for key members, so wiring the bound knobs up would change observable
//! compatibility decisions.

/// Caller-supplied configuration for the assignability relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TypeConsistencyConfig {
    /// Accepted, currently inert.
    pub prevent_type_widening: bool,
    /// Accepted, currently inert.
    pub ignore_sequence_bounds: bool,
    /// Accepted, currently inert.
    pub ignore_string_bounds: bool,
    /// Match struct/union members by id alone, skipping the name-hash
    /// cross-consistency check.
    pub ignore_member_names: bool,
}

impl TypeConsistencyConfig {
    /// All knobs off; the standard strict behavior.
    pub const fn strict() -> Self {
        Self {
            prevent_type_widening: false,
            ignore_sequence_bounds: false,
            ignore_string_bounds: false,
            ignore_member_names: false,
        }
    }
}
