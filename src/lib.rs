// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! DDS-XTypes v1.3 type model and assignability.
//!
//! This crate carries the Minimal TypeObject data model (identifiers,
//! descriptors, equivalence hashes) and evaluates the XTypes
//! assignability relation between a reader type and a writer type, so
//! endpoints with structurally different but compatible types can still
//! match.
//!
//! # Example
//!
//! ```
//! use hdds_assignability::{TypeAssignability, TypeIdentifier, TypeKind, TypeLookup};
//!
//! let lookup = TypeLookup::new();
//! let checker = TypeAssignability::new(&lookup);
//! let uint32 = TypeIdentifier::primitive(TypeKind::TK_UINT32);
//! assert!(checker.assignable_id_id(&uint32, &uint32));
//! ```

pub mod assignability;
pub mod type_object;

mod config;
mod equivalence;
mod lookup;
mod type_id;
mod type_kind;

pub use assignability::{TypeAssignability, TypeOperand};
pub use config::TypeConsistencyConfig;
pub use equivalence::EquivalenceHash;
pub use lookup::TypeLookup;
pub use type_id::{EquivalenceKind, StronglyConnectedComponentId, TypeIdentifier};
pub use type_kind::TypeKind;
pub use type_object::MinimalTypeObject;

/// XTypes specification revision this crate implements.
pub const XTYPES_VERSION: &str = "1.3";
