// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! TypeLookup - resolves hash-based type identifiers to their minimal
//! TypeObjects.
//!
//! The cache is owned by the discovery/type-resolution layer and treated as
//! a read-only oracle by the assignability relation. Entries are inserted
//! once (first writer wins) and never mutated afterward, so a concurrent
//! map is all the synchronization required.

use crate::{MinimalTypeObject, TypeIdentifier};
use dashmap::DashMap;

/// Cache mapping hash-based [`TypeIdentifier`]s to their descriptors.
///
/// Safe for concurrent resolve/insert from any thread. A resolve miss is
/// an ordinary outcome (the remote type was never announced, or its
/// TypeObject has not arrived yet), not an error.
#[derive(Debug, Default)]
pub struct TypeLookup {
    entries: DashMap<TypeIdentifier, MinimalTypeObject>,
}

impl TypeLookup {
    /// Empty cache.
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Descriptor for `id`, if one has been registered.
    ///
    /// Returns a clone so callers never hold map shards across recursive
    /// calls. Minimal TypeObjects are small; the copy is cheaper than the
    /// deadlock risk.
    pub fn resolve(&self, id: &TypeIdentifier) -> Option<MinimalTypeObject> {
        self.entries.get(id).map(|entry| entry.value().clone())
    }

    /// Register a descriptor for `id`. Idempotent: a second insert for an
    /// already-present identifier is a silent no-op.
    pub fn insert(&self, id: TypeIdentifier, object: MinimalTypeObject) {
        self.entries.entry(id).or_insert(object);
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
