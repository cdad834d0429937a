// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Minimal collection type representations per OMG DDS-XTypes v1.3.
//!
//! Sequence, array, and map with bounds metadata. A bound of 0 means
//! unbounded throughout.

use super::CollectionElementFlag;
use crate::TypeIdentifier;

/// MinimalSequenceType - `sequence<T>` or `sequence<T, N>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimalSequenceType {
    /// Bound.
    pub header: MinimalCollectionHeader,
    /// Element type.
    pub element: MinimalCollectionElement,
}

/// MinimalArrayType - `T arr[N0][N1]...`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimalArrayType {
    /// Total bound (product of dimensions).
    pub header: MinimalCollectionHeader,
    /// Element type.
    pub element: MinimalCollectionElement,
    /// Per-dimension bounds, e.g. `long m[3][4]` -> `[3, 4]`.
    pub bound_seq: Vec<u32>,
}

/// MinimalMapType - `map<K, V>` or `map<K, V, N>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimalMapType {
    /// Bound.
    pub header: MinimalCollectionHeader,
    /// Key type.
    pub key: MinimalCollectionElement,
    /// Value type.
    pub element: MinimalCollectionElement,
}

/// MinimalCollectionHeader - collection-level metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimalCollectionHeader {
    /// Bound (0 = unbounded).
    pub bound: u32,
}

/// MinimalCollectionElement - element (or key) type info.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimalCollectionElement {
    /// Element flags (reserved).
    pub flags: CollectionElementFlag,
    /// Element type.
    pub type_id: TypeIdentifier,
}
