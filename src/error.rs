// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Error types for row-set operations.
//!
//! Mirrors the error-kind catalogue of the underlying `rc_t` scheme this
//! crate's design is drawn from: one variant per kind, carrying whatever
//! context the caller needs to understand what was rejected.

use thiserror::Error;

/// Standard result type for all row-set operations.
pub type RowSetResult<T> = Result<T, RowSetError>;

/// Error kinds raised by the row-set engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RowSetError {
    /// A required reference was absent.
    ///
    /// Unreachable from the safe API (Rust references cannot be null);
    /// kept so the error-kind catalogue stays a complete mirror of the
    /// original design's vocabulary.
    #[error("self reference was null")]
    NullSelf,

    /// A required argument reference was absent.
    ///
    /// Unreachable from the safe API, kept for the same reason as
    /// [`RowSetError::NullSelf`].
    #[error("required argument was null")]
    NullArgument,

    /// An argument was structurally invalid (negative row id, zero count).
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// Human-readable description of what was invalid.
        reason: String,
    },

    /// `start + count` would overflow the signed 64-bit row-id space.
    #[error("row range [{start}, +{count}) is out of range")]
    OutOfRange {
        /// First row id of the requested range.
        start: i64,
        /// Number of rows requested.
        count: u64,
    },

    /// Arena growth failed. The set is left exactly as it was before the
    /// call that raised this error.
    #[error("allocation failed while {operation}")]
    OutOfMemory {
        /// What the engine was attempting to allocate for.
        operation: &'static str,
    },

    /// The row id was already present in the set.
    #[error("row id {row_id} already present")]
    DuplicateId {
        /// The row id that was rejected.
        row_id: i64,
    },

    /// A lookup without `create` found no matching leaf.
    #[error("row id {row_id} not found")]
    NotFound {
        /// The row id that was looked up.
        row_id: i64,
    },

    /// A reference-count invariant was violated.
    ///
    /// The Rust port delegates shared ownership to [`std::sync::Arc`]
    /// rather than hand-rolling a refcount, so this kind has no reachable
    /// call site today; kept for parity with the original kind catalogue.
    #[error("reference count constraint violated")]
    ConstraintViolation,
}
