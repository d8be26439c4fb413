// Copyright (C) 2016-2018 ERGO-Code
// Copyright (C) 2022-2023 Richard Lincoln

use thiserror::Error;

/// Result type alias using blksolve's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Structural precondition violations, detected eagerly before any numeric
/// work.
///
/// The solve itself raises no numeric errors: with a valid factor the unit
/// diagonal makes backward substitution unconditionally well-defined.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An array argument does not have the length implied by the factor
    /// order and the number of right-hand side columns.
    #[error("dimension mismatch: expected length {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// The permutation is not a bijection of `0..m`.
    #[error("permutation entry {entry} at position {position} is out of range or repeated")]
    InvalidPermutation { position: usize, entry: usize },

    /// Column pointers must start at 0, be nondecreasing and end at the
    /// number of stored entries.
    #[error("column pointers are not a monotone map of {ncols} columns onto {nnz} entries")]
    InvalidColumnPointers { ncols: usize, nnz: usize },

    /// A stored row index is out of range or breaks the required strictly
    /// increasing order within its column.
    #[error("row index {row} in column {column} is out of range or out of order")]
    InvalidRowIndex { column: usize, row: usize },

    /// Every factor column must begin with its placeholder diagonal entry.
    #[error("column {column} does not start with its diagonal entry")]
    MissingDiagonal { column: usize },

    /// The supernode partition must be strictly increasing from 0 to the
    /// factor order.
    #[error("supernode boundary {boundary} at position {position} does not partition 0..{m}")]
    InvalidSupernodes {
        position: usize,
        boundary: usize,
        m: usize,
    },
}
