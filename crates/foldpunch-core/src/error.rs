//! Error types for the core crate.
//!
//! Covers registry construction, registry lookups and fold resolution.
//! All errors are fatal for the run that produced them.

use thiserror::Error;

/// Errors raised by the geometry, registry and resolver layers.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FoldError {
    /// A shape or fold reference falls outside the registry.
    #[error("Shape index {index} out of range (registry holds {len} shapes)")]
    IndexOutOfRange {
        /// The 0-based index that was requested.
        index: usize,
        /// Number of shapes in the registry.
        len: usize,
    },

    /// A fold refers to itself or to a shape that comes after it.
    #[error("Fold at index {index} references shape {source_index}, which is not an earlier shape")]
    CyclicFoldReference {
        /// Index of the offending fold.
        index: usize,
        /// The source index it points at.
        source_index: usize,
    },

    /// The two points defining a fold line coincide.
    #[error("Fold line is degenerate: both points are ({x}, {y})")]
    DegenerateLine {
        /// X coordinate of the repeated point.
        x: f64,
        /// Y coordinate of the repeated point.
        y: f64,
    },

    /// A query produced more live preimages than the configured limit.
    #[error("Query exceeded the preimage limit of {limit}")]
    PreimageLimitExceeded {
        /// The configured limit.
        limit: usize,
    },
}

/// Result type alias for core operations.
pub type FoldResult<T> = Result<T, FoldError>;
