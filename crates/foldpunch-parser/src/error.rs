//! Error types for the parser crate.
//!
//! Every variant means the input stream is malformed; the run is aborted
//! and no answers are written.

use std::io;

use foldpunch_core::FoldError;
use thiserror::Error;

/// Errors raised while reading the shape and query stream.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The stream ended before a required token.
    #[error("Unexpected end of input at line {line}: expected {expected}")]
    UnexpectedEof { line: usize, expected: &'static str },

    /// A token could not be read as the expected number.
    #[error("Invalid {expected} '{token}' at line {line}")]
    InvalidNumber {
        line: usize,
        token: String,
        expected: &'static str,
    },

    /// A shape record started with an unrecognized discriminator.
    #[error("Unknown shape kind '{kind}' at line {line}")]
    UnknownShapeKind { line: usize, kind: char },

    /// A 1-based index was zero.
    #[error("Index at line {line} must be 1-based, got 0")]
    ZeroIndex { line: usize },

    /// A shape record was well-formed but violates a registry invariant.
    #[error("Invalid shape at line {line}: {source}")]
    Shape { line: usize, source: FoldError },

    /// Reading the input failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;
