//! Error types for the huffcode system.
//!
//! All operations return structured errors rather than panicking.
//! Every variant is a programming-contract violation, not a recoverable
//! runtime condition: the library never retries or degrades, it surfaces
//! the condition directly to the caller.

use thiserror::Error;

/// Top-level error type for all operations in the system.
///
/// Each variant corresponds to a specific failure domain:
/// - Map: chained hash map lookups
/// - List: ordered list positional access
/// - Codec: tree construction and encode/decode failures
#[derive(Debug, Error)]
pub enum Error {
    /// Chained map error (e.g., lookup of an absent key)
    #[error("map error: {0}")]
    Map(#[from] MapError),

    /// Ordered list error (e.g., index outside the valid range)
    #[error("list error: {0}")]
    List(#[from] ListError),

    /// Codec error (e.g., a symbol with no code, undecodable input)
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),
}

/// Chained hash map errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapError {
    /// Lookup of a key that is not in the map. No default value is ever
    /// substituted; the caller decides what an absent key means.
    #[error("key not found")]
    KeyNotFound,
}

/// Ordered list errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ListError {
    /// Positional access or removal outside `[0, len)`
    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Codec errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    /// No symbols with non-zero frequency (cannot build a coding tree)
    #[error("empty frequency table: cannot build a coding tree")]
    EmptyFrequencyTable,

    /// A symbol in the text to encode has no entry in the code table
    #[error("symbol {symbol:?} has no code assigned")]
    MissingCode { symbol: char },

    /// The encoded input cannot be fully decomposed into codes.
    /// `position` is the offset of the first undecodable bit symbol.
    #[error("undecodable input at bit position {position}")]
    InvalidCode { position: usize },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
