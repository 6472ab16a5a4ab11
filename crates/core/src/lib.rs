//! huffcode-core: Huffman prefix codes over hand-built containers
//!
//! This library computes a Huffman prefix code for a line of text and
//! performs lossless encode/decode. The encoded form is a sequence of
//! '0'/'1' symbols rather than packed bits: the point is the code itself,
//! not a storage format.
//!
//! # Architecture
//!
//! The system is designed around clear module boundaries:
//! - `chained_map`: separate-chaining hash map with dynamic resizing
//! - `ordered_list`: ascending singly-linked list, the merge loop's queue
//! - `tree`: weighted binary tree node with a deterministic total order
//! - `huffman`: frequency analysis, tree construction, code table,
//!   encode/decode
//!
//! # Design Principles
//!
//! - **No panics**: all errors are structured and surfaced to the caller
//! - **Deterministic**: tree shape and codes never depend on map or list
//!   iteration order; ties break on payload order
//! - **Single-threaded**: every run is a pure in-memory transformation over
//!   independently-owned state; concurrent callers use separate instances

pub mod chained_map;
pub mod error;
pub mod huffman;
pub mod ordered_list;
pub mod tree;

// Re-export commonly used types
pub use error::{Error, Result};
