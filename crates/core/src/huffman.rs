//! Huffman prefix-code engine: frequency analysis, tree construction,
//! code-table generation, encode and decode.
//!
//! # Pipeline
//!
//! raw text → frequency table → one leaf per distinct symbol, loaded into an
//! ordered list → pairwise merges of the two lowest nodes until one remains
//! (the root) → traversal of the root yields the code table → encode
//! concatenates per-symbol codes → decode matches growing prefixes of the
//! encoded stream against the reversed table.
//!
//! The encoded form is a sequence of '0'/'1' symbols, not packed bits: this
//! engine is about the code, not about a storage format.
//!
//! # Determinism
//!
//! Tree shape does not depend on map or list iteration order. Merges always
//! pop the two lowest (weight, payload) nodes, and a tie on weight orders
//! children by lexicographically smaller payload on the left. Encoding the
//! same text therefore always produces the same bit string.

use crate::chained_map::{char_key_hash, string_key_hash, ChainedMap};
use crate::error::{CodecError, Result};
use crate::ordered_list::OrderedList;
use crate::tree::WeightedNode;
use log::{debug, trace};

/// Symbol → occurrence count, for one input text.
pub type FrequencyTable = ChainedMap<char, u64>;

/// Symbol → code string over {'0','1'}. The value set is prefix-free.
pub type CodeTable = ChainedMap<char, String>;

/// The tree the merge loop produces: weights are merged frequencies,
/// payloads the concatenation of descendant symbols.
pub type HuffmanTree = WeightedNode<u64, String>;

/// Count how often each symbol occurs in `text`.
///
/// One left-to-right scan; a symbol is inserted at first occurrence and
/// incremented afterwards. The sum of all counts equals the char length
/// of `text`.
pub fn compute_frequencies(text: &str) -> FrequencyTable {
    let mut frequencies = FrequencyTable::new(char_key_hash);
    for symbol in text.chars() {
        let count = frequencies.get(&symbol).copied().unwrap_or(0);
        frequencies.put(symbol, count + 1);
    }
    frequencies
}

/// Build the Huffman tree for a frequency table and return its root.
///
/// Each (symbol, count) pair becomes a leaf in an ordered list. While more
/// than one node remains, the two lowest are popped (in order `first`,
/// `second`), merged under a parent whose weight is their sum and whose
/// payload is their concatenation, and the parent is re-inserted at its
/// sorted position. With `n` distinct symbols this performs exactly `n - 1`
/// merges and yields `2n - 1` nodes; a single distinct symbol yields its
/// leaf directly, with no merge.
///
/// Tie-break: when both popped nodes have equal weight and `first`'s payload
/// is lexicographically greater, the children are swapped so the smaller
/// payload ends up on the left.
///
/// # Errors
/// Returns `CodecError::EmptyFrequencyTable` if `frequencies` has no entries.
pub fn build_tree(frequencies: &FrequencyTable) -> Result<HuffmanTree> {
    if frequencies.is_empty() {
        return Err(CodecError::EmptyFrequencyTable.into());
    }

    debug!(
        "building huffman tree from {} distinct symbols",
        frequencies.len()
    );

    let mut pending: OrderedList<HuffmanTree> = OrderedList::new();
    for (symbol, count) in frequencies.keys().into_iter().zip(frequencies.values()) {
        pending.add(WeightedNode::new(*count, symbol.to_string()));
    }

    while pending.len() > 1 {
        let first = pending.remove_index(0)?;
        let second = pending.remove_index(0)?;

        let mut parent = WeightedNode::new(
            first.weight() + second.weight(),
            format!("{}{}", first.payload(), second.payload()),
        );
        trace!(
            "merged ({}, {:?}) and ({}, {:?}) into weight {}",
            first.weight(),
            first.payload(),
            second.weight(),
            second.payload(),
            parent.weight()
        );

        // Equal weights with a lexicographically greater first payload swap
        // the children; every other case keeps pop order.
        if first.weight() == second.weight() && first.payload() > second.payload() {
            parent.set_left(second);
            parent.set_right(first);
        } else {
            parent.set_left(first);
            parent.set_right(second);
        }

        pending.add(parent);
    }

    pending.remove_index(0)
}

/// Derive the symbol → code table from a Huffman tree.
///
/// Codes are the root-to-leaf paths, '0' per left edge and '1' per right
/// edge, visiting left before right. A root that is itself a leaf (single
/// distinct symbol) gets the literal code `"0"`. Prefix-freedom follows by
/// construction: symbols only ever sit at leaves.
pub fn build_code_table(root: &HuffmanTree) -> CodeTable {
    let mut codes = CodeTable::new(char_key_hash);

    if root.is_leaf() {
        // Lone symbol: there is no branch to encode, the code is "0".
        if let Some(symbol) = root.payload().chars().next() {
            codes.put(symbol, String::from("0"));
        }
        return codes;
    }

    record_codes(Some(root), String::new(), &mut codes);
    debug!("code table built for {} symbols", codes.len());
    codes
}

/// Record the code of every leaf under `node`. An absent node is a no-op,
/// which keeps the recursion free of null checks at call sites.
fn record_codes(node: Option<&HuffmanTree>, code: String, codes: &mut CodeTable) {
    let node = match node {
        Some(node) => node,
        None => return,
    };

    if node.is_leaf() {
        if let Some(symbol) = node.payload().chars().next() {
            trace!("assigned code {:?} to symbol {:?}", code, symbol);
            codes.put(symbol, code);
        }
        return;
    }

    record_codes(node.left(), format!("{}0", code), codes);
    record_codes(node.right(), format!("{}1", code), codes);
}

/// Encode `text` by concatenating the code of each symbol, in order.
///
/// # Errors
/// Returns `CodecError::MissingCode` if a symbol has no entry in `codes`.
/// That cannot happen when the table was built from the same input that is
/// being encoded.
pub fn encode(codes: &CodeTable, text: &str) -> Result<String> {
    let mut encoded = String::new();
    for symbol in text.chars() {
        let code = codes
            .get(&symbol)
            .map_err(|_| CodecError::MissingCode { symbol })?;
        encoded.push_str(code);
    }
    Ok(encoded)
}

/// Decode a '0'/'1' string back into text using the same code table that
/// produced it.
///
/// The table is reversed into a code → symbol map, then the input is
/// scanned left to right with a window that grows one bit symbol at a time;
/// the first (shortest) window that matches a code emits its symbol and the
/// window restarts. Because the code set is prefix-free, shortest-match-
/// first is the unique correct decomposition and no backtracking is needed.
///
/// # Errors
/// Returns `CodecError::InvalidCode` if the scan ends with unconsumed bits,
/// i.e. the input was not produced by [`encode`] with this table. An empty
/// input decodes to an empty string.
pub fn decode(encoded: &str, codes: &CodeTable) -> Result<String> {
    let mut symbols_by_code: ChainedMap<String, char> = ChainedMap::new(string_key_hash);
    for (symbol, code) in codes.keys().into_iter().zip(codes.values()) {
        symbols_by_code.put(code.clone(), *symbol);
    }

    let mut decoded = String::new();
    let mut window = String::new();
    let mut window_start = 0;
    for (position, bit) in encoded.chars().enumerate() {
        window.push(bit);
        if let Ok(&symbol) = symbols_by_code.get(&window) {
            decoded.push(symbol);
            window.clear();
            window_start = position + 1;
        }
    }

    if !window.is_empty() {
        return Err(CodecError::InvalidCode {
            position: window_start,
        }
        .into());
    }

    Ok(decoded)
}
