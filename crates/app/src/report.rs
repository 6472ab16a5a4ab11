//! Result reporting: frequency/code table and byte-savings statistics.
//!
//! The table is printed in decreasing frequency order, so the symbols with
//! the shortest codes come first. Sorting reuses the core's ordered list:
//! (count, symbol) nodes go in ascending, and the walk runs backwards.

use huffcode_core::huffman::{CodeTable, FrequencyTable};
use huffcode_core::ordered_list::OrderedList;
use huffcode_core::tree::WeightedNode;
use huffcode_core::Result;

/// Print the run's results: per-symbol table, the three strings, and how
/// many bytes the encoding saved.
///
/// `input_bytes` counts the UTF-8 bytes of the original line; the encoded
/// string is bits-as-chars, so its byte cost is `ceil(bits / 8)`.
pub fn process_results(
    frequencies: &FrequencyTable,
    codes: &CodeTable,
    input: &str,
    encoded: &str,
    decoded: &str,
    show_table: bool,
) -> Result<()> {
    if show_table {
        println!("Symbol\tFrequency   Code");
        println!("------\t---------   ----");

        let mut by_frequency: OrderedList<WeightedNode<u64, String>> = OrderedList::new();
        for (symbol, count) in frequencies.keys().into_iter().zip(frequencies.values()) {
            by_frequency.add(WeightedNode::new(*count, symbol.to_string()));
        }

        // Ascending list walked backwards = decreasing frequency.
        for index in (0..by_frequency.len()).rev() {
            let node = by_frequency.get(index)?;
            if let Some(symbol) = node.payload().chars().next() {
                let code = codes.get(&symbol)?;
                println!("{}\t{}\t    {}", node.payload(), node.weight(), code);
            }
        }
        println!();
    }

    let input_bytes = input.len();
    let encoded_bytes = (encoded.len() + 7) / 8;
    let savings = if input_bytes > 0 {
        100.0 - (encoded_bytes as f64 / input_bytes as f64) * 100.0
    } else {
        0.0
    };

    println!("Original string:\n{}", input);
    println!("Encoded string:\n{}", encoded);
    println!("Decoded string:\n{}", decoded);
    println!();
    println!("The original string requires {} bytes.", input_bytes);
    println!("The encoded string requires {} bytes.", encoded_bytes);
    println!("Difference in space required is {:.2}%.", savings);

    Ok(())
}
