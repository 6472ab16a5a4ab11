//! Diagnostic tree rendering.
//!
//! Read-only over (weight, payload, left, right); ancestry is carried by
//! the recursion itself, so the node type needs no parent reference.

use huffcode_core::huffman::HuffmanTree;

/// Print an indented rendering of the tree rooted at `root`.
pub fn print_tree(root: &HuffmanTree) {
    println!("Huffman tree structure:");
    print_node(root, 0, "root");
}

fn print_node(node: &HuffmanTree, depth: usize, label: &str) {
    let indent = "  ".repeat(depth);
    if node.is_leaf() {
        println!(
            "{}{} -> leaf {:?} [weight: {}]",
            indent,
            label,
            node.payload(),
            node.weight()
        );
    } else {
        println!(
            "{}{} -> internal {:?} [weight: {}]",
            indent,
            label,
            node.payload(),
            node.weight()
        );
        if let Some(left) = node.left() {
            print_node(left, depth + 1, "L");
        }
        if let Some(right) = node.right() {
            print_node(right, depth + 1, "R");
        }
    }
}
