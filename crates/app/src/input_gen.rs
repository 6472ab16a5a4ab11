//! Sample input generation for runs without an input file.
//!
//! Generates one line of pseudo-text with a skewed letter distribution,
//! so the resulting Huffman codes have visibly different lengths. The
//! generator is seeded and fully deterministic.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Sampling alphabet. Common letters (and the space) repeat, which skews
/// the frequency distribution the way natural text does.
const ALPHABET: &[u8] = b"eeeeetttaaooiinnsshhrrdlucmfwypvbgk      .,!";

/// Generate one line of sample text.
///
/// # Arguments
/// - `seed`: random seed for determinism
/// - `length_chars`: exact length of the generated line
///
/// # Returns
/// A single line (never contains a newline) of `length_chars` chars.
pub fn generate_sample_line(seed: u64, length_chars: usize) -> String {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut line = String::with_capacity(length_chars);
    for _ in 0..length_chars {
        let index = rng.gen_range(0..ALPHABET.len());
        line.push(ALPHABET[index] as char);
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_length() {
        for length in [0, 1, 10, 80, 1000] {
            let line = generate_sample_line(7, length);
            assert_eq!(line.chars().count(), length);
        }
    }

    #[test]
    fn test_determinism() {
        let first = generate_sample_line(12345, 200);
        let second = generate_sample_line(12345, 200);

        assert_eq!(first, second);
    }

    #[test]
    fn test_different_seeds() {
        let first = generate_sample_line(1, 200);
        let second = generate_sample_line(2, 200);

        assert_ne!(first, second);
    }

    #[test]
    fn test_single_line() {
        let line = generate_sample_line(99, 500);
        assert!(!line.contains('\n'));
    }
}
