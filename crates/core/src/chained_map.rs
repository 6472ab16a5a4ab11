//! Generic associative container with separate-chaining collision resolution.
//!
//! `ChainedMap` backs both lookup directions of the codec: symbol → frequency
//! during analysis and symbol → code (plus the reverse, code → symbol) during
//! encode/decode.
//!
//! # Design
//!
//! The table is an array of buckets sized to a prime number; each bucket is a
//! chain of `(key, value)` entries. A caller-supplied hash function maps a key
//! to an unbounded integer, which the map reduces modulo the table size.
//! Collisions are resolved purely by chaining — no open addressing, no
//! tombstones. Key equality is value equality, never identity.
//!
//! When an insert pushes the load factor (`entries / buckets`) past a fixed
//! threshold, the table rehashes into the next prime at least twice the old
//! capacity and re-inserts every entry under the new modulus.
//!
//! # Invariants
//! - The bucket count is always prime
//! - Every key appears in exactly one chain, at the index its hash selects
//! - `len` equals the total number of entries across all chains

use crate::error::{MapError, Result};
use log::trace;

/// Caller-supplied hash capability: maps a key to an unbounded integer.
///
/// The map reduces the result modulo its current (prime) bucket count, so
/// implementations only need to spread keys, not bound them.
pub type HashFn<K> = fn(&K) -> usize;

/// Default number of buckets for a freshly created map.
const INITIAL_CAPACITY: usize = 11;

/// Load factor above which an insert triggers a rehash.
const MAX_LOAD_FACTOR: f64 = 0.75;

/// Hash function for `char` keys: the Unicode scalar value itself.
pub fn char_key_hash(key: &char) -> usize {
    *key as usize
}

/// Hash function for `String` keys: 31-polynomial over the chars.
pub fn string_key_hash(key: &String) -> usize {
    key.chars()
        .fold(0usize, |h, c| h.wrapping_mul(31).wrapping_add(c as usize))
}

/// Associative container with separate chaining and dynamic resizing.
///
/// `put` inserts or overwrites, `get` fails hard on an absent key, and
/// `keys`/`values` expose the entries with positional correspondence only —
/// `keys()[i]` and `values()[i]` belong to the same entry within a single
/// inspection, but no ordering beyond that is promised.
#[derive(Debug, Clone)]
pub struct ChainedMap<K, V> {
    /// Bucket array; each bucket is a chain of entries
    buckets: Vec<Vec<(K, V)>>,
    /// Total entry count across all chains
    len: usize,
    /// Caller-supplied hash capability
    hash: HashFn<K>,
}

impl<K: PartialEq, V> ChainedMap<K, V> {
    /// Create an empty map with the default capacity.
    pub fn new(hash: HashFn<K>) -> Self {
        Self::with_capacity(INITIAL_CAPACITY, hash)
    }

    /// Create an empty map with at least `capacity` buckets.
    ///
    /// The actual bucket count is rounded up to a prime.
    pub fn with_capacity(capacity: usize, hash: HashFn<K>) -> Self {
        let capacity = next_prime(capacity.max(2));
        Self {
            buckets: (0..capacity).map(|_| Vec::new()).collect(),
            len: 0,
            hash,
        }
    }

    /// Number of entries in the map.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert `value` under `key`, overwriting any previous value.
    ///
    /// Idempotent on repeated identical `(key, value)` pairs. May trigger a
    /// rehash; the rehash preserves every entry.
    pub fn put(&mut self, key: K, value: V) {
        let index = self.bucket_index(&key);
        if let Some(entry) = self.buckets[index].iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
            return;
        }

        self.buckets[index].push((key, value));
        self.len += 1;

        if self.load_factor() > MAX_LOAD_FACTOR {
            self.rehash();
        }
    }

    /// Look up the value stored under `key`.
    ///
    /// # Errors
    /// Returns `MapError::KeyNotFound` if the key is absent.
    pub fn get(&self, key: &K) -> Result<&V> {
        let index = self.bucket_index(key);
        self.buckets[index]
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
            .ok_or_else(|| MapError::KeyNotFound.into())
    }

    /// Whether `key` is present in the map.
    pub fn contains_key(&self, key: &K) -> bool {
        let index = self.bucket_index(key);
        self.buckets[index].iter().any(|(k, _)| k == key)
    }

    /// All keys, in chain-scan order.
    ///
    /// The only guarantee is positional correspondence with `values()`:
    /// `keys()[i]` and `values()[i]` belong to the same entry as long as the
    /// map is not modified between the two calls.
    pub fn keys(&self) -> Vec<&K> {
        self.buckets.iter().flatten().map(|(k, _)| k).collect()
    }

    /// All values, in the same chain-scan order as `keys()`.
    pub fn values(&self) -> Vec<&V> {
        self.buckets.iter().flatten().map(|(_, v)| v).collect()
    }

    fn bucket_index(&self, key: &K) -> usize {
        (self.hash)(key) % self.buckets.len()
    }

    fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    /// Grow the bucket array to the next prime at least twice the current
    /// capacity and re-insert every entry under the new modulus.
    fn rehash(&mut self) {
        let capacity = next_prime(self.buckets.len() * 2);
        trace!(
            "rehashing {} entries from {} into {} buckets",
            self.len,
            self.buckets.len(),
            capacity
        );

        let old = std::mem::replace(
            &mut self.buckets,
            (0..capacity).map(|_| Vec::new()).collect(),
        );
        for (key, value) in old.into_iter().flatten() {
            let index = (self.hash)(&key) % self.buckets.len();
            self.buckets[index].push((key, value));
        }
    }
}

/// Smallest prime greater than or equal to `n`.
///
/// Trial division is plenty here: tables are alphabet-sized.
fn next_prime(n: usize) -> usize {
    let mut candidate = n.max(2);
    while !is_prime(candidate) {
        candidate += 1;
    }
    candidate
}

fn is_prime(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut divisor = 3;
    while divisor * divisor <= n {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, MapError};

    fn identity_hash(key: &usize) -> usize {
        *key
    }

    fn colliding_hash(_key: &usize) -> usize {
        0
    }

    #[test]
    fn test_put_and_get() {
        let mut map = ChainedMap::new(char_key_hash);
        map.put('a', 1u64);
        map.put('b', 2u64);

        assert_eq!(map.get(&'a').unwrap(), &1);
        assert_eq!(map.get(&'b').unwrap(), &2);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_put_overwrites_existing_key() {
        let mut map = ChainedMap::new(char_key_hash);
        map.put('a', 1u64);
        map.put('a', 5u64);
        map.put('a', 5u64);

        assert_eq!(map.get(&'a').unwrap(), &5);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_get_missing_key_fails() {
        let map: ChainedMap<char, u64> = ChainedMap::new(char_key_hash);
        let err = map.get(&'x').unwrap_err();
        assert!(matches!(err, Error::Map(MapError::KeyNotFound)));
    }

    #[test]
    fn test_contains_key() {
        let mut map = ChainedMap::new(char_key_hash);
        map.put('a', 1u64);

        assert!(map.contains_key(&'a'));
        assert!(!map.contains_key(&'b'));
    }

    #[test]
    fn test_keys_and_values_correspond() {
        let mut map = ChainedMap::new(char_key_hash);
        for (i, symbol) in "zyxwv".chars().enumerate() {
            map.put(symbol, i as u64);
        }

        let keys = map.keys();
        let values = map.values();
        assert_eq!(keys.len(), values.len());
        for (key, value) in keys.into_iter().zip(values) {
            assert_eq!(map.get(key).unwrap(), value);
        }
    }

    #[test]
    fn test_resize_preserves_entries() {
        // 100 entries from an 11-bucket start forces several rehashes.
        let mut map = ChainedMap::new(identity_hash);
        for key in 0..100usize {
            map.put(key, key * 3);
        }

        assert_eq!(map.len(), 100);
        for key in 0..100usize {
            assert_eq!(map.get(&key).unwrap(), &(key * 3));
        }
    }

    #[test]
    fn test_all_keys_in_one_chain() {
        let mut map = ChainedMap::new(colliding_hash);
        for key in 0..20usize {
            map.put(key, key + 1);
        }

        assert_eq!(map.len(), 20);
        for key in 0..20usize {
            assert_eq!(map.get(&key).unwrap(), &(key + 1));
        }
    }

    #[test]
    fn test_string_keys() {
        let mut map = ChainedMap::new(string_key_hash);
        map.put(String::from("01"), 'a');
        map.put(String::from("10"), 'b');

        assert_eq!(map.get(&String::from("01")).unwrap(), &'a');
        assert_eq!(map.get(&String::from("10")).unwrap(), &'b');
    }

    #[test]
    fn test_next_prime() {
        assert_eq!(next_prime(2), 2);
        assert_eq!(next_prime(11), 11);
        assert_eq!(next_prime(12), 13);
        assert_eq!(next_prime(22), 23);
        assert_eq!(next_prime(24), 29);
    }
}
