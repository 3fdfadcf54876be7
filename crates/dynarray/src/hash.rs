//! Deterministic hashing for array contents.
//!
//! Element hashes come from FNV-1a so that `hash_code()` is stable across
//! runs and processes; `std`'s `RandomState` keys differ per process. The
//! array hash folds element hashes with a polynomial of multiplier 31,
//! which makes it order-sensitive.

use std::hash::{Hash, Hasher};

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

/// Initial accumulator for an array hash. An empty array hashes to this.
pub const HASH_SEED: u64 = 1;

/// Per-element multiplier of the array hash polynomial.
pub const HASH_MULTIPLIER: u64 = 31;

/// A [`Hasher`] implementing 64-bit FNV-1a.
///
/// Not cryptographically secure. Used only to turn an element's `Hash`
/// output into a stable `u64`.
#[derive(Clone, Copy, Debug)]
pub struct Fnv1aHasher {
    state: u64,
}

impl Fnv1aHasher {
    /// Create a hasher at the FNV-1a offset basis.
    pub fn new() -> Self {
        Self { state: FNV_OFFSET }
    }
}

impl Default for Fnv1aHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher for Fnv1aHasher {
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.state = (self.state ^ b as u64).wrapping_mul(FNV_PRIME);
        }
    }

    #[inline]
    fn finish(&self) -> u64 {
        self.state
    }
}

/// Hash a single element with [`Fnv1aHasher`].
pub fn element_hash<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = Fnv1aHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Fold one element hash into an array hash accumulator.
#[inline]
pub fn combine(acc: u64, element_hash: u64) -> u64 {
    acc.wrapping_mul(HASH_MULTIPLIER).wrapping_add(element_hash)
}
