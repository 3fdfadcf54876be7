//! Operation sequence generators.
//!
//! - [`op_strategy`]: a `proptest` strategy over single operations.
//! - [`op_script`]: a deterministic script from a `ChaCha8Rng` seed, for
//!   benchmarks and regression tests that need the same workload every run.

use proptest::prelude::*;
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::Op;

/// Strategy over single operations with values in `0..64` and indices in
/// `0..max_index`. Pick `max_index` above the expected length to exercise
/// the out-of-range paths.
pub fn op_strategy(max_index: usize) -> impl Strategy<Value = Op<i32>> {
    let max_index = max_index.max(1);
    prop_oneof![
        4 => (0i32..64).prop_map(Op::Push),
        2 => (0..max_index, 0i32..64).prop_map(|(i, v)| Op::Insert(i, v)),
        2 => Just(Op::Pop),
        2 => (0..max_index).prop_map(Op::Remove),
        1 => (0i32..64).prop_map(Op::RemoveItem),
        1 => Just(Op::Clone),
    ]
}

/// Generate `count` operations deterministically from `seed`.
///
/// The generator tracks the length the script implies, so most indices are
/// in range and roughly one in `len + 2` falls just past the end.
pub fn op_script(seed: u64, count: usize) -> Vec<Op<i32>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut len = 0usize;
    let mut ops = Vec::with_capacity(count);
    for _ in 0..count {
        let value = (rng.next_u32() % 1024) as i32;
        let index = (rng.next_u64() % (len as u64 + 2)) as usize;
        let op = match rng.next_u32() % 10 {
            0..=3 => {
                len += 1;
                Op::Push(value)
            }
            4 | 5 => {
                if index <= len {
                    len += 1;
                }
                Op::Insert(index, value)
            }
            6 => {
                len = len.saturating_sub(1);
                Op::Pop
            }
            7 | 8 => {
                if index < len {
                    len -= 1;
                }
                Op::Remove(index)
            }
            // Value matches are not tracked; the estimate only steers indices.
            _ => Op::RemoveItem(value),
        };
        ops.push(op);
    }
    ops
}
