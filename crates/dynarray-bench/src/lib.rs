//! Benchmark workloads for the dynarray container.
//!
//! - [`filled`]: an array of `len` sequential values grown from capacity 0
//! - [`mixed_workload`]: a seeded operation script from `dynarray-test-utils`
//! - [`run_script`]: apply a script to an array and return its final length

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use dynarray::DynamicArray;
use dynarray_test_utils::{apply, op_script, Op};

/// Build an array of `0..len` by repeated push from capacity 0, so the
/// result has passed through every doubling step.
pub fn filled(len: usize) -> DynamicArray<u64> {
    let mut array = DynamicArray::with_capacity(0);
    for i in 0..len as u64 {
        array.push(i);
    }
    array
}

/// A deterministic mixed workload of `count` operations.
pub fn mixed_workload(seed: u64, count: usize) -> Vec<Op<i32>> {
    op_script(seed, count)
}

/// Apply every op in `ops` to `array`, returning the final length.
pub fn run_script(array: &mut DynamicArray<i32>, ops: &[Op<i32>]) -> usize {
    for op in ops {
        apply(array, op);
    }
    array.len()
}
