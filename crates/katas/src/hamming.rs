//! Hamming numbers: positive integers of the form 2^i * 3^j * 5^k.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};

/// The n-th smallest Hamming number (1-based); `hamming(1) == 1`.
pub fn hamming(n: usize) -> u64 {
    let mut seen = HashSet::new();
    let mut heap = BinaryHeap::new();
    heap.push(Reverse(1u64));
    seen.insert(1u64);

    let mut current = 0;
    for _ in 0..n {
        let Some(Reverse(smallest)) = heap.pop() else {
            break;
        };
        current = smallest;
        for factor in [2, 3, 5] {
            // skip candidates past u64 range; they are far beyond any
            // reachable rank anyway
            if let Some(next) = smallest.checked_mul(factor) {
                if seen.insert(next) {
                    heap.push(Reverse(next));
                }
            }
        }
    }
    current
}
