//! Count of 1-bits over a numeric range in O(log n), no iteration over the
//! segment itself.

/// Sum of set bits in the binary representations of every integer in
/// `[left, right]`.
pub fn count_ones(left: u64, right: u64) -> u128 {
    let below = left.checked_sub(1).map_or(0, count_up_to);
    count_up_to(right) - below
}

// Set bits over [0, n] via the most-significant-bit recurrence:
// count(n) = p * 2^(p-1) + (n - 2^p + 1) + count(n - 2^p), with p = msb(n).
// The first term covers all bits below the MSB in [0, 2^p), the second the
// MSB itself in [2^p, n].
fn count_up_to(n: u64) -> u128 {
    if n == 0 {
        return 0;
    }
    let p = 63 - u64::from(n.leading_zeros());
    let power = 1u64 << p;
    let base = u128::from(p) * u128::from(power >> 1);
    let high = u128::from(n - power + 1);
    base + high + count_up_to(n - power)
}
