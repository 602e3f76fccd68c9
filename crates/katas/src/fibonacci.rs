//! Exact Fibonacci numbers by iterative fast doubling, O(log n) big-integer
//! multiplications. Handles negative indices via fib(-n) = (-1)^(n+1) fib(n).

use num_bigint::BigInt;
use num_traits::{One, Zero};

pub fn fib(n: i64) -> BigInt {
    if n < 0 {
        let result = fib_non_negative(n.unsigned_abs());
        // even negative index flips the sign, odd keeps it
        if n % 2 == 0 { -result } else { result }
    } else {
        fib_non_negative(n as u64)
    }
}

// Walk the bits of n from the top, doubling with
//   F(2k)   = F(k) * (2*F(k+1) - F(k))
//   F(2k+1) = F(k)^2 + F(k+1)^2
fn fib_non_negative(n: u64) -> BigInt {
    let mut a = BigInt::zero(); // F(0)
    let mut b = BigInt::one(); // F(1)
    for i in (0..u64::BITS - n.leading_zeros()).rev() {
        let c = &a * ((&b << 1) - &a);
        let d = &a * &a + &b * &b;
        if (n >> i) & 1 == 1 {
            b = c + &d;
            a = d;
        } else {
            a = c;
            b = d;
        }
    }
    a
}
