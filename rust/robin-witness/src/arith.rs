//! Divisor-sum primitives for u64 candidates with u128 accumulation.

/// Sum of all positive divisors of `n`, including 1 and `n` itself.
///
/// Non-positive input is tolerated and yields 0.
pub fn divisor_sum(n: i64) -> u128 {
    if n <= 0 {
        return 0;
    }
    divisor_sum_u64(n as u64)
}

/// σ(n) for unsigned `n` by trial division up to ⌊√n⌋.
///
/// Each divisor `i ≤ √n` contributes itself and its cofactor `n / i`; the
/// root of a perfect square is counted once. σ(0) is 0.
#[inline]
pub fn divisor_sum_u64(n: u64) -> u128 {
    if n == 0 {
        return 0;
    }
    // Exact integer root, so the loop never stops one short of √n.
    let root = num_integer::sqrt(n);
    let mut sum = 0u128;
    for i in 1..=root {
        if n % i == 0 {
            sum += i as u128;
            let pair = n / i;
            if pair != i {
                sum += pair as u128;
            }
        }
    }
    sum
}
