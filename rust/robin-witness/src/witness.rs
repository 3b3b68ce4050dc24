//! The abundancy witness σ(n) / (n · ln ln n).

use crate::arith::divisor_sum_u64;
use crate::error::WitnessError;

/// Smallest n with ln ln n > 0 (ln 2 < 1 < ln 3).
pub const MIN_CANDIDATE: u64 = 3;

/// Largest n for which `n as f64` is exact.
pub const MAX_CANDIDATE: u64 = 1 << 53;

/// Witness value of `n`.
///
/// No domain guard: below [`MIN_CANDIDATE`] the IEEE result passes through
/// unchanged (n = 2 is negative, n = 1 is -0.0, n = 0 is NaN).
#[inline]
pub fn witness_value(n: u64) -> f64 {
    witness_value_with(n, divisor_sum_u64)
}

/// Witness value with a caller-supplied divisor-sum function.
#[inline]
pub fn witness_value_with(n: u64, sigma: impl Fn(u64) -> u128) -> f64 {
    let nf = n as f64;
    let denominator = nf * nf.ln().ln();
    sigma(n) as f64 / denominator
}

/// Witness value restricted to `MIN_CANDIDATE..=MAX_CANDIDATE`.
pub fn checked_witness_value(n: u64) -> Result<f64, WitnessError> {
    if n < MIN_CANDIDATE {
        return Err(WitnessError::OutOfDomain(n));
    }
    if n > MAX_CANDIDATE {
        return Err(WitnessError::CandidateTooLarge(n, MAX_CANDIDATE));
    }
    Ok(witness_value(n))
}
