//! Robin witness search.
//!
//! Scans an integer range for the maximum of the abundancy witness
//! σ(n) / (n · ln ln n), the ratio bounded by Robin's inequality
//! σ(n) < e^γ · n · ln ln n for n > 5040. The search locates empirical
//! maxima only; it does not test the inequality.

pub mod arith;
pub mod config;
pub mod error;
pub mod report;
pub mod search;
pub mod witness;

pub use arith::{divisor_sum, divisor_sum_u64};
pub use config::{SearchConfig, DEFAULT_MAX_RANGE, DEFAULT_SEARCH_START};
pub use error::WitnessError;
pub use report::{run_search, write_report, WitnessReport};
pub use search::{best_witness, par_best_witness, par_scan_best, scan_best, Best};
pub use witness::{
    checked_witness_value, witness_value, witness_value_with, MAX_CANDIDATE, MIN_CANDIDATE,
};
