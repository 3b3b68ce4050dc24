//! Search parameters and their validation against the witness domain.

use crate::error::WitnessError;
use crate::witness::{MAX_CANDIDATE, MIN_CANDIDATE};

/// Reference upper bound (exclusive) of the search range.
pub const DEFAULT_MAX_RANGE: u64 = 10_000_000;

/// Reference start: first integer past 5040, the largest known n violating
/// Robin's inequality.
pub const DEFAULT_SEARCH_START: u64 = 5041;

/// Parameters for one witness search over `[search_start, max_range)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub max_range: u64,
    pub search_start: u64,
    /// Use the rayon scan instead of the sequential one.
    pub parallel: bool,
    /// Dedicated pool size for the parallel scan; `None` uses the global pool.
    pub threads: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig::new(DEFAULT_MAX_RANGE, DEFAULT_SEARCH_START)
    }
}

impl SearchConfig {
    pub fn new(max_range: u64, search_start: u64) -> Self {
        SearchConfig {
            max_range,
            search_start,
            parallel: false,
            threads: None,
        }
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Number of candidates the scan will evaluate.
    pub fn candidate_count(&self) -> u64 {
        self.max_range.saturating_sub(self.search_start)
    }

    /// Check that every scanned candidate has a finite, exact witness value.
    ///
    /// An empty range is valid and yields `search_start`.
    pub fn validate(&self) -> Result<(), WitnessError> {
        if self.search_start < MIN_CANDIDATE {
            return Err(WitnessError::OutOfDomain(self.search_start));
        }
        if self.max_range > MAX_CANDIDATE + 1 {
            return Err(WitnessError::CandidateTooLarge(
                self.max_range - 1,
                MAX_CANDIDATE,
            ));
        }
        if self.threads == Some(0) {
            return Err(WitnessError::InvalidThreads);
        }
        Ok(())
    }
}
