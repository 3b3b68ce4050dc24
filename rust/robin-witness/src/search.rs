//! Linear argmax scan of the witness value over `[search_start, max_range)`.
//!
//! The comparison is strictly greater-than, so the first candidate to reach
//! a maximum keeps it. The parallel scan reduces with the same rule and
//! returns the sequential answer for any thread count.

use std::ops::Range;

use rayon::prelude::*;
use tracing::debug;

use crate::witness::witness_value;

/// Running maximum of a scan.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Best {
    pub candidate: u64,
    pub score: f64,
}

impl Best {
    /// State before any candidate is seen: score 0.0 at the range start.
    pub fn initial(search_start: u64) -> Self {
        Best {
            candidate: search_start,
            score: 0.0,
        }
    }

    /// Take `(candidate, score)` if it strictly beats the current score.
    /// NaN never wins.
    #[inline]
    pub fn offer(&mut self, candidate: u64, score: f64) -> bool {
        if score > self.score {
            self.candidate = candidate;
            self.score = score;
            true
        } else {
            false
        }
    }

    /// Order-independent merge: higher score, then smaller candidate.
    fn prefer(self, other: Best) -> Best {
        if other.score > self.score
            || (other.score == self.score && other.candidate < self.candidate)
        {
            other
        } else {
            self
        }
    }
}

/// Sequential scan of `range` with an arbitrary scorer.
pub fn scan_best(range: Range<u64>, score: impl Fn(u64) -> f64) -> Best {
    let mut best = Best::initial(range.start);
    for candidate in range {
        let s = score(candidate);
        if best.offer(candidate, s) {
            debug!(candidate, score = s, "new best witness");
        }
    }
    best
}

/// Parallel scan of `range`; same result as [`scan_best`].
///
/// Only scores above the initial 0.0 can ever replace the start state, so
/// everything else is dropped before the reduction.
pub fn par_scan_best<F>(range: Range<u64>, score: F) -> Best
where
    F: Fn(u64) -> f64 + Sync + Send,
{
    let start = range.start;
    if range.is_empty() {
        return Best::initial(start);
    }
    range
        .into_par_iter()
        .filter_map(|candidate| {
            let s = score(candidate);
            (s > 0.0).then_some(Best {
                candidate,
                score: s,
            })
        })
        .reduce_with(Best::prefer)
        .unwrap_or_else(|| Best::initial(start))
}

/// Candidate in `[search_start, max_range)` with the largest witness value.
///
/// Returns `search_start` when the range is empty. Candidates below 3 are
/// not guarded here; see [`crate::SearchConfig::validate`].
pub fn best_witness(max_range: u64, search_start: u64) -> u64 {
    scan_best(search_start..max_range, witness_value).candidate
}

/// Parallel [`best_witness`] on the current rayon pool.
pub fn par_best_witness(max_range: u64, search_start: u64) -> u64 {
    par_scan_best(search_start..max_range, witness_value).candidate
}
