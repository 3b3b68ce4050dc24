//! Timed search runs and their JSON report.

use std::path::Path;
use std::time::Instant;

use tracing::{info, warn};

use crate::arith::divisor_sum_u64;
use crate::config::SearchConfig;
use crate::error::WitnessError;
use crate::search::{par_scan_best, scan_best, Best};
use crate::witness::witness_value;

/// Outcome of one configured search.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct WitnessReport {
    pub max_range: u64,
    pub search_start: u64,
    pub best_candidate: u64,
    pub best_score: f64,
    /// σ(best_candidate); a string in JSON since it can exceed 2^64.
    #[serde(with = "u128_string")]
    pub best_divisor_sum: u128,
    pub candidates_scanned: u64,
    pub parallel: bool,
    pub threads: Option<usize>,
    pub wall_seconds: f64,
    pub candidates_per_second: f64,
}

/// Validate `config`, run the scan it selects, and time it.
pub fn run_search(config: &SearchConfig) -> Result<WitnessReport, WitnessError> {
    config.validate()?;

    let range = config.search_start..config.max_range;
    let scanned = config.candidate_count();
    if scanned == 0 {
        warn!(
            search_start = config.search_start,
            max_range = config.max_range,
            "empty search range"
        );
    }
    info!(
        search_start = config.search_start,
        max_range = config.max_range,
        parallel = config.parallel,
        "starting witness search"
    );

    let start = Instant::now();
    let best: Best = match (config.parallel, config.threads) {
        (false, _) => scan_best(range, witness_value),
        (true, None) => par_scan_best(range, witness_value),
        (true, Some(threads)) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()?;
            pool.install(|| par_scan_best(range, witness_value))
        }
    };
    let wall_seconds = start.elapsed().as_secs_f64();

    let candidates_per_second = if wall_seconds > 0.0 {
        scanned as f64 / wall_seconds
    } else {
        0.0
    };

    info!(
        candidate = best.candidate,
        score = best.score,
        wall_seconds,
        "witness search finished"
    );

    Ok(WitnessReport {
        max_range: config.max_range,
        search_start: config.search_start,
        best_candidate: best.candidate,
        best_score: best.score,
        best_divisor_sum: divisor_sum_u64(best.candidate),
        candidates_scanned: scanned,
        parallel: config.parallel,
        threads: config.threads,
        wall_seconds,
        candidates_per_second,
    })
}

/// Write `report` as pretty JSON, creating parent directories.
pub fn write_report(report: &WitnessReport, path: impl AsRef<Path>) -> Result<(), WitnessError> {
    let path = path.as_ref();
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)?;
        }
    }
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json)?;
    info!(path = %path.display(), "report written");
    Ok(())
}

mod u128_string {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &u128, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u128, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
