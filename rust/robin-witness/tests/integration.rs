//! End-to-end checks of the witness search against brute-force references.

use robin_witness::{
    best_witness, divisor_sum, par_best_witness, run_search, witness_value, write_report,
    SearchConfig, WitnessReport,
};

/// σ(n) by checking every d in 1..=n.
fn divisor_sum_naive(n: u64) -> u128 {
    (1..=n).filter(|d| n % d == 0).map(|d| d as u128).sum()
}

/// Argmax over the whole range with no running state: smallest n reaching
/// the maximum ratio, computed from the O(n) divisor sum.
fn brute_force_best(max_range: u64, search_start: u64) -> u64 {
    let ratio = |n: u64| divisor_sum_naive(n) as f64 / (n as f64 * (n as f64).ln().ln());
    let mut best_n = search_start;
    let mut best = f64::NEG_INFINITY;
    for n in search_start..max_range {
        let r = ratio(n);
        if r > best {
            best = r;
            best_n = n;
        }
    }
    if best > 0.0 {
        best_n
    } else {
        search_start
    }
}

#[test]
fn test_end_to_end_small_range() {
    let expected = brute_force_best(100, 3);
    assert_eq!(best_witness(100, 3), expected);
    assert_eq!(par_best_witness(100, 3), expected);
}

#[test]
fn test_reference_region() {
    // Past 5040 the record holders are superabundant numbers
    let expected = brute_force_best(12_000, 5_041);
    assert_eq!(expected, 10_080);
    assert_eq!(best_witness(12_000, 5_041), expected);
    assert_eq!(par_best_witness(12_000, 5_041), expected);
}

#[test]
fn test_reference_region_below_robin_bound() {
    // e^γ ≈ 1.7810724; the observed maximum past 5040 stays below it
    let best = best_witness(50_000, 5_041);
    let w = witness_value(best);
    assert!(w < 1.781_072_418, "w({}) = {}", best, w);
    assert!(w > 1.75, "w({}) = {}", best, w);
}

#[test]
fn test_textbook_divisor_sums() {
    let cases: [(i64, u128); 7] = [
        (1, 1),
        (2, 3),
        (6, 12),
        (12, 28),
        (28, 56),
        (97, 98),
        (100, 217),
    ];
    for (n, sigma) in cases {
        assert_eq!(divisor_sum(n), sigma, "σ({})", n);
    }
    assert_eq!(divisor_sum(0), 0);
    assert_eq!(divisor_sum(-28), 0);
}

#[test]
fn test_parallel_agrees_on_wide_range() {
    for (start, end) in [(3u64, 2_000u64), (5_041, 60_000), (1_000, 1_001)] {
        assert_eq!(
            par_best_witness(end, start),
            best_witness(end, start),
            "range {}..{}",
            start,
            end
        );
    }
}

#[test]
fn test_report_written_as_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("report.json");

    let config = SearchConfig::new(30_000, 5_041).parallel(true).threads(2);
    let report = run_search(&config).unwrap();
    write_report(&report, &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let parsed: WitnessReport = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed.best_candidate, report.best_candidate);
    assert_eq!(parsed.best_candidate, best_witness(30_000, 5_041));
    assert_eq!(parsed.best_divisor_sum, divisor_sum(report.best_candidate as i64));
    assert_eq!(parsed.candidates_scanned, 30_000 - 5_041);
    assert_eq!(parsed.threads, Some(2));
    assert!(parsed.parallel);
}
