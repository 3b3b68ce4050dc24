//! Robin witness search — driver.
//!
//! Scans [start, max-range) for the largest σ(n) / (n ln ln n), prints the
//! winning candidate and the wall time, and optionally saves a JSON report.

mod cli;

use clap::Parser;
use cli::Cli;
use robin_witness::{run_search, write_report, WitnessError};

fn main() {
    let cli = Cli::parse();
    cli.init_logging();

    if let Err(err) = run(&cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), WitnessError> {
    let config = cli.search_config();
    let report = run_search(&config)?;

    println!("The best witness is: {}", report.best_candidate);
    println!("Witness value:       {:.12}", report.best_score);
    println!("Divisor sum:         {}", report.best_divisor_sum);
    println!(
        "Scanned:             {} candidates ({:.0}/s)",
        report.candidates_scanned, report.candidates_per_second
    );
    println!("Took {:.3}s", report.wall_seconds);

    if let Some(path) = &cli.json {
        write_report(&report, path)?;
        println!("\nResults saved to {}", path.display());
    }

    Ok(())
}
