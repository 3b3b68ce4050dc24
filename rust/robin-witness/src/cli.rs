//! Command-line arguments for the witness search.

use std::path::PathBuf;

use clap::Parser;
use robin_witness::{SearchConfig, DEFAULT_MAX_RANGE, DEFAULT_SEARCH_START};

/// Find the integer maximizing σ(n) / (n ln ln n) over [start, max-range)
#[derive(Parser, Debug)]
#[command(name = "robin-witness")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Exclusive upper bound of the search range
    #[arg(long, default_value_t = DEFAULT_MAX_RANGE)]
    pub max_range: u64,

    /// First candidate (must be at least 3)
    #[arg(long, default_value_t = DEFAULT_SEARCH_START)]
    pub start: u64,

    /// Scan candidates in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Worker threads for the parallel scan (implies --parallel)
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,

    /// Write a JSON report to this path
    #[arg(long, value_name = "PATH")]
    pub json: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all logging except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn search_config(&self) -> SearchConfig {
        let mut config = SearchConfig::new(self.max_range, self.start)
            .parallel(self.parallel || self.threads.is_some());
        if let Some(threads) = self.threads {
            config = config.threads(threads);
        }
        config
    }

    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        use tracing_subscriber::{fmt, EnvFilter};

        let level = if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        };

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }
}
