//! Error type for configured witness searches.

/// Errors that can occur while validating or running a witness search.
#[derive(Debug, thiserror::Error)]
pub enum WitnessError {
    #[error("witness value undefined for n = {0} (ln ln n needs n >= 3)")]
    OutOfDomain(u64),

    #[error("candidate {0} exceeds the largest supported candidate {1}")]
    CandidateTooLarge(u64, u64),

    #[error("thread count must be at least 1")]
    InvalidThreads,

    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
