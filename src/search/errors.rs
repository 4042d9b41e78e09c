use thiserror::Error;

use crate::utils::UtilsError;

/// Errors that abort a search run before or during setup. Per-candidate
/// numeric failures are not errors; they are filtered out silently.
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Invalid search input: {0}")]
    Input(#[from] UtilsError),
    #[error("Failed to build worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
}
