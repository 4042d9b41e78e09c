use thiserror::Error;

/// Errors that can occur in utility functions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UtilsError {
    #[error("Base digit must be between 1 and 9, got {0}")]
    InvalidBaseDigit(u32),
    #[error("Repeat count must be at least 1, got {0}")]
    InvalidRepeatCount(u32),
    #[error("Cost bound must be at least 1, got {0}")]
    InvalidCostBound(u32),
    #[error("Worker count must be at least 1")]
    InvalidWorkerCount,
}
