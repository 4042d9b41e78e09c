use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns an error if `digit` is not a single non-zero decimal digit.
pub fn validate_base_digit(digit: u32) -> Result<(), UtilsError> {
    debug!("Validating base digit: {}", digit);

    if !(1..=9).contains(&digit) {
        warn!("Base digit out of range: {}", digit);
        return Err(UtilsError::InvalidBaseDigit(digit));
    }

    Ok(())
}

/// # Errors
///
/// Returns an error if the cost bound is zero or no workers are requested.
pub fn validate_bounds(max_cost: u32, workers: usize) -> Result<(), UtilsError> {
    debug!(
        "Validating search bounds: max_cost={}, workers={}",
        max_cost, workers
    );

    if max_cost == 0 {
        warn!("Cost bound must be positive");
        return Err(UtilsError::InvalidCostBound(max_cost));
    }

    if workers == 0 {
        warn!("Worker count must be positive");
        return Err(UtilsError::InvalidWorkerCount);
    }

    Ok(())
}
