use log::debug;

use crate::utils::errors::UtilsError;

/// Builds the number formed by repeating `digit` a total of `repeats` times,
/// e.g. `repeated_digit(7, 3) == 777`.
///
/// # Errors
///
/// Returns an error if `digit` is not in `1..=9` or `repeats` is zero.
pub fn repeated_digit(digit: u32, repeats: u32) -> Result<f64, UtilsError> {
    if !(1..=9).contains(&digit) {
        return Err(UtilsError::InvalidBaseDigit(digit));
    }
    if repeats == 0 {
        return Err(UtilsError::InvalidRepeatCount(repeats));
    }

    let mut value = 0.0_f64;
    for _ in 0..repeats {
        value = value * 10.0 + f64::from(digit);
    }
    debug!("repeated_digit({}, {}) = {}", digit, repeats, value);
    Ok(value)
}

/// Formats a value for report lines: integers print without a trailing `.0`.
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 2_f64.powi(52) {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
