use log::debug;

use crate::filter::constants::{
    DEFAULT_MAX_MAGNITUDE, MAX_POWER_EXPONENT, POWER_INTEGRAL_TOLERANCE,
};

#[inline]
pub(crate) fn is_integer(value: f64) -> bool {
    if value.abs() > 2_f64.powi(52) {
        true
    } else {
        (value - value.round()).abs() < f64::EPSILON
    }
}

/// Decides which values are worth tracking at all.
///
/// Only "power-integral" values are kept: some power `v^i` with `i` in
/// `1..=MAX_POWER_EXPONENT` must land on an integer within floating
/// tolerance. That keeps integers and integer roots of integers and drops
/// arbitrary irrationals before they flood the memo. A magnitude bound
/// prunes astronomically large or small values; zero is always admissible.
#[derive(Debug, Clone)]
pub struct ValueFilter {
    max_magnitude: f64,
}

impl ValueFilter {
    pub fn new(max_magnitude: f64) -> Self {
        Self { max_magnitude }
    }

    pub fn is_admissible(&self, value: f64) -> bool {
        if value.is_nan() || value.is_infinite() {
            return false;
        }

        if !is_power_integral(value) {
            debug!("Rejecting non-power-integral value: {}", value);
            return false;
        }

        if value == 0.0 {
            return true;
        }

        value.abs().ln().abs() < self.max_magnitude.ln()
    }
}

impl Default for ValueFilter {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_MAGNITUDE)
    }
}

fn is_power_integral(value: f64) -> bool {
    for exponent in 1..=MAX_POWER_EXPONENT {
        let power = value.powi(exponent);
        if !power.is_finite() {
            return false;
        }
        if power.abs() > 2_f64.powi(52) {
            return true;
        }
        if (power - power.round()).abs() < POWER_INTEGRAL_TOLERANCE {
            return true;
        }
    }
    false
}
