// Configuration constants for the value filter
pub const DEFAULT_MAX_MAGNITUDE: f64 = 1e100;
pub const MAX_POWER_EXPONENT: i32 = 9;
pub const POWER_INTEGRAL_TOLERANCE: f64 = 1e-12;
