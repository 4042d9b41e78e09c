// Largest n with n! representable as a finite f64
pub const MAX_FACTORIAL_ARG: f64 = 170.0;
