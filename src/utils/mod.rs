//! Utils module split into submodules

mod digits;
mod errors;
mod validation;

pub use digits::{format_number, repeated_digit};
pub use errors::UtilsError;
pub use validation::{validate_base_digit, validate_bounds};
