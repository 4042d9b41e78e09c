//! Admissibility filter over the value search space

pub mod constants;
mod core;

pub use self::core::ValueFilter;
pub(crate) use self::core::is_integer;
