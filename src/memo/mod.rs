//! Shared cost/origin memoization for discovered values

mod core;
mod types;

pub use self::core::Memo;
pub use types::{Entry, Origin, Value};
