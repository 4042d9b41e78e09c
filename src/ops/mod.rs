//! Registered unary and binary operators
//!
//! Operators are fixed enums iterated in registration order (`ALL`), so the
//! search applies them deterministically. An operator returns `None` when the
//! result is mathematically undefined; such candidates are silently dropped.

pub mod constants;

mod binary;
mod unary;

pub use binary::BinaryOp;
pub use unary::UnaryOp;
