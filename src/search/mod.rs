//! Iterative-deepening search over constructible values

mod closure;
mod config;
mod driver;
mod errors;
mod frontier;

pub use closure::expand_unary;
pub use config::{ExecutionMode, SearchConfig};
pub use driver::{SearchOutcome, Solver};
pub use errors::SearchError;
pub use frontier::FrontierTask;

#[cfg(test)]
mod tests;
