//! Tchisla - a solver for digit-construction puzzles
//!
//! Given a base digit `x` and a target value `y`, this library searches for a
//! way to build `y` from at most `max_c` copies of `x`, combined through a
//! fixed set of unary (square root, factorial, negation) and binary (add,
//! subtract, multiply, exact divide, power, root) operators. The search is
//! satisficing: it stops at the first derivation within the bound, which is
//! not guaranteed to be the cheapest one overall.

pub mod filter;
pub mod memo;
pub mod ops;
pub mod report;
pub mod search;
pub mod utils;

// Re-export the main public API
pub use filter::ValueFilter;
pub use memo::{Entry, Memo, Origin, Value};
pub use ops::{BinaryOp, UnaryOp};
pub use search::{ExecutionMode, SearchConfig, SearchError, SearchOutcome, Solver};
pub use utils::{UtilsError, validate_base_digit};

/// Find a derivation of `target` using at most `max_cost` copies of `digit`
///
/// This is a convenience function that runs a default-configured solver and
/// reconstructs the proof tree on success.
///
/// # Returns
///
/// * `Ok(Some(layers))` - depth-grouped proof lines for a found derivation
/// * `Ok(None)` - no derivation within the cost bound
/// * `Err(SearchError)` - invalid input or worker pool failure
///
/// # Errors
///
/// This function will return an error if:
/// * `digit` is not between 1 and 9
/// * the worker thread pool cannot be built
///
/// # Examples
///
/// ```
/// use tchisla::find_derivation;
///
/// // Two sevens make fourteen
/// match find_derivation(7, 14, 2) {
///     Ok(Some(layers)) => assert!(!layers.is_empty()),
///     Ok(None) => panic!("expected a derivation"),
///     Err(e) => panic!("solver error: {}", e),
/// }
/// ```
pub fn find_derivation(
    digit: u32,
    target: i64,
    max_cost: u32,
) -> Result<Option<Vec<Vec<String>>>, SearchError> {
    let config = SearchConfig {
        max_cost,
        ..SearchConfig::default()
    };
    let solver = Solver::new(config);
    let outcome = solver.solve(digit, target as f64)?;

    if outcome.succeeded() {
        Ok(Some(report::reconstruct(target as f64, &outcome.memo)))
    } else {
        Ok(None)
    }
}
