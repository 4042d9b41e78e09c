use crate::filter::constants::DEFAULT_MAX_MAGNITUDE;

/// How a generation's shards are executed.
///
/// Both modes give each worker its own memo snapshot and collect local
/// results for a single-threaded merge; `Sequential` just runs shards in
/// order, which makes runs reproducible end to end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    Parallel,
    Sequential,
}

/// Tuning knobs for a search run
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Upper bound on digit uses; the search stops at the first derivation
    /// at or under this cost.
    pub max_cost: u32,
    /// How many unary applications may be chained onto one new value.
    /// Zero disables the unary closure entirely.
    pub max_unary_depth: u32,
    pub workers: usize,
    pub mode: ExecutionMode,
    /// Magnitude bound fed to the value filter.
    pub max_magnitude: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_cost: 5,
            max_unary_depth: 1,
            workers: 8,
            mode: ExecutionMode::Parallel,
            max_magnitude: DEFAULT_MAX_MAGNITUDE,
        }
    }
}
