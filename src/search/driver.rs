use std::collections::HashSet;
use std::sync::atomic::AtomicBool;
use std::time::Instant;

use log::info;
use ordered_float::OrderedFloat;
use rayon::prelude::*;

use crate::filter::ValueFilter;
use crate::memo::{Memo, Origin, Value};
use crate::ops::{BinaryOp, UnaryOp};
use crate::search::closure::expand_unary;
use crate::search::config::{ExecutionMode, SearchConfig};
use crate::search::errors::SearchError;
use crate::search::frontier::FrontierTask;
use crate::utils::{repeated_digit, validate_base_digit, validate_bounds};

/// Result of a search run: the final memo plus the target's recorded cost
/// (`None` when no derivation within the bound was found).
#[derive(Debug)]
pub struct SearchOutcome {
    pub memo: Memo,
    pub cost: Option<u32>,
}

impl SearchOutcome {
    pub fn succeeded(&self) -> bool {
        self.cost.is_some()
    }
}

/// Iterative-deepening driver over cost generations.
///
/// Seeds the memo with the base digit repeated 1..=max_cost times, then
/// repeatedly snapshots the known values, fans the not-yet-combined subset
/// out to workers, and merges their local memos back, stopping once the
/// target is recorded within the cost bound. The first derivation found
/// wins; the search is satisficing, not minimal.
pub struct Solver {
    config: SearchConfig,
    unary_ops: Vec<UnaryOp>,
    binary_ops: Vec<BinaryOp>,
    filter: ValueFilter,
}

impl Solver {
    pub fn new(config: SearchConfig) -> Self {
        Self::with_operators(config, UnaryOp::ALL.to_vec(), BinaryOp::ALL.to_vec())
    }

    /// Builds a solver with an explicit operator registry. The slices keep
    /// their order, which fixes the tie-break between equal-cost derivations.
    pub fn with_operators(
        config: SearchConfig,
        unary_ops: Vec<UnaryOp>,
        binary_ops: Vec<BinaryOp>,
    ) -> Self {
        let filter = ValueFilter::new(config.max_magnitude);
        Self {
            config,
            unary_ops,
            binary_ops,
            filter,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Runs the search for `target` constructed from `digit`.
    ///
    /// # Errors
    ///
    /// Returns an error for invalid inputs (digit outside 1..=9, zero cost
    /// bound or worker count) or when the worker pool cannot be built.
    /// Exhausting the search space is not an error; it yields an outcome
    /// with `cost: None`.
    pub fn solve(&self, digit: u32, target: f64) -> Result<SearchOutcome, SearchError> {
        validate_base_digit(digit)?;
        validate_bounds(self.config.max_cost, self.config.workers)?;

        let target_value: Value = OrderedFloat(target);
        let mut memo = Memo::new();
        self.seed(digit, &mut memo)?;

        info!(
            "Searching for {} from digit {} within cost {} ({} workers)",
            target, digit, self.config.max_cost, self.config.workers
        );

        let pool = match self.config.mode {
            ExecutionMode::Parallel => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(self.config.workers)
                    .build()?,
            ),
            ExecutionMode::Sequential => None,
        };

        let start = Instant::now();
        let mut visited: HashSet<Value> = HashSet::new();

        for generation in 0..self.config.max_cost.saturating_sub(1) {
            if self.target_reached(&memo, target_value) {
                break;
            }

            let rhs = memo.admissible_values(&self.filter);
            let lhs: Vec<Value> = rhs
                .iter()
                .copied()
                .filter(|value| !visited.contains(value))
                .collect();
            visited.extend(lhs.iter().copied());

            info!(
                "[{}] n(lhs):{}; n(rhs):{}",
                generation,
                lhs.len(),
                rhs.len()
            );

            let shards = split_shards(&lhs, self.config.workers);
            let found = AtomicBool::new(false);

            let locals: Vec<Memo> = match &pool {
                Some(pool) => pool.install(|| {
                    shards
                        .par_iter()
                        .map(|shard| self.run_shard(target_value, shard, &rhs, &memo, &found))
                        .collect()
                }),
                None => shards
                    .iter()
                    .map(|shard| self.run_shard(target_value, shard, &rhs, &memo, &found))
                    .collect(),
            };

            for local in locals {
                memo.merge_from(local);
            }

            if self.target_reached(&memo, target_value) {
                info!("Target reached in generation {}", generation);
                break;
            }
        }

        info!("Search took {:.2} seconds", start.elapsed().as_secs_f64());

        let cost = memo
            .cost_of(target_value)
            .filter(|&c| c <= self.config.max_cost);
        Ok(SearchOutcome { memo, cost })
    }

    /// Registers the base digit repeated 1..=max_cost times and closes each
    /// seed under the unary operators.
    fn seed(&self, digit: u32, memo: &mut Memo) -> Result<(), SearchError> {
        for repeats in 1..=self.config.max_cost {
            let value = repeated_digit(digit, repeats)?;
            if !self.filter.is_admissible(value) {
                continue;
            }

            memo.record(OrderedFloat(value), repeats, Origin::Base { digit, repeats });
            expand_unary(
                memo,
                value,
                repeats,
                &self.unary_ops,
                &self.filter,
                self.config.max_cost,
                self.config.max_unary_depth,
            );
        }
        Ok(())
    }

    fn run_shard(
        &self,
        target: Value,
        shard: &[Value],
        rhs: &[Value],
        memo: &Memo,
        found: &AtomicBool,
    ) -> Memo {
        let task = FrontierTask {
            target,
            lhs: shard,
            rhs,
            unary_ops: &self.unary_ops,
            binary_ops: &self.binary_ops,
            filter: &self.filter,
            max_cost: self.config.max_cost,
            max_unary_depth: self.config.max_unary_depth,
        };
        task.run(memo.clone(), found)
    }

    fn target_reached(&self, memo: &Memo, target: Value) -> bool {
        memo
            .cost_of(target)
            .is_some_and(|cost| cost <= self.config.max_cost)
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

/// Splits the left-operand set into at most `workers` similarly sized shards.
fn split_shards(values: &[Value], workers: usize) -> Vec<Vec<Value>> {
    if values.is_empty() {
        return Vec::new();
    }
    let chunk_size = values.len().div_ceil(workers).max(1);
    values.chunks(chunk_size).map(<[Value]>::to_vec).collect()
}
