use std::sync::atomic::{AtomicBool, Ordering};

use log::debug;
use ordered_float::OrderedFloat;

use crate::filter::ValueFilter;
use crate::memo::{Memo, Origin, Value};
use crate::ops::{BinaryOp, UnaryOp};
use crate::search::closure::expand_unary;

/// One worker's pass over its shard of left operands against the full known
/// value set, run against a private snapshot of the memo.
pub struct FrontierTask<'a> {
    pub target: Value,
    pub lhs: &'a [Value],
    pub rhs: &'a [Value],
    pub unary_ops: &'a [UnaryOp],
    pub binary_ops: &'a [BinaryOp],
    pub filter: &'a ValueFilter,
    pub max_cost: u32,
    pub max_unary_depth: u32,
}

impl FrontierTask<'_> {
    /// Combines every `(left, right)` pair within the cost bound through the
    /// registered binary operators, growing the local memo. Each admitted
    /// result is immediately closed under the unary operators.
    ///
    /// Recording the target at or under the cost bound ends the pass early
    /// and raises `found` so sibling workers can cut theirs short too; the
    /// signal is cooperative only, never required for correctness.
    pub fn run(&self, mut memo: Memo, found: &AtomicBool) -> Memo {
        for left in self.lhs {
            if found.load(Ordering::Relaxed) {
                debug!("Target found elsewhere; abandoning remaining left operands");
                break;
            }

            let Some(left_cost) = memo.cost_of(*left) else {
                continue;
            };

            for right in self.rhs {
                let Some(right_cost) = memo.cost_of(*right) else {
                    continue;
                };
                let cost = left_cost + right_cost;
                if cost > self.max_cost {
                    continue;
                }

                for op in self.binary_ops {
                    let Some(result) = op.apply(left.into_inner(), right.into_inner()) else {
                        continue;
                    };
                    if !self.filter.is_admissible(result) {
                        continue;
                    }

                    let value = OrderedFloat(result);
                    if !memo.improves(value, cost, self.max_cost) {
                        continue;
                    }

                    memo.record(
                        value,
                        cost,
                        Origin::Binary {
                            op: *op,
                            left: *left,
                            right: *right,
                        },
                    );
                    expand_unary(
                        &mut memo,
                        result,
                        cost,
                        self.unary_ops,
                        self.filter,
                        self.max_cost,
                        self.max_unary_depth,
                    );

                    if memo
                        .cost_of(self.target)
                        .is_some_and(|c| c <= self.max_cost)
                    {
                        debug!("Worker reached target {} at cost <= {}", self.target, self.max_cost);
                        found.store(true, Ordering::Relaxed);
                        return memo;
                    }
                }
            }
        }

        memo
    }
}
