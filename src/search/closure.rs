use std::collections::VecDeque;

use ordered_float::OrderedFloat;

use crate::filter::ValueFilter;
use crate::memo::{Memo, Origin};
use crate::ops::UnaryOp;

/// Applies every registered unary operator to `seed` and, transitively, to
/// each admitted result, chaining at most `max_depth` applications.
///
/// Unary operators consume no digits, so every result keeps the seed's cost.
/// The worklist carries `(value, depth)` pairs; `max_depth == 0` makes this
/// a no-op.
pub fn expand_unary(
    memo: &mut Memo,
    seed: f64,
    cost: u32,
    ops: &[UnaryOp],
    filter: &ValueFilter,
    max_cost: u32,
    max_depth: u32,
) {
    let mut worklist: VecDeque<(f64, u32)> = VecDeque::new();
    worklist.push_back((seed, 0));

    while let Some((value, depth)) = worklist.pop_front() {
        if depth >= max_depth {
            continue;
        }

        for op in ops {
            let Some(result) = op.apply(value) else {
                continue;
            };
            if !filter.is_admissible(result) {
                continue;
            }
            if !memo.improves(OrderedFloat(result), cost, max_cost) {
                continue;
            }

            memo.record(
                OrderedFloat(result),
                cost,
                Origin::Unary {
                    op: *op,
                    source: OrderedFloat(value),
                },
            );
            worklist.push_back((result, depth + 1));
        }
    }
}
