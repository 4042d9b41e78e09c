use std::sync::atomic::{AtomicBool, Ordering};

use ordered_float::OrderedFloat;

use crate::filter::ValueFilter;
use crate::memo::{Memo, Origin, Value};
use crate::ops::{BinaryOp, UnaryOp};
use crate::search::{ExecutionMode, FrontierTask, SearchConfig, Solver, expand_unary};
use crate::utils::repeated_digit;

fn sequential_config(max_cost: u32) -> SearchConfig {
    SearchConfig {
        max_cost,
        workers: 2,
        mode: ExecutionMode::Sequential,
        ..SearchConfig::default()
    }
}

/// Replays a recorded derivation chain back down to its base records.
fn replay(memo: &Memo, value: Value) -> f64 {
    let entry = memo.get(value).expect("value must be recorded");
    match &entry.origin {
        Origin::Base { digit, repeats } => {
            repeated_digit(*digit, *repeats).expect("base record must be valid")
        }
        Origin::Unary { op, source } => op
            .apply(replay(memo, *source))
            .expect("recorded unary op must be defined on its source"),
        Origin::Binary { op, left, right } => op
            .apply(replay(memo, *left), replay(memo, *right))
            .expect("recorded binary op must be defined on its operands"),
    }
}

#[test]
fn test_expand_unary_records_factorial() {
    let filter = ValueFilter::default();
    let mut memo = Memo::new();
    memo.record(
        OrderedFloat(3.0),
        1,
        Origin::Base {
            digit: 3,
            repeats: 1,
        },
    );

    expand_unary(&mut memo, 3.0, 1, &UnaryOp::ALL, &filter, 3, 1);

    assert_eq!(memo.cost_of(OrderedFloat(6.0)), Some(1));
    assert_eq!(memo.cost_of(OrderedFloat(-3.0)), Some(1));
    assert!(memo.cost_of(OrderedFloat(3.0_f64.sqrt())).is_some());
}

#[test]
fn test_expand_unary_depth_zero_is_noop() {
    let filter = ValueFilter::default();
    let mut memo = Memo::new();
    memo.record(
        OrderedFloat(3.0),
        1,
        Origin::Base {
            digit: 3,
            repeats: 1,
        },
    );

    expand_unary(&mut memo, 3.0, 1, &UnaryOp::ALL, &filter, 3, 0);

    assert_eq!(memo.len(), 1);
}

#[test]
fn test_frontier_combines_pair_through_add() {
    let filter = ValueFilter::default();
    let mut memo = Memo::new();
    memo.record(
        OrderedFloat(2.0),
        1,
        Origin::Base {
            digit: 2,
            repeats: 1,
        },
    );

    let operands = [OrderedFloat(2.0)];
    let task = FrontierTask {
        target: OrderedFloat(4.0),
        lhs: &operands,
        rhs: &operands,
        unary_ops: &[],
        binary_ops: &[BinaryOp::Add],
        filter: &filter,
        max_cost: 4,
        max_unary_depth: 0,
    };
    let found = AtomicBool::new(false);
    let local = task.run(memo, &found);

    // cost(4) = cost(2) + cost(2)
    assert_eq!(local.cost_of(OrderedFloat(4.0)), Some(2));
    assert!(found.load(Ordering::Relaxed));
}

#[test]
fn test_frontier_skips_pairs_over_cost_bound() {
    let filter = ValueFilter::default();
    let mut memo = Memo::new();
    memo.record(
        OrderedFloat(2.0),
        2,
        Origin::Base {
            digit: 2,
            repeats: 1,
        },
    );

    let operands = [OrderedFloat(2.0)];
    let task = FrontierTask {
        target: OrderedFloat(4.0),
        lhs: &operands,
        rhs: &operands,
        unary_ops: &[],
        binary_ops: &[BinaryOp::Add],
        filter: &filter,
        max_cost: 3,
        max_unary_depth: 0,
    };
    let found = AtomicBool::new(false);
    let local = task.run(memo, &found);

    assert!(local.cost_of(OrderedFloat(4.0)).is_none());
    assert!(!found.load(Ordering::Relaxed));
}

#[test]
fn test_frontier_respects_cancellation_signal() {
    let filter = ValueFilter::default();
    let mut memo = Memo::new();
    memo.record(
        OrderedFloat(2.0),
        1,
        Origin::Base {
            digit: 2,
            repeats: 1,
        },
    );

    let operands = [OrderedFloat(2.0)];
    let task = FrontierTask {
        target: OrderedFloat(4.0),
        lhs: &operands,
        rhs: &operands,
        unary_ops: &[],
        binary_ops: &[BinaryOp::Add],
        filter: &filter,
        max_cost: 4,
        max_unary_depth: 0,
    };
    let found = AtomicBool::new(true);
    let local = task.run(memo, &found);

    // the pass was abandoned before combining anything
    assert!(local.cost_of(OrderedFloat(4.0)).is_none());
}

#[test]
fn test_solve_trivial_base_value() {
    let solver = Solver::new(sequential_config(1));
    let outcome = solver.solve(7, 7.0);
    assert!(outcome.is_ok());
    if let Ok(outcome) = outcome {
        assert_eq!(outcome.cost, Some(1));
    }
}

#[test]
fn test_solve_factorial_within_one_use() {
    // 6 = 3! costs a single 3
    let solver = Solver::new(sequential_config(1));
    let outcome = solver.solve(3, 6.0);
    assert!(outcome.is_ok());
    if let Ok(outcome) = outcome {
        assert_eq!(outcome.cost, Some(1));
        assert!((replay(&outcome.memo, OrderedFloat(6.0)) - 6.0).abs() < 1e-9);
    }
}

#[test]
fn test_solve_unreachable_within_one_use() {
    // 5, sqrt(5), 5! and -5 are the only values one 5 can reach
    let solver = Solver::new(sequential_config(1));
    let outcome = solver.solve(5, 1.0);
    assert!(outcome.is_ok());
    if let Ok(outcome) = outcome {
        assert!(!outcome.succeeded());
        assert_eq!(outcome.cost, None);
    }
}

#[test]
fn test_solve_fourteen_from_two_sevens() {
    let solver = Solver::new(sequential_config(2));
    let outcome = solver.solve(7, 14.0);
    assert!(outcome.is_ok());
    if let Ok(outcome) = outcome {
        assert_eq!(outcome.cost, Some(2));
        assert!((replay(&outcome.memo, OrderedFloat(14.0)) - 14.0).abs() < 1e-9);
    }
}

#[test]
fn test_solve_eighty_one_from_two_nines() {
    let solver = Solver::new(sequential_config(2));
    let outcome = solver.solve(9, 81.0);
    assert!(outcome.is_ok());
    if let Ok(outcome) = outcome {
        assert_eq!(outcome.cost, Some(2));
    }
}

#[test]
fn test_solve_fourteen_from_twos_needs_four() {
    let solver = Solver::new(sequential_config(3));
    let outcome = solver.solve(2, 14.0);
    assert!(outcome.is_ok());
    if let Ok(outcome) = outcome {
        assert_eq!(outcome.cost, None);
    }

    let solver = Solver::new(sequential_config(4));
    let outcome = solver.solve(2, 14.0);
    assert!(outcome.is_ok());
    if let Ok(outcome) = outcome {
        assert_eq!(outcome.cost, Some(4));
        assert!((replay(&outcome.memo, OrderedFloat(14.0)) - 14.0).abs() < 1e-9);
    }
}

#[test]
fn test_solve_kilobyte_from_twos() {
    let solver = Solver::new(sequential_config(4));
    let outcome = solver.solve(2, 1024.0);
    assert!(outcome.is_ok());
    if let Ok(outcome) = outcome {
        assert!(outcome.succeeded());
        assert!(outcome.cost.is_some_and(|c| c <= 4));
        assert!((replay(&outcome.memo, OrderedFloat(1024.0)) - 1024.0).abs() < 1e-9);
    }
}

#[test]
fn test_parallel_and_sequential_agree() {
    let sequential = Solver::new(sequential_config(4));
    let parallel = Solver::new(SearchConfig {
        max_cost: 4,
        workers: 4,
        mode: ExecutionMode::Parallel,
        ..SearchConfig::default()
    });

    let seq_outcome = sequential.solve(2, 14.0);
    let par_outcome = parallel.solve(2, 14.0);
    assert!(seq_outcome.is_ok());
    assert!(par_outcome.is_ok());
    if let (Ok(seq), Ok(par)) = (seq_outcome, par_outcome) {
        assert_eq!(seq.cost, Some(4));
        assert_eq!(par.cost, Some(4));
    }
}

#[test]
fn test_unary_depth_zero_never_yields_unary_origins() {
    let config = SearchConfig {
        max_cost: 3,
        max_unary_depth: 0,
        workers: 2,
        mode: ExecutionMode::Sequential,
        ..SearchConfig::default()
    };
    let solver = Solver::new(config);
    let outcome = solver.solve(2, 6.0);
    assert!(outcome.is_ok());
    if let Ok(outcome) = outcome {
        assert_eq!(outcome.cost, Some(3));
        for (_, entry) in outcome.memo.iter() {
            assert!(!matches!(entry.origin, Origin::Unary { .. }));
        }
    }
}

#[test]
fn test_recorded_costs_never_exceed_bound() {
    let solver = Solver::new(sequential_config(3));
    let outcome = solver.solve(4, 12.0);
    assert!(outcome.is_ok());
    if let Ok(outcome) = outcome {
        for (_, entry) in outcome.memo.iter() {
            assert!(entry.cost <= 3);
        }
    }
}

#[test]
fn test_every_entry_replays_to_its_value() {
    let solver = Solver::new(sequential_config(2));
    let outcome = solver.solve(7, 14.0);
    assert!(outcome.is_ok());
    if let Ok(outcome) = outcome {
        for (value, _) in outcome.memo.iter() {
            let replayed = replay(&outcome.memo, *value);
            let expected = value.into_inner();
            assert!(
                (replayed - expected).abs() < 1e-9 * expected.abs().max(1.0),
                "entry {} replays to {}",
                expected,
                replayed
            );
        }
    }
}

#[test]
fn test_solve_rejects_invalid_digit() {
    let solver = Solver::new(sequential_config(3));
    assert!(solver.solve(0, 5.0).is_err());
    assert!(solver.solve(12, 5.0).is_err());
}

#[test]
fn test_solve_rejects_zero_workers() {
    let config = SearchConfig {
        max_cost: 3,
        workers: 0,
        mode: ExecutionMode::Sequential,
        ..SearchConfig::default()
    };
    let solver = Solver::new(config);
    assert!(solver.solve(5, 10.0).is_err());
}

// Regression anchor from the reference scenario.
#[test]
fn test_regression_1776_from_fives() {
    let config = SearchConfig {
        max_cost: 7,
        workers: 4,
        mode: ExecutionMode::Parallel,
        ..SearchConfig::default()
    };
    let solver = Solver::new(config);
    let outcome = solver.solve(5, 1776.0);
    assert!(outcome.is_ok());
    if let Ok(outcome) = outcome {
        assert!(outcome.succeeded());
        assert!(outcome.cost.is_some_and(|c| c <= 7));
        assert!((replay(&outcome.memo, OrderedFloat(1776.0)) - 1776.0).abs() < 1e-9);
    }
}
