use std::fmt;

use ordered_float::OrderedFloat;

use crate::ops::{BinaryOp, UnaryOp};
use crate::utils::format_number;

/// A tracked value. `OrderedFloat` gives the `Eq`/`Hash`/`Ord` impls the memo
/// map and the sorted right-hand operand list need.
pub type Value = OrderedFloat<f64>;

/// How a value was derived.
#[derive(Debug, Clone, PartialEq)]
pub enum Origin {
    /// The base digit repeated `repeats` times (digit 7, repeats 3 → 777).
    Base { digit: u32, repeats: u32 },
    /// A unary operator applied to an already-known value.
    Unary { op: UnaryOp, source: Value },
    /// A binary operator applied to two already-known values.
    Binary { op: BinaryOp, left: Value, right: Value },
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Origin::Base { digit, repeats } => write!(f, "cat{}({})", repeats, digit),
            Origin::Unary { op, source } => {
                write!(f, "{}({})", op.name(), format_number(source.into_inner()))
            }
            Origin::Binary { op, left, right } => write!(
                f,
                "{}({},{})",
                op.name(),
                format_number(left.into_inner()),
                format_number(right.into_inner())
            ),
        }
    }
}

/// A memo entry: the best known cost of a value and the derivation achieving
/// it. Stored as one record so the pair can never disagree.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub cost: u32,
    pub origin: Origin,
}
