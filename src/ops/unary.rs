use crate::filter::is_integer;
use crate::ops::constants::MAX_FACTORIAL_ARG;

/// Single-argument operators, applied by the unary closure engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Sqrt,
    Fact,
    Negate,
}

impl UnaryOp {
    /// Registration order; the closure engine iterates operators in this order.
    pub const ALL: [UnaryOp; 3] = [UnaryOp::Sqrt, UnaryOp::Fact, UnaryOp::Negate];

    pub fn name(self) -> &'static str {
        match self {
            UnaryOp::Sqrt => "sqrt",
            UnaryOp::Fact => "fact",
            UnaryOp::Negate => "negate",
        }
    }

    /// Applies the operator, returning `None` when the result is undefined.
    pub fn apply(self, value: f64) -> Option<f64> {
        match self {
            UnaryOp::Sqrt => {
                if value < 0.0 {
                    None
                } else {
                    Some(value.sqrt())
                }
            }
            UnaryOp::Fact => factorial(value),
            UnaryOp::Negate => Some(-value),
        }
    }
}

fn factorial(value: f64) -> Option<f64> {
    if value < 0.0 || value > MAX_FACTORIAL_ARG || !is_integer(value) {
        return None;
    }

    let n = value.round() as u32;
    let mut product = 1.0_f64;
    for k in 2..=n {
        product *= f64::from(k);
    }
    Some(product)
}
