use crate::filter::is_integer;

/// Two-argument operators, applied by the binary frontier expander.
///
/// Order-sensitive operators (`Sub`, `Div`, `Pow`, `Root`) are applied in the
/// registered direction only; swapped variants are not tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Root,
}

impl BinaryOp {
    /// Registration order; the frontier expander iterates operators in this order.
    pub const ALL: [BinaryOp; 6] = [
        BinaryOp::Add,
        BinaryOp::Sub,
        BinaryOp::Mul,
        BinaryOp::Div,
        BinaryOp::Pow,
        BinaryOp::Root,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BinaryOp::Add => "add",
            BinaryOp::Sub => "sub",
            BinaryOp::Mul => "mul",
            BinaryOp::Div => "div",
            BinaryOp::Pow => "pow",
            BinaryOp::Root => "root",
        }
    }

    /// Applies the operator, returning `None` when the result is undefined.
    pub fn apply(self, left: f64, right: f64) -> Option<f64> {
        match self {
            BinaryOp::Add => Some(left + right),
            BinaryOp::Sub => Some(left - right),
            BinaryOp::Mul => Some(left * right),
            BinaryOp::Div => exact_divide(left, right),
            BinaryOp::Pow => power(left, right),
            BinaryOp::Root => root(left, right),
        }
    }
}

/// Division is only defined when it leaves no remainder.
fn exact_divide(left: f64, right: f64) -> Option<f64> {
    if right == 0.0 {
        return None;
    }
    if left % right != 0.0 {
        return None;
    }
    Some(left / right)
}

fn power(base: f64, exponent: f64) -> Option<f64> {
    if base == 0.0 && exponent < 0.0 {
        return None;
    }
    if base < 0.0 && !is_integer(exponent) {
        // complex result
        return None;
    }
    Some(base.powf(exponent))
}

/// `root(a, b) = a^(1/b)`, the b-th root of a.
fn root(base: f64, degree: f64) -> Option<f64> {
    if degree == 0.0 {
        return None;
    }
    let exponent = 1.0 / degree;
    if base < 0.0 && !is_integer(exponent) {
        return None;
    }
    Some(base.powf(exponent))
}
