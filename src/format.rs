// format.rs
//
// Records are built from a single pinned number rendering so that the exact
// strings stay reproducible: the shortest decimal that parses back to the same
// f64, no exponent, no trailing ".0" on integral values.

use std::fmt;

use crate::arith::{calculate_product, calculate_sum};

/// Render a number the way every history record does.
///
/// `8.0` becomes `"8"`, `8.7` stays `"8.7"`, `-0.0` is `"-0"`, infinities are
/// `"inf"`/`"-inf"` and NaN is `"NaN"`.
pub fn format_number(x: f64) -> String {
    // std's Display for f64 is already shortest round-trip without exponent.
    format!("{}", x)
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Op {
    Add,
    Multiply,
}

impl Op {
    pub fn symbol(self) -> char {
        match self {
            Op::Add => '+',
            Op::Multiply => '*',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Op::Add => "add",
            Op::Multiply => "multiply",
        }
    }

    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Op::Add => calculate_sum(a, b),
            Op::Multiply => calculate_product(a, b),
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// `"{a} {op} {b} = {result}"` with every number through [`format_number`].
pub fn format_record(op: Op, a: f64, b: f64, result: f64) -> String {
    format!(
        "{} {} {} = {}",
        format_number(a),
        op,
        format_number(b),
        format_number(result)
    )
}
