use serde_json::Value;

use crate::error::CalculatorError;

/// A pair of operands that has already been checked to be numeric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Operands {
    pub a: f64,
    pub b: f64,
}

impl Operands {
    pub fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }
}

/// Accepts only JSON numbers for `a` and `b`. Strings, booleans, `null`,
/// nested values and missing keys are all rejected the same way.
impl TryFrom<&Value> for Operands {
    type Error = CalculatorError;

    fn try_from(body: &Value) -> Result<Self, Self::Error> {
        let operand = |key: &str| body.get(key).and_then(Value::as_f64);

        match (operand("a"), operand("b")) {
            (Some(a), Some(b)) => Ok(Self::new(a, b)),
            _ => Err(CalculatorError::Validation),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Route segment and metrics label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
            Operation::Multiply => '*',
            Operation::Divide => '/',
        }
    }

    /// Plain IEEE-754 double arithmetic. The only rejected input is a zero
    /// divisor, and `-0.0` counts as zero.
    pub fn apply(&self, operands: Operands) -> Result<f64, CalculatorError> {
        let Operands { a, b } = operands;

        match self {
            Operation::Add => Ok(a + b),
            Operation::Subtract => Ok(a - b),
            Operation::Multiply => Ok(a * b),
            Operation::Divide if b == 0.0 => Err(CalculatorError::DivisionByZero),
            Operation::Divide => Ok(a / b),
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
