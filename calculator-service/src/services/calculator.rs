use metrics::counter;

use crate::error::CalculatorError;
use crate::models::{Operands, Operation};

/// Run one operation and record its outcome. Operand values are not logged.
pub fn evaluate(operation: Operation, operands: Operands) -> Result<f64, CalculatorError> {
    let outcome = operation.apply(operands);

    let label = match &outcome {
        Ok(_) => "ok",
        Err(err) => err.reason(),
    };
    counter!(
        "calculator_operations_total",
        "operation" => operation.as_str(),
        "outcome" => label
    )
    .increment(1);

    match &outcome {
        Ok(_) => tracing::debug!(operation = %operation, symbol = %operation.symbol(), "Operation computed"),
        Err(err) => tracing::debug!(operation = %operation, error = %err, "Operation rejected"),
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluate_passes_results_through() {
        assert_eq!(evaluate(Operation::Add, Operands::new(2.0, 3.0)), Ok(5.0));
        assert_eq!(
            evaluate(Operation::Divide, Operands::new(1.0, 0.0)),
            Err(CalculatorError::DivisionByZero)
        );
    }

    #[test]
    fn identical_inputs_give_identical_outputs() {
        let operands = Operands::new(0.1, 0.2);
        for operation in Operation::ALL {
            assert_eq!(evaluate(operation, operands), evaluate(operation, operands));
        }
    }
}
