use crate::core::error::OperationError;
use crate::core::operation::{require_inputs, Operation};
use crate::core::socket::{Socket, SocketHint};
use crate::core::value::ValueType;

/// Adds two numbers: `sum = a + b`.
#[derive(Debug, Default, Clone, Copy)]
pub struct AdditionOperation;

impl Operation for AdditionOperation {
    fn name(&self) -> &str {
        "Add"
    }

    fn description(&self) -> &str {
        "Compute the sum of two numbers"
    }

    fn input_hints(&self) -> Vec<SocketHint> {
        vec![
            SocketHint::input("a", ValueType::Number),
            SocketHint::input("b", ValueType::Number),
        ]
    }

    fn output_hints(&self) -> Vec<SocketHint> {
        vec![SocketHint::output("sum", ValueType::Number)]
    }

    fn perform(&self, inputs: &[Socket], outputs: &[Socket]) -> Result<(), OperationError> {
        self.check_arity(inputs, outputs)?;
        require_inputs(inputs)?;

        let a = inputs[0].typed::<f64>()?.value()?;
        let b = inputs[1].typed::<f64>()?.value()?;
        log::debug!("{}: {} + {}", self.name(), a, b);

        let sum = a + b;
        if !sum.is_finite() {
            let identifier = outputs[0].identifier().to_string();
            log::warn!("{}: {} + {} overflows '{}'", self.name(), a, b, identifier);
            return Err(OperationError::NonFinite { identifier });
        }

        outputs[0].typed::<f64>()?.set_value(sum)?;
        Ok(())
    }
}
