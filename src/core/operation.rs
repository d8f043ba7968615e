use crate::core::error::OperationError;
use crate::core::event::EventSink;
use crate::core::socket::{Socket, SocketHint};
use std::sync::Arc;

/// Defines a pure computation over sockets.
///
/// An operation declares the shape of its inputs and outputs through socket
/// hints and holds no per-run state, so a single instance can be shared by
/// any number of callers.
pub trait Operation: Send + Sync + 'static {
    /// Short, unique name of the operation.
    fn name(&self) -> &str;

    fn description(&self) -> &str {
        ""
    }

    /// Ordered description of the input sockets.
    fn input_hints(&self) -> Vec<SocketHint>;

    /// Ordered description of the output sockets.
    fn output_hints(&self) -> Vec<SocketHint>;

    /// Creates one socket per input hint, bound to `sink`.
    fn create_input_sockets(&self, sink: Arc<dyn EventSink>) -> Vec<Socket> {
        self.input_hints()
            .into_iter()
            .map(|hint| Socket::new(hint, Arc::clone(&sink)))
            .collect()
    }

    /// Creates one socket per output hint, bound to `sink`.
    fn create_output_sockets(&self, sink: Arc<dyn EventSink>) -> Vec<Socket> {
        self.output_hints()
            .into_iter()
            .map(|hint| Socket::new(hint, Arc::clone(&sink)))
            .collect()
    }

    /// Reads `inputs` and writes the results into `outputs`.
    ///
    /// Sockets are written through shared references. On error the outputs
    /// are left as they were.
    fn perform(&self, inputs: &[Socket], outputs: &[Socket]) -> Result<(), OperationError>;

    /// Checks the socket counts against the declared hints.
    fn check_arity(&self, inputs: &[Socket], outputs: &[Socket]) -> Result<(), OperationError> {
        let arity = |kind: &'static str, expected: usize, found: usize| {
            if expected == found {
                Ok(())
            } else {
                Err(OperationError::Arity {
                    operation: self.name().to_string(),
                    kind,
                    expected,
                    found,
                })
            }
        };
        arity("input", self.input_hints().len(), inputs.len())?;
        arity("output", self.output_hints().len(), outputs.len())
    }
}

/// Returns the first unset socket in `inputs` as an [`OperationError::UnsetInput`].
pub fn require_inputs(inputs: &[Socket]) -> Result<(), OperationError> {
    match inputs.iter().position(|socket| !socket.is_set()) {
        Some(index) => {
            let identifier = inputs[index].identifier().to_string();
            log::warn!("Input {} ('{}') is not set.", index, identifier);
            Err(OperationError::UnsetInput { index, identifier })
        }
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::event::NullEventSink;
    use crate::core::value::ValueType;
    use serde_json::json;

    struct NegateOperation;

    impl Operation for NegateOperation {
        fn name(&self) -> &str {
            "Negate"
        }

        fn input_hints(&self) -> Vec<SocketHint> {
            vec![SocketHint::input("value", ValueType::Number)]
        }

        fn output_hints(&self) -> Vec<SocketHint> {
            vec![SocketHint::output("negated", ValueType::Number)]
        }

        fn perform(&self, inputs: &[Socket], outputs: &[Socket]) -> Result<(), OperationError> {
            self.check_arity(inputs, outputs)?;
            require_inputs(inputs)?;
            let value = inputs[0].typed::<f64>()?.value()?;
            outputs[0].typed::<f64>()?.set_value(-value)?;
            Ok(())
        }
    }

    #[test]
    fn test_sockets_follow_hints() {
        let op = NegateOperation;
        let sink: Arc<dyn EventSink> = Arc::new(NullEventSink);
        let inputs = op.create_input_sockets(sink.clone());
        let outputs = op.create_output_sockets(sink);

        assert_eq!(inputs.len(), 1);
        assert_eq!(inputs[0].identifier(), "value");
        assert_eq!(outputs[0].identifier(), "negated");
        assert_eq!(op.description(), "");
    }

    #[test]
    fn test_each_call_creates_fresh_sockets() {
        let op = NegateOperation;
        let first = op.create_input_sockets(Arc::new(NullEventSink));
        let second = op.create_input_sockets(Arc::new(NullEventSink));
        assert_ne!(first[0].id(), second[0].id());
    }

    #[test]
    fn test_arity_mismatch() {
        let op = NegateOperation;
        let outputs = op.create_output_sockets(Arc::new(NullEventSink));

        let err = op.perform(&[], &outputs).unwrap_err();
        assert_eq!(
            err,
            OperationError::Arity {
                operation: "Negate".to_string(),
                kind: "input",
                expected: 1,
                found: 0,
            }
        );
    }

    #[test]
    fn test_require_inputs_reports_first_unset() {
        let op = NegateOperation;
        let inputs = op.create_input_sockets(Arc::new(NullEventSink));
        let outputs = op.create_output_sockets(Arc::new(NullEventSink));

        assert_eq!(
            op.perform(&inputs, &outputs),
            Err(OperationError::UnsetInput {
                index: 0,
                identifier: "value".to_string()
            })
        );

        inputs[0].set_value(json!(2.0)).unwrap();
        op.perform(&inputs, &outputs).unwrap();
        assert_eq!(outputs[0].value(), Some(json!(-2.0)));
    }
}
