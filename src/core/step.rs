use crate::core::error::OperationError;
use crate::core::event::EventSink;
use crate::core::operation::Operation;
use crate::core::socket::Socket;
use crate::core::validation::{ValidationIssue, ValidationResult};
use std::sync::Arc;

/// An operation bound to its own set of sockets.
///
/// Steps are not connected to each other; callers fill the inputs, call
/// [`Step::run`] and read the outputs.
pub struct Step {
    operation: Arc<dyn Operation>,
    inputs: Vec<Socket>,
    outputs: Vec<Socket>,
}

impl Step {
    /// Creates the operation's sockets, all publishing to `sink`.
    pub fn new(operation: Arc<dyn Operation>, sink: Arc<dyn EventSink>) -> Self {
        let inputs = operation.create_input_sockets(Arc::clone(&sink));
        let outputs = operation.create_output_sockets(sink);
        log::debug!(
            "Created step for '{}' with {} input(s) and {} output(s)",
            operation.name(),
            inputs.len(),
            outputs.len()
        );
        Step {
            operation,
            inputs,
            outputs,
        }
    }

    pub fn operation(&self) -> &dyn Operation {
        self.operation.as_ref()
    }

    pub fn inputs(&self) -> &[Socket] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[Socket] {
        &self.outputs
    }

    /// Looks up an input socket by its hint identifier.
    pub fn input(&self, identifier: &str) -> Option<&Socket> {
        self.inputs.iter().find(|s| s.identifier() == identifier)
    }

    /// Looks up an output socket by its hint identifier.
    pub fn output(&self, identifier: &str) -> Option<&Socket> {
        self.outputs.iter().find(|s| s.identifier() == identifier)
    }

    /// Reports unset inputs as errors and inputs still at their default as warnings.
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::new();
        for (index, socket) in self.inputs.iter().enumerate() {
            let identifier = socket.identifier().to_string();
            match socket.value() {
                None => result.push(ValidationIssue::UnsetInput { index, identifier }),
                Some(value) if socket.hint().default_value.as_ref() == Some(&value) => {
                    result.push(ValidationIssue::DefaultedInput {
                        index,
                        identifier,
                        value,
                    })
                }
                Some(_) => {}
            }
        }
        result
    }

    /// Performs the operation on this step's sockets.
    ///
    /// Stops before `perform` with the first unset input if validation fails.
    pub fn run(&self) -> Result<(), OperationError> {
        let validation = self.validate();
        validation.log_summary();
        if let Some(err) = validation.first_error() {
            return Err(err);
        }

        log::debug!("Performing '{}'", self.operation.name());
        self.operation.perform(&self.inputs, &self.outputs)
    }
}
