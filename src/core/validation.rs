use crate::core::error::OperationError;
use crate::core::value::SocketValue;
use std::fmt;

/// Represents an issue found while checking a step's inputs before it runs.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationIssue {
    /// Hard error: the input at `index` is empty and the operation cannot run.
    UnsetInput { index: usize, identifier: String },
    /// Warning: the input still holds the default its hint declared.
    DefaultedInput {
        index: usize,
        identifier: String,
        value: SocketValue,
    },
}

impl ValidationIssue {
    pub fn is_error(&self) -> bool {
        matches!(self, ValidationIssue::UnsetInput { .. })
    }

    pub fn index(&self) -> usize {
        match self {
            ValidationIssue::UnsetInput { index, .. }
            | ValidationIssue::DefaultedInput { index, .. } => *index,
        }
    }

    pub fn identifier(&self) -> &str {
        match self {
            ValidationIssue::UnsetInput { identifier, .. }
            | ValidationIssue::DefaultedInput { identifier, .. } => identifier,
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::UnsetInput { index, identifier } => {
                write!(f, "Error: input {} ('{}') is not set", index, identifier)
            }
            ValidationIssue::DefaultedInput {
                index,
                identifier,
                value,
            } => write!(
                f,
                "Warning: input {} ('{}') still holds its default {}",
                index, identifier, value
            ),
        }
    }
}

/// Everything a validation pass found, in input order.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, issue: ValidationIssue) {
        self.issues.push(issue);
    }

    /// True when nothing would stop the operation from running.
    pub fn is_safe(&self) -> bool {
        !self.issues.iter().any(ValidationIssue::is_error)
    }

    pub fn has_warnings(&self) -> bool {
        self.issues.iter().any(|issue| !issue.is_error())
    }

    /// The first blocking issue as the error `perform` would have returned.
    pub fn first_error(&self) -> Option<OperationError> {
        self.issues.iter().find_map(|issue| match issue {
            ValidationIssue::UnsetInput { index, identifier } => Some(OperationError::UnsetInput {
                index: *index,
                identifier: identifier.clone(),
            }),
            ValidationIssue::DefaultedInput { .. } => None,
        })
    }

    /// One line per issue, or a single line saying everything is fine.
    pub fn summary(&self) -> String {
        if self.issues.is_empty() {
            return "Validation passed: all inputs are set.".to_string();
        }

        self.issues
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Writes the summary to the log at a level matching the worst issue.
    pub fn log_summary(&self) {
        if !self.is_safe() {
            log::warn!("{}", self.summary());
        } else if self.has_warnings() {
            log::info!("{}", self.summary());
        } else {
            log::debug!("{}", self.summary());
        }
    }
}
