//! CLI error types mapped to exit codes.

use std::fmt;

use roster_core::{RosterError, ValidationError};

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found
    NotFound { message: String, hint: String },

    /// Invalid user input, with an optional hint
    InvalidInput {
        message: String,
        hint: Option<String>,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, .. } | CliError::InvalidInput { message, .. } => {
                write!(f, "{}", message)
            }
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput {
            message: message.into(),
            hint: None,
        }
    }

    pub fn invalid_input_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::InvalidInput {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    /// Rejected candidate: first failing field as the message, the rest as a hint.
    pub fn rejected(first: &ValidationError, all: &[ValidationError]) -> Self {
        let others: Vec<&str> = all
            .iter()
            .filter(|e| e.field != first.field)
            .map(|e| e.field.label())
            .collect();
        if others.is_empty() {
            Self::invalid_input(first.message.clone())
        } else {
            Self::invalid_input_with_hint(
                first.message.clone(),
                format!("Also invalid: {}", others.join(", ")),
            )
        }
    }

    pub fn hint(&self) -> Option<&str> {
        match self {
            CliError::NotFound { hint, .. } => Some(hint),
            CliError::InvalidInput { hint, .. } => hint.as_deref(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput { .. } => exit_codes::INVALID_INPUT,
        }
    }
}

/// Exit code for an arbitrary error bubbling out of a handler.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return cli_err.exit_code();
    }
    match err.downcast_ref::<RosterError>() {
        Some(RosterError::Validation(_)) | Some(RosterError::InvalidInput(_)) => {
            exit_codes::INVALID_INPUT
        }
        _ => 1,
    }
}
