//! Miette integration for pretty error reporting.

use miette::{Diagnostic, Severity};
use thiserror::Error;

use super::PromptError;

/// A diagnostic wrapper for prompt errors compatible with miette.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct PromptDiagnostic {
    /// The error message
    pub message: String,

    #[source]
    /// The underlying error source
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,

    #[help]
    /// Help text for the user
    pub help: Option<String>,

    #[diagnostic(severity)]
    /// Severity level
    pub severity: Severity,
}

fn help_for(e: &PromptError) -> Option<String> {
    match e {
        PromptError::StreamExhausted { .. } => {
            Some("The input ended before a valid answer was given".into())
        }
        PromptError::Closed => Some("Create a new reader instead of reusing a closed one".into()),
        PromptError::AttemptsExhausted { .. } => {
            Some("Raise max_attempts or leave it unset for unlimited retries".into())
        }
        PromptError::Io { .. } => Some("Check the input/output paths and permissions".into()),
        PromptError::Decode { .. } => Some("Pick the encoding the input was written in".into()),
        PromptError::Config(_) => Some("Check the locale, encoding and token fields".into()),
        PromptError::InvalidArgument(_) => None,
    }
}

impl From<PromptError> for PromptDiagnostic {
    fn from(e: PromptError) -> Self {
        let help = help_for(&e);
        let severity = if e.is_end_of_input() {
            Severity::Warning
        } else {
            Severity::Error
        };
        PromptDiagnostic {
            message: e.to_string(),
            source: Some(Box::new(e)),
            help,
            severity,
        }
    }
}
