//! Error types for promptio operations.
//!
//! This module provides:
//! - `Stage`: Indicates which I/O step failed
//! - `PromptError`: Everything an ask operation can surface to its caller
//!
//! Validation failures (bad numbers, out-of-range values, unknown options)
//! are never errors here. The reader prints a localized message for those and
//! asks again; see [`crate::validate::Violation`].

use std::fmt;
use std::io;

use thiserror::Error;

use crate::encoding::Encoding;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Error while opening the input or output stream
    Open,
    Read,
    Write,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Open => write!(f, "Open"),
            Stage::Read => write!(f, "Read"),
            Stage::Write => write!(f, "Write"),
        }
    }
}

#[derive(Debug, Error)]
pub enum PromptError {
    /// The input source has no further lines.
    #[error("input '{source_id}' is exhausted")]
    StreamExhausted { source_id: String },

    /// The caller passed arguments no input can satisfy. The payload is the
    /// localized message of the active provider.
    #[error("{0}")]
    InvalidArgument(String),

    /// The reader was closed before this call.
    #[error("the reader has been closed")]
    Closed,

    /// The configured attempt limit was reached without a valid value.
    #[error("no valid value after {attempts} attempt(s)")]
    AttemptsExhausted { attempts: u32 },

    #[error("[{stage}] {target}: {source}")]
    Io {
        stage: Stage,
        /// Identifier of the target (file path, "-" for stdin/stdout, etc.)
        target: String,
        #[source]
        source: io::Error,
    },

    /// A line could not be decoded with the configured encoding.
    #[error("[Read] {target}: line is not valid {encoding}")]
    Decode { target: String, encoding: Encoding },

    #[error("invalid reader configuration: {0}")]
    Config(String),
}

impl PromptError {
    pub(crate) fn io(stage: Stage, target: impl Into<String>, source: io::Error) -> Self {
        PromptError::Io {
            stage,
            target: target.into(),
            source,
        }
    }

    /// Returns true when retrying the same call can never succeed because
    /// the input side is gone.
    pub fn is_end_of_input(&self) -> bool {
        matches!(
            self,
            PromptError::StreamExhausted { .. } | PromptError::Closed
        )
    }
}

#[cfg(feature = "miette")]
mod miette_impl;

#[cfg(feature = "miette")]
pub use miette_impl::*;
