//! # promptio
//!
//! Validated, localized line prompts for interactive CLI applications.
//!
//! ## Overview
//!
//! promptio provides:
//! - **Ask operations**: strings with length bounds, choices from a fixed
//!   set, existing file names, integers, natural numbers, floats and ranges
//! - **Retry until valid**: a rejected answer prints one localized message
//!   and the question is asked again
//! - **Pluggable messages**: English and Spanish built in, any other locale
//!   by implementing [`Messages`]
//! - **Any line source**: stdin, files, in-memory text or an arbitrary
//!   byte stream, decoded as UTF-8 or Latin-1
//! - **Configuration**: build readers from JSON/YAML documents
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use promptio::{LineReader, Locale};
//!
//! fn main() -> Result<(), promptio::PromptError> {
//!     let mut reader = LineReader::stdin(Locale::En)?;
//!
//!     let age = reader.read_int_in_range("Age: ", 0, 130)?;
//!     let color = reader.read_string_from_set("Color?", &["red", "green"])?;
//!     println!("{age} / {color}");
//!
//!     reader.close()
//! }
//! ```
//!
//! ## Testing with scripted answers
//!
//! ```rust
//! use std::sync::Arc;
//! use promptio::{InMemorySink, InMemorySource, LineReaderBuilder, Locale};
//!
//! let sink = Arc::new(InMemorySink::new("out"));
//! let mut reader = LineReaderBuilder::new()
//!     .with_locale(Locale::Es)
//!     .with_input(Arc::new(InMemorySource::from_lines("in", ["abc", "7"])))
//!     .with_output(sink.clone())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(reader.read_int("> ").unwrap(), 7);
//! assert_eq!(
//!     sink.contents_string(),
//!     "> El valor no es un entero válido.\n> "
//! );
//! ```
//!
//! ## Features
//!
//! - `json` - `ReaderConfig::from_json_str`
//! - `yaml` - `ReaderConfig::from_yaml_str`
//! - `miette` - Pretty error reporting with miette
//! - `sarge` - `sarge::ArgumentType` for the [`cli`] argument types
//! - `cli` - `sarge` plus a tracing subscriber helper and the demo binary

// Core modules
pub mod builder;
pub mod cli;
pub mod config;
pub mod encoding;
pub mod error;
pub mod io;
pub mod lines;
pub mod locale;
pub mod reader;
pub mod validate;

// Re-exports for convenience
pub use builder::LineReaderBuilder;
pub use config::ReaderConfig;
pub use encoding::Encoding;
pub use error::{PromptError, Stage};
pub use io::{
    FileInput, FileOutput, InMemorySink, InMemorySource, InputProvider, OutputTarget, ReadInput,
    StderrOutput, StdinInput, StdoutOutput,
};
pub use locale::{English, Locale, Messages, SUPPORTED_LOCALES, Spanish};
pub use reader::LineReader;
pub use validate::Violation;

// Miette re-exports
#[cfg(feature = "miette")]
pub use error::PromptDiagnostic;
