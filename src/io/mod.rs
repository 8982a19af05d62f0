//! I/O abstractions for input providers and output targets.
//!
//! This module provides:
//! - `InputProvider`: Trait for sources a reader pulls lines from
//! - `OutputTarget`: Trait for destinations prompts and messages go to
//! - Standard implementations for files, stdin/stdout/stderr
//! - In-memory implementations for testing and transcripts

mod input;
mod memory;
mod output;
mod std_io;

pub use input::{InputProvider, ReadInput};
pub use memory::{InMemorySink, InMemorySource};
pub use output::OutputTarget;
pub use std_io::{FileInput, FileOutput, StderrOutput, StdinInput, StdoutOutput};
