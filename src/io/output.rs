//! Output target trait definition.

use std::fmt::Debug;
use std::io::Write;

/// Trait for destinations of prompts and rejection messages.
///
/// Implementors provide a way to open a writable stream to various destinations
/// such as stdout/stderr, transcript files, or in-memory buffers.
pub trait OutputTarget: Send + Sync + Debug {
    /// Returns a unique identifier for this output target.
    ///
    /// This is used for error messages and logging.
    /// Convention: "-" for stdout, file path for files.
    fn id(&self) -> &str;

    /// Open the target for writing. Existing content is kept.
    fn open(&self) -> std::io::Result<Box<dyn Write + Send>>;
}
