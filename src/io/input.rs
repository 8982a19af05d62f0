//! Input provider trait definition.

use std::fmt::{self, Debug};
use std::io::{self, Read};
use std::sync::Mutex;

/// Trait for synchronous input providers.
///
/// Implementors provide a way to open a readable stream from various sources
/// such as files, stdin, or in-memory buffers. A reader opens its provider
/// exactly once and owns the stream until it is closed.
pub trait InputProvider: Send + Sync + Debug {
    /// Returns a unique identifier for this input source.
    ///
    /// This is used for error messages and logging.
    /// Convention: "-" for stdin, file path for files.
    fn id(&self) -> &str;

    /// Open and return a new readable stream.
    fn open(&self) -> io::Result<Box<dyn Read + Send>>;
}

/// Input provider around a caller-supplied byte stream.
///
/// The stream can only be handed out once; a second `open` fails.
pub struct ReadInput {
    id: String,
    inner: Mutex<Option<Box<dyn Read + Send>>>,
}

impl ReadInput {
    pub fn new(id: impl Into<String>, reader: impl Read + Send + 'static) -> Self {
        Self {
            id: id.into(),
            inner: Mutex::new(Some(Box::new(reader))),
        }
    }
}

impl Debug for ReadInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReadInput").field("id", &self.id).finish()
    }
}

impl InputProvider for ReadInput {
    fn id(&self) -> &str {
        &self.id
    }

    fn open(&self) -> io::Result<Box<dyn Read + Send>> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|_| io::Error::other("input stream lock poisoned"))?;
        guard.take().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("input stream '{}' was already opened", self.id),
            )
        })
    }
}
