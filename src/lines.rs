//! Line splitting over an opened input stream.

use std::io::{BufRead, BufReader, Read};

use tracing::trace;

use crate::encoding::Encoding;
use crate::error::{PromptError, Stage};

/// Buffered, line-oriented view of one input stream.
///
/// Lines are split on `\n`; a `\r` right before it is dropped as well. A
/// final line without terminator still counts as a line.
///
/// Only `\n` ends a line. A lone `\r`, U+0085, U+2028 and U+2029 are not
/// terminators here (a `Scanner`-style reader would split on them) and stay
/// in the returned text.
pub struct LineSource {
    id: String,
    encoding: Encoding,
    inner: BufReader<Box<dyn Read + Send>>,
}

impl LineSource {
    pub fn new(id: impl Into<String>, reader: Box<dyn Read + Send>, encoding: Encoding) -> Self {
        Self {
            id: id.into(),
            encoding,
            inner: BufReader::new(reader),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Read the next line without its terminator. `Ok(None)` at end of input.
    pub fn next_line(&mut self) -> Result<Option<String>, PromptError> {
        let mut buf = Vec::new();
        let n = self
            .inner
            .read_until(b'\n', &mut buf)
            .map_err(|e| PromptError::io(Stage::Read, self.id.clone(), e))?;
        if n == 0 {
            return Ok(None);
        }

        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }

        let line = self.encoding.decode(buf).ok_or_else(|| PromptError::Decode {
            target: self.id.clone(),
            encoding: self.encoding,
        })?;
        trace!(source = %self.id, len = line.len(), "read line");
        Ok(Some(line))
    }
}

impl std::fmt::Debug for LineSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineSource")
            .field("id", &self.id)
            .field("encoding", &self.encoding)
            .finish()
    }
}
