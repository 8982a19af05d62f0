//! Process streams and files as prompt endpoints.

use std::fs::{File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::PathBuf;

use super::{InputProvider, OutputTarget};

/// Answers typed on the process's standard input. Id `-`.
///
/// Reads block until a full line (or end of input) arrives. The reader that
/// opens stdin wraps it in its own line buffer, which may pull in bytes past
/// the line currently being asked for. Those bytes belong to that reader:
/// keep one reader per process over stdin and do not read stdin elsewhere
/// while it is alive.
#[derive(Debug, Clone, Copy)]
pub struct StdinInput;

impl InputProvider for StdinInput {
    fn id(&self) -> &str {
        "-"
    }

    fn open(&self) -> io::Result<Box<dyn Read + Send>> {
        Ok(Box::new(io::stdin()))
    }
}

/// Prompts and messages on standard output. Id `-`.
#[derive(Debug, Clone, Copy)]
pub struct StdoutOutput;

impl OutputTarget for StdoutOutput {
    fn id(&self) -> &str {
        "-"
    }

    fn open(&self) -> io::Result<Box<dyn Write + Send>> {
        Ok(Box::new(io::stdout()))
    }
}

/// Prompts and messages on standard error, leaving stdout to the program's
/// own results. Id `stderr`.
#[derive(Debug, Clone, Copy)]
pub struct StderrOutput;

impl OutputTarget for StderrOutput {
    fn id(&self) -> &str {
        "stderr"
    }

    fn open(&self) -> io::Result<Box<dyn Write + Send>> {
        Ok(Box::new(io::stderr()))
    }
}

/// Scripted answers from a file, one per line. The path, as given, is the id
/// reported in errors.
#[derive(Debug, Clone)]
pub struct FileInput {
    label: String,
    path: PathBuf,
}

impl FileInput {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            label: path.display().to_string(),
            path,
        }
    }
}

impl InputProvider for FileInput {
    fn id(&self) -> &str {
        &self.label
    }

    /// A missing or unreadable file fails here, when the reader is built,
    /// not on the first ask.
    fn open(&self) -> io::Result<Box<dyn Read + Send>> {
        Ok(Box::new(File::open(&self.path)?))
    }
}

/// Transcript file. Every prompt and message the reader prints is appended;
/// the file is created if missing and never truncated.
#[derive(Debug, Clone)]
pub struct FileOutput {
    label: String,
    path: PathBuf,
}

impl FileOutput {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            label: path.display().to_string(),
            path,
        }
    }
}

impl OutputTarget for FileOutput {
    fn id(&self) -> &str {
        &self.label
    }

    fn open(&self) -> io::Result<Box<dyn Write + Send>> {
        let file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        Ok(Box::new(file))
    }
}
