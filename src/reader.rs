//! The validated line reader.
//!
//! Every ask operation follows the same loop: print the prompt, read one
//! line, validate it. A rejected line prints exactly one localized message
//! and the loop starts over. The loop ends when a line is accepted or the
//! input side fails (exhausted, closed, unreadable).
//!
//! There is no timeout. Unless the reader was built with
//! [`LineReaderBuilder::with_max_attempts`], an ask call keeps asking for as
//! long as the input keeps producing lines.

use std::io::{Read, Write};
use std::path::PathBuf;
use std::sync::Arc;

use tracing::debug;

use crate::builder::LineReaderBuilder;
use crate::error::{PromptError, Stage};
use crate::io::{FileInput, InMemorySource, ReadInput};
use crate::lines::LineSource;
use crate::locale::{Locale, Messages};
use crate::validate::{self, Violation};

pub struct LineReader {
    lines: Option<LineSource>,
    out: Box<dyn Write + Send>,
    out_id: String,
    messages: Box<dyn Messages>,
    locale: Option<Locale>,
    max_attempts: Option<u32>,
}

impl LineReader {
    pub(crate) fn new(
        lines: LineSource,
        out: Box<dyn Write + Send>,
        out_id: String,
        messages: Box<dyn Messages>,
        locale: Option<Locale>,
        max_attempts: Option<u32>,
    ) -> Self {
        Self {
            lines: Some(lines),
            out,
            out_id,
            messages,
            locale,
            max_attempts,
        }
    }

    /// Reader over the process's standard input.
    pub fn stdin(locale: Locale) -> Result<Self, PromptError> {
        LineReaderBuilder::new().with_locale(locale).build()
    }

    /// Reader over in-memory text.
    pub fn from_text(text: impl Into<String>, locale: Locale) -> Result<Self, PromptError> {
        LineReaderBuilder::new()
            .with_locale(locale)
            .with_input(Arc::new(InMemorySource::from_string("memory", text)))
            .build()
    }

    /// Reader over a file.
    pub fn from_path(path: impl Into<PathBuf>, locale: Locale) -> Result<Self, PromptError> {
        LineReaderBuilder::new()
            .with_locale(locale)
            .with_input(Arc::new(FileInput::new(path)))
            .build()
    }

    /// Reader over any byte stream.
    pub fn from_read(reader: impl Read + Send + 'static, locale: Locale) -> Result<Self, PromptError> {
        LineReaderBuilder::new()
            .with_locale(locale)
            .with_input(Arc::new(ReadInput::new("stream", reader)))
            .build()
    }

    /// The built-in locale in use, if the provider came from one.
    pub fn locale(&self) -> Option<Locale> {
        self.locale
    }

    pub fn messages(&self) -> &dyn Messages {
        self.messages.as_ref()
    }

    pub fn max_attempts(&self) -> Option<u32> {
        self.max_attempts
    }

    pub fn is_closed(&self) -> bool {
        self.lines.is_none()
    }

    /// Print `prompt` and return the next line verbatim (without its line
    /// terminator). The empty string is a valid answer.
    pub fn read_line(&mut self, prompt: &str) -> Result<String, PromptError> {
        if self.lines.is_none() {
            return Err(PromptError::Closed);
        }
        self.write(prompt)?;

        let lines = self.lines.as_mut().ok_or(PromptError::Closed)?;
        match lines.next_line()? {
            Some(line) => Ok(line),
            None => {
                debug!(source = %lines.id(), "input exhausted");
                Err(PromptError::StreamExhausted {
                    source_id: lines.id().to_string(),
                })
            }
        }
    }

    /// A line of `min_len..=max_len` characters.
    ///
    /// Inverted bounds are not swapped: with `min_len > max_len` no line is
    /// ever accepted.
    pub fn read_string(
        &mut self,
        prompt: &str,
        min_len: usize,
        max_len: usize,
    ) -> Result<String, PromptError> {
        self.ask(prompt, |line| {
            validate::check_length(line, min_len, max_len)?;
            Ok(line.to_string())
        })
    }

    /// A line equal to one of `options`.
    ///
    /// The options are appended to the prompt as ` [a, b, c] `. An empty
    /// option list fails with [`PromptError::InvalidArgument`] before anything
    /// is printed or read.
    pub fn read_string_from_set<S: AsRef<str>>(
        &mut self,
        prompt: &str,
        options: &[S],
    ) -> Result<String, PromptError> {
        if options.is_empty() {
            return Err(PromptError::InvalidArgument(self.messages.no_options()));
        }

        let listed: Vec<&str> = options.iter().map(AsRef::as_ref).collect();
        let prompt = format!("{prompt} [{}] ", listed.join(", "));
        self.ask(&prompt, |line| {
            validate::check_member(line, options)?;
            Ok(line.to_string())
        })
    }

    /// A non-empty line naming a path that exists right now.
    pub fn read_existing_filename(&mut self, prompt: &str) -> Result<String, PromptError> {
        self.ask(prompt, |line| {
            validate::check_length(line, 1, usize::MAX)?;
            validate::check_exists(line)?;
            Ok(line.to_string())
        })
    }

    pub fn read_int(&mut self, prompt: &str) -> Result<i32, PromptError> {
        self.ask(prompt, validate::parse_int)
    }

    /// An integer `>= 0`.
    pub fn read_natural(&mut self, prompt: &str) -> Result<i32, PromptError> {
        self.ask(prompt, |line| validate::check_natural(validate::parse_int(line)?))
    }

    /// An integer in `[min, max]`. Inverted bounds are swapped first.
    pub fn read_int_in_range(
        &mut self,
        prompt: &str,
        min: i32,
        max: i32,
    ) -> Result<i32, PromptError> {
        let (min, max) = validate::normalize_range(min, max);
        self.ask(prompt, |line| {
            validate::check_int_range(validate::parse_int(line)?, min, max)
        })
    }

    pub fn read_float(&mut self, prompt: &str) -> Result<f32, PromptError> {
        self.ask(prompt, validate::parse_float)
    }

    /// A float in `[min, max]`. Inverted bounds are swapped first.
    pub fn read_float_in_range(
        &mut self,
        prompt: &str,
        min: f32,
        max: f32,
    ) -> Result<f32, PromptError> {
        let (min, max) = validate::normalize_range(min, max);
        self.ask(prompt, |line| {
            validate::check_float_range(validate::parse_float(line)?, min, max)
        })
    }

    /// Flush the output and release the input. Fails with
    /// [`PromptError::Closed`] if the reader was already closed.
    pub fn close(&mut self) -> Result<(), PromptError> {
        let lines = self.lines.take().ok_or(PromptError::Closed)?;
        debug!(source = %lines.id(), "closing reader");
        drop(lines);
        self.out
            .flush()
            .map_err(|e| PromptError::io(Stage::Write, self.out_id.clone(), e))
    }

    fn ask<T, F>(&mut self, prompt: &str, mut check: F) -> Result<T, PromptError>
    where
        F: FnMut(&str) -> Result<T, Violation>,
    {
        let mut attempts: u32 = 0;
        loop {
            let line = self.read_line(prompt)?;
            attempts = attempts.saturating_add(1);

            let violation = match check(&line) {
                Ok(value) => return Ok(value),
                Err(v) => v,
            };
            debug!(kind = violation.kind(), attempt = attempts, "rejected input");
            let message = violation.message(self.messages.as_ref());
            self.write(&message)?;
            self.write("\n")?;

            if self.max_attempts.is_some_and(|limit| attempts >= limit) {
                return Err(PromptError::AttemptsExhausted { attempts });
            }
        }
    }

    fn write(&mut self, text: &str) -> Result<(), PromptError> {
        self.out
            .write_all(text.as_bytes())
            .and_then(|()| self.out.flush())
            .map_err(|e| PromptError::io(Stage::Write, self.out_id.clone(), e))
    }
}

impl std::fmt::Debug for LineReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineReader")
            .field("lines", &self.lines)
            .field("out", &self.out_id)
            .field("messages", &self.messages)
            .field("max_attempts", &self.max_attempts)
            .finish()
    }
}
