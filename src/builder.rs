//! Builder for creating LineReader instances.

use std::sync::Arc;

use tracing::debug;

use crate::config::ReaderConfig;
use crate::encoding::Encoding;
use crate::error::{PromptError, Stage};
use crate::io::{
    FileInput, FileOutput, InMemorySource, InputProvider, OutputTarget, StderrOutput, StdinInput,
    StdoutOutput,
};
use crate::lines::LineSource;
use crate::locale::{Locale, Messages};
use crate::reader::LineReader;

pub struct LineReaderBuilder {
    input: Arc<dyn InputProvider>,
    output: Arc<dyn OutputTarget>,
    locale: Locale,
    custom_messages: Option<Box<dyn Messages>>,
    encoding: Encoding,
    max_attempts: Option<u32>,
}

impl LineReaderBuilder {
    pub fn new() -> Self {
        Self {
            input: Arc::new(StdinInput),
            output: Arc::new(StdoutOutput),
            locale: Locale::default(),
            custom_messages: None,
            encoding: Encoding::default(),
            max_attempts: None,
        }
    }

    pub fn with_input(mut self, input: Arc<dyn InputProvider>) -> Self {
        self.input = input;
        self
    }

    /// Resolve an input token: `-`/`stdin`, `=<inline text>`, `@<path>` or a
    /// plain path.
    pub fn with_input_token(mut self, token: &str) -> Self {
        self.input = resolve_input(token);
        self
    }

    pub fn with_output(mut self, output: Arc<dyn OutputTarget>) -> Self {
        self.output = output;
        self
    }

    /// Resolve an output token: `-`/`stdout`, `stderr`, `@<path>` or a plain
    /// path.
    pub fn with_output_token(mut self, token: &str) -> Self {
        self.output = resolve_output(token);
        self
    }

    /// Use one of the built-in message locales. Replaces any provider set
    /// with [`with_messages`](Self::with_messages).
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self.custom_messages = None;
        self
    }

    pub fn with_messages(mut self, messages: Box<dyn Messages>) -> Self {
        self.custom_messages = Some(messages);
        self
    }

    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Give up after `attempts` rejected lines per ask call. Zero means no
    /// limit.
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = (attempts > 0).then_some(attempts);
        self
    }

    pub fn from_config(config: &ReaderConfig) -> Self {
        let mut builder = LineReaderBuilder::new()
            .with_locale(config.locale)
            .with_encoding(config.encoding)
            .with_input_token(&config.input)
            .with_output_token(&config.output);
        if let Some(attempts) = config.max_attempts {
            builder = builder.with_max_attempts(attempts);
        }
        builder
    }

    /// Open the input and output and hand both to a new reader.
    pub fn build(self) -> Result<LineReader, PromptError> {
        let input_id = self.input.id().to_string();
        let reader = self
            .input
            .open()
            .map_err(|e| PromptError::io(Stage::Open, input_id.clone(), e))?;

        let output_id = self.output.id().to_string();
        let out = self
            .output
            .open()
            .map_err(|e| PromptError::io(Stage::Open, output_id.clone(), e))?;

        let (messages, locale) = match self.custom_messages {
            Some(messages) => (messages, None),
            None => (self.locale.messages(), Some(self.locale)),
        };

        debug!(
            input = %input_id,
            output = %output_id,
            encoding = %self.encoding,
            locale = ?locale,
            "built line reader"
        );

        Ok(LineReader::new(
            LineSource::new(input_id, reader, self.encoding),
            out,
            output_id,
            messages,
            locale,
            self.max_attempts,
        ))
    }
}

impl Default for LineReaderBuilder {
    fn default() -> Self {
        LineReaderBuilder::new()
    }
}

fn resolve_input(token: &str) -> Arc<dyn InputProvider> {
    if token == "-" || token.eq_ignore_ascii_case("stdin") {
        return Arc::new(StdinInput);
    }
    if let Some(text) = token.strip_prefix('=') {
        return Arc::new(InMemorySource::from_string("inline", text));
    }
    let path = token.strip_prefix('@').unwrap_or(token);
    Arc::new(FileInput::new(path))
}

fn resolve_output(token: &str) -> Arc<dyn OutputTarget> {
    if token == "-" || token.eq_ignore_ascii_case("stdout") {
        return Arc::new(StdoutOutput);
    }
    if token.eq_ignore_ascii_case("stderr") {
        return Arc::new(StderrOutput);
    }
    let path = token.strip_prefix('@').unwrap_or(token);
    Arc::new(FileOutput::new(path))
}
