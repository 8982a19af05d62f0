//! Reader configuration documents.
//!
//! A [`ReaderConfig`] describes a reader declaratively: which locale and
//! encoding to use, where lines come from and where prompts go. It can be
//! parsed from JSON (feature `json`) or YAML (feature `yaml`):
//!
//! ```yaml
//! locale: es
//! encoding: utf-8
//! input: answers.txt
//! output: "-"
//! max_attempts: 3
//! ```

use serde::Deserialize;

use crate::builder::LineReaderBuilder;
use crate::encoding::Encoding;
use crate::error::PromptError;
use crate::locale::Locale;
use crate::reader::LineReader;

/// Declarative description of a [`LineReader`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReaderConfig {
    /// Message locale: "en" or "es"
    #[serde(default)]
    pub locale: Locale,
    /// Input encoding: "utf-8", "utf-8-lossy" or "latin1"
    #[serde(default)]
    pub encoding: Encoding,
    /// Input token ("-" for stdin, "=text" for inline text, otherwise a path)
    #[serde(default = "default_stream_token")]
    pub input: String,
    /// Output token ("-" for stdout, "stderr", otherwise a path)
    #[serde(default = "default_stream_token")]
    pub output: String,
    /// Attempts per ask call before giving up; unset or 0 means unlimited
    #[serde(default)]
    pub max_attempts: Option<u32>,
}

fn default_stream_token() -> String {
    "-".to_string()
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            encoding: Encoding::default(),
            input: default_stream_token(),
            output: default_stream_token(),
            max_attempts: None,
        }
    }
}

impl ReaderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_input(mut self, token: impl Into<String>) -> Self {
        self.input = token.into();
        self
    }

    pub fn with_output(mut self, token: impl Into<String>) -> Self {
        self.output = token.into();
        self
    }

    #[cfg(feature = "json")]
    pub fn from_json_str(s: &str) -> Result<Self, PromptError> {
        serde_json::from_str(s).map_err(|e| PromptError::Config(e.to_string()))
    }

    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(s: &str) -> Result<Self, PromptError> {
        serde_yaml::from_str(s).map_err(|e| PromptError::Config(e.to_string()))
    }

    pub fn builder(&self) -> LineReaderBuilder {
        LineReaderBuilder::from_config(self)
    }

    pub fn build(&self) -> Result<LineReader, PromptError> {
        self.builder().build()
    }
}
