//! Localized rejection messages.
//!
//! A [`LineReader`](crate::LineReader) never formats user-facing text itself.
//! Every rejected attempt is turned into a string by the reader's
//! [`Messages`] provider, chosen once at construction.
//!
//! # Built-in locales
//!
//! - [`Locale::En`] → [`English`]
//! - [`Locale::Es`] → [`Spanish`]
//!
//! # Custom locales
//!
//! Implement [`Messages`] and install it with
//! [`LineReaderBuilder::with_messages`](crate::LineReaderBuilder::with_messages):
//!
//! ```rust
//! use promptio::locale::Messages;
//!
//! #[derive(Debug)]
//! struct Shouty;
//!
//! impl Messages for Shouty {
//!     fn min_len(&self, n: usize) -> String { format!("AT LEAST {n}!") }
//!     fn max_len(&self, n: usize) -> String { format!("AT MOST {n}!") }
//!     fn no_options(&self) -> String { "NO OPTIONS!".into() }
//!     fn invalid_option(&self) -> String { "BAD OPTION!".into() }
//!     fn file_not_found(&self) -> String { "NO SUCH FILE!".into() }
//!     fn not_int(&self) -> String { "NOT AN INT!".into() }
//!     fn not_natural(&self) -> String { "NOT NATURAL!".into() }
//!     fn int_not_in_range(&self, min: i32, max: i32) -> String { format!("{min}..={max}!") }
//!     fn not_float(&self) -> String { "NOT A FLOAT!".into() }
//!     fn float_not_in_range(&self, min: f32, max: f32) -> String { format!("{min}..={max}!") }
//! }
//! ```

mod en;
mod es;

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::PromptError;

pub use en::English;
pub use es::Spanish;

/// One message per kind of rejected input.
///
/// Implementations must be pure: the same arguments always give the same
/// string, independent of earlier attempts.
pub trait Messages: Send + Sync + fmt::Debug {
    /// Input shorter than `min_len` characters.
    fn min_len(&self, min_len: usize) -> String;
    /// Input longer than `max_len` characters.
    fn max_len(&self, max_len: usize) -> String;
    /// An option prompt was given an empty option list.
    fn no_options(&self) -> String;
    fn invalid_option(&self) -> String;
    fn file_not_found(&self) -> String;
    fn not_int(&self) -> String;
    fn not_natural(&self) -> String;
    /// Bounds are already normalized so that `min <= max`.
    fn int_not_in_range(&self, min: i32, max: i32) -> String;
    fn not_float(&self) -> String;
    /// Bounds are already normalized so that `min <= max`.
    ///
    /// The built-in providers print each bound with `{:.6}`: six decimals
    /// after the full integer part, so `1e10` shows as `10000000000.000000`
    /// and infinite bounds as `inf` / `-inf`.
    fn float_not_in_range(&self, min: f32, max: f32) -> String;
}

/// Built-in message locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum Locale {
    /// English (default).
    #[default]
    En,
    /// Spanish.
    Es,
}

/// Every built-in locale, in presentation order.
pub const SUPPORTED_LOCALES: &[Locale] = &[Locale::En, Locale::Es];

impl Locale {
    /// ISO 639-1 code of the locale.
    pub const fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
        }
    }

    /// Parse a locale code (case-insensitive, region tags such as `es-MX`
    /// or `en_US` are accepted and ignored).
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        let lang = normalized.split(['-', '_']).next().unwrap_or("");
        match lang {
            "en" | "english" => Some(Locale::En),
            "es" | "spanish" | "español" => Some(Locale::Es),
            _ => None,
        }
    }

    /// The message provider for this locale.
    pub fn messages(self) -> Box<dyn Messages> {
        match self {
            Locale::En => Box::new(English),
            Locale::Es => Box::new(Spanish),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = PromptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::parse(s).ok_or_else(|| PromptError::Config(format!("unknown locale: {s}")))
    }
}

impl TryFrom<String> for Locale {
    type Error = PromptError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
