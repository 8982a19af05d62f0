//! CLI integration helpers for promptio.
//!
//! Small argument types for front-ends that let the user pick where answers
//! come from, which message locale to use, and how input bytes are decoded.
//! With the `sarge` feature they implement `sarge::ArgumentType`.
//!
//! # Example with sarge
//!
//! ```rust,ignore
//! use promptio::cli::{InputArg, LocaleArg};
//! use sarge::prelude::*;
//!
//! let mut reader = ArgumentReader::new();
//! let input_ref = reader.add::<InputArg>(tag::both('i', "input"));
//! let lang_ref = reader.add::<LocaleArg>(tag::both('l', "lang"));
//! let args = reader.parse()?;
//! ```

use crate::encoding::Encoding;
use crate::locale::Locale;

#[cfg(feature = "sarge")]
mod sarge;

#[cfg(feature = "cli")]
mod logging;

#[cfg(feature = "cli")]
pub use logging::init_tracing;

/// A normalized input token, ready for
/// [`LineReaderBuilder::with_input_token`](crate::LineReaderBuilder::with_input_token).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputArg(String);

impl InputArg {
    /// Normalize a raw token.
    ///
    /// `-`/`stdin` become `-`; tokens starting with `=` (inline text) or `@`
    /// (forced path) are kept; an existing path is kept; anything else is
    /// treated as inline text.
    pub fn normalize(token: &str) -> Self {
        if token.starts_with('@') || token.starts_with('=') {
            return InputArg(token.to_string());
        }

        if token == "-" || token.eq_ignore_ascii_case("stdin") {
            return InputArg("-".to_string());
        }

        if std::fs::metadata(token).is_ok() {
            InputArg(token.to_string())
        } else {
            InputArg(format!("={token}"))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_stdin(&self) -> bool {
        self.0 == "-"
    }
}

impl Default for InputArg {
    fn default() -> Self {
        InputArg("-".to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LocaleArg(pub Locale);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EncodingArg(pub Encoding);
