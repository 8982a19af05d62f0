//! Character encodings understood by [`LineSource`](crate::lines::LineSource).

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::PromptError;

/// How raw line bytes become text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum Encoding {
    /// Strict UTF-8; malformed lines fail the read.
    #[default]
    Utf8,
    /// UTF-8 with malformed sequences replaced by U+FFFD.
    Utf8Lossy,
    /// ISO-8859-1, every byte maps to the code point of the same value.
    Latin1,
}

impl Encoding {
    /// Parse an encoding label (case-insensitive).
    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Some(Encoding::Utf8),
            "utf-8-lossy" | "utf8-lossy" | "lossy" => Some(Encoding::Utf8Lossy),
            "latin1" | "latin-1" | "iso-8859-1" | "iso8859-1" => Some(Encoding::Latin1),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Encoding::Utf8 => "utf-8",
            Encoding::Utf8Lossy => "utf-8-lossy",
            Encoding::Latin1 => "iso-8859-1",
        }
    }

    /// Decode one line worth of bytes. `None` means the bytes are not valid
    /// in this encoding.
    pub fn decode(&self, bytes: Vec<u8>) -> Option<String> {
        match self {
            Encoding::Utf8 => String::from_utf8(bytes).ok(),
            Encoding::Utf8Lossy => Some(String::from_utf8_lossy(&bytes).into_owned()),
            Encoding::Latin1 => Some(bytes.into_iter().map(char::from).collect()),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Encoding {
    type Err = PromptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Encoding::from_label(s)
            .ok_or_else(|| PromptError::Config(format!("unknown encoding: {s}")))
    }
}

impl TryFrom<String> for Encoding {
    type Error = PromptError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
