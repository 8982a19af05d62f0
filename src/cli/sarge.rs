use std::convert::Infallible;

use sarge::ArgumentType;

use crate::cli::{EncodingArg, InputArg, LocaleArg};
use crate::error::PromptError;

impl ArgumentType for InputArg {
    type Error = Infallible;

    const REPEATABLE: bool = false;

    fn from_value(val: Option<&str>) -> sarge::ArgResult<Self> {
        let token = val.map(str::trim).filter(|s| !s.is_empty()).unwrap_or("-");
        Some(Ok(InputArg::normalize(token)))
    }

    fn default_value() -> Option<Self> {
        Some(InputArg::default())
    }
}

impl ArgumentType for LocaleArg {
    type Error = PromptError;

    const REPEATABLE: bool = false;

    fn from_value(val: Option<&str>) -> sarge::ArgResult<Self> {
        let raw = val?;
        Some(raw.parse().map(LocaleArg))
    }

    fn default_value() -> Option<Self> {
        Some(LocaleArg::default())
    }
}

impl ArgumentType for EncodingArg {
    type Error = PromptError;

    const REPEATABLE: bool = false;

    fn from_value(val: Option<&str>) -> sarge::ArgResult<Self> {
        let raw = val?;
        Some(raw.parse().map(EncodingArg))
    }

    fn default_value() -> Option<Self> {
        Some(EncodingArg::default())
    }
}
