//! Pure checks that turn one raw line into a typed value.
//!
//! Each check returns the accepted value or the [`Violation`] describing why
//! the line was rejected. The reader composes them; nothing here performs
//! I/O apart from the filesystem lookup in [`check_exists`].

use std::path::Path;

use crate::locale::Messages;

/// Why a line was rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Violation {
    TooShort { min_len: usize },
    TooLong { max_len: usize },
    InvalidOption,
    FileNotFound,
    NotInteger,
    NotNatural,
    IntOutOfRange { min: i32, max: i32 },
    NotFloat,
    FloatOutOfRange { min: f32, max: f32 },
}

impl Violation {
    /// Render this violation with the given provider.
    pub fn message(&self, messages: &dyn Messages) -> String {
        match *self {
            Violation::TooShort { min_len } => messages.min_len(min_len),
            Violation::TooLong { max_len } => messages.max_len(max_len),
            Violation::InvalidOption => messages.invalid_option(),
            Violation::FileNotFound => messages.file_not_found(),
            Violation::NotInteger => messages.not_int(),
            Violation::NotNatural => messages.not_natural(),
            Violation::IntOutOfRange { min, max } => messages.int_not_in_range(min, max),
            Violation::NotFloat => messages.not_float(),
            Violation::FloatOutOfRange { min, max } => messages.float_not_in_range(min, max),
        }
    }

    /// Short stable name, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Violation::TooShort { .. } => "too_short",
            Violation::TooLong { .. } => "too_long",
            Violation::InvalidOption => "invalid_option",
            Violation::FileNotFound => "file_not_found",
            Violation::NotInteger => "not_integer",
            Violation::NotNatural => "not_natural",
            Violation::IntOutOfRange { .. } => "int_out_of_range",
            Violation::NotFloat => "not_float",
            Violation::FloatOutOfRange { .. } => "float_out_of_range",
        }
    }
}

/// Order two bounds so that the first is not greater than the second.
///
/// Used by the numeric range checks only; string length bounds are taken as
/// given.
pub fn normalize_range<T: PartialOrd>(min: T, max: T) -> (T, T) {
    if min > max { (max, min) } else { (min, max) }
}

/// Length in characters must lie in `[min_len, max_len]`. The lower bound is
/// checked first. Inverted bounds reject every input.
pub fn check_length(input: &str, min_len: usize, max_len: usize) -> Result<(), Violation> {
    let len = input.chars().count();
    if len < min_len {
        Err(Violation::TooShort { min_len })
    } else if len > max_len {
        Err(Violation::TooLong { max_len })
    } else {
        Ok(())
    }
}

/// Exact, case-sensitive membership.
pub fn check_member<S: AsRef<str>>(input: &str, options: &[S]) -> Result<(), Violation> {
    if options.iter().any(|o| o.as_ref() == input) {
        Ok(())
    } else {
        Err(Violation::InvalidOption)
    }
}

pub fn check_exists(input: &str) -> Result<(), Violation> {
    if Path::new(input).exists() {
        Ok(())
    } else {
        Err(Violation::FileNotFound)
    }
}

/// Base-10 `i32`. Surrounding whitespace is not accepted.
pub fn parse_int(input: &str) -> Result<i32, Violation> {
    input.parse::<i32>().map_err(|_| Violation::NotInteger)
}

pub fn check_natural(n: i32) -> Result<i32, Violation> {
    if n >= 0 { Ok(n) } else { Err(Violation::NotNatural) }
}

/// `min` and `max` must already be normalized.
pub fn check_int_range(n: i32, min: i32, max: i32) -> Result<i32, Violation> {
    if (min..=max).contains(&n) {
        Ok(n)
    } else {
        Err(Violation::IntOutOfRange { min, max })
    }
}

/// `f32` in the usual decimal notation, with an optional sign, exponent and
/// one trailing type suffix (`f`, `F`, `d`, `D`). Leading and trailing ASCII
/// control characters and spaces are ignored.
///
/// The only non-finite spellings are `Infinity` and `NaN`, each with an
/// optional sign and exactly that case. `inf`, `infinity`, `nan` and the like
/// are rejected, and so are hexadecimal literals.
pub fn parse_float(input: &str) -> Result<f32, Violation> {
    let text = input.trim_matches(|c: char| c <= ' ');
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);

    let magnitude = match unsigned {
        "Infinity" => f32::INFINITY,
        "NaN" => f32::NAN,
        _ => {
            let digits = unsigned
                .strip_suffix(['f', 'F', 'd', 'D'])
                .unwrap_or(unsigned);
            if !digits.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
                return Err(Violation::NotFloat);
            }
            digits.parse::<f32>().map_err(|_| Violation::NotFloat)?
        }
    };

    Ok(if text.starts_with('-') { -magnitude } else { magnitude })
}

/// `min` and `max` must already be normalized. NaN is never in range.
pub fn check_float_range(x: f32, min: f32, max: f32) -> Result<f32, Violation> {
    if x >= min && x <= max {
        Ok(x)
    } else {
        Err(Violation::FloatOutOfRange { min, max })
    }
}
