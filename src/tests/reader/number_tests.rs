//! Tests for the integer and float ask operations.

use crate::tests::support::scripted;
use crate::{Locale, PromptError};

#[test]
fn read_int_retries_until_parseable() {
    let (mut reader, sink) = scripted(Locale::En, &["abc", "12x", " 3", "-5"]);

    assert_eq!(reader.read_int("N: ").unwrap(), -5);
    assert_eq!(
        sink.contents_string(),
        "N: The value is not a valid integer.\n".repeat(3) + "N: "
    );
}

#[test]
fn read_int_rejects_values_beyond_i32() {
    let (mut reader, _sink) = scripted(Locale::En, &["2147483648", "2147483647"]);

    assert_eq!(reader.read_int("> ").unwrap(), i32::MAX);
}

#[test]
fn read_natural_distinguishes_parse_and_sign_failures() {
    let (mut reader, sink) = scripted(Locale::En, &["-1", "x", "0"]);

    assert_eq!(reader.read_natural("> ").unwrap(), 0);
    assert_eq!(
        sink.contents_string(),
        "> The number must be a natural -> [0, inf)\n\
         > The value is not a valid integer.\n\
         > "
    );
}

#[test]
fn read_natural_spanish() {
    let (mut reader, sink) = scripted(Locale::Es, &["-3", "42"]);

    assert_eq!(reader.read_natural("> ").unwrap(), 42);
    assert_eq!(
        sink.contents_string(),
        "> El número debe ser natural -> [0, inf)\n> "
    );
}

#[test]
fn read_int_in_range_swaps_inverted_bounds() {
    let (mut reader, sink) = scripted(Locale::En, &["0", "11", "5"]);

    assert_eq!(reader.read_int_in_range("> ", 10, 1).unwrap(), 5);
    assert_eq!(
        sink.contents_string(),
        "> The number must be an integer in the range [1, 10]\n".repeat(2) + "> "
    );
}

#[test]
fn read_int_in_range_accepts_bounds() {
    let (mut reader, _sink) = scripted(Locale::En, &["-3", "3"]);

    assert_eq!(reader.read_int_in_range("> ", -3, 3).unwrap(), -3);
    assert_eq!(reader.read_int_in_range("> ", -3, 3).unwrap(), 3);
}

#[test]
fn read_int_in_range_degenerate_range() {
    let (mut reader, sink) = scripted(Locale::Es, &["8", "7"]);

    assert_eq!(reader.read_int_in_range("> ", 7, 7).unwrap(), 7);
    assert_eq!(
        sink.contents_string(),
        "> El número debe ser un entero en el rango [7, 7]\n> "
    );
}

#[test]
fn read_float_parses_common_notations() {
    let (mut reader, sink) = scripted(Locale::En, &["one", "1e3", " 2.5 ", "-0.125"]);

    assert_eq!(reader.read_float("> ").unwrap(), 1000.0);
    assert_eq!(reader.read_float("> ").unwrap(), 2.5);
    assert_eq!(reader.read_float("> ").unwrap(), -0.125);
    assert_eq!(
        sink.contents_string(),
        "> The value is not a valid float.\n> > > "
    );
}

#[test]
fn read_float_takes_suffixed_literals() {
    let (mut reader, sink) = scripted(Locale::En, &["2.5f", "1d", "3F"]);

    assert_eq!(reader.read_float("> ").unwrap(), 2.5);
    assert_eq!(reader.read_float("> ").unwrap(), 1.0);
    assert_eq!(reader.read_float("> ").unwrap(), 3.0);
    assert_eq!(sink.contents_string(), "> > > ");
}

#[test]
fn read_float_rejects_lowercase_infinity_and_nan() {
    let (mut reader, sink) = scripted(Locale::En, &["inf", "infinity", "nan", "+inf", "2.5f"]);

    assert_eq!(reader.read_float("> ").unwrap(), 2.5);
    assert_eq!(
        sink.contents_string(),
        "> The value is not a valid float.\n".repeat(4) + "> "
    );
}

#[test]
fn read_float_takes_exact_infinity_and_nan() {
    let (mut reader, sink) = scripted(Locale::En, &["Infinity", "-Infinity", "NaN"]);

    assert_eq!(reader.read_float("> ").unwrap(), f32::INFINITY);
    assert_eq!(reader.read_float("> ").unwrap(), f32::NEG_INFINITY);
    assert!(reader.read_float("> ").unwrap().is_nan());
    assert_eq!(sink.contents_string(), "> > > ");
}

#[test]
fn read_float_in_range_rejects_parse_then_range_failures() {
    let (mut reader, sink) = scripted(Locale::En, &["abc", "1.5", "0.5"]);

    assert_eq!(reader.read_float_in_range("R: ", 0.0, 1.0).unwrap(), 0.5);
    assert_eq!(
        sink.contents_string(),
        "R: The value is not a valid float.\n\
         R: The number must be a float in the range [0.000000, 1.000000]\n\
         R: "
    );
}

#[test]
fn read_float_in_range_swaps_inverted_bounds() {
    let (mut reader, sink) = scripted(Locale::Es, &["NaN", "2", "0.25"]);

    assert_eq!(reader.read_float_in_range("> ", 1.0, -1.0).unwrap(), 0.25);
    assert_eq!(
        sink.contents_string(),
        "> El número debe ser un float en el rango [-1.000000, 1.000000]\n".repeat(2) + "> "
    );
}

#[test]
fn exhausted_input_ends_a_numeric_loop() {
    let (mut reader, sink) = scripted(Locale::En, &["abc"]);

    let err = reader.read_int_in_range("> ", 0, 10).unwrap_err();

    match err {
        PromptError::StreamExhausted { source_id } => assert_eq!(source_id, "in"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(
        sink.contents_string(),
        "> The value is not a valid integer.\n> "
    );
}
