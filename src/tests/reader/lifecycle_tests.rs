//! Tests for reader construction, limits, decoding and closing.

use std::sync::Arc;

use crate::tests::support::{scripted, scripted_text};
use crate::{
    Encoding, InMemorySink, InMemorySource, LineReader, LineReaderBuilder, Locale, Messages,
    PromptError, ReadInput,
};

#[test]
fn empty_input_is_exhausted_immediately() {
    let (mut reader, sink) = scripted(Locale::En, &[]);

    let err = reader.read_line("> ").unwrap_err();

    assert!(matches!(err, PromptError::StreamExhausted { .. }));
    assert!(err.is_end_of_input());
    assert_eq!(sink.contents_string(), "> ");
}

#[test]
fn line_terminators_are_stripped() {
    let (mut reader, _sink) = scripted_text("first\r\nsecond\n\nlast");

    assert_eq!(reader.read_line("").unwrap(), "first");
    assert_eq!(reader.read_line("").unwrap(), "second");
    assert_eq!(reader.read_line("").unwrap(), "");
    assert_eq!(reader.read_line("").unwrap(), "last");
    assert!(matches!(
        reader.read_line(""),
        Err(PromptError::StreamExhausted { .. })
    ));
}

#[test]
fn close_releases_input_and_blocks_further_reads() {
    let (mut reader, _sink) = scripted(Locale::En, &["1", "2"]);

    assert_eq!(reader.read_int("> ").unwrap(), 1);
    reader.close().unwrap();

    assert!(reader.is_closed());
    assert!(matches!(reader.read_int("> "), Err(PromptError::Closed)));
    assert!(matches!(reader.close(), Err(PromptError::Closed)));
}

#[test]
fn read_after_close_prints_nothing() {
    let (mut reader, sink) = scripted(Locale::En, &["x"]);
    reader.close().unwrap();

    let _ = reader.read_line("> ");
    assert_eq!(sink.contents_string(), "");
}

#[test]
fn max_attempts_bounds_each_call_separately() {
    let sink = Arc::new(InMemorySink::new("out"));
    let mut reader = LineReaderBuilder::new()
        .with_input(Arc::new(InMemorySource::from_lines("in", ["a", "b", "c", "7"])))
        .with_output(sink.clone())
        .with_max_attempts(2)
        .build()
        .unwrap();

    let err = reader.read_int("> ").unwrap_err();
    assert!(matches!(err, PromptError::AttemptsExhausted { attempts: 2 }));

    // "c" is rejected, "7" accepted: the counter starts over per call.
    assert_eq!(reader.read_int("> ").unwrap(), 7);
    assert_eq!(reader.max_attempts(), Some(2));
}

#[test]
fn zero_max_attempts_means_unbounded() {
    let sink = Arc::new(InMemorySink::new("out"));
    let mut reader = LineReaderBuilder::new()
        .with_input(Arc::new(InMemorySource::from_lines(
            "in",
            ["a", "b", "c", "d", "5"],
        )))
        .with_output(sink)
        .with_max_attempts(0)
        .build()
        .unwrap();

    assert_eq!(reader.max_attempts(), None);
    assert_eq!(reader.read_int("> ").unwrap(), 5);
}

#[test]
fn switching_locale_changes_text_not_acceptance() {
    let answers = ["x", "-4", "12", "3"];
    let (mut en, en_out) = scripted(Locale::En, &answers);
    let (mut es, es_out) = scripted(Locale::Es, &answers);

    assert_eq!(en.read_int_in_range("> ", 0, 10).unwrap(), 3);
    assert_eq!(es.read_int_in_range("> ", 0, 10).unwrap(), 3);

    let en_text = en_out.contents_string();
    let es_text = es_out.contents_string();
    assert_ne!(en_text, es_text);
    assert_eq!(en_text.lines().count(), es_text.lines().count());
    assert_eq!(en.locale(), Some(Locale::En));
    assert_eq!(es.locale(), Some(Locale::Es));
}

#[derive(Debug)]
struct Terse;

impl Messages for Terse {
    fn min_len(&self, n: usize) -> String {
        format!("min {n}")
    }
    fn max_len(&self, n: usize) -> String {
        format!("max {n}")
    }
    fn no_options(&self) -> String {
        "none".into()
    }
    fn invalid_option(&self) -> String {
        "option".into()
    }
    fn file_not_found(&self) -> String {
        "file".into()
    }
    fn not_int(&self) -> String {
        "int".into()
    }
    fn not_natural(&self) -> String {
        "natural".into()
    }
    fn int_not_in_range(&self, min: i32, max: i32) -> String {
        format!("{min}..{max}")
    }
    fn not_float(&self) -> String {
        "float".into()
    }
    fn float_not_in_range(&self, min: f32, max: f32) -> String {
        format!("{min}..{max}")
    }
}

#[test]
fn custom_provider_replaces_builtin_messages() {
    let sink = Arc::new(InMemorySink::new("out"));
    let mut reader = LineReaderBuilder::new()
        .with_messages(Box::new(Terse))
        .with_input(Arc::new(InMemorySource::from_lines("in", ["q", "99", "9"])))
        .with_output(sink.clone())
        .build()
        .unwrap();

    assert_eq!(reader.read_int_in_range("", 1, 9).unwrap(), 9);
    assert_eq!(sink.contents_string(), "int\n1..9\n");
    assert_eq!(reader.locale(), None);
    assert_eq!(reader.messages().no_options(), "none");
}

#[test]
fn with_locale_after_custom_provider_restores_builtin() {
    let reader = LineReaderBuilder::new()
        .with_messages(Box::new(Terse))
        .with_locale(Locale::Es)
        .with_input(Arc::new(InMemorySource::from_string("in", "")))
        .with_output(Arc::new(InMemorySink::new("out")))
        .build()
        .unwrap();

    assert_eq!(reader.locale(), Some(Locale::Es));
    assert_eq!(reader.messages().not_int(), "El valor no es un entero válido.");
}

fn reader_over_bytes(bytes: &'static [u8], encoding: Encoding) -> LineReader {
    LineReaderBuilder::new()
        .with_input(Arc::new(ReadInput::new("bytes", bytes)))
        .with_output(Arc::new(InMemorySink::new("out")))
        .with_encoding(encoding)
        .build()
        .unwrap()
}

#[test]
fn latin1_input_is_decoded() {
    let mut reader = reader_over_bytes(b"ca\xf1a\n", Encoding::Latin1);
    assert_eq!(reader.read_line("").unwrap(), "caña");
}

#[test]
fn strict_utf8_rejects_malformed_lines() {
    let mut reader = reader_over_bytes(b"ca\xf1a\nok\n", Encoding::Utf8);

    let err = reader.read_line("").unwrap_err();
    assert!(matches!(
        err,
        PromptError::Decode {
            encoding: Encoding::Utf8,
            ..
        }
    ));
    // The malformed line is consumed; the next one is still readable.
    assert_eq!(reader.read_line("").unwrap(), "ok");
}

#[test]
fn lossy_utf8_replaces_malformed_bytes() {
    let mut reader = reader_over_bytes(b"ca\xf1a\n", Encoding::Utf8Lossy);
    assert_eq!(reader.read_line("").unwrap(), "ca\u{FFFD}a");
}

#[test]
fn convenience_constructors_open_their_sources() {
    let mut reader = LineReader::from_text("12\n", Locale::Es).unwrap();
    assert_eq!(reader.locale(), Some(Locale::Es));
    assert!(!reader.is_closed());
    reader.close().unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("answers.txt");
    std::fs::write(&path, "yes\n").unwrap();
    let mut reader = LineReader::from_path(&path, Locale::En).unwrap();
    reader.close().unwrap();

    let err = LineReader::from_path(dir.path().join("missing.txt"), Locale::En).unwrap_err();
    assert!(matches!(
        err,
        PromptError::Io {
            stage: crate::Stage::Open,
            ..
        }
    ));

    let mut reader = LineReader::from_read(std::io::Cursor::new(b"x\n".to_vec()), Locale::En).unwrap();
    reader.close().unwrap();
}
