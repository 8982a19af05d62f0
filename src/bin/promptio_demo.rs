use std::error::Error;

use promptio::LineReaderBuilder;
use promptio::cli::{EncodingArg, InputArg, LocaleArg, init_tracing};
use sarge::prelude::*;

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  promptio_demo [--input <token>] [--lang <en|es>] [--encoding <label>]");
    eprintln!();
    eprintln!("Input tokens:");
    eprintln!("  - | stdin          Read answers from stdin (default)");
    eprintln!("  =<content>         Inline answers (single line)");
    eprintln!("  @<path>            Force treating value as a file path");
    eprintln!();
    eprintln!("Encodings: utf-8, utf-8-lossy, latin1");
}

fn run() -> Result<(), Box<dyn Error>> {
    let mut args_reader = ArgumentReader::new();

    let input_ref = args_reader.add::<InputArg>(tag::both('i', "input"));
    let lang_ref = args_reader.add::<LocaleArg>(tag::both('l', "lang"));
    let encoding_ref = args_reader.add::<EncodingArg>(tag::both('e', "encoding"));

    let args = args_reader.parse()?;

    let input = match input_ref.get(&args) {
        Some(Ok(v)) => v,
        Some(Err(e)) => match e {},
        None => InputArg::default(),
    };
    let LocaleArg(locale) = lang_ref.get(&args).transpose()?.unwrap_or_default();
    let EncodingArg(encoding) = encoding_ref.get(&args).transpose()?.unwrap_or_default();

    let mut reader = LineReaderBuilder::new()
        .with_input_token(input.as_str())
        .with_locale(locale)
        .with_encoding(encoding)
        .build()?;

    let (age_q, name_q, color_q, ratio_q) = match locale {
        promptio::Locale::En => (
            "Enter an integer: ",
            "Enter a string: ",
            "Pick a color",
            "Enter a ratio between 0 and 1: ",
        ),
        promptio::Locale::Es => (
            "Introduce un entero: ",
            "Introduce una cadena: ",
            "Elige un color",
            "Introduce una proporción entre 0 y 1: ",
        ),
    };

    let age = reader.read_int_in_range(age_q, 0, 100)?;
    let name = reader.read_string(name_q, 1, 40)?;
    let color = reader.read_string_from_set(color_q, &["red", "green", "blue"])?;
    let ratio = reader.read_float_in_range(ratio_q, 0.0, 1.0)?;
    reader.close()?;

    println!();
    println!("{age} | {name} | {color} | {ratio}");

    Ok(())
}

fn main() {
    init_tracing();
    if let Err(e) = run() {
        eprintln!("promptio_demo error: {e}");
        print_usage();
        std::process::exit(1);
    }
}
