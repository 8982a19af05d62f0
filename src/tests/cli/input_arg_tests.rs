use crate::cli::InputArg;

#[test]
fn input_arg_autodetects_path_vs_inline_content() {
    let dir = tempfile::tempdir().expect("tempdir");

    let existing = dir.path().join("answers.txt");
    std::fs::write(&existing, "42\n").expect("write");
    let existing = existing.to_string_lossy().to_string();
    assert_eq!(InputArg::normalize(&existing).as_str(), existing);

    let missing = dir.path().join("missing.txt").to_string_lossy().to_string();
    assert_eq!(InputArg::normalize(&missing).as_str(), format!("={missing}"));
}

#[test]
fn input_arg_keeps_prefixes_and_maps_stdin() {
    assert_eq!(InputArg::normalize("@x").as_str(), "@x");
    assert_eq!(InputArg::normalize("=5").as_str(), "=5");
    assert!(InputArg::normalize("STDIN").is_stdin());
    assert!(InputArg::default().is_stdin());
}
