use std::fs;

use clap::Parser;
use tempfile::TempDir;
use word_freq::{run, Cli, CliError};

fn write(dir: &TempDir, name: &str, contents: &[u8]) -> String {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path.to_string_lossy().into_owned()
}

fn cli(args: &[&str]) -> Cli {
    let mut argv = vec!["word-freq"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap()
}

#[test]
fn text_report_matrix() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(
        &dir,
        "fox.txt",
        b"The quick brown fox\njumps over the lazy dog.\n\"The\" end -- 123\n",
    );

    let out = run(&cli(&[&input, "--top", "3", "--bottom", "2"])).unwrap();
    let expected = "\
The first 3 words sorted alphabetically within frequency:
The word: the occurs 3 times.
The word: brown occurs 1 time.
The word: dog occurs 1 time.

The last 2 words sorted alphabetically within frequency:
The word: over occurs 1 time.
The word: quick occurs 1 time.

The unique words sorted alphabetically:
The word: brown occurs 1 time.
The word: dog occurs 1 time.
The word: end occurs 1 time.
The word: fox occurs 1 time.
The word: jumps occurs 1 time.
The word: lazy occurs 1 time.
The word: over occurs 1 time.
The word: quick occurs 1 time.
";
    assert_eq!(out, expected);
}

#[test]
fn json_report_matrix() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(&dir, "abc.txt", b"a a b b c");

    let out = run(&cli(&[&input, "--format", "json"])).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    let top: Vec<(String, u64)> = value["top"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| (e["word"].as_str().unwrap().to_string(), e["count"].as_u64().unwrap()))
        .collect();
    assert_eq!(
        top,
        vec![("a".to_string(), 2), ("b".to_string(), 2), ("c".to_string(), 1)]
    );
    assert_eq!(value["total_words"], 5);
}

#[test]
fn config_file_then_flags_matrix() {
    let dir = tempfile::tempdir().unwrap();
    let config = write(
        &dir,
        "wf.toml",
        b"top = 1\nbottom = 1\nformat = \"json\"\n[capacity]\nmax_unique_words = 100\n",
    );
    let input = write(&dir, "in.txt", b"x y y");

    let out = run(&cli(&[&input, "--config", &config, "--format", "text"])).unwrap();
    assert!(out.starts_with("The first 1 words sorted alphabetically within frequency:\nThe word: y occurs 2 times.\n"));
}

#[test]
fn ascii_only_matrix() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(&dir, "cafe.txt", "café cafe".as_bytes());

    let unicode = run(&cli(&[&input, "--format", "json"])).unwrap();
    let ascii = run(&cli(&[&input, "--format", "json", "--ascii-only"])).unwrap();
    let unicode: serde_json::Value = serde_json::from_str(&unicode).unwrap();
    let ascii: serde_json::Value = serde_json::from_str(&ascii).unwrap();
    assert_eq!(unicode["unique_words"], 2);
    assert_eq!(ascii["unique_words"], 2);
    assert_eq!(ascii["top"][0]["word"], "caf");
}

#[test]
fn missing_file_matrix() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.txt");
    let err = run(&cli(&[missing.to_str().unwrap()])).unwrap_err();
    match &err {
        CliError::Io { path, .. } => assert_eq!(path, &missing),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn non_utf8_file_matrix() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(&dir, "latin1.txt", b"caf\xe9\n");
    let err = run(&cli(&[&input])).unwrap_err();
    assert!(matches!(err, CliError::Encoding { .. }));
}

#[test]
fn capacity_exhaustion_aborts_matrix() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(&dir, "many.txt", b"one two three four");
    let err = run(&cli(&[&input, "--max-words", "3"])).unwrap_err();
    assert!(matches!(err, CliError::Count(_)));
    assert_eq!(
        err.to_string(),
        "capacity exceeded: word table is full (limit 3)"
    );
}

#[test]
fn bad_config_matrix() {
    let dir = tempfile::tempdir().unwrap();
    let config = write(&dir, "bad.toml", b"top = \"ten\"");
    let err = run(&cli(&["--config", &config])).unwrap_err();
    assert!(matches!(err, CliError::Config(_)));
    assert_eq!(err.exit_code(), 2);
}
