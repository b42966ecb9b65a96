//! Failure handling: malformed catalogs, missing files and bad output.

use std::path::PathBuf;

use crate::common::{fixture_path, read_fixture, temp_output_path};
use pocat::config::{Config, MergeOptions, OverwriteMode};
use pocat::error::{ParseErrorKind, PoCatError};
use pocat::io::CatalogReader;
use pocat::merge;
use pocat::validation::Validator;

fn config(inputs: Vec<PathBuf>, output: Option<PathBuf>) -> Config {
    Config {
        inputs,
        output,
        overwrite_mode: OverwriteMode::Overwrite,
        verbose: false,
        quiet: true,
        jobs: Some(1),
        report_warnings: true,
        merge: MergeOptions::default(),
    }
}

#[test]
fn test_parse_error_names_input_and_line() {
    let base = read_fixture("base.po");
    let broken = read_fixture("broken.po");

    let err = merge::merge(&[base, broken], &MergeOptions::default()).unwrap_err();

    assert_eq!(err.input, 1);
    assert_eq!(err.line, 8);
    assert_eq!(err.kind, ParseErrorKind::UnterminatedString);
    assert_eq!(err.to_string(), "catalog #1, line 8: unterminated quoted string");
}

#[test]
fn test_unknown_comment_marker() {
    let text = read_fixture("unknown_marker.po");

    let err = merge::merge(&[text], &MergeOptions::default()).unwrap_err();

    assert_eq!(err.input, 0);
    assert_eq!(err.line, 1);
    assert_eq!(err.kind, ParseErrorKind::UnknownCommentMarker('!'));
}

#[test]
fn test_missing_translation_is_rejected() {
    let err = merge::merge(&["msgid \"Hello\"\n"], &MergeOptions::default()).unwrap_err();

    assert_eq!(err.kind, ParseErrorKind::MissingTranslation);
}

#[test]
fn test_duplicate_field_is_rejected() {
    let text = "msgid \"a\"\nmsgid \"b\"\nmsgstr \"\"\n";

    let err = merge::merge(&[text], &MergeOptions::default()).unwrap_err();

    assert_eq!(err.line, 2);
    assert!(matches!(err.kind, ParseErrorKind::DuplicateField(_)));
}

#[tokio::test]
async fn test_broken_file_aborts_load() {
    let paths = vec![fixture_path("base.po"), fixture_path("broken.po")];

    let err = CatalogReader::new()
        .load_catalogs(&paths, 1)
        .await
        .unwrap_err();

    assert_eq!(err.exit_code(), 3);
    let parse = err.parse_error().expect("should be a parse error");
    assert_eq!((parse.input, parse.line), (1, 8));
    assert!(err.to_string().contains("broken.po"));
}

#[tokio::test]
async fn test_earliest_failure_wins() {
    let paths = vec![
        fixture_path("base.po"),
        fixture_path("does_not_exist.po"),
        fixture_path("extra.po"),
        fixture_path("broken.po"),
        fixture_path("base.po"),
    ];

    let err = CatalogReader::new()
        .load_catalogs(&paths, 4)
        .await
        .unwrap_err();

    assert!(matches!(err, PoCatError::FileNotFound { .. }));
    assert_eq!(err.exit_code(), 2);
}

#[tokio::test]
async fn test_missing_input_fails_validation() {
    let config = config(vec![fixture_path("does_not_exist.po")], None);

    let err = Validator::new().validate_config(&config).await.unwrap_err();

    assert!(matches!(err, PoCatError::FileNotFound { .. }));
}

#[tokio::test]
async fn test_no_clobber_refuses_existing_output() {
    let output = temp_output_path();
    let mut config = config(vec![fixture_path("base.po")], Some(output.to_path_buf()));
    config.overwrite_mode = OverwriteMode::NoClobber;

    let err = Validator::new().validate_config(&config).await.unwrap_err();

    assert!(matches!(err, PoCatError::OutputExists { .. }));
    assert_eq!(err.exit_code(), 4);
}

#[tokio::test]
async fn test_overwrite_allows_existing_output() {
    let output = temp_output_path();
    let config = config(vec![fixture_path("base.po")], Some(output.to_path_buf()));

    let summary = Validator::new().validate_config(&config).await.unwrap();

    assert_eq!(summary.files_validated, 1);
}

#[test]
fn test_output_same_as_input_is_rejected() {
    let input = fixture_path("base.po");
    let config = config(vec![input.clone()], Some(input));

    assert!(config.validate().is_err());
}

#[test]
fn test_empty_inputs_are_rejected() {
    assert!(config(Vec::new(), None).validate().is_err());
}

#[tokio::test]
async fn test_validate_no_files() {
    let err = Validator::new().validate_files(&[]).await.unwrap_err();

    assert!(matches!(err, PoCatError::NoInputs));
}

#[test]
fn test_merge_of_nothing_is_empty() {
    let texts: [&str; 0] = [];

    let merged = merge::merge(&texts, &MergeOptions::default()).unwrap();

    assert!(merged.is_empty());
}
