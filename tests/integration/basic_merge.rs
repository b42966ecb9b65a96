//! End-to-end merges of fixture catalogs through files and through text.

use crate::common::{fixture_path, merge_texts, msgids, read_fixture, temp_output_path};
use pocat::config::MergeOptions;
use pocat::io::{CatalogReader, CatalogWriter};
use pocat::merge;

#[test]
fn test_default_merge_matches_golden() {
    let base = read_fixture("base.po");
    let extra = read_fixture("extra.po");
    let expected = read_fixture("expected/base_extra.po");

    let merged = merge_texts(&[&base, &extra], &MergeOptions::default());

    assert_eq!(merged, expected);
}

#[test]
fn test_single_catalog_is_reproduced() {
    let base = read_fixture("base.po");

    let merged = merge_texts(&[&base], &MergeOptions::default());

    assert_eq!(merged, base);
}

#[test]
fn test_header_precedence() {
    let a = "msgid \"\"\nmsgstr \"\"\n\"Project-Id-Version: gettext 3.0.0\\n\"\n";
    let b = "msgid \"\"\nmsgstr \"\"\n\"Language: ja\\n\"\n";

    let merged = merge_texts(&[a, b], &MergeOptions::default());

    assert_eq!(merged, a);
    assert!(!merged.contains("Language"));
}

#[test]
fn test_header_from_later_input_when_first_has_none() {
    let a = "msgid \"Hello\"\nmsgstr \"\"\n";
    let b = "msgid \"\"\nmsgstr \"\"\n\"Language: ja\\n\"\n";

    let merged = merge_texts(&[a, b], &MergeOptions::default());

    assert!(merged.starts_with("msgid \"\"\nmsgstr \"\"\n\"Language: ja\\n\"\n\n"));
    assert!(merged.ends_with("msgid \"Hello\"\nmsgstr \"\"\n"));
}

#[test]
fn test_repeated_header_in_one_catalog_keeps_first() {
    let text = "msgid \"\"\nmsgstr \"\"\n\"Language: ja\\n\"\n\n\
                msgid \"\"\nmsgstr \"\"\n\"Language: fr\\n\"\n\n\
                msgid \"a\"\nmsgstr \"\"\n";

    let merged = merge_texts(&[text], &MergeOptions::default());

    assert_eq!(
        merged,
        "msgid \"\"\nmsgstr \"\"\n\"Language: ja\\n\"\n\nmsgid \"a\"\nmsgstr \"\"\n"
    );
}

#[test]
fn test_identical_duplicates_collapse() {
    let a = "msgid \"Hello\"\nmsgstr \"Bonjour\"\n";

    let merged = merge_texts(&[a, a], &MergeOptions::default());

    assert_eq!(merged, a);
}

#[test]
fn test_conflicting_duplicate_keeps_first() {
    let a = "msgid \"Hello\"\nmsgstr \"Bonjour\"\n";
    let b = "msgid \"Hello\"\nmsgstr \"Salut\"\n";

    let merged = merge_texts(&[a, b], &MergeOptions::default());

    assert_eq!(merged, a);
}

#[test]
fn test_distinct_entries_preserved() {
    let a = "msgid \"Hello\"\nmsgstr \"\"\n";
    let b = "msgid \"World\"\nmsgstr \"\"\n";

    let merged = merge_texts(&[a, b], &MergeOptions::default());

    assert_eq!(merged, "msgid \"Hello\"\nmsgstr \"\"\n\nmsgid \"World\"\nmsgstr \"\"\n");
}

#[test]
fn test_context_distinguishes_entries() {
    let base = read_fixture("base.po");
    let extra = read_fixture("extra.po");

    let merged = merge_texts(&[&base, &extra], &MergeOptions::default());

    assert_eq!(msgids(&merged).iter().filter(|id| *id == "Open").count(), 2);
    assert!(merged.contains("msgctxt \"menu\""));
    assert!(merged.contains("msgctxt \"state\""));
}

#[test]
fn test_merge_statistics_for_fixtures() {
    let base = read_fixture("base.po");
    let extra = read_fixture("extra.po");
    let catalogs = merge::parse_all(&[base, extra]).unwrap();

    let output = merge::merge_catalogs(catalogs, &MergeOptions::default());
    let stats = output.statistics;

    assert_eq!(stats.catalogs_merged, 2);
    assert_eq!(stats.entries_read, 9);
    assert_eq!(stats.duplicates_discarded, 1);
    assert_eq!(stats.headers_discarded, 1);
    assert_eq!(stats.conflicts.len(), 1);
    assert_eq!(stats.conflicts[0].id, "Hello");
    assert_eq!(stats.conflicts[0].input, 1);
    assert_eq!(stats.entries_written(), 8);
}

#[tokio::test]
async fn test_read_merge_write_roundtrip() {
    let paths = vec![fixture_path("base.po"), fixture_path("extra.po")];
    let output_path = temp_output_path();

    let (loaded, load_stats) = CatalogReader::new().load_catalogs(&paths, 2).await.unwrap();
    assert_eq!(load_stats.success_count, 2);
    assert_eq!(load_stats.total_entries, 9);

    let catalogs = loaded.into_iter().map(|l| l.catalog).collect();
    let output = merge::merge_catalogs(catalogs, &MergeOptions::default());

    let write_stats = CatalogWriter::new()
        .write(&output.text, Some(&*output_path))
        .await
        .unwrap();
    assert_eq!(write_stats.file_size, output.text.len() as u64);

    let written = std::fs::read_to_string(&output_path).unwrap();
    assert_eq!(written, read_fixture("expected/base_extra.po"));
}

#[tokio::test]
async fn test_parallel_load_keeps_input_order() {
    let mut paths = Vec::new();
    for _ in 0..3 {
        paths.push(fixture_path("extra.po"));
        paths.push(fixture_path("base.po"));
    }

    let (loaded, _) = CatalogReader::new().load_catalogs(&paths, 4).await.unwrap();

    let inputs: Vec<usize> = loaded.iter().map(|l| l.input).collect();
    assert_eq!(inputs, vec![0, 1, 2, 3, 4, 5]);

    let catalogs = loaded.into_iter().map(|l| l.catalog).collect();
    let output = merge::merge_catalogs(catalogs, &MergeOptions::default());
    assert!(output.text.contains("Project-Id-Version: demo-extra 2.0"));
    assert_eq!(output.statistics.headers_discarded, 5);
}
