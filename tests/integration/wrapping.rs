//! Line wrapping of long values and reference lists.

use crate::common::{merge_texts, read_fixture};
use pocat::config::MergeOptions;
use pocat::po::WrapOptions;
use rstest::rstest;

const FIRST_REF: &str = "lib/demo/very/deeply/nested/directory/structure/first_file.rb:101";
const SECOND_REF: &str = "lib/demo/very/deeply/nested/directory/structure/second_file.rb:202";
const TRANSLATION: &str = "msgstr \"\"\n\"Line one of a translation\\n\"\n\"Line two of a translation\\n\"\n";

fn with_wrap(wrap: WrapOptions) -> MergeOptions {
    MergeOptions {
        wrap,
        ..MergeOptions::default()
    }
}

fn entry_with_id(id: &str) -> String {
    format!("msgid \"{id}\"\nmsgstr \"\"\n")
}

#[test]
fn test_width_boundary_default() {
    let id = "x".repeat(79);

    let merged = merge_texts(&[&entry_with_id(&id)], &MergeOptions::default());

    assert_eq!(
        merged,
        format!("msgid \"\"\n\"{}\"\n\"x\"\nmsgstr \"\"\n", "x".repeat(78))
    );
}

#[test]
fn test_width_boundary_exact_fit() {
    let id = "x".repeat(78);
    let input = entry_with_id(&id);

    let merged = merge_texts(&[&input], &MergeOptions::default());

    assert_eq!(merged, input);
}

#[test]
fn test_width_boundary_custom() {
    let id = "x".repeat(79);

    let merged = merge_texts(&[&entry_with_id(&id)], &with_wrap(WrapOptions::with_width(40)));

    assert_eq!(
        merged,
        format!(
            "msgid \"\"\n\"{}\"\n\"{}\"\nmsgstr \"\"\n",
            "x".repeat(40),
            "x".repeat(39)
        )
    );
}

#[test]
fn test_width_boundary_no_wrap() {
    let id = "x".repeat(500);
    let input = entry_with_id(&id);

    let merged = merge_texts(&[&input], &with_wrap(WrapOptions::no_wrap()));

    assert_eq!(merged, input);
}

#[test]
fn test_fixture_default_width() {
    let text = read_fixture("wrapping.po");

    let merged = merge_texts(&[&text], &MergeOptions::default());

    let expected = format!(
        "#: {FIRST_REF}\n#: {SECOND_REF}\n\
         msgid \"\"\n\
         \"This message is deliberately long so that it does not fit on one line of seven\"\n\
         \"ty-eight characters.\"\n\
         {TRANSLATION}"
    );
    assert_eq!(merged, expected);
}

#[test]
fn test_fixture_width_40() {
    let text = read_fixture("wrapping.po");

    let merged = merge_texts(&[&text], &with_wrap(WrapOptions::with_width(40)));

    let expected = format!(
        "#: {FIRST_REF}\n#: {SECOND_REF}\n\
         msgid \"\"\n\
         \"This message is deliberately long so tha\"\n\
         \"t it does not fit on one line of seventy\"\n\
         \"-eight characters.\"\n\
         {TRANSLATION}"
    );
    assert_eq!(merged, expected);
}

#[test]
fn test_fixture_no_wrap_is_unchanged() {
    let text = read_fixture("wrapping.po");

    let merged = merge_texts(&[&text], &with_wrap(WrapOptions::no_wrap()));

    assert_eq!(merged, text);
    assert!(merged.contains(&format!("#: {FIRST_REF} {SECOND_REF}\n")));
}

#[test]
fn test_short_references_share_a_line() {
    let input = "#: a.rb:1 b.rb:2 c.rb:3\nmsgid \"Hello\"\nmsgstr \"\"\n";

    let merged = merge_texts(&[input], &MergeOptions::default());

    assert_eq!(merged, input);
}

#[test]
fn test_embedded_newlines_split_without_wrapping() {
    let input = "msgid \"\"\nmsgstr \"\"\n\"Language: ja\\n\"\n\"MIME-Version: 1.0\\n\"\n";

    let merged = merge_texts(&[input], &with_wrap(WrapOptions::no_wrap()));

    assert_eq!(merged, input);
}

#[test]
fn test_context_wraps_like_id() {
    let context = "c".repeat(79);
    let input = format!("msgctxt \"{context}\"\nmsgid \"Open\"\nmsgstr \"\"\n");

    let merged = merge_texts(&[&input], &MergeOptions::default());

    assert!(merged.starts_with(&format!(
        "msgctxt \"\"\n\"{}\"\n\"c\"\nmsgid \"Open\"\n",
        "c".repeat(78)
    )));
}

#[rstest]
#[case::default_width(WrapOptions::default())]
#[case::narrow(WrapOptions::with_width(40))]
#[case::tiny(WrapOptions::with_width(7))]
#[case::no_wrap(WrapOptions::no_wrap())]
fn test_serialization_is_idempotent(#[case] wrap: WrapOptions) {
    let options = with_wrap(wrap);
    let texts = [
        read_fixture("base.po"),
        read_fixture("extra.po"),
        read_fixture("wrapping.po"),
    ];

    let once = merge_texts(&[&texts[0], &texts[1], &texts[2]], &options);
    let twice = merge_texts(&[&once], &options);

    assert_eq!(once, twice);
}

#[test]
fn test_escapes_count_as_single_characters() {
    let id = format!("{}\\\"", "x".repeat(78));

    let merged = merge_texts(&[&entry_with_id(&id)], &MergeOptions::default());

    assert_eq!(
        merged,
        format!("msgid \"\"\n\"{}\"\n\"\\\"\"\nmsgstr \"\"\n", "x".repeat(78))
    );
}
