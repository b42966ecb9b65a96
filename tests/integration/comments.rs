//! Comment, entry and header filtering.

use crate::common::{merge_texts, msgids, read_fixture};
use pocat::config::MergeOptions;
use pocat::merge::{CommentFilter, EntryFilter};

const COMMENTED: &str = "# checked by the team\n\
                         #. extracted note\n\
                         #: src/app.rb:12\n\
                         #, fuzzy, c-format\n\
                         #| msgid \"Hi\"\n\
                         msgid \"Hello\"\n\
                         msgstr \"Bonjour\"\n";

fn with_comments(comments: CommentFilter) -> MergeOptions {
    MergeOptions {
        comments,
        ..MergeOptions::default()
    }
}

#[test]
fn test_drop_references_keeps_other_comments() {
    let merged = merge_texts(&[COMMENTED], &with_comments(CommentFilter::drop_references()));

    assert_eq!(
        merged,
        "# checked by the team\n\
         #. extracted note\n\
         #, fuzzy, c-format\n\
         #| msgid \"Hi\"\n\
         msgid \"Hello\"\n\
         msgstr \"Bonjour\"\n"
    );
}

#[test]
fn test_drop_all_comments_keeps_only_keywords() {
    let merged = merge_texts(&[COMMENTED], &with_comments(CommentFilter::drop_all()));

    assert_eq!(merged, "msgid \"Hello\"\nmsgstr \"Bonjour\"\n");
}

#[test]
fn test_translator_comment_and_reference() {
    let input = "# a translator note\n#: a.rb:1\nmsgid \"Hello\"\nmsgstr \"\"\n";

    let refs_dropped = merge_texts(&[input], &with_comments(CommentFilter::drop_references()));
    let all_dropped = merge_texts(&[input], &with_comments(CommentFilter::drop_all()));

    assert_eq!(refs_dropped, "# a translator note\nmsgid \"Hello\"\nmsgstr \"\"\n");
    assert_eq!(all_dropped, "msgid \"Hello\"\nmsgstr \"\"\n");
}

#[test]
fn test_single_category_toggles() {
    let filter = CommentFilter {
        flags: true,
        previous: true,
        ..CommentFilter::keep_all()
    };

    let merged = merge_texts(&[COMMENTED], &with_comments(filter));

    assert!(merged.contains("# checked by the team\n"));
    assert!(merged.contains("#. extracted note\n"));
    assert!(merged.contains("#: src/app.rb:12\n"));
    assert!(!merged.contains("#,"));
    assert!(!merged.contains("#|"));
}

#[test]
fn test_header_comments_survive_drop_all() {
    let base = read_fixture("base.po");

    let merged = merge_texts(&[&base], &with_comments(CommentFilter::drop_all()));

    assert!(merged.starts_with("# Japanese translations for demo.\n"));
    assert!(merged.contains("#, fuzzy\nmsgid \"\"\n"));
    assert!(!merged.contains("#:"));
    assert!(!merged.contains("#."));
}

#[test]
fn test_drop_obsolete_and_fuzzy_entries() {
    let base = read_fixture("base.po");
    let extra = read_fixture("extra.po");
    let options = MergeOptions {
        entries: EntryFilter {
            drop_obsolete: true,
            drop_fuzzy: true,
        },
        ..MergeOptions::default()
    };

    let merged = merge_texts(&[&base, &extra], &options);
    let ids = msgids(&merged);

    assert!(!ids.iter().any(|id| id == "Old message"));
    assert!(!ids.iter().any(|id| id == "Save"));
    // The header is flagged fuzzy but is never dropped.
    assert_eq!(ids.first().map(String::as_str), Some(""));
    assert!(!merged.contains("#~"));
}

#[test]
fn test_remove_header_fields() {
    let base = read_fixture("base.po");
    let options = MergeOptions {
        remove_header_fields: vec!["POT-Creation-Date".to_string(), "Language".to_string()],
        ..MergeOptions::default()
    };

    let merged = merge_texts(&[&base], &options);

    assert!(!merged.contains("POT-Creation-Date"));
    assert!(!merged.contains("\"Language: ja\\n\""));
    assert!(merged.contains("\"Project-Id-Version: demo 1.0\\n\""));
    assert!(merged.contains("\"Plural-Forms: nplurals=1; plural=0;\\n\""));
}

#[test]
fn test_remove_header_field_is_case_sensitive() {
    let base = read_fixture("base.po");
    let options = MergeOptions {
        remove_header_fields: vec!["language".to_string()],
        ..MergeOptions::default()
    };

    let merged = merge_texts(&[&base], &options);

    assert_eq!(merged, base);
}
