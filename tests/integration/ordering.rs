//! Output ordering strategies.

use crate::common::{merge_texts, msgids, read_fixture};
use pocat::config::MergeOptions;
use pocat::merge::SortOrder;
use rstest::rstest;

fn with_order(order: SortOrder) -> MergeOptions {
    MergeOptions {
        order,
        ..MergeOptions::default()
    }
}

#[rstest]
#[case::identity(SortOrder::ByIdentity, vec!["Alice", "Bob", "Charlie"])]
#[case::preserve(SortOrder::Preserve, vec!["Charlie", "Bob", "Alice"])]
fn test_order_by_identity(#[case] order: SortOrder, #[case] expected: Vec<&str>) {
    let inputs = [
        "msgid \"Charlie\"\nmsgstr \"\"\n",
        "msgid \"Bob\"\nmsgstr \"\"\n",
        "msgid \"Alice\"\nmsgstr \"\"\n",
    ];

    let merged = merge_texts(&inputs, &with_order(order));

    assert_eq!(msgids(&merged), expected);
}

#[test]
fn test_order_by_location_overrides_id() {
    let inputs = [
        "#: b:1\nmsgid \"Hello 1\"\nmsgstr \"\"\n",
        "#: a:2\nmsgid \"Hello 2\"\nmsgstr \"\"\n",
        "#: a:1\nmsgid \"Hello 3\"\nmsgstr \"\"\n",
    ];

    let merged = merge_texts(&inputs, &with_order(SortOrder::ByLocation));

    assert_eq!(msgids(&merged), vec!["Hello 3", "Hello 2", "Hello 1"]);
    assert_eq!(
        merged,
        "#: a:1\nmsgid \"Hello 3\"\nmsgstr \"\"\n\n\
         #: a:2\nmsgid \"Hello 2\"\nmsgstr \"\"\n\n\
         #: b:1\nmsgid \"Hello 1\"\nmsgstr \"\"\n"
    );
}

#[test]
fn test_line_numbers_compare_numerically() {
    let inputs = [
        "#: a.rb:10\nmsgid \"ten\"\nmsgstr \"\"\n",
        "#: a.rb:9\nmsgid \"nine\"\nmsgstr \"\"\n",
    ];

    let merged = merge_texts(&inputs, &with_order(SortOrder::ByLocation));

    assert_eq!(msgids(&merged), vec!["nine", "ten"]);
}

#[rstest]
#[case::preserve(
    SortOrder::Preserve,
    vec!["", "Hello", "Goodbye", "%d file", "Open", "Welcome", "Open", "Save", "Old message"]
)]
#[case::identity(
    SortOrder::ByIdentity,
    vec!["", "%d file", "Goodbye", "Hello", "Old message", "Save", "Welcome", "Open", "Open"]
)]
#[case::location(
    SortOrder::ByLocation,
    vec!["", "Old message", "Welcome", "Hello", "Goodbye", "%d file", "Open", "Open", "Save"]
)]
fn test_fixture_orders(#[case] order: SortOrder, #[case] expected: Vec<&str>) {
    let base = read_fixture("base.po");
    let extra = read_fixture("extra.po");

    let merged = merge_texts(&[&base, &extra], &with_order(order));

    assert_eq!(msgids(&merged), expected);
}

#[test]
fn test_header_stays_first_when_sorting() {
    let inputs = [
        "msgid \"b\"\nmsgstr \"\"\n",
        "msgid \"\"\nmsgstr \"\"\n\"Language: ja\\n\"\n\nmsgid \"a\"\nmsgstr \"\"\n",
    ];

    let merged = merge_texts(&inputs, &with_order(SortOrder::ByIdentity));

    assert_eq!(msgids(&merged), vec!["", "a", "b"]);
}

#[test]
fn test_sorting_sees_references_before_they_are_dropped() {
    let inputs = [
        "#: z.rb:1\nmsgid \"first\"\nmsgstr \"\"\n",
        "#: a.rb:1\nmsgid \"second\"\nmsgstr \"\"\n",
    ];
    let options = MergeOptions {
        order: SortOrder::ByLocation,
        comments: pocat::merge::CommentFilter::drop_references(),
        ..MergeOptions::default()
    };

    let merged = merge_texts(&inputs, &options);

    assert_eq!(
        merged,
        "msgid \"second\"\nmsgstr \"\"\n\nmsgid \"first\"\nmsgstr \"\"\n"
    );
}

#[rstest]
#[case("msgid", SortOrder::ByIdentity)]
#[case("location", SortOrder::ByLocation)]
#[case("none", SortOrder::Preserve)]
fn test_sort_order_from_str(#[case] name: &str, #[case] expected: SortOrder) {
    assert_eq!(name.parse::<SortOrder>().unwrap(), expected);
}
