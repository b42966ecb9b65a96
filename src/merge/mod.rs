//! The merge pipeline.
//!
//! Catalog texts flow through a fixed sequence of stages:
//!
//! 1. parse every text, in input order
//! 2. merge with first-occurrence-wins deduplication ([`Merger`])
//! 3. drop whole entries ([`EntryFilter`])
//! 4. order entries ([`SortOrder`])
//! 5. strip comment categories ([`CommentFilter`])
//! 6. edit header metadata ([`remove_header_fields`])
//! 7. serialize with wrapping
//!
//! Ordering runs before comment filtering, so sorting by location still sees
//! references that are about to be removed.

pub mod filter;
pub mod header;
pub mod merger;
pub mod ordering;

pub use filter::{CommentFilter, EntryFilter};
pub use header::remove_header_fields;
pub use merger::{Conflict, MergeResult, MergeStatistics, Merger};
pub use ordering::{SortOrder, sort_catalog};

use tracing::{debug, debug_span, info};

use crate::catalog::Catalog;
use crate::config::MergeOptions;
use crate::error::ParseError;
use crate::po::{parse_catalog, serialize_catalog};

/// Serialized output of the pipeline together with its statistics.
#[derive(Debug, Clone)]
pub struct MergeOutput {
    /// The merged catalog text.
    pub text: String,

    /// What happened along the way.
    pub statistics: MergeStatistics,
}

/// Merge catalog texts into one catalog text.
///
/// Inputs are processed in the order given. The first text that fails to
/// parse aborts the whole merge and no output is produced.
///
/// # Errors
///
/// Returns the [`ParseError`] of the first malformed input, carrying its
/// position in `texts` and the offending line.
///
/// # Examples
///
/// ```
/// use pocat::config::MergeOptions;
/// use pocat::merge;
///
/// let a = "msgid \"Hello\"\nmsgstr \"Bonjour\"\n";
/// let b = "msgid \"Hello\"\nmsgstr \"Salut\"\n\nmsgid \"Bye\"\nmsgstr \"\"\n";
///
/// let merged = merge::merge(&[a, b], &MergeOptions::default()).unwrap();
/// assert_eq!(
///     merged,
///     "msgid \"Hello\"\nmsgstr \"Bonjour\"\n\nmsgid \"Bye\"\nmsgstr \"\"\n"
/// );
/// ```
pub fn merge<S: AsRef<str>>(
    texts: &[S],
    options: &MergeOptions,
) -> Result<String, ParseError> {
    let catalogs = parse_all(texts)?;
    Ok(merge_catalogs(catalogs, options).text)
}

/// Parse every text, stopping at the first failure.
pub fn parse_all<S: AsRef<str>>(texts: &[S]) -> Result<Vec<Catalog>, ParseError> {
    let _span = debug_span!("parse", inputs = texts.len()).entered();

    texts
        .iter()
        .enumerate()
        .map(|(input, text)| parse_catalog(text.as_ref(), input))
        .collect()
}

/// Run every stage after parsing on already-parsed catalogs.
///
/// The inputs are consumed; the returned text shares nothing with them.
pub fn merge_catalogs(catalogs: Vec<Catalog>, options: &MergeOptions) -> MergeOutput {
    let MergeResult {
        mut catalog,
        mut statistics,
    } = {
        let _span = debug_span!("merge", inputs = catalogs.len()).entered();
        Merger::new().merge(catalogs)
    };

    {
        let _span = debug_span!("filter_entries").entered();
        statistics.entries_filtered = options.entries.apply(&mut catalog);
    }

    {
        let _span = debug_span!("sort", order = ?options.order).entered();
        sort_catalog(&mut catalog, options.order);
    }

    {
        let _span = debug_span!("filter_comments").entered();
        options.comments.apply(&mut catalog);
    }

    if !options.remove_header_fields.is_empty() {
        let _span = debug_span!("edit_header").entered();
        statistics.header_fields_removed =
            remove_header_fields(&mut catalog, &options.remove_header_fields);
    }

    let text = {
        let _span = debug_span!("serialize", width = options.wrap.width).entered();
        serialize_catalog(&catalog, &options.wrap)
    };

    debug!(bytes = text.len(), "serialized merged catalog");
    info!(
        catalogs = statistics.catalogs_merged,
        entries = statistics.entries_written(),
        duplicates = statistics.duplicates_discarded,
        conflicts = statistics.conflicts.len(),
        "merge complete"
    );

    MergeOutput { text, statistics }
}
