//! Catalog merging.
//!
//! Combines parsed catalogs into one under a first-occurrence-wins policy:
//! the first header seen is adopted verbatim, and for every identity key the
//! earliest entry (earliest catalog, then earliest position) is kept whole.
//! Later entries with the same key are discarded together with their
//! comments; no field-level merging happens.

use tracing::{debug, warn};

use crate::catalog::{Catalog, Entry};

/// A discarded duplicate whose content differed from the kept entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    /// Context of the conflicting entry.
    pub context: Option<String>,
    /// Id of the conflicting entry.
    pub id: String,
    /// Position of the catalog the discarded entry came from.
    pub input: usize,
}

/// Statistics about a merge operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeStatistics {
    /// Number of catalogs merged.
    pub catalogs_merged: usize,

    /// Regular entries seen across all inputs.
    pub entries_read: usize,

    /// Regular entries in the merged catalog.
    pub entries_kept: usize,

    /// Entries dropped because their identity was already taken.
    pub duplicates_discarded: usize,

    /// Headers dropped because an earlier catalog supplied one.
    pub headers_discarded: usize,

    /// Discarded duplicates whose translation differed from the kept one.
    pub conflicts: Vec<Conflict>,

    /// Entries removed afterwards by the entry filter.
    pub entries_filtered: usize,

    /// Header metadata lines removed on request.
    pub header_fields_removed: usize,
}

impl MergeStatistics {
    /// Regular entries that end up in the output.
    pub fn entries_written(&self) -> usize {
        self.entries_kept.saturating_sub(self.entries_filtered)
    }
}

/// Result of a merge operation.
#[derive(Debug, Clone)]
pub struct MergeResult {
    /// The merged catalog.
    pub catalog: Catalog,

    /// Statistics about the merge.
    pub statistics: MergeStatistics,
}

/// Merges catalogs in input order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Merger;

impl Merger {
    /// Create a new merger.
    pub fn new() -> Self {
        Self
    }

    /// Merge catalogs, consuming them.
    ///
    /// Entries move into the result unchanged; nothing is shared with the
    /// inputs afterwards.
    ///
    /// # Examples
    ///
    /// ```
    /// use pocat::catalog::{Catalog, Entry};
    /// use pocat::merge::Merger;
    ///
    /// let mut first = Catalog::new();
    /// first.push(Entry::new("Hello", "Bonjour"));
    /// let mut second = Catalog::new();
    /// second.push(Entry::new("Hello", "Salut"));
    ///
    /// let result = Merger::new().merge(vec![first, second]);
    /// assert_eq!(result.catalog.len(), 1);
    /// assert_eq!(result.statistics.duplicates_discarded, 1);
    /// ```
    pub fn merge<I>(&self, catalogs: I) -> MergeResult
    where
        I: IntoIterator<Item = Catalog>,
    {
        let mut output = Catalog::new();
        let mut statistics = MergeStatistics::default();

        for (input, catalog) in catalogs.into_iter().enumerate() {
            statistics.catalogs_merged += 1;
            let (header, entries) = catalog.into_parts();

            if let Some(header) = header {
                if output.header().is_none() {
                    output.set_header(header);
                } else {
                    statistics.headers_discarded += 1;
                }
            }

            for entry in entries {
                statistics.entries_read += 1;
                self.merge_entry(&mut output, entry, input, &mut statistics);
            }

            debug!(
                input,
                entries = output.len(),
                "merged catalog into output"
            );
        }

        statistics.entries_kept = output.len();

        MergeResult {
            catalog: output,
            statistics,
        }
    }

    fn merge_entry(
        &self,
        output: &mut Catalog,
        entry: Entry,
        input: usize,
        statistics: &mut MergeStatistics,
    ) {
        let key = entry.identity_key();

        let Some(kept) = output.get(&key) else {
            output.insert_unique(entry);
            return;
        };

        statistics.duplicates_discarded += 1;

        if kept.translation != entry.translation || kept.id_plural != entry.id_plural {
            warn!(
                input,
                id = %entry.id,
                context = ?entry.context,
                "conflicting duplicate discarded, keeping first translation"
            );
            statistics.conflicts.push(Conflict {
                context: entry.context,
                id: entry.id,
                input,
            });
        } else {
            debug!(input, id = %entry.id, "duplicate entry discarded");
        }
    }
}
