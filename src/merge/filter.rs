//! Comment and entry filters applied to the merged catalog.

use tracing::debug;

use crate::catalog::Catalog;

/// Which comment categories to strip from regular entries.
///
/// Each field set to `true` removes that category. The header's comments
/// are never touched. Identity and translation fields are never touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CommentFilter {
    /// Drop `# ` translator comments.
    pub translator: bool,
    /// Drop `#. ` extracted comments.
    pub extracted: bool,
    /// Drop `#: ` references.
    pub references: bool,
    /// Drop `#, ` flags.
    pub flags: bool,
    /// Drop `#| ` previous-value comments.
    pub previous: bool,
}

impl CommentFilter {
    /// Keep every comment.
    pub fn keep_all() -> Self {
        Self::default()
    }

    /// Remove only references.
    pub fn drop_references() -> Self {
        Self {
            references: true,
            ..Self::default()
        }
    }

    /// Remove all five categories.
    pub fn drop_all() -> Self {
        Self {
            translator: true,
            extracted: true,
            references: true,
            flags: true,
            previous: true,
        }
    }

    /// Whether applying the filter changes nothing.
    pub fn is_noop(&self) -> bool {
        *self == Self::keep_all()
    }

    /// Strip the selected categories from every regular entry.
    pub fn apply(&self, catalog: &mut Catalog) {
        if self.is_noop() {
            return;
        }

        for comments in catalog.comments_mut() {
            if self.translator {
                comments.translator.clear();
            }
            if self.extracted {
                comments.extracted.clear();
            }
            if self.references {
                comments.references.clear();
            }
            if self.flags {
                comments.flags.clear();
            }
            if self.previous {
                comments.previous.clear();
            }
        }

        debug!(filter = ?self, "stripped comments");
    }
}

/// Which whole entries to drop from the merged catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EntryFilter {
    /// Drop `#~` obsolete entries.
    pub drop_obsolete: bool,
    /// Drop entries flagged `fuzzy`.
    pub drop_fuzzy: bool,
}

impl EntryFilter {
    /// Whether applying the filter changes nothing.
    pub fn is_noop(&self) -> bool {
        !self.drop_obsolete && !self.drop_fuzzy
    }

    /// Remove matching entries, returning how many were dropped.
    pub fn apply(&self, catalog: &mut Catalog) -> usize {
        if self.is_noop() {
            return 0;
        }

        let before = catalog.len();
        catalog.retain_entries(|entry| {
            !(self.drop_obsolete && entry.obsolete) && !(self.drop_fuzzy && entry.is_fuzzy())
        });
        let dropped = before - catalog.len();

        debug!(dropped, filter = ?self, "dropped entries");
        dropped
    }
}
