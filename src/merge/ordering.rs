//! Entry ordering strategies.
//!
//! Every strategy is a stable sort, so entries that compare equal keep their
//! merge order. The header never moves.

use std::cmp::Ordering;
use std::str::FromStr;

use crate::catalog::{Catalog, Entry};
use crate::error::PoCatError;

/// How to order the merged entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Keep first-seen merge order.
    #[default]
    Preserve,
    /// Sort by `(context, id)`, byte-wise, absent context first.
    ByIdentity,
    /// Sort by the first reference: file byte-wise, then line numerically.
    /// Entries without references come before every located entry.
    ByLocation,
}

impl FromStr for SortOrder {
    type Err = PoCatError;

    /// Parse a sort order name.
    ///
    /// Accepts `none`/`preserve`, `msgid`/`identity`/`output`, and
    /// `location`/`file`/`reference`, case-insensitively.
    fn from_str(s: &str) -> crate::Result<Self> {
        match s.to_lowercase().as_str() {
            "none" | "preserve" => Ok(Self::Preserve),
            "msgid" | "identity" | "output" => Ok(Self::ByIdentity),
            "location" | "file" | "reference" => Ok(Self::ByLocation),
            _ => Err(PoCatError::invalid_config(format!(
                "Invalid sort order: {s}. Must be one of: none, msgid, location"
            ))),
        }
    }
}

impl SortOrder {
    /// The comparator for this strategy, or `None` when order is preserved.
    pub fn comparator(self) -> Option<fn(&Entry, &Entry) -> Ordering> {
        match self {
            Self::Preserve => None,
            Self::ByIdentity => Some(compare_identity),
            Self::ByLocation => Some(compare_location),
        }
    }
}

/// Compare by `(context, id)`.
pub fn compare_identity(a: &Entry, b: &Entry) -> Ordering {
    a.context
        .cmp(&b.context)
        .then_with(|| a.id.cmp(&b.id))
}

/// Compare by first reference; unlocated entries sort first.
pub fn compare_location(a: &Entry, b: &Entry) -> Ordering {
    a.first_reference().cmp(&b.first_reference())
}

/// Reorder the catalog's entries in place.
pub fn sort_catalog(catalog: &mut Catalog, order: SortOrder) {
    if let Some(compare) = order.comparator() {
        catalog.sort_entries_by(compare);
    }
}
