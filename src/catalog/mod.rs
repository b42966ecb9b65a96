//! In-memory catalog model shared by every pipeline stage.
//!
//! A [`Catalog`] is an ordered sequence of [`Entry`] values plus at most one
//! header. Insertion order is meaningful: it is the order used when no
//! explicit ordering is requested. The catalog keeps a lookup from
//! [`IdentityKey`] to the position of the first entry carrying that key.
//!
//! # Examples
//!
//! ```
//! use pocat::catalog::{Catalog, Entry};
//!
//! let mut catalog = Catalog::new();
//! assert!(catalog.insert_unique(Entry::new("Hello", "Bonjour")));
//! assert!(!catalog.insert_unique(Entry::new("Hello", "Salut")));
//! assert_eq!(catalog.len(), 1);
//! ```

pub mod entry;

pub use entry::{Comments, Entry, FUZZY_FLAG, IdentityKey, Reference, Translation};

use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;

/// An ordered set of entries with an optional header.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Catalog {
    header: Option<Entry>,
    entries: Vec<Entry>,
    #[serde(skip)]
    index: HashMap<IdentityKey, usize>,
}

impl PartialEq for Catalog {
    fn eq(&self, other: &Self) -> bool {
        self.header == other.header && self.entries == other.entries
    }
}

impl Eq for Catalog {}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The header entry, if any.
    pub fn header(&self) -> Option<&Entry> {
        self.header.as_ref()
    }

    /// Mutable access to the header entry.
    pub fn header_mut(&mut self) -> Option<&mut Entry> {
        self.header.as_mut()
    }

    /// Replace the header, returning the previous one.
    pub fn set_header(&mut self, header: Entry) -> Option<Entry> {
        self.header.replace(header)
    }

    /// Regular entries in catalog order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Number of regular entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has neither header nor entries.
    pub fn is_empty(&self) -> bool {
        self.header.is_none() && self.entries.is_empty()
    }

    /// Whether an entry with this identity is present.
    pub fn contains(&self, key: &IdentityKey) -> bool {
        self.index.contains_key(key)
    }

    /// The first entry with this identity.
    pub fn get(&self, key: &IdentityKey) -> Option<&Entry> {
        self.index.get(key).map(|&pos| &self.entries[pos])
    }

    /// Append an entry, keeping duplicates.
    ///
    /// The lookup keeps pointing at the first entry for a key.
    pub fn push(&mut self, entry: Entry) {
        let pos = self.entries.len();
        self.index.entry(entry.identity_key()).or_insert(pos);
        self.entries.push(entry);
    }

    /// Append an entry only if its identity is not present yet.
    ///
    /// Returns `false` and drops the entry when the key is already taken.
    pub fn insert_unique(&mut self, entry: Entry) -> bool {
        let key = entry.identity_key();
        if self.index.contains_key(&key) {
            return false;
        }
        self.index.insert(key, self.entries.len());
        self.entries.push(entry);
        true
    }

    /// Stable-sort the entries with a comparator. The header does not move.
    pub fn sort_entries_by<F>(&mut self, compare: F)
    where
        F: FnMut(&Entry, &Entry) -> Ordering,
    {
        self.entries.sort_by(compare);
        self.reindex();
    }

    /// Keep only the entries matching the predicate.
    pub fn retain_entries<F>(&mut self, keep: F)
    where
        F: FnMut(&Entry) -> bool,
    {
        self.entries.retain(keep);
        self.reindex();
    }

    /// Mutable access to the comments of every regular entry.
    ///
    /// Identity fields stay read-only so the lookup remains valid.
    pub fn comments_mut(&mut self) -> impl Iterator<Item = &mut Comments> {
        self.entries.iter_mut().map(|entry| &mut entry.comments)
    }

    /// Split the catalog into header and entries.
    pub fn into_parts(self) -> (Option<Entry>, Vec<Entry>) {
        (self.header, self.entries)
    }

    fn reindex(&mut self) {
        self.index.clear();
        for (pos, entry) in self.entries.iter().enumerate() {
            self.index.entry(entry.identity_key()).or_insert(pos);
        }
    }
}
