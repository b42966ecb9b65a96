//! A single translatable unit and its annotations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Flag token marking a translation as needing review.
pub const FUZZY_FLAG: &str = "fuzzy";

/// The translated text of an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Translation {
    /// A plain `msgstr`.
    Singular(String),
    /// `msgstr[0]`, `msgstr[1]`, ... in index order.
    Plural(Vec<String>),
}

impl Default for Translation {
    fn default() -> Self {
        Self::Singular(String::new())
    }
}

impl Translation {
    /// All translation strings in order.
    pub fn forms(&self) -> &[String] {
        match self {
            Self::Singular(text) => std::slice::from_ref(text),
            Self::Plural(forms) => forms,
        }
    }

    /// Whether every form is empty.
    pub fn is_empty(&self) -> bool {
        self.forms().iter().all(String::is_empty)
    }
}

/// One `#:` location: a source file and an optional line number.
///
/// Ordering is by file name (byte-wise) and then by line, with a missing
/// line sorting before any concrete line.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Reference {
    /// Source file path as written in the catalog.
    pub file: String,
    /// Line inside the file, if one was given.
    pub line: Option<u32>,
}

impl Reference {
    /// Create a reference to a file and line.
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            line: Some(line),
        }
    }

    /// Split a `file:line` token on its last `:`.
    ///
    /// When the part after the last `:` is not a line number the whole token
    /// is taken as the file name.
    pub fn parse(token: &str) -> Self {
        if let Some((file, line)) = token.rsplit_once(':')
            && let Ok(line) = line.parse::<u32>()
        {
            return Self {
                file: file.to_string(),
                line: Some(line),
            };
        }

        Self {
            file: token.to_string(),
            line: None,
        }
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}:{}", self.file, line),
            None => f.write_str(&self.file),
        }
    }
}

/// The five comment categories attached to an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comments {
    /// `# ` free-form notes from translators.
    pub translator: Vec<String>,
    /// `#. ` notes written by extraction tools.
    pub extracted: Vec<String>,
    /// `#: ` source locations.
    pub references: Vec<Reference>,
    /// `#, ` flag tokens such as `fuzzy` or `c-format`.
    pub flags: Vec<String>,
    /// `#| ` previous-value annotations.
    pub previous: Vec<String>,
}

impl Comments {
    /// Whether no category holds anything.
    pub fn is_empty(&self) -> bool {
        self.translator.is_empty()
            && self.extracted.is_empty()
            && self.references.is_empty()
            && self.flags.is_empty()
            && self.previous.is_empty()
    }

    /// Drop every category at once.
    pub fn clear(&mut self) {
        self.translator.clear();
        self.extracted.clear();
        self.references.clear();
        self.flags.clear();
        self.previous.clear();
    }
}

/// Identity of a regular entry: its context and source string.
///
/// Ordering compares the context first (absent before any value), then the
/// id, both byte-wise.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IdentityKey {
    /// `msgctxt`, if any.
    pub context: Option<String>,
    /// `msgid`.
    pub id: String,
}

/// One translatable unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Disambiguation context. `None` and `Some("")` are different entries.
    pub context: Option<String>,
    /// The source string.
    pub id: String,
    /// Plural source string.
    pub id_plural: Option<String>,
    /// Translated text.
    pub translation: Translation,
    /// Annotations.
    pub comments: Comments,
    /// Whether the entry was written with the `#~` prefix.
    pub obsolete: bool,
}

impl Entry {
    /// Create an entry with a singular translation.
    pub fn new(id: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            translation: Translation::Singular(translation.into()),
            ..Default::default()
        }
    }

    /// Create a header entry from its metadata text.
    pub fn header(metadata: impl Into<String>) -> Self {
        Self::new("", metadata)
    }

    /// Set the context.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Append a reference comment.
    pub fn with_reference(mut self, reference: Reference) -> Self {
        self.comments.references.push(reference);
        self
    }

    /// Whether this is the catalog header (empty id, no context).
    pub fn is_header(&self) -> bool {
        self.id.is_empty() && self.context.is_none()
    }

    /// Whether the entry carries the `fuzzy` flag.
    pub fn is_fuzzy(&self) -> bool {
        self.comments.flags.iter().any(|flag| flag == FUZZY_FLAG)
    }

    /// The `(context, id)` pair used for deduplication and sorting.
    pub fn identity_key(&self) -> IdentityKey {
        IdentityKey {
            context: self.context.clone(),
            id: self.id.clone(),
        }
    }

    /// The first `#:` location, used for location ordering.
    pub fn first_reference(&self) -> Option<&Reference> {
        self.comments.references.first()
    }
}
