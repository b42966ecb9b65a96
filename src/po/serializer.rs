//! Catalog text serializer with column-budget wrapping.
//!
//! Each quoted value is cut into chunks: first after every embedded newline,
//! then (when wrapping is enabled) into pieces of at most `width` characters.
//! A value that yields a single chunk not ending in a newline is written on
//! the keyword line; anything else is written as `keyword ""` followed by
//! one quoted line per chunk. Splitting is positional and may fall inside a
//! word.
//!
//! # Examples
//!
//! ```
//! use pocat::catalog::{Catalog, Entry};
//! use pocat::po::{WrapOptions, serialize_catalog};
//!
//! let mut catalog = Catalog::new();
//! catalog.push(Entry::new("Hello", "Bonjour"));
//! let text = serialize_catalog(&catalog, &WrapOptions::default());
//! assert_eq!(text, "msgid \"Hello\"\nmsgstr \"Bonjour\"\n");
//! ```

use crate::catalog::{Catalog, Comments, Entry, Translation};
use crate::po::escape::escape;

/// Default number of characters allowed on one quoted continuation line.
pub const DEFAULT_WIDTH: usize = 78;

const OBSOLETE_PREFIX: &str = "#~ ";

/// Line wrapping policy for serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrapOptions {
    /// Split long values into `width`-character chunks.
    pub enabled: bool,
    /// Maximum characters per quoted chunk.
    pub width: usize,
}

impl Default for WrapOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            width: DEFAULT_WIDTH,
        }
    }
}

impl WrapOptions {
    /// Wrap at a custom width.
    pub fn with_width(width: usize) -> Self {
        Self {
            enabled: true,
            width,
        }
    }

    /// Never split values by length.
    pub fn no_wrap() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }

    /// The per-chunk character budget, if positional splitting applies.
    pub fn budget(&self) -> Option<usize> {
        (self.enabled && self.width > 0).then_some(self.width)
    }
}

/// Render a catalog to text.
pub fn serialize_catalog(catalog: &Catalog, wrap: &WrapOptions) -> String {
    Serializer::new(*wrap).serialize(catalog)
}

/// Stateless renderer holding the wrap policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Serializer {
    wrap: WrapOptions,
}

impl Serializer {
    /// Create a serializer with the given wrap policy.
    pub fn new(wrap: WrapOptions) -> Self {
        Self { wrap }
    }

    /// Render the header (if any) and every entry, one blank line apart.
    pub fn serialize(&self, catalog: &Catalog) -> String {
        let mut out = String::new();

        for entry in catalog.header().into_iter().chain(catalog.entries()) {
            if !out.is_empty() {
                out.push('\n');
            }
            self.write_entry(&mut out, entry);
        }

        out
    }

    /// Render one entry block, terminated by a newline.
    pub fn write_entry(&self, out: &mut String, entry: &Entry) {
        self.write_comments(out, &entry.comments);

        let prefix = if entry.obsolete { OBSOLETE_PREFIX } else { "" };

        if let Some(context) = &entry.context {
            self.write_field(out, prefix, "msgctxt", context);
        }
        self.write_field(out, prefix, "msgid", &entry.id);
        if let Some(plural) = &entry.id_plural {
            self.write_field(out, prefix, "msgid_plural", plural);
        }

        match &entry.translation {
            Translation::Singular(text) => self.write_field(out, prefix, "msgstr", text),
            Translation::Plural(forms) => {
                for (idx, form) in forms.iter().enumerate() {
                    self.write_field(out, prefix, &format!("msgstr[{idx}]"), form);
                }
            }
        }
    }

    fn write_comments(&self, out: &mut String, comments: &Comments) {
        for comment in &comments.translator {
            push_comment(out, "#", comment);
        }
        for comment in &comments.extracted {
            push_comment(out, "#.", comment);
        }
        self.write_references(out, comments);
        if !comments.flags.is_empty() {
            out.push_str("#, ");
            out.push_str(&comments.flags.join(", "));
            out.push('\n');
        }
        for comment in &comments.previous {
            push_comment(out, "#|", comment);
        }
    }

    /// Pack references onto `#:` lines, starting a new line when the next
    /// reference would push the current one past the budget.
    fn write_references(&self, out: &mut String, comments: &Comments) {
        if comments.references.is_empty() {
            return;
        }

        let budget = self.wrap.budget();
        let mut line = String::from("#:");
        let mut line_width = 2;
        let mut on_line = 0;

        for reference in &comments.references {
            let token = reference.to_string();
            let token_width = token.chars().count();

            if let Some(budget) = budget
                && on_line > 0
                && line_width + token_width > budget
            {
                out.push_str(&line);
                out.push('\n');
                line = String::from("#:");
                line_width = 2;
                on_line = 0;
            }

            line.push(' ');
            line.push_str(&token);
            line_width += 1 + token_width;
            on_line += 1;
        }

        out.push_str(&line);
        out.push('\n');
    }

    fn write_field(&self, out: &mut String, prefix: &str, keyword: &str, value: &str) {
        let chunks = wrap_chunks(value, self.wrap.budget());

        if chunks.len() <= 1 && !value.ends_with('\n') {
            out.push_str(&format!("{prefix}{keyword} \"{}\"\n", escape(value)));
            return;
        }

        out.push_str(&format!("{prefix}{keyword} \"\"\n"));
        for chunk in chunks {
            out.push_str(&format!("{prefix}\"{}\"\n", escape(chunk)));
        }
    }
}

fn push_comment(out: &mut String, marker: &str, text: &str) {
    out.push_str(marker);
    if !text.is_empty() {
        out.push(' ');
        out.push_str(text);
    }
    out.push('\n');
}

/// Cut a value after each newline, then into `budget`-character pieces.
///
/// The budget counts characters of the unescaped value, newline included.
pub fn wrap_chunks(value: &str, budget: Option<usize>) -> Vec<&str> {
    let mut chunks = Vec::new();

    for piece in value.split_inclusive('\n') {
        match budget {
            Some(budget) => chunks.extend(split_by_chars(piece, budget)),
            None => chunks.push(piece),
        }
    }

    chunks
}

fn split_by_chars(text: &str, budget: usize) -> impl Iterator<Item = &str> {
    let budget = budget.max(1);
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let cut = rest
            .char_indices()
            .nth(budget)
            .map_or(rest.len(), |(pos, _)| pos);
        let (chunk, tail) = rest.split_at(cut);
        rest = tail;
        Some(chunk)
    })
}
