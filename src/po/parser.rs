//! Catalog text parser.
//!
//! Turns the text of one catalog into a [`Catalog`]. Every entry is a block
//! of comment lines followed by keyword lines:
//!
//! ```text
//! # translator comment
//! #. extracted comment
//! #: src/main.rs:12 src/lib.rs:40
//! #, fuzzy, c-format
//! #| msgid "Previous"
//! msgctxt "menu"
//! msgid "Open"
//! msgstr ""
//! "Ouvrir"
//! ```
//!
//! Values may be split over several quoted lines; the parsed model always
//! holds the concatenated, unescaped string. Entries prefixed with `#~` are
//! obsolete. The entry whose id is empty and which has no context becomes the
//! catalog header.
//!
//! Parsing never recovers: the first malformed line aborts with a
//! [`ParseError`] naming the input position and line number.

use tracing::warn;

use crate::catalog::{Catalog, Comments, Entry, Reference, Translation};
use crate::error::{ParseError, ParseErrorKind};
use crate::po::escape::unquote;

/// Parse one catalog.
///
/// `input` is the position of this text in the merge sequence and is only
/// used to locate errors.
///
/// # Errors
///
/// Returns a [`ParseError`] on the first malformed line.
///
/// # Examples
///
/// ```
/// use pocat::po::parse_catalog;
///
/// let catalog = parse_catalog("msgid \"Hello\"\nmsgstr \"Bonjour\"\n", 0).unwrap();
/// assert_eq!(catalog.entries()[0].id, "Hello");
/// ```
pub fn parse_catalog(text: &str, input: usize) -> Result<Catalog, ParseError> {
    CatalogParser::new(input).parse(text)
}

/// Which value a quoted continuation line extends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Context,
    Id,
    IdPlural,
    Translation,
    PluralForm,
}

/// Fields collected for the entry being read.
#[derive(Debug, Default)]
struct PendingEntry {
    comments: Comments,
    obsolete: bool,
    context: Option<String>,
    id: Option<String>,
    id_plural: Option<String>,
    singular: Option<String>,
    plural: Vec<String>,
    current: Option<Field>,
    first_keyword_line: usize,
}

impl PendingEntry {
    fn has_keywords(&self) -> bool {
        self.context.is_some() || self.id.is_some() || self.has_translation()
    }

    fn has_translation(&self) -> bool {
        self.singular.is_some() || !self.plural.is_empty()
    }

    fn append(&mut self, text: &str) {
        let target = match self.current {
            Some(Field::Context) => self.context.as_mut(),
            Some(Field::Id) => self.id.as_mut(),
            Some(Field::IdPlural) => self.id_plural.as_mut(),
            Some(Field::Translation) => self.singular.as_mut(),
            Some(Field::PluralForm) => self.plural.last_mut(),
            None => None,
        };
        if let Some(value) = target {
            value.push_str(text);
        }
    }
}

struct CatalogParser {
    input: usize,
    line: usize,
    pending: PendingEntry,
    catalog: Catalog,
}

impl CatalogParser {
    fn new(input: usize) -> Self {
        Self {
            input,
            line: 0,
            pending: PendingEntry::default(),
            catalog: Catalog::new(),
        }
    }

    fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(self.input, self.line, kind)
    }

    fn parse(mut self, text: &str) -> Result<Catalog, ParseError> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);

        for (idx, raw) in text.lines().enumerate() {
            self.line = idx + 1;
            self.parse_line(raw.trim())?;
        }

        self.finish_entry()?;
        Ok(self.catalog)
    }

    fn parse_line(&mut self, line: &str) -> Result<(), ParseError> {
        if line.is_empty() {
            // Blank lines end an entry; a comment block without keywords
            // stays attached to whatever follows.
            if self.pending.has_keywords() {
                self.finish_entry()?;
            }
            return Ok(());
        }

        if let Some(rest) = line.strip_prefix("#~") {
            let rest = rest.trim_start();
            if let Some(previous) = rest.strip_prefix('|') {
                self.start_comment()?;
                self.pending
                    .comments
                    .previous
                    .push(strip_one_space(previous).to_string());
                return Ok(());
            }
            return self.parse_keyword_line(rest, true);
        }

        if let Some(rest) = line.strip_prefix('#') {
            return self.parse_comment(rest);
        }

        self.parse_keyword_line(line, false)
    }

    /// A comment after a complete entry begins the next entry.
    fn start_comment(&mut self) -> Result<(), ParseError> {
        if self.pending.has_translation() {
            self.finish_entry()?;
        }
        Ok(())
    }

    fn parse_comment(&mut self, rest: &str) -> Result<(), ParseError> {
        self.start_comment()?;

        let mut chars = rest.chars();
        let marker = chars.next();
        let body = chars.as_str();
        let comments = &mut self.pending.comments;

        match marker {
            None => comments.translator.push(String::new()),
            Some(' ') | Some('\t') => comments.translator.push(body.to_string()),
            Some('.') => comments.extracted.push(strip_one_space(body).to_string()),
            Some(':') => comments
                .references
                .extend(body.split_whitespace().map(Reference::parse)),
            Some(',') => comments.flags.extend(
                body.split(',')
                    .map(str::trim)
                    .filter(|flag| !flag.is_empty())
                    .map(str::to_string),
            ),
            Some('|') => comments.previous.push(strip_one_space(body).to_string()),
            Some(other) => return Err(self.error(ParseErrorKind::UnknownCommentMarker(other))),
        }

        Ok(())
    }

    fn parse_keyword_line(&mut self, line: &str, obsolete: bool) -> Result<(), ParseError> {
        if line.starts_with('"') {
            if self.pending.current.is_none() {
                return Err(self.error(ParseErrorKind::UnexpectedLine(line.to_string())));
            }
            let value = unquote(line).map_err(|kind| self.error(kind))?;
            self.pending.append(&value);
            return Ok(());
        }

        let (keyword, rest) = line
            .split_once(|c: char| c.is_whitespace())
            .unwrap_or((line, ""));

        match keyword {
            "msgctxt" => {
                if self.pending.has_translation() {
                    self.finish_entry()?;
                }
                if self.pending.context.is_some() {
                    return Err(self.error(ParseErrorKind::DuplicateField(keyword.into())));
                }
                if self.pending.id.is_some() {
                    return Err(self.error(ParseErrorKind::UnexpectedLine(line.to_string())));
                }
                let value = self.quoted_value("msgctxt", rest)?;
                self.mark_keyword(obsolete);
                self.pending.context = Some(value);
                self.pending.current = Some(Field::Context);
            }
            "msgid" => {
                if self.pending.has_translation() {
                    self.finish_entry()?;
                }
                if self.pending.id.is_some() {
                    return Err(self.error(ParseErrorKind::DuplicateField(keyword.into())));
                }
                let value = self.quoted_value("msgid", rest)?;
                self.mark_keyword(obsolete);
                self.pending.id = Some(value);
                self.pending.current = Some(Field::Id);
            }
            "msgid_plural" => {
                self.require_id()?;
                if self.pending.id_plural.is_some() {
                    return Err(self.error(ParseErrorKind::DuplicateField(keyword.into())));
                }
                if self.pending.has_translation() {
                    return Err(self.error(ParseErrorKind::UnexpectedLine(line.to_string())));
                }
                let value = self.quoted_value("msgid_plural", rest)?;
                self.pending.id_plural = Some(value);
                self.pending.current = Some(Field::IdPlural);
            }
            "msgstr" => {
                self.require_id()?;
                if self.pending.singular.is_some() {
                    return Err(self.error(ParseErrorKind::DuplicateField(keyword.into())));
                }
                if !self.pending.plural.is_empty() {
                    return Err(self.error(ParseErrorKind::PluralMismatch));
                }
                let value = self.quoted_value("msgstr", rest)?;
                self.pending.singular = Some(value);
                self.pending.current = Some(Field::Translation);
            }
            _ => {
                let Some(index) = keyword
                    .strip_prefix("msgstr[")
                    .and_then(|tail| tail.strip_suffix(']'))
                else {
                    return Err(self.error(ParseErrorKind::UnexpectedLine(line.to_string())));
                };
                self.require_id()?;
                if self.pending.singular.is_some() {
                    return Err(self.error(ParseErrorKind::PluralMismatch));
                }
                match index.parse::<usize>() {
                    Ok(n) if n == self.pending.plural.len() => {}
                    Ok(n) if n < self.pending.plural.len() => {
                        return Err(self.error(ParseErrorKind::DuplicateField(keyword.into())));
                    }
                    _ => {
                        return Err(
                            self.error(ParseErrorKind::InvalidPluralIndex(index.to_string()))
                        );
                    }
                }
                let value = self.quoted_value("msgstr[]", rest)?;
                self.pending.plural.push(value);
                self.pending.current = Some(Field::PluralForm);
            }
        }

        Ok(())
    }

    fn quoted_value(&self, keyword: &'static str, rest: &str) -> Result<String, ParseError> {
        if !rest.trim_start().starts_with('"') {
            return Err(self.error(ParseErrorKind::ExpectedString(keyword)));
        }
        unquote(rest).map_err(|kind| self.error(kind))
    }

    fn mark_keyword(&mut self, obsolete: bool) {
        if !self.pending.has_keywords() {
            self.pending.first_keyword_line = self.line;
        }
        self.pending.obsolete |= obsolete;
    }

    fn require_id(&self) -> Result<(), ParseError> {
        if self.pending.id.is_none() {
            return Err(self.error(ParseErrorKind::MissingId));
        }
        Ok(())
    }

    fn finish_entry(&mut self) -> Result<(), ParseError> {
        if !self.pending.has_keywords() {
            return Ok(());
        }

        let pending = std::mem::take(&mut self.pending);
        let at = |kind| ParseError::new(self.input, pending.first_keyword_line, kind);

        let Some(id) = pending.id else {
            return Err(at(ParseErrorKind::MissingId));
        };

        let translation = match (pending.singular, pending.plural.is_empty()) {
            (Some(_), false) => return Err(at(ParseErrorKind::PluralMismatch)),
            (Some(text), true) => Translation::Singular(text),
            (None, false) => Translation::Plural(pending.plural),
            (None, true) => return Err(at(ParseErrorKind::MissingTranslation)),
        };

        match (&pending.id_plural, &translation) {
            (Some(_), Translation::Singular(_)) | (None, Translation::Plural(_)) => {
                return Err(at(ParseErrorKind::PluralMismatch));
            }
            _ => {}
        }

        let entry = Entry {
            context: pending.context,
            id,
            id_plural: pending.id_plural,
            translation,
            comments: pending.comments,
            obsolete: pending.obsolete,
        };

        if entry.is_header() && !entry.obsolete {
            if self.catalog.header().is_some() {
                warn!(
                    input = self.input,
                    line = pending.first_keyword_line,
                    "extra header entry discarded, keeping the first"
                );
            } else {
                self.catalog.set_header(entry);
            }
        } else {
            self.catalog.push(entry);
        }

        Ok(())
    }
}

fn strip_one_space(text: &str) -> &str {
    text.strip_prefix(' ').unwrap_or(text)
}
