//! Quoted-string escaping.
//!
//! Catalog values are stored unescaped. These helpers convert between the
//! quoted form found in catalog text and the logical string.

use crate::error::ParseErrorKind;

/// Parse one quoted token such as `"Hello\n"` into its logical value.
///
/// Leading and trailing whitespace around the quotes is ignored; anything
/// else after the closing quote is an error.
pub fn unquote(token: &str) -> Result<String, ParseErrorKind> {
    let token = token.trim();
    let Some(body) = token.strip_prefix('"') else {
        return Err(ParseErrorKind::UnexpectedLine(token.to_string()));
    };

    let mut value = String::with_capacity(body.len());
    let mut chars = body.chars();

    loop {
        match chars.next() {
            None => return Err(ParseErrorKind::UnterminatedString),
            Some('"') => break,
            Some('\\') => match chars.next() {
                None => return Err(ParseErrorKind::UnterminatedString),
                Some('n') => value.push('\n'),
                Some('t') => value.push('\t'),
                Some('r') => value.push('\r'),
                Some('a') => value.push('\u{07}'),
                Some('b') => value.push('\u{08}'),
                Some('f') => value.push('\u{0C}'),
                Some('v') => value.push('\u{0B}'),
                Some('\\') => value.push('\\'),
                Some('"') => value.push('"'),
                Some(other) => return Err(ParseErrorKind::InvalidEscape(other)),
            },
            Some(c) => value.push(c),
        }
    }

    let rest = chars.as_str().trim();
    if !rest.is_empty() {
        return Err(ParseErrorKind::UnexpectedLine(token.to_string()));
    }

    Ok(value)
}

/// Escape a logical value for placement between double quotes.
pub fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len() + 2);
    for c in value.chars() {
        match c {
            '\n' => escaped.push_str("\\n"),
            '\t' => escaped.push_str("\\t"),
            '\r' => escaped.push_str("\\r"),
            '\u{07}' => escaped.push_str("\\a"),
            '\u{08}' => escaped.push_str("\\b"),
            '\u{0C}' => escaped.push_str("\\f"),
            '\u{0B}' => escaped.push_str("\\v"),
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            c => escaped.push(c),
        }
    }
    escaped
}
