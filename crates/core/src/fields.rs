//! Field scanning over decoded key payloads.
//!
//! A payload is a run of `name=value` segments joined by `~`. The scanner
//! walks the payload from the front and stops at the first position that
//! does not start a well-formed segment; whatever follows is left unread.
//!
//! Matching rules at each position:
//! - `name` is one or more ASCII word characters (`[A-Za-z0-9_]`)
//! - a literal `=` follows the name
//! - `value` is the shortest run up to the first `~` or end of input; the
//!   `~` is consumed but not part of the value
//! - a line terminator met before the delimiter ends the scan

use std::iter::FusedIterator;

use serde::Serialize;

/// Separator between segments.
pub const DELIMITER: char = '~';

/// Separator between a field name and its value.
pub const ASSIGN: char = '=';

/// One `name=value` pair borrowed from a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Field<'a> {
    /// Field name. Not unique within a payload.
    pub name: &'a str,
    /// Field value, possibly empty.
    pub value: &'a str,
}

impl<'a> Field<'a> {
    /// Build a field from its parts.
    pub const fn new(name: &'a str, value: &'a str) -> Self {
        Self { name, value }
    }

    /// Value length in characters.
    pub fn value_len(&self) -> usize {
        self.value.chars().count()
    }
}

/// Lazy iterator over the fields of a payload.
///
/// Created by [`iterate_fields`]. Once a position fails to match, the
/// iterator is exhausted for good and [`Fields::remainder`] holds the text
/// that was not consumed.
#[derive(Debug, Clone)]
pub struct Fields<'a> {
    rest: &'a str,
}

impl<'a> Fields<'a> {
    /// Text not yet consumed by the scan.
    ///
    /// Empty after a clean end of input; otherwise the content that stopped
    /// the scan (or the fields not yet pulled).
    pub fn remainder(&self) -> &'a str {
        self.rest
    }
}

impl<'a> Iterator for Fields<'a> {
    type Item = Field<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (field, rest) = match_segment(self.rest)?;
        tracing::trace!(field = field.name, value_len = field.value.len(), "matched field");
        self.rest = rest;
        Some(field)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Every segment consumes at least two bytes (`x=`), except one at
        // the very end which may be exactly `x=`.
        if self.rest.is_empty() {
            (0, Some(0))
        } else {
            (0, Some(self.rest.len().div_ceil(2)))
        }
    }
}

impl FusedIterator for Fields<'_> {}

/// Iterate the fields of a decoded payload in order.
///
/// Duplicate names and empty values are yielded as they appear. Separate
/// calls share no state, so iterating the same text twice produces the same
/// sequence.
pub fn iterate_fields(text: &str) -> Fields<'_> {
    Fields { rest: text }
}

/// Value of the first field named `name` in a decoded payload.
///
/// Only the first field with that name is consulted; an empty value there
/// counts as absent even if a later duplicate is non-empty.
pub fn find_field<'a>(text: &'a str, name: &str) -> Option<&'a str> {
    let mut fields = iterate_fields(text);
    let value = fields.find(|f| f.name == name)?.value;
    (!value.is_empty()).then_some(value)
}

/// Match one segment at the start of `input`.
///
/// Returns the field and the input left after the segment (including its
/// delimiter). `None` when `input` does not start with a segment.
fn match_segment(input: &str) -> Option<(Field<'_>, &str)> {
    let name_len = input.bytes().take_while(|&b| is_word_byte(b)).count();
    if name_len == 0 {
        return None;
    }
    // Word bytes are ASCII, so `name_len` is a char boundary.
    let (name, after_name) = input.split_at(name_len);
    let body = after_name.strip_prefix(ASSIGN)?;

    let end = body
        .find(|c: char| c == DELIMITER || is_line_terminator(c))
        .unwrap_or(body.len());
    let value = &body[..end];
    let rest = match body[end..].chars().next() {
        None => "",
        Some(DELIMITER) => &body[end + DELIMITER.len_utf8()..],
        Some(_) => return None,
    };

    Some((Field { name, value }, rest))
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}
