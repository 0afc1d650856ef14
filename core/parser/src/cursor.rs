//! FILENAME: core/parser/src/cursor.rs
//! PURPOSE: Scanner primitives over an immutable formula string.
//! CONTEXT: The classifier never touches the source directly; it asks the
//! cursor to peek, advance, or match a pattern at the current position.
//! Positions are byte offsets that always sit on a char boundary, and the
//! cursor only ever moves forward.

use regex::Regex;

#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    source: &'a str,
    position: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Cursor {
            source,
            position: 0,
        }
    }

    /// Current byte offset.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// The unconsumed part of the source.
    pub fn rest(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// Source text between byte offset `from` and the current position.
    pub fn slice_from(&self, from: usize) -> &'a str {
        &self.source[from..self.position]
    }

    /// Returns the character at the current position without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Returns the character `offset` bytes past the current position.
    pub fn peek_at(&self, offset: usize) -> Option<char> {
        self.rest().get(offset..)?.chars().next()
    }

    /// Consumes one character and returns it.
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += ch.len_utf8();
        Some(ch)
    }

    /// Matches `pattern` at the current position. The match must begin
    /// exactly at the cursor; a match further along the input is ignored.
    /// When `consume` is true the cursor moves past the matched text.
    pub fn match_pattern(&mut self, pattern: &Regex, consume: bool) -> Option<&'a str> {
        let rest = self.rest();
        let found = pattern.find(rest).filter(|m| m.start() == 0 && !m.is_empty())?;
        let matched = &rest[..found.end()];
        if consume {
            self.position += matched.len();
        }
        Some(matched)
    }
}
