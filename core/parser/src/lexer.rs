//! FILENAME: core/parser/src/lexer.rs
//! PURPOSE: Drives the syntax classifier over a formula and assembles tokens.
//! CONTEXT: This is the first stage of the pipeline. The lexer owns the
//! cursor and the tokens emitted so far, hands both to the classifier, and
//! records the span the classifier consumed. Concatenating the values of the
//! returned tokens reproduces the input exactly.
//!
//! A classifier that returns without consuming anything would loop forever;
//! the lexer treats that as an internal fault and stops with `LexError`.

use crate::cursor::Cursor;
use crate::error::{LexError, LexResult};
use crate::syntax::classify;
use crate::token::{Token, TokenType};

/// Signature of a single-step classifier.
pub type Classifier = fn(&mut Cursor<'_>, &[Token]) -> TokenType;

pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    classifier: Classifier,
    tokens: Vec<Token>,
    /// Character offset of the cursor (the cursor itself counts bytes).
    char_offset: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_classifier(input, classify)
    }

    pub fn with_classifier(input: &'a str, classifier: Classifier) -> Self {
        Lexer {
            cursor: Cursor::new(input),
            classifier,
            tokens: Vec::new(),
            char_offset: 0,
        }
    }

    /// Scans the next token and appends it. Returns false at end of input.
    pub fn next_token(&mut self) -> LexResult<bool> {
        if self.cursor.is_end() {
            return Ok(false);
        }

        let start = self.cursor.position();
        let token_type = (self.classifier)(&mut self.cursor, &self.tokens);

        if self.cursor.position() <= start {
            log::error!(
                "classifier returned {} without consuming input at character {}",
                token_type,
                self.char_offset
            );
            return Err(LexError::Stalled {
                offset: self.char_offset,
            });
        }

        let value = self.cursor.slice_from(start);
        let length = value.chars().count();
        let token = Token::new(
            token_type,
            value,
            self.char_offset,
            self.char_offset + length - 1,
        );
        log::trace!("scanned {}", token);

        self.char_offset += length;
        self.tokens.push(token);
        Ok(true)
    }

    /// Runs the classifier to the end of the input.
    pub fn tokenize(mut self) -> LexResult<Vec<Token>> {
        while self.next_token()? {}
        Ok(self.tokens)
    }
}

/// Splits a formula into tokens covering the whole input.
pub fn tokenize(formula: &str) -> LexResult<Vec<Token>> {
    Lexer::new(formula).tokenize()
}

/// Same as [`tokenize`] with a custom classifier.
pub fn tokenize_with(formula: &str, classifier: Classifier) -> LexResult<Vec<Token>> {
    Lexer::with_classifier(formula, classifier).tokenize()
}

/// The editor is single line; pasted line breaks are dropped before scanning.
pub fn strip_line_breaks(formula: &str) -> String {
    formula.chars().filter(|ch| *ch != '\r' && *ch != '\n').collect()
}
