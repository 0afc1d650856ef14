//! FILENAME: core/parser/src/syntax.rs
//! PURPOSE: Single-step syntax classifier driven by the lexer.
//! CONTEXT: Each call consumes at least one character and names the kind of
//! token it just scanned. The decision depends on the characters ahead and on
//! the previous significant token, which is how quoted text, reference names
//! and the minus sign are told apart without a separate lexer mode.
//!
//! CLASSIFICATION ORDER (first match wins):
//! 1. `"`            -> end-quote after text or a start quote, else start-quote
//! 2. inside quotes  -> string (up to the next `"` or end of input)
//! 3. number         -> `-?[0-9]*\.?[0-9]+`, a leading `-` is an operator
//!                      unless the previous token is an operator
//! 4. `& * - + = /`  -> operator
//! 5. after `[`      -> reference-name (only when a `]` follows)
//! 6. identifier     -> function-name when followed by `(`, else unfinished-formula
//! 7. `( ) [ ]`      -> bracket
//! 8. `,`            -> comma
//! 9. spaces         -> whitespace
//! 10. anything else -> error

use crate::cursor::Cursor;
use crate::token::{Token, TokenType, previous_significant};
use once_cell::sync::Lazy;
use regex::Regex;

static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?[0-9]*\.?[0-9]+").unwrap());
static QUOTED_TEXT: Lazy<Regex> = Lazy::new(|| Regex::new(r#"^[^"]+"#).unwrap());
static REFERENCE_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\[\]]+").unwrap());
static IDENTIFIER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*").unwrap());
static SPACES: Lazy<Regex> = Lazy::new(|| Regex::new(r"^ +").unwrap());

const OPERATORS: [char; 6] = ['&', '*', '-', '+', '=', '/'];
const BRACKETS: [char; 4] = [')', ']', '(', '['];

/// Scans one token starting at the cursor and returns its type.
pub fn classify(cursor: &mut Cursor<'_>, tokens: &[Token]) -> TokenType {
    let Some(peek) = cursor.peek() else {
        return TokenType::Error;
    };
    let previous = previous_significant(tokens);
    let previous_type = previous.map(|token| token.token_type);

    // Doubled quotes toggle; they are not an escape.
    if peek == '"' {
        cursor.advance();
        return match previous_type {
            Some(TokenType::String) | Some(TokenType::StartQuote) => TokenType::EndQuote,
            _ => TokenType::StartQuote,
        };
    }

    if previous_type == Some(TokenType::StartQuote) {
        // Without a closing quote the text runs to the end of the input.
        cursor.match_pattern(&QUOTED_TEXT, true);
        return TokenType::String;
    }

    if cursor.match_pattern(&NUMBER, false).is_some() {
        if peek == '-' && previous_type != Some(TokenType::Operator) {
            cursor.advance();
            return TokenType::Operator;
        }
        cursor.match_pattern(&NUMBER, true);
        return TokenType::Number;
    }

    if OPERATORS.contains(&peek) {
        cursor.advance();
        return TokenType::Operator;
    }

    if previous.is_some_and(|token| token.is_bracket('[')) {
        if let Some(name) = cursor.match_pattern(&REFERENCE_NAME, false) {
            if cursor.peek_at(name.len()) == Some(']') {
                cursor.match_pattern(&REFERENCE_NAME, true);
                return TokenType::ReferenceName;
            }
        }
    }

    if cursor.match_pattern(&IDENTIFIER, true).is_some() {
        if cursor.peek() == Some('(') {
            return TokenType::FunctionName;
        }
        return TokenType::UnfinishedFormula;
    }

    if BRACKETS.contains(&peek) {
        cursor.advance();
        return TokenType::Bracket;
    }

    if peek == ',' {
        cursor.advance();
        return TokenType::Comma;
    }

    if cursor.match_pattern(&SPACES, true).is_some() {
        return TokenType::Whitespace;
    }

    cursor.advance();
    TokenType::Error
}
