//! FILENAME: core/parser/src/token.rs
//! PURPOSE: Token definitions for the formula lexer.
//! CONTEXT: Tokens are the atomic units produced by the lexer and consumed by
//! the validator, the expression parser and the editor's highlighter. Unlike a
//! compiler token stream, nothing is skipped: whitespace and unrecognized
//! characters are tokens too, so the sequence always covers the whole input.

use serde::Serialize;

/// Classification of a scanned token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenType {
    Whitespace,
    Number,
    Operator,
    StartQuote,
    EndQuote,
    /// Text between a start quote and its end quote.
    String,
    /// One of `(`, `)`, `[`, `]`.
    Bracket,
    Comma,
    /// An identifier immediately followed by `(`.
    FunctionName,
    /// The text between `[` and `]`.
    ReferenceName,
    /// An identifier that is not followed by a call.
    UnfinishedFormula,
    Error,
}

impl TokenType {
    /// Stable kebab-case name, also used by hosts as the style class.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenType::Whitespace => "whitespace",
            TokenType::Number => "number",
            TokenType::Operator => "operator",
            TokenType::StartQuote => "start-quote",
            TokenType::EndQuote => "end-quote",
            TokenType::String => "string",
            TokenType::Bracket => "bracket",
            TokenType::Comma => "comma",
            TokenType::FunctionName => "function-name",
            TokenType::ReferenceName => "reference-name",
            TokenType::UnfinishedFormula => "unfinished-formula",
            TokenType::Error => "error",
        }
    }
}

impl std::fmt::Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified slice of the formula.
/// `start` and `end` are inclusive character offsets into the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub value: String,
    #[serde(rename = "type")]
    pub token_type: TokenType,
    pub start: usize,
    pub end: usize,
}

impl Token {
    pub fn new(token_type: TokenType, value: impl Into<String>, start: usize, end: usize) -> Self {
        Token {
            value: value.into(),
            token_type,
            start,
            end,
        }
    }

    /// Returns true for every token except whitespace.
    pub fn is_significant(&self) -> bool {
        self.token_type != TokenType::Whitespace
    }

    /// Returns true if this is the bracket token `bracket`.
    pub fn is_bracket(&self, bracket: char) -> bool {
        self.token_type == TokenType::Bracket && self.value.chars().eq(std::iter::once(bracket))
    }

    /// Returns true if the token ends a value: a number, a closing quote,
    /// or a closing `)` / `]`.
    pub fn produces_value(&self) -> bool {
        match self.token_type {
            TokenType::Number | TokenType::EndQuote => true,
            TokenType::Bracket => self.is_bracket(')') || self.is_bracket(']'),
            _ => false,
        }
    }

    /// Returns true if a value may start right after this token.
    pub fn allows_value(&self) -> bool {
        match self.token_type {
            TokenType::Operator | TokenType::Comma => true,
            TokenType::Bracket => self.is_bracket('('),
            _ => false,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({:?})@{}..={}", self.token_type, self.value, self.start, self.end)
    }
}

/// Finds the most recent token that is not whitespace.
pub fn previous_significant(tokens: &[Token]) -> Option<&Token> {
    tokens.iter().rev().find(|token| token.is_significant())
}
