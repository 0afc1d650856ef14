//! FILENAME: core/parser/src/error.rs
//! PURPOSE: Error types for the formula pipeline.
//! CONTEXT: Two classes exist. `LexError` is an internal fault (the classifier
//! failed to make progress) and aborts tokenizing. `SyntaxError` is user-facing
//! data returned by the validator and rendered by the editor.

use serde::Serialize;
use serde::ser::SerializeStruct;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("Tokenizer did not move forward at character {offset}")]
    Stalled { offset: usize },
}

pub type LexResult<T> = Result<T, LexError>;

/// The problems the validator can report. `Display` renders the message
/// shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    #[error("Unexpected operator '{0}'")]
    UnexpectedOperator(String),

    #[error("Value expected after operator '{0}'")]
    MissingOperand(String),

    #[error("An operator is required before the function")]
    OperatorBeforeFunction,

    #[error("An operator is required before the parenthesis")]
    OperatorBeforeParenthesis,

    #[error("An operator is required before the reference")]
    OperatorBeforeReference,

    #[error("An operator is required before the number")]
    OperatorBeforeNumber,

    #[error("An operator is required before the text")]
    OperatorBeforeText,

    #[error("Unexpected ','")]
    UnexpectedComma,

    #[error("Unexpected ')'")]
    UnexpectedCloseParen,

    #[error("Unexpected ']'")]
    UnexpectedCloseBracket,

    #[error("A reference name is required in the brackets")]
    EmptyReference,

    #[error("Unknown name '{0}'")]
    UnknownName(String),

    #[error("Unexpected character '{0}'")]
    UnexpectedCharacter(String),

    #[error("Missing closing '{0}'")]
    MissingClose(char),
}

/// A syntax error attached to the token (by index) that triggered it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub token: usize,
    pub kind: SyntaxErrorKind,
}

impl SyntaxError {
    pub fn new(token: usize, kind: SyntaxErrorKind) -> Self {
        SyntaxError { token, kind }
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (token {})", self.kind, self.token)
    }
}

impl std::error::Error for SyntaxError {}

// Serialized as `{ "token": 3, "message": "..." }` for the editor.
impl Serialize for SyntaxError {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("SyntaxError", 2)?;
        state.serialize_field("token", &self.token)?;
        state.serialize_field("message", &self.message())?;
        state.end()
    }
}
