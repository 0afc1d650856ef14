//! FILENAME: core/parser/src/lib.rs
//! PURPOSE: Library root for the formula parser.
//! CONTEXT: This crate turns a formula string into classified tokens, checks
//! them for syntax errors, and rebuilds the expression tree the engine
//! evaluates.
//!
//! PIPELINE: Formula String --> Lexer (Classifier) --> Tokens --> Validator --> Errors
//!                                                           \--> Parser --> AST --> Evaluator
//!
//! SUPPORTED FEATURES:
//! - Operators: & + - * / (and `=`, which is tokenized but has no meaning)
//! - Quoted text: "Hello"
//! - References: [First Name]
//! - Function calls: Round(1.2), Upper("hi"), zero-argument calls
//! - Parentheses for grouping

pub mod ast;
pub mod cursor;
pub mod error;
pub mod highlight;
pub mod lexer;
pub mod parser;
pub mod syntax;
pub mod token;
pub mod validator;


// Re-export commonly used types for convenience
pub use ast::{Expression, Literal};
pub use cursor::Cursor;
pub use error::{LexError, LexResult, SyntaxError, SyntaxErrorKind};
pub use highlight::{HighlightedToken, highlight};
pub use lexer::{Classifier, Lexer, strip_line_breaks, tokenize, tokenize_with};
pub use parser::{ParseError, ParseResult, Parser, parse};
pub use syntax::classify;
pub use token::{Token, TokenType};
pub use validator::validate;
