//! FILENAME: core/engine/src/lib.rs
//! PURPOSE: Main library entry point for the formula engine.
//! CONTEXT: Re-exports public types and modules for use by editor hosts.
//! Together with the parser crate this is the complete in-process API:
//! `tokenize`, `validate`, `references_used`, `evaluate`, and `analyze`
//! for the whole pipeline at once.

pub mod analysis;
pub mod evaluator;
pub mod functions;
pub mod references;
pub mod value;

#[cfg(test)]
mod tests;

// Re-export commonly used types at the crate root
pub use analysis::{analyze, Analysis};
pub use evaluator::{evaluate, Evaluator};
pub use functions::{execute_function, execute_operator, has_function, Function, Operator};
pub use references::references_used;
pub use value::{format_number, parse_number, Inputs, Value};

pub use formula_parser::{
    highlight, strip_line_breaks, tokenize, validate, HighlightedToken, LexError, SyntaxError,
    SyntaxErrorKind, Token, TokenType,
};
