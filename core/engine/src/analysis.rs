//! FILENAME: core/engine/src/analysis.rs
//! PURPOSE: Runs the whole pipeline for one formula in a single call.
//! CONTEXT: An editor refreshes everything whenever the text or an input
//! changes: tokens for highlighting, errors for the message list, references
//! for the input prompts, and the live result. The result is computed even
//! when errors are present; it is simply `None` if the tokens do not form an
//! expression.

use crate::evaluator::evaluate;
use crate::references::references_used;
use crate::value::{Inputs, Value};
use formula_parser::{
    highlight, strip_line_breaks, tokenize, validate, HighlightedToken, LexResult, SyntaxError,
    Token,
};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub formula: String,
    pub tokens: Vec<Token>,
    pub errors: Vec<SyntaxError>,
    pub references: Vec<String>,
    pub result: Option<Value>,
}

impl Analysis {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Error messages in the order the validator found them.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(SyntaxError::message).collect()
    }

    pub fn highlighted(&self) -> Vec<HighlightedToken> {
        highlight(&self.tokens, &self.errors)
    }
}

/// Tokenizes, validates and evaluates `formula`. Line breaks are removed
/// first, as the editor is single line.
pub fn analyze(formula: &str, inputs: &Inputs) -> LexResult<Analysis> {
    let formula = strip_line_breaks(formula);
    let tokens = tokenize(&formula)?;
    let errors = validate(&tokens);
    let references = references_used(&tokens);
    let result = evaluate(&tokens, inputs);

    log::debug!(
        "analyzed {:?}: {} tokens, {} errors, {} references",
        formula,
        tokens.len(),
        errors.len(),
        references.len()
    );

    Ok(Analysis {
        formula,
        tokens,
        errors,
        references,
        result,
    })
}
