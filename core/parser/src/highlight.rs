//! FILENAME: core/parser/src/highlight.rs
//! PURPOSE: Pairs each token with its style class and error flag.
//! CONTEXT: The editor overlays the formula with one styled span per token.
//! The class is the token type name, plus `error` when any syntax error
//! points at the token.

use crate::error::SyntaxError;
use crate::token::Token;
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HighlightedToken {
    pub value: String,
    pub class_name: &'static str,
    pub has_error: bool,
}

impl HighlightedToken {
    /// Space separated class list, e.g. `"bracket error"`.
    pub fn class_names(&self) -> String {
        if self.has_error {
            format!("{} error", self.class_name)
        } else {
            self.class_name.to_string()
        }
    }
}

pub fn highlight(tokens: &[Token], errors: &[SyntaxError]) -> Vec<HighlightedToken> {
    let flagged: HashSet<usize> = errors.iter().map(|e| e.token).collect();

    tokens
        .iter()
        .enumerate()
        .map(|(index, token)| HighlightedToken {
            value: token.value.clone(),
            class_name: token.token_type.as_str(),
            has_error: flagged.contains(&index),
        })
        .collect()
}
