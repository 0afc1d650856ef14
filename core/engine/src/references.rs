//! FILENAME: core/engine/src/references.rs
//! PURPOSE: Extracts the reference names a formula depends on.
//! CONTEXT: The host prompts the user for one input per reference. Names come
//! straight from `reference-name` tokens, so a formula that is not yet valid
//! still lists the references typed so far.

use formula_parser::{Token, TokenType};
use std::collections::HashSet;

/// Returns each distinct reference name once, in order of first appearance.
pub fn references_used(tokens: &[Token]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();
    for token in tokens {
        if token.token_type == TokenType::ReferenceName && seen.insert(token.value.as_str()) {
            names.push(token.value.clone());
        }
    }
    names
}
