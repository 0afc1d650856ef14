//! FILENAME: tests/common/mod.rs
//! Fixtures for formula engine integration tests.

#![allow(dead_code)]

use formula_engine::{analyze, Analysis, Inputs, Value};

/// The formula the editor opens with.
pub const EDITOR_EXAMPLE: &str =
    r#""Hello " & [First Name] & "! " & Round(1.2 + [Some Number])"#;

/// Builds an input map from name/value pairs.
pub fn inputs<V: Into<Value> + Clone>(pairs: &[(&str, V)]) -> Inputs {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.clone().into()))
        .collect()
}

/// The inputs the editor example starts with.
pub fn editor_inputs() -> Inputs {
    let mut values = Inputs::new();
    values.insert("First Name".to_string(), Value::from("Andrew"));
    values.insert("Some Number".to_string(), Value::from(3));
    values
}

/// Runs the whole pipeline, panicking on an internal lexer fault.
pub fn run(formula: &str, values: &Inputs) -> Analysis {
    analyze(formula, values).expect("tokenizer should always advance")
}
