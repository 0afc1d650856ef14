//! FILENAME: core/engine/src/functions.rs
//! PURPOSE: The built-in operator and function registry.
//! CONTEXT: The expression tree keeps operators and function names as source
//! text. This module resolves them to a fixed set of implementations.
//! Operator symbols are matched exactly; function names ignore case. A name
//! that resolves to nothing, or a call with too few parameters, evaluates to
//! `None` instead of failing, so a half-typed formula still previews.
//!
//! OPERATORS: & (concatenate all), + - * / (numeric, two parameters)
//! FUNCTIONS: ROUND, UPPER
//!
//! Parameters are already evaluated. A missing parameter value (`None`)
//! reads as empty text for text operations and NaN for numeric ones.

use crate::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Concat,
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "&" => Some(Operator::Concat),
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Subtract),
            "*" => Some(Operator::Multiply),
            "/" => Some(Operator::Divide),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Concat => "&",
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }

    pub fn apply(self, params: &[Option<Value>]) -> Option<Value> {
        let arithmetic: fn(f64, f64) -> f64 = match self {
            Operator::Concat => return Some(Value::Text(params.iter().map(text).collect())),
            Operator::Add => |l: f64, r: f64| l + r,
            Operator::Subtract => |l: f64, r: f64| l - r,
            Operator::Multiply => |l: f64, r: f64| l * r,
            Operator::Divide => |l: f64, r: f64| l / r,
        };

        let [left, right] = params else {
            log::debug!(
                "operator '{}' expects 2 parameters, got {}",
                self.symbol(),
                params.len()
            );
            return None;
        };
        Some(Value::Number(arithmetic(number(left), number(right))))
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    Round,
    Upper,
}

impl Function {
    /// Resolves a function name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_uppercase().as_str() {
            "ROUND" => Some(Function::Round),
            "UPPER" => Some(Function::Upper),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Function::Round => "ROUND",
            Function::Upper => "UPPER",
        }
    }

    pub fn apply(self, params: &[Option<Value>]) -> Option<Value> {
        let Some(first) = params.first() else {
            log::debug!("{} called without parameters", self.name());
            return None;
        };

        match self {
            Function::Round => Some(Value::Number(round_half_up(number(first)))),
            Function::Upper => Some(Value::Text(text(first).to_uppercase())),
        }
    }
}

/// Applies an operator by symbol. Unknown symbols (such as `=`) give `None`.
pub fn execute_operator(symbol: &str, params: &[Option<Value>]) -> Option<Value> {
    Operator::from_symbol(symbol)?.apply(params)
}

/// Calls a function by name. Unknown names give `None`.
pub fn execute_function(name: &str, params: &[Option<Value>]) -> Option<Value> {
    Function::from_name(name)?.apply(params)
}

pub fn has_function(name: &str) -> bool {
    Function::from_name(name).is_some()
}

fn text(param: &Option<Value>) -> String {
    param.as_ref().map(Value::as_text).unwrap_or_default()
}

fn number(param: &Option<Value>) -> f64 {
    param.as_ref().map_or(f64::NAN, Value::as_number)
}

/// Rounds to the nearest integer; halves go towards positive infinity.
fn round_half_up(n: f64) -> f64 {
    let floor = n.floor();
    if n - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}
