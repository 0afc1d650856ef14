//! FILENAME: core/engine/src/evaluator.rs
//! PURPOSE: Evaluates formula expressions against a set of input values.
//! CONTEXT: The token sequence is first rebuilt into an expression tree by the
//! parser crate; this module walks that tree. References are looked up in the
//! caller's inputs, operators and functions are dispatched through the
//! registry in `functions`.
//!
//! Evaluation is total. A token sequence that does not form a tree (the
//! formula is invalid or still being typed) evaluates to `None`, as do missing
//! references and unknown names. The validator is the place that explains
//! what is wrong.

use crate::functions::{execute_function, execute_operator};
use crate::value::{Inputs, Value};
use formula_parser::{parse, Expression, Literal, Token};

/// The formula evaluator.
/// Holds a reference to the input values for reference lookups.
pub struct Evaluator<'a> {
    inputs: &'a Inputs,
}

impl<'a> Evaluator<'a> {
    pub fn new(inputs: &'a Inputs) -> Self {
        Evaluator { inputs }
    }

    /// Evaluates an expression tree and returns the result.
    pub fn evaluate(&self, expr: &Expression) -> Option<Value> {
        match expr {
            Expression::Literal(literal) => Some(self.eval_literal(literal)),
            Expression::Reference(name) => self.eval_reference(name),
            Expression::Chain { first, rest } => self.eval_chain(first, rest),
            Expression::FunctionCall { name, args } => {
                let params: Vec<Option<Value>> =
                    args.iter().map(|arg| self.evaluate(arg)).collect();
                execute_function(name, &params)
            }
        }
    }

    /// Folds an operator chain from the left: `a + b * c` is `(a + b) * c`.
    fn eval_chain(&self, first: &Expression, rest: &[(String, Expression)]) -> Option<Value> {
        let mut acc = self.evaluate(first);
        for (op, operand) in rest {
            let params = [acc, self.evaluate(operand)];
            acc = execute_operator(op, &params);
        }
        acc
    }

    fn eval_literal(&self, literal: &Literal) -> Value {
        match literal {
            Literal::Number(n) => Value::Number(*n),
            Literal::Text(s) => Value::Text(s.clone()),
        }
    }

    fn eval_reference(&self, name: &str) -> Option<Value> {
        let value = self.inputs.get(name).cloned();
        if value.is_none() {
            log::trace!("reference [{}] has no input value", name);
        }
        value
    }
}

/// Evaluates a token sequence. Returns `None` when the tokens do not form an
/// expression or the expression has no value.
pub fn evaluate(tokens: &[Token], inputs: &Inputs) -> Option<Value> {
    match parse(tokens) {
        Ok(expr) => Evaluator::new(inputs).evaluate(&expr),
        Err(e) => {
            log::debug!("formula not evaluated: {}", e);
            None
        }
    }
}
