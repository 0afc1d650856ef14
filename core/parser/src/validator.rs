//! FILENAME: core/parser/src/validator.rs
//! PURPOSE: Reports syntax errors in a token sequence.
//! CONTEXT: Runs over the lexer output in one forward pass, tracking the
//! previous significant token and a stack of open brackets and quotes. It
//! never stops at the first problem: every error in the formula is reported
//! so the editor can mark all of them at once. An empty result means the
//! formula is well formed.
//!
//! ADDITIONAL RULES: besides the operator, comma, bracket and quote checks,
//! this validator also reports a number or an opening quote that follows a
//! value without an operator (`1 2`, `1 "a"`), an identifier that is not a
//! function call (`Unknown name`), and any unrecognized character
//! (`Unexpected character`). Without them such formulas would validate clean
//! yet never evaluate.

use crate::error::{SyntaxError, SyntaxErrorKind};
use crate::token::{Token, TokenType};

/// An open bracket or quote waiting for its closing partner.
/// Each frame holds the index of its opening token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Frame {
    /// `(` used for grouping.
    Group(usize),
    /// `(` opening a function's argument list.
    Call(usize),
    Reference(usize),
    Quote(usize),
}

impl Frame {
    fn opening(self) -> usize {
        match self {
            Frame::Group(index)
            | Frame::Call(index)
            | Frame::Reference(index)
            | Frame::Quote(index) => index,
        }
    }

    fn closing(self) -> char {
        match self {
            Frame::Group(_) | Frame::Call(_) => ')',
            Frame::Reference(_) => ']',
            Frame::Quote(_) => '"',
        }
    }
}

/// Validates a token sequence and returns the errors in encounter order.
pub fn validate(tokens: &[Token]) -> Vec<SyntaxError> {
    Validator::new(tokens).run()
}

struct Validator<'t> {
    tokens: &'t [Token],
    stack: Vec<Frame>,
    errors: Vec<SyntaxError>,
    previous: Option<usize>,
}

impl<'t> Validator<'t> {
    fn new(tokens: &'t [Token]) -> Self {
        Validator {
            tokens,
            stack: Vec::new(),
            errors: Vec::new(),
            previous: None,
        }
    }

    fn run(mut self) -> Vec<SyntaxError> {
        let tokens = self.tokens;
        for (index, token) in tokens.iter().enumerate() {
            if !token.is_significant() {
                continue;
            }
            self.check(index, token);
            self.previous = Some(index);
        }

        for frame in std::mem::take(&mut self.stack) {
            self.report(frame.opening(), SyntaxErrorKind::MissingClose(frame.closing()));
        }

        self.errors
    }

    fn check(&mut self, index: usize, token: &Token) {
        let tokens = self.tokens;
        let previous = self.previous.map(|i| &tokens[i]);
        let produces_value = previous.is_some_and(Token::produces_value);
        // A value may start the formula.
        let allows_value = previous.is_none_or(Token::allows_value);

        match token.token_type {
            TokenType::Operator => {
                if !produces_value {
                    self.report(index, SyntaxErrorKind::UnexpectedOperator(token.value.clone()));
                }
                if index == tokens.len() - 1 {
                    self.report(index, SyntaxErrorKind::MissingOperand(token.value.clone()));
                }
            }
            TokenType::FunctionName => {
                if !allows_value {
                    self.report(index, SyntaxErrorKind::OperatorBeforeFunction);
                }
            }
            TokenType::Number => {
                if !allows_value {
                    self.report(index, SyntaxErrorKind::OperatorBeforeNumber);
                }
            }
            TokenType::StartQuote => {
                if !allows_value {
                    self.report(index, SyntaxErrorKind::OperatorBeforeText);
                }
                self.stack.push(Frame::Quote(index));
            }
            TokenType::EndQuote => {
                if matches!(self.stack.last(), Some(Frame::Quote(_))) {
                    self.stack.pop();
                }
            }
            TokenType::Comma => {
                if !matches!(self.stack.last(), Some(Frame::Group(_) | Frame::Call(_))) {
                    self.report(index, SyntaxErrorKind::UnexpectedComma);
                }
                if !produces_value {
                    self.report(index, SyntaxErrorKind::UnexpectedComma);
                }
            }
            TokenType::Bracket => {
                self.check_bracket(index, token, previous, produces_value, allows_value)
            }
            TokenType::UnfinishedFormula => {
                self.report(index, SyntaxErrorKind::UnknownName(token.value.clone()));
            }
            TokenType::Error => {
                self.report(index, SyntaxErrorKind::UnexpectedCharacter(token.value.clone()));
            }
            TokenType::Whitespace | TokenType::String | TokenType::ReferenceName => {}
        }
    }

    fn check_bracket(
        &mut self,
        index: usize,
        token: &Token,
        previous: Option<&Token>,
        produces_value: bool,
        allows_value: bool,
    ) {
        let after_function = previous.is_some_and(|p| p.token_type == TokenType::FunctionName);

        match token.value.as_str() {
            "(" => {
                if after_function {
                    self.stack.push(Frame::Call(index));
                } else {
                    self.stack.push(Frame::Group(index));
                    if !allows_value {
                        self.report(index, SyntaxErrorKind::OperatorBeforeParenthesis);
                    }
                }
            }
            ")" => match self.stack.last().copied() {
                Some(frame @ (Frame::Group(_) | Frame::Call(_))) => {
                    self.stack.pop();
                    // `Name()` with no arguments is a valid call.
                    let empty_call =
                        matches!(frame, Frame::Call(open) if self.previous == Some(open));
                    if !produces_value && !empty_call {
                        self.report(index, SyntaxErrorKind::UnexpectedCloseParen);
                    }
                }
                _ => self.report(index, SyntaxErrorKind::UnexpectedCloseParen),
            },
            "[" => {
                self.stack.push(Frame::Reference(index));
                if !allows_value {
                    self.report(index, SyntaxErrorKind::OperatorBeforeReference);
                }
            }
            "]" => {
                if matches!(self.stack.last(), Some(Frame::Reference(_))) {
                    self.stack.pop();
                    if !previous.is_some_and(|p| p.token_type == TokenType::ReferenceName) {
                        self.report(index, SyntaxErrorKind::EmptyReference);
                    }
                } else {
                    self.report(index, SyntaxErrorKind::UnexpectedCloseBracket);
                }
            }
            _ => {}
        }
    }

    fn report(&mut self, token: usize, kind: SyntaxErrorKind) {
        self.errors.push(SyntaxError::new(token, kind));
    }
}
