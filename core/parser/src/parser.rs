//! FILENAME: core/parser/src/parser.rs
//! PURPOSE: Rebuilds an expression tree from a token sequence.
//! CONTEXT: This is the second stage for evaluation. It takes the lexer's
//! tokens (whitespace is ignored) and builds an Expression tree that the
//! engine can evaluate. It does not report user-facing errors; the validator
//! does that. Any sequence the grammar cannot place fails with ParseError.
//!
//! GRAMMAR:
//!   expression    --> operand ( OPERATOR operand )*      // one flat chain
//!   operand       --> NUMBER | text | reference | function_call | "(" expression ")"
//!   text          --> START_QUOTE STRING? END_QUOTE?     // END_QUOTE optional at end of input
//!   reference     --> "[" REFERENCE_NAME "]"
//!   function_call --> FUNCTION_NAME "(" arguments? ")"
//!   arguments     --> expression ("," expression)*

use crate::ast::{Expression, Literal};
use crate::token::{Token, TokenType};

/// Nesting deeper than this is rejected instead of recursing further.
const MAX_DEPTH: usize = 256;

/// Parser errors with descriptive messages.
#[derive(Debug, PartialEq, Clone)]
pub struct ParseError {
    pub message: String,
}

impl ParseError {
    pub fn new(message: impl Into<String>) -> Self {
        ParseError {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Parse error: {}", self.message)
    }
}

impl std::error::Error for ParseError {}

pub type ParseResult<T> = Result<T, ParseError>;

pub struct Parser<'t> {
    tokens: Vec<&'t Token>,
    position: usize,
    depth: usize,
}

impl<'t> Parser<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        Parser {
            tokens: tokens.iter().filter(|t| t.is_significant()).collect(),
            position: 0,
            depth: 0,
        }
    }

    /// Parses the entire token sequence and returns the tree.
    pub fn parse(&mut self) -> ParseResult<Expression> {
        if self.tokens.is_empty() {
            return Err(ParseError::new("Empty expression"));
        }

        let expr = self.parse_expression()?;

        if let Some(token) = self.current() {
            return Err(ParseError::new(format!(
                "Unexpected token after expression: {}",
                token
            )));
        }

        Ok(expr)
    }

    fn current(&self) -> Option<&'t Token> {
        self.tokens.get(self.position).copied()
    }

    fn current_is(&self, token_type: TokenType) -> bool {
        self.current().is_some_and(|t| t.token_type == token_type)
    }

    fn current_is_bracket(&self, bracket: char) -> bool {
        self.current().is_some_and(|t| t.is_bracket(bracket))
    }

    fn advance(&mut self) -> Option<&'t Token> {
        let token = self.current();
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    fn expect_bracket(&mut self, bracket: char) -> ParseResult<()> {
        if self.current_is_bracket(bracket) {
            self.advance();
            Ok(())
        } else {
            Err(ParseError::new(format!(
                "Expected '{}', found {}",
                bracket,
                self.describe_current()
            )))
        }
    }

    fn describe_current(&self) -> String {
        match self.current() {
            Some(token) => token.to_string(),
            None => "end of formula".to_string(),
        }
    }

    fn parse_expression(&mut self) -> ParseResult<Expression> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(ParseError::new("Formula is nested too deeply"));
        }

        let first = self.parse_operand()?;
        let mut rest = Vec::new();

        while self.current_is(TokenType::Operator) {
            let op = self.advance().map(|t| t.value.clone()).unwrap_or_default();
            rest.push((op, self.parse_operand()?));
        }

        self.depth -= 1;
        if rest.is_empty() {
            Ok(first)
        } else {
            Ok(Expression::Chain {
                first: Box::new(first),
                rest,
            })
        }
    }

    fn parse_operand(&mut self) -> ParseResult<Expression> {
        let Some(token) = self.current() else {
            return Err(ParseError::new("Expected a value, found end of formula"));
        };

        match token.token_type {
            TokenType::Number => {
                self.advance();
                token
                    .value
                    .parse::<f64>()
                    .map(|n| Expression::Literal(Literal::Number(n)))
                    .map_err(|_| ParseError::new(format!("Invalid number '{}'", token.value)))
            }
            TokenType::StartQuote => self.parse_text(),
            TokenType::FunctionName => self.parse_function_call(token),
            TokenType::Bracket if token.is_bracket('(') => {
                self.advance();
                let inner = self.parse_expression()?;
                self.expect_bracket(')')?;
                Ok(inner)
            }
            TokenType::Bracket if token.is_bracket('[') => self.parse_reference(),
            _ => Err(ParseError::new(format!("Expected a value, found {}", token))),
        }
    }

    fn parse_text(&mut self) -> ParseResult<Expression> {
        self.advance();

        let mut text = String::new();
        if self.current_is(TokenType::String) {
            if let Some(token) = self.advance() {
                text.push_str(&token.value);
            }
        }

        if self.current_is(TokenType::EndQuote) {
            self.advance();
        } else if self.current().is_some() {
            return Err(ParseError::new(format!(
                "Expected closing quote, found {}",
                self.describe_current()
            )));
        }

        Ok(Expression::Literal(Literal::Text(text)))
    }

    fn parse_reference(&mut self) -> ParseResult<Expression> {
        self.advance();

        let name = match self.current() {
            Some(token) if token.token_type == TokenType::ReferenceName => token.value.clone(),
            _ => {
                return Err(ParseError::new(format!(
                    "Expected a reference name, found {}",
                    self.describe_current()
                )));
            }
        };
        self.advance();
        self.expect_bracket(']')?;

        Ok(Expression::Reference(name))
    }

    fn parse_function_call(&mut self, name: &'t Token) -> ParseResult<Expression> {
        self.advance();
        self.expect_bracket('(')?;

        let mut args = Vec::new();
        if self.current_is_bracket(')') {
            self.advance();
        } else {
            loop {
                args.push(self.parse_expression()?);
                if self.current_is(TokenType::Comma) {
                    self.advance();
                } else {
                    self.expect_bracket(')')?;
                    break;
                }
            }
        }

        Ok(Expression::FunctionCall {
            name: name.value.clone(),
            args,
        })
    }
}

/// Builds the expression tree for a token sequence.
pub fn parse(tokens: &[Token]) -> ParseResult<Expression> {
    Parser::new(tokens).parse()
}
