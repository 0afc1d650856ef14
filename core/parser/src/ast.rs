//! FILENAME: core/parser/src/ast.rs
//! PURPOSE: Defines the expression tree for formulas.
//! CONTEXT: The parser rebuilds this tree from the token sequence and the
//! engine's evaluator walks it. Operators and function names stay as the
//! source text wrote them; resolving them is the engine registry's job, so an
//! unknown name still produces a tree and simply evaluates to nothing.
//!
//! SUPPORTED EXPRESSIONS:
//! - Literals: numbers, quoted text
//! - References: [Name]
//! - Operator chains: `a op b op c`, folded left to right without precedence
//! - Function calls: Round(1.2), Upper("a")

#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    Literal(Literal),

    /// A reference like `[First Name]`; holds the name between the brackets.
    Reference(String),

    /// `first op1 e1 op2 e2 ...`, where each op is the operator symbol.
    /// Kept flat so a long chain does not nest one level per operator.
    Chain {
        first: Box<Expression>,
        rest: Vec<(String, Expression)>,
    },

    FunctionCall { name: String, args: Vec<Expression> },
}

/// Literal values that can appear in formulas.
#[derive(Debug, PartialEq, Clone)]
pub enum Literal {
    Number(f64),
    Text(String),
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::Number(n) => write!(f, "{}", n),
            Literal::Text(s) => write!(f, "\"{}\"", s),
        }
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::Literal(literal) => write!(f, "{}", literal),
            Expression::Reference(name) => write!(f, "[{}]", name),
            Expression::Chain { first, rest } => {
                write!(f, "({}", first)?;
                for (op, operand) in rest {
                    write!(f, " {} {}", op, operand)?;
                }
                write!(f, ")")
            }
            Expression::FunctionCall { name, args } => {
                write!(f, "{}(", name)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
        }
    }
}
