//! Error types of the symbolic engine.
//!
//! Parsing is the only stage that can fail on user input. Evaluation fails only on a pending
//! derivative marker; floating point exceptions (division by zero, log of a negative number)
//! propagate as infinities and NaNs instead.
use std::fmt;

/// Errors produced while turning text into an expression tree
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// a `)` without an opening partner, or a `(` that is never closed
    UnbalancedParentheses(String),
    /// a symbol that has no arithmetic, function or literal interpretation
    UnknownSymbol(String),
    /// the input, or one operand of a binary operator, is empty
    EmptyExpression,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseError::UnbalancedParentheses(input) => {
                write!(f, "Unbalanced parentheses in '{}'", input)
            }
            ParseError::UnknownSymbol(symbol) => write!(f, "Unknown symbol '{}'", symbol),
            ParseError::EmptyExpression => write!(f, "Empty expression or missing operand"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Errors produced while reducing a tree to a number
#[derive(Debug, Clone, PartialEq)]
pub enum EvaluationError {
    /// a `Differential` marker has no numeric meaning until it is resolved
    UnresolvedDerivative(String),
}

impl fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EvaluationError::UnresolvedDerivative(marker) => {
                write!(f, "Cannot evaluate unresolved derivative {}", marker)
            }
        }
    }
}

impl std::error::Error for EvaluationError {}

/// Crate level error, lets callers chain parsing, evaluation and configuration with `?`
#[derive(Debug, Clone, PartialEq)]
pub enum SymbolicError {
    Parse(ParseError),
    Evaluation(EvaluationError),
    Config(String),
}

impl fmt::Display for SymbolicError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SymbolicError::Parse(err) => write!(f, "Parsing error: {}", err),
            SymbolicError::Evaluation(err) => write!(f, "Evaluation error: {}", err),
            SymbolicError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for SymbolicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SymbolicError::Parse(err) => Some(err),
            SymbolicError::Evaluation(err) => Some(err),
            SymbolicError::Config(_) => None,
        }
    }
}

impl From<ParseError> for SymbolicError {
    fn from(err: ParseError) -> Self {
        SymbolicError::Parse(err)
    }
}

impl From<EvaluationError> for SymbolicError {
    fn from(err: EvaluationError) -> Self {
        SymbolicError::Evaluation(err)
    }
}
