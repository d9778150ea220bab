use thiserror::Error;
use crate::lexer::{LexerError, Position};

/// Parser error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParserError {
    #[error("Syntax error at '{found}' ({pos}): expected {expected}")]
    UnexpectedToken {
        found: String,
        expected: String,
        pos: Position,
    },

    #[error("Syntax error at EOF: expected {expected}")]
    UnexpectedEof { expected: String },

    #[error("Parentheses nested deeper than {limit} levels at {pos}")]
    NestingTooDeep { limit: usize, pos: Position },
}

impl ParserError {
    /// Position of the offending token, `None` at end of input
    pub fn position(&self) -> Option<Position> {
        match self {
            ParserError::UnexpectedToken { pos, .. }
            | ParserError::NestingTooDeep { pos, .. } => Some(*pos),
            ParserError::UnexpectedEof { .. } => None,
        }
    }
}

/// A failed parse: the fatal syntax error plus any lexical errors that were
/// skipped before it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{error}")]
pub struct ParseFailure {
    pub error: ParserError,
    pub lex_errors: Vec<LexerError>,
}
