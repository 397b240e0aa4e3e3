//! Error types for svg-marbles
//!
//! Parse errors are fatal to a single parse call and never yield a partial
//! timeline. Configuration errors come from loading theme or option text.

use thiserror::Error;

/// Top-level error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarbleError {
    /// Malformed marble notation
    #[error("{0}")]
    Parse(#[from] ParseError),

    /// Theme or options text could not be loaded
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Grammar errors raised by the marble parser
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// `(` with no matching `)` before the end of input
    #[error("Unclosed group in marble diagram (opened at index {position})")]
    UnclosedGroup { position: usize },

    /// `)` with no open group
    #[error("Unexpected closing parenthesis at index {position}")]
    UnexpectedClosingParenthesis { position: usize },
}

impl ParseError {
    /// Character index of the offending delimiter
    pub fn position(&self) -> usize {
        match self {
            ParseError::UnclosedGroup { position } => *position,
            ParseError::UnexpectedClosingParenthesis { position } => *position,
        }
    }
}
