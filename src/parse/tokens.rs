//! Token recognition for marble notation
//!
//! Every character maps to exactly one token. Anything that is not one
//! of the structural symbols is a value token.

use serde::{Deserialize, Serialize};

/// Marble notation token
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token {
    /// `-` one frame passes
    Frame,
    /// `|` stream completes
    Complete,
    /// `#` stream errors
    Error,
    /// ` ` alignment only
    Whitespace,
    /// `(` starts simultaneous emissions
    GroupOpen,
    /// `)` ends simultaneous emissions
    GroupClose,
    /// Any other character is an emitted value
    Value(char),
}

impl Token {
    pub fn classify(c: char) -> Token {
        match c {
            '-' => Token::Frame,
            '|' => Token::Complete,
            '#' => Token::Error,
            ' ' => Token::Whitespace,
            '(' => Token::GroupOpen,
            ')' => Token::GroupClose,
            other => Token::Value(other),
        }
    }

    /// The notation character this token was read from
    pub fn as_char(&self) -> char {
        match self {
            Token::Frame => '-',
            Token::Complete => '|',
            Token::Error => '#',
            Token::Whitespace => ' ',
            Token::GroupOpen => '(',
            Token::GroupClose => ')',
            Token::Value(c) => *c,
        }
    }

    /// Whether reading this token outside a group moves time forward
    pub fn advances_time(&self) -> bool {
        matches!(self, Token::Frame | Token::Value(_))
    }
}

/// Tokenize a marble string, pairing each token with its character index
pub fn tokenize(marble: &str) -> Vec<(usize, Token)> {
    marble
        .chars()
        .enumerate()
        .map(|(i, c)| (i, Token::classify(c)))
        .collect()
}
