//! Parsing module for svg-marbles
//!
//! This module turns marble notation into a time-ordered
//! `ParsedTimeline`.

pub mod tokens;
pub mod grammar;

// Re-export commonly used types
pub use tokens::*;
pub use grammar::*;
