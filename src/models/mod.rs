//! Models module for svg-marbles
//!
//! This module contains the data structures shared by the parser,
//! the renderer and the WASM API.

pub mod timeline;
pub mod theme;
pub mod values;
pub mod diagram;

// Re-export commonly used types
pub use timeline::*;
pub use theme::*;
pub use values::*;
pub use diagram::*;
