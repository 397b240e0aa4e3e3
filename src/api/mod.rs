//! svg-marbles WASM API
//!
//! This module provides the JavaScript-facing API.
//!
//! # Module Structure
//!
//! - `helpers`: console logging, serde bridging and error conversion
//! - `render`: parse and render entry points

pub mod helpers;
pub mod render;

pub use render::{
    default_theme_js, parse_marble_diagram_js, render_capture_js, render_js, render_marble_diagram_to_svg_js,
};
