//! Marble diagram rendering
//!
//! Parses marble notation (the textual timeline notation used by
//! reactive-stream test tooling) and renders it as a static SVG document.
//! Built as a WASM module for JavaScript callers and as an rlib for Rust.

pub mod errors;
pub mod models;
pub mod parse;
pub mod renderers;
pub mod api;

// Re-export commonly used types
pub use errors::{MarbleError, ParseError};
pub use models::*;
pub use parse::{parse_marble, parse_marble_diagram, Token};
pub use renderers::{render, render_capture, render_marble_diagram_to_svg, render_timeline, SvgRenderer};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    init_logging();

    log::info!("svg-marbles WASM module initialized");
}

#[cfg(feature = "console_log")]
fn init_logging() {
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("[WASM] logger not installed: {}", e).into());
    }
}

#[cfg(not(feature = "console_log"))]
fn init_logging() {}
