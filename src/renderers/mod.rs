//! Renderers module for svg-marbles
//!
//! `svg` holds the timeline renderer. This module adds the pipeline that
//! goes from notation to markup in one call.

pub mod svg;

// Re-export commonly used types
pub use svg::{render_marble_diagram_to_svg, render_timeline, SvgRenderer};

use crate::errors::MarbleError;
use crate::models::{
    resolve_frame_time, DiagramInput, MarbleCapture, MarbleToSvgOptions, Theme, ValueMap,
};
use crate::parse::parse_marble_diagram;

/// Parse a marble string or diagram record and render it to SVG
///
/// Frame time precedence is the diagram's own, then `options.frame_time`,
/// then the default; zero counts as unset.
///
/// # Errors
///
/// Returns `MarbleError::Parse` when the notation is malformed.
pub fn render(diagram: impl Into<DiagramInput>, options: &MarbleToSvgOptions) -> Result<String, MarbleError> {
    let (marble, name, frame_time) = match diagram.into() {
        DiagramInput::Marble(marble) => {
            let frame_time = resolve_frame_time(&[options.frame_time]);
            (marble, None, frame_time)
        }
        DiagramInput::Diagram(d) => {
            let frame_time = resolve_frame_time(&[d.frame_time, options.frame_time]);
            (d.diagram, d.name, frame_time)
        }
    };

    let timeline = parse_marble_diagram(&marble, frame_time)?;
    let theme = Theme::resolve(options.theme.as_ref());

    Ok(render_timeline(&timeline, &theme, name.as_deref(), options.values.as_ref()))
}

/// Render a captured marble string with its value map
///
/// Capture entries win over entries in `options.values`.
///
/// # Errors
///
/// Returns `MarbleError::Parse` when the captured notation is malformed.
pub fn render_capture(capture: &MarbleCapture, options: &MarbleToSvgOptions) -> Result<String, MarbleError> {
    let mut values: ValueMap = options.values.clone().unwrap_or_default();
    values.extend(capture.values.iter().map(|(k, v)| (k.clone(), v.clone())));

    let options = MarbleToSvgOptions {
        values: Some(values),
        ..options.clone()
    };
    render(capture.marble.as_str(), &options)
}
