//! Rendering operations for the WASM API
//!
//! Exported names match the JavaScript package: `render`,
//! `parseMarbleDiagram`, `renderMarbleDiagramToSVG`, `renderCapture` and
//! `defaultTheme`.

use wasm_bindgen::prelude::*;
use crate::api::helpers::{deserialize, deserialize_or_default, js_error, serialize};
use crate::models::{
    DiagramInput, MarbleCapture, MarbleDiagram, MarbleToSvgOptions, ParsedTimeline, RenderOptions, Theme,
    DEFAULT_FRAME_TIME,
};
use crate::parse::parse_marble_diagram;
use crate::renderers;
use crate::{wasm_info, wasm_log};

/// Parse and render a marble string or `{ name, diagram, frameTime }` record
///
/// # Parameters
/// - `diagram`: a marble string or a MarbleDiagram object
/// - `options`: optional `{ theme, frameTime, values }`
///
/// # Returns
/// SVG markup; throws an `Error` on malformed notation
#[wasm_bindgen(js_name = render)]
pub fn render_js(diagram: JsValue, options: JsValue) -> Result<String, JsValue> {
    let input = match diagram.as_string() {
        Some(marble) => DiagramInput::Marble(marble),
        None => DiagramInput::Diagram(deserialize::<MarbleDiagram>(diagram, "Invalid diagram")?),
    };
    let options: MarbleToSvgOptions = deserialize_or_default(options, "Invalid render options")?;

    wasm_log!("render called: {:?}", input);

    let svg = renderers::render(input, &options).map_err(|e| js_error(e.to_string()))?;

    wasm_info!("render completed: {} bytes", svg.len());
    Ok(svg)
}

/// Parse marble notation into `{ events, duration }`
///
/// # Parameters
/// - `marble`: marble notation
/// - `frame_time`: time units per frame, defaults to 10
#[wasm_bindgen(js_name = parseMarbleDiagram)]
pub fn parse_marble_diagram_js(marble: &str, frame_time: Option<u32>) -> Result<JsValue, JsValue> {
    let frame_time = frame_time.unwrap_or(DEFAULT_FRAME_TIME);
    wasm_log!("parseMarbleDiagram called: '{}', frame_time={}", marble, frame_time);

    let timeline = parse_marble_diagram(marble, frame_time).map_err(|e| js_error(e.to_string()))?;
    serialize(&timeline, "Serialization error")
}

/// Render an already parsed `{ events, duration }` timeline
///
/// # Parameters
/// - `diagram`: parsed timeline
/// - `options`: optional `{ theme, name, values }`
#[wasm_bindgen(js_name = renderMarbleDiagramToSVG)]
pub fn render_marble_diagram_to_svg_js(diagram: JsValue, options: JsValue) -> Result<String, JsValue> {
    let timeline: ParsedTimeline = deserialize(diagram, "Invalid parsed diagram")?;
    let options: RenderOptions = deserialize_or_default(options, "Invalid render options")?;

    wasm_log!("renderMarbleDiagramToSVG called: {} events", timeline.events.len());

    Ok(renderers::render_marble_diagram_to_svg(&timeline, &options))
}

/// Render a `{ marble, values }` record produced by a capture utility
#[wasm_bindgen(js_name = renderCapture)]
pub fn render_capture_js(capture: JsValue, options: JsValue) -> Result<String, JsValue> {
    let capture: MarbleCapture = deserialize(capture, "Invalid marble capture")?;
    let options: MarbleToSvgOptions = deserialize_or_default(options, "Invalid render options")?;

    wasm_log!("renderCapture called: '{}', {} values", capture.marble, capture.values.len());

    renderers::render_capture(&capture, &options).map_err(|e| js_error(e.to_string()))
}

/// The default theme as a plain object
#[wasm_bindgen(js_name = defaultTheme)]
pub fn default_theme_js() -> Result<JsValue, JsValue> {
    serialize(&Theme::default(), "Serialization error")
}
