//! Per-event glyphs
//!
//! `next` is a labelled marble, `error` an X, `complete` a vertical bar.

use crate::models::{EventKind, MarbleEvent, Theme, ValueMap};
use super::document::SvgDocument;
use super::layout::{Layout, LABEL_OFFSET};

/// Error strokes are heavier than the baseline
pub const ERROR_STROKE_FACTOR: f64 = 1.5;

/// Completion bar stroke relative to the baseline
pub const COMPLETE_STROKE_FACTOR: f64 = 2.0;

/// Completion bar half-height relative to the marble radius
pub const COMPLETE_EXTENT_FACTOR: f64 = 1.5;

/// Draw one event at its timeline position
pub fn draw_event(
    doc: &mut SvgDocument,
    event: &MarbleEvent,
    layout: &Layout,
    theme: &Theme,
    values: Option<&ValueMap>,
) {
    let x = layout.x_at(event.time);
    let y = layout.baseline_y;

    match event.kind {
        EventKind::Next => draw_next(doc, (x, y), event_label(event, values).as_deref(), theme),
        EventKind::Error => draw_error(doc, (x, y), theme),
        EventKind::Complete => draw_complete(doc, (x, y), theme),
    }
}

/// Label for a `next` event: the mapped value if there is one, else the
/// raw notation character
pub fn event_label(event: &MarbleEvent, values: Option<&ValueMap>) -> Option<String> {
    let raw = event.value.as_deref().filter(|v| !v.is_empty())?;
    let mapped = values.and_then(|map| map.get(raw));
    Some(match mapped {
        Some(value) => value.label(),
        None => raw.to_string(),
    })
}

fn draw_next(doc: &mut SvgDocument, (x, y): (f64, f64), label: Option<&str>, theme: &Theme) {
    doc.circle(
        (x, y),
        theme.circle_radius,
        &theme.value_color,
        theme.marble_stroke_color(),
        theme.marble_stroke_width(),
    );
    if let Some(label) = label {
        doc.text(
            (x, y + LABEL_OFFSET),
            Some("middle"),
            theme.font_size,
            &theme.text_color,
            label,
        );
    }
}

fn draw_error(doc: &mut SvgDocument, (x, y): (f64, f64), theme: &Theme) {
    let r = theme.circle_radius;
    let stroke_width = theme.line_width * ERROR_STROKE_FACTOR;
    doc.line((x - r, y - r), (x + r, y + r), &theme.error_color, stroke_width);
    doc.line((x - r, y + r), (x + r, y - r), &theme.error_color, stroke_width);
}

fn draw_complete(doc: &mut SvgDocument, (x, y): (f64, f64), theme: &Theme) {
    let extent = theme.circle_radius * COMPLETE_EXTENT_FACTOR;
    doc.line(
        (x, y - extent),
        (x, y + extent),
        &theme.complete_color,
        theme.line_width * COMPLETE_STROKE_FACTOR,
    );
}
