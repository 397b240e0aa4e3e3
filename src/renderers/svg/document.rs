//! SVG document builder
//!
//! Appends elements to a string buffer. Coordinates go through
//! `format_number` so output is identical on every platform.

/// Font stack used for every label
pub const FONT_FAMILY: &str = "Arial, sans-serif";

/// Builder for a single SVG document
pub struct SvgDocument {
    buffer: String,
}

impl SvgDocument {
    /// Open the `<svg>` root sized to `width` × `height`
    pub fn new(width: f64, height: f64) -> Self {
        let w = format_number(width);
        let h = format_number(height);
        let buffer = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">",
            w, h, w, h
        );
        Self { buffer }
    }

    /// Full-canvas background
    pub fn background(&mut self, width: f64, height: f64, fill: &str) {
        self.buffer.push_str(&format!(
            "<rect width=\"{}\" height=\"{}\" fill=\"{}\"/>",
            format_number(width),
            format_number(height),
            xml_escape(fill)
        ));
    }

    pub fn line(&mut self, from: (f64, f64), to: (f64, f64), stroke: &str, stroke_width: f64) {
        self.buffer.push_str(&format!(
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>",
            format_number(from.0),
            format_number(from.1),
            format_number(to.0),
            format_number(to.1),
            xml_escape(stroke),
            format_number(stroke_width)
        ));
    }

    pub fn circle(&mut self, center: (f64, f64), radius: f64, fill: &str, stroke: &str, stroke_width: f64) {
        self.buffer.push_str(&format!(
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>",
            format_number(center.0),
            format_number(center.1),
            format_number(radius),
            xml_escape(fill),
            xml_escape(stroke),
            format_number(stroke_width)
        ));
    }

    /// Text label; `anchor` sets `text-anchor` when given
    pub fn text(&mut self, at: (f64, f64), anchor: Option<&str>, font_size: f64, fill: &str, content: &str) {
        let anchor_attr = anchor
            .map(|a| format!(" text-anchor=\"{}\"", a))
            .unwrap_or_default();
        self.buffer.push_str(&format!(
            "<text x=\"{}\" y=\"{}\"{} font-family=\"{}\" font-size=\"{}\" fill=\"{}\">{}</text>",
            format_number(at.0),
            format_number(at.1),
            anchor_attr,
            FONT_FAMILY,
            format_number(font_size),
            xml_escape(fill),
            xml_escape(content)
        ));
    }

    /// Close the root element and return the markup
    pub fn finish(mut self) -> String {
        self.buffer.push_str("</svg>");
        self.buffer
    }
}

/// Format a coordinate with at most two decimals and no trailing zeros
pub fn format_number(value: f64) -> String {
    let mut s = format!("{:.2}", value);
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}

/// Escape special XML characters
pub fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
