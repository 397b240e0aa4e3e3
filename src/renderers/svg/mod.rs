//! SVG rendering output
//!
//! Turns a parsed timeline plus a theme into a self-contained SVG
//! document: background, baseline, optional name, then one glyph per
//! event in timeline order.

pub mod document;
pub mod elements;
pub mod layout;

pub use document::{format_number, xml_escape, SvgDocument};
pub use elements::{draw_event, event_label};
pub use layout::{horizontal_padding, Layout};

use crate::models::{ParsedTimeline, RenderOptions, Theme, ValueMap};
use layout::NAME_OFFSET;

/// Timeline renderer bound to a theme and optional label data
pub struct SvgRenderer<'a> {
    theme: &'a Theme,
    name: Option<&'a str>,
    values: Option<&'a ValueMap>,
}

impl<'a> SvgRenderer<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self {
            theme,
            name: None,
            values: None,
        }
    }

    /// Label drawn above the baseline
    pub fn with_name(mut self, name: Option<&'a str>) -> Self {
        self.name = name;
        self
    }

    /// Substitutions for `next` labels
    pub fn with_values(mut self, values: Option<&'a ValueMap>) -> Self {
        self.values = values;
        self
    }

    pub fn render(&self, timeline: &ParsedTimeline) -> String {
        let theme = self.theme;
        let layout = Layout::compute(timeline.duration, theme);

        log::debug!(
            "render: {} events, duration {}, canvas {}x{}",
            timeline.events.len(),
            timeline.duration,
            format_number(layout.width),
            format_number(layout.height)
        );

        let mut doc = SvgDocument::new(layout.width, layout.height);
        doc.background(layout.width, layout.height, &theme.background_color);
        doc.line(
            (layout.start_x, layout.baseline_y),
            (layout.end_x, layout.baseline_y),
            &theme.line_color,
            theme.line_width,
        );

        if let Some(name) = self.name.filter(|n| !n.is_empty()) {
            doc.text(
                (layout.horizontal_padding, theme.padding - NAME_OFFSET),
                None,
                theme.font_size,
                &theme.text_color,
                name,
            );
        }

        for event in &timeline.events {
            draw_event(&mut doc, event, &layout, theme, self.values);
        }

        doc.finish()
    }
}

/// Render a timeline with an already resolved theme
pub fn render_timeline(
    timeline: &ParsedTimeline,
    theme: &Theme,
    name: Option<&str>,
    values: Option<&ValueMap>,
) -> String {
    SvgRenderer::new(theme)
        .with_name(name)
        .with_values(values)
        .render(timeline)
}

/// Render a timeline, overlaying `options.theme` onto the default theme
pub fn render_marble_diagram_to_svg(timeline: &ParsedTimeline, options: &RenderOptions) -> String {
    let theme = Theme::resolve(options.theme.as_ref());
    render_timeline(timeline, &theme, options.name.as_deref(), options.values.as_ref())
}
