//! Canvas layout for marble diagrams
//!
//! All positions derive from the timeline duration and the theme; nothing
//! is measured.

use crate::models::Theme;

/// Approximate width of one label glyph relative to the font size
pub const GLYPH_WIDTH_FACTOR: f64 = 0.6;

/// Extra horizontal room beyond the outermost marble and its label
pub const SAFETY_MARGIN: f64 = 5.0;

/// Distance of the name label above the top padding edge
pub const NAME_OFFSET: f64 = 5.0;

/// Baseline shift that visually centers a label inside its marble
pub const LABEL_OFFSET: f64 = 5.0;

/// Computed canvas geometry
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub horizontal_padding: f64,
    pub width: f64,
    pub height: f64,
    /// Vertical center shared by the baseline and every event glyph
    pub baseline_y: f64,
    pub start_x: f64,
    pub end_x: f64,
    pub time_scale: f64,
}

impl Layout {
    pub fn compute(duration: u32, theme: &Theme) -> Self {
        let horizontal_padding = horizontal_padding(theme);
        let timeline_width = f64::from(duration) * theme.time_scale;

        Self {
            horizontal_padding,
            width: timeline_width + horizontal_padding * 2.0,
            height: theme.row_height + theme.padding * 2.0,
            baseline_y: theme.padding + theme.row_height / 2.0,
            start_x: horizontal_padding,
            end_x: horizontal_padding + timeline_width,
            time_scale: theme.time_scale,
        }
    }

    /// Horizontal position of an event at `time`
    pub fn x_at(&self, time: u32) -> f64 {
        self.start_x + f64::from(time) * self.time_scale
    }
}

/// Padding wide enough that the outermost marbles and their labels are
/// never clipped
pub fn horizontal_padding(theme: &Theme) -> f64 {
    let max_marble_radius = theme.circle_radius + theme.marble_stroke_width();
    let glyph_width = theme.font_size * GLYPH_WIDTH_FACTOR;
    max_marble_radius + glyph_width + SAFETY_MARGIN
}
