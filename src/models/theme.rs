//! Visual theme for rendered diagrams
//!
//! `Theme` is the resolved record the renderer reads. `ThemeOverrides`
//! is the partial form callers pass in; every field left unset keeps
//! the default.

use serde::{Deserialize, Serialize};
use crate::errors::MarbleError;

/// Resolved rendering theme
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Theme {
    pub background_color: String,
    pub line_color: String,
    pub value_color: String,
    pub error_color: String,
    pub complete_color: String,
    pub text_color: String,
    pub font_size: f64,
    pub line_width: f64,
    pub circle_radius: f64,

    /// Marble outline color, falls back to `line_color`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub circle_stroke_color: Option<String>,

    /// Marble outline width, falls back to `line_width`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub circle_stroke_width: Option<f64>,

    /// Vertical padding only; horizontal padding is derived from the
    /// marble and glyph sizes
    pub padding: f64,
    pub row_height: f64,

    /// Pixels per logical time unit
    pub time_scale: f64,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background_color: "#ffffff".to_string(),
            line_color: "#333333".to_string(),
            value_color: "#4CAF50".to_string(),
            error_color: "#f44336".to_string(),
            complete_color: "#2196F3".to_string(),
            text_color: "#000000".to_string(),
            font_size: 14.0,
            line_width: 2.0,
            circle_radius: 8.0,
            circle_stroke_color: None,
            circle_stroke_width: None,
            padding: 25.0,
            row_height: 60.0,
            time_scale: 3.0,
        }
    }
}

impl Theme {
    /// Shallow overlay of `overrides` onto a copy of this theme
    pub fn with_overrides(&self, overrides: &ThemeOverrides) -> Theme {
        let mut theme = self.clone();

        macro_rules! overlay {
            ($($field:ident),* $(,)?) => {
                $(
                    if let Some(v) = &overrides.$field {
                        theme.$field = v.clone();
                    }
                )*
            };
        }

        overlay!(
            background_color,
            line_color,
            value_color,
            error_color,
            complete_color,
            text_color,
            font_size,
            line_width,
            circle_radius,
            padding,
            row_height,
            time_scale,
        );

        if overrides.circle_stroke_color.is_some() {
            theme.circle_stroke_color = overrides.circle_stroke_color.clone();
        }
        if overrides.circle_stroke_width.is_some() {
            theme.circle_stroke_width = overrides.circle_stroke_width;
        }

        theme
    }

    /// Defaults overlaid with optional overrides
    pub fn resolve(overrides: Option<&ThemeOverrides>) -> Theme {
        match overrides {
            Some(o) => Theme::default().with_overrides(o),
            None => Theme::default(),
        }
    }

    /// Stroke color used for `next` marbles; an empty color counts as unset
    pub fn marble_stroke_color(&self) -> &str {
        self.circle_stroke_color
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(&self.line_color)
    }

    /// Stroke width used for `next` marbles; zero counts as unset
    pub fn marble_stroke_width(&self) -> f64 {
        self.circle_stroke_width
            .filter(|w| *w != 0.0)
            .unwrap_or(self.line_width)
    }
}

/// Partial theme supplied by callers
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complete_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub circle_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub circle_stroke_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub circle_stroke_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_scale: Option<f64>,
}

impl ThemeOverrides {
    /// Load overrides from JSON text (unknown keys are ignored)
    pub fn from_json(text: &str) -> Result<Self, MarbleError> {
        serde_json::from_str(text).map_err(|e| MarbleError::Config(format!("theme JSON: {}", e)))
    }

    /// Load overrides from YAML text (unknown keys are ignored)
    pub fn from_yaml(text: &str) -> Result<Self, MarbleError> {
        // An empty YAML document deserializes as unit, not as a map
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text).map_err(|e| MarbleError::Config(format!("theme YAML: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_values() {
        let theme = Theme::default();
        assert_eq!(theme.background_color, "#ffffff");
        assert_eq!(theme.line_color, "#333333");
        assert_eq!(theme.value_color, "#4CAF50");
        assert_eq!(theme.error_color, "#f44336");
        assert_eq!(theme.complete_color, "#2196F3");
        assert_eq!(theme.text_color, "#000000");
        assert_eq!(theme.font_size, 14.0);
        assert_eq!(theme.line_width, 2.0);
        assert_eq!(theme.circle_radius, 8.0);
        assert_eq!(theme.padding, 25.0);
        assert_eq!(theme.row_height, 60.0);
        assert_eq!(theme.time_scale, 3.0);
        assert!(theme.circle_stroke_color.is_none());
        assert!(theme.circle_stroke_width.is_none());
    }

    #[test]
    fn test_overlay_replaces_only_set_fields() {
        let overrides = ThemeOverrides {
            value_color: Some("#ff00ff".to_string()),
            time_scale: Some(5.0),
            ..Default::default()
        };
        let theme = Theme::default().with_overrides(&overrides);
        assert_eq!(theme.value_color, "#ff00ff");
        assert_eq!(theme.time_scale, 5.0);
        assert_eq!(theme.line_color, "#333333");
        assert_eq!(theme.circle_radius, 8.0);
    }

    #[test]
    fn test_marble_stroke_fallback() {
        let theme = Theme::default();
        assert_eq!(theme.marble_stroke_color(), "#333333");
        assert_eq!(theme.marble_stroke_width(), 2.0);

        let theme = theme.with_overrides(&ThemeOverrides {
            circle_stroke_color: Some("#123456".to_string()),
            circle_stroke_width: Some(3.0),
            ..Default::default()
        });
        assert_eq!(theme.marble_stroke_color(), "#123456");
        assert_eq!(theme.marble_stroke_width(), 3.0);
    }

    #[test]
    fn test_zero_width_and_empty_color_fall_back_to_line() {
        let theme = Theme::default().with_overrides(&ThemeOverrides {
            circle_stroke_color: Some(String::new()),
            circle_stroke_width: Some(0.0),
            line_color: Some("#abcdef".to_string()),
            ..Default::default()
        });
        assert_eq!(theme.marble_stroke_color(), "#abcdef");
        assert_eq!(theme.marble_stroke_width(), 2.0);
    }

    #[test]
    fn test_overrides_from_json_camel_case() {
        let overrides = ThemeOverrides::from_json(
            r##"{"lineColor":"#000","circleRadius":12,"somethingElse":true}"##,
        )
        .unwrap();
        assert_eq!(overrides.line_color.as_deref(), Some("#000"));
        assert_eq!(overrides.circle_radius, Some(12.0));
        assert!(overrides.font_size.is_none());
    }

    #[test]
    fn test_overrides_from_yaml() {
        let overrides = ThemeOverrides::from_yaml("fontSize: 18\nerrorColor: \"#aa0000\"\n").unwrap();
        assert_eq!(overrides.font_size, Some(18.0));
        assert_eq!(overrides.error_color.as_deref(), Some("#aa0000"));
        assert_eq!(ThemeOverrides::from_yaml("").unwrap(), ThemeOverrides::default());
    }

    #[test]
    fn test_malformed_config_is_config_error() {
        let err = ThemeOverrides::from_json("{not json").unwrap_err();
        assert!(matches!(err, MarbleError::Config(_)));
        let err = ThemeOverrides::from_yaml("fontSize: [1, 2").unwrap_err();
        assert!(matches!(err, MarbleError::Config(_)));
    }

    #[test]
    fn test_theme_serializes_camel_case() {
        let json = serde_json::to_value(Theme::default()).unwrap();
        assert_eq!(json["backgroundColor"], "#ffffff");
        assert_eq!(json["timeScale"], 3.0);
        assert!(json.get("circleStrokeColor").is_none());
    }
}
