//! Input records for the rendering pipeline

use serde::{Deserialize, Serialize};
use crate::errors::MarbleError;
use super::theme::ThemeOverrides;
use super::values::ValueMap;

/// Logical time units per frame when nothing else is configured
pub const DEFAULT_FRAME_TIME: u32 = 10;

/// A named marble diagram
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MarbleDiagram {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub diagram: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame_time: Option<u32>,
}

impl MarbleDiagram {
    pub fn new(diagram: impl Into<String>) -> Self {
        Self {
            name: None,
            diagram: diagram.into(),
            frame_time: None,
        }
    }

    pub fn named(name: impl Into<String>, diagram: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::new(diagram)
        }
    }

    pub fn with_frame_time(mut self, frame_time: u32) -> Self {
        self.frame_time = Some(frame_time);
        self
    }
}

/// Either a bare marble string or a named diagram record
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(untagged)]
pub enum DiagramInput {
    Marble(String),
    Diagram(MarbleDiagram),
}

impl From<&str> for DiagramInput {
    fn from(marble: &str) -> Self {
        DiagramInput::Marble(marble.to_string())
    }
}

impl From<String> for DiagramInput {
    fn from(marble: String) -> Self {
        DiagramInput::Marble(marble)
    }
}

impl From<MarbleDiagram> for DiagramInput {
    fn from(diagram: MarbleDiagram) -> Self {
        DiagramInput::Diagram(diagram)
    }
}

/// Options of the string-to-SVG pipeline
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct MarbleToSvgOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeOverrides>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_time: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<ValueMap>,
}

impl MarbleToSvgOptions {
    /// Load pipeline options from JSON text
    pub fn from_json(text: &str) -> Result<Self, MarbleError> {
        serde_json::from_str(text).map_err(|e| MarbleError::Config(format!("options JSON: {}", e)))
    }
}

/// Options of the timeline renderer
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeOverrides>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<ValueMap>,
}

/// Marble string and value map emitted by a stream capture utility
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct MarbleCapture {
    pub marble: String,
    #[serde(default)]
    pub values: ValueMap,
}

/// First non-zero frame time in order of precedence, or the default
pub fn resolve_frame_time(candidates: &[Option<u32>]) -> u32 {
    candidates
        .iter()
        .flatten()
        .copied()
        .find(|&t| t != 0)
        .unwrap_or(DEFAULT_FRAME_TIME)
}
