//! Timeline data produced by the marble parser
//!
//! A timeline is the ordered list of stream notifications together with
//! the total elapsed time, which sizes the rendered canvas.

use serde::{Deserialize, Serialize};

/// Kind of stream notification
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Next,
    Error,
    Complete,
}

impl EventKind {
    /// Terminal notifications end a stream (error or complete)
    pub fn is_terminal(&self) -> bool {
        matches!(self, EventKind::Error | EventKind::Complete)
    }
}

/// One timestamped notification on the stream timeline
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct MarbleEvent {
    /// Logical time (frame count × frame duration)
    pub time: u32,

    /// Notation label, present only for `next` events
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Serialized as `type` to match the JavaScript event shape
    #[serde(rename = "type")]
    pub kind: EventKind,
}

impl MarbleEvent {
    pub fn next(time: u32, value: impl Into<String>) -> Self {
        Self {
            time,
            value: Some(value.into()),
            kind: EventKind::Next,
        }
    }

    pub fn error(time: u32) -> Self {
        Self {
            time,
            value: None,
            kind: EventKind::Error,
        }
    }

    pub fn complete(time: u32) -> Self {
        Self {
            time,
            value: None,
            kind: EventKind::Complete,
        }
    }
}

/// Parsed marble diagram: time-ordered events plus total duration
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedTimeline {
    pub events: Vec<MarbleEvent>,
    pub duration: u32,
}

impl ParsedTimeline {
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of terminal notifications (more than one is legal but meaningless)
    pub fn terminal_count(&self) -> usize {
        self.events.iter().filter(|e| e.kind.is_terminal()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serializes_kind_as_type() {
        let json = serde_json::to_string(&MarbleEvent::next(30, "a")).unwrap();
        assert_eq!(json, r#"{"time":30,"value":"a","type":"next"}"#);

        let json = serde_json::to_string(&MarbleEvent::complete(120)).unwrap();
        assert_eq!(json, r#"{"time":120,"type":"complete"}"#);
    }

    #[test]
    fn test_event_deserializes_without_value() {
        let event: MarbleEvent = serde_json::from_str(r#"{"time":5,"type":"error"}"#).unwrap();
        assert_eq!(event, MarbleEvent::error(5));
    }

    #[test]
    fn test_terminal_count() {
        let timeline = ParsedTimeline {
            events: vec![
                MarbleEvent::next(0, "a"),
                MarbleEvent::error(10),
                MarbleEvent::complete(10),
            ],
            duration: 10,
        };
        assert_eq!(timeline.terminal_count(), 2);
        assert!(!timeline.is_empty());
        assert!(ParsedTimeline::default().is_empty());
    }
}
