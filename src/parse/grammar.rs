//! Marble grammar
//!
//! Scans notation left to right. Plain values emit and advance one frame,
//! dashes only advance, `|` and `#` emit without advancing, and a group
//! emits all of its values at one instant and then advances one frame.

use crate::errors::ParseError;
use crate::models::{MarbleEvent, ParsedTimeline, DEFAULT_FRAME_TIME};
use crate::parse::tokens::{tokenize, Token};

/// Parse marble notation into a timeline
///
/// # Errors
///
/// Returns `ParseError::UnclosedGroup` when a `(` is never closed and
/// `ParseError::UnexpectedClosingParenthesis` for a `)` with no open group.
pub fn parse_marble_diagram(marble: &str, frame_time: u32) -> Result<ParsedTimeline, ParseError> {
    log::debug!("parse_marble_diagram('{}', frame_time={})", marble, frame_time);

    let tokens = tokenize(marble);
    let mut events = Vec::new();
    let mut current_time: u32 = 0;
    let mut i = 0;

    while i < tokens.len() {
        let (position, token) = tokens[i];

        match token {
            Token::Frame | Token::Whitespace => {}
            Token::Complete => events.push(MarbleEvent::complete(current_time)),
            Token::Error => events.push(MarbleEvent::error(current_time)),
            Token::GroupOpen => {
                let close = find_group_close(&tokens, i).ok_or_else(|| {
                    log::warn!("  unclosed group at index {}", position);
                    ParseError::UnclosedGroup { position }
                })?;
                emit_group(&tokens[i + 1..close], current_time, &mut events);
                current_time = current_time.saturating_add(frame_time);
                i = close;
            }
            Token::GroupClose => {
                log::warn!("  unexpected ')' at index {}", position);
                return Err(ParseError::UnexpectedClosingParenthesis { position });
            }
            Token::Value(c) => events.push(MarbleEvent::next(current_time, c)),
        }

        if token.advances_time() {
            current_time = current_time.saturating_add(frame_time);
        }

        i += 1;
    }

    log::debug!("  parsed {} events, duration {}", events.len(), current_time);

    Ok(ParsedTimeline {
        events,
        duration: current_time,
    })
}

/// Parse with the default frame time of 10
pub fn parse_marble(marble: &str) -> Result<ParsedTimeline, ParseError> {
    parse_marble_diagram(marble, DEFAULT_FRAME_TIME)
}

/// Index of the first `)` after `open`
fn find_group_close(tokens: &[(usize, Token)], open: usize) -> Option<usize> {
    tokens[open + 1..]
        .iter()
        .position(|(_, t)| *t == Token::GroupClose)
        .map(|offset| open + 1 + offset)
}

/// Group members are all emitted at `time`; only dashes are skipped, so a
/// space or a structural symbol inside a group is a value
fn emit_group(members: &[(usize, Token)], time: u32, events: &mut Vec<MarbleEvent>) {
    for (_, token) in members {
        if *token != Token::Frame {
            events.push(MarbleEvent::next(time, token.as_char()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EventKind;

    fn times(timeline: &ParsedTimeline) -> Vec<u32> {
        timeline.events.iter().map(|e| e.time).collect()
    }

    #[test]
    fn test_simple_sequence() {
        let timeline = parse_marble("a--b--c--d--|").unwrap();
        assert_eq!(times(&timeline), vec![0, 30, 60, 90, 120]);
        let values: Vec<_> = timeline.events.iter().filter_map(|e| e.value.as_deref()).collect();
        assert_eq!(values, vec!["a", "b", "c", "d"]);
        assert_eq!(timeline.events[4].kind, EventKind::Complete);
        assert_eq!(timeline.duration, 120);
    }

    #[test]
    fn test_group_emits_simultaneously_and_advances_once() {
        let timeline = parse_marble_diagram("(ab)--|", 10).unwrap();
        assert_eq!(
            timeline.events,
            vec![
                MarbleEvent::next(0, "a"),
                MarbleEvent::next(0, "b"),
                MarbleEvent::complete(30),
            ]
        );
        assert_eq!(timeline.duration, 30);
    }

    #[test]
    fn test_error_token() {
        let timeline = parse_marble("a--#").unwrap();
        assert_eq!(timeline.events, vec![MarbleEvent::next(0, "a"), MarbleEvent::error(30)]);
        assert_eq!(timeline.duration, 30);
    }

    #[test]
    fn test_terminal_tokens_do_not_advance() {
        let timeline = parse_marble("|#").unwrap();
        assert_eq!(timeline.events, vec![MarbleEvent::complete(0), MarbleEvent::error(0)]);
        assert_eq!(timeline.duration, 0);
    }

    #[test]
    fn test_whitespace_is_ignored() {
        let spaced = parse_marble("  a - b  |").unwrap();
        let compact = parse_marble("a-b|").unwrap();
        assert_eq!(spaced, compact);
    }

    #[test]
    fn test_group_skips_dashes() {
        let timeline = parse_marble("(a-b)").unwrap();
        assert_eq!(
            timeline.events,
            vec![MarbleEvent::next(0, "a"), MarbleEvent::next(0, "b")]
        );
        assert_eq!(timeline.duration, 10);
    }

    #[test]
    fn test_space_inside_group_is_a_value() {
        let timeline = parse_marble("(a b)").unwrap();
        assert_eq!(
            timeline.events,
            vec![
                MarbleEvent::next(0, "a"),
                MarbleEvent::next(0, " "),
                MarbleEvent::next(0, "b"),
            ]
        );
        assert_eq!(timeline.duration, 10);
    }

    #[test]
    fn test_structural_symbols_inside_group_are_values() {
        let timeline = parse_marble("(a|#()").unwrap();
        let values: Vec<_> = timeline.events.iter().filter_map(|e| e.value.as_deref()).collect();
        assert_eq!(values, vec!["a", "|", "#", "("]);
        assert!(timeline.events.iter().all(|e| e.kind == EventKind::Next));
    }

    #[test]
    fn test_empty_group_still_advances() {
        let timeline = parse_marble("()a").unwrap();
        assert_eq!(timeline.events, vec![MarbleEvent::next(10, "a")]);
        assert_eq!(timeline.duration, 20);
    }

    #[test]
    fn test_unclosed_group() {
        assert_eq!(
            parse_marble("(ab").unwrap_err(),
            ParseError::UnclosedGroup { position: 0 }
        );
        assert_eq!(
            parse_marble("a-(b").unwrap_err(),
            ParseError::UnclosedGroup { position: 2 }
        );
    }

    #[test]
    fn test_unexpected_closing_parenthesis() {
        assert_eq!(
            parse_marble(")").unwrap_err(),
            ParseError::UnexpectedClosingParenthesis { position: 0 }
        );
        assert_eq!(
            parse_marble("(a))").unwrap_err(),
            ParseError::UnexpectedClosingParenthesis { position: 3 }
        );
    }

    #[test]
    fn test_empty_input() {
        let timeline = parse_marble("").unwrap();
        assert!(timeline.events.is_empty());
        assert_eq!(timeline.duration, 0);
    }

    #[test]
    fn test_custom_frame_time() {
        let timeline = parse_marble_diagram("a-b", 1).unwrap();
        assert_eq!(times(&timeline), vec![0, 2]);
        assert_eq!(timeline.duration, 3);
    }

    #[test]
    fn test_time_saturates() {
        let timeline = parse_marble_diagram("---a", u32::MAX / 2).unwrap();
        assert_eq!(timeline.duration, u32::MAX);
        assert_eq!(timeline.events[0].time, u32::MAX);
    }

    #[test]
    fn test_non_ascii_values() {
        let timeline = parse_marble("é😀|").unwrap();
        assert_eq!(
            timeline.events,
            vec![
                MarbleEvent::next(0, "é"),
                MarbleEvent::next(10, "😀"),
                MarbleEvent::complete(20),
            ]
        );
    }
}
