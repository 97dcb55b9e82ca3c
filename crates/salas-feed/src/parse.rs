//! XML-to-ScheduleSet parsing.
//!
//! The feed is a flat list of `<CalendarioEvento>` elements with child tags
//! `turma` (course), `professor`, `sala` (room), `predio` (building),
//! `horainicio`, `horatermino`, and optionally `titulo` (lesson title) and
//! `data` (date, `DD/MM/YYYY`). Incomplete or malformed events are skipped
//! with a warning; a single bad event never aborts the whole parse.

use chrono::{NaiveDate, NaiveTime};
use roxmltree::{Document, Node};
use tracing::warn;

use salas_engine::types::{ClassSession, ScheduleSet};

use crate::error::Result;

const EVENT_TAG: &str = "CalendarioEvento";

/// Parse calendar XML into a [`ScheduleSet`] scoped to `date`.
///
/// Events carrying an explicit `<data>` element are kept only when it
/// matches the requested date; events without one are assumed to belong to
/// it (the published feed covers a single day).
pub fn parse_schedule(xml: &str, date: NaiveDate) -> Result<ScheduleSet> {
    let doc = Document::parse(xml)?;

    let mut sessions = Vec::new();
    let mut skipped = 0usize;

    for node in doc
        .descendants()
        .filter(|n| n.has_tag_name(EVENT_TAG))
    {
        match parse_event(node, date) {
            ParsedEvent::Session(session) => sessions.push(session),
            ParsedEvent::OtherDate => {}
            ParsedEvent::Skipped(reason) => {
                skipped += 1;
                warn!(%reason, "skipping calendar event");
            }
        }
    }

    if skipped > 0 {
        warn!(skipped, kept = sessions.len(), "calendar feed had unusable events");
    }

    Ok(ScheduleSet::new(sessions))
}

enum ParsedEvent {
    Session(ClassSession),
    /// Well-formed but scoped to a different date than requested.
    OtherDate,
    Skipped(String),
}

fn parse_event(node: Node<'_, '_>, date: NaiveDate) -> ParsedEvent {
    let Some(room) = child_text(node, "sala") else {
        return ParsedEvent::Skipped("missing or empty <sala>".to_string());
    };
    let Some(course) = child_text(node, "turma") else {
        return ParsedEvent::Skipped(format!("room {room}: missing <turma>"));
    };
    let Some(building) = child_text(node, "predio") else {
        return ParsedEvent::Skipped(format!("room {room}: missing <predio>"));
    };

    let start = child_text(node, "horainicio").and_then(|t| parse_time(&t));
    let end = child_text(node, "horatermino").and_then(|t| parse_time(&t));
    let (Some(start), Some(end)) = (start, end) else {
        return ParsedEvent::Skipped(format!("room {room}: unparseable session times"));
    };
    if start >= end {
        return ParsedEvent::Skipped(format!(
            "room {room}: session start {start} is not before end {end}"
        ));
    }

    if let Some(raw) = child_text(node, "data") {
        match NaiveDate::parse_from_str(&raw, "%d/%m/%Y") {
            Ok(event_date) if event_date != date => return ParsedEvent::OtherDate,
            Ok(_) => {}
            Err(_) => {
                return ParsedEvent::Skipped(format!("room {room}: unparseable date {raw:?}"))
            }
        }
    }

    ParsedEvent::Session(ClassSession {
        course,
        teacher: child_text(node, "professor").unwrap_or_default(),
        room,
        building,
        title: child_text(node, "titulo"),
        date,
        start,
        end,
    })
}

/// Trimmed text of a named child element; `None` when absent or empty.
fn child_text(node: Node<'_, '_>, tag: &str) -> Option<String> {
    node.children()
        .find(|c| c.has_tag_name(tag))
        .and_then(|c| c.text())
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

fn parse_time(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .ok()
}
