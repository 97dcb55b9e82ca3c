//! Core data model: class sessions, schedule sets, and time windows.
//!
//! All times are naive local campus times-of-day; a session never crosses
//! midnight. `TimeWindow` is half-open: `[start, end)`, so a session ending
//! exactly when another starts does not overlap it.

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// A half-open time-of-day interval `[start, end)`.
///
/// Construction enforces `start < end`, so no invalid window can reach an
/// engine operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeWindow {
    /// Create a window, failing with [`EngineError::InvalidWindow`] unless
    /// `start < end`.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Result<Self> {
        if start >= end {
            return Err(EngineError::InvalidWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// True iff the two windows share any instant.
    ///
    /// Half-open semantics: `(09:00, 10:00)` and `(10:00, 11:00)` do NOT
    /// overlap.
    pub fn overlaps(&self, other: &TimeWindow) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// True iff `other` lies entirely inside this window.
    pub fn contains(&self, other: &TimeWindow) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// The shared sub-window of two windows, if any.
    pub fn intersection(&self, other: &TimeWindow) -> Option<TimeWindow> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        (start < end).then_some(TimeWindow { start, end })
    }

    /// Window length in whole minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

impl std::fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:02}:{:02} - {:02}:{:02}",
            self.start.hour(),
            self.start.minute(),
            self.end.hour(),
            self.end.minute()
        )
    }
}

/// One scheduled class occurrence.
///
/// Immutable once parsed; owned by the [`ScheduleSet`] for the duration of
/// one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSession {
    /// Course/class identifier, e.g. "2º CIÊNCIA DA COMPUTAÇÃO A".
    pub course: String,
    pub teacher: String,
    /// Room number/label.
    pub room: String,
    pub building: String,
    /// Lesson title, when the feed provides one.
    pub title: Option<String>,
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl ClassSession {
    /// The session's time-of-day window. Relies on the `start < end`
    /// invariant upheld by the feed parser.
    pub fn window(&self) -> TimeWindow {
        TimeWindow {
            start: self.start,
            end: self.end,
        }
    }
}

/// A room together with its building, for rosters and results.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoomRef {
    pub room: String,
    pub building: String,
}

/// Ordered sequence of [`ClassSession`], scoped to one fetch (typically one
/// day).
///
/// Sessions for a given room normally do not overlap, but the engine never
/// assumes this; violations are detected and reported as warnings rather
/// than crashing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSet {
    sessions: Vec<ClassSession>,
}

impl ScheduleSet {
    /// Build a set, sorting sessions into a deterministic order so every
    /// query over the same data yields identical output.
    pub fn new(mut sessions: Vec<ClassSession>) -> Self {
        sessions.sort_by(|a, b| {
            (a.date, a.start, a.end, &a.room, &a.course).cmp(&(
                b.date, b.start, b.end, &b.room, &b.course,
            ))
        });
        Self { sessions }
    }

    pub fn sessions(&self) -> &[ClassSession] {
        &self.sessions
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// All sessions of a course, matched case-insensitively (the feed mixes
    /// upper and lower case course labels).
    pub fn sessions_for_course(&self, course: &str) -> Vec<&ClassSession> {
        let wanted = course.to_uppercase();
        self.sessions
            .iter()
            .filter(|s| s.course.to_uppercase() == wanted)
            .collect()
    }

    /// All sessions held in a given room.
    pub fn sessions_for_room(&self, room: &str) -> Vec<&ClassSession> {
        self.sessions.iter().filter(|s| s.room == room).collect()
    }

    /// The building a room belongs to, if any session mentions it.
    pub fn building_of(&self, room: &str) -> Option<&str> {
        self.sessions
            .iter()
            .find(|s| s.room == room)
            .map(|s| s.building.as_str())
    }

    /// Every distinct room seen in the set, with its building, sorted by
    /// room identifier.
    pub fn known_rooms(&self) -> Vec<RoomRef> {
        let mut rooms: Vec<RoomRef> = Vec::new();
        for s in &self.sessions {
            if !rooms.iter().any(|r| r.room == s.room) {
                rooms.push(RoomRef {
                    room: s.room.clone(),
                    building: s.building.clone(),
                });
            }
        }
        rooms.sort();
        rooms
    }
}

/// Advisory warning: the source data schedules two overlapping sessions in
/// the same room. Attached to results, never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleInconsistency {
    pub room: String,
    pub building: String,
    pub date: NaiveDate,
    pub first: TimeWindow,
    pub second: TimeWindow,
}

impl std::fmt::Display for ScheduleInconsistency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "room {} ({}) has overlapping sessions on {}: {} and {}",
            self.room, self.building, self.date, self.first, self.second
        )
    }
}
