//! Room availability: per-room free windows and the per-slot table.
//!
//! Groups sessions by room, computes each room's busy windows inside the
//! queried window, and subtracts them to obtain free windows. A room with no
//! sessions in the window is fully free. Overlapping sessions for the same
//! room in the source data are surfaced as warnings, never errors.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{RoomRef, ScheduleInconsistency, ScheduleSet, TimeWindow};
use crate::window::{slot_grid, subtract_busy};

/// Free windows for one room within the queried window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomAvailability {
    pub building: String,
    /// Free sub-windows, sorted by start. `[window]` when the room is fully
    /// free, empty when fully busy.
    pub free: Vec<TimeWindow>,
}

/// Per-room free windows for one queried window. Derived, recomputed per
/// query, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityResult {
    pub window: TimeWindow,
    /// Keyed by room identifier; `BTreeMap` keeps iteration deterministic.
    pub rooms: BTreeMap<String, RoomAvailability>,
    /// Advisory data-quality warnings detected while grouping sessions.
    pub warnings: Vec<ScheduleInconsistency>,
}

impl AvailabilityResult {
    /// Rooms whose free windows fully cover the queried window.
    pub fn fully_free_rooms(&self) -> Vec<RoomRef> {
        self.rooms
            .iter()
            .filter(|(_, avail)| avail.free == [self.window])
            .map(|(room, avail)| RoomRef {
                room: room.clone(),
                building: avail.building.clone(),
            })
            .collect()
    }
}

/// Compute which rooms are free, and when, inside `window`.
///
/// The busy mask is purely time-of-day: every session in the set counts,
/// whatever its date. The feed materializes one day per run, so with a
/// multi-date set the caller must pre-filter to the date of interest.
///
/// `building` restricts the result to one building. `roster`, when given,
/// names the complete set of rooms the caller cares about — rooms on the
/// roster with no sessions at all still appear, fully free. Without a
/// roster, only rooms that appear somewhere in the schedule are known.
pub fn find_free_rooms(
    schedule: &ScheduleSet,
    window: TimeWindow,
    building: Option<&str>,
    roster: Option<&[RoomRef]>,
) -> AvailabilityResult {
    let mut busy_by_room: BTreeMap<String, (String, Vec<(NaiveDate, TimeWindow)>)> =
        BTreeMap::new();

    for room in known_rooms(schedule, roster) {
        if building.is_some_and(|b| b != room.building) {
            continue;
        }
        busy_by_room.insert(room.room, (room.building, Vec::new()));
    }

    for session in schedule.sessions() {
        if let Some((_, busy)) = busy_by_room.get_mut(&session.room) {
            busy.push((session.date, session.window()));
        }
    }

    let mut warnings = Vec::new();
    let mut rooms = BTreeMap::new();

    for (room, (building, busy)) in busy_by_room {
        detect_inconsistencies(&room, &building, &busy, &mut warnings);

        let windows: Vec<TimeWindow> = busy.iter().map(|(_, w)| *w).collect();
        let free = subtract_busy(window, &windows);
        rooms.insert(room, RoomAvailability { building, free });
    }

    AvailabilityResult {
        window,
        rooms,
        warnings,
    }
}

/// Rooms occupying one 30-minute slot, with the occupying course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupiedRoom {
    pub room: String,
    pub building: String,
    pub course: String,
}

/// One row of the per-slot availability table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotAvailability {
    pub window: TimeWindow,
    /// Rooms with no session touching this slot, sorted by identifier.
    pub free: Vec<RoomRef>,
    /// Rooms with a session overlapping this slot, sorted by identifier.
    pub occupied: Vec<OccupiedRoom>,
}

/// Build the building-wide per-slot availability table for one date.
///
/// The slot grid is derived from the session start times (floored to
/// 30-minute boundaries). Every known room appears in each slot, either free
/// or occupied.
pub fn availability_by_slot(
    schedule: &ScheduleSet,
    date: NaiveDate,
    building: Option<&str>,
) -> Vec<SlotAvailability> {
    let day_sessions: Vec<_> = schedule
        .sessions()
        .iter()
        .filter(|s| s.date == date && building.is_none_or(|b| b == s.building))
        .cloned()
        .collect();

    let rooms: Vec<RoomRef> = schedule
        .known_rooms()
        .into_iter()
        .filter(|r| building.is_none_or(|b| b == r.building))
        .collect();

    slot_grid(&day_sessions)
        .into_iter()
        .map(|slot| {
            let mut free = Vec::new();
            let mut occupied = Vec::new();

            for room in &rooms {
                let occupying = day_sessions
                    .iter()
                    .find(|s| s.room == room.room && s.window().overlaps(&slot));
                match occupying {
                    Some(session) => occupied.push(OccupiedRoom {
                        room: room.room.clone(),
                        building: session.building.clone(),
                        course: session.course.clone(),
                    }),
                    None => free.push(room.clone()),
                }
            }

            SlotAvailability {
                window: slot,
                free,
                occupied,
            }
        })
        .collect()
}

fn known_rooms(schedule: &ScheduleSet, roster: Option<&[RoomRef]>) -> Vec<RoomRef> {
    let mut rooms = schedule.known_rooms();
    if let Some(roster) = roster {
        for room in roster {
            if !rooms.iter().any(|r| r.room == room.room) {
                rooms.push(room.clone());
            }
        }
        rooms.sort();
    }
    rooms
}

fn detect_inconsistencies(
    room: &str,
    building: &str,
    busy: &[(NaiveDate, TimeWindow)],
    warnings: &mut Vec<ScheduleInconsistency>,
) {
    // Sessions arrive sorted by (date, start) from the ScheduleSet; tracking
    // the furthest end seen so far catches overlaps that skip a session.
    let mut latest: Option<(NaiveDate, TimeWindow)> = None;

    for &(date, window) in busy {
        if let Some((prev_date, prev)) = latest {
            if prev_date == date && prev.overlaps(&window) {
                warnings.push(ScheduleInconsistency {
                    room: room.to_string(),
                    building: building.to_string(),
                    date,
                    first: prev,
                    second: window,
                });
            }
        }
        latest = match latest {
            Some((prev_date, prev)) if prev_date == date && prev.end >= window.end => {
                Some((prev_date, prev))
            }
            _ => Some((date, window)),
        };
    }
}
