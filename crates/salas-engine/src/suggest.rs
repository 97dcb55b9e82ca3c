//! Alternative-room suggestions when a desired room is taken.
//!
//! Scans availability across all rooms, keeps those free for the whole
//! target window, and ranks them by building proximity: same building as the
//! reference room first, everything else tied behind it. Finer-grained
//! physical distance is deliberately not modelled.

use serde::{Deserialize, Serialize};

use crate::availability::find_free_rooms;
use crate::error::{EngineError, Result};
use crate::types::{ScheduleSet, TimeWindow};

/// Rank for rooms in the same building as the reference room.
pub const RANK_SAME_BUILDING: u8 = 0;
/// Rank for rooms elsewhere, and for every room when the reference room's
/// building is unknown.
pub const RANK_OTHER_BUILDING: u8 = 1;

/// One suggested alternative room, free for the whole target window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub room: String,
    pub building: String,
    pub distance_rank: u8,
}

/// Suggest up to `limit` rooms free during `window`, nearest building first.
///
/// The reference room need not exist in the schedule; when its building is
/// unknown the proximity ranking degrades and every candidate ties at
/// [`RANK_OTHER_BUILDING`]. Within a rank, rooms order by identifier
/// ascending for determinism. An empty list is a valid answer, not an error.
pub fn suggest_alternatives(
    schedule: &ScheduleSet,
    reference_room: &str,
    window: TimeWindow,
    limit: usize,
) -> Result<Vec<Suggestion>> {
    if limit == 0 {
        return Err(EngineError::InvalidLimit);
    }

    let reference_building = schedule.building_of(reference_room).map(str::to_owned);
    let availability = find_free_rooms(schedule, window, None, None);

    let mut suggestions: Vec<Suggestion> = availability
        .fully_free_rooms()
        .into_iter()
        .filter(|r| r.room != reference_room)
        .map(|r| {
            let distance_rank = match &reference_building {
                Some(b) if *b == r.building => RANK_SAME_BUILDING,
                _ => RANK_OTHER_BUILDING,
            };
            Suggestion {
                room: r.room,
                building: r.building,
                distance_rank,
            }
        })
        .collect();

    suggestions.sort_by(|a, b| (a.distance_rank, &a.room).cmp(&(b.distance_rank, &b.room)));
    suggestions.truncate(limit);

    Ok(suggestions)
}
