//! Tests for alternative-room suggestions: ranking, determinism, limits.

use chrono::{NaiveDate, NaiveTime};
use salas_engine::error::EngineError;
use salas_engine::suggest::{suggest_alternatives, RANK_OTHER_BUILDING, RANK_SAME_BUILDING};
use salas_engine::types::{ClassSession, ScheduleSet, TimeWindow};

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn w(sh: u32, sm: u32, eh: u32, em: u32) -> TimeWindow {
    TimeWindow::new(t(sh, sm), t(eh, em)).unwrap()
}

fn session(course: &str, room: &str, building: &str, window: TimeWindow) -> ClassSession {
    ClassSession {
        course: course.to_string(),
        teacher: "Prof".to_string(),
        room: room.to_string(),
        building: building.to_string(),
        title: None,
        date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
        start: window.start,
        end: window.end,
    }
}

#[test]
fn free_room_in_same_building_ranks_first() {
    // Every room in Quatá 200 is busy 08:00-18:00 except 512, free
    // 10:00-11:00. Reference 513 is in the same building.
    let set = ScheduleSet::new(vec![
        session("A", "513", "Quatá 200", w(8, 0, 18, 0)),
        session("B", "514", "Quatá 200", w(8, 0, 18, 0)),
        session("C", "512", "Quatá 200", w(8, 0, 10, 0)),
        session("C", "512", "Quatá 200", w(11, 0, 18, 0)),
    ]);

    let suggestions = suggest_alternatives(&set, "513", w(10, 0, 11, 0), 3).unwrap();

    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].room, "512");
    assert_eq!(suggestions[0].distance_rank, RANK_SAME_BUILDING);
}

#[test]
fn other_building_rooms_rank_behind_same_building() {
    let set = ScheduleSet::new(vec![
        session("A", "513", "Quatá 200", w(10, 0, 11, 0)),
        // 512 free in Quatá 200, 101 free in Quatá 300.
        session("B", "512", "Quatá 200", w(8, 0, 9, 0)),
        session("C", "101", "Quatá 300", w(8, 0, 9, 0)),
    ]);

    let suggestions = suggest_alternatives(&set, "513", w(10, 0, 11, 0), 5).unwrap();

    assert_eq!(suggestions.len(), 2);
    assert_eq!(suggestions[0].room, "512");
    assert_eq!(suggestions[0].distance_rank, RANK_SAME_BUILDING);
    assert_eq!(suggestions[1].room, "101");
    assert_eq!(suggestions[1].distance_rank, RANK_OTHER_BUILDING);
}

#[test]
fn ties_break_by_ascending_room_identifier() {
    let set = ScheduleSet::new(vec![
        session("A", "513", "Quatá 200", w(10, 0, 11, 0)),
        session("B", "520", "Quatá 200", w(8, 0, 9, 0)),
        session("C", "512", "Quatá 200", w(8, 0, 9, 0)),
        session("D", "515", "Quatá 200", w(8, 0, 9, 0)),
    ]);

    let suggestions = suggest_alternatives(&set, "513", w(10, 0, 11, 0), 5).unwrap();

    let rooms: Vec<&str> = suggestions.iter().map(|s| s.room.as_str()).collect();
    assert_eq!(rooms, vec!["512", "515", "520"]);

    // Deterministic: a second run yields the same ordering.
    let again = suggest_alternatives(&set, "513", w(10, 0, 11, 0), 5).unwrap();
    assert_eq!(suggestions, again);
}

#[test]
fn limit_truncates_the_list() {
    let set = ScheduleSet::new(vec![
        session("A", "513", "Quatá 200", w(10, 0, 11, 0)),
        session("B", "512", "Quatá 200", w(8, 0, 9, 0)),
        session("C", "515", "Quatá 200", w(8, 0, 9, 0)),
        session("D", "520", "Quatá 200", w(8, 0, 9, 0)),
    ]);

    let suggestions = suggest_alternatives(&set, "513", w(10, 0, 11, 0), 2).unwrap();
    assert_eq!(suggestions.len(), 2);
}

#[test]
fn zero_limit_is_rejected() {
    let set = ScheduleSet::new(vec![]);
    let err = suggest_alternatives(&set, "513", w(10, 0, 11, 0), 0).unwrap_err();
    assert_eq!(err, EngineError::InvalidLimit);
}

#[test]
fn unknown_reference_room_ranks_all_candidates_equally() {
    let set = ScheduleSet::new(vec![
        session("A", "512", "Quatá 200", w(8, 0, 9, 0)),
        session("B", "101", "Quatá 300", w(8, 0, 9, 0)),
    ]);

    // "999" never appears in the schedule: proximity is unknowable and every
    // candidate ties at the same rank.
    let suggestions = suggest_alternatives(&set, "999", w(10, 0, 11, 0), 5).unwrap();

    assert_eq!(suggestions.len(), 2);
    assert!(suggestions
        .iter()
        .all(|s| s.distance_rank == RANK_OTHER_BUILDING));
    assert_eq!(suggestions[0].room, "101");
    assert_eq!(suggestions[1].room, "512");
}

#[test]
fn no_fully_free_room_returns_empty_list() {
    let set = ScheduleSet::new(vec![
        session("A", "513", "Quatá 200", w(8, 0, 18, 0)),
        session("B", "514", "Quatá 200", w(8, 0, 18, 0)),
    ]);

    let suggestions = suggest_alternatives(&set, "513", w(10, 0, 11, 0), 3).unwrap();
    assert!(suggestions.is_empty());
}

#[test]
fn partially_free_room_does_not_qualify() {
    // 514 is free only 10:00-10:30 of the requested 10:00-11:00 window.
    let set = ScheduleSet::new(vec![
        session("A", "513", "Quatá 200", w(10, 0, 11, 0)),
        session("B", "514", "Quatá 200", w(10, 30, 12, 0)),
    ]);

    let suggestions = suggest_alternatives(&set, "513", w(10, 0, 11, 0), 3).unwrap();
    assert!(suggestions.is_empty());
}
