//! Tests for the course comparison engine: conflicts, merged entries,
//! common free windows, and unresolved identifiers.

use chrono::{NaiveDate, NaiveTime};
use salas_engine::compare::compare_courses;
use salas_engine::error::EngineError;
use salas_engine::types::{ClassSession, ScheduleSet, TimeWindow};

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn w(sh: u32, sm: u32, eh: u32, em: u32) -> TimeWindow {
    TimeWindow::new(t(sh, sm), t(eh, em)).unwrap()
}

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 4).unwrap()
}

fn session(course: &str, room: &str, window: TimeWindow) -> ClassSession {
    ClassSession {
        course: course.to_string(),
        teacher: "Prof".to_string(),
        room: room.to_string(),
        building: "Quatá 200".to_string(),
        title: None,
        date: day(),
        start: window.start,
        end: window.end,
    }
}

#[test]
fn two_overlapping_courses_report_the_intersection_window() {
    // A: 10:00-12:00 in 513, B: 11:00-13:00 in 514 -> one conflict entry for
    // the intersection 11:00-12:00 listing both sessions.
    let set = ScheduleSet::new(vec![
        session("A", "513", w(10, 0, 12, 0)),
        session("B", "514", w(11, 0, 13, 0)),
    ]);

    let report = compare_courses(&set, &["A", "B"]).unwrap();

    assert_eq!(report.conflicts.len(), 1);
    let entry = &report.conflicts[0];
    assert_eq!(entry.window, w(11, 0, 12, 0));
    assert_eq!(entry.courses, vec!["A", "B"]);
    assert_eq!(entry.sessions.len(), 2);
    assert!(report.unresolved.is_empty());
}

#[test]
fn single_course_fails_with_insufficient_courses() {
    let set = ScheduleSet::new(vec![session("A", "513", w(10, 0, 12, 0))]);

    let err = compare_courses(&set, &["A"]).unwrap_err();
    assert_eq!(err, EngineError::InsufficientCourses(1));
}

#[test]
fn duplicate_identifiers_count_once() {
    let set = ScheduleSet::new(vec![session("A", "513", w(10, 0, 12, 0))]);

    // Same course spelled twice with different casing is one identifier.
    let err = compare_courses(&set, &["A", "a"]).unwrap_err();
    assert_eq!(err, EngineError::InsufficientCourses(1));
}

#[test]
fn unresolved_course_degrades_to_partial_result() {
    // "XYZ" has no sessions: the report still carries A's sessions and names
    // the unresolved identifier instead of failing.
    let set = ScheduleSet::new(vec![session("A", "513", w(10, 0, 12, 0))]);

    let report = compare_courses(&set, &["A", "XYZ"]).unwrap();

    assert_eq!(report.unresolved, vec!["XYZ"]);
    assert_eq!(report.courses.len(), 1);
    assert_eq!(report.courses[0].course, "A");
    assert_eq!(report.courses[0].sessions.len(), 1);
    assert!(report.conflicts.is_empty());
}

#[test]
fn three_courses_sharing_a_window_merge_into_one_entry() {
    // All three overlap over 11:00-12:00; the report must merge the pairwise
    // hits into a single entry implicating every course.
    let set = ScheduleSet::new(vec![
        session("A", "513", w(10, 0, 12, 0)),
        session("B", "514", w(11, 0, 13, 0)),
        session("C", "515", w(10, 0, 12, 0)),
    ]);

    let report = compare_courses(&set, &["A", "B", "C"]).unwrap();

    let shared: Vec<_> = report
        .conflicts
        .iter()
        .filter(|e| e.window == w(11, 0, 12, 0))
        .collect();
    assert_eq!(shared.len(), 1, "same intersection window must merge");
    assert_eq!(shared[0].courses, vec!["A", "B", "C"]);
    assert_eq!(shared[0].sessions.len(), 3);

    // A and C also fully overlap over 10:00-12:00 (a different window), so
    // that entry stays separate.
    assert!(report
        .conflicts
        .iter()
        .any(|e| e.window == w(10, 0, 12, 0) && e.courses == vec!["A", "C"]));
}

#[test]
fn sessions_on_different_dates_never_conflict() {
    let mut tuesday = session("B", "514", w(10, 0, 12, 0));
    tuesday.date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();

    let set = ScheduleSet::new(vec![session("A", "513", w(10, 0, 12, 0)), tuesday]);

    let report = compare_courses(&set, &["A", "B"]).unwrap();
    assert!(report.conflicts.is_empty());
}

#[test]
fn adjacent_sessions_do_not_conflict() {
    let set = ScheduleSet::new(vec![
        session("A", "513", w(9, 0, 10, 0)),
        session("B", "514", w(10, 0, 11, 0)),
    ]);

    let report = compare_courses(&set, &["A", "B"]).unwrap();
    assert!(report.conflicts.is_empty());
}

#[test]
fn common_free_windows_exclude_every_named_course() {
    // Busy 09:00-10:00 (A) and 14:00-15:00 (B) within the 07:00-23:00
    // operating day.
    let set = ScheduleSet::new(vec![
        session("A", "513", w(9, 0, 10, 0)),
        session("B", "514", w(14, 0, 15, 0)),
    ]);

    let report = compare_courses(&set, &["A", "B"]).unwrap();

    assert_eq!(report.common_free.len(), 1);
    assert_eq!(report.common_free[0].date, day());
    assert_eq!(
        report.common_free[0].free,
        vec![w(7, 0, 9, 0), w(10, 0, 14, 0), w(15, 0, 23, 0)]
    );
}

#[test]
fn compare_is_idempotent() {
    let set = ScheduleSet::new(vec![
        session("A", "513", w(10, 0, 12, 0)),
        session("B", "514", w(11, 0, 13, 0)),
        session("C", "515", w(9, 0, 11, 30)),
    ]);

    let first = compare_courses(&set, &["A", "B", "C"]).unwrap();
    let second = compare_courses(&set, &["A", "B", "C"]).unwrap();
    assert_eq!(first, second);
}

#[test]
fn course_match_is_case_insensitive() {
    let set = ScheduleSet::new(vec![
        session("2º Ciência da Computação A", "513", w(10, 0, 12, 0)),
        session("B", "514", w(11, 0, 13, 0)),
    ]);

    let report = compare_courses(&set, &["2º CIÊNCIA DA COMPUTAÇÃO A", "B"]).unwrap();

    assert!(report.unresolved.is_empty());
    assert_eq!(report.conflicts.len(), 1);
    // The canonical spelling from the schedule wins in the report.
    assert_eq!(report.courses[0].course, "2º Ciência da Computação A");
}
