//! Detect schedule overlaps between two or more courses.
//!
//! Performs a pairwise pass over the named courses' sessions, keys each
//! overlap by its exact intersection window, and merges entries so a window
//! shared by three or more courses reports once with every implicated
//! session. Also computes the complementary common-free windows per date.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::types::{ClassSession, ScheduleSet, TimeWindow};
use crate::window::{operating_day, subtract_busy};

/// The resolved sessions of one requested course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseSessions {
    /// Canonical course label as it appears in the schedule.
    pub course: String,
    pub sessions: Vec<ClassSession>,
}

/// One time window in which two or more of the requested courses overlap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictEntry {
    pub date: NaiveDate,
    /// The exact intersection window of the overlapping sessions.
    pub window: TimeWindow,
    /// Distinct implicated courses, sorted.
    pub courses: Vec<String>,
    /// Every session taking part in the overlap, deduplicated.
    pub sessions: Vec<ClassSession>,
}

/// Time-of-day ranges on one date where none of the requested courses has a
/// session, within the campus operating day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonFree {
    pub date: NaiveDate,
    pub free: Vec<TimeWindow>,
}

/// Result of comparing the schedules of a set of courses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictReport {
    /// Per-course resolved sessions, in request order.
    pub courses: Vec<CourseSessions>,
    /// Overlap entries, sorted by (date, window).
    pub conflicts: Vec<ConflictEntry>,
    /// Common free windows per date with at least one resolved session.
    pub common_free: Vec<CommonFree>,
    /// Requested identifiers with no matching sessions. Non-fatal: the
    /// resolvable courses are still compared.
    pub unresolved: Vec<String>,
}

/// Compare the schedules of two or more courses.
///
/// Fails fast with [`EngineError::InsufficientCourses`] when fewer than two
/// distinct identifiers are requested. Identifiers that resolve to no
/// sessions land in [`ConflictReport::unresolved`] without aborting the
/// comparison of the rest; a report with a single resolvable course simply
/// carries that course's sessions and no conflicts.
pub fn compare_courses(schedule: &ScheduleSet, course_ids: &[&str]) -> Result<ConflictReport> {
    let distinct = distinct_ids(course_ids);
    if distinct.len() < 2 {
        return Err(EngineError::InsufficientCourses(distinct.len()));
    }

    let mut courses: Vec<CourseSessions> = Vec::new();
    let mut unresolved: Vec<String> = Vec::new();

    for id in &distinct {
        let sessions: Vec<ClassSession> = schedule
            .sessions_for_course(id)
            .into_iter()
            .cloned()
            .collect();
        match sessions.first() {
            Some(first) => {
                let course = first.course.clone();
                courses.push(CourseSessions { course, sessions });
            }
            None => unresolved.push(id.to_string()),
        }
    }

    let conflicts = pairwise_conflicts(&courses);
    let common_free = common_free_windows(&courses);

    Ok(ConflictReport {
        courses,
        conflicts,
        common_free,
        unresolved,
    })
}

/// Deduplicate requested identifiers case-insensitively, keeping request
/// order and the first spelling seen.
fn distinct_ids<'a>(course_ids: &[&'a str]) -> Vec<&'a str> {
    let mut seen: Vec<String> = Vec::new();
    let mut distinct = Vec::new();
    for id in course_ids {
        let key = id.to_uppercase();
        if !seen.contains(&key) {
            seen.push(key);
            distinct.push(*id);
        }
    }
    distinct
}

fn pairwise_conflicts(courses: &[CourseSessions]) -> Vec<ConflictEntry> {
    // Group by exact intersection window after the pairwise pass, so a
    // window shared by three courses merges into one entry.
    let mut by_window: BTreeMap<(NaiveDate, TimeWindow), Vec<ClassSession>> = BTreeMap::new();

    for (i, a) in courses.iter().enumerate() {
        for b in &courses[i + 1..] {
            for s1 in &a.sessions {
                for s2 in &b.sessions {
                    if s1.date != s2.date {
                        continue;
                    }
                    let Some(intersection) = s1.window().intersection(&s2.window()) else {
                        continue;
                    };
                    let entry = by_window.entry((s1.date, intersection)).or_default();
                    for session in [s1, s2] {
                        if !entry.contains(session) {
                            entry.push(session.clone());
                        }
                    }
                }
            }
        }
    }

    by_window
        .into_iter()
        .map(|((date, window), mut sessions)| {
            sessions.sort_by(|a, b| (&a.course, &a.room, a.start).cmp(&(&b.course, &b.room, b.start)));
            let mut courses: Vec<String> = sessions.iter().map(|s| s.course.clone()).collect();
            courses.sort();
            courses.dedup();
            ConflictEntry {
                date,
                window,
                courses,
                sessions,
            }
        })
        .collect()
}

fn common_free_windows(courses: &[CourseSessions]) -> Vec<CommonFree> {
    let mut dates: Vec<NaiveDate> = courses
        .iter()
        .flat_map(|c| c.sessions.iter().map(|s| s.date))
        .collect();
    dates.sort_unstable();
    dates.dedup();

    dates
        .into_iter()
        .map(|date| {
            let busy: Vec<TimeWindow> = courses
                .iter()
                .flat_map(|c| c.sessions.iter())
                .filter(|s| s.date == date)
                .map(|s| s.window())
                .collect();
            CommonFree {
                date,
                free: subtract_busy(operating_day(), &busy),
            }
        })
        .collect()
}
