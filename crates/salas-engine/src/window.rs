//! Free/busy interval arithmetic over time windows.
//!
//! Sorts busy windows by start, clips them to a reference window, merges
//! overlapping or duplicate windows, then computes the complementary gaps.

use chrono::NaiveTime;

use crate::types::{ClassSession, TimeWindow};

/// Slot width used by the per-slot availability table.
pub const SLOT_MINUTES: u32 = 30;

/// The campus operating day used when no explicit reference window is given.
pub fn operating_day() -> TimeWindow {
    TimeWindow {
        start: NaiveTime::from_hms_opt(7, 0, 0).expect("07:00 is a valid time"),
        end: NaiveTime::from_hms_opt(23, 0, 0).expect("23:00 is a valid time"),
    }
}

/// Merge busy windows into a sorted, non-overlapping list clipped to
/// `reference`.
///
/// Windows given out of order are sorted first; duplicates collapse into one;
/// windows entirely outside `reference` are dropped; windows partially
/// outside are clipped.
pub fn merge_busy(busy: &[TimeWindow], reference: TimeWindow) -> Vec<TimeWindow> {
    let mut intervals: Vec<TimeWindow> = busy
        .iter()
        .filter(|w| w.overlaps(&reference))
        .map(|w| TimeWindow {
            start: w.start.max(reference.start),
            end: w.end.min(reference.end),
        })
        .collect();

    if intervals.is_empty() {
        return Vec::new();
    }

    intervals.sort_by_key(|w| (w.start, w.end));

    let mut merged: Vec<TimeWindow> = Vec::new();
    for window in intervals {
        if let Some(last) = merged.last_mut() {
            if window.start <= last.end {
                // Overlapping or adjacent: extend the current interval.
                last.end = last.end.max(window.end);
                continue;
            }
        }
        merged.push(window);
    }

    merged
}

/// The free windows left in `reference` after removing all `busy` windows.
///
/// Busy windows are merged first, so overlapping source data still yields a
/// clean partition: the returned free windows plus the merged busy windows
/// exactly tile `reference`.
pub fn subtract_busy(reference: TimeWindow, busy: &[TimeWindow]) -> Vec<TimeWindow> {
    let merged = merge_busy(busy, reference);

    let mut free = Vec::new();
    let mut cursor = reference.start;

    for window in &merged {
        if cursor < window.start {
            free.push(TimeWindow {
                start: cursor,
                end: window.start,
            });
        }
        cursor = cursor.max(window.end);
    }

    // Trailing free window after the last busy period.
    if cursor < reference.end {
        free.push(TimeWindow {
            start: cursor,
            end: reference.end,
        });
    }

    free
}

/// Enumerate the 30-minute slot grid covered by a set of sessions.
///
/// Each session start is floored to its slot boundary; the result is the
/// sorted, distinct list of slot windows. The day's last slot (23:30)
/// cannot end at the nonexistent 24:00, so it is clamped to 23:59:59. An
/// empty session list yields an empty grid.
pub fn slot_grid(sessions: &[ClassSession]) -> Vec<TimeWindow> {
    let mut starts: Vec<u32> = sessions
        .iter()
        .map(|s| minute_of_day(s.start) / SLOT_MINUTES * SLOT_MINUTES)
        .collect();
    starts.sort_unstable();
    starts.dedup();

    starts
        .into_iter()
        .filter_map(|m| {
            let start = time_from_minute(m)?;
            let end = time_from_minute(m + SLOT_MINUTES).unwrap_or_else(end_of_day);
            Some(TimeWindow { start, end })
        })
        .collect()
}

fn minute_of_day(t: NaiveTime) -> u32 {
    use chrono::Timelike;
    t.hour() * 60 + t.minute()
}

fn time_from_minute(m: u32) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(m / 60, m % 60, 0)
}

fn end_of_day() -> NaiveTime {
    NaiveTime::from_hms_opt(23, 59, 59).expect("23:59:59 is a valid time")
}
