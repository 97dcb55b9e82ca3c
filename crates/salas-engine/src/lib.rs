//! # salas-engine
//!
//! Schedule comparison and room availability engine for campus class
//! calendars.
//!
//! The engine is a set of pure functions over an immutable [`ScheduleSet`]
//! materialized once per run by the feed collaborator. It performs no I/O,
//! holds no state, and never mutates its input, so every query is trivially
//! repeatable: the same set and arguments always produce the same result.
//!
//! ## Modules
//!
//! - [`types`] — `ClassSession`, `ScheduleSet`, `TimeWindow`
//! - [`window`] — free/busy interval arithmetic and slot-grid enumeration
//! - [`availability`] — per-room free windows and the per-slot table
//! - [`compare`] — course schedule overlap detection
//! - [`suggest`] — alternative-room suggestions
//! - [`error`] — error types

pub mod availability;
pub mod compare;
pub mod error;
pub mod suggest;
pub mod types;
pub mod window;

pub use availability::{availability_by_slot, find_free_rooms, AvailabilityResult};
pub use compare::{compare_courses, ConflictReport};
pub use error::EngineError;
pub use suggest::{suggest_alternatives, Suggestion};
pub use types::{ClassSession, RoomRef, ScheduleInconsistency, ScheduleSet, TimeWindow};
pub use window::{operating_day, subtract_busy, SLOT_MINUTES};
