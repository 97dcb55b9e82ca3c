//! # salas-feed
//!
//! Calendar fetch+parse collaborator for the salas tools: retrieves the
//! university's published class-schedule XML over HTTP with bounded retry
//! and parses it into a [`salas_engine::ScheduleSet`].
//!
//! The engine itself never touches the network; everything blocking lives
//! here.
//!
//! ## Modules
//!
//! - [`config`] — feed URL, retry count, and timeout as an explicit value object
//! - [`fetch`] — HTTP retrieval with bounded retry
//! - [`parse`] — XML → `ScheduleSet`
//! - [`error`] — error types

pub mod config;
pub mod error;
pub mod fetch;
pub mod parse;

pub use config::FeedConfig;
pub use error::FeedError;
pub use fetch::fetch_calendar;
pub use parse::parse_schedule;

use chrono::NaiveDate;
use salas_engine::ScheduleSet;

/// Fetch and parse the calendar for one date. The single entry point the
/// CLI uses when no local input file is given.
pub fn fetch_schedule(config: &FeedConfig, date: NaiveDate) -> error::Result<ScheduleSet> {
    let xml = fetch_calendar(config)?;
    parse_schedule(&xml, date)
}
