//! Feed configuration.
//!
//! A plain value object passed explicitly into the fetch call — there is no
//! process-wide configuration state.

use std::time::Duration;

/// The university's published class-schedule calendar.
pub const DEFAULT_CALENDAR_URL: &str = "https://cgi.insper.edu.br/Agenda/xml/ExibeCalendario.xml";

pub const DEFAULT_MAX_RETRIES: u32 = 3;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Where and how to fetch the calendar feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedConfig {
    pub url: String,
    /// Total number of attempts before giving up.
    pub max_retries: u32,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_CALENDAR_URL.to_string(),
            max_retries: DEFAULT_MAX_RETRIES,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}
