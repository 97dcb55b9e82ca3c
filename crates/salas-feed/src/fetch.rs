//! Calendar feed retrieval with bounded retry.

use tracing::{info, warn};

use crate::config::FeedConfig;
use crate::error::{FeedError, Result};

/// Fetch the raw calendar XML, retrying up to `config.max_retries` times.
///
/// Each attempt is logged; transport errors and non-success statuses both
/// count as failed attempts. Fails with [`FeedError::RetriesExhausted`] once
/// the attempts run out.
pub fn fetch_calendar(config: &FeedConfig) -> Result<String> {
    let client = reqwest::blocking::Client::builder()
        .timeout(config.timeout)
        .build()?;

    for attempt in 1..=config.max_retries {
        info!(attempt, max = config.max_retries, url = %config.url, "fetching calendar feed");

        match try_fetch(&client, &config.url) {
            Ok(body) => {
                info!(bytes = body.len(), "calendar feed fetched");
                return Ok(body);
            }
            Err(err) => {
                warn!(attempt, %err, "fetch attempt failed");
            }
        }
    }

    Err(FeedError::RetriesExhausted {
        attempts: config.max_retries,
    })
}

fn try_fetch(client: &reqwest::blocking::Client, url: &str) -> Result<String> {
    let response = client.get(url).send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(FeedError::Status(status.as_u16()));
    }
    Ok(response.text()?)
}
