//! Error types for feed retrieval and parsing.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedError {
    /// Transport-level failure (connect, timeout, TLS).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("calendar feed answered with status {0}")]
    Status(u16),

    /// Every retry attempt failed.
    #[error("failed to fetch calendar feed after {attempts} attempts")]
    RetriesExhausted { attempts: u32 },

    /// The feed body is not well-formed XML.
    #[error("malformed calendar XML: {0}")]
    Xml(#[from] roxmltree::Error),
}

pub type Result<T> = std::result::Result<T, FeedError>;
