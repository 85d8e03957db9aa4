use reqwest::StatusCode;
use thiserror::Error;

/// Any failure while retrieving the album collection.
///
/// All variants are treated the same by the monitor: the poll is skipped and
/// the next one runs on schedule.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("server at {url} answered with status {status}")]
    Status { status: StatusCode, url: String },

    #[error("response is not a JSON array of albums: {0}")]
    Decode(#[from] serde_json::Error),
}
