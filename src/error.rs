// src/error.rs
//! Fetch-layer error type.
//!
//! Nothing above the fetch layer raises: readers and formatters turn a
//! `FetchError` into a user-facing line. `Exhausted` is the value callers see
//! once the retry budget is spent.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("could not decode response from {url}: {message}")]
    Decode { url: String, message: String },

    #[error("gave up on {url} after {attempts} attempts: {last}")]
    Exhausted {
        url: String,
        attempts: u32,
        #[source]
        last: Box<FetchError>,
    },
}

impl FetchError {
    pub fn url(&self) -> &str {
        match self {
            FetchError::Transport { url, .. }
            | FetchError::Status { url, .. }
            | FetchError::Decode { url, .. }
            | FetchError::Exhausted { url, .. } => url,
        }
    }

    /// 4xx responses other than 408/429 will not get better on retry.
    pub fn is_retryable(&self) -> bool {
        match self {
            FetchError::Status { status, .. } => {
                !(400..500).contains(status) || *status == 408 || *status == 429
            }
            FetchError::Decode { .. } => false,
            _ => true,
        }
    }
}

pub type FetchResult<T> = Result<T, FetchError>;
