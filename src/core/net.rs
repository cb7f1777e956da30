// src/core/net.rs
//! Blocking HTTP GET with timeout, bounded retries and exponential backoff.
//!
//! Everything that talks to a feed goes through the [`Fetch`] trait so the
//! directories and formatters can be driven by an in-memory fake in tests.

use std::thread;
use std::time::Duration;

use serde_json::Value;

use crate::config::options::NetOptions;
use crate::error::{FetchError, FetchResult};

pub trait Fetch: Send + Sync {
    /// GET `url` and return the body. Retries are the implementor's business;
    /// an `Err` here means the caller should give up.
    fn get_text(&self, url: &str) -> FetchResult<String>;

    fn get_json(&self, url: &str) -> FetchResult<Value> {
        let body = self.get_text(url)?;
        serde_json::from_str(&body).map_err(|e| FetchError::Decode {
            url: s!(url),
            message: e.to_string(),
        })
    }
}

pub struct HttpFetcher {
    client: reqwest::blocking::Client,
    retries: u32,
    backoff: Duration,
}

impl HttpFetcher {
    pub fn new(opts: &NetOptions) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(opts.user_agent.as_str())
            .timeout(opts.timeout())
            .build()?;
        Ok(Self {
            client,
            retries: opts.retries.max(1),
            backoff: opts.backoff(),
        })
    }

    fn get_once(&self, url: &str) -> FetchResult<String> {
        let resp = self.client.get(url).send().map_err(|e| FetchError::Transport {
            url: s!(url),
            message: e.to_string(),
        })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { url: s!(url), status: status.as_u16() });
        }

        resp.text().map_err(|e| FetchError::Transport {
            url: s!(url),
            message: e.to_string(),
        })
    }
}

impl Fetch for HttpFetcher {
    fn get_text(&self, url: &str) -> FetchResult<String> {
        with_retries(url, self.retries, self.backoff, || self.get_once(url))
    }
}

/// Run `op` up to `attempts` times, sleeping `backoff`, `2*backoff`, ... between
/// failures. No sleep after the final attempt. Errors that cannot improve on
/// retry stop the loop early. Always returns `FetchError::Exhausted` on failure.
pub fn with_retries<T>(
    url: &str,
    attempts: u32,
    backoff: Duration,
    mut op: impl FnMut() -> FetchResult<T>,
) -> FetchResult<T> {
    let attempts = attempts.max(1);
    let mut delay = backoff;
    let mut tried = 0;

    loop {
        tried += 1;
        match op() {
            Ok(v) => {
                if tried > 1 {
                    logd!("{url} succeeded on attempt {tried}");
                }
                return Ok(v);
            }
            Err(e) => {
                let give_up = tried >= attempts || !e.is_retryable();
                if give_up {
                    loge!("{url}: {e} (attempt {tried}/{attempts}), giving up");
                    return Err(FetchError::Exhausted {
                        url: s!(url),
                        attempts: tried,
                        last: Box::new(e),
                    });
                }
                logw!("{url}: {e} (attempt {tried}/{attempts}), retrying in {delay:?}");
                if !delay.is_zero() {
                    thread::sleep(delay);
                }
                delay = delay.saturating_mul(2);
            }
        }
    }
}
