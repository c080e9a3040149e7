// src/core/net.rs
//
// One blocking HTTPS GET against the stats host. The human re-submitting
// the query is the retry mechanism; nothing is cached between calls.

use std::time::Duration;

use log::debug;

use crate::config::consts::{HOST, HTTP_TIMEOUT_SECS, USER_AGENT};
use crate::error::ScrapeError;

/// Fetch `https://<HOST><path>` and return the response body as text.
///
/// Non-2xx status, transport failure, or timeout all surface as
/// [`ScrapeError::Fetch`] with the cause in the message.
pub fn http_get(path: &str) -> Result<String, ScrapeError> {
    let url = join!("https://", HOST, path);
    debug!("GET {url}");

    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| ScrapeError::Fetch(e.to_string()))?;

    let resp = client
        .get(&url)
        .send()
        .map_err(|e| ScrapeError::Fetch(format!("{url}: {e}")))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(ScrapeError::Fetch(format!("HTTP {status} for {url}")));
    }

    let body = resp
        .text()
        .map_err(|e| ScrapeError::Fetch(format!("{url}: {e}")))?;
    debug!("{} bytes from {url}", body.len());
    Ok(body)
}
