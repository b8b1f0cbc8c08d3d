// src/core/net.rs
// Blocking HTTP GET. One lookup is a strict chain (search page, then results
// page), so there is nothing to gain from an async client here.

use std::time::Duration;

use tracing::debug;

use crate::config::options::FetchOptions;
use crate::error::FetchError;

/// Where pages come from. The live implementation is `Fetcher`; tests serve
/// captured HTML instead.
pub trait PageSource {
    fn get(&self, url: &str) -> Result<String, FetchError>;
}

pub struct Fetcher {
    client: reqwest::blocking::Client,
}

impl Fetcher {
    pub fn new(opts: &FetchOptions) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(opts.timeout_secs))
            .user_agent(opts.user_agent.as_str())
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client })
    }
}

impl PageSource for Fetcher {
    fn get(&self, url: &str) -> Result<String, FetchError> {
        let http = |source| FetchError::Http { url: url.to_string(), source };

        let resp = self.client.get(url).send().map_err(http)?;
        let status = resp.status();
        debug!(%url, status = status.as_u16(), "fetched");
        if !status.is_success() {
            return Err(FetchError::Status { url: url.to_string(), status: status.as_u16() });
        }
        resp.text().map_err(http)
    }
}
