// src/net.rs
// Fetches the report payload from Workday's private report API. One GET
// per cycle; the session cookie is borrowed from a logged-in browser
// session and expires with it.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, COOKIE, USER_AGENT};

use crate::config::consts;
use crate::error::{Result, ScrapeError};

pub struct ReportClient {
    http: Client,
    url: String,
    cookie: String,
}

impl ReportClient {
    pub fn new(url: String, cookie: String) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(consts::REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self { http, url, cookie })
    }

    /// GET the report payload as raw JSON text. Non-success status is an
    /// error; decoding is left to the extraction boundary.
    pub fn fetch(&self) -> Result<String> {
        let resp = self
            .http
            .get(&self.url)
            .header(COOKIE, self.cookie.as_str())
            .header(ACCEPT, consts::ACCEPT_JSON)
            .header(USER_AGENT, consts::BROWSER_UA)
            .header("X-Workday-Client", consts::CLIENT_VERSION)
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ScrapeError::Status(status));
        }
        Ok(resp.text()?)
    }
}
