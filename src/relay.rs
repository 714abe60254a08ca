// src/relay.rs
// Best-effort forwarding of a run summary to the logging relay. The
// scraper never depends on the relay being reachable; the runner logs
// and drops publish failures.

use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::json;

use crate::config::consts;
use crate::config::options::RelayOptions;
use crate::error::{Result, ScrapeError};
use crate::extract::GradeRecord;

/// Sink for run summaries. The runner publishes through this so offline
/// runs and tests can plug in their own.
pub trait RelaySink {
    fn publish(&self, records: &[GradeRecord]) -> Result<()>;
}

pub struct HttpRelay {
    http: Client,
    opts: RelayOptions,
}

impl HttpRelay {
    pub fn new(opts: RelayOptions) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(consts::REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self { http, opts })
    }
}

impl RelaySink for HttpRelay {
    fn publish(&self, records: &[GradeRecord]) -> Result<()> {
        // The relay renders the message as HTML.
        let message = records
            .iter()
            .map(|r| format!("{}: <strong>{}</strong>", r.course, r.grade))
            .collect::<Vec<_>>()
            .join("<br>");

        let resp = self
            .http
            .post(&self.opts.endpoint)
            .json(&json!({
                "service": self.opts.service_id,
                "level": "info",
                "title": format!("{} Grades Fetched", records.len()),
                "message": message,
            }))
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ScrapeError::Status(status));
        }
        Ok(())
    }
}
