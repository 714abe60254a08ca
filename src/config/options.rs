// src/config/options.rs

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::config::consts::*;
use crate::error::{Result, ScrapeError};

/// Where the report payload comes from.
#[derive(Clone, Debug)]
pub enum Source {
    /// Live API: report URL plus the session cookie.
    Api { url: String, cookie: String },
    /// Captured payload on disk (offline runs, tests).
    File(PathBuf),
}

#[derive(Clone, Debug)]
pub struct ScrapeOptions {
    pub source: Source,
    /// Substring matched against semester fieldSet labels.
    pub term: String,
    /// Grades log appended to on every run.
    pub report: PathBuf,
    /// Pause between cycles in watch mode.
    pub interval: Duration,
}

/// Relay settings; publishing only happens when both parts are present.
#[derive(Clone, Debug)]
pub struct RelayOptions {
    pub endpoint: String,
    pub service_id: String,
}

/// Live-API source from the environment. Both variables are required;
/// the cookie comes from a logged-in browser session.
pub fn source_from_env() -> Result<Source> {
    let url = env::var(ENV_REPORT_URL).map_err(|_| ScrapeError::Config(ENV_REPORT_URL))?;
    let cookie = env::var(ENV_COOKIE).map_err(|_| ScrapeError::Config(ENV_COOKIE))?;
    Ok(Source::Api { url, cookie })
}

pub fn relay_from_env() -> Option<RelayOptions> {
    let endpoint = env::var(ENV_RELAY_URL).ok()?;
    let service_id = env::var(ENV_SERVICE_ID).ok()?;
    Some(RelayOptions { endpoint, service_id })
}
