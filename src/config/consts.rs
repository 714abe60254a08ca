// src/config/consts.rs

// Report source (environment / .env)
pub const ENV_REPORT_URL: &str = "WD_REPORT_URL";
pub const ENV_COOKIE: &str = "WD_COOKIE";
pub const ENV_RELAY_URL: &str = "WD_RELAY_URL";
pub const ENV_SERVICE_ID: &str = "WD_SERVICE_ID";

// Client headers; the endpoint only answers requests that look like the
// web client's own
pub const ACCEPT_JSON: &str = "application/json, text/javascript, */*; q=0.01";
pub const BROWSER_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
pub const CLIENT_VERSION: &str = "2025.1.0";
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

// Extraction
pub const DEFAULT_TERM: &str = "Fall Semester 2025";

// Report log
pub const DEFAULT_REPORT_FILE: &str = "grades_log.txt";

// Watch mode
pub const DEFAULT_INTERVAL_MINS: u64 = 5;
