// src/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("missing configuration: {0} is not set")]
    Config(&'static str),

    #[error("report fetch failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("report endpoint returned {0}")]
    Status(reqwest::StatusCode),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
