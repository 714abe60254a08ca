// src/cli.rs

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::config::consts;
use crate::config::options::{self, ScrapeOptions, Source};
use crate::error::Result;
use crate::relay::{HttpRelay, RelaySink};
use crate::runner;

#[derive(Parser)]
#[command(
    name = "wd_scrape",
    version,
    about = "Scrapes course grades out of a Workday student-records report"
)]
pub struct Cli {
    /// Academic term to extract; matched as a substring of the semester label
    #[arg(short, long, default_value = consts::DEFAULT_TERM)]
    pub term: String,

    /// Read a captured report payload from disk instead of the live API
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Grades log to append to
    #[arg(short, long, default_value = consts::DEFAULT_REPORT_FILE)]
    pub out: PathBuf,

    /// Keep running, re-scraping at a fixed interval
    #[arg(short, long)]
    pub watch: bool,

    /// Minutes between scrapes in watch mode
    #[arg(long, default_value_t = consts::DEFAULT_INTERVAL_MINS, value_name = "MINS")]
    pub interval: u64,
}

impl Cli {
    /// Fold flags and environment into runnable options. The live API
    /// source needs env config; a file input needs none.
    pub fn to_options(&self) -> Result<ScrapeOptions> {
        let source = match &self.input {
            Some(path) => Source::File(path.clone()),
            None => options::source_from_env()?,
        };
        Ok(ScrapeOptions {
            source,
            term: self.term.clone(),
            report: self.out.clone(),
            interval: Duration::from_secs(self.interval * 60),
        })
    }
}

pub fn run(cli: &Cli) -> Result<()> {
    let opts = cli.to_options()?;

    let relay = match options::relay_from_env() {
        Some(r) => Some(HttpRelay::new(r)?),
        None => None,
    };
    let sink = relay.as_ref().map(|r| r as &dyn RelaySink);

    if cli.watch {
        runner::watch(&opts, sink);
    } else {
        runner::run_once(&opts, sink)?;
    }
    Ok(())
}
