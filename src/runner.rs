// src/runner.rs

use std::fs;
use std::thread;

use tracing::{error, info, warn};

use crate::config::options::{ScrapeOptions, Source};
use crate::error::Result;
use crate::extract;
use crate::net::ReportClient;
use crate::relay::RelaySink;
use crate::report;

/// One fetch → extract → report cycle. Returns how many records were
/// appended to the grades log.
pub fn run_once(opts: &ScrapeOptions, relay: Option<&dyn RelaySink>) -> Result<usize> {
    let raw = match &opts.source {
        Source::Api { url, cookie } => {
            ReportClient::new(url.clone(), cookie.clone())?.fetch()?
        }
        Source::File(path) => fs::read_to_string(path)?,
    };

    let extraction = extract::extract_payload(&raw, &opts.term);
    if let Some(fault) = &extraction.fault {
        // Whatever was extracted before the fault still gets reported.
        warn!("{fault}");
    }

    report::append_entry(&opts.report, &opts.term, &extraction.records)?;
    info!(
        "{} record(s) for \"{}\" appended to {}",
        extraction.records.len(),
        opts.term,
        opts.report.display()
    );

    if let Some(sink) = relay {
        if let Err(e) = sink.publish(&extraction.records) {
            warn!("relay publish failed, ignoring: {e}");
        }
    }

    Ok(extraction.records.len())
}

/// Run immediately, then keep re-running at the configured interval.
/// A failed cycle skips that interval; it never ends the loop.
pub fn watch(opts: &ScrapeOptions, relay: Option<&dyn RelaySink>) {
    info!(
        "watching \"{}\" every {} min; Ctrl+C to stop",
        opts.term,
        opts.interval.as_secs() / 60
    );
    loop {
        if let Err(e) = run_once(opts, relay) {
            error!("cycle failed, skipping this interval: {e}");
        }
        thread::sleep(opts.interval);
    }
}
