// src/report.rs
// Appends human-readable entries to the grades log. One block per run,
// newest last; plain text meant for eyeballing, not parsing.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use chrono::Local;

use crate::error::Result;
use crate::extract::GradeRecord;

pub fn append_entry(path: &Path, term: &str, records: &[GradeRecord]) -> Result<()> {
    let stamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let entry = format_entry(&stamp, term, records);

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(entry.as_bytes())?;
    Ok(())
}

fn format_entry(stamp: &str, term: &str, records: &[GradeRecord]) -> String {
    let mut entry = format!("--- Log Entry: {stamp} ---\n");

    if records.is_empty() {
        entry.push_str(&format!("No grades found for {term}.\n"));
    } else {
        for r in records {
            entry.push_str(&format!("Course: {:<40} | Grade: {}\n", r.course, r.grade));
        }
    }

    entry.push('\n');
    entry
}
