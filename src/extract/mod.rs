// src/extract/mod.rs
//! # Extraction module
//!
//! Everything that turns a decoded report tree into flat grade records.
//!
//! ## What lives here
//! - **Resolution precedence** for grid columns (`columns`): human label
//!   first, stable property name as the durable fallback. Ids shift on
//!   every load, so resolution runs on every extraction.
//! - **Tolerant row decoding** (`rows`): rows without a course name are
//!   dropped, a missing grade becomes a sentinel, everything else passes
//!   through verbatim.
//! - **The report spec itself** (`enrollments`): which widgets and labels
//!   mark the coursework panels, and the single-pass descent that reads
//!   the enrollment grids out of them.
//!
//! ## What does **not** live here
//! - **Fetching** (`net`) and **report/relay output** (`report`, `relay`) –
//!   the extractor is a pure function, one tree in, one record sequence
//!   out. The runner decides when to scrape and where results go.
//! - **Tree plumbing** – optional-field types and child location live in
//!   `tree` and `locate`; this module only composes them.
//!
//! ## Conventions & invariants
//! - Every lookup is a **soft miss**: absence skips exactly the branch it
//!   occurs in and the pass continues. The only hard failure is a payload
//!   that does not decode as a tree at all, which `extract_payload` turns
//!   into a structured [`Extraction`] fault rather than an error.
//! - Output order is traversal order: outer panels to inner rows.
//! - Records always carry a non-empty course name.

pub mod columns;
pub mod enrollments;
pub mod rows;
pub mod types;

pub use enrollments::{extract, extract_payload};
pub use types::{Extraction, GradeRecord, ShapeFault};
