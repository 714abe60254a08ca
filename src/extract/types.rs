// src/extract/types.rs

use serde::Serialize;
use thiserror::Error;

/// One extracted enrollment. `course` is never empty; `grade` is either
/// the grid's verbatim text or the [`NO_GRADE`](super::rows::NO_GRADE)
/// sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GradeRecord {
    pub course: String,
    pub grade: String,
}

/// The payload could not be read as a report tree at all. Missing nodes
/// never raise this; only wrong-typed substructure does.
#[derive(Debug, Error)]
#[error("report payload does not match the expected tree shape: {0}")]
pub struct ShapeFault(#[from] serde_json::Error);

/// What one extraction pass produced: the records accumulated before any
/// fault, plus the fault itself when the payload shape was violated.
/// Callers get this value, never an error.
#[derive(Debug)]
pub struct Extraction {
    pub records: Vec<GradeRecord>,
    pub fault: Option<ShapeFault>,
}

impl Extraction {
    pub fn complete(records: Vec<GradeRecord>) -> Self {
        Self { records, fault: None }
    }

    pub fn faulted(records: Vec<GradeRecord>, fault: ShapeFault) -> Self {
        Self { records, fault: Some(fault) }
    }
}
