// src/extract/rows.rs

use crate::tree::{Cell, Row};

use super::types::GradeRecord;

/// Placeholder grade for rows whose grade cell is absent or empty.
pub const NO_GRADE: &str = "N/A";

/// Decode one grid row into a record.
///
/// A row without course text carries no information and is dropped.
/// Grade text passes through verbatim, sentinel values included;
/// absence becomes [`NO_GRADE`].
pub fn decode(row: &Row, course_col: &str, grade_col: &str) -> Option<GradeRecord> {
    let course = row
        .cell(course_col)
        .and_then(Cell::first_text)
        .filter(|t| !t.is_empty())?;

    let grade = row
        .cell(grade_col)
        .and_then(Cell::first_text)
        .filter(|t| !t.is_empty())
        .unwrap_or(NO_GRADE);

    Some(GradeRecord {
        course: course.to_string(),
        grade: grade.to_string(),
    })
}
