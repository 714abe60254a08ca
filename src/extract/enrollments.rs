// src/extract/enrollments.rs
// Spec for the student-records report: where the coursework lives in the
// rendered tree and how to read the enrollment grids out of it.
//
// Descent: body → institutional view → active-records list → one panel
// per active record → coursework panel list → one panel per semester →
// fieldSet (term label) → "Enrollments" grid → rows.

use crate::locate::{Strategy, find_child, locate};
use crate::tree::{Node, ReportDoc};

use super::columns::{self, ColumnSpec};
use super::rows;
use super::types::{Extraction, GradeRecord};

/// Stable subview id of the coursework panel list. The label check breaks
/// under localization and renames; this one survives them.
const COURSEWORK_SUBVIEW: &str = "wd:Student_Period_Record_GPA__Updated__Subview";

const COURSE: ColumnSpec = ColumnSpec {
    label: "Course",
    property_name: "wd:Course_Listing_Secured--IS",
};

const GRADE: ColumnSpec = ColumnSpec {
    label: "Grade",
    property_name: "wd:Student_Grade__Singular_--IS",
};

fn is_coursework_list(n: &Node) -> bool {
    n.widget_is("panelList") && (n.label_is("Coursework") || n.property_is(COURSEWORK_SUBVIEW))
}

fn is_field_set(n: &Node) -> bool {
    n.widget_is("fieldSet")
}

fn is_enrollment_grid(n: &Node) -> bool {
    n.widget_is("grid") && n.label_is("Enrollments")
}

/// The coursework list usually sits directly under an active-record
/// panel, but some report layouts tuck it one level down inside a
/// fieldSet.
const COURSEWORK_PATHS: &[Strategy] = &[
    Strategy::Direct(is_coursework_list),
    Strategy::Nested { via: is_field_set, then: is_coursework_list },
];

/// Pull `{course, grade}` records for every semester whose fieldSet label
/// contains `term`.
///
/// One synchronous pass, no state between calls. Every missing node or
/// failed match skips its own branch and nothing else; the function
/// cannot fail.
pub fn extract(doc: &ReportDoc, term: &str) -> Vec<GradeRecord> {
    let mut records = Vec::new();

    let active_list = doc
        .body
        .as_ref()
        .and_then(Node::first_child) // institutional view
        .and_then(Node::first_child); // active-records list
    let Some(active_list) = active_list else {
        return records;
    };

    for active_record in active_list.panels() {
        let Some(coursework) = locate(active_record, COURSEWORK_PATHS) else {
            continue;
        };

        for semester in coursework.panels() {
            let Some(field_set) = find_child(semester, is_field_set) else {
                continue;
            };
            if !field_set.label().contains(term) {
                continue;
            }
            let Some(grid) = find_child(field_set, is_enrollment_grid) else {
                continue;
            };

            // Ids shift between loads; resolve both afresh or skip the
            // whole grid. A grade column alone is not worth keeping.
            let Some(course_col) = columns::resolve(grid.columns(), &COURSE) else {
                continue;
            };
            let Some(grade_col) = columns::resolve(grid.columns(), &GRADE) else {
                continue;
            };

            for row in grid.rows() {
                if let Some(rec) = rows::decode(row, course_col, grade_col) {
                    records.push(rec);
                }
            }
        }
    }

    records
}

/// Decode-and-extract boundary for a raw payload.
///
/// A payload that does not decode as a report tree yields the fault
/// alongside the records accumulated before it (none, with a
/// whole-payload decode). Callers always get a value, never an error.
pub fn extract_payload(raw: &str, term: &str) -> Extraction {
    match serde_json::from_str::<ReportDoc>(raw) {
        Ok(doc) => Extraction::complete(extract(&doc, term)),
        Err(e) => Extraction::faulted(Vec::new(), e.into()),
    }
}
