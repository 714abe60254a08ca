// tests/extract_records.rs
//
// Record-level properties: what gets emitted, in what order, and which
// grids are skipped outright.
//
use serde_json::{Value, json};

use wd_scrape::extract::extract;
use wd_scrape::tree::ReportDoc;

const TERM: &str = "Fall Semester 2025";
const COURSE_PROP: &str = "wd:Course_Listing_Secured--IS";
const GRADE_PROP: &str = "wd:Student_Grade__Singular_--IS";

fn doc(v: Value) -> ReportDoc {
    serde_json::from_value(v).expect("fixture decodes")
}

fn report(active_records: Value) -> Value {
    json!({
        "body": { "children": [ { "children": [ { "panels": active_records } ] } ] }
    })
}

fn coursework(semesters: Value) -> Value {
    json!({ "widget": "panelList", "label": "Coursework", "panels": semesters })
}

fn semester_with_grid(label: &str, grid: Value) -> Value {
    json!({
        "children": [ { "widget": "fieldSet", "label": label, "children": [ grid ] } ]
    })
}

fn grid(columns: Value, rows: Value) -> Value {
    json!({ "widget": "grid", "label": "Enrollments", "columns": columns, "rows": rows })
}

fn standard_columns() -> Value {
    json!([
        { "columnId": "22.1", "label": "Course", "propertyName": COURSE_PROP },
        { "columnId": "22.2", "label": "Grade", "propertyName": GRADE_PROP }
    ])
}

fn row(course: Option<&str>, grade: Option<&str>) -> Value {
    let mut cells = serde_json::Map::new();
    if let Some(c) = course {
        cells.insert("22.1".into(), json!({ "instances": [{ "text": c }] }));
    }
    if let Some(g) = grade {
        cells.insert("22.2".into(), json!({ "instances": [{ "text": g }] }));
    }
    json!({ "cellsMap": cells })
}

fn one_panel_report(grid: Value) -> ReportDoc {
    doc(report(json!([
        { "children": [ coursework(json!([semester_with_grid(TERM, grid)])) ] }
    ])))
}

fn courses(records: &[wd_scrape::extract::GradeRecord]) -> Vec<&str> {
    records.iter().map(|r| r.course.as_str()).collect()
}

#[test]
fn scenario_rows_decode_as_specified() {
    // Grid rows: full, course-less, grade-less.
    let d = one_panel_report(grid(
        standard_columns(),
        json!([
            row(Some("CS 101"), Some("A")),
            row(Some(""), Some("B")),
            row(Some("MATH 201"), None),
        ]),
    ));
    let records = extract(&d, TERM);

    assert_eq!(courses(&records), ["CS 101", "MATH 201"]);
    assert_eq!(records[0].grade, "A");
    assert_eq!(records[1].grade, "N/A");
    // No record ever carries an empty course.
    assert!(records.iter().all(|r| !r.course.is_empty()));
}

#[test]
fn course_column_unresolved_skips_the_whole_grid() {
    // Grade column resolves fine; course does not. A grade column alone
    // contributes nothing.
    let d = one_panel_report(grid(
        json!([{ "columnId": "22.2", "label": "Grade", "propertyName": GRADE_PROP }]),
        json!([row(Some("CS 101"), Some("A"))]),
    ));
    assert!(extract(&d, TERM).is_empty());
}

#[test]
fn grade_column_unresolved_skips_the_whole_grid() {
    let d = one_panel_report(grid(
        json!([{ "columnId": "22.1", "label": "Course", "propertyName": COURSE_PROP }]),
        json!([row(Some("CS 101"), Some("A"))]),
    ));
    assert!(extract(&d, TERM).is_empty());
}

#[test]
fn unrelated_columns_resolve_to_nothing() {
    let d = one_panel_report(grid(
        json!([
            { "columnId": "22.1", "label": "Units", "propertyName": "wd:Units--IS" },
            { "columnId": "22.2", "label": "Section", "propertyName": "wd:Section--IS" }
        ]),
        json!([row(Some("CS 101"), Some("A"))]),
    ));
    assert!(extract(&d, TERM).is_empty());
}

#[test]
fn label_match_outranks_earlier_property_match() {
    // The renamed course column still carries the stable property name,
    // but a column labelled "Course" exists; the label match must win.
    let d = one_panel_report(grid(
        json!([
            { "columnId": "22.9", "label": "Course Listing", "propertyName": COURSE_PROP },
            { "columnId": "22.1", "label": "Course" },
            { "columnId": "22.2", "label": "Grade", "propertyName": GRADE_PROP }
        ]),
        json!([
            { "cellsMap": {
                "22.9": { "instances": [{ "text": "shadow text" }] },
                "22.1": { "instances": [{ "text": "CS 101" }] },
                "22.2": { "instances": [{ "text": "A-" }] }
            } }
        ]),
    ));
    let records = extract(&d, TERM);
    assert_eq!(courses(&records), ["CS 101"]);
    assert_eq!(records[0].grade, "A-");
}

#[test]
fn renamed_columns_resolve_through_property_names() {
    let d = one_panel_report(grid(
        json!([
            { "columnId": "31.4", "label": "Course Listing", "propertyName": COURSE_PROP },
            { "columnId": "31.5", "label": "Final Grade", "propertyName": GRADE_PROP }
        ]),
        json!([
            { "cellsMap": {
                "31.4": { "instances": [{ "text": "CHEM 150" }] },
                "31.5": { "instances": [{ "text": "B" }] }
            } }
        ]),
    ));
    let records = extract(&d, TERM);
    assert_eq!(courses(&records), ["CHEM 150"]);
}

#[test]
fn semesters_outside_the_term_are_skipped() {
    let fall = grid(standard_columns(), json!([row(Some("CS 101"), Some("A"))]));
    let spring = grid(standard_columns(), json!([row(Some("CS 202"), Some("A"))]));
    let d = doc(report(json!([
        { "children": [ coursework(json!([
            semester_with_grid("Spring Semester 2026", spring),
            // Decorated labels still contain the term substring.
            semester_with_grid("Fall Semester 2025 (Sep 2025 - Dec 2025)", fall),
        ])) ] }
    ])));
    assert_eq!(courses(&extract(&d, TERM)), ["CS 101"]);
}

#[test]
fn non_enrollment_grids_are_skipped() {
    let audit = json!({
        "widget": "grid",
        "label": "Audited Courses",
        "columns": standard_columns(),
        "rows": [row(Some("HIST 100"), Some("A"))]
    });
    let d = one_panel_report(audit);
    assert!(extract(&d, TERM).is_empty());
}

#[test]
fn coursework_list_found_by_property_name_alone() {
    // Localized label, stable subview id.
    let localized = json!({
        "widget": "panelList",
        "label": "Kursarbeit",
        "propertyName": "wd:Student_Period_Record_GPA__Updated__Subview",
        "panels": [ semester_with_grid(TERM, grid(standard_columns(), json!([row(Some("CS 101"), Some("A"))]))) ]
    });
    let d = doc(report(json!([ { "children": [ localized ] } ])));
    assert_eq!(courses(&extract(&d, TERM)), ["CS 101"]);
}

#[test]
fn order_is_outer_to_inner_traversal_order() {
    let sem = |courses: &[&str]| {
        let rows: Vec<Value> = courses.iter().map(|c| row(Some(c), Some("A"))).collect();
        semester_with_grid(TERM, grid(standard_columns(), json!(rows)))
    };
    let d = doc(report(json!([
        { "children": [ coursework(json!([sem(&["CS 101", "CS 102"]), sem(&["MATH 201"])])) ] },
        { "children": [ coursework(json!([sem(&["BIO 110"])])) ] },
    ])));
    assert_eq!(
        courses(&extract(&d, TERM)),
        ["CS 101", "CS 102", "MATH 201", "BIO 110"]
    );
}
