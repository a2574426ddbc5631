//! Results-table discovery and row extraction.
//!
//! The portal's tables carry no usable id or class, so the results table is
//! recognised by its header text alone.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Node, Selector};

use crate::results::Course;

/// English header marker of the course column.
pub const COURSE_MARKER: &str = "Course";
/// English header marker of the grade column.
pub const GRADE_MARKER: &str = "Grade";

/// Whether a row's flattened text marks the header of a results table.
#[must_use]
pub fn is_results_header(row_text: &str) -> bool {
    row_text.contains(COURSE_MARKER) && row_text.contains(GRADE_MARKER)
}

static TABLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table").expect("constant table selector"));
static ROW: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tr").expect("constant row selector"));

/// Collects course rows from every qualifying table, in document order.
pub(crate) fn course_rows(doc: &Html) -> Vec<Course> {
    let mut courses = Vec::new();
    for table in doc.select(&TABLE) {
        let rows: Vec<ElementRef<'_>> = table
            .select(&ROW)
            .filter(|row| owning_table(*row).map(|t| t.id()) == Some(table.id()))
            .collect();

        let texts: Vec<String> = rows.iter().map(|row| flat_text(*row)).collect();
        if !texts.iter().any(|t| is_results_header(t)) {
            continue;
        }

        for (row, text) in rows.iter().zip(&texts) {
            if text.contains(COURSE_MARKER) {
                continue;
            }
            if let Some(course) = row_course(*row) {
                courses.push(course);
            }
        }
    }
    courses
}

/// Nearest enclosing `<table>`; rows of nested tables belong to the inner one.
fn owning_table(row: ElementRef<'_>) -> Option<ElementRef<'_>> {
    row.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "table")
}

/// `<th>` holds the course name, `<td>` the grade. Ragged rows are skipped.
fn row_course(row: ElementRef<'_>) -> Option<Course> {
    let cells = || {
        row.children()
            .filter_map(ElementRef::wrap)
            .filter(|cell| matches!(cell.value().name(), "th" | "td"))
    };

    let name = cells()
        .find(|cell| cell.value().name() == "th")
        .map(flat_text)?;
    let grade = cells()
        .find(|cell| cell.value().name() == "td")
        .map(flat_text)?;

    if name.is_empty() || grade.is_empty() {
        return None;
    }
    Some(Course { name, grade })
}

/// Text of `el` with whitespace runs collapsed, excluding nested tables and scripts.
fn flat_text(el: ElementRef<'_>) -> String {
    let mut raw = String::new();
    push_text(el, &mut raw);
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn push_text(el: ElementRef<'_>, out: &mut String) {
    for child in el.children() {
        match child.value() {
            Node::Text(text) => {
                out.push_str(text);
                out.push(' ');
            }
            Node::Element(inner) if matches!(inner.name(), "table" | "script" | "style") => {}
            Node::Element(_) => {
                if let Some(inner) = ElementRef::wrap(child) {
                    push_text(inner, out);
                }
            }
            _ => {}
        }
    }
}
