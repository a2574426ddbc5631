use crate::common::{fixture, legacy_page};
use portal_results::results::extract::{
    NOTICE_MARKER, extract_from_html, extract_results, is_results_header,
};
use portal_results::{FailureKind, PortalError, Standing};

const ID: &str = "1124693670";

#[test]
fn header_predicate_needs_both_markers() {
    assert!(is_results_header("The Course Grade"));
    assert!(is_results_header("Grade / Course Code"));
    assert!(!is_results_header("The Course"));
    assert!(!is_results_header("Grade"));
    assert!(!is_results_header("المادة الدرجة"));
    assert!(!is_results_header("course grade"));
}

#[test]
fn detailed_fixture_offline() {
    let r = extract_results(&legacy_page("detailed", ID), encoding_rs::WINDOWS_1256, ID).unwrap();

    assert_eq!(r.identifier, ID);
    assert_eq!(r.courses.len(), 3);
    assert_eq!(r.courses[0].name, "مقدمة في البرمجة");
    assert_eq!(r.gpa.as_deref(), Some("3.45"));
    assert_eq!(r.status, Some(Standing::Pass));
    assert!(r.notice.as_deref().is_some_and(|n| n.starts_with(NOTICE_MARKER)));
}

#[test]
fn unpublished_fixture_is_no_results() {
    let err = extract_from_html(&fixture("unpublished", ID), ID).unwrap_err();

    assert!(matches!(err, PortalError::NoResults), "got {err:?}");
    assert_eq!(err.kind(), FailureKind::NoResultsAvailable);
}

#[test]
fn pass_marker_wins_over_fail_marker() {
    let html = "<p>المعدل (1.90)</p><p>رسوب</p><p>نجاح</p>";
    let r = extract_from_html(html, ID).unwrap();

    assert_eq!(r.status, Some(Standing::Pass));
}

#[test]
fn gpa_token_is_kept_verbatim() {
    for (html, expected) in [
        ("<p>المعدل(3.5)</p>", "3.5"),
        ("<p>المعدل  (  04.00  )</p>", "04.00"),
        ("<span>المعدل</span> <b>( 2.875 )</b>", "2.875"),
    ] {
        let r = extract_from_html(html, ID).unwrap();
        assert_eq!(r.gpa.as_deref(), Some(expected), "html {html}");
        assert!(r.courses.is_empty());
    }
}

#[test]
fn gpa_without_parentheses_is_not_captured() {
    let err = extract_from_html("<p>المعدل: 3.20</p>", ID).unwrap_err();
    assert!(matches!(err, PortalError::NoResults));
}

#[test]
fn notice_split_across_inline_elements_is_recovered() {
    let html = "<div>النتيجة خاضعة <b>لاعتماد</b> لجنة الامتحانات\n<p>المعدل ( 3.00 )</p></div>";
    let r = extract_from_html(html, ID).unwrap();

    assert_eq!(
        r.notice.as_deref(),
        Some("النتيجة خاضعة لاعتماد لجنة الامتحانات")
    );
}

#[test]
fn rows_of_several_qualifying_tables_keep_document_order() {
    let html = r#"
        <table><tr><th>Course</th><th>Grade</th></tr><tr><th>الأولى</th><td>A</td></tr></table>
        <table><tr><td>Course</td><td>Grade</td></tr><tr><th>الثانية</th><td>B</td></tr></table>
    "#;
    let r = extract_from_html(html, ID).unwrap();

    let names: Vec<&str> = r.courses.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["الأولى", "الثانية"]);
    assert_eq!(r.gpa, None);
}

#[test]
fn notice_on_single_line_markup_stops_at_its_block() {
    let html = "<div>النتيجة خاضعة لاعتماد لجنة الامتحانات</div><table><tr><th>The Course</th><th>Grade</th></tr><tr><th>برمجة</th><td>A</td></tr></table><p>المعدل ( 3.45 )</p><p>نجاح</p>";
    let r = extract_from_html(html, ID).unwrap();

    assert_eq!(
        r.notice.as_deref(),
        Some("النتيجة خاضعة لاعتماد لجنة الامتحانات")
    );
    assert_eq!(r.courses.len(), 1);
    assert_eq!(r.gpa.as_deref(), Some("3.45"));
    assert_eq!(r.status, Some(Standing::Pass));
}

#[test]
fn notice_stops_at_line_break_and_sibling_cells() {
    let html = "<table><tr><td><font color=red>النتيجة خاضعة <u>لاعتماد</u> لجنة الامتحانات</font><br>المعدل ( 2.10 )</td><td>رسوب</td></tr></table>";
    let r = extract_from_html(html, ID).unwrap();

    assert_eq!(
        r.notice.as_deref(),
        Some("النتيجة خاضعة لاعتماد لجنة الامتحانات")
    );
    assert_eq!(r.gpa.as_deref(), Some("2.10"));
}
