use crate::common::{client_for, mock_portal, setup_server};
use portal_results::{Course, lookup};

#[tokio::test]
async fn decoy_table_rows_are_ignored() {
    let server = setup_server();
    let id = "1124693650";
    let _mocks = mock_portal(&server, id, "decoy");
    let client = client_for(&server);

    let record = lookup(&client, id).await;

    assert!(record.is_success());
    // Ragged rows (missing or blank cells) are dropped; whitespace is collapsed.
    assert_eq!(
        record.courses(),
        &[
            Course { name: "هياكل البيانات".into(), grade: "B".into() },
            Course { name: "نظم التشغيل".into(), grade: "A".into() },
        ]
    );
    assert_eq!(record.gpa(), Some("3.10"));
    assert_eq!(record.status(), None);
}

#[tokio::test]
async fn results_table_nested_in_layout_table() {
    let server = setup_server();
    let id = "1124693651";
    let _mocks = mock_portal(&server, id, "nested");
    let client = client_for(&server);

    let record = lookup(&client, id).await;

    let names: Vec<&str> = record.courses().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["قواعد البيانات", "تحليل النظم"]);
    assert_eq!(record.gpa(), Some("3.62"));
}
