use crate::common::{client_for, legacy_page, mock_home, mock_login, setup_server};
use httpmock::Method::POST;
use portal_results::{FailureKind, lookup};

#[tokio::test]
async fn missing_identifier_echo_is_a_login_failure() {
    let server = setup_server();
    let id = "1124693620";
    let home = mock_home(&server);
    // The portal re-renders the login form without echoing the identifier.
    let login = mock_login(&server, id, legacy_page("login_failed", id));
    let client = client_for(&server);

    let record = lookup(&client, id).await;
    home.assert();
    login.assert();

    assert_eq!(record.failure_kind(), Some(FailureKind::LoginFailure));
    assert_eq!(record.error(), Some(FailureKind::LoginFailure.message()));
    assert!(record.courses().is_empty());
}

#[tokio::test]
async fn results_markup_without_echo_is_not_parsed() {
    let server = setup_server();
    let id = "1124693621";
    let _home = mock_home(&server);
    // Full results page, but for somebody else.
    let _login = mock_login(&server, id, legacy_page("detailed", "9999999999"));
    let client = client_for(&server);

    let record = lookup(&client, id).await;

    assert_eq!(record.failure_kind(), Some(FailureKind::LoginFailure));
    assert_eq!(record.gpa(), None);
}

#[tokio::test]
async fn non_success_login_status_is_a_login_failure() {
    let server = setup_server();
    let id = "1124693622";
    let _home = mock_home(&server);
    let login = server.mock(|when, then| {
        when.method(POST).path("/portal/students");
        then.status(500).body(format!("internal error {id}"));
    });
    let client = client_for(&server);

    let record = lookup(&client, id).await;
    login.assert();

    assert_eq!(record.failure_kind(), Some(FailureKind::LoginFailure));
}
