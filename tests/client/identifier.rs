use portal_results::{Identifier, PortalError};

#[test]
fn ten_ascii_digits_are_accepted() {
    let id = Identifier::parse("1124693617").unwrap();
    assert_eq!(id.as_str(), "1124693617");
    assert_eq!(id.to_string(), "1124693617");
}

#[test]
fn surrounding_whitespace_is_trimmed() {
    let id: Identifier = " 1124693617\n".parse().unwrap();
    assert_eq!(id.as_str(), "1124693617");
}

#[test]
fn malformed_identifiers_are_rejected() {
    for raw in ["", "112469361", "11246936170", "1124 693617", "112469361x", "١١٢٤٦٩٣٦١٧"] {
        let err = Identifier::parse(raw).unwrap_err();
        assert!(
            matches!(&err, PortalError::InvalidIdentifier(s) if s == raw),
            "input {raw:?} gave {err:?}"
        );
    }
}
