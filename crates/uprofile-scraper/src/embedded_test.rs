use super::*;

fn alice() -> UserIdentifier {
    UserIdentifier::new("alice")
}

fn page_with_state(state: &str) -> String {
    format!(
        "<html><head><script>window.__r = {state};</script></head><body><div id=\"root\"></div></body></html>"
    )
}

#[test]
fn reads_full_user_model() {
    let body = page_with_state(
        r#"{"users":{"models":{"alice":{"linkKarma":10,"commentKarma":3,"createdUtc":1000,"subreddit":{"publicDescription":"hi"}}}}}"#,
    );
    let record = try_parse_embedded(&body, &alice()).expect("embedded profile");
    assert_eq!(record.identifier.as_str(), "alice");
    assert_eq!(record.karma.post, 10);
    assert_eq!(record.karma.comment, 3);
    assert_eq!(record.karma.total, None);
    assert_eq!(record.account_created_utc, Some(1000.0));
    assert_eq!(record.description, "hi");
    assert_eq!(record.source, ProfileSource::Embedded);
}

#[test]
fn missing_fields_default_inside_present_model() {
    let body = page_with_state(r#"{"users":{"models":{"alice":{}}}}"#);
    let record = try_parse_embedded(&body, &alice()).expect("embedded profile");
    assert_eq!(record.karma, Karma::default());
    assert!(record.account_created_utc.is_none());
    assert!(record.description.is_empty());
}

#[test]
fn no_assignment_yields_none() {
    let body = "<html><body><span>42 karma</span></body></html>";
    assert!(try_parse_embedded(body, &alice()).is_none());
}

#[test]
fn malformed_literal_yields_none() {
    let body = page_with_state(r#"{"users": {"models": oops}}"#);
    assert!(try_parse_embedded(&body, &alice()).is_none());
}

#[test]
fn missing_path_levels_yield_none() {
    for state in [
        r#"{"posts":{}}"#,
        r#"{"users":{}}"#,
        r#"{"users":{"models":{}}}"#,
        r#"{"users":{"models":{"bob":{"linkKarma":1}}}}"#,
        r#"{"users":{"models":{"alice":"not an object"}}}"#,
        r#"{"users":{"models":[]}}"#,
    ] {
        let body = page_with_state(state);
        assert!(
            try_parse_embedded(&body, &alice()).is_none(),
            "expected None for state {state}"
        );
    }
}

#[test]
fn braces_inside_strings_do_not_end_the_literal() {
    let body = page_with_state(
        r#"{"users":{"models":{"alice":{"linkKarma":5,"subreddit":{"publicDescription":"curly } and ; inside"}}}}}"#,
    );
    let record = try_parse_embedded(&body, &alice()).expect("embedded profile");
    assert_eq!(record.karma.post, 5);
    assert_eq!(record.description, "curly } and ; inside");
}

#[test]
fn literal_without_statement_terminator_is_ignored() {
    let body = r#"<script>window.__r = {"users":{"models":{"alice":{}}}}</script>"#;
    assert!(extract_embedded_state(body).is_none());
}

#[test]
fn negative_karma_reads_as_zero() {
    let body = page_with_state(r#"{"users":{"models":{"alice":{"linkKarma":-4,"commentKarma":7}}}}"#);
    let record = try_parse_embedded(&body, &alice()).expect("embedded profile");
    assert_eq!(record.karma.post, 0);
    assert_eq!(record.karma.comment, 7);
}

#[test]
fn balanced_object_stops_at_matching_brace() {
    assert_eq!(
        extract_balanced_object(r#"{"a":{"b":[1,2]}}; trailing"#),
        Some(r#"{"a":{"b":[1,2]}}"#)
    );
    assert_eq!(extract_balanced_object(r#"{"a":1"#), None);
    assert_eq!(extract_balanced_object("[1]"), None);
}
