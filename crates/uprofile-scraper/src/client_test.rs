use super::*;

fn test_client(base_url: &str) -> ProfileClient {
    ProfileClient::new(base_url, "uprofile-test/0.1", 5, Duration::ZERO)
        .expect("client construction should not fail")
}

#[test]
fn profile_url_appends_user_segment() {
    let client = test_client("https://www.reddit.com");
    let url = client.profile_url(&UserIdentifier::new("alice")).unwrap();
    assert_eq!(url.as_str(), "https://www.reddit.com/user/alice");
}

#[test]
fn listing_url_for_posts() {
    let client = test_client("https://www.reddit.com/");
    let url = client
        .listing_url(&UserIdentifier::new("alice"), "submitted.json", 50)
        .unwrap();
    assert_eq!(
        url.as_str(),
        "https://www.reddit.com/user/alice/submitted.json?limit=50"
    );
}

#[test]
fn listing_url_for_comments() {
    let client = test_client("https://www.reddit.com");
    let url = client
        .listing_url(&UserIdentifier::new("Hungry-Move-6603"), "comments.json", 100)
        .unwrap();
    assert_eq!(
        url.as_str(),
        "https://www.reddit.com/user/Hungry-Move-6603/comments.json?limit=100"
    );
}

#[test]
fn listing_url_keeps_base_path_prefix() {
    let client = test_client("http://127.0.0.1:9000/mirror/");
    let url = client
        .listing_url(&UserIdentifier::new("alice"), "comments.json", 5)
        .unwrap();
    assert_eq!(
        url.as_str(),
        "http://127.0.0.1:9000/mirror/user/alice/comments.json?limit=5"
    );
}

#[test]
fn identifier_is_percent_encoded() {
    let client = test_client("https://www.reddit.com");
    let url = client
        .profile_url(&UserIdentifier::new("odd name?x"))
        .unwrap();
    assert_eq!(url.as_str(), "https://www.reddit.com/user/odd%20name%3Fx");
}

#[test]
fn decoded_identifier_is_encoded_once() {
    let client = test_client("https://www.reddit.com");
    let identifier =
        crate::identifier::extract_identifier("https://www.reddit.com/user/odd%20name/").unwrap();
    let url = client.profile_url(&identifier).unwrap();
    assert_eq!(url.as_str(), "https://www.reddit.com/user/odd%20name");
}

#[test]
fn rejects_invalid_base_url() {
    for base in ["not-a-url", "ftp://example.com", "mailto:someone@example.com"] {
        let result = ProfileClient::new(base, "ua", 5, Duration::ZERO);
        assert!(
            matches!(result, Err(ScraperError::InvalidBaseUrl { .. })),
            "expected InvalidBaseUrl for {base}"
        );
    }
}

#[test]
fn from_config_uses_base_url_and_pause() {
    let config = AppConfig {
        log_level: "debug".to_owned(),
        base_url: "http://127.0.0.1:9000".to_owned(),
        user_agent: "uprofile-test/0.1".to_owned(),
        request_timeout_secs: 5,
        request_pause_ms: 250,
        posts_limit: 50,
        comments_limit: 100,
    };
    let client = ProfileClient::from_config(&config).unwrap();
    let url = client.profile_url(&UserIdentifier::new("alice")).unwrap();
    assert_eq!(url.as_str(), "http://127.0.0.1:9000/user/alice");
    assert_eq!(client.pause(), Duration::from_millis(250));
}
