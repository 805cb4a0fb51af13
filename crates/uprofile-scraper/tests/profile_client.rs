//! Integration tests for `ProfileClient` against a local `wiremock` server.

use std::time::{Duration, Instant};

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use uprofile_scraper::{ProfileClient, ScraperError, UserIdentifier};

const TEST_UA: &str = "uprofile-test/0.1";

fn test_client(base_url: &str) -> ProfileClient {
    ProfileClient::new(base_url, TEST_UA, 5, Duration::ZERO)
        .expect("failed to build test ProfileClient")
}

fn alice() -> UserIdentifier {
    UserIdentifier::new("alice")
}

#[tokio::test]
async fn fetch_posts_maps_children_and_defaults_missing_score() {
    let server = MockServer::start().await;

    let body = json!({
        "kind": "Listing",
        "data": {
            "children": [
                {"kind": "t3", "data": {
                    "title": "First", "subreddit": "python", "score": 10,
                    "num_comments": 2, "created_utc": 1_700_000_000.0,
                    "selftext": "", "url": "https://example.com/a",
                    "permalink": "/r/python/comments/a/first/"
                }},
                {"kind": "t3", "data": {
                    "title": "Second", "subreddit": "rust", "num_comments": 1
                }}
            ]
        }
    });

    Mock::given(method("GET"))
        .and(path("/user/alice/submitted.json"))
        .and(query_param("limit", "50"))
        .and(header("user-agent", TEST_UA))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let posts = test_client(&server.uri())
        .fetch_posts(&alice(), 50)
        .await
        .expect("posts should parse");

    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].title, "First");
    assert_eq!(posts[0].score, 10);
    assert_eq!(posts[1].title, "Second");
    assert_eq!(posts[1].score, 0, "missing score should default to 0");
    assert_eq!(posts[1].comment_count, 1);
}

#[tokio::test]
async fn fetch_comments_sends_limit_and_keeps_order() {
    let server = MockServer::start().await;

    let body = json!({
        "data": {
            "children": [
                {"data": {"body": "one", "subreddit": "django", "link_title": "A"}},
                {"data": {"body": "two", "subreddit": "python", "link_title": "B"}},
                {"data": {"body": "three", "subreddit": "django", "link_title": "C"}}
            ]
        }
    });

    Mock::given(method("GET"))
        .and(path("/user/alice/comments.json"))
        .and(query_param("limit", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let comments = test_client(&server.uri())
        .fetch_comments(&alice(), 100)
        .await
        .expect("comments should parse");

    let bodies: Vec<&str> = comments.iter().map(|c| c.body.as_str()).collect();
    assert_eq!(bodies, ["one", "two", "three"]);
    assert_eq!(comments[2].parent_title, "C");
}

#[tokio::test]
async fn listing_server_error_is_unexpected_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/alice/submitted.json"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = test_client(&server.uri())
        .fetch_posts(&alice(), 50)
        .await
        .unwrap_err();

    assert!(
        matches!(err, ScraperError::UnexpectedStatus { status: 503, .. }),
        "expected UnexpectedStatus(503), got: {err:?}"
    );
}

#[tokio::test]
async fn profile_page_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/alice"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = test_client(&server.uri())
        .fetch_profile_page(&alice())
        .await
        .unwrap_err();

    assert!(
        matches!(err, ScraperError::NotFound { ref url } if url.ends_with("/user/alice")),
        "expected NotFound, got: {err:?}"
    );
}

#[tokio::test]
async fn listing_html_body_is_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/alice/comments.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>whoa there</html>"))
        .mount(&server)
        .await;

    let err = test_client(&server.uri())
        .fetch_comments(&alice(), 100)
        .await
        .unwrap_err();

    assert!(
        matches!(err, ScraperError::Deserialize { .. }),
        "expected Deserialize, got: {err:?}"
    );
}

#[tokio::test]
async fn pause_applies_after_failed_listing_fetch() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/alice/comments.json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = ProfileClient::new(&server.uri(), TEST_UA, 5, Duration::from_millis(60))
        .expect("failed to build test ProfileClient");

    let started = Instant::now();
    let result = client.fetch_comments(&alice(), 100).await;

    assert!(result.is_err());
    assert!(
        started.elapsed() >= Duration::from_millis(60),
        "listing fetch should pause even when it fails"
    );
}

#[tokio::test]
async fn profile_page_is_not_paced() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/alice"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .mount(&server)
        .await;

    let client = ProfileClient::new(&server.uri(), TEST_UA, 5, Duration::from_secs(30))
        .expect("failed to build test ProfileClient");

    let body = tokio::time::timeout(Duration::from_secs(5), client.fetch_profile_page(&alice()))
        .await
        .expect("profile fetch should not sleep")
        .expect("profile page should load");
    assert_eq!(body, "<html></html>");
}
