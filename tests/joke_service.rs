//! Integration tests for [`JokeService`] against a mock upstream.
//!
//! The real [`JokeClient`] talks to a local wiremock server, so these cover
//! the whole chain from HTTP response to [`ServiceResult`].

#![allow(clippy::unwrap_used, clippy::expect_used)]

use dadjokes::service::EMPTY_SEARCH_TERM_MESSAGE;
use dadjokes::JokeService;
use joke_api::{JokeApiConfig, JokeClient};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn service_for(server: &MockServer) -> JokeService<JokeClient> {
    let client = JokeClient::new(JokeApiConfig {
        base_url: server.uri(),
        ..Default::default()
    })
    .expect("valid config");
    JokeService::new(client)
}

fn words(n: usize) -> String {
    (0..n)
        .map(|i| format!("word{i}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn search_body(jokes: &[String], term: &str) -> serde_json::Value {
    let results: Vec<_> = jokes
        .iter()
        .enumerate()
        .map(|(i, joke)| json!({"id": format!("id{i}"), "joke": joke}))
        .collect();
    json!({
        "current_page": 1,
        "limit": 30,
        "next_page": 1,
        "previous_page": 1,
        "results": results,
        "search_term": term,
        "status": 200,
        "total_jokes": jokes.len(),
        "total_pages": 1
    })
}

// ────────────────────────────────────────────────────────────────────────────
// get_random_joke
// ────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn random_joke_returned_on_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "0189hNRf2g",
            "joke": "I'm tired of following my dreams. I'm just going to ask them where they are going and meet up with them later.",
            "status": 200
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = service_for(&server).get_random_joke().await;
    assert!(result.is_success());
    assert!(result.value().unwrap().starts_with("I'm tired of following my dreams."));
}

#[tokio::test]
async fn random_joke_fails_on_non_success_statuses() {
    for status in [400_u16, 404, 429, 500, 503] {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(status))
            .expect(1)
            .mount(&server)
            .await;

        let result = service_for(&server).get_random_joke().await;
        assert!(!result.is_success(), "status {status} should fail");
        assert!(result.value().is_none());
        assert!(result.error_message().is_none());
    }
}

#[tokio::test]
async fn random_joke_fails_on_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw("{invalid_json}", "application/json"),
        )
        .mount(&server)
        .await;

    let result = service_for(&server).get_random_joke().await;
    assert!(!result.is_success());
    assert!(result.value().is_none());
}

#[tokio::test]
async fn random_joke_fails_on_empty_joke() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "empty",
            "joke": "",
            "status": 200
        })))
        .mount(&server)
        .await;

    let result = service_for(&server).get_random_joke().await;
    assert!(!result.is_success());
    assert!(result.value().is_none());
}

// ────────────────────────────────────────────────────────────────────────────
// search_jokes
// ────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn blank_term_fails_without_network_call() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let service = service_for(&server);
    for term in ["", " ", "  \t "] {
        let result = service.search_jokes(term).await;
        assert!(!result.is_success());
        assert_eq!(result.error_message(), Some(EMPTY_SEARCH_TERM_MESSAGE));
    }
    // MockServer verifies `.expect(0)` when dropped.
}

#[tokio::test]
async fn search_puts_jokes_in_correct_buckets() {
    let server = MockServer::start().await;
    let jokes = vec![words(2), words(11), words(25)];
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("limit", "30"))
        .and(query_param("term", "word1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body(&jokes, "word1")))
        .expect(1)
        .mount(&server)
        .await;

    let result = service_for(&server)
        .search_jokes("word1")
        .await
        .into_value()
        .unwrap();
    assert_eq!(result.short_jokes.len(), 1);
    assert_eq!(result.medium_jokes.len(), 1);
    assert_eq!(result.long_jokes.len(), 1);
    assert_eq!(result.short_jokes[0].word_count, 2);
    assert_eq!(result.medium_jokes[0].word_count, 11);
    assert_eq!(result.long_jokes[0].word_count, 25);
}

#[tokio::test]
async fn search_highlights_term_in_every_bucket() {
    let server = MockServer::start().await;
    let term = "Pun";
    let jokes = vec![
        format!("{} {term}", words(2)),
        format!("{term} {}", words(11)),
        format!("{} {term} {}", words(20), words(20)),
    ];
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body(&jokes, term)))
        .mount(&server)
        .await;

    let result = service_for(&server)
        .search_jokes(term)
        .await
        .into_value()
        .unwrap();

    let expected = format!("<{term}>");
    assert!(result.short_jokes[0].highlighted_text.contains(&expected));
    assert!(result.medium_jokes[0].highlighted_text.contains(&expected));
    assert!(result.long_jokes[0].highlighted_text.contains(&expected));
    assert_eq!(result.short_jokes[0].text, jokes[0]);
}

#[tokio::test]
async fn search_bucket_boundaries() {
    let server = MockServer::start().await;
    let jokes = vec![words(9), words(10), words(19), words(20)];
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body(&jokes, "word")))
        .mount(&server)
        .await;

    let result = service_for(&server)
        .search_jokes("word")
        .await
        .into_value()
        .unwrap();

    let counts = |items: &[dadjokes::JokeSearchItem]| -> Vec<usize> {
        items.iter().map(|i| i.word_count).collect()
    };
    assert_eq!(counts(&result.short_jokes), vec![9]);
    assert_eq!(counts(&result.medium_jokes), vec![10, 19]);
    assert_eq!(counts(&result.long_jokes), vec![20]);
}

#[tokio::test]
async fn search_fails_on_non_success_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let result = service_for(&server).search_jokes("cat").await;
    assert!(!result.is_success());
    assert!(result.value().is_none());
    assert!(result.error_message().is_none());
}

#[tokio::test]
async fn search_fails_on_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw("{invalid_json}", "application/json"),
        )
        .mount(&server)
        .await;

    let result = service_for(&server).search_jokes("cat").await;
    assert!(!result.is_success());
    assert!(result.value().is_none());
}

#[tokio::test]
async fn search_fails_on_absent_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let result = service_for(&server).search_jokes("cat").await;
    assert!(!result.is_success());
}
