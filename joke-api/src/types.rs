//! Wire types for the upstream joke API.
//!
//! Only `joke` is required; every other field tolerates being absent so that
//! additions or omissions upstream do not break deserialization.

use serde::{Deserialize, Serialize};

/// Payload returned by `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomJokeResponse {
    /// Upstream identifier of the joke.
    #[serde(default)]
    pub id: Option<String>,
    /// The joke text.
    pub joke: String,
    /// Status echoed by the upstream API in the body.
    #[serde(default)]
    pub status: Option<u16>,
}

/// A single hit inside a [`SearchResponse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResultItem {
    /// Upstream identifier of the joke.
    #[serde(default)]
    pub id: Option<String>,
    /// The joke text.
    pub joke: String,
}

/// Payload returned by `GET /search`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResponse {
    /// Page index of this response.
    pub current_page: u32,
    /// Page size the upstream API applied.
    pub limit: u32,
    /// Index of the following page.
    pub next_page: u32,
    /// Index of the preceding page.
    pub previous_page: u32,
    /// Matching jokes in upstream order.
    pub results: Vec<SearchResultItem>,
    /// The term the upstream API searched for.
    pub search_term: String,
    /// Status echoed by the upstream API in the body.
    pub status: u16,
    /// Total number of jokes matching the term.
    pub total_jokes: u32,
    /// Total number of pages at this limit.
    pub total_pages: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_joke_parses_upstream_shape() {
        let json = r#"{"id":"R7UfaahVfFd","joke":"My dog used to chase people on a bike a lot.","status":200}"#;
        let parsed: RandomJokeResponse = serde_json::from_str(json).expect("deserialize");
        assert_eq!(parsed.id.as_deref(), Some("R7UfaahVfFd"));
        assert_eq!(parsed.status, Some(200));
        assert!(parsed.joke.starts_with("My dog"));
    }

    #[test]
    fn random_joke_without_joke_field_is_rejected() {
        let result = serde_json::from_str::<RandomJokeResponse>(r#"{"id":"x","status":200}"#);
        assert!(result.is_err());
    }

    #[test]
    fn search_response_parses_upstream_shape() {
        let json = r#"{
            "current_page": 1,
            "limit": 30,
            "next_page": 1,
            "previous_page": 1,
            "results": [
                {"id": "M7wPC5wPKBd", "joke": "Did you hear the one about the guy with the broken hearing aid? Neither did he."},
                {"id": "MRZ0LJtHQCd", "joke": "What do you call a fly without wings? A walk."}
            ],
            "search_term": "hear",
            "status": 200,
            "total_jokes": 2,
            "total_pages": 1
        }"#;
        let parsed: SearchResponse = serde_json::from_str(json).expect("deserialize");
        assert_eq!(parsed.results.len(), 2);
        assert_eq!(parsed.search_term, "hear");
        assert_eq!(parsed.total_jokes, 2);
        assert_eq!(parsed.results[1].id.as_deref(), Some("MRZ0LJtHQCd"));
    }

    #[test]
    fn search_response_tolerates_missing_results() {
        let parsed: SearchResponse =
            serde_json::from_str(r#"{"search_term":"zzz","status":200}"#).expect("deserialize");
        assert!(parsed.results.is_empty());
        assert_eq!(parsed.total_jokes, 0);
    }

    #[test]
    fn search_item_requires_joke() {
        let result = serde_json::from_str::<SearchResponse>(r#"{"results":[{"id":"x"}]}"#);
        assert!(result.is_err());
    }
}
