//! Search results as returned to API callers.

use serde::{Deserialize, Serialize};

/// One joke from a search, with the term highlighted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JokeSearchItem {
    /// The joke text as returned upstream.
    pub text: String,
    /// The joke text with every match of the term wrapped in `<` `>`.
    pub highlighted_text: String,
    /// Number of space-separated words in `text`.
    pub word_count: usize,
}

/// Search hits partitioned by length, each bucket in upstream order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JokeSearchResult {
    /// Jokes with fewer than 10 words.
    pub short_jokes: Vec<JokeSearchItem>,
    /// Jokes with 10 to 19 words.
    pub medium_jokes: Vec<JokeSearchItem>,
    /// Jokes with 20 or more words.
    pub long_jokes: Vec<JokeSearchItem>,
}

impl JokeSearchResult {
    /// Total number of jokes across all buckets.
    pub fn len(&self) -> usize {
        self.short_jokes.len() + self.medium_jokes.len() + self.long_jokes.len()
    }

    /// `true` if no bucket holds a joke.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
