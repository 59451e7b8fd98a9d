//! Search result transformation: word counting, highlighting, length buckets.
//!
//! Pure functions over upstream results; no I/O.

use crate::models::{JokeSearchItem, JokeSearchResult};
use joke_api::SearchResultItem;
use regex::{Captures, Regex, RegexBuilder};

/// Jokes with fewer words than this are short.
pub const MEDIUM_MIN_WORDS: usize = 10;

/// Jokes with at least this many words are long.
pub const LONG_MIN_WORDS: usize = 20;

/// Length bucket of a joke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JokeLength {
    /// Fewer than 10 words.
    Short,
    /// 10 to 19 words.
    Medium,
    /// 20 words or more.
    Long,
}

impl JokeLength {
    /// Classify a joke by its word count.
    pub fn from_word_count(word_count: usize) -> Self {
        if word_count < MEDIUM_MIN_WORDS {
            Self::Short
        } else if word_count < LONG_MIN_WORDS {
            Self::Medium
        } else {
            Self::Long
        }
    }
}

/// Count words separated by literal spaces, ignoring empty tokens.
///
/// Tabs and newlines are not separators.
pub fn word_count(text: &str) -> usize {
    text.split(' ').filter(|token| !token.is_empty()).count()
}

/// Wraps case-insensitive matches of a search term in angle brackets.
#[derive(Debug, Clone)]
pub struct Highlighter {
    pattern: Regex,
}

impl Highlighter {
    /// Compile a highlighter for `term`. The term is matched literally.
    ///
    /// # Errors
    ///
    /// Returns the regex error if the escaped term exceeds the compiled size limit.
    pub fn new(term: &str) -> Result<Self, regex::Error> {
        let pattern = RegexBuilder::new(&regex::escape(term))
            .case_insensitive(true)
            .build()?;
        Ok(Self { pattern })
    }

    /// Wrap every non-overlapping match in `text`, keeping the match's casing.
    pub fn highlight(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, |caps: &Captures<'_>| format!("<{}>", &caps[0]))
            .into_owned()
    }
}

/// Highlight, count and bucket every item, preserving upstream order per bucket.
///
/// # Errors
///
/// Returns the regex error if a highlighter cannot be compiled for `term`.
pub fn build_search_result(
    term: &str,
    items: Vec<SearchResultItem>,
) -> Result<JokeSearchResult, regex::Error> {
    let highlighter = Highlighter::new(term)?;
    let mut result = JokeSearchResult::default();

    for item in items {
        let words = word_count(&item.joke);
        let joke = JokeSearchItem {
            highlighted_text: highlighter.highlight(&item.joke),
            word_count: words,
            text: item.joke,
        };
        match JokeLength::from_word_count(words) {
            JokeLength::Short => result.short_jokes.push(joke),
            JokeLength::Medium => result.medium_jokes.push(joke),
            JokeLength::Long => result.long_jokes.push(joke),
        }
    }

    Ok(result)
}
