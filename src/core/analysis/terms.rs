//! Term frequencies for word-weight visualisations.
//!
//! [`corpus_text`] is the normalized text blob a word-cloud renderer would
//! consume; [`term_frequencies`] goes one step further and tokenizes it the
//! way such renderers do, so consumers that only need weights never have to
//! re-implement the tokenizer.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::count_first_seen;
use crate::Post;
use crate::config::AnalysisConfig;

/// Word tokens: a word character followed by word characters or apostrophes.
static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w[\w']+").expect("token pattern is valid"));

/// Spans removed before tokenizing: links and @handles.
static NOISE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)https?://\S+|www\.\S+|@\w+").expect("noise pattern is valid")
});

const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "aren't", "as", "at", "be", "because", "been", "before", "being", "below", "between",
    "both", "but", "by", "can", "can't", "cannot", "com", "could", "couldn't", "did", "didn't",
    "do", "does", "doesn't", "doing", "don't", "down", "during", "each", "else", "ever", "few",
    "for", "from", "further", "get", "had", "hadn't", "has", "hasn't", "have", "haven't",
    "having", "he", "he'd", "he'll", "he's", "hence", "her", "here", "here's", "hers", "herself",
    "him", "himself", "his", "how", "how's", "however", "http", "https", "i", "i'd", "i'll",
    "i'm", "i've", "if", "in", "into", "is", "isn't", "it", "it's", "its", "itself", "just", "k",
    "let's", "like", "me", "more", "most", "mustn't", "my", "myself", "no", "nor", "not", "of",
    "off", "on", "once", "only", "or", "other", "otherwise", "ought", "our", "ours", "ourselves",
    "out", "over", "own", "r", "same", "shall", "shan't", "she", "she'd", "she'll", "she's",
    "should", "shouldn't", "since", "so", "some", "such", "than", "that", "that's", "the",
    "their", "theirs", "them", "themselves", "then", "there", "there's", "therefore", "these",
    "they", "they'd", "they'll", "they're", "they've", "this", "those", "through", "to", "too",
    "under", "until", "up", "very", "was", "wasn't", "we", "we'd", "we'll", "we're", "we've",
    "were", "weren't", "what", "what's", "when", "when's", "where", "where's", "which", "while",
    "who", "who's", "whom", "why", "why's", "with", "won't", "would", "wouldn't", "www", "you",
    "you'd", "you'll", "you're", "you've", "your", "yours", "yourself", "yourselves",
];

static STOP_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOP_WORDS.iter().copied().collect());

/// One term and its weight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TermWeight {
    pub term: String,
    pub count: usize,
    /// `count / max_count`, so the most frequent term weighs `1.0`
    pub weight: f64,
}

/// Normalized corpus plus its ranked terms.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TermFrequencies {
    /// Post texts joined by a single space
    pub corpus: String,
    /// Descending by count, first-seen among equals
    pub terms: Vec<TermWeight>,
}

impl TermFrequencies {
    /// Returns `true` if no term survived tokenizing.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Returns `true` if `word` (lowercase) is a built-in English stop-word.
pub fn is_stop_word(word: &str) -> bool {
    STOP_SET.contains(word)
}

/// Joins every post's text with a single space.
///
/// The separator keeps the last word of one post from fusing with the first
/// word of the next.
pub fn corpus_text(posts: &[&Post]) -> String {
    posts
        .iter()
        .map(|p| p.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Tokenizes the corpus and ranks the remaining terms.
///
/// Tokens are lowercased and lose a trailing `'s`. Links, @handles,
/// digit-only tokens, stop-words (built-in plus
/// [`extra_stop_words`](AnalysisConfig::extra_stop_words)) and tokens shorter
/// than [`min_term_length`](AnalysisConfig::min_term_length) characters are
/// dropped. At most [`max_terms`](AnalysisConfig::max_terms) terms are kept.
pub fn term_frequencies(posts: &[&Post], config: &AnalysisConfig) -> TermFrequencies {
    let corpus = corpus_text(posts);

    let extra: HashSet<String> = config
        .extra_stop_words
        .iter()
        .map(|w| w.to_lowercase())
        .collect();

    let mut counted = {
        let cleaned = NOISE_RE.replace_all(&corpus, " ");
        count_first_seen(TOKEN_RE.find_iter(&cleaned).filter_map(|m| {
            let token = normalize_token(m.as_str());
            let keep = token.chars().count() >= config.min_term_length
                && !token.chars().all(char::is_numeric)
                && !is_stop_word(&token)
                && !extra.contains(&token);
            keep.then_some(token)
        }))
    };
    counted.truncate(config.max_terms);

    let max = counted.first().map_or(0, |(_, count)| *count);
    let terms = counted
        .into_iter()
        .map(|(term, count)| TermWeight {
            term,
            count,
            weight: count as f64 / max as f64,
        })
        .collect();

    TermFrequencies { corpus, terms }
}

fn normalize_token(raw: &str) -> String {
    let lower = raw.to_lowercase();
    let stem = lower.strip_suffix("'s").unwrap_or(&lower);
    stem.trim_end_matches('\'').to_string()
}
