//! Configuration types for loading and analysis.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! - [`LoaderConfig`] - how the CSV record source is read
//! - [`AnalysisConfig`] - knobs for the derived views
//!
//! # Example
//!
//! ```rust
//! use sentiview::config::{AnalysisConfig, LoaderConfig};
//!
//! let loader = LoaderConfig::new()
//!     .with_delimiter(b';')
//!     .with_skip_invalid(false);
//!
//! let analysis = AnalysisConfig::new()
//!     .with_top_users(5)
//!     .with_extra_stop_words(["rt", "amp"]);
//!
//! assert_eq!(analysis.top_users, 5);
//! ```

use serde::{Deserialize, Serialize};

use crate::core::analysis::MAX_TOP_USERS;

/// Configuration for reading the CSV record source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Field delimiter (default: `,`)
    pub delimiter: u8,

    /// Skip invalid records instead of failing the load (default: true)
    pub skip_invalid: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            skip_invalid: true,
        }
    }
}

impl LoaderConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration that fails on the first invalid record.
    pub fn strict() -> Self {
        Self {
            skip_invalid: false,
            ..Self::default()
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether to skip invalid records.
    #[must_use]
    pub fn with_skip_invalid(mut self, skip: bool) -> Self {
        self.skip_invalid = skip;
        self
    }
}

/// Configuration for the derived views.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Maximum number of entries in the top-users view (default and cap: 10)
    pub top_users: usize,

    /// Maximum number of terms in the term-frequency view (default: 200)
    pub max_terms: usize,

    /// Shortest term, in characters, kept by the term-frequency view (default: 2)
    pub min_term_length: usize,

    /// Words excluded in addition to the built-in English stop-words
    #[serde(default)]
    pub extra_stop_words: Vec<String>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_users: 10,
            max_terms: 200,
            min_term_length: 2,
            extra_stop_words: Vec::new(),
        }
    }
}

impl AnalysisConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the size of the top-users view, capped at [`MAX_TOP_USERS`].
    #[must_use]
    pub fn with_top_users(mut self, n: usize) -> Self {
        self.top_users = n.min(MAX_TOP_USERS);
        self
    }

    /// Sets the maximum number of terms.
    #[must_use]
    pub fn with_max_terms(mut self, n: usize) -> Self {
        self.max_terms = n;
        self
    }

    /// Sets the minimum term length.
    #[must_use]
    pub fn with_min_term_length(mut self, len: usize) -> Self {
        self.min_term_length = len;
        self
    }

    /// Adds stop-words (matched case-insensitively).
    #[must_use]
    pub fn with_extra_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_stop_words
            .extend(words.into_iter().map(|w| w.into().to_lowercase()));
        self
    }
}
