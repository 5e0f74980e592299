//! Process-wide, immutable record set.
//!
//! The raw posts are loaded once per process and then only read. [`Dataset`]
//! owns a loaded [`LoadReport`]; [`get_or_load`] keeps the first dataset it
//! successfully loads in a process-wide slot and hands the same instance to
//! every later caller. There is no reload: a fresh load needs a new process.
//!
//! Library code that wants to manage its own lifetime can build a
//! [`Dataset`] directly with [`Dataset::load`] or [`Dataset::from_posts`].

use std::path::Path;
use std::sync::OnceLock;

use crate::Post;
use crate::config::LoaderConfig;
use crate::core::filter::DateRange;
use crate::error::Result;
use crate::loader::{LoadReport, load_posts};

static DATASET: OnceLock<Dataset> = OnceLock::new();

/// Loaded record set plus what was skipped while loading it.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    report: LoadReport,
}

impl Dataset {
    /// Loads a dataset from a CSV file.
    pub fn load(path: &Path, config: &LoaderConfig) -> Result<Self> {
        Ok(Self::from_report(load_posts(path, config)?))
    }

    /// Wraps an existing load report.
    pub fn from_report(report: LoadReport) -> Self {
        Self { report }
    }

    /// Builds a dataset from posts that are already in memory.
    pub fn from_posts(posts: Vec<Post>) -> Self {
        let malformed_mentions = posts.iter().filter(|p| p.mentions.is_malformed()).count();
        Self::from_report(LoadReport {
            posts,
            skipped: Vec::new(),
            malformed_mentions,
        })
    }

    /// All loaded posts, in source order.
    pub fn posts(&self) -> &[Post] {
        &self.report.posts
    }

    /// Load summary (skipped rows, malformed mentions).
    pub fn report(&self) -> &LoadReport {
        &self.report
    }

    /// Number of loaded posts.
    pub fn len(&self) -> usize {
        self.report.posts.len()
    }

    /// Returns `true` if no posts were loaded.
    pub fn is_empty(&self) -> bool {
        self.report.posts.is_empty()
    }

    /// Range from the earliest to the latest calendar date in the dataset.
    ///
    /// Returns `None` for an empty dataset.
    pub fn date_bounds(&self) -> Option<DateRange> {
        DateRange::spanning(&self.report.posts)
    }
}

/// Returns the process-wide dataset, loading it from `path` on first use.
///
/// Once a load has succeeded, later calls return that dataset and ignore
/// their arguments. A failed load leaves the slot empty so the caller may
/// retry.
pub fn get_or_load(path: &Path, config: &LoaderConfig) -> Result<&'static Dataset> {
    if let Some(dataset) = DATASET.get() {
        tracing::debug!("Using cached dataset");
        return Ok(dataset);
    }

    let loaded = Dataset::load(path, config)?;
    Ok(DATASET.get_or_init(|| loaded))
}

/// Returns the process-wide dataset if it has been loaded.
pub fn get() -> Option<&'static Dataset> {
    DATASET.get()
}
