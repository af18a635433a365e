//! Batch runner: fetch an ordered list of URLs one at a time.
//!
//! Input order is preserved, nothing is retried or deduplicated, and a
//! failed URL never stops the ones after it.

use crate::fetcher::{FetchOutcome, Fetcher};
use anyhow::{Context, Result};
use std::path::Path;

/// Hooks called around each URL; both default to no-ops.
/// `index` is 1-based.
pub trait BatchObserver {
    fn on_start(&mut self, _index: usize, _total: usize, _url: &str) {}
    fn on_finish(&mut self, _index: usize, _total: usize, _url: &str, _outcome: &FetchOutcome) {}
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl BatchObserver for NoopObserver {}

/// Per-URL outcomes in input order plus the success tally.
#[derive(Debug)]
pub struct BatchReport {
    pub outcomes: Vec<(String, FetchOutcome)>,
    pub successes: usize,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn failures(&self) -> usize {
        self.total() - self.successes
    }

    /// `Summary: X/N images successfully fetched`
    pub fn summary_line(&self) -> String {
        format!(
            "Summary: {}/{} images successfully fetched",
            self.successes,
            self.total()
        )
    }
}

/// Split comma-separated input into trimmed, non-empty URLs.
pub fn split_url_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Create the target directory (and parents) if it does not exist.
pub fn prepare_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("could not create directory {}", dir.display()))?;
    tracing::debug!(dir = %dir.display(), "output directory ready");
    Ok(())
}

/// Fetch every URL into `dir` in order and tally the successes.
pub fn run_batch<O: BatchObserver + ?Sized>(
    fetcher: &Fetcher,
    urls: &[String],
    dir: &Path,
    observer: &mut O,
) -> BatchReport {
    let total = urls.len();
    let mut outcomes = Vec::with_capacity(total);
    let mut successes = 0;

    for (i, url) in urls.iter().enumerate() {
        let index = i + 1;
        observer.on_start(index, total, url);
        let outcome = fetcher.fetch(url, dir);
        if outcome.is_success() {
            successes += 1;
        }
        observer.on_finish(index, total, url, &outcome);
        outcomes.push((url.clone(), outcome));
    }

    tracing::info!(successes, total, "batch finished");
    BatchReport {
        outcomes,
        successes,
    }
}
