pub mod config;
pub mod logging;

// Fetch pipeline, leaf modules first.
pub mod checksum;
pub mod content;
pub mod dedup;
pub mod error;
pub mod http;
pub mod storage;
pub mod url_model;

pub mod batch;
pub mod fetcher;

pub use batch::{run_batch, BatchObserver, BatchReport};
pub use error::FetchError;
pub use fetcher::{FetchOutcome, Fetcher, FetcherOptions};
