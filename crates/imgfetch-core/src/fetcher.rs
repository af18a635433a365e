//! Single-fetch orchestration: GET → content-type check → filename →
//! duplicate check → write.
//!
//! [`Fetcher::fetch`] never returns an error and never panics past its
//! boundary; every failure is folded into [`FetchOutcome::Failed`] so a batch
//! can always move on to the next URL.

use crate::config::{CollisionPolicy, FetchConfig, DEFAULT_USER_AGENT};
use crate::content::is_image_content_type;
use crate::error::FetchError;
use crate::http::{self, RequestOptions};
use crate::storage::{self, Stored};
use crate::url_model::derive_filename;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Fixed bound on each request.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Result of fetching one URL.
#[derive(Debug)]
pub enum FetchOutcome {
    /// Image written to `path`.
    Saved {
        filename: String,
        path: PathBuf,
        bytes: u64,
    },
    /// Byte-identical image already stored at `path`; nothing written.
    Duplicate { filename: String, path: PathBuf },
    /// Different image already stored under the name and the policy is `skip`.
    Kept { filename: String, path: PathBuf },
    Failed(FetchError),
}

impl FetchOutcome {
    /// Saved, duplicate and kept all count as success.
    pub fn is_success(&self) -> bool {
        !matches!(self, FetchOutcome::Failed(_))
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            FetchOutcome::Failed(e) => Some(e),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FetcherOptions {
    pub user_agent: String,
    pub timeout: Duration,
    pub on_collision: CollisionPolicy,
}

impl Default for FetcherOptions {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: FETCH_TIMEOUT,
            on_collision: CollisionPolicy::default(),
        }
    }
}

impl From<&FetchConfig> for FetcherOptions {
    fn from(cfg: &FetchConfig) -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: FETCH_TIMEOUT,
            on_collision: cfg.on_collision,
        }
    }
}

/// Fetches single images into a directory.
#[derive(Debug, Clone, Default)]
pub struct Fetcher {
    options: FetcherOptions,
}

impl Fetcher {
    pub fn new(options: FetcherOptions) -> Self {
        Self { options }
    }

    /// Fetch `url` and store it under `dir`, which must already exist.
    pub fn fetch(&self, url: &str, dir: &Path) -> FetchOutcome {
        let result = panic::catch_unwind(AssertUnwindSafe(|| self.try_fetch(url, dir)))
            .unwrap_or_else(|payload| {
                let message = payload
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "panic during fetch".to_string());
                Err(FetchError::Unexpected {
                    url: url.to_string(),
                    message,
                })
            });

        match result {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!(url, kind = e.kind(), error = %e, "fetch failed");
                FetchOutcome::Failed(e)
            }
        }
    }

    fn try_fetch(&self, url: &str, dir: &Path) -> Result<FetchOutcome, FetchError> {
        let request = RequestOptions {
            user_agent: self.options.user_agent.clone(),
            timeout: self.options.timeout,
        };
        let response = http::get(url, &request)?;

        if !is_image_content_type(response.content_type()) {
            return Err(FetchError::InvalidContentType {
                url: url.to_string(),
                content_type: response.content_type().map(str::to_string),
            });
        }

        let filename = derive_filename(url);
        let stored = storage::store(dir, &filename, &response.body, self.options.on_collision)?;

        let outcome = match stored {
            Stored::Written { filename, path } => {
                let bytes = response.body.len() as u64;
                tracing::info!(url, path = %path.display(), bytes, "image saved");
                FetchOutcome::Saved {
                    filename,
                    path,
                    bytes,
                }
            }
            Stored::Duplicate { filename, path } => {
                tracing::info!(url, path = %path.display(), "duplicate content, not rewritten");
                FetchOutcome::Duplicate { filename, path }
            }
            Stored::Kept { filename, path } => {
                tracing::info!(url, path = %path.display(), "name taken by different content, kept existing");
                FetchOutcome::Kept { filename, path }
            }
        };
        Ok(outcome)
    }
}
