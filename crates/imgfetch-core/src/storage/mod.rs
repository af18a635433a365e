//! Persisting fetched images into the target directory.
//!
//! Combines the duplicate check with the collision policy: identical content
//! is never rewritten; different content under the same name is handled per
//! [`CollisionPolicy`].

mod writer;

pub use writer::write_atomic;

use crate::config::CollisionPolicy;
use crate::dedup::is_duplicate;
use crate::error::FetchError;
use std::io;
use std::path::{Path, PathBuf};

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Upper bound on `name_N.ext` candidates tried under [`CollisionPolicy::Suffix`].
const MAX_SUFFIX: u32 = 9999;

/// Path for the temp file: appends `.part` to the final path (e.g. `cat.png` → `cat.png.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Where the content ended up and whether anything was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stored {
    /// Content was written to `path`.
    Written { filename: String, path: PathBuf },
    /// `path` already holds byte-identical content; nothing written.
    Duplicate { filename: String, path: PathBuf },
    /// `path` holds different content and the policy is `skip`.
    Kept { filename: String, path: PathBuf },
}

/// `cat.png` + 2 → `cat_2.png`; names without an extension get the suffix appended.
pub fn suffixed_filename(filename: &str, n: u32) -> String {
    match filename.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => format!("{stem}_{n}.{ext}"),
        _ => format!("{filename}_{n}"),
    }
}

fn storage_err(path: &Path, source: io::Error) -> FetchError {
    FetchError::Storage {
        path: path.to_path_buf(),
        source,
    }
}

/// Duplicate-check then write `content` as `dir/filename` under `policy`.
pub fn store(
    dir: &Path,
    filename: &str,
    content: &[u8],
    policy: CollisionPolicy,
) -> Result<Stored, FetchError> {
    let path = dir.join(filename);
    if is_duplicate(&path, content).map_err(|e| storage_err(&path, e))? {
        return Ok(Stored::Duplicate {
            filename: filename.to_string(),
            path,
        });
    }

    let occupied = path.exists();
    if occupied {
        tracing::debug!(path = %path.display(), %policy, "filename collision with different content");
    }

    match policy {
        CollisionPolicy::Skip if occupied => Ok(Stored::Kept {
            filename: filename.to_string(),
            path,
        }),
        CollisionPolicy::Suffix if occupied => store_suffixed(dir, filename, content),
        _ => {
            write_atomic(&path, content).map_err(|e| storage_err(&path, e))?;
            Ok(Stored::Written {
                filename: filename.to_string(),
                path,
            })
        }
    }
}

/// First free `name_N.ext`, or a duplicate already sitting at one of them.
fn store_suffixed(dir: &Path, filename: &str, content: &[u8]) -> Result<Stored, FetchError> {
    for n in 1..=MAX_SUFFIX {
        let candidate = suffixed_filename(filename, n);
        let path = dir.join(&candidate);
        if !path.exists() {
            write_atomic(&path, content).map_err(|e| storage_err(&path, e))?;
            return Ok(Stored::Written {
                filename: candidate,
                path,
            });
        }
        if is_duplicate(&path, content).map_err(|e| storage_err(&path, e))? {
            return Ok(Stored::Duplicate {
                filename: candidate,
                path,
            });
        }
    }
    let path = dir.join(filename);
    Err(storage_err(
        &path,
        io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("no free suffix up to {MAX_SUFFIX}"),
        ),
    ))
}
