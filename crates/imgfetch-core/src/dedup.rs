//! Duplicate detection: is new content byte-identical to the stored file?

use crate::checksum::{sha256_bytes, sha256_path};
use std::io;
use std::path::Path;

/// Returns `Ok(false)` if nothing exists at `path`, otherwise compares the
/// SHA-256 fingerprint of the stored file with that of `content`.
pub fn is_duplicate(path: &Path, content: &[u8]) -> io::Result<bool> {
    let meta = match std::fs::metadata(path) {
        Ok(m) => m,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e),
    };
    // Sizes differ: cannot be identical.
    if meta.is_file() && meta.len() != content.len() as u64 {
        return Ok(false);
    }
    let existing = sha256_path(path).map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    Ok(existing == sha256_bytes(content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_path_is_not_duplicate() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!is_duplicate(&dir.path().join("cat.png"), b"abc").unwrap());
    }

    #[test]
    fn identical_bytes_are_duplicate() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("cat.png");
        std::fs::write(&p, b"\x89PNG\r\n\x1a\nbody").unwrap();
        assert!(is_duplicate(&p, b"\x89PNG\r\n\x1a\nbody").unwrap());
    }

    #[test]
    fn one_byte_difference_is_not_duplicate() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("cat.png");
        std::fs::write(&p, b"abcdef").unwrap();
        assert!(!is_duplicate(&p, b"abcdeg").unwrap());
        assert!(!is_duplicate(&p, b"abcdefg").unwrap());
    }

    #[test]
    fn empty_file_and_empty_content_are_duplicate() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("empty.gif");
        std::fs::write(&p, b"").unwrap();
        assert!(is_duplicate(&p, b"").unwrap());
    }

    #[test]
    fn directory_at_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("cat.png");
        std::fs::create_dir(&sub).unwrap();
        assert!(is_duplicate(&sub, b"abc").is_err());
    }
}
