//! Whole-file writer: temp file, fsync, atomic rename.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use super::temp_path;

/// Write `data` to `final_path` via a `.part` sibling renamed into place, so a
/// reader never observes a half-written image. Replaces any existing file.
pub fn write_atomic(final_path: &Path, data: &[u8]) -> io::Result<()> {
    let tmp = temp_path(final_path);
    let result = (|| {
        let mut f = File::create(&tmp)?;
        f.write_all(data)?;
        f.sync_all()?;
        drop(f);
        std::fs::rename(&tmp, final_path)
    })();
    if result.is_err() {
        let _ = std::fs::remove_file(&tmp);
    }
    result
}
