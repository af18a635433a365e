//! URL modeling and filename derivation.
//!
//! The local filename is the basename of the URL path when it looks like a
//! filename (has an extension separator); otherwise a stable name is
//! generated from a digest of the URL itself.

mod path;

pub use path::basename_from_url_path;

use crate::checksum::sha256_bytes;

/// Number of hex characters of the URL digest used in generated names.
const DIGEST_PREFIX_LEN: usize = 8;

/// Derives the local filename for an image fetched from `url`.
///
/// Deterministic: the same URL always yields the same name. No sanitization
/// beyond URL parsing is applied and no collision counter is added.
///
/// # Examples
///
/// - `derive_filename("https://example.com/pics/cat.png")` → `"cat.png"`
/// - `derive_filename("https://example.com/")` → `"image_<8 hex>.jpg"`
pub fn derive_filename(url: &str) -> String {
    match basename_from_url_path(url) {
        Some(name) if name.contains('.') => name,
        _ => generated_filename(url),
    }
}

/// `image_<8 hex>.jpg`, the hex taken from the SHA-256 of the URL string.
pub fn generated_filename(url: &str) -> String {
    let digest = sha256_bytes(url.as_bytes());
    format!("image_{}.jpg", &digest[..DIGEST_PREFIX_LEN])
}
