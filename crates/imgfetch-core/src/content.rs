//! Content-type validation for fetched payloads.
//!
//! Only the declared `Content-Type` header is consulted; the body bytes are
//! never sniffed.

/// Accepted image MIME types, matched as substrings of the lowercased header.
pub const ALLOWED_IMAGE_TYPES: [&str; 5] = [
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/gif",
    "image/webp",
];

/// True if `content_type` names one of the accepted image types.
/// A missing header is never valid.
pub fn is_image_content_type(content_type: Option<&str>) -> bool {
    let Some(value) = content_type else {
        return false;
    };
    let value = value.to_ascii_lowercase();
    ALLOWED_IMAGE_TYPES.iter().any(|t| value.contains(t))
}
