//! Basename extraction from URL path.

/// Returns the text after the final `/` of the URL's path component.
///
/// Query string and fragment are not part of the path. A path ending in `/`
/// yields an empty basename, reported as `None`, as does an unparseable URL.
pub fn basename_from_url_path(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let basename = parsed.path().rsplit('/').next()?;
    if basename.is_empty() {
        return None;
    }
    Some(basename.to_string())
}
