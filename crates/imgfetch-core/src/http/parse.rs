//! Parse HTTP response header lines into the head of the final response.

/// Headers of the final response that the pipeline cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseHead {
    /// `Content-Type` value if present.
    pub content_type: Option<String>,
}

/// Case-insensitive lookup of a header's value in raw `Name: value` lines.
/// The last occurrence wins.
fn header_value<'a>(lines: &'a [String], name: &str) -> Option<&'a str> {
    lines.iter().rev().find_map(|line| {
        let (n, v) = line.split_once(':')?;
        n.trim().eq_ignore_ascii_case(name).then(|| v.trim())
    })
}

/// Parse collected header lines into a [`ResponseHead`].
///
/// With redirects followed, libcurl hands over the headers of every hop; only
/// the block after the last status line belongs to the response whose body
/// was received.
pub(crate) fn parse_final_head(lines: &[String]) -> ResponseHead {
    let start = lines
        .iter()
        .rposition(|l| l.trim_start().starts_with("HTTP/"))
        .map(|i| i + 1)
        .unwrap_or(0);
    let final_block = &lines[start..];

    ResponseHead {
        content_type: header_value(final_block, "content-type").map(str::to_string),
    }
}
