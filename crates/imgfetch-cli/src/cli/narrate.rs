//! Console narration: per-URL progress and status lines, banner, summary.

use imgfetch_core::batch::{BatchObserver, BatchReport};
use imgfetch_core::{FetchError, FetchOutcome};
use std::io::{self, Write};

pub const NO_URLS: &str = "✗ No URLs provided";

pub fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Welcome to imgfetch")?;
    writeln!(out, "A tool for mindfully collecting images from the web")?;
    writeln!(out, "Embodying Ubuntu: 'I am because we are'\n")
}

/// `1234567` → `1,234,567`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Status lines for one finished URL, glyph first.
pub fn outcome_lines(url: &str, outcome: &FetchOutcome) -> Vec<String> {
    match outcome {
        FetchOutcome::Saved {
            filename,
            path,
            bytes,
        } => vec![
            format!(
                "✓ Successfully fetched: {} ({} bytes)",
                filename,
                group_thousands(*bytes)
            ),
            format!("✓ Image saved to {}", path.display()),
        ],
        FetchOutcome::Duplicate { filename, .. } => {
            vec![format!("⚠ Image already exists (duplicate detected): {filename}")]
        }
        FetchOutcome::Kept { filename, .. } => vec![format!(
            "⚠ A different image is already saved as {filename}; kept the existing file"
        )],
        FetchOutcome::Failed(e) => vec![failure_line(url, e)],
    }
}

fn failure_line(url: &str, e: &FetchError) -> String {
    match e {
        FetchError::Timeout { .. } => format!("✗ Connection timeout: {url}"),
        FetchError::Connection { .. } => format!("✗ Connection failed: {url}"),
        FetchError::HttpStatus { status, .. } => format!("✗ HTTP error {status}: {url}"),
        FetchError::Request { source, .. } => format!("✗ Request error: {source} ({url})"),
        FetchError::InvalidContentType { .. } => {
            format!("✗ URL does not contain a valid image: {url}")
        }
        FetchError::Storage { path, source } => {
            format!("✗ Could not save {}: {source} ({url})", path.display())
        }
        FetchError::Unexpected { message, .. } => format!("✗ Unexpected error: {message} ({url})"),
    }
}

/// Summary line plus a closing message that depends on whether anything succeeded.
pub fn write_summary<W: Write>(out: &mut W, report: &BatchReport) -> io::Result<()> {
    writeln!(out, "\n{}", report.summary_line())?;
    if report.successes > 0 {
        writeln!(out, "\nConnection strengthened. Community enriched.")?;
        writeln!(out, "Ubuntu wisdom: Through sharing, we all grow stronger.")
    } else {
        writeln!(
            out,
            "\nNo images were fetched, but the attempt honors the Ubuntu spirit of trying."
        )
    }
}

/// Writes `[i/N] Connecting to: <url>` before and the status lines plus a
/// blank separator after each URL.
pub struct ConsoleNarrator<W: Write> {
    out: W,
}

impl<W: Write> ConsoleNarrator<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> BatchObserver for ConsoleNarrator<W> {
    fn on_start(&mut self, index: usize, total: usize, url: &str) {
        let _ = writeln!(self.out, "[{index}/{total}] Connecting to: {url}");
        let _ = self.out.flush();
    }

    fn on_finish(&mut self, _index: usize, _total: usize, url: &str, outcome: &FetchOutcome) {
        for line in outcome_lines(url, outcome) {
            let _ = writeln!(self.out, "{line}");
        }
        let _ = writeln!(self.out);
        let _ = self.out.flush();
    }
}
