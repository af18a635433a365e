//! `imgfetch fetch <url>...` – fetch URLs given on the command line.

use anyhow::Result;
use imgfetch_core::batch::{prepare_dir, run_batch, BatchReport};
use imgfetch_core::config::FetchConfig;
use imgfetch_core::Fetcher;
use std::io::{self, Write};
use std::path::Path;

use crate::cli::narrate::{self, ConsoleNarrator};
use crate::cli::TargetArgs;

pub fn run_fetch(cfg: &FetchConfig, target: &TargetArgs, urls: &[String]) -> Result<()> {
    let urls: Vec<String> = urls
        .iter()
        .map(|u| u.trim())
        .filter(|u| !u.is_empty())
        .map(str::to_string)
        .collect();
    let (dir, options) = target.resolve(cfg);
    prepare_dir(&dir)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if urls.is_empty() {
        writeln!(out, "{}", narrate::NO_URLS)?;
        return Ok(());
    }
    fetch_all(&Fetcher::new(options), &urls, &dir, &mut out)?;
    Ok(())
}

/// Run the batch with per-URL narration on `out`, then print the summary.
pub(crate) fn fetch_all<W: Write>(
    fetcher: &Fetcher,
    urls: &[String],
    dir: &Path,
    out: &mut W,
) -> io::Result<BatchReport> {
    writeln!(out, "Processing {} URL(s)\n", urls.len())?;
    let report = {
        let mut narrator = ConsoleNarrator::new(&mut *out);
        run_batch(fetcher, urls, dir, &mut narrator)
    };
    narrate::write_summary(out, &report)?;
    Ok(report)
}
