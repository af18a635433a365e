//! `imgfetch` / `imgfetch prompt` – interactive URL entry.

use anyhow::Result;
use imgfetch_core::batch::{prepare_dir, split_url_list};
use imgfetch_core::config::FetchConfig;
use imgfetch_core::Fetcher;
use std::io::{self, BufRead, Write};

use super::fetch::fetch_all;
use crate::cli::narrate;
use crate::cli::TargetArgs;

pub fn run_prompt(cfg: &FetchConfig, target: &TargetArgs) -> Result<()> {
    let (dir, options) = target.resolve(cfg);
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    narrate::write_banner(&mut out)?;
    prepare_dir(&dir)?;
    writeln!(out, "{} directory ready", dir.display())?;

    let urls = read_urls(&mut input, &mut out)?;
    if urls.is_empty() {
        writeln!(out, "{}", narrate::NO_URLS)?;
        return Ok(());
    }

    writeln!(out, "\nConnecting to the global community...")?;
    fetch_all(&Fetcher::new(options), &urls, &dir, &mut out)?;
    Ok(())
}

/// Show the two entry modes and read URLs for the chosen one.
/// Anything other than `2` selects single-URL mode; blank entries are dropped.
pub(crate) fn read_urls<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<Vec<String>> {
    writeln!(out, "\nOptions:")?;
    writeln!(out, "1. Enter a single image URL")?;
    writeln!(out, "2. Enter multiple URLs (separated by commas)")?;

    let choice = ask(input, out, "\nChoose option (1 or 2): ")?;
    if choice.trim() == "2" {
        let line = ask(input, out, "\nPlease enter image URLs (separated by commas): ")?;
        return Ok(split_url_list(&line));
    }

    let line = ask(input, out, "\nPlease enter the image URL: ")?;
    let url = line.trim();
    if url.is_empty() {
        Ok(Vec::new())
    } else {
        Ok(vec![url.to_string()])
    }
}

/// Print `prompt` and read one line; EOF reads as empty.
fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> io::Result<String> {
    write!(out, "{prompt}")?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(stdin: &str) -> (Vec<String>, String) {
        let mut input = Cursor::new(stdin.as_bytes().to_vec());
        let mut out = Vec::new();
        let urls = read_urls(&mut input, &mut out).unwrap();
        (urls, String::from_utf8(out).unwrap())
    }

    #[test]
    fn single_url_mode() {
        let (urls, out) = run("1\n  https://example.com/cat.png  \n");
        assert_eq!(urls, vec!["https://example.com/cat.png"]);
        assert!(out.contains("Choose option (1 or 2): "));
        assert!(out.contains("Please enter the image URL: "));
    }

    #[test]
    fn multi_url_mode_filters_blanks() {
        let (urls, out) = run("2\nhttps://a.example/1.png, ,https://b.example/2.jpg,\n");
        assert_eq!(urls, vec!["https://a.example/1.png", "https://b.example/2.jpg"]);
        assert!(out.contains("separated by commas): "));
    }

    #[test]
    fn unknown_choice_falls_back_to_single_mode() {
        let (urls, _) = run("7\nhttps://example.com/dog.jpg\n");
        assert_eq!(urls, vec!["https://example.com/dog.jpg"]);
    }

    #[test]
    fn blank_entry_yields_no_urls() {
        let (urls, _) = run("1\n   \n");
        assert!(urls.is_empty());
        let (urls, _) = run("2\n , , \n");
        assert!(urls.is_empty());
    }

    #[test]
    fn eof_yields_no_urls() {
        let (urls, _) = run("");
        assert!(urls.is_empty());
    }
}
