//! CLI for imgfetch.

mod commands;
mod narrate;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use imgfetch_core::config::{self, CollisionPolicy, FetchConfig};
use imgfetch_core::FetcherOptions;
use std::path::PathBuf;

use commands::{run_checksum, run_completions, run_fetch, run_prompt};

/// Top-level CLI. Without a subcommand the interactive prompt runs.
#[derive(Debug, Parser)]
#[command(name = "imgfetch")]
#[command(about = "imgfetch: fetch images from URLs into a local folder, skipping duplicates", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

/// Where to save and how to treat name collisions; overrides config.toml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct TargetArgs {
    /// Directory to save images into (created if missing).
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// When a derived filename already holds a different image: overwrite, skip or suffix.
    #[arg(long, value_name = "POLICY")]
    pub on_collision: Option<CollisionPolicy>,
}

impl TargetArgs {
    /// Output directory and fetcher options after applying flags over `cfg`.
    pub fn resolve(&self, cfg: &FetchConfig) -> (PathBuf, FetcherOptions) {
        let dir = self.dir.clone().unwrap_or_else(|| cfg.output_dir.clone());
        let mut options = FetcherOptions::from(cfg);
        if let Some(policy) = self.on_collision {
            options.on_collision = policy;
        }
        (dir, options)
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Ask for one URL or a comma-separated list, then fetch them (default).
    Prompt {
        #[command(flatten)]
        target: TargetArgs,
    },

    /// Fetch the given image URLs without prompting.
    Fetch {
        /// Image URLs, fetched in the order given.
        #[arg(required = true, value_name = "URL")]
        urls: Vec<String>,

        #[command(flatten)]
        target: TargetArgs,
    },

    /// Print the SHA-256 fingerprint used for duplicate detection of a file.
    Checksum {
        /// Path to the file.
        path: PathBuf,
    },

    /// Print shell completions to stdout.
    Completions {
        /// Target shell.
        shell: clap_complete::Shell,
    },
}

fn load_config() -> FetchConfig {
    match config::load_or_init() {
        Ok(cfg) => {
            tracing::debug!("loaded config: {:?}", cfg);
            cfg
        }
        Err(e) => {
            tracing::warn!("config unavailable, using defaults: {:#}", e);
            FetchConfig::default()
        }
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let command = cli.command.unwrap_or(CliCommand::Prompt {
            target: TargetArgs::default(),
        });

        match command {
            CliCommand::Prompt { target } => run_prompt(&load_config(), &target)?,
            CliCommand::Fetch { urls, target } => run_fetch(&load_config(), &target, &urls)?,
            CliCommand::Checksum { path } => run_checksum(&path)?,
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
