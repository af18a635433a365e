//! CLI command handlers, one per file.

mod checksum;
mod completions;
mod fetch;
mod prompt;

pub use checksum::run_checksum;
pub use completions::run_completions;
pub use fetch::run_fetch;
pub use prompt::run_prompt;
