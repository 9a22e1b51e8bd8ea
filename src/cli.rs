//! Command-line interface definition using clap.
//!
//! The interface is positional only:
//!
//! ```text
//! slackpick <AUTHOR> <FILE>...
//! ```
//!
//! There are no flags, not even `--help`; any argument problem is reported as
//! [`SlackpickError::Usage`].

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::error::{Result, SlackpickError};

/// Print one author's Slack messages, skipping link-only posts.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "slackpick")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Args {
    /// Exact display name of the author to keep
    #[arg(value_name = "AUTHOR", allow_hyphen_values = true)]
    pub author: String,

    /// Slack export files (JSON arrays), read in order
    #[arg(value_name = "FILE", required = true, allow_hyphen_values = true)]
    pub files: Vec<PathBuf>,
}

impl Args {
    /// Parses arguments from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_iter_safe(std::env::args_os())
    }

    /// Parses arguments from `iter`, whose first item is the program name.
    ///
    /// # Example
    ///
    /// ```rust
    /// use slackpick::cli::Args;
    ///
    /// let args = Args::from_iter_safe(["slackpick", "Alice", "a.json", "b.json"])?;
    /// assert_eq!(args.author, "Alice");
    /// assert_eq!(args.files.len(), 2);
    /// # Ok::<(), slackpick::SlackpickError>(())
    /// ```
    pub fn from_iter_safe<I, T>(iter: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(iter).map_err(|e| {
            let rendered = e.to_string();
            let message = rendered.strip_prefix("error: ").unwrap_or(&rendered);
            SlackpickError::usage(message.trim_end())
        })
    }
}
