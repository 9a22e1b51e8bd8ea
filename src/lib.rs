//! # Slackpick
//!
//! Pick one author's messages out of Slack JSON exports, skipping messages
//! that are nothing but an auto-linked URL.
//!
//! ## Overview
//!
//! A run has three stages:
//! 1. **Load**: every export file is parsed as a JSON array and each record is
//!    normalized into a [`Message`]. Files are concatenated in the order given.
//! 2. **Filter**: a single [`MessageFilter`](crate::core::MessageFilter) is composed
//!    from [`user_filter`](crate::core::user_filter) and
//!    [`only_link_filter`](crate::core::only_link_filter) with
//!    [`and_filter`](crate::core::and_filter).
//! 3. **Print**: the text of each kept message is written on its own line.
//!
//! Loading finishes before filtering starts, so an unreadable or invalid file
//! produces an error and no output at all.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use slackpick::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let lines = run_files("Alice", ["general/2024-01-15.json"])?;
//!     write_lines(&mut std::io::stdout().lock(), &lines)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`message`] — [`Message`], the normalized record
//! - [`parsing`] — field extraction with documented fallbacks
//! - [`parser`] — the [`Parser`](parser::Parser) trait
//! - [`parsers`] — [`SlackParser`](parsers::SlackParser)
//! - [`config`] — [`SlackConfig`](config::SlackConfig)
//! - [`core`] — loading, filters, the run pipeline, and output
//! - [`cli`] — clap argument definition (feature `cli`)
//! - [`error`] — [`SlackpickError`], [`Result`]
//! - [`prelude`] — convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod message;
pub mod parser;
pub mod parsers;
pub mod parsing;

pub use error::{Result, SlackpickError};
pub use message::Message;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use slackpick::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Message;

    pub use crate::error::{Result, SlackpickError};

    pub use crate::parser::Parser;
    pub use crate::parsers::SlackParser;

    pub use crate::config::SlackConfig;

    pub use crate::core::filter::{
        FilterConfig, MessageFilter, and_filter, apply_filters, only_link_filter, user_filter,
    };
    pub use crate::core::loader::load_exports;
    pub use crate::core::output::write_lines;
    pub use crate::core::runner::{run, run_files};
}
