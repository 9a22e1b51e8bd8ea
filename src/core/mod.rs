//! Core processing logic for slackpick.
//!
//! This module contains:
//! - [`loader`] - Reading export files into one ordered message sequence
//! - [`filter`] - Composable message filters
//! - [`runner`] - The load, filter, print pipeline
//! - [`output`] - Plain-text line output
//!
//! # Quick Start
//!
//! ```rust
//! use slackpick::core::{
//!     FilterConfig, and_filter, apply_filters, load_exports, only_link_filter, run,
//!     run_files, user_filter, write_lines,
//! };
//! ```

pub mod filter;
pub mod loader;
pub mod output;
pub mod runner;

pub use filter::{
    FilterConfig, MessageFilter, and_filter, apply_filters, link_prefix_filter, only_link_filter,
    user_filter,
};
pub use loader::{load_contents, load_exports, load_exports_with};
pub use output::{to_lines, write_lines};
pub use runner::{run, run_files, select};

pub use crate::Message;
