//! Chat export parsers.
//!
//! Each parser implements the [`Parser`](crate::parser::Parser) trait.
//!
//! # Available Parsers
//!
//! - [`SlackParser`] - Parses Slack JSON exports
//!
//! # Example
//!
//! ```rust
//! use slackpick::parser::Parser;
//! use slackpick::parsers::create_parser;
//!
//! let parser = create_parser();
//! assert_eq!(parser.name(), "Slack");
//! ```

mod slack;

pub use slack::SlackParser;

use crate::parser::Parser;

/// Creates the default parser as a trait object.
pub fn create_parser() -> Box<dyn Parser> {
    Box::new(SlackParser::new())
}
