//! The load, filter, print pipeline.
//!
//! [`run`] is pure: it takes export contents and returns output lines.
//! [`run_files`] adds file reading on top of it. Both fully load every export
//! before filtering, so a failing file means no lines at all.

use std::path::Path;

use tracing::debug;

use crate::Message;
use crate::core::filter::{FilterConfig, apply_filters};
use crate::core::loader::{load_contents, load_exports};
use crate::core::output::to_lines;
use crate::error::Result;
use crate::parsers::SlackParser;

/// Keeps the messages `config` accepts and logs the counts.
pub fn select(messages: Vec<Message>, config: &FilterConfig) -> Vec<Message> {
    let total = messages.len();
    let selected = apply_filters(messages, &config.build());
    debug!(total, selected = selected.len(), "filtered messages");
    selected
}

/// Returns the text of every non-link message by `author`, in input order.
///
/// # Example
///
/// ```
/// use slackpick::core::run;
///
/// let export = r#"[
///     {"user_profile": {"display_name": "Alice"}, "text": "hello"},
///     {"user_profile": {"display_name": "Alice"}, "text": "<http://x.com>"},
///     {"user_profile": {"display_name": "Bob"}, "text": "hi"}
/// ]"#;
///
/// assert_eq!(run("Alice", [export])?, vec!["hello".to_string()]);
/// # Ok::<(), slackpick::SlackpickError>(())
/// ```
pub fn run<I, S>(author: &str, contents: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let messages = load_contents(&SlackParser::new(), contents)?;
    let selected = select(messages, &FilterConfig::for_author(author));
    Ok(to_lines(&selected))
}

/// Like [`run`], reading each export from `paths`.
pub fn run_files<I, P>(author: &str, paths: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let messages = load_exports(paths)?;
    let selected = select(messages, &FilterConfig::for_author(author));
    Ok(to_lines(&selected))
}
