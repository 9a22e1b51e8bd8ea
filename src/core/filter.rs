//! Composable message filters.
//!
//! A [`MessageFilter`] is a stateless predicate over a [`Message`]. Filters are
//! built by small constructor functions and combined with [`and_filter`]:
//!
//! | Constructor | Keeps a message when |
//! |-------------|----------------------|
//! | [`user_filter`] | `author` equals the name exactly |
//! | [`only_link_filter`] | `text` does not start with `<http` |
//! | [`and_filter`] | every inner filter keeps it |
//!
//! # Examples
//!
//! ```
//! use slackpick::core::filter::{and_filter, apply_filters, only_link_filter, user_filter};
//! use slackpick::Message;
//!
//! let messages = vec![
//!     Message::new("Alice", "hello"),
//!     Message::new("Alice", "<http://x.com>"),
//!     Message::new("Bob", "hi"),
//! ];
//!
//! let filter = and_filter([user_filter("Alice"), only_link_filter()]);
//! let kept = apply_filters(messages, &filter);
//!
//! assert_eq!(kept, vec![Message::new("Alice", "hello")]);
//! ```
//!
//! # Behavior Notes
//!
//! - Author matching is case-sensitive and does not trim
//! - Messages with no text are never treated as links
//! - [`and_filter`] stops at the first filter that rejects

use std::fmt;
use std::sync::Arc;

use crate::Message;

/// Prefix Slack puts in front of auto-linked URLs.
pub const DEFAULT_LINK_PREFIX: &str = "<http";

type Predicate = dyn Fn(&Message) -> bool + Send + Sync;

/// A reusable predicate over messages.
///
/// Cloning is cheap and clones share the same predicate.
#[derive(Clone)]
pub struct MessageFilter {
    predicate: Arc<Predicate>,
}

impl MessageFilter {
    /// Wraps a closure as a filter.
    ///
    /// ```
    /// use slackpick::core::filter::MessageFilter;
    /// use slackpick::Message;
    ///
    /// let short = MessageFilter::new(|m| m.text().is_some_and(|t| t.len() < 10));
    /// assert!(short.matches(&Message::new("Alice", "hi")));
    /// ```
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&Message) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
        }
    }

    /// A filter that keeps every message.
    pub fn always() -> Self {
        Self::new(|_| true)
    }

    /// Returns `true` if `msg` passes this filter.
    pub fn matches(&self, msg: &Message) -> bool {
        (self.predicate)(msg)
    }
}

impl Default for MessageFilter {
    fn default() -> Self {
        Self::always()
    }
}

impl fmt::Debug for MessageFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageFilter").finish_non_exhaustive()
    }
}

/// Keeps messages whose author is exactly `name`.
pub fn user_filter(name: impl Into<String>) -> MessageFilter {
    let name = name.into();
    MessageFilter::new(move |msg| msg.author == name)
}

/// Drops link-only messages, i.e. text starting with `<http`.
///
/// Messages without text are kept.
pub fn only_link_filter() -> MessageFilter {
    link_prefix_filter(DEFAULT_LINK_PREFIX)
}

/// Drops messages whose text starts with `prefix`.
pub fn link_prefix_filter(prefix: impl Into<String>) -> MessageFilter {
    let prefix = prefix.into();
    MessageFilter::new(move |msg| !msg.text().is_some_and(|text| text.starts_with(&prefix)))
}

/// Keeps messages that pass every filter in `filters`.
///
/// Evaluation runs in order and stops at the first rejection. With no filters
/// every message is kept.
pub fn and_filter<I>(filters: I) -> MessageFilter
where
    I: IntoIterator<Item = MessageFilter>,
{
    let filters: Vec<MessageFilter> = filters.into_iter().collect();
    MessageFilter::new(move |msg| filters.iter().all(|f| f.matches(msg)))
}

/// Filters a collection of messages, keeping their order.
pub fn apply_filters(messages: Vec<Message>, filter: &MessageFilter) -> Vec<Message> {
    messages.into_iter().filter(|msg| filter.matches(msg)).collect()
}

/// Builder for the usual author + link filter pipeline.
///
/// # Examples
///
/// ```
/// use slackpick::core::filter::FilterConfig;
/// use slackpick::Message;
///
/// let filter = FilterConfig::for_author("Alice").build();
///
/// assert!(filter.matches(&Message::new("Alice", "hello")));
/// assert!(!filter.matches(&Message::new("Alice", "<https://example.com>")));
/// assert!(!filter.matches(&Message::new("alice", "hello")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    /// Keep only messages from this author.
    pub author: Option<String>,

    /// Drop link-only messages.
    pub exclude_links: bool,

    /// Prefix that marks a link-only message.
    pub link_prefix: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            author: None,
            exclude_links: false,
            link_prefix: DEFAULT_LINK_PREFIX.to_string(),
        }
    }
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    ///
    /// No filters are active by default; all messages pass through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Author filter plus link exclusion.
    pub fn for_author(author: impl Into<String>) -> Self {
        Self::new().with_author(author).with_links_excluded(true)
    }

    /// Sets the author filter.
    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Enables or disables dropping link-only messages.
    #[must_use]
    pub fn with_links_excluded(mut self, exclude: bool) -> Self {
        self.exclude_links = exclude;
        self
    }

    /// Sets the prefix that marks a link-only message.
    #[must_use]
    pub fn with_link_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.link_prefix = prefix.into();
        self
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        self.author.is_some() || self.exclude_links
    }

    /// Composes the configured filters, author first.
    pub fn build(&self) -> MessageFilter {
        let mut filters = Vec::with_capacity(2);
        if let Some(author) = &self.author {
            filters.push(user_filter(author.clone()));
        }
        if self.exclude_links {
            filters.push(link_prefix_filter(self.link_prefix.clone()));
        }
        and_filter(filters)
    }
}
