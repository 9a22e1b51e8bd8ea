//! Plain-text output: one message text per line, nothing else.

use std::io::{self, Write};

use crate::Message;
use crate::error::Result;

/// Converts messages to their output lines.
pub fn to_lines(messages: &[Message]) -> Vec<String> {
    messages.iter().map(ToString::to_string).collect()
}

/// Writes each line followed by `\n`, then flushes.
///
/// A reader that goes away early (`slackpick ... | head`) ends the output
/// normally; any other write failure is an error.
///
/// # Example
///
/// ```
/// use slackpick::core::write_lines;
///
/// let mut out = Vec::new();
/// write_lines(&mut out, ["hello", "world"])?;
/// assert_eq!(out, b"hello\nworld\n");
/// # Ok::<(), slackpick::SlackpickError>(())
/// ```
pub fn write_lines<W, I, S>(writer: &mut W, lines: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    match write_all_lines(writer, lines) {
        Err(e) if e.kind() != io::ErrorKind::BrokenPipe => Err(e.into()),
        _ => Ok(()),
    }
}

fn write_all_lines<W, I, S>(writer: &mut W, lines: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for line in lines {
        writeln!(writer, "{}", line.as_ref())?;
    }
    writer.flush()
}
