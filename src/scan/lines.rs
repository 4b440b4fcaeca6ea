//! Lossy line iteration shared by the scanner and the match-file tally.

use std::io::{self, BufRead};

/// A newline-delimited line reader that replaces invalid UTF-8 instead of
/// failing, matching the replacement semantics of the data this tool was
/// built for.
pub(crate) struct LossyLines<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> LossyLines<R> {
    pub(crate) const fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }

    /// Reads the next line, with the trailing line ending removed. Returns
    /// `None` at end of input.
    pub(crate) fn next_line(&mut self) -> io::Result<Option<std::borrow::Cow<'_, str>>> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
            if self.buf.last() == Some(&b'\r') {
                self.buf.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&self.buf)))
    }
}

/// Counts the newline-delimited lines readable from `reader`.
pub(crate) fn count_lines<R: BufRead>(reader: R) -> io::Result<u64> {
    let mut lines = LossyLines::new(reader);
    let mut count = 0;
    while lines.next_line()?.is_some() {
        count += 1;
    }
    Ok(count)
}
