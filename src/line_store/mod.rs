//! Line store
//!
//! Ordered, 1-indexed sequence of text lines. Positions are not identities:
//! inserting or deleting a line renumbers everything below it, and valid
//! positions are always the contiguous range `1..=len()`.
//!
//! Lines live in a contiguous `Vec<Line>` addressed by `position - 1`, so
//! `get_at` is O(1) and insert/delete in the middle are O(n).

use crate::constants::errors::{
    INVALID_LINE, INVALID_RANGE, MSG_INVALID_DELETE_LINE, MSG_INVALID_DELETE_RANGE,
    MSG_INVALID_LIST_LINE, MSG_INVALID_LIST_RANGE,
};
use crate::error::{EditError, ErrorType, Result};
use std::slice;

mod line;

pub use line::Line;

/// Ordered sequence of lines addressed by 1-based position
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineStore {
    lines: Vec<Line>,
}

/// Iterator over `(position, text)` pairs in ascending position order
#[derive(Debug, Clone)]
pub struct Listing<'a> {
    next_pos: usize,
    inner: slice::Iter<'a, Line>,
}

impl<'a> Iterator for Listing<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.inner.next()?;
        let pos = self.next_pos;
        self.next_pos += 1;
        Some((pos, line.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Listing<'_> {}

impl LineStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `lines` in order
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Line>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of lines
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Insert `text` so that it becomes line `pos`.
    ///
    /// `pos <= 1` inserts at the front. A position past the end is clamped
    /// to an append. Returns the position the line landed at.
    pub fn insert_at(&mut self, text: impl Into<Line>, pos: usize) -> usize {
        let index = pos.saturating_sub(1).min(self.lines.len());
        self.lines.insert(index, text.into());
        tracing::trace!(requested = pos, actual = index + 1, "insert line");
        index + 1
    }

    /// Remove line `pos` and return its text
    pub fn delete_at(&mut self, pos: usize) -> Result<String> {
        if !self.contains(pos) {
            return Err(EditError::new(
                ErrorType::Range,
                INVALID_LINE,
                MSG_INVALID_DELETE_LINE,
            ));
        }
        tracing::trace!(pos, "delete line");
        Ok(self.lines.remove(pos - 1).into_string())
    }

    /// Remove lines `start..=end` and return them in order
    pub fn delete_range(&mut self, start: usize, end: usize) -> Result<Vec<String>> {
        if !self.contains_range(start, end) {
            return Err(EditError::new(
                ErrorType::Range,
                INVALID_RANGE,
                MSG_INVALID_DELETE_RANGE,
            ));
        }
        tracing::trace!(start, end, "delete range");
        Ok(self
            .lines
            .drain(start - 1..end)
            .map(Line::into_string)
            .collect())
    }

    /// Text of line `pos`, or `None` when it does not exist
    #[must_use]
    pub fn get_at(&self, pos: usize) -> Option<&str> {
        if self.contains(pos) {
            Some(self.lines[pos - 1].as_str())
        } else {
            None
        }
    }

    /// Listing of the single line `pos`
    pub fn list_at(&self, pos: usize) -> Result<Listing<'_>> {
        if !self.contains(pos) {
            return Err(EditError::new(
                ErrorType::Range,
                INVALID_LINE,
                MSG_INVALID_LIST_LINE,
            ));
        }
        Ok(self.listing(pos, pos))
    }

    /// Listing of lines `start..=end`. Nothing is listed if any bound is invalid.
    pub fn list_range(&self, start: usize, end: usize) -> Result<Listing<'_>> {
        if !self.contains_range(start, end) {
            return Err(EditError::new(
                ErrorType::Range,
                INVALID_RANGE,
                MSG_INVALID_LIST_RANGE,
            ));
        }
        Ok(self.listing(start, end))
    }

    /// Listing of every line; empty for an empty store
    #[must_use]
    pub fn list_all(&self) -> Listing<'_> {
        Listing {
            next_pos: 1,
            inner: self.lines.iter(),
        }
    }

    /// Iterate over line texts top to bottom
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.lines.iter().map(Line::as_str)
    }

    /// Iterate over the stored lines top to bottom
    pub fn lines(&self) -> slice::Iter<'_, Line> {
        self.lines.iter()
    }

    /// Whether `pos` names an existing line
    #[must_use]
    pub fn contains(&self, pos: usize) -> bool {
        (1..=self.lines.len()).contains(&pos)
    }

    /// Whether `start..=end` is a non-empty range of existing lines
    #[must_use]
    pub fn contains_range(&self, start: usize, end: usize) -> bool {
        start >= 1 && start <= end && end <= self.lines.len()
    }

    fn listing(&self, start: usize, end: usize) -> Listing<'_> {
        Listing {
            next_pos: start,
            inner: self.lines[start - 1..end].iter(),
        }
    }
}
