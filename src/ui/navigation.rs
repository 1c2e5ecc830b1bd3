//! Shared navigation helpers for list-based Views
//!
//! [`ListCursor`] tracks selection and scroll of a flat row list. Views own
//! one and call it with their current row count.

/// Selection and scroll position of a row list
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ListCursor {
    pub selected: usize,
    pub scroll_offset: usize,
}

impl ListCursor {
    /// Move selection down by one, clamped to the last row
    pub fn next(&mut self, len: usize) {
        self.selected = self.selected.saturating_add(1).min(len.saturating_sub(1));
    }

    /// Move selection up by one
    pub fn prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn first(&mut self) {
        self.selected = 0;
        self.scroll_offset = 0;
    }

    pub fn last(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }

    /// Pull selection back inside `len` rows after the list shrank
    pub fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Scroll offset keeping `selected` visible within `visible_count` rows.
    ///
    /// If `visible_count` is 0, returns the stored offset unchanged.
    pub fn scroll_for(&self, visible_count: usize) -> usize {
        if visible_count == 0 {
            return self.scroll_offset;
        }
        if self.selected < self.scroll_offset {
            self.selected
        } else if self.selected >= self.scroll_offset + visible_count {
            self.selected - visible_count + 1
        } else {
            self.scroll_offset
        }
    }
}
