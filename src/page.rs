//! The PageDescriptor type: one display page of a frequency table.

use crate::WordCount;

/// A page of a sorted frequency table plus its navigation state.
///
/// Descriptors are derived views. They are recomputed whenever the table or
/// the page index changes and are never stored as the source of truth.
///
/// ```text
/// 45 unique words, page size 20, page 2
///
/// total_unique_words: 45
/// total_pages:        3
/// current_page:       2          (0-based)
/// items:              entries [40..45) by descending count
/// can_go_to_previous: true
/// can_go_to_next:     false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageDescriptor {
    /// Number of unique words in the whole table.
    pub total_unique_words: usize,
    /// Number of pages; zero for an empty table.
    pub total_pages: usize,
    /// Zero-based index of this page.
    pub current_page: usize,
    /// The rows on this page, by descending count then ascending word.
    pub items: Vec<WordCount>,
    /// Whether a previous page exists.
    pub can_go_to_previous: bool,
    /// Whether a next page exists.
    pub can_go_to_next: bool,
}

impl PageDescriptor {
    /// Number of rows on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether this page has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the table spans more than one page.
    ///
    /// Navigation controls are only worth showing when this holds.
    #[must_use]
    pub fn is_paginated(&self) -> bool {
        self.total_pages > 1
    }
}

impl std::fmt::Display for PageDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Page {} of {} ({} unique words)",
            self.current_page + 1,
            self.total_pages.max(1),
            self.total_unique_words
        )
    }
}
