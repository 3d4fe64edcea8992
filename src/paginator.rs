//! Paginated views over a frequency table.
//!
//! ## Sorting
//!
//! Entries are ordered by descending count. Equal counts are ordered by
//! ascending word so the same table always paginates the same way.
//!
//! ```text
//! { "fox": 2, "the": 5, "dog": 2, "a": 1 }, page size 2
//!
//! sorted: [the:5, dog:2, fox:2, a:1]
//! page 0: [the:5, dog:2]   prev: no   next: yes
//! page 1: [fox:2, a:1]     prev: yes  next: no
//! ```
//!
//! ## Navigation
//!
//! The [`Paginator`] is a single-writer cursor. Its state is just the
//! installed table and the current page index:
//!
//! | Event | Effect |
//! |-------|--------|
//! | `install_table` | replace table, page index = 0 |
//! | `advance(Next)` | page index + 1 if a next page exists |
//! | `advance(Previous)` | page index - 1 if a previous page exists |
//!
//! Invalid moves are no-ops, so the cursor can never leave the table.

use tracing::debug;

use crate::{PageDescriptor, PageSize, WordCount, WordFrequencyTable};

/// Navigation direction for [`Paginator::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards higher page indices.
    Next,
    /// Towards page 0.
    Previous,
}

/// Compute page `page_index` of `table`.
///
/// An index past the last page is clamped to the last page (or page 0 for an
/// empty table).
///
/// ```rust
/// use wordtally::{compute_page, count_unique_words, PageSize};
///
/// let table = count_unique_words("b a b c a b");
/// let page = compute_page(&table, PageSize::new(2).unwrap(), 0);
///
/// assert_eq!(page.total_pages, 2);
/// assert_eq!(page.items[0].word, "b");
/// assert!(page.can_go_to_next);
/// assert!(!page.can_go_to_previous);
/// ```
#[must_use]
pub fn compute_page(
    table: &WordFrequencyTable,
    page_size: PageSize,
    page_index: usize,
) -> PageDescriptor {
    slice_page(&table.sorted(), page_size, page_index)
}

fn slice_page(sorted: &[WordCount], page_size: PageSize, page_index: usize) -> PageDescriptor {
    let total = sorted.len();
    let total_pages = page_size.page_count(total);
    let current_page = page_index.min(total_pages.saturating_sub(1));

    PageDescriptor {
        total_unique_words: total,
        total_pages,
        current_page,
        items: sorted[page_size.bounds(current_page, total)].to_vec(),
        can_go_to_previous: current_page > 0,
        can_go_to_next: current_page + 1 < total_pages,
    }
}

/// Single-writer page cursor over an installed frequency table.
///
/// ## Example
///
/// ```rust
/// use wordtally::{count_unique_words, Direction, PageSize, Paginator};
///
/// let mut paginator = Paginator::new(PageSize::new(2).unwrap());
/// paginator.install_table(count_unique_words("one two three four five"));
///
/// assert_eq!(paginator.current_page().total_pages, 3);
/// assert!(!paginator.advance(Direction::Previous));
/// assert!(paginator.advance(Direction::Next));
/// assert_eq!(paginator.current_page().current_page, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Paginator {
    page_size: PageSize,
    // Sorted once per installed table; pages are slices of this.
    entries: Vec<WordCount>,
    current_page: usize,
}

impl Paginator {
    /// Create a paginator with an empty table on page 0.
    #[must_use]
    pub fn new(page_size: PageSize) -> Self {
        Self {
            page_size,
            entries: Vec::new(),
            current_page: 0,
        }
    }

    /// The configured page size.
    #[must_use]
    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Zero-based index of the visible page.
    #[must_use]
    pub fn page_index(&self) -> usize {
        self.current_page
    }

    /// Number of pages for the installed table.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.page_size.page_count(self.entries.len())
    }

    /// Replace the table and reset to page 0.
    pub fn install_table(&mut self, table: WordFrequencyTable) {
        self.entries = table.sorted();
        self.current_page = 0;
        debug!(
            unique_words = self.entries.len(),
            total_pages = self.total_pages(),
            "installed frequency table"
        );
    }

    /// The descriptor for the visible page.
    #[must_use]
    pub fn current_page(&self) -> PageDescriptor {
        slice_page(&self.entries, self.page_size, self.current_page)
    }

    /// Whether a previous page exists.
    #[must_use]
    pub fn can_go_to_previous(&self) -> bool {
        self.current_page > 0
    }

    /// Whether a next page exists.
    #[must_use]
    pub fn can_go_to_next(&self) -> bool {
        self.current_page + 1 < self.total_pages()
    }

    /// Move one page in `direction`.
    ///
    /// Returns `false` (and leaves the cursor alone) when no page exists in
    /// that direction.
    pub fn advance(&mut self, direction: Direction) -> bool {
        let moved = match direction {
            Direction::Next if self.can_go_to_next() => {
                self.current_page += 1;
                true
            }
            Direction::Previous if self.can_go_to_previous() => {
                self.current_page -= 1;
                true
            }
            _ => false,
        };

        debug!(
            ?direction,
            moved,
            page = self.current_page,
            total_pages = self.total_pages(),
            "page navigation"
        );
        moved
    }
}
