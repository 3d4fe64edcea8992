//! Page size configuration.
//!
//! ## The Problem
//!
//! A frequency table for a real web page easily holds thousands of unique
//! words. Rendering all of them at once is useless, so the table is shown a
//! page at a time. The page size is fixed for the lifetime of a paginator and
//! must be positive: a zero-sized page would make every table "infinitely"
//! long.
//!
//! ```text
//! 45 unique words, page size 20
//!
//! Page 0: [0..20)
//! Page 1: [20..40)
//! Page 2: [40..45)   <- last page may be short
//! ```

use std::ops::Range;

/// Number of frequency-table entries shown per page.
///
/// # Examples
///
/// ```rust
/// use wordtally::PageSize;
///
/// let size = PageSize::default();
/// assert_eq!(size.get(), 20);
///
/// let size = PageSize::new(20).unwrap();
/// assert_eq!(size.page_count(45), 3);
/// assert_eq!(size.bounds(2, 45), 40..45);
///
/// assert!(PageSize::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageSize(usize);

impl PageSize {
    /// The page size used when none is configured.
    pub const DEFAULT: Self = Self(20);

    /// Create a page size.
    ///
    /// # Errors
    ///
    /// Returns an error if `size == 0`.
    pub const fn new(size: usize) -> Result<Self, PageSizeError> {
        if size == 0 {
            Err(PageSizeError::Zero)
        } else {
            Ok(Self(size))
        }
    }

    /// The number of entries per page.
    #[must_use]
    pub const fn get(&self) -> usize {
        self.0
    }

    /// Number of pages needed for `total` entries.
    ///
    /// Zero entries means zero pages, not one empty page.
    #[must_use]
    pub const fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.0)
    }

    /// Entry positions covered by page `index` of a `total`-entry table.
    ///
    /// Out-of-range pages yield an empty range at `total`.
    #[must_use]
    pub fn bounds(&self, index: usize, total: usize) -> Range<usize> {
        let start = index.saturating_mul(self.0).min(total);
        let end = start.saturating_add(self.0).min(total);
        start..end
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<usize> for PageSize {
    type Error = PageSizeError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> Self {
        size.0
    }
}

/// Error when configuring a page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PageSizeError {
    /// Page size must be > 0.
    #[error("page size must be > 0")]
    Zero,
}
