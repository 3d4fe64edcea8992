//! Presentation state for one analysis screen.
//!
//! A [`Session`] is the single state object a UI renders from. It changes
//! only through its event handlers:
//!
//! | Event | Effect |
//! |-------|--------|
//! | `begin_load` | loading on, load button hidden, error cleared |
//! | `fail_load` | loading off, error set, load button shown (retry) |
//! | `set_analysis_result` | results stored, table installed on page 0 |
//! | `advance` | paginator moves one page if it can |
//! | `toggle_section` | expand or collapse a result section |
//!
//! [`Session::load`] chains the first three around a [`ContentSource`].
//!
//! Fetch failures and lookup failures are tracked separately. A document
//! too short for the fixed-position lookup is still a successful load; only
//! that one section reports "not available".

use std::collections::BTreeSet;

use tracing::info;

use crate::{
    fetch_and_analyze, Analysis, CharacterSample, ContentSource, Direction, Error, PageDescriptor,
    PageSize, Paginator, Result, Stride,
};

/// Shown in place of a character result that does not exist.
pub const NOT_AVAILABLE: &str = "not available";

/// A collapsible section of the result view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Section {
    /// The every-nth-character sample.
    Sample,
    /// The paginated word-count table.
    WordCount,
}

/// State container for the analysis screen.
///
/// ## Example
///
/// ```rust
/// use wordtally::{Direction, PageSize, Section, Session};
///
/// let source = |_: &str| -> wordtally::Result<String> {
///     Ok("Exactly15Chars! and then some more words".to_string())
/// };
///
/// let mut session = Session::new(PageSize::new(2).unwrap());
/// session.load(&source, "https://example.com");
///
/// assert!(!session.is_loading());
/// assert_eq!(session.nth_character_display(), "!");
/// assert!(session.advance(Direction::Next));
///
/// session.toggle_section(Section::WordCount);
/// assert!(session.is_expanded(Section::WordCount));
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    stride: Stride,
    is_loading: bool,
    error: Option<Error>,
    show_load_button: bool,
    nth_character: Option<Result<char>>,
    sample: CharacterSample,
    paginator: Paginator,
    expanded: BTreeSet<Section>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(PageSize::default())
    }
}

impl Session {
    /// Create an idle session with the default stride.
    #[must_use]
    pub fn new(page_size: PageSize) -> Self {
        Self::with_stride(page_size, Stride::default())
    }

    /// Create an idle session with a custom stride.
    #[must_use]
    pub fn with_stride(page_size: PageSize, stride: Stride) -> Self {
        Self {
            stride,
            is_loading: false,
            error: None,
            show_load_button: true,
            nth_character: None,
            sample: CharacterSample::new(),
            paginator: Paginator::new(page_size),
            expanded: BTreeSet::new(),
        }
    }

    /// Whether a fetch is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// The last fetch failure, if the last load failed.
    #[must_use]
    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    /// Whether the UI should offer a (re)load action.
    #[must_use]
    pub fn show_load_button(&self) -> bool {
        self.show_load_button
    }

    /// The fixed-position lookup result, once content has been analyzed.
    #[must_use]
    pub fn nth_character(&self) -> Option<&Result<char>> {
        self.nth_character.as_ref()
    }

    /// The lookup result as display text.
    ///
    /// Empty before any analysis; [`NOT_AVAILABLE`] when the document was too
    /// short.
    #[must_use]
    pub fn nth_character_display(&self) -> String {
        match &self.nth_character {
            Some(Ok(c)) => c.to_string(),
            Some(Err(_)) => NOT_AVAILABLE.to_string(),
            None => String::new(),
        }
    }

    /// The every-nth-character sample.
    #[must_use]
    pub fn sample(&self) -> &[char] {
        &self.sample
    }

    /// The visible page of the word-count table.
    #[must_use]
    pub fn current_page(&self) -> PageDescriptor {
        self.paginator.current_page()
    }

    /// The underlying paginator.
    #[must_use]
    pub fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    /// Whether `section` is expanded.
    #[must_use]
    pub fn is_expanded(&self, section: Section) -> bool {
        self.expanded.contains(&section)
    }

    /// A fetch has started.
    pub fn begin_load(&mut self) {
        self.is_loading = true;
        self.show_load_button = false;
        self.error = None;
    }

    /// The fetch failed. Previous results are kept; the load button returns.
    pub fn fail_load(&mut self, error: Error) {
        self.is_loading = false;
        self.show_load_button = true;
        self.error = Some(error);
    }

    /// Store a fresh analysis and show page 0 of its table.
    pub fn set_analysis_result(&mut self, analysis: Analysis) {
        let Analysis {
            frequency_table,
            nth_character,
            sample,
        } = analysis;

        self.is_loading = false;
        self.error = None;
        self.nth_character = Some(nth_character);
        self.sample = sample;
        self.paginator.install_table(frequency_table);
    }

    /// Move the word-count table one page. Returns whether it moved.
    pub fn advance(&mut self, direction: Direction) -> bool {
        self.paginator.advance(direction)
    }

    /// Expand `section` if collapsed, collapse it if expanded.
    pub fn toggle_section(&mut self, section: Section) {
        if !self.expanded.remove(&section) {
            self.expanded.insert(section);
        }
    }

    /// Fetch `url`, then analyze it or record the failure.
    pub fn load<S>(&mut self, source: &S, url: &str)
    where
        S: ContentSource + ?Sized,
    {
        self.begin_load();
        match fetch_and_analyze(source, url, self.stride) {
            Ok(analysis) => {
                info!(
                    url,
                    unique_words = analysis.frequency_table.len(),
                    "analysis ready"
                );
                self.set_analysis_result(analysis);
            }
            Err(e) => self.fail_load(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze;

    #[test]
    fn test_initial_state() {
        let session = Session::default();
        assert!(!session.is_loading());
        assert!(session.show_load_button());
        assert!(session.error().is_none());
        assert!(session.nth_character().is_none());
        assert_eq!(session.nth_character_display(), "");
        assert!(session.sample().is_empty());
        assert_eq!(session.current_page().total_pages, 0);
    }

    #[test]
    fn test_begin_load() {
        let mut session = Session::default();
        session.begin_load();
        assert!(session.is_loading());
        assert!(!session.show_load_button());
    }

    #[test]
    fn test_fail_load_allows_retry() {
        let mut session = Session::default();
        session.begin_load();
        session.fail_load(Error::ContentUnavailable("timeout".into()));
        assert!(!session.is_loading());
        assert!(session.show_load_button());
        assert_eq!(
            session.error(),
            Some(&Error::ContentUnavailable("timeout".into()))
        );

        session.begin_load();
        assert!(session.error().is_none());
    }

    #[test]
    fn test_short_content_not_available() {
        let mut session = Session::default();
        session.set_analysis_result(analyze("Too short"));
        assert_eq!(session.nth_character_display(), NOT_AVAILABLE);
        assert!(session.error().is_none());
        assert_eq!(session.current_page().total_unique_words, 2);
    }

    #[test]
    fn test_new_result_resets_page() {
        let words: Vec<String> = (0..30).map(|i| format!("w{i}")).collect();
        let mut session = Session::default();
        session.set_analysis_result(analyze(&words.join(" ")));
        assert!(session.advance(Direction::Next));
        assert_eq!(session.current_page().current_page, 1);

        session.set_analysis_result(analyze(&words.join(" ")));
        assert_eq!(session.current_page().current_page, 0);
    }

    #[test]
    fn test_toggle_section() {
        let mut session = Session::default();
        assert!(!session.is_expanded(Section::Sample));
        session.toggle_section(Section::Sample);
        assert!(session.is_expanded(Section::Sample));
        assert!(!session.is_expanded(Section::WordCount));
        session.toggle_section(Section::Sample);
        assert!(!session.is_expanded(Section::Sample));
    }
}
