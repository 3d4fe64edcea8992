//! Unique-word frequency counting.
//!
//! ## Tokenization
//!
//! A token is a maximal run of non-whitespace characters. Each token is
//! lower-cased and counted; nothing else is stripped.
//!
//! ```text
//! "Hello, world! hello"
//!
//! tokens:  ["Hello,", "world!", "hello"]
//! table:   { "hello,": 1, "world!": 1, "hello": 1 }
//! ```
//!
//! Punctuation stays attached to the token, so `"hello,"` and `"hello"` are
//! different words. That is deliberate: the counter makes no attempt at
//! linguistic word boundaries, which would be locale dependent.

use std::collections::hash_map::{self, HashMap};

/// One `(word, count)` row of a frequency table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WordCount {
    /// The normalized (lower-cased) word.
    pub word: String,
    /// How many times the word occurred.
    pub count: usize,
}

impl WordCount {
    /// Create a new row.
    #[must_use]
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

impl std::fmt::Display for WordCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.word, self.count)
    }
}

/// Occurrence counts keyed by normalized word.
///
/// Keys are unique, lower-cased, and never empty; every count is at least 1.
/// Iteration order is unspecified. Use [`sorted`](Self::sorted) for display.
///
/// ```rust
/// use wordtally::count_unique_words;
///
/// let table = count_unique_words("Hello hello HELLO");
/// assert_eq!(table.len(), 1);
/// assert_eq!(table.get("hello"), Some(3));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct WordFrequencyTable {
    counts: HashMap<String, usize>,
}

impl WordFrequencyTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of unique words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether the table holds no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Count for `word`, if it occurred.
    ///
    /// `word` is matched as-is; pass the lower-cased form.
    #[must_use]
    pub fn get(&self, word: &str) -> Option<usize> {
        self.counts.get(word).copied()
    }

    /// Sum of all counts, i.e. the number of tokens in the source text.
    #[must_use]
    pub fn total_tokens(&self) -> usize {
        self.counts.values().sum()
    }

    /// Iterate `(word, count)` pairs in unspecified order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.counts.iter(),
        }
    }

    /// All entries sorted by descending count, ties broken by ascending word.
    ///
    /// ```rust
    /// use wordtally::count_unique_words;
    ///
    /// let table = count_unique_words("b a b c a b");
    /// let words: Vec<_> = table.sorted().into_iter().map(|w| w.word).collect();
    /// assert_eq!(words, ["b", "a", "c"]);
    /// ```
    #[must_use]
    pub fn sorted(&self) -> Vec<WordCount> {
        let mut entries: Vec<WordCount> = self
            .counts
            .iter()
            .map(|(word, &count)| WordCount::new(word.as_str(), count))
            .collect();
        entries.sort_unstable_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
        entries
    }

    fn record(&mut self, word: String) {
        *self.counts.entry(word).or_insert(0) += 1;
    }
}

impl<'a> IntoIterator for &'a WordFrequencyTable {
    type Item = (&'a str, usize);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the entries of a [`WordFrequencyTable`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: hash_map::Iter<'a, String, usize>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, usize);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(word, &count)| (word.as_str(), count))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

/// Count occurrences of each whitespace-delimited, lower-cased token.
///
/// Never fails. Empty or whitespace-only content yields an empty table.
///
/// ```rust
/// use wordtally::count_unique_words;
///
/// let table = count_unique_words("hello, world! hello-test test.");
/// assert_eq!(table.len(), 4);
/// assert_eq!(table.get("hello,"), Some(1));
/// assert_eq!(table.get("hello"), None);
/// ```
#[must_use]
pub fn count_unique_words(content: &str) -> WordFrequencyTable {
    let mut table = WordFrequencyTable::new();

    for token in content.split_whitespace() {
        let word = token.to_lowercase();
        if !word.is_empty() {
            table.record(word);
        }
    }

    table
}
