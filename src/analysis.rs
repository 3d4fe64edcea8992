//! Running all three analyses over one document.

use tracing::debug;

use crate::{count_unique_words, CharacterSample, Result, Stride, WordFrequencyTable};

/// The results of one analysis pass.
///
/// Each field reports its own outcome. A document too short for the
/// fixed-position lookup still gets a frequency table and a (possibly empty)
/// sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    /// Unique-word counts.
    pub frequency_table: WordFrequencyTable,
    /// The character at the stride position, or why there is none.
    pub nth_character: Result<char>,
    /// Every stride-th character.
    pub sample: CharacterSample,
}

/// Analyze `content` with the default stride of 15.
///
/// ```rust
/// use wordtally::analyze;
///
/// let analysis = analyze("Too short");
/// assert!(analysis.nth_character.is_err());
/// assert!(analysis.sample.is_empty());
/// assert_eq!(analysis.frequency_table.get("short"), Some(1));
/// ```
#[must_use]
pub fn analyze(content: &str) -> Analysis {
    analyze_with(content, Stride::default())
}

/// Analyze `content` with a custom stride.
#[must_use]
pub fn analyze_with(content: &str, stride: Stride) -> Analysis {
    let analysis = Analysis {
        frequency_table: count_unique_words(content),
        nth_character: stride.nth(content),
        sample: stride.sample(content),
    };

    debug!(
        bytes = content.len(),
        stride = stride.get(),
        unique_words = analysis.frequency_table.len(),
        tokens = analysis.frequency_table.total_tokens(),
        sampled = analysis.sample.len(),
        nth_found = analysis.nth_character.is_ok(),
        "analyzed content"
    );
    analysis
}
