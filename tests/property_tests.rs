//! Property-based tests for content analysis and pagination.
//!
//! These tests verify the invariants that hold for every input:
//! - Keys: frequency keys are lower-case and non-empty
//! - Conservation: counts sum to the number of whitespace-delimited tokens
//! - Consistency: lookup and sample index the same stream
//! - Paging: pages partition the sorted table exactly once

use proptest::prelude::*;
use wordtally::{
    compute_page, count_unique_words, find_nth_character, sample_every_nth_character, Direction,
    Error, PageSize, Paginator, WordFrequencyTable,
};

// =============================================================================
// Test Generators
// =============================================================================

/// Generate text of words, punctuation, and mixed whitespace runs
fn wordy_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        (
            prop::string::string_regex("[A-Za-z0-9.,!?'-]{1,12}").unwrap(),
            prop::string::string_regex("[ \t\n]{1,3}").unwrap(),
        ),
        0..60,
    )
    .prop_map(|parts| {
        let mut result = String::new();
        for (word, ws) in parts {
            result.push_str(&word);
            result.push_str(&ws);
        }
        result
    })
}

/// Generate a table with a chosen number of unique words and arbitrary counts
fn table_with_unique(max: usize) -> impl Strategy<Value = WordFrequencyTable> {
    prop::collection::vec(1usize..6, 0..max).prop_map(|counts| {
        let mut text = String::new();
        for (i, count) in counts.iter().enumerate() {
            for _ in 0..*count {
                text.push_str(&format!("word{i} "));
            }
        }
        count_unique_words(&text)
    })
}

fn stripped(text: &str) -> Vec<char> {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

// =============================================================================
// Frequency Tests
// =============================================================================

proptest! {
    #[test]
    fn keys_lowercase_and_non_empty(text in wordy_text()) {
        let table = count_unique_words(&text);
        for (word, count) in &table {
            prop_assert!(!word.is_empty());
            prop_assert_eq!(word, word.to_lowercase());
            prop_assert!(count >= 1);
        }
    }

    #[test]
    fn counts_sum_to_token_count(text in wordy_text()) {
        let table = count_unique_words(&text);
        prop_assert_eq!(table.total_tokens(), text.split_whitespace().count());
    }

    #[test]
    fn counting_ignores_case(text in wordy_text()) {
        prop_assert_eq!(
            count_unique_words(&text),
            count_unique_words(&text.to_uppercase())
        );
    }

    #[test]
    fn counting_is_any_unicode_safe(text in "\\PC*") {
        let table = count_unique_words(&text);
        prop_assert!(table.iter().all(|(word, _)| !word.is_empty()));
    }
}

// =============================================================================
// Stride Tests
// =============================================================================

proptest! {
    #[test]
    fn lookup_matches_stripped_stream(text in wordy_text(), n in 1usize..40) {
        let stream = stripped(&text);
        match find_nth_character(&text, n) {
            Ok(c) => {
                prop_assert_eq!(Some(&c), stream.get(n - 1));
            }
            Err(Error::InsufficientLength { required, available }) => {
                prop_assert_eq!(required, n);
                prop_assert_eq!(available, stream.len());
                prop_assert!(stream.len() < n);
            }
            Err(other) => {
                prop_assert!(false, "unexpected error {:?}", other);
            }
        }
    }

    #[test]
    fn sample_matches_stripped_stream(text in wordy_text(), n in 1usize..40) {
        let stream = stripped(&text);
        let sample = sample_every_nth_character(&text, n);

        prop_assert_eq!(sample.len(), stream.len() / n);
        for (i, c) in sample.iter().enumerate() {
            prop_assert_eq!(Some(c), stream.get((i + 1) * n - 1));
        }
    }

    #[test]
    fn sample_starts_with_lookup(text in wordy_text(), n in 1usize..40) {
        let sample = sample_every_nth_character(&text, n);
        match find_nth_character(&text, n) {
            Ok(c) => {
                prop_assert_eq!(sample.first(), Some(&c));
            }
            Err(_) => {
                prop_assert!(sample.is_empty());
            }
        }
    }
}

// =============================================================================
// Pagination Tests
// =============================================================================

proptest! {
    #[test]
    fn pages_partition_sorted_table(table in table_with_unique(80), size in 1usize..25) {
        let page_size = PageSize::new(size).unwrap();
        let first = compute_page(&table, page_size, 0);

        let mut rows = Vec::new();
        for index in 0..first.total_pages {
            let page = compute_page(&table, page_size, index);
            prop_assert!(!page.items.is_empty());
            prop_assert!(page.items.len() <= size);
            rows.extend(page.items);
        }

        prop_assert_eq!(rows, table.sorted());
    }

    #[test]
    fn sorted_is_descending(table in table_with_unique(80)) {
        let sorted = table.sorted();
        for pair in sorted.windows(2) {
            prop_assert!(
                pair[0].count > pair[1].count
                    || (pair[0].count == pair[1].count && pair[0].word < pair[1].word)
            );
        }
    }

    #[test]
    fn navigation_flags_match_index(table in table_with_unique(80), size in 1usize..25) {
        let page_size = PageSize::new(size).unwrap();
        let total_pages = table.len().div_ceil(size);
        prop_assert_eq!(compute_page(&table, page_size, 0).total_pages, total_pages);

        for index in 0..total_pages {
            let page = compute_page(&table, page_size, index);
            prop_assert_eq!(page.can_go_to_previous, index > 0);
            prop_assert_eq!(page.can_go_to_next, index + 1 < total_pages);
        }
    }

    #[test]
    fn cursor_never_leaves_table(
        table in table_with_unique(80),
        size in 1usize..25,
        moves in prop::collection::vec(any::<bool>(), 0..50)
    ) {
        let mut paginator = Paginator::new(PageSize::new(size).unwrap());
        paginator.install_table(table);

        for forward in moves {
            let direction = if forward { Direction::Next } else { Direction::Previous };
            let before = paginator.page_index();
            let moved = paginator.advance(direction);
            let after = paginator.page_index();

            prop_assert_eq!(moved, before != after);
            prop_assert!(after < paginator.total_pages().max(1));
        }
    }
}

// =============================================================================
// Edge Cases
// =============================================================================

#[test]
fn empty_and_whitespace_yield_empty_table() {
    assert!(count_unique_words("").is_empty());
    assert!(count_unique_words("   ").is_empty());
}

#[test]
fn case_folds_to_single_key() {
    let table = count_unique_words("Hello hello HELLO");
    assert_eq!(table.len(), 1);
    assert_eq!(table.get("hello"), Some(3));
}

#[test]
fn punctuation_kept_in_keys() {
    let table = count_unique_words("hello, world! hello-test test.");
    assert_eq!(table.len(), 4);
    for word in ["hello,", "world!", "hello-test", "test."] {
        assert_eq!(table.get(word), Some(1));
    }
}

#[test]
fn lookup_fails_where_sample_succeeds() {
    let text = "Too short";
    assert!(matches!(
        find_nth_character(text, 15),
        Err(Error::InsufficientLength { .. })
    ));
    assert!(sample_every_nth_character(text, 15).is_empty());
}

// =============================================================================
// Consistency Tests
// =============================================================================

#[test]
fn compute_page_is_idempotent() {
    let table = count_unique_words("a b c d e f g a b c a");
    let size = PageSize::new(3).unwrap();

    let page1 = compute_page(&table, size, 1);
    let page2 = compute_page(&table, size, 1);

    assert_eq!(page1, page2);
}
