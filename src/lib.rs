//! # wordtally
//!
//! Word frequencies, fixed-stride character sampling, and paginated frequency
//! tables for a fetched page of text.
//!
//! ## The Problem
//!
//! Given the body of a web page, answer three questions:
//!
//! - Which words occur, and how often?
//! - What is the 15th character?
//! - What is every 15th character?
//!
//! Then show the word counts a page at a time, most frequent first.
//!
//! All three analyses are pure functions of the text. The only state in the
//! crate is a page cursor and, optionally, a [`Session`] that a UI renders
//! from.
//!
//! ## Words
//!
//! A word is a maximal run of non-whitespace characters, lower-cased.
//! Punctuation is kept:
//!
//! ```text
//! "Hello, world! hello"  ->  { "hello,": 1, "world!": 1, "hello": 1 }
//! ```
//!
//! ## Characters
//!
//! The lookup and the sample both index the text with all whitespace removed,
//! using 1-based positions:
//!
//! ```text
//! Content: "This is a string with more"
//! Stream:  "Thisisastringwithmore"
//!                         ^ position 15 = 'i'
//! ```
//!
//! The lookup fails with [`Error::InsufficientLength`] on a short stream.
//! The sample just comes back empty.
//!
//! ## Pages
//!
//! ```text
//! 45 unique words, page size 20
//!
//! Page 0: 20 rows  [prev: no,  next: yes]
//! Page 1: 20 rows  [prev: yes, next: yes]
//! Page 2:  5 rows  [prev: yes, next: no]
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use wordtally::{analyze, Direction, PageSize, Paginator};
//!
//! let analysis = analyze("The quick brown fox jumps over the lazy dog. The end.");
//!
//! assert_eq!(analysis.frequency_table.get("the"), Some(3));
//! assert_eq!(analysis.nth_character, Ok('o'));
//! assert_eq!(analysis.sample, vec!['o', 'a']);
//!
//! let mut paginator = Paginator::new(PageSize::new(5).unwrap());
//! paginator.install_table(analysis.frequency_table);
//!
//! let page = paginator.current_page();
//! assert_eq!(page.items[0].word, "the");
//! assert!(paginator.advance(Direction::Next));
//! ```
//!
//! ## Fetching (requires `http` feature)
//!
//! ```rust,ignore
//! use wordtally::{HttpSource, Session};
//!
//! let source = HttpSource::new()?;
//! let mut session = Session::default();
//! session.load(&source, HttpSource::DEFAULT_URL);
//! ```
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (`debug` for analysis and navigation,
//! `info` for completed loads, `warn` for failed fetches). It never installs
//! a subscriber.

mod analysis;
mod error;
mod frequency;
mod page;
mod page_size;
mod paginator;
mod session;
mod source;
mod stride;

pub use analysis::{analyze, analyze_with, Analysis};
pub use error::{Error, Result};
pub use frequency::{count_unique_words, Iter, WordCount, WordFrequencyTable};
pub use page::PageDescriptor;
pub use page_size::{PageSize, PageSizeError};
pub use paginator::{compute_page, Direction, Paginator};
pub use session::{Section, Session, NOT_AVAILABLE};
pub use source::{fetch_and_analyze, ContentSource};
pub use stride::{find_nth_character, sample_every_nth_character, CharacterSample, Stride};

#[cfg(feature = "http")]
pub use source::HttpSource;
