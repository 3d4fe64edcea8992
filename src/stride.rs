//! Fixed-position lookup and fixed-interval sampling.
//!
//! Both operations index the same character stream: the content with every
//! whitespace character removed.
//!
//! ## How It Works
//!
//! ```text
//! stride = 5
//!
//! Content: "ab cd\nefgh ijklm"
//! Stream:  "abcdefghijklm"
//!               ^    ^
//!               4    9          (0-based)
//!
//! nth:     'e'                  position 5, index 4
//! sample:  ['e', 'j']           indices 4, 9, 14.. while they exist
//! ```
//!
//! ## Lookup vs Sample
//!
//! The two differ only in how they treat a short stream:
//!
//! | Stream length | `nth` | `sample` |
//! |---------------|-------|----------|
//! | `< n` | `Err(InsufficientLength)` | empty |
//! | `>= n` | `Ok(char)` | non-empty |
//!
//! Sampling has no minimum length, so an empty sample is a valid answer.

use crate::{Error, Result};

/// Ordered characters drawn at a fixed interval through the stream.
pub type CharacterSample = Vec<char>;

/// A 1-based position and sampling interval into the whitespace-stripped
/// character stream.
///
/// ## Example
///
/// ```rust
/// use wordtally::Stride;
///
/// let stride = Stride::default();
/// assert_eq!(stride.get(), 15);
///
/// assert_eq!(stride.nth("Exactly15Chars!").unwrap(), '!');
/// assert!(stride.nth("Too short").is_err());
/// assert!(stride.sample("Too short").is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Stride {
    n: usize,
}

impl Stride {
    /// The stride used when none is configured.
    pub const DEFAULT: Self = Self { n: 15 };

    /// Create a stride.
    ///
    /// # Panics
    ///
    /// Panics if `n == 0`.
    #[must_use]
    pub fn new(n: usize) -> Self {
        assert!(n > 0, "stride must be > 0");
        Self { n }
    }

    /// Create a stride, rejecting zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStride`] if `n == 0`.
    pub fn try_new(n: usize) -> Result<Self> {
        if n == 0 {
            Err(Error::InvalidStride(n))
        } else {
            Ok(Self { n })
        }
    }

    /// The 1-based position, which is also the sampling interval.
    #[must_use]
    pub const fn get(&self) -> usize {
        self.n
    }

    /// The character at 1-based position `n` of the stream.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InsufficientLength`] if the stream has fewer than `n`
    /// characters.
    pub fn nth(&self, content: &str) -> Result<char> {
        let mut stream = stream(content);
        match stream.nth(self.n - 1) {
            Some(c) => Ok(c),
            None => Err(Error::InsufficientLength {
                required: self.n,
                available: stream_len(content),
            }),
        }
    }

    /// Characters at 0-based stream positions `n-1, 2n-1, 3n-1, …`.
    ///
    /// A stream shorter than `n` yields an empty sample.
    #[must_use]
    pub fn sample(&self, content: &str) -> CharacterSample {
        stream(content).skip(self.n - 1).step_by(self.n).collect()
    }
}

impl Default for Stride {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<usize> for Stride {
    type Error = Error;

    fn try_from(n: usize) -> Result<Self> {
        Self::try_new(n)
    }
}

/// The character stream both operations index: content minus whitespace.
fn stream(content: &str) -> impl Iterator<Item = char> + '_ {
    content.chars().filter(|c| !c.is_whitespace())
}

fn stream_len(content: &str) -> usize {
    stream(content).count()
}

/// The character at 1-based position `n` of the whitespace-stripped content.
///
/// ```rust
/// use wordtally::{find_nth_character, Error};
///
/// assert_eq!(find_nth_character("This is a string with more", 15), Ok('i'));
/// assert!(matches!(
///     find_nth_character("Too short", 15),
///     Err(Error::InsufficientLength { required: 15, available: 8 })
/// ));
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidStride`] if `n == 0` and
/// [`Error::InsufficientLength`] if the stream has fewer than `n` characters.
pub fn find_nth_character(content: &str, n: usize) -> Result<char> {
    Stride::try_new(n)?.nth(content)
}

/// Every `n`th character of the whitespace-stripped content.
///
/// ```rust
/// use wordtally::sample_every_nth_character;
///
/// assert_eq!(sample_every_nth_character("abcdefghij", 3), vec!['c', 'f', 'i']);
/// assert!(sample_every_nth_character("ab", 3).is_empty());
/// ```
///
/// # Panics
///
/// Panics if `n == 0`.
#[must_use]
pub fn sample_every_nth_character(content: &str, n: usize) -> CharacterSample {
    Stride::new(n).sample(content)
}
