//! The validated multiset of letters a word search starts from.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The fewest letters a search accepts.
pub const MIN_LETTERS: usize = 2;
/// The most letters a search accepts. Discovery is factorial in this.
pub const MAX_LETTERS: usize = 10;

/// Why a letter string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LettersError {
    /// Too few or too many letters.
    #[error("expected between {min} and {max} letters but got {len}")]
    Length {
        /// How many letters were given.
        len: usize,
        /// [`MIN_LETTERS`].
        min: usize,
        /// [`MAX_LETTERS`].
        max: usize,
    },
    /// Something other than a letter was given.
    #[error("{0:?} is not a letter")]
    InvalidCharacter(char),
}

/// Lowercase letters, each of which may be used once per candidate word. Repeated letters are
/// kept: `"aab"` can spell `"aa"` while `"ab"` can't.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Letters(Vec<char>);

impl Letters {
    /// Validates `input`, ignoring surrounding whitespace, and lowercases it.
    ///
    /// ## Errors
    ///
    /// [`LettersError::Length`] unless there are [`MIN_LETTERS`] to [`MAX_LETTERS`] characters
    /// once lowercased,
    /// and [`LettersError::InvalidCharacter`] for the first character that isn't alphabetic.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordtree::letters::{Letters, LettersError};
    ///
    /// let letters = Letters::parse(" CaT ")?;
    /// assert_eq!(letters.as_slice(), ['c', 'a', 't']);
    ///
    /// assert_eq!(Letters::parse("c4t"), Err(LettersError::InvalidCharacter('4')));
    /// # Ok::<(), LettersError>(())
    /// ```
    pub fn parse(input: &str) -> Result<Self, LettersError> {
        let input = input.trim();

        // Lowercasing can turn one character into several, e.g. 'İ' into "i\u{307}".
        let letters: Vec<char> = input.chars().flat_map(char::to_lowercase).collect();
        let len = letters.len();
        if !(MIN_LETTERS..=MAX_LETTERS).contains(&len) {
            return Err(LettersError::Length {
                len,
                min: MIN_LETTERS,
                max: MAX_LETTERS,
            });
        }
        if let Some(c) = input.chars().find(|c| !c.is_alphabetic()) {
            return Err(LettersError::InvalidCharacter(c));
        }

        Ok(Self(letters))
    }

    /// The letters in the order they were given.
    pub fn as_slice(&self) -> &[char] {
        &self.0
    }

    /// How many letters there are, repeats included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for parsed letters; here for symmetry with [`Letters::len`].
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for Letters {
    type Err = LettersError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Letters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|c| write!(f, "{c}"))
    }
}
