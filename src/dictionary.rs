//! A word list loaded into a [`PrefixTree`].
//!
//! Word lists usually arrive sorted. Rather than adding them in that order, the loader adds the
//! middle word of each range first and then recurses into the halves on either side of it.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::prefix::PrefixTree;

/// Why a dictionary couldn't be loaded.
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// The dictionary file couldn't be opened or read.
    #[error("couldn't read dictionary {}", path.display())]
    Io {
        /// The file being read.
        path: PathBuf,
        /// What went wrong.
        #[source]
        source: io::Error,
    },
    /// Reading a dictionary from something other than a file failed.
    #[error("couldn't read dictionary")]
    Read(#[from] io::Error),
    /// There wasn't a single word in the input.
    #[error("dictionary has no words")]
    Empty,
}

/// The set of known words, searchable by whole word or by prefix.
#[derive(Clone, Debug, Default)]
pub struct Dictionary {
    words: PrefixTree,
}

impl Dictionary {
    /// Loads words that are already in ascending order, adding each range's middle word first.
    ///
    /// Unsorted input still produces a correct (and balanced) dictionary, it just takes more
    /// rotations to get there.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordtree::dictionary::Dictionary;
    ///
    /// let dictionary = Dictionary::from_sorted(&["a", "at", "cat"]);
    ///
    /// assert!(dictionary.contains("at"));
    /// assert!(dictionary.contains_prefix("ca"));
    /// assert_eq!(dictionary.len(), 3);
    /// ```
    pub fn from_sorted<S>(words: &[S]) -> Self
    where
        S: AsRef<str>,
    {
        fn fill<S: AsRef<str>>(tree: &mut PrefixTree, words: &[S]) {
            if !words.is_empty() {
                let mid = words.len() / 2;
                tree.add(words[mid].as_ref());
                fill(tree, &words[..mid]);
                fill(tree, &words[mid + 1..]);
            }
        }

        let mut words_tree = PrefixTree::new();
        fill(&mut words_tree, words);
        debug!(words = words.len(), "loaded dictionary");

        Self { words: words_tree }
    }

    /// Reads one word per line. Lines are trimmed, blank lines are skipped, and the words are
    /// sorted before loading.
    ///
    /// ## Errors
    ///
    /// [`DictionaryError::Read`] if reading fails and [`DictionaryError::Empty`] if there are no
    /// words.
    pub fn from_reader<R>(reader: R) -> Result<Self, DictionaryError>
    where
        R: BufRead,
    {
        let mut words = Vec::new();
        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if !word.is_empty() {
                words.push(word.to_string());
            }
        }
        if words.is_empty() {
            return Err(DictionaryError::Empty);
        }

        words.sort_unstable();
        Ok(Self::from_sorted(&words))
    }

    /// Reads the dictionary file at `path`. See [`Dictionary::from_reader`].
    ///
    /// ## Errors
    ///
    /// [`DictionaryError::Io`] naming `path` if it can't be opened or read, and
    /// [`DictionaryError::Empty`] if it has no words.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "opening dictionary");

        let io_error = |source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(io_error)?;
        match Self::from_reader(BufReader::new(file)) {
            Err(DictionaryError::Read(source)) => Err(io_error(source)),
            result => result,
        }
    }

    /// Checks whether `word` is in the dictionary.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Checks whether any word in the dictionary starts with `prefix`.
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.words.contains_prefix(prefix)
    }

    /// How many words were loaded, duplicates included.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Checks if no words were loaded.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The underlying tree of words.
    pub fn words(&self) -> &PrefixTree {
        &self.words
    }
}
