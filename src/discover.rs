//! Finds every dictionary word that can be spelled from a set of letters.
//!
//! Candidates grow one letter at a time. Before a candidate is extended, the dictionary is asked
//! whether any word starts with it; if none does, none of its extensions can be a word either and
//! the whole branch is skipped. That pruning is what keeps ten letters (3.6 million orderings)
//! tractable.

use std::collections::BTreeSet;

use tracing::{debug, trace};

use crate::dictionary::Dictionary;
use crate::letters::Letters;

/// Every word in `dictionary` spelled by some ordering of some of `letters`, each physical letter
/// used at most once. The result is sorted and has no duplicates.
///
/// # Examples
///
/// ```
/// use wordtree::dictionary::Dictionary;
/// use wordtree::discover::discover;
/// use wordtree::letters::Letters;
///
/// let dictionary = Dictionary::from_sorted(&["a", "at", "cat"]);
/// let letters = Letters::parse("cat")?;
///
/// assert_eq!(discover(&dictionary, &letters), ["a", "at", "cat"]);
/// # Ok::<(), wordtree::letters::LettersError>(())
/// ```
pub fn discover(dictionary: &Dictionary, letters: &Letters) -> Vec<String> {
    let mut search = Search {
        dictionary,
        letters: letters.as_slice(),
        used: vec![false; letters.len()],
        candidate: String::new(),
        found: BTreeSet::new(),
        visited: 0,
    };
    search.extend();

    debug!(
        letters = %letters,
        visited = search.visited,
        found = search.found.len(),
        "finished word search"
    );
    search.found.into_iter().collect()
}

/// The state of one depth-first search over letter orderings.
struct Search<'a> {
    dictionary: &'a Dictionary,
    letters: &'a [char],
    /// `used[i]` is set while `letters[i]` is part of `candidate`.
    used: Vec<bool>,
    candidate: String,
    found: BTreeSet<String>,
    /// How many candidates were checked against the dictionary.
    visited: usize,
}

impl Search<'_> {
    /// Tries every unused letter on the end of the current candidate.
    fn extend(&mut self) {
        for i in 0..self.letters.len() {
            if self.used[i] {
                continue;
            }

            self.used[i] = true;
            self.candidate.push(self.letters[i]);
            self.visited += 1;

            if self.dictionary.contains_prefix(&self.candidate) {
                if self.dictionary.contains(&self.candidate)
                    && !self.found.contains(&self.candidate)
                {
                    trace!(word = %self.candidate, "found");
                    self.found.insert(self.candidate.clone());
                }
                self.extend();
            }

            self.candidate.pop();
            self.used[i] = false;
        }
    }
}
