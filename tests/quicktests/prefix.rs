use wordtree::dictionary::Dictionary;
use wordtree::discover::discover;
use wordtree::letters::Letters;
use wordtree::prefix::PrefixTree;

use crate::Op;

quickcheck::quickcheck! {
    fn prefix_matches_scan_after_removals(ops: Vec<Op<String>>, prefixes: Vec<String>) -> bool {
        let mut tree = PrefixTree::new();
        let mut words: Vec<String> = Vec::new();
        for op in &ops {
            match op {
                Op::Add(word) => {
                    tree.add(word.clone());
                    words.push(word.clone());
                }
                Op::Remove(word) => {
                    if let Some(pos) = words.iter().position(|w| w == word) {
                        words.swap_remove(pos);
                    }
                    tree.remove(word);
                }
            }
        }

        prefixes.iter().all(|prefix| {
            tree.contains_prefix(prefix) == words.iter().any(|w| w.starts_with(prefix.as_str()))
        })
    }
}

/// Every word spelled by `letters`, found the slow way: by checking each dictionary word's
/// letters against the available ones.
fn spellable(words: &[String], letters: &Letters) -> Vec<String> {
    let mut found: Vec<String> = words
        .iter()
        .filter(|word| {
            let mut available = letters.as_slice().to_vec();
            word.chars().all(|c| match available.iter().position(|a| *a == c) {
                Some(pos) => {
                    available.swap_remove(pos);
                    true
                }
                None => false,
            })
        })
        .cloned()
        .collect();
    found.sort();
    found.dedup();
    found
}

quickcheck::quickcheck! {
    fn discovery_matches_brute_force(words: Vec<String>, seed: Vec<u8>) -> bool {
        // Keep letters to a small alphabet so words and letters actually overlap.
        let to_letter = |b: &u8| char::from(b'a' + b % 4);
        let letters: String = seed.iter().take(6).map(to_letter).collect();
        let Ok(letters) = Letters::parse(&letters) else {
            return true;
        };
        let mut words: Vec<String> = words
            .iter()
            .map(|w| w.bytes().take(4).map(|b| to_letter(&b)).collect::<String>())
            .filter(|w| !w.is_empty())
            .collect();
        words.sort_unstable();

        let dictionary = Dictionary::from_sorted(&words);

        discover(&dictionary, &letters) == spellable(&words, &letters)
    }
}
