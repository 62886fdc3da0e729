use wordtree::tree::Tree;

use std::collections::{BTreeMap, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a multiset of counts.
/// This way we can ensure that after a random smattering of adds
/// and removes we hold the same values, balanced after every step.
fn do_ops<T>(ops: &[Op<T>], tree: &mut Tree<T>, counts: &mut BTreeMap<T, usize>) -> bool
where
    T: Ord + Clone,
{
    for op in ops {
        let agrees = match op {
            Op::Add(x) => {
                tree.add(x.clone());
                *counts.entry(x.clone()).or_default() += 1;
                true
            }
            Op::Remove(x) => {
                let removed = tree.remove(x);
                match counts.get(x).copied() {
                    Some(1) => {
                        counts.remove(x);
                        removed
                    }
                    Some(count) => {
                        counts.insert(x.clone(), count - 1);
                        removed
                    }
                    None => !removed,
                }
            }
        };

        if !agrees || tree.check().is_err() {
            return false;
        }
    }

    true
}

/// The model's values in the order a snapshot should yield them.
fn expected<T: Clone>(counts: &BTreeMap<T, usize>) -> Vec<T> {
    counts
        .iter()
        .flat_map(|(x, count)| std::iter::repeat(x.clone()).take(*count))
        .collect()
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        let mut counts = BTreeMap::new();

        do_ops(&ops, &mut tree, &mut counts)
            && (i8::MIN..=i8::MAX).all(|x| tree.contains(&x) == counts.contains_key(&x))
            && tree.snapshot().collect::<Vec<_>>() == expected(&counts)
            && tree.len() == counts.values().sum::<usize>()
    }
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_strings(ops: Vec<Op<String>>) -> bool {
        let mut tree = Tree::new();
        let mut counts = BTreeMap::new();

        do_ops(&ops, &mut tree, &mut counts)
            && counts.keys().all(|x| tree.contains(x.as_str()))
            && tree.snapshot().collect::<Vec<_>>() == expected(&counts)
    }
}

quickcheck::quickcheck! {
    fn snapshot_is_sorted_multiset(xs: Vec<i32>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let mut sorted = xs;
        sorted.sort_unstable();

        tree.snapshot().collect::<Vec<_>>() == sorted
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| !tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree: Tree<_> = xs.iter().copied().collect();
        for delete in &deletes {
            // We may have added the same value multiple times - remove each one.
            while tree.remove(delete) {}
        }

        let mut still_present = xs;
        still_present.retain(|x| !deletes.contains(x));

        tree.check().is_ok()
            && deletes.iter().all(|x| !tree.contains(x))
            && still_present.iter().all(|x| tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn removing_missing_values_changes_nothing(xs: Vec<i8>, missing: i8) -> bool {
        let mut tree: Tree<_> = xs.iter().copied().filter(|x| *x != missing).collect();
        let before = tree.dump().to_string();

        !tree.remove(&missing) && tree.dump().to_string() == before
    }
}
