use std::{
    cmp::Ordering,
    collections::{BinaryHeap, HashMap},
};

use itertools::Itertools;

use crate::{
    error::{HuffmanError, Result},
    tree::{HuffmanTree, NodeArena, NodeIndex},
};

/// Counts how many times each symbol occurs in `text`.
pub fn count_frequencies(text: &str) -> HashMap<char, usize> {
    let mut counts: HashMap<char, usize> = HashMap::new();
    for c in text.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    counts
}

/// Builds the Huffman tree for the symbol frequencies of `text`.
pub fn build_tree(text: &str) -> Result<HuffmanTree> {
    HuffmanTree::build(text)
}

/// A subtree waiting in the priority queue.
///
/// Lower weight dequeues first. Among equal weights merged subtrees dequeue
/// before leaves, then the earliest enqueued dequeues first.
#[derive(Debug, PartialEq, Eq)]
struct Candidate {
    weight: usize,
    merged: bool,
    order: usize,
    node: NodeIndex,
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap pops the greatest element
        other
            .weight
            .cmp(&self.weight)
            .then(self.merged.cmp(&other.merged))
            .then(other.order.cmp(&self.order))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl HuffmanTree {
    pub fn build(text: &str) -> Result<HuffmanTree> {
        HuffmanTree::from_frequencies(&count_frequencies(text))
    }

    /// Builds an optimal tree by repeatedly merging the two lightest subtrees.
    ///
    /// Leaves are enqueued in ascending symbol order and symbols with a zero
    /// count are ignored. The first subtree dequeued becomes the zero-child of
    /// the merged node, the second its one-child.
    pub fn from_frequencies(counts: &HashMap<char, usize>) -> Result<HuffmanTree> {
        let counts = counts
            .iter()
            .filter(|(_, count)| **count > 0)
            .sorted()
            .collect::<Vec<_>>();
        log::trace!("Symbol frequencies: {:?}", counts);

        if counts.len() < 2 {
            return Err(HuffmanError::InsufficientAlphabet {
                distinct: counts.len(),
            });
        }

        let mut arena = NodeArena::with_capacity(counts.len());
        let mut heap = BinaryHeap::with_capacity(counts.len());
        let mut order = 0;
        for (symbol, count) in counts {
            heap.push(Candidate {
                weight: *count,
                merged: false,
                order,
                node: arena.push_leaf(*symbol),
            });
            order += 1;
        }

        while heap.len() > 1 {
            let (Some(zero), Some(one)) = (heap.pop(), heap.pop()) else {
                unreachable!("heap holds at least two subtrees");
            };
            heap.push(Candidate {
                weight: zero.weight + one.weight,
                merged: true,
                order,
                node: arena.push_internal(zero.node, one.node),
            });
            order += 1;
        }

        let root = heap
            .pop()
            .map(|candidate| candidate.node)
            .ok_or(HuffmanError::InsufficientAlphabet { distinct: 0 })?;
        let tree = arena.into_tree(root);
        log::trace!("Huffman tree: {}", tree);
        Ok(tree)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rstest::rstest;

    use super::{build_tree, count_frequencies};
    use crate::{error::HuffmanError, tree::tests::example_tree, tree::HuffmanTree};

    #[test]
    fn test_count_frequencies() {
        assert_eq!(count_frequencies("aa"), HashMap::from([('a', 2)]));
        assert_eq!(
            count_frequencies("STREETTEST"),
            HashMap::from([('S', 2), ('T', 4), ('R', 1), ('E', 3)])
        );
        assert_eq!(count_frequencies("é é"), HashMap::from([('é', 2), (' ', 1)]));
        assert!(count_frequencies("").is_empty());
    }

    #[test]
    fn builds_reference_tree() {
        let tree = build_tree("STREETTEST").unwrap();
        assert_eq!(tree, example_tree());
        assert_eq!(tree.to_string(), "(T,((R,S),E))");
    }

    #[test]
    fn lighter_subtree_goes_to_zero_side() {
        let tree = build_tree("aaaabbc").unwrap();
        assert_eq!(tree.to_string(), "((c,b),a)");
        let tree = build_tree("abbbbcc").unwrap();
        assert_eq!(tree.to_string(), "((a,c),b)");
    }

    #[test]
    fn equal_weights_dequeue_merged_subtree_first() {
        // c+b merges to weight 3 and ties with the leaf a
        let tree = build_tree("abacba").unwrap();
        assert_eq!(tree.to_string(), "((c,b),a)");
    }

    #[test]
    fn equal_weight_leaves_keep_symbol_order() {
        assert_eq!(build_tree("ab").unwrap().to_string(), "(a,b)");
        assert_eq!(build_tree("ba").unwrap().to_string(), "(a,b)");
        assert_eq!(build_tree("OH").unwrap().to_string(), "(H,O)");
        // a and b tie first, then c ties with the merged pair
        assert_eq!(build_tree("abcc").unwrap().to_string(), "((a,b),c)");
        assert_eq!(build_tree("abcd").unwrap().to_string(), "((a,b),(c,d))");
    }

    #[test]
    fn two_symbols() {
        let tree = build_tree("HO").unwrap();
        assert_eq!(tree.to_string(), "(H,O)");
        let tree = build_tree("AB").unwrap();
        assert_eq!(tree.leaf_count(), 2);
    }

    #[rstest]
    #[case("", 0)]
    #[case("A", 1)]
    #[case("AAAA", 1)]
    #[case("HHHHHHHH", 1)]
    #[case("O", 1)]
    fn rejects_small_alphabets(#[case] text: &str, #[case] expected: usize) {
        match build_tree(text) {
            Err(HuffmanError::InsufficientAlphabet { distinct }) => assert_eq!(distinct, expected),
            other => panic!("expected an alphabet error, got {:?}", other),
        }
    }

    #[test]
    fn ignores_zero_counts() {
        let counts = HashMap::from([('a', 3), ('b', 0)]);
        assert!(matches!(
            HuffmanTree::from_frequencies(&counts),
            Err(HuffmanError::InsufficientAlphabet { distinct: 1 })
        ));
    }

    #[test]
    fn deterministic() {
        let text = "Nana Nana Nana Nana Nana Nana Nana Nana Batman";
        assert_eq!(build_tree(text).unwrap(), build_tree(text).unwrap());
    }

    #[test]
    fn one_leaf_per_distinct_symbol() {
        let text = "HAPPY HIP HOP";
        let tree = build_tree(text).unwrap();
        assert_eq!(tree.leaf_count(), count_frequencies(text).len());
        assert_eq!(tree.len(), 2 * tree.leaf_count() - 1);
    }
}
