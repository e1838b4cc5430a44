//! Conversion between a tree and its (shape, leaves) pre-order encoding.
//!
//! In the shape sequence `1` marks an internal node, whose zero-subtree and
//! then one-subtree follow, and `0` marks a leaf, whose symbol is the next one
//! in the leaf sequence.

use crate::{
    bit::Bit,
    config::DecodeMode,
    error::{HuffmanError, Result},
    tree::{HuffmanTree, Node, NodeArena, NodeIndex},
};

pub fn flatten(tree: &HuffmanTree) -> (Vec<Bit>, Vec<char>) {
    let mut shape = Vec::with_capacity(tree.len());
    let mut leaves = Vec::with_capacity(tree.len() / 2 + 1);
    for index in tree.preorder() {
        match tree.node(index) {
            Node::Leaf(symbol) => {
                shape.push(Bit::Zero);
                leaves.push(*symbol);
            }
            Node::Internal { .. } => shape.push(Bit::One),
        }
    }
    (shape, leaves)
}

/// Rebuilds a tree, rejecting any leftover shape bits or leaf symbols.
pub fn unflatten(shape: &[Bit], leaves: &[char]) -> Result<HuffmanTree> {
    unflatten_with(shape, leaves, DecodeMode::Strict)
}

/// Rebuilds a tree from its pre-order encoding.
///
/// Input that ends before the tree is complete is always an error. Shape bits
/// or leaf symbols left once the tree is complete are reported in
/// [DecodeMode::Strict] and ignored in [DecodeMode::Permissive].
pub fn unflatten_with(shape: &[Bit], leaves: &[char], mode: DecodeMode) -> Result<HuffmanTree> {
    let mut shape_iter = shape.iter();
    let mut leaves_iter = leaves.iter();
    let mut arena = NodeArena::with_capacity(leaves.len());

    // Child slots still waiting for a subtree, next one on top
    let mut open: Vec<(NodeIndex, Bit)> = Vec::new();
    let mut root = None;

    while root.is_none() || !open.is_empty() {
        let bit = shape_iter.next().ok_or(HuffmanError::TruncatedShape)?;
        let index = match bit {
            Bit::Zero => {
                let symbol = leaves_iter.next().ok_or(HuffmanError::MissingLeaf)?;
                arena.push_leaf(*symbol)
            }
            Bit::One => arena.push_open_internal(),
        };

        match open.pop() {
            Some((parent, side)) => arena.set_child(parent, side, index),
            None => root = Some(index),
        }

        if *bit == Bit::One {
            open.push((index, Bit::One));
            open.push((index, Bit::Zero));
        }
    }

    if mode == DecodeMode::Strict {
        let remaining = shape_iter.len();
        if remaining > 0 {
            return Err(HuffmanError::TrailingShape { remaining });
        }
        let remaining = leaves_iter.len();
        if remaining > 0 {
            return Err(HuffmanError::TrailingLeaves { remaining });
        }
    }

    let root = root.ok_or(HuffmanError::TruncatedShape)?;
    Ok(arena.into_tree(root))
}
