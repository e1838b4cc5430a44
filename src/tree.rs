//! Huffman coding tree stored as an arena of nodes.
//!
//! Nodes live in a single vector and refer to their children by index, so a
//! tree of any depth can be built, walked and dropped without recursion.

use std::fmt;

use crate::bit::Bit;

/// Index of a node in a [HuffmanTree] arena.
pub type NodeIndex = usize;

/// Placeholder for a child slot that has not been filled yet.
const UNSET: NodeIndex = NodeIndex::MAX;

/// One node of a strict binary coding tree.
///
/// A node is a leaf if and only if it has no children. Internal nodes always
/// have both a zero-child and a one-child.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Node {
    Leaf(char),
    Internal { zero: NodeIndex, one: NodeIndex },
}

impl Node {
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    /// Returns the symbol if this is a leaf, else `None`.
    pub fn symbol(&self) -> Option<char> {
        match self {
            Node::Leaf(symbol) => Some(*symbol),
            Node::Internal { .. } => None,
        }
    }

    /// Returns the `(zero, one)` children if this is an internal node, else `None`.
    pub fn children(&self) -> Option<(NodeIndex, NodeIndex)> {
        match self {
            Node::Leaf(_) => None,
            Node::Internal { zero, one } => Some((*zero, *one)),
        }
    }

    /// Returns the child reached by following `bit`, or `None` on a leaf.
    pub fn child(&self, bit: Bit) -> Option<NodeIndex> {
        self.children().map(|(zero, one)| match bit {
            Bit::Zero => zero,
            Bit::One => one,
        })
    }
}

/// Growable node storage used while a tree is being assembled.
#[derive(Debug, Default)]
pub(crate) struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    pub(crate) fn with_capacity(num_leaves: usize) -> Self {
        NodeArena {
            nodes: Vec::with_capacity((2 * num_leaves).saturating_sub(1)),
        }
    }

    pub(crate) fn push_leaf(&mut self, symbol: char) -> NodeIndex {
        self.nodes.push(Node::Leaf(symbol));
        self.nodes.len() - 1
    }

    pub(crate) fn push_internal(&mut self, zero: NodeIndex, one: NodeIndex) -> NodeIndex {
        self.nodes.push(Node::Internal { zero, one });
        self.nodes.len() - 1
    }

    /// Pushes an internal node whose children get attached later with
    /// [NodeArena::set_child].
    pub(crate) fn push_open_internal(&mut self) -> NodeIndex {
        self.push_internal(UNSET, UNSET)
    }

    pub(crate) fn set_child(&mut self, parent: NodeIndex, side: Bit, child: NodeIndex) {
        if let Node::Internal { zero, one } = &mut self.nodes[parent] {
            match side {
                Bit::Zero => *zero = child,
                Bit::One => *one = child,
            }
        }
    }

    pub(crate) fn into_tree(self, root: NodeIndex) -> HuffmanTree {
        debug_assert!(root < self.nodes.len());
        HuffmanTree {
            nodes: self.nodes,
            root,
        }
    }
}

/// A strict binary tree mapping root-to-leaf paths to symbols.
///
/// Two trees compare equal when they have the same shape and the same leaf
/// symbols in the same positions; the arena layout is not compared.
#[derive(Clone, Debug)]
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root: NodeIndex,
}

impl HuffmanTree {
    /// Creates a tree made of a single leaf.
    pub fn leaf(symbol: char) -> Self {
        let mut arena = NodeArena::with_capacity(1);
        let root = arena.push_leaf(symbol);
        arena.into_tree(root)
    }

    /// Creates a tree whose root has `zero` and `one` as subtrees.
    pub fn join(zero: HuffmanTree, one: HuffmanTree) -> Self {
        let offset = zero.nodes.len();
        let mut nodes = zero.nodes;
        nodes.reserve(one.nodes.len() + 1);
        nodes.extend(one.nodes.into_iter().map(|node| match node {
            Node::Leaf(symbol) => Node::Leaf(symbol),
            Node::Internal { zero, one } => Node::Internal {
                zero: zero + offset,
                one: one + offset,
            },
        }));
        nodes.push(Node::Internal {
            zero: zero.root,
            one: one.root + offset,
        });
        let root = nodes.len() - 1;
        HuffmanTree { nodes, root }
    }

    pub fn root(&self) -> NodeIndex {
        self.root
    }

    pub(crate) fn node(&self, index: NodeIndex) -> &Node {
        &self.nodes[index]
    }

    /// Returns the node at `index`, or `None` if it is out of range.
    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        self.nodes.get(index)
    }

    /// Number of nodes, leaves and internal nodes together.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|node| node.is_leaf()).count()
    }

    /// Leaf symbols in pre-order, zero side first.
    pub fn symbols(&self) -> Vec<char> {
        self.preorder()
            .filter_map(|index| self.nodes[index].symbol())
            .collect()
    }

    /// Iterates node indices in pre-order, zero-child before one-child.
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder {
            tree: self,
            stack: vec![self.root],
        }
    }
}

pub struct Preorder<'a> {
    tree: &'a HuffmanTree,
    stack: Vec<NodeIndex>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = NodeIndex;

    fn next(&mut self) -> Option<NodeIndex> {
        let index = self.stack.pop()?;
        if let Some((zero, one)) = self.tree.nodes[index].children() {
            self.stack.push(one);
            self.stack.push(zero);
        }
        Some(index)
    }
}

impl PartialEq for HuffmanTree {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self.root, other.root)];
        while let Some((a, b)) = pending.pop() {
            match (self.nodes[a], other.nodes[b]) {
                (Node::Leaf(x), Node::Leaf(y)) => {
                    if x != y {
                        return false;
                    }
                }
                (
                    Node::Internal { zero: az, one: ao },
                    Node::Internal { zero: bz, one: bo },
                ) => {
                    pending.push((ao, bo));
                    pending.push((az, bz));
                }
                _ => return false,
            }
        }
        true
    }
}

impl Eq for HuffmanTree {}

/// Renders the tree as nested `(zero,one)` pairs, e.g. `(T,((R,S),E))`.
impl fmt::Display for HuffmanTree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        enum Token {
            Visit(NodeIndex),
            Text(&'static str),
        }

        let mut stack = vec![Token::Visit(self.root)];
        while let Some(token) = stack.pop() {
            match token {
                Token::Text(s) => f.write_str(s)?,
                Token::Visit(index) => match self.nodes[index] {
                    Node::Leaf(symbol) => write!(f, "{}", symbol)?,
                    Node::Internal { zero, one } => {
                        f.write_str("(")?;
                        stack.push(Token::Text(")"));
                        stack.push(Token::Visit(one));
                        stack.push(Token::Text(","));
                        stack.push(Token::Visit(zero));
                    }
                },
            }
        }
        Ok(())
    }
}
