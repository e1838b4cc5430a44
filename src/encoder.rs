use std::collections::HashMap;

use crate::{
    bit::Bit,
    error::{HuffmanError, Result},
    tree::{HuffmanTree, Node},
};

/// Encodes text using the root-to-leaf paths of a tree.
pub struct HuffmanEncoder {
    codes: HashMap<char, Vec<Bit>>,
}

impl HuffmanEncoder {
    pub fn new(tree: &HuffmanTree) -> Self {
        HuffmanEncoder {
            codes: code_map(tree),
        }
    }

    pub fn code(&self, symbol: char) -> Option<&[Bit]> {
        self.codes.get(&symbol).map(Vec::as_slice)
    }

    pub fn codes(&self) -> &HashMap<char, Vec<Bit>> {
        &self.codes
    }

    pub fn encode(&self, text: &str) -> Result<Vec<Bit>> {
        let mut bits = Vec::new();
        for c in text.chars() {
            let code = self.code(c).ok_or(HuffmanError::UnmappedSymbol(c))?;
            bits.extend_from_slice(code);
        }
        Ok(bits)
    }
}

/// Encodes `text` against `tree`.
pub fn encode(tree: &HuffmanTree, text: &str) -> Result<Vec<Bit>> {
    HuffmanEncoder::new(tree).encode(text)
}

fn code_map(tree: &HuffmanTree) -> HashMap<char, Vec<Bit>> {
    let mut codes = HashMap::new();
    let mut pending = vec![(tree.root(), Vec::new())];
    while let Some((index, path)) = pending.pop() {
        match tree.node(index) {
            Node::Leaf(symbol) => {
                codes.insert(*symbol, path);
            }
            Node::Internal { zero, one } => {
                let mut one_path = path.clone();
                one_path.push(Bit::One);
                let mut zero_path = path;
                zero_path.push(Bit::Zero);
                pending.push((*one, one_path));
                pending.push((*zero, zero_path));
            }
        }
    }
    codes
}
