use crate::{
    bit::Bit,
    config::DecodeMode,
    error::{HuffmanError, Result},
    tree::HuffmanTree,
};

/// Decodes message bits by walking a tree from the root.
pub struct HuffmanDecoder<'a> {
    tree: &'a HuffmanTree,
    mode: DecodeMode,
}

impl<'a> HuffmanDecoder<'a> {
    pub fn new(tree: &'a HuffmanTree) -> Self {
        HuffmanDecoder {
            tree,
            mode: DecodeMode::Strict,
        }
    }

    pub fn with_mode(mut self, mode: DecodeMode) -> Self {
        self.mode = mode;
        self
    }

    /// Each bit moves to the matching child; reaching a leaf emits its symbol
    /// and restarts from the root.
    ///
    /// In [DecodeMode::Strict] a message ending mid-code, or any bit read while
    /// the root is itself a leaf, is an error. In [DecodeMode::Permissive] the
    /// partial code is dropped and decoding stops at the leaf root.
    pub fn decode(&self, bits: &[Bit]) -> Result<String> {
        let root = self.tree.root();
        let mut result = String::new();
        let mut current = root;
        let mut dangling = 0;

        for bit in bits {
            current = match self.tree.node(current).child(*bit) {
                Some(child) => child,
                None => match self.mode {
                    DecodeMode::Strict => return Err(HuffmanError::LeafRoot),
                    DecodeMode::Permissive => return Ok(result),
                },
            };

            if let Some(symbol) = self.tree.node(current).symbol() {
                result.push(symbol);
                current = root;
                dangling = 0;
            } else {
                dangling += 1;
            }
        }

        if dangling > 0 {
            match self.mode {
                DecodeMode::Strict => return Err(HuffmanError::IncompletePath { dangling }),
                DecodeMode::Permissive => {
                    log::debug!("Dropping {} bits of an incomplete code", dangling)
                }
            }
        }
        Ok(result)
    }
}

/// Decodes `bits` against `tree`, rejecting a message that ends mid-code.
pub fn decode(tree: &HuffmanTree, bits: &[Bit]) -> Result<String> {
    HuffmanDecoder::new(tree).decode(bits)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{decode, HuffmanDecoder};
    use crate::{
        bit::{parse_bits, Bit},
        config::DecodeMode,
        encoder::encode,
        error::HuffmanError,
        tree::{tests::example_tree, HuffmanTree},
    };

    #[rstest]
    #[case("11", "E")]
    #[case("101110", "SET")]
    #[case("101010011110101", "STREETS")]
    #[case("010111100", "TSER")]
    #[case("100111010", "REST")]
    #[case("1111111111", "EEEEE")]
    #[case("0000000", "TTTTTTT")]
    #[case("", "")]
    fn decode_with_example_tree(#[case] bits: &str, #[case] expected: &str) {
        let bits = parse_bits(bits).unwrap();
        assert_eq!(decode(&example_tree(), &bits).unwrap(), expected);
    }

    #[rstest]
    #[case("TRESSRETT")]
    #[case("T")]
    #[case("E")]
    #[case("SSSSSRSSSSS")]
    fn encode_then_decode(#[case] text: &str) {
        let tree = example_tree();
        let bits = encode(&tree, text).unwrap();
        assert_eq!(decode(&tree, &bits).unwrap(), text);
    }

    #[test]
    fn incomplete_code() {
        // "SE" followed by the first two bits of R
        let bits = parse_bits("1011110").unwrap();
        assert!(matches!(
            decode(&example_tree(), &bits),
            Err(HuffmanError::IncompletePath { dangling: 2 })
        ));

        let tree = example_tree();
        let decoder = HuffmanDecoder::new(&tree).with_mode(DecodeMode::Permissive);
        assert_eq!(decoder.decode(&bits).unwrap(), "SE");
    }

    #[test]
    fn leaf_root() {
        let tree = HuffmanTree::leaf('A');
        assert_eq!(decode(&tree, &[]).unwrap(), "");
        assert!(matches!(
            decode(&tree, &[Bit::Zero]),
            Err(HuffmanError::LeafRoot)
        ));

        let decoder = HuffmanDecoder::new(&tree).with_mode(DecodeMode::Permissive);
        assert_eq!(decoder.decode(&[Bit::One, Bit::Zero]).unwrap(), "");
    }
}
