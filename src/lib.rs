//! Huffman coding of text.
//!
//! [compress] builds an optimal prefix code for the symbol frequencies of a
//! text and returns the flattened coding tree together with the encoded
//! message; [decompress] rebuilds the tree and decodes the message.
//!
//! ```
//! let data = rhuffman::compress("STREETTEST")?;
//! assert_eq!(rhuffman::bit::format_bits(&data.tree_shape), "1011000");
//! assert_eq!(rhuffman::decompress(&data)?, "STREETTEST");
//! # Ok::<(), rhuffman::HuffmanError>(())
//! ```

pub mod bit;
pub mod builder;
pub mod config;
pub mod decoder;
pub mod encoded_data;
pub mod encoder;
pub mod error;
pub mod flatten;
pub mod tree;

pub use bit::Bit;
pub use builder::{build_tree, count_frequencies};
pub use config::{Config, DecodeMode};
pub use decoder::{decode, HuffmanDecoder};
pub use encoded_data::EncodedData;
pub use encoder::{encode, HuffmanEncoder};
pub use error::{HuffmanError, Result};
pub use flatten::{flatten, unflatten, unflatten_with};
pub use tree::{HuffmanTree, Node, NodeIndex};

pub fn compress(text: &str) -> Result<EncodedData> {
    let tree = build_tree(text)?;
    let (tree_shape, tree_leaves) = flatten(&tree);
    let message_bits = encode(&tree, text)?;
    log::debug!(
        "Compressed {} symbols ({} distinct) into {} message bits",
        text.chars().count(),
        tree_leaves.len(),
        message_bits.len()
    );
    Ok(EncodedData {
        tree_shape,
        tree_leaves,
        message_bits,
    })
}

pub fn decompress(data: &EncodedData) -> Result<String> {
    decompress_with(data, DecodeMode::Strict)
}

pub fn decompress_with(data: &EncodedData, mode: DecodeMode) -> Result<String> {
    let tree = unflatten_with(&data.tree_shape, &data.tree_leaves, mode)?;
    let text = HuffmanDecoder::new(&tree)
        .with_mode(mode)
        .decode(&data.message_bits)?;
    log::debug!(
        "Decompressed {} message bits into {} symbols",
        data.message_bits.len(),
        text.chars().count()
    );
    Ok(text)
}
