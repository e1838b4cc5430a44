use serde_derive::{Deserialize, Serialize};

use crate::{
    bit::{format_bits, parse_bits, Bit},
    error::{HuffmanError, Result},
};

/// The compressed form of a message: the flattened tree plus the message bits.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EncodedText", into = "EncodedText")]
pub struct EncodedData {
    pub tree_shape: Vec<Bit>,
    pub tree_leaves: Vec<char>,
    pub message_bits: Vec<Bit>,
}

/// Text form written to and read from TOML, bits as `'0'`/`'1'` characters.
#[derive(Serialize, Deserialize)]
struct EncodedText {
    tree_shape: String,
    tree_leaves: String,
    message_bits: String,
}

impl EncodedData {
    pub fn leaf_count(&self) -> usize {
        self.tree_leaves.len()
    }

    /// Checks the shape holds one leaf marker per leaf symbol and `2L - 1`
    /// markers overall.
    pub fn is_consistent(&self) -> bool {
        let leaf_markers = self.tree_shape.iter().filter(|b| **b == Bit::Zero).count();
        let leaves = self.leaf_count();
        leaves > 0 && leaf_markers == leaves && self.tree_shape.len() == 2 * leaves - 1
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Parses the TOML text form.
    ///
    /// Any malformed document, including a bit field holding something other
    /// than `'0'`/`'1'`, is reported as [HuffmanError::InvalidEncoding].
    pub fn from_toml(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(HuffmanError::InvalidEncoding)
    }
}

impl From<EncodedData> for EncodedText {
    fn from(data: EncodedData) -> Self {
        EncodedText {
            tree_shape: format_bits(&data.tree_shape),
            tree_leaves: data.tree_leaves.into_iter().collect(),
            message_bits: format_bits(&data.message_bits),
        }
    }
}

impl TryFrom<EncodedText> for EncodedData {
    type Error = HuffmanError;

    fn try_from(text: EncodedText) -> Result<Self> {
        Ok(EncodedData {
            tree_shape: parse_bits(&text.tree_shape)?,
            tree_leaves: text.tree_leaves.chars().collect(),
            message_bits: parse_bits(&text.message_bits)?,
        })
    }
}
