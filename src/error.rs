use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HuffmanError {
    #[error("text must contain at least two distinct symbols, found {distinct}")]
    InsufficientAlphabet { distinct: usize },

    #[error("symbol {0:?} has no code in the tree")]
    UnmappedSymbol(char),

    #[error("tree shape ended before the tree was complete")]
    TruncatedShape,

    #[error("tree shape asks for more leaves than were provided")]
    MissingLeaf,

    #[error("{remaining} tree shape bits left after the tree was complete")]
    TrailingShape { remaining: usize },

    #[error("{remaining} leaf symbols left after the tree was complete")]
    TrailingLeaves { remaining: usize },

    #[error("message ended {dangling} bits into a code")]
    IncompletePath { dangling: usize },

    #[error("a tree made of a single leaf cannot decode message bits")]
    LeafRoot,

    #[error("invalid bit {0:?}, expected '0' or '1'")]
    InvalidBit(char),

    #[error("Invalid encoded data")]
    InvalidEncoding(#[source] toml::de::Error),

    #[error("Cannot serialize encoded data")]
    Serialization(#[from] toml::ser::Error),

    #[error("Configuration file not found at \"{:?}\"", .config_file_path.as_path())]
    MissingConfigurationFile {
        config_file_path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid configuration file")]
    InvalidConfig(#[source] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, HuffmanError>;
