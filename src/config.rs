use std::{fs, path::PathBuf};

use serde_derive::Deserialize;

use crate::HuffmanError;

/// How malformed encoded data is treated while decoding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodeMode {
    /// Report every inconsistency as an error.
    #[default]
    Strict,
    /// Ignore leftover tree data and drop a message that ends mid-code.
    Permissive,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub decode_mode: DecodeMode,
}

impl Config {
    pub fn new(path: &PathBuf) -> Result<Self, HuffmanError> {
        let content =
            fs::read_to_string(path).map_err(|e| HuffmanError::MissingConfigurationFile {
                config_file_path: path.clone(),
                source: e,
            })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, HuffmanError> {
        toml::from_str(content).map_err(HuffmanError::InvalidConfig)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::{Config, DecodeMode};
    use crate::HuffmanError;

    #[test]
    fn defaults_to_strict() {
        assert_eq!(Config::default().decode_mode, DecodeMode::Strict);
        assert_eq!(Config::parse("").unwrap().decode_mode, DecodeMode::Strict);
    }

    #[test]
    fn reads_decode_mode() {
        let config = Config::parse("decode_mode = \"permissive\"").unwrap();
        assert_eq!(config.decode_mode, DecodeMode::Permissive);
    }

    #[test]
    fn rejects_unknown_mode() {
        assert!(matches!(
            Config::parse("decode_mode = \"lenient\""),
            Err(HuffmanError::InvalidConfig(_))
        ));
    }

    #[test]
    fn missing_file() {
        let path = PathBuf::from("does/not/exist.toml");
        assert!(matches!(
            Config::new(&path),
            Err(HuffmanError::MissingConfigurationFile { .. })
        ));
    }
}
