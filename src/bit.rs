use std::fmt;

use itertools::Itertools;

use crate::error::{HuffmanError, Result};

/// A single binary digit, used both to walk the tree and as a message unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Bit {
    Zero,
    One,
}

impl From<bool> for Bit {
    fn from(value: bool) -> Self {
        if value {
            Bit::One
        } else {
            Bit::Zero
        }
    }
}

impl From<Bit> for u8 {
    fn from(bit: Bit) -> Self {
        match bit {
            Bit::Zero => 0,
            Bit::One => 1,
        }
    }
}

impl TryFrom<u8> for Bit {
    type Error = HuffmanError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Bit::Zero),
            1 => Ok(Bit::One),
            // Report the digit the way it would have been written
            _ => Err(HuffmanError::InvalidBit(
                char::from_digit(value as u32, 10).unwrap_or(char::REPLACEMENT_CHARACTER),
            )),
        }
    }
}

impl TryFrom<char> for Bit {
    type Error = HuffmanError;

    fn try_from(value: char) -> Result<Self> {
        match value {
            '0' => Ok(Bit::Zero),
            '1' => Ok(Bit::One),
            c => Err(HuffmanError::InvalidBit(c)),
        }
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Bit::Zero => write!(f, "0"),
            Bit::One => write!(f, "1"),
        }
    }
}

/// Parses a string made only of `'0'` and `'1'` characters.
pub fn parse_bits(s: &str) -> Result<Vec<Bit>> {
    s.chars().map(Bit::try_from).collect()
}

pub fn format_bits(bits: &[Bit]) -> String {
    bits.iter().join("")
}

/// Converts a slice of `0`/`1` integers, handy for writing known vectors.
pub fn from_digits(digits: &[u8]) -> Result<Vec<Bit>> {
    digits.iter().map(|d| Bit::try_from(*d)).collect()
}
