//! Character-code ranges used to constrain sampled characters.

use serde::{Deserialize, Serialize};

/// Inclusive range of character codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharRange {
    pub from: u32,
    pub to: u32,
}

impl CharRange {
    /// Printable ASCII without space: `!` through `~`.
    pub const ASCII_PRINTABLE: CharRange = CharRange::new(33, 126);
    /// `0` through `9`.
    pub const DIGITS: CharRange = CharRange::new(48, 57);
    /// `a` through `z`.
    pub const LOWER_ALPHA: CharRange = CharRange::new(97, 122);
    /// `A` through `Z`.
    pub const UPPER_ALPHA: CharRange = CharRange::new(65, 90);

    pub const fn new(from: u32, to: u32) -> Self {
        Self { from, to }
    }

    /// Whether `c` falls inside this range.
    pub fn contains(&self, c: char) -> bool {
        (self.from..=self.to).contains(&(c as u32))
    }
}

impl Default for CharRange {
    fn default() -> Self {
        Self::ASCII_PRINTABLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_ranges() {
        assert!(CharRange::DIGITS.contains('0'));
        assert!(CharRange::DIGITS.contains('9'));
        assert!(!CharRange::DIGITS.contains('a'));
        assert!(CharRange::LOWER_ALPHA.contains('z'));
        assert!(CharRange::UPPER_ALPHA.contains('A'));
        assert!(!CharRange::ASCII_PRINTABLE.contains(' '));
        assert!(CharRange::ASCII_PRINTABLE.contains('~'));
    }

    #[test]
    fn test_default_is_printable_ascii() {
        assert_eq!(CharRange::default(), CharRange::ASCII_PRINTABLE);
    }
}
