//! Character set definitions for ASCII rendering.

use super::AsciiError;

/// Simple ASCII density ramp (10 levels).
/// Characters ordered from darkest (space) to brightest (@).
pub const SIMPLE_CHARSET: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Detailed density ramp (70 levels), Paul Bourke's ramp ordered dark to bright.
#[rustfmt::skip]
pub const DETAILED_CHARSET: &[char] = &[
    ' ', '.', '\'', '`', '^', '"', ',', ':', ';', 'I', 'l', '!', 'i', '>', '<', '~',
    '+', '_', '-', '?', ']', '[', '}', '{', '1', ')', '(', '|', '\\', '/', 't', 'f',
    'j', 'r', 'x', 'n', 'u', 'v', 'c', 'z', 'X', 'Y', 'U', 'J', 'C', 'L', 'Q', '0',
    'O', 'Z', 'm', 'w', 'q', 'p', 'd', 'b', 'k', 'h', 'a', 'o', '*', '#', 'M', 'W',
    '&', '8', '%', 'B', '@', '$',
];

/// Block character set (5 levels).
/// Uses Unicode shade blocks for higher perceived resolution.
pub const BLOCKS_CHARSET: &[char] = &[' ', '░', '▒', '▓', '█'];

/// Named character set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CharSet {
    /// Simple ASCII density ramp (10 levels)
    #[default]
    Simple,
    /// Detailed ramp (70 levels)
    Detailed,
    /// Unicode shade blocks (5 levels)
    Blocks,
}

impl CharSet {
    /// Every named set, in listing order.
    pub const ALL: [CharSet; 3] = [CharSet::Simple, CharSet::Detailed, CharSet::Blocks];

    /// Get the glyph slice for this charset, darkest first.
    pub fn chars(&self) -> &'static [char] {
        match self {
            CharSet::Simple => SIMPLE_CHARSET,
            CharSet::Detailed => DETAILED_CHARSET,
            CharSet::Blocks => BLOCKS_CHARSET,
        }
    }

    /// Get the name used in config files and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            CharSet::Simple => "simple",
            CharSet::Detailed => "detailed",
            CharSet::Blocks => "blocks",
        }
    }

    /// Look up a named charset.
    pub fn from_name(name: &str) -> Result<Self, AsciiError> {
        CharSet::ALL
            .into_iter()
            .find(|set| set.name().eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| {
                AsciiError::InvalidArgument(format!(
                    "unknown charset '{}' (expected simple, detailed or blocks)",
                    name
                ))
            })
    }
}

/// Name-to-glyphs mapping of every built-in charset.
pub fn named_charsets() -> Vec<(&'static str, &'static [char])> {
    CharSet::ALL
        .iter()
        .map(|set| (set.name(), set.chars()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lengths() {
        assert_eq!(SIMPLE_CHARSET.len(), 10);
        assert_eq!(DETAILED_CHARSET.len(), 70);
        assert_eq!(BLOCKS_CHARSET.len(), 5);
    }

    #[test]
    fn test_builtins_start_dark() {
        for (name, chars) in named_charsets() {
            assert_eq!(chars[0], ' ', "{} should start with a space", name);
        }
    }

    #[test]
    fn test_from_name() {
        assert_eq!(CharSet::from_name("simple"), Ok(CharSet::Simple));
        assert_eq!(CharSet::from_name("Detailed"), Ok(CharSet::Detailed));
        assert_eq!(CharSet::from_name(" blocks "), Ok(CharSet::Blocks));
        assert!(matches!(
            CharSet::from_name("braille"),
            Err(AsciiError::InvalidArgument(_))
        ));
    }
}
