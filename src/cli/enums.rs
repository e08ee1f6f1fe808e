//! CLI enum types for charset, row color and output format options.

use clap::ValueEnum;

use crate::ascii::{self, RowColor};
use crate::renderer::OutputFormat;

/// ASCII character set for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CharacterSet {
    #[default]
    Simple,
    Detailed,
    Blocks,
}

impl From<CharacterSet> for ascii::CharSet {
    fn from(c: CharacterSet) -> Self {
        match c {
            CharacterSet::Simple => ascii::CharSet::Simple,
            CharacterSet::Detailed => ascii::CharSet::Detailed,
            CharacterSet::Blocks => ascii::CharSet::Blocks,
        }
    }
}

/// Row color strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum RowColorMode {
    #[default]
    LastCell,
    Average,
}

impl From<RowColorMode> for RowColor {
    fn from(m: RowColorMode) -> Self {
        match m {
            RowColorMode::LastCell => RowColor::LastCell,
            RowColorMode::Average => RowColor::Average,
        }
    }
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Ansi,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Text => OutputFormat::Text,
            Format::Ansi => OutputFormat::Ansi,
            Format::Json => OutputFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charset_to_ascii_charset() {
        assert_eq!(
            ascii::CharSet::from(CharacterSet::Simple),
            ascii::CharSet::Simple
        );
        assert_eq!(
            ascii::CharSet::from(CharacterSet::Detailed),
            ascii::CharSet::Detailed
        );
        assert_eq!(
            ascii::CharSet::from(CharacterSet::Blocks),
            ascii::CharSet::Blocks
        );
    }

    #[test]
    fn test_row_color_mode_to_row_color() {
        assert_eq!(RowColor::from(RowColorMode::LastCell), RowColor::LastCell);
        assert_eq!(RowColor::from(RowColorMode::Average), RowColor::Average);
    }

    #[test]
    fn test_format_to_output_format() {
        assert_eq!(OutputFormat::from(Format::Text), OutputFormat::Text);
        assert_eq!(OutputFormat::from(Format::Ansi), OutputFormat::Ansi);
        assert_eq!(OutputFormat::from(Format::Json), OutputFormat::Json);
    }
}
