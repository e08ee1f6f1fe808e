//! Brightness to character lookup tables.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::ops::Index;

use super::AsciiError;

/// Number of entries in a lookup table, one per 8-bit luminance value.
pub const LUT_SIZE: usize = 256;

/// Precomputed luminance-to-glyph mapping.
///
/// Immutable once built. Rebuild it (or fetch it from a [`LutCache`])
/// whenever the charset or the invert flag changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrightnessLut {
    table: [char; LUT_SIZE],
}

impl BrightnessLut {
    /// Glyph for a luminance value.
    #[inline]
    pub fn glyph(&self, luminance: u8) -> char {
        self.table[luminance as usize]
    }

    /// Glyph used for the darkest luminance (and for empty cells).
    #[inline]
    pub fn darkest(&self) -> char {
        self.table[0]
    }

    /// The full table, indexed by luminance.
    pub fn as_slice(&self) -> &[char; LUT_SIZE] {
        &self.table
    }
}

impl Index<u8> for BrightnessLut {
    type Output = char;

    fn index(&self, luminance: u8) -> &char {
        &self.table[luminance as usize]
    }
}

/// Build a lookup table from a charset ordered darkest to brightest.
///
/// Each luminance `b` maps to index `floor(b / 255 * (len - 1))`, mirrored
/// to `(len - 1) - index` when `invert` is set. Quantization is linear with
/// no dithering.
///
/// # Errors
/// Returns [`AsciiError::InvalidArgument`] if `charset` is empty.
///
/// # Example
/// ```
/// use ascii_cam::ascii::{build_lut, SIMPLE_CHARSET};
/// let lut = build_lut(SIMPLE_CHARSET, false).unwrap();
/// assert_eq!(lut[0], ' ');
/// assert_eq!(lut[255], '@');
/// ```
pub fn build_lut(charset: &[char], invert: bool) -> Result<BrightnessLut, AsciiError> {
    if charset.is_empty() {
        return Err(AsciiError::InvalidArgument(
            "charset must contain at least one glyph".to_string(),
        ));
    }

    let last = charset.len() - 1;
    let mut table = [charset[0]; LUT_SIZE];
    for (b, slot) in table.iter_mut().enumerate() {
        // Integer form of floor(b / 255 * last), exact for every b.
        let idx = (b * last) / 255;
        let idx = if invert { last - idx } else { idx };
        *slot = charset[idx];
    }

    Ok(BrightnessLut { table })
}

/// Memoizes lookup tables per (charset, invert) pair across frames.
#[derive(Debug, Default)]
pub struct LutCache {
    tables: HashMap<(Vec<char>, bool), BrightnessLut>,
}

impl LutCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the table for `(charset, invert)`, building it on first use.
    ///
    /// # Errors
    /// Returns [`AsciiError::InvalidArgument`] if `charset` is empty.
    pub fn get(&mut self, charset: &[char], invert: bool) -> Result<&BrightnessLut, AsciiError> {
        match self.tables.entry((charset.to_vec(), invert)) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                log::debug!(
                    "Building LUT for {} glyphs (invert: {})",
                    charset.len(),
                    invert
                );
                let lut = build_lut(charset, invert)?;
                Ok(entry.insert(lut))
            }
        }
    }

    /// Number of cached tables.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Drop every cached table.
    pub fn clear(&mut self) {
        self.tables.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::{BLOCKS_CHARSET, SIMPLE_CHARSET};

    #[test]
    fn test_build_lut_endpoints() {
        let lut = build_lut(SIMPLE_CHARSET, false).unwrap();
        assert_eq!(lut[0], ' ');
        assert_eq!(lut[255], '@');
        assert_eq!(lut.darkest(), ' ');
    }

    #[test]
    fn test_build_lut_mid_gray() {
        // floor(128 / 255 * 9) = 4
        let lut = build_lut(SIMPLE_CHARSET, false).unwrap();
        assert_eq!(lut[128], '=');
    }

    #[test]
    fn test_build_lut_inverted_mirrors() {
        let normal = build_lut(BLOCKS_CHARSET, false).unwrap();
        let inverted = build_lut(BLOCKS_CHARSET, true).unwrap();
        assert_eq!(inverted[255], normal[0]);
        assert_eq!(inverted[0], normal[255]);
    }

    #[test]
    fn test_build_lut_empty_fails() {
        assert!(matches!(
            build_lut(&[], false),
            Err(AsciiError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_build_lut_single_glyph() {
        let lut = build_lut(&['x'], true).unwrap();
        assert!(lut.as_slice().iter().all(|&c| c == 'x'));
    }

    #[test]
    fn test_lut_cache_reuses_tables() {
        let mut cache = LutCache::new();
        assert!(cache.is_empty());

        let first = cache.get(SIMPLE_CHARSET, false).unwrap().clone();
        let second = cache.get(SIMPLE_CHARSET, false).unwrap().clone();
        assert_eq!(first, second);
        assert_eq!(cache.len(), 1);

        cache.get(SIMPLE_CHARSET, true).unwrap();
        assert_eq!(cache.len(), 2);

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_lut_cache_rejects_empty() {
        let mut cache = LutCache::new();
        assert!(cache.get(&[], false).is_err());
        assert!(cache.is_empty());
    }
}
