//! RGB to luminance conversion using ITU-R BT.709 weights.

/// BT.709 red weight.
pub const RED_WEIGHT: f64 = 0.2126;
/// BT.709 green weight.
pub const GREEN_WEIGHT: f64 = 0.7152;
/// BT.709 blue weight.
pub const BLUE_WEIGHT: f64 = 0.0722;

/// Luminance of an 8-bit RGB triple.
///
/// Y = round(0.2126*R + 0.7152*G + 0.0722*B), applied directly to the
/// channel values with no gamma handling.
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> u8 {
    luminance_from_means(r as f64, g as f64, b as f64)
}

/// Luminance of per-channel means, clamped to 0..=255.
///
/// Cell averages are fractional, so the weighting happens before the single
/// rounding step.
#[inline]
pub fn luminance_from_means(r: f64, g: f64, b: f64) -> u8 {
    let y = RED_WEIGHT * r + GREEN_WEIGHT * g + BLUE_WEIGHT * b;
    y.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luminance_extremes() {
        assert_eq!(luminance(255, 255, 255), 255);
        assert_eq!(luminance(0, 0, 0), 0);
    }

    #[test]
    fn test_luminance_primaries() {
        assert_eq!(luminance(255, 0, 0), 54);
        assert_eq!(luminance(0, 255, 0), 182);
        assert_eq!(luminance(0, 0, 255), 18);
    }

    #[test]
    fn test_luminance_from_means_clamps() {
        assert_eq!(luminance_from_means(400.0, 400.0, 400.0), 255);
        assert_eq!(luminance_from_means(-5.0, 0.0, 0.0), 0);
    }

    #[test]
    fn test_luminance_from_means_rounds() {
        // 0.7152 * 0.7 = 0.50064 rounds up
        assert_eq!(luminance_from_means(0.0, 0.7, 0.0), 1);
        assert_eq!(luminance_from_means(0.0, 0.6, 0.0), 0);
    }
}
