//! RGBA raster buffers read back from the drawing surface.

/// Bytes per RGBA pixel.
pub const RGBA_BYTES: usize = 4;

/// Decoded pixel data for one source frame or image.
///
/// Row-major, four 8-bit channels per pixel (R, G, B, A).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RasterBuffer {
    /// Raw pixel data in RGBA format
    pub data: Vec<u8>,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl RasterBuffer {
    /// Wrap existing RGBA bytes.
    pub fn from_rgba(data: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            data,
            width,
            height,
        }
    }

    /// A raster of one repeated color, handy for fixtures and warm-up frames.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let pixels = width as usize * height as usize;
        let mut data = Vec::with_capacity(pixels * RGBA_BYTES);
        for _ in 0..pixels {
            data.extend_from_slice(&rgba);
        }
        Self::from_rgba(data, width, height)
    }

    /// Number of pixels described by the dimensions.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// True when there is nothing to sample.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.data.is_empty()
    }

    /// Read one pixel, or `None` when it falls outside the stored data.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * RGBA_BYTES;
        self.data
            .get(idx..idx + RGBA_BYTES)
            .map(|px| [px[0], px[1], px[2], px[3]])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_raster() {
        let raster = RasterBuffer::filled(3, 2, [1, 2, 3, 255]);
        assert_eq!(raster.data.len(), 3 * 2 * 4);
        assert_eq!(raster.pixel_count(), 6);
        assert_eq!(raster.pixel(2, 1), Some([1, 2, 3, 255]));
    }

    #[test]
    fn test_pixel_out_of_bounds() {
        let raster = RasterBuffer::filled(2, 2, [0, 0, 0, 255]);
        assert_eq!(raster.pixel(2, 0), None);
        assert_eq!(raster.pixel(0, 2), None);
    }

    #[test]
    fn test_pixel_short_data() {
        // Dimensions claim more pixels than the data holds
        let raster = RasterBuffer::from_rgba(vec![9, 9, 9, 9], 2, 1);
        assert_eq!(raster.pixel(0, 0), Some([9, 9, 9, 9]));
        assert_eq!(raster.pixel(1, 0), None);
    }

    #[test]
    fn test_empty_raster() {
        assert!(RasterBuffer::default().is_empty());
        assert!(!RasterBuffer::filled(1, 1, [0; 4]).is_empty());
    }
}
