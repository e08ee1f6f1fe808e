//! Off-screen raster surface and the source kinds that draw into it.

use image::{DynamicImage, GenericImageView, RgbaImage};

use super::raster::{RasterBuffer, RGBA_BYTES};
use super::AsciiError;
use crate::camera::{Frame, FrameFormat};

/// Largest surface area handed out by default (16384 x 16384 pixels).
pub const DEFAULT_MAX_PIXELS: u64 = 16_384 * 16_384;

/// Something that can be drawn into a [`RasterSurface`].
#[derive(Debug, Clone, Copy)]
pub enum Source<'a> {
    /// A frame from a live video feed
    LiveFrame(&'a Frame),
    /// A decoded still image in any pixel layout
    Image(&'a DynamicImage),
    /// A decoded RGBA bitmap, e.g. one frame of an animation
    Bitmap(&'a RgbaImage),
}

impl Source<'_> {
    /// Pixel dimensions of the source.
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            Source::LiveFrame(frame) => (frame.width, frame.height),
            Source::Image(img) => img.dimensions(),
            Source::Bitmap(bitmap) => bitmap.dimensions(),
        }
    }

    /// Short name for log messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Source::LiveFrame(_) => "live frame",
            Source::Image(_) => "image",
            Source::Bitmap(_) => "bitmap",
        }
    }

    /// Draw into `dst`, an RGBA buffer sized to [`Self::dimensions`].
    ///
    /// Every byte of `dst` is written. Pixels missing from a short source
    /// come out transparent black.
    fn draw_into(&self, dst: &mut [u8]) {
        let written = match self {
            Source::LiveFrame(frame) => draw_frame(frame, dst),
            Source::Image(DynamicImage::ImageRgba8(rgba)) => copy_rgba(rgba.as_raw(), dst),
            Source::Image(img) => {
                let width = img.width() as usize;
                for (x, y, px) in img.pixels() {
                    let idx = (y as usize * width + x as usize) * RGBA_BYTES;
                    if let Some(slot) = dst.get_mut(idx..idx + RGBA_BYTES) {
                        slot.copy_from_slice(&px.0);
                    }
                }
                dst.len()
            }
            Source::Bitmap(bitmap) => copy_rgba(bitmap.as_raw(), dst),
        };
        dst[written..].fill(0);
    }
}

fn copy_rgba(src: &[u8], dst: &mut [u8]) -> usize {
    let n = src.len().min(dst.len());
    dst[..n].copy_from_slice(&src[..n]);
    n
}

fn draw_frame(frame: &Frame, dst: &mut [u8]) -> usize {
    match frame.format {
        FrameFormat::Rgba => copy_rgba(&frame.data, dst),
        FrameFormat::Rgb => {
            let mut written = 0;
            for (rgb, rgba) in frame
                .data
                .chunks_exact(3)
                .zip(dst.chunks_exact_mut(RGBA_BYTES))
            {
                rgba[..3].copy_from_slice(rgb);
                rgba[3] = 255;
                written += RGBA_BYTES;
            }
            written
        }
    }
}

/// Reusable RGBA drawing surface.
///
/// Backing storage is reallocated only when the source's pixel dimensions
/// change. Each [`acquire`](Self::acquire) overwrites the whole buffer, so
/// nothing from a previous call leaks into the next.
#[derive(Debug)]
pub struct RasterSurface {
    buffer: RasterBuffer,
    max_pixels: u64,
    reallocations: u64,
}

impl Default for RasterSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RasterSurface {
    pub fn new() -> Self {
        Self::with_max_pixels(DEFAULT_MAX_PIXELS)
    }

    /// Create a surface that refuses sources larger than `max_pixels`.
    pub fn with_max_pixels(max_pixels: u64) -> Self {
        Self {
            buffer: RasterBuffer::default(),
            max_pixels,
            reallocations: 0,
        }
    }

    /// Draw `source` and return the resulting raster.
    ///
    /// # Errors
    /// Returns [`AsciiError::Initialization`] if a surface of the source's
    /// size cannot be provided.
    pub fn acquire(&mut self, source: &Source<'_>) -> Result<&RasterBuffer, AsciiError> {
        let (width, height) = source.dimensions();
        self.resize(width, height)?;
        source.draw_into(&mut self.buffer.data);
        Ok(&self.buffer)
    }

    /// Current surface size.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.buffer.width, self.buffer.height)
    }

    /// How many times the backing storage has been (re)allocated.
    pub fn reallocations(&self) -> u64 {
        self.reallocations
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), AsciiError> {
        if (width, height) == self.dimensions() {
            return Ok(());
        }

        let pixels = width as u64 * height as u64;
        if pixels > self.max_pixels {
            return Err(AsciiError::Initialization(format!(
                "{}x{} surface exceeds the {} pixel limit",
                width, height, self.max_pixels
            )));
        }

        let len = usize::try_from(pixels)
            .ok()
            .and_then(|p| p.checked_mul(RGBA_BYTES))
            .ok_or_else(|| {
                AsciiError::Initialization(format!(
                    "{}x{} surface is not addressable",
                    width, height
                ))
            })?;

        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|e| AsciiError::Initialization(e.to_string()))?;
        data.resize(len, 0);

        log::debug!(
            "Resizing raster surface {}x{} -> {}x{}",
            self.buffer.width,
            self.buffer.height,
            width,
            height
        );
        self.buffer = RasterBuffer::from_rgba(data, width, height);
        self.reallocations += 1;
        Ok(())
    }
}
