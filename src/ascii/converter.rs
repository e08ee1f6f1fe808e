//! Source-to-ASCII converter.

use image::{DynamicImage, RgbaImage};

use super::convert::{raster_to_ascii_with, ConversionResult, RowColor};
use super::dimensions::GridDimensions;
use super::lut::BrightnessLut;
use super::surface::{RasterSurface, Source};
use super::AsciiError;
use crate::camera::Frame;

/// Converts live frames, still images and bitmaps to ASCII.
///
/// Owns the scratch [`RasterSurface`], so one converter handles one
/// conversion at a time. Keep a converter per feed to reuse its surface
/// across frames.
#[derive(Debug, Default)]
pub struct AsciiConverter {
    surface: RasterSurface,
    row_color: RowColor,
}

impl AsciiConverter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an existing surface (for example one with a custom size limit).
    pub fn with_surface(surface: RasterSurface) -> Self {
        Self {
            surface,
            row_color: RowColor::default(),
        }
    }

    /// Choose how row colors are derived in color mode.
    pub fn with_row_color(mut self, row_color: RowColor) -> Self {
        self.row_color = row_color;
        self
    }

    pub fn row_color(&self) -> RowColor {
        self.row_color
    }

    pub fn surface(&self) -> &RasterSurface {
        &self.surface
    }

    /// Convert a frame from a live feed.
    pub fn convert_from_live_frame(
        &mut self,
        frame: &Frame,
        grid: GridDimensions,
        lut: &BrightnessLut,
        color_mode: bool,
    ) -> Result<ConversionResult, AsciiError> {
        self.convert(Source::LiveFrame(frame), grid, lut, color_mode)
    }

    /// Convert a decoded still image.
    pub fn convert_from_image(
        &mut self,
        image: &DynamicImage,
        grid: GridDimensions,
        lut: &BrightnessLut,
        color_mode: bool,
    ) -> Result<ConversionResult, AsciiError> {
        self.convert(Source::Image(image), grid, lut, color_mode)
    }

    /// Convert a decoded RGBA bitmap.
    pub fn convert_from_bitmap(
        &mut self,
        bitmap: &RgbaImage,
        grid: GridDimensions,
        lut: &BrightnessLut,
        color_mode: bool,
    ) -> Result<ConversionResult, AsciiError> {
        self.convert(Source::Bitmap(bitmap), grid, lut, color_mode)
    }

    /// Draw any source into the surface and convert the result.
    ///
    /// # Errors
    /// Returns [`AsciiError::Initialization`] if the surface cannot hold the
    /// source.
    pub fn convert(
        &mut self,
        source: Source<'_>,
        grid: GridDimensions,
        lut: &BrightnessLut,
        color_mode: bool,
    ) -> Result<ConversionResult, AsciiError> {
        let row_color = color_mode.then_some(self.row_color);
        let raster = self.surface.acquire(&source)?;
        log::trace!(
            "Converting {} {}x{} to {}x{} grid",
            source.kind(),
            raster.width,
            raster.height,
            grid.columns,
            grid.rows
        );
        Ok(raster_to_ascii_with(raster, grid, lut, row_color))
    }
}
