//! Raster-to-glyph conversion.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use super::dimensions::GridDimensions;
use super::luminance::luminance_from_means;
use super::lut::BrightnessLut;
use super::raster::RasterBuffer;

/// Mean RGB color of a cell or row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl CellColor {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    fn from_means(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: r.round().clamp(0.0, 255.0) as u8,
            g: g.round().clamp(0.0, 255.0) as u8,
            b: b.round().clamp(0.0, 255.0) as u8,
        }
    }
}

impl fmt::Display for CellColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl Serialize for CellColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// How a row's representative color is chosen in color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RowColor {
    /// Color of the last cell in the row that had pixels.
    #[default]
    LastCell,
    /// Mean of every cell in the row that had pixels.
    Average,
}

/// Text block plus optional per-row colors for one converted frame.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversionResult {
    /// One line per grid row, every line terminated by `\n`
    pub text: String,
    /// One entry per row when color mode is on; `None` entries are rows
    /// where no cell covered any pixel
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<Option<CellColor>>>,
    /// Grid the text was laid out on
    pub grid: GridDimensions,
}

impl ConversionResult {
    /// Iterate over the rows without their terminators.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }

    /// Row colors formatted as `rgb(r, g, b)`; rows without a color are
    /// skipped.
    pub fn color_strings(&self) -> Vec<String> {
        self.colors
            .iter()
            .flatten()
            .flatten()
            .map(|c| c.to_string())
            .collect()
    }
}

/// Convert a raster to ASCII, taking each row's color from its last cell.
///
/// See [`raster_to_ascii_with`] for the algorithm.
pub fn raster_to_ascii(
    buffer: &RasterBuffer,
    grid: GridDimensions,
    lut: &BrightnessLut,
    color_mode: bool,
) -> ConversionResult {
    let row_color = color_mode.then_some(RowColor::LastCell);
    raster_to_ascii_with(buffer, grid, lut, row_color)
}

/// Convert a raster to a `columns x rows` glyph grid.
///
/// Each cell covers the source rectangle
/// `[floor(c*cell_w), floor((c+1)*cell_w)) x [floor(r*cell_h), floor((r+1)*cell_h))`.
/// Cell sizes may differ by one pixel from flooring. The mean R, G and B of
/// the cell (alpha ignored) give a BT.709 luminance that indexes `lut`.
/// Cells covering no pixels get the darkest glyph and contribute no color.
///
/// Never fails: zero-sized grids or rasters produce all-darkest or empty
/// output.
pub fn raster_to_ascii_with(
    buffer: &RasterBuffer,
    grid: GridDimensions,
    lut: &BrightnessLut,
    row_color: Option<RowColor>,
) -> ConversionResult {
    let GridDimensions { columns, rows } = grid;

    // Cell size in source pixels
    let cell_w = buffer.width as f64 / columns as f64;
    let cell_h = buffer.height as f64 / rows as f64;

    let mut text = String::with_capacity((columns as usize + 1) * rows as usize);
    let mut colors = row_color.map(|_| Vec::with_capacity(rows as usize));

    for cy in 0..rows {
        let start_y = floor_px(cy as f64 * cell_h, buffer.height);
        let end_y = floor_px((cy + 1) as f64 * cell_h, buffer.height);

        let mut last_color = None;
        let mut row_sum = [0.0f64; 3];
        let mut row_cells = 0u32;

        for cx in 0..columns {
            let start_x = floor_px(cx as f64 * cell_w, buffer.width);
            let end_x = floor_px((cx + 1) as f64 * cell_w, buffer.width);

            let mut sum_r = 0u64;
            let mut sum_g = 0u64;
            let mut sum_b = 0u64;
            let mut count = 0u64;

            for py in start_y..end_y {
                for px in start_x..end_x {
                    if let Some([r, g, b, _]) = buffer.pixel(px, py) {
                        sum_r += r as u64;
                        sum_g += g as u64;
                        sum_b += b as u64;
                        count += 1;
                    }
                }
            }

            if count == 0 {
                text.push(lut.darkest());
                continue;
            }

            let n = count as f64;
            let (mean_r, mean_g, mean_b) = (sum_r as f64 / n, sum_g as f64 / n, sum_b as f64 / n);
            text.push(lut.glyph(luminance_from_means(mean_r, mean_g, mean_b)));

            if colors.is_some() {
                last_color = Some(CellColor::from_means(mean_r, mean_g, mean_b));
                row_sum[0] += mean_r;
                row_sum[1] += mean_g;
                row_sum[2] += mean_b;
                row_cells += 1;
            }
        }

        text.push('\n');

        if let Some(colors) = colors.as_mut() {
            let color = match row_color {
                Some(RowColor::Average) if row_cells > 0 => {
                    let n = row_cells as f64;
                    Some(CellColor::from_means(
                        row_sum[0] / n,
                        row_sum[1] / n,
                        row_sum[2] / n,
                    ))
                }
                Some(RowColor::Average) => None,
                _ => last_color,
            };
            colors.push(color);
        }
    }

    ConversionResult { text, colors, grid }
}

/// Floor a source coordinate and clamp it to the raster extent.
#[inline]
fn floor_px(v: f64, limit: u32) -> u32 {
    if v.is_nan() {
        return 0;
    }
    // `as` saturates, so infinities from zero-sized grids stay in range
    (v.floor() as u32).min(limit)
}
