//! ASCII conversion core.
//!
//! Turns a raster into a character grid:
//!
//! 1. **Lookup table** - every luminance value 0..=255 maps to a glyph
//! 2. **Grid sizing** - rows derived from columns, correcting for ~2:1 glyphs
//! 3. **Conversion** - per-cell mean color, BT.709 luminance, LUT lookup
//! 4. **Acquisition** - live frames, still images and bitmaps are drawn into a
//!    reusable RGBA surface first
//!
//! # Character Sets
//!
//! Named sets are available via [`CharSet`]:
//! - `Simple` - 10-level ASCII density ramp
//! - `Detailed` - 70-level ramp
//! - `Blocks` - Unicode shade blocks
//!
//! Any non-empty custom `&[char]` works with [`build_lut`] too.

mod charset;
mod convert;
mod converter;
mod dimensions;
mod error;
mod luminance;
mod lut;
mod raster;
mod surface;

pub use charset::{named_charsets, CharSet, BLOCKS_CHARSET, DETAILED_CHARSET, SIMPLE_CHARSET};
pub use convert::{raster_to_ascii, raster_to_ascii_with, CellColor, ConversionResult, RowColor};
pub use converter::AsciiConverter;
pub use dimensions::{
    grid_dimensions, grid_dimensions_with_aspect, GridDimensions, DEFAULT_CHAR_ASPECT_RATIO,
};
pub use error::AsciiError;
pub use luminance::{luminance, luminance_from_means};
pub use lut::{build_lut, BrightnessLut, LutCache, LUT_SIZE};
pub use raster::{RasterBuffer, RGBA_BYTES};
pub use surface::{RasterSurface, Source, DEFAULT_MAX_PIXELS};
