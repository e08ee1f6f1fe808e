//! Grid sizing for aspect-ratio-correct ASCII rendering.

use serde::Serialize;

/// Default glyph aspect ratio (height / width).
/// Monospaced glyph cells are roughly twice as tall as they are wide.
pub const DEFAULT_CHAR_ASPECT_RATIO: f64 = 2.0;

/// Target character grid size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct GridDimensions {
    pub columns: u32,
    pub rows: u32,
}

impl GridDimensions {
    pub fn new(columns: u32, rows: u32) -> Self {
        Self { columns, rows }
    }

    /// Number of cells in the grid.
    pub fn cell_count(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    /// True when the grid has no cells to render.
    pub fn is_empty(&self) -> bool {
        self.columns == 0 || self.rows == 0
    }
}

impl From<GridDimensions> for (u32, u32) {
    fn from(dims: GridDimensions) -> Self {
        (dims.columns, dims.rows)
    }
}

/// Derive a row count for `columns` that keeps the source's proportions
/// when rendered with ~2:1 glyphs.
///
/// Mapping pixels 1:1 to character cells would stretch the image
/// vertically, so each cell covers `source_width / columns` pixels
/// horizontally and twice that vertically.
///
/// # Example
/// ```
/// use ascii_cam::ascii::{grid_dimensions, GridDimensions};
/// assert_eq!(grid_dimensions(640, 480, 80), GridDimensions::new(80, 30));
/// ```
pub fn grid_dimensions(source_width: u32, source_height: u32, columns: u32) -> GridDimensions {
    grid_dimensions_with_aspect(source_width, source_height, columns, DEFAULT_CHAR_ASPECT_RATIO)
}

/// Same as [`grid_dimensions`] with a custom glyph aspect ratio, for fonts
/// that are not 2:1.
///
/// Zero source dimensions or zero columns yield zero rows rather than an
/// error; a single floor is applied to the final ratio.
pub fn grid_dimensions_with_aspect(
    source_width: u32,
    source_height: u32,
    columns: u32,
    char_aspect: f64,
) -> GridDimensions {
    if source_width == 0 || source_height == 0 || columns == 0 || char_aspect <= 0.0 {
        return GridDimensions::new(columns, 0);
    }

    let cell_width = source_width as f64 / columns as f64;
    let rows = (source_height as f64 / (cell_width * char_aspect)).floor();

    GridDimensions::new(columns, rows as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_dimensions_vga() {
        assert_eq!(grid_dimensions(640, 480, 80), GridDimensions::new(80, 30));
    }

    #[test]
    fn test_grid_dimensions_full_hd() {
        // 1080 / (16 * 2) = 33.75
        assert_eq!(grid_dimensions(1920, 1080, 120), GridDimensions::new(120, 33));
    }

    #[test]
    fn test_grid_dimensions_zero_source() {
        assert_eq!(grid_dimensions(0, 480, 80).rows, 0);
        assert_eq!(grid_dimensions(640, 0, 80).rows, 0);
    }

    #[test]
    fn test_grid_dimensions_very_wide_source() {
        // 1000 / (100 * 2) = 0.1 -> 0
        assert_eq!(grid_dimensions(10000, 10, 100), GridDimensions::new(100, 0));
    }

    #[test]
    fn test_grid_dimensions_custom_aspect() {
        let dims = grid_dimensions_with_aspect(640, 480, 80, 1.0);
        assert_eq!(dims, GridDimensions::new(80, 60));
    }

    #[test]
    fn test_grid_dimensions_into_tuple() {
        let (cols, rows): (u32, u32) = grid_dimensions(640, 480, 80).into();
        assert_eq!((cols, rows), (80, 30));
    }
}
