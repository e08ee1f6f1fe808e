//! Output formatting for conversion results.
//!
//! Turns a [`ConversionResult`] into what gets written to stdout: plain
//! text, text with 24-bit ANSI row colors, or JSON.

use std::io::Write;

use crate::ascii::ConversionResult;

/// Move the cursor home and clear the screen.
pub const CLEAR_SCREEN: &str = "\x1b[H\x1b[2J";
/// Move the cursor home without clearing (redraw in place).
pub const CURSOR_HOME: &str = "\x1b[H";
/// Reset all SGR attributes.
pub const RESET: &str = "\x1b[0m";

/// Output format for converted frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain text block
    #[default]
    Text,
    /// Text with each row wrapped in its row color
    Ansi,
    /// JSON object with text, colors and grid
    Json,
}

/// Render a result in the requested format.
pub fn render(result: &ConversionResult, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(result.text.clone()),
        OutputFormat::Ansi => Ok(render_ansi(result)),
        OutputFormat::Json => render_json(result),
    }
}

/// Wrap each row in a 24-bit foreground escape of its row color.
///
/// Rows without a color (and results converted without color mode) are
/// emitted as plain text.
pub fn render_ansi(result: &ConversionResult) -> String {
    let Some(colors) = &result.colors else {
        return result.text.clone();
    };

    let mut output = String::with_capacity(result.text.len() + colors.len() * 24);
    for (line, color) in result.lines().zip(colors) {
        match color {
            Some(c) => {
                output.push_str(&format!("\x1b[38;2;{};{};{}m", c.r, c.g, c.b));
                output.push_str(line);
                output.push_str(RESET);
            }
            None => output.push_str(line),
        }
        output.push('\n');
    }
    output
}

/// Serialize a result as a single JSON line.
pub fn render_json(result: &ConversionResult) -> Result<String, serde_json::Error> {
    let mut json = serde_json::to_string(result)?;
    json.push('\n');
    Ok(json)
}

/// Write one frame of an animation, redrawing from the top-left corner.
pub fn write_frame<W: Write>(
    out: &mut W,
    result: &ConversionResult,
    format: OutputFormat,
) -> std::io::Result<()> {
    let body = render(result, format).map_err(std::io::Error::other)?;
    if format != OutputFormat::Json {
        out.write_all(CURSOR_HOME.as_bytes())?;
    }
    out.write_all(body.as_bytes())?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::{CellColor, GridDimensions};

    fn colored_result() -> ConversionResult {
        ConversionResult {
            text: "ab\ncd\n".to_string(),
            colors: Some(vec![Some(CellColor::new(1, 2, 3)), None]),
            grid: GridDimensions::new(2, 2),
        }
    }

    #[test]
    fn test_render_text() {
        let result = colored_result();
        assert_eq!(render(&result, OutputFormat::Text).unwrap(), "ab\ncd\n");
    }

    #[test]
    fn test_render_ansi() {
        let out = render_ansi(&colored_result());
        assert_eq!(out, "\x1b[38;2;1;2;3mab\x1b[0m\ncd\n");
    }

    #[test]
    fn test_render_ansi_without_colors() {
        let result = ConversionResult {
            colors: None,
            ..colored_result()
        };
        assert_eq!(render_ansi(&result), "ab\ncd\n");
    }

    #[test]
    fn test_render_json() {
        let json = render_json(&colored_result()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["text"], "ab\ncd\n");
        assert_eq!(value["colors"][0], "rgb(1, 2, 3)");
        assert!(value["colors"][1].is_null());
        assert_eq!(value["grid"]["columns"], 2);
    }

    #[test]
    fn test_write_frame_prefixes_cursor_home() {
        let mut out = Vec::new();
        write_frame(&mut out, &colored_result(), OutputFormat::Text).unwrap();
        assert!(out.starts_with(CURSOR_HOME.as_bytes()));
    }
}
