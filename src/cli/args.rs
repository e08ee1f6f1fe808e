//! CLI argument parsing with clap.

use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use super::enums::{CharacterSet, Format, RowColorMode};

/// Convert images, GIFs and raw video frames to ASCII art
#[derive(Parser, Debug)]
#[command(name = "ascii-cam")]
#[command(version, about = "Convert frames and images to ASCII art", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Config file path
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,
}

/// Rendering options shared by every conversion subcommand.
///
/// Unset options fall back to the config file, then to built-in defaults.
#[derive(ClapArgs, Debug, Clone, Default, PartialEq)]
pub struct RenderArgs {
    /// Output width in characters
    #[arg(long, short = 'w')]
    pub columns: Option<u32>,

    /// ASCII character set
    #[arg(long)]
    pub charset: Option<CharacterSet>,

    /// Custom glyph ramp, darkest first (overrides --charset)
    #[arg(long)]
    pub custom_charset: Option<String>,

    /// Invert brightness (for light terminals)
    #[arg(long)]
    pub invert: bool,

    /// Emit one color per row
    #[arg(long)]
    pub color: bool,

    /// How row colors are chosen
    #[arg(long)]
    pub row_color: Option<RowColorMode>,

    /// Output format
    #[arg(long, short, default_value = "text")]
    pub format: Format,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert a still image (PNG, JPEG, BMP, GIF)
    Image {
        /// Image file
        path: PathBuf,

        #[command(flatten)]
        render: RenderArgs,
    },
    /// Play an animated GIF as ASCII
    Gif {
        /// GIF file
        path: PathBuf,

        /// Maximum frames converted per second (0 = unlimited)
        #[arg(long)]
        fps: Option<u32>,

        /// Loop until interrupted
        #[arg(long = "loop")]
        looping: bool,

        #[command(flatten)]
        render: RenderArgs,
    },
    /// Convert raw rgb24 frames read from stdin
    Stream {
        /// Frame width in pixels
        #[arg(long)]
        width: Option<u32>,

        /// Frame height in pixels
        #[arg(long)]
        height: Option<u32>,

        /// Maximum frames converted per second (0 = unlimited)
        #[arg(long)]
        fps: Option<u32>,

        /// Mirror frames horizontally
        #[arg(long)]
        mirror: bool,

        #[command(flatten)]
        render: RenderArgs,
    },
    /// List built-in character sets
    Charsets,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_defaults() {
        let args = Args::parse_from(["ascii-cam", "image", "cat.png"]);
        assert!(args.config.is_none());
        match args.command {
            Command::Image { path, render } => {
                assert_eq!(path, PathBuf::from("cat.png"));
                assert_eq!(render, RenderArgs::default());
            }
            _ => panic!("Expected Image subcommand"),
        }
    }

    #[test]
    fn test_render_options() {
        let args = Args::parse_from([
            "ascii-cam",
            "image",
            "cat.png",
            "--columns",
            "120",
            "--charset",
            "blocks",
            "--invert",
            "--color",
            "--row-color",
            "average",
            "--format",
            "ansi",
        ]);
        let Command::Image { render, .. } = args.command else {
            panic!("Expected Image subcommand");
        };
        assert_eq!(render.columns, Some(120));
        assert_eq!(render.charset, Some(CharacterSet::Blocks));
        assert!(render.invert);
        assert!(render.color);
        assert_eq!(render.row_color, Some(RowColorMode::Average));
        assert_eq!(render.format, Format::Ansi);
    }

    #[test]
    fn test_short_flags() {
        let args = Args::parse_from(["ascii-cam", "image", "a.png", "-w", "40", "-f", "json"]);
        let Command::Image { render, .. } = args.command else {
            panic!("Expected Image subcommand");
        };
        assert_eq!(render.columns, Some(40));
        assert_eq!(render.format, Format::Json);
    }

    #[test]
    fn test_gif_subcommand() {
        let args = Args::parse_from(["ascii-cam", "gif", "a.gif", "--fps", "12", "--loop"]);
        match args.command {
            Command::Gif {
                fps, looping, path, ..
            } => {
                assert_eq!(fps, Some(12));
                assert!(looping);
                assert_eq!(path, PathBuf::from("a.gif"));
            }
            _ => panic!("Expected Gif subcommand"),
        }
    }

    #[test]
    fn test_stream_subcommand() {
        let args = Args::parse_from([
            "ascii-cam", "stream", "--width", "640", "--height", "480", "--mirror",
        ]);
        match args.command {
            Command::Stream {
                width,
                height,
                fps,
                mirror,
                ..
            } => {
                assert_eq!(width, Some(640));
                assert_eq!(height, Some(480));
                assert_eq!(fps, None);
                assert!(mirror);
            }
            _ => panic!("Expected Stream subcommand"),
        }
    }

    #[test]
    fn test_config_option_is_global() {
        let args = Args::parse_from(["ascii-cam", "charsets", "--config", "/tmp/c.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/c.toml")));

        let args = Args::parse_from(["ascii-cam", "-c", "/tmp/t.toml", "charsets"]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/t.toml")));
    }

    #[test]
    fn test_config_subcommands() {
        let args = Args::parse_from(["ascii-cam", "config", "show"]);
        assert!(matches!(
            args.command,
            Command::Config {
                action: ConfigAction::Show
            }
        ));

        let args = Args::parse_from(["ascii-cam", "config", "init"]);
        assert!(matches!(
            args.command,
            Command::Config {
                action: ConfigAction::Init
            }
        ));
    }

    #[test]
    fn test_rejects_unknown_charset() {
        let result = Args::try_parse_from(["ascii-cam", "image", "a.png", "--charset", "braille"]);
        assert!(result.is_err());
    }
}
