//! Subcommand handlers.

use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use image::codecs::gif::GifDecoder;
use image::AnimationDecoder;

use super::args::{Args, Command, ConfigAction, RenderArgs};
use super::error::CliError;
use crate::ascii::{
    build_lut, grid_dimensions, named_charsets, AsciiConverter, AsciiError, BrightnessLut, CharSet,
    RowColor,
};
use crate::camera::mirror_horizontal;
use crate::config::{default_path, Config, DEFAULT_CONFIG_TOML};
use crate::limiter::FrameLimiter;
use crate::renderer::{self, OutputFormat, CLEAR_SCREEN};
use crate::stream::RawFrameReader;

/// Global flag set by the Ctrl+C handler.
static CTRLC_RECEIVED: AtomicBool = AtomicBool::new(false);

/// Check whether Ctrl+C has been received.
pub fn ctrlc_received() -> bool {
    CTRLC_RECEIVED.load(Ordering::SeqCst)
}

/// Set up the Ctrl+C handler.
///
/// This should be called once at program startup.
pub fn setup_ctrlc_handler() -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(move || {
        CTRLC_RECEIVED.store(true, Ordering::SeqCst);
    })
}

/// Rendering settings after merging CLI flags, config file and defaults.
///
/// Precedence: CLI > config > built-in default.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    pub glyphs: Vec<char>,
    pub columns: u32,
    pub invert: bool,
    pub color: bool,
    pub row_color: RowColor,
    pub format: OutputFormat,
}

impl RenderSettings {
    pub fn resolve(args: &RenderArgs, config: &Config) -> Result<Self, AsciiError> {
        let glyphs = if let Some(custom) = &args.custom_charset {
            custom.chars().collect()
        } else if let Some(set) = args.charset {
            CharSet::from(set).chars().to_vec()
        } else {
            config.ascii.glyphs()?
        };

        let columns = args.columns.unwrap_or(config.ascii.columns);
        if columns == 0 {
            return Err(AsciiError::InvalidArgument(
                "columns must be greater than 0".to_string(),
            ));
        }

        let format = OutputFormat::from(args.format);

        Ok(Self {
            glyphs,
            columns,
            invert: args.invert || config.ascii.invert,
            // ANSI output has nothing to show without row colors
            color: args.color || config.ascii.color || format == OutputFormat::Ansi,
            row_color: args
                .row_color
                .map(RowColor::from)
                .unwrap_or(config.ascii.row_color),
            format,
        })
    }

    /// Build the lookup table for these settings.
    pub fn lut(&self) -> Result<BrightnessLut, AsciiError> {
        build_lut(&self.glyphs, self.invert)
    }

    fn converter(&self) -> AsciiConverter {
        AsciiConverter::new().with_row_color(self.row_color)
    }
}

/// Dispatch parsed arguments to their handler.
pub fn run(args: Args) -> Result<(), CliError> {
    let config_path = args.config.as_deref();

    match args.command {
        Command::Image { path, render } => {
            let config = load_config(config_path)?;
            run_image(&path, &render, &config, &mut std::io::stdout().lock())
        }
        Command::Gif {
            path,
            fps,
            looping,
            render,
        } => {
            let config = load_config(config_path)?;
            setup_ctrlc_handler()?;
            run_gif(
                &path,
                fps,
                looping,
                &render,
                &config,
                &mut std::io::stdout().lock(),
            )
        }
        Command::Stream {
            width,
            height,
            fps,
            mirror,
            render,
        } => {
            let config = load_config(config_path)?;
            setup_ctrlc_handler()?;
            let options = StreamOptions {
                width,
                height,
                fps,
                mirror,
            };
            run_stream(
                &options,
                &render,
                &config,
                std::io::stdin().lock(),
                &mut std::io::stdout().lock(),
            )
        }
        Command::Charsets => list_charsets(&mut std::io::stdout().lock()),
        Command::Config { action } => {
            handle_config_action(action, config_path, &mut std::io::stdout().lock())
        }
    }
}

/// Load configuration for a conversion command.
///
/// An explicit `--config` file must load. A broken default file only
/// produces a warning.
fn load_config(path: Option<&Path>) -> Result<Config, CliError> {
    match path {
        Some(path) => Ok(Config::load_from(path)?),
        None => match Config::load(None) {
            Ok(config) => Ok(config),
            Err(e) => {
                log::warn!("Failed to load config file: {}. Using default settings.", e);
                Ok(Config::default())
            }
        },
    }
}

/// Convert a still image and write it once.
pub fn run_image<W: Write>(
    path: &Path,
    render: &RenderArgs,
    config: &Config,
    out: &mut W,
) -> Result<(), CliError> {
    let settings = RenderSettings::resolve(render, config)?;
    let lut = settings.lut()?;

    let img = image::open(path).map_err(|source| CliError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let grid = grid_dimensions(img.width(), img.height(), settings.columns);
    log::info!(
        "Converting {} ({}x{}) to {}x{} characters",
        path.display(),
        img.width(),
        img.height(),
        grid.columns,
        grid.rows
    );

    let result = settings
        .converter()
        .convert_from_image(&img, grid, &lut, settings.color)?;
    out.write_all(renderer::render(&result, settings.format)?.as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Play an animated GIF, one bitmap per frame.
pub fn run_gif<W: Write>(
    path: &Path,
    fps: Option<u32>,
    looping: bool,
    render: &RenderArgs,
    config: &Config,
    out: &mut W,
) -> Result<(), CliError> {
    let settings = RenderSettings::resolve(render, config)?;
    let lut = settings.lut()?;

    let decode_err = |source: image::ImageError| CliError::Decode {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path)?;
    let frames = GifDecoder::new(BufReader::new(file))
        .map_err(decode_err)?
        .into_frames()
        .collect_frames()
        .map_err(decode_err)?;

    if frames.is_empty() {
        log::warn!("{} contains no frames", path.display());
        return Ok(());
    }

    let mut limiter = FrameLimiter::new(fps.unwrap_or(config.stream.fps));
    let mut converter = settings.converter();
    let mut converted = 0u64;

    if settings.format != OutputFormat::Json {
        out.write_all(CLEAR_SCREEN.as_bytes())?;
    }

    'playback: loop {
        for frame in &frames {
            if ctrlc_received() {
                break 'playback;
            }

            if limiter.should_convert(Instant::now()) {
                let bitmap = frame.buffer();
                let grid = grid_dimensions(bitmap.width(), bitmap.height(), settings.columns);
                let result = converter.convert_from_bitmap(bitmap, grid, &lut, settings.color)?;
                renderer::write_frame(out, &result, settings.format)?;
                converted += 1;
            }

            let (numer, denom) = frame.delay().numer_denom_ms();
            if denom > 0 && numer > 0 {
                thread::sleep(Duration::from_millis((numer / denom) as u64));
            }
        }

        if !looping {
            break;
        }
    }

    log::info!(
        "GIF playback finished: {} frames converted, {} skipped",
        converted,
        limiter.skipped()
    );
    Ok(())
}

/// Frame geometry and pacing for `stream`, before config fallbacks.
#[derive(Debug, Clone, Default)]
pub struct StreamOptions {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub fps: Option<u32>,
    pub mirror: bool,
}

/// Convert raw frames from `input` as they arrive.
///
/// Frames arriving faster than the fps limit are read and dropped.
pub fn run_stream<R: Read, W: Write>(
    options: &StreamOptions,
    render: &RenderArgs,
    config: &Config,
    input: R,
    out: &mut W,
) -> Result<(), CliError> {
    let settings = RenderSettings::resolve(render, config)?;
    let lut = settings.lut()?;

    let width = options
        .width
        .or(config.stream.width)
        .ok_or(CliError::MissingOption("--width"))?;
    let height = options
        .height
        .or(config.stream.height)
        .ok_or(CliError::MissingOption("--height"))?;
    let mirror = options.mirror || config.stream.mirror;

    let reader = RawFrameReader::new(input, width, height)?;
    let grid = grid_dimensions(width, height, settings.columns);
    let mut limiter = FrameLimiter::new(options.fps.unwrap_or(config.stream.fps));
    let mut converter = settings.converter();
    let mut converted = 0u64;

    log::info!(
        "Streaming {}x{} frames as {}x{} characters",
        width,
        height,
        grid.columns,
        grid.rows
    );

    for frame in reader {
        let mut frame = frame?;
        if ctrlc_received() {
            break;
        }
        if !limiter.should_convert(frame.timestamp) {
            log::debug!("Skipping frame (fps limit)");
            continue;
        }
        if mirror {
            mirror_horizontal(&mut frame);
        }

        let result = converter.convert_from_live_frame(&frame, grid, &lut, settings.color)?;
        renderer::write_frame(out, &result, settings.format)?;
        converted += 1;
    }

    log::info!(
        "Stream ended: {} frames converted, {} skipped",
        converted,
        limiter.skipped()
    );
    Ok(())
}

/// List the built-in charsets.
pub fn list_charsets<W: Write>(out: &mut W) -> Result<(), CliError> {
    writeln!(out, "Available character sets:")?;
    for (name, glyphs) in named_charsets() {
        let ramp: String = glyphs.iter().collect();
        writeln!(out, "  {:<10} {:>2} glyphs  \"{}\"", name, glyphs.len(), ramp)?;
    }
    writeln!(out)?;
    writeln!(out, "Use --charset <name> or --custom-charset <glyphs> to choose.")?;
    Ok(())
}

/// Handle config subcommand actions.
pub fn handle_config_action<W: Write>(
    action: ConfigAction,
    config_path: Option<&Path>,
    out: &mut W,
) -> Result<(), CliError> {
    let path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(default_path);

    match action {
        ConfigAction::Show => {
            let config = if path.exists() {
                Config::load_from(&path)?
            } else {
                Config::default()
            };
            let charset = match (&config.ascii.custom_charset, &config.ascii.charset) {
                (Some(custom), _) => format!("custom \"{}\"", custom),
                (None, Some(name)) => name.clone(),
                (None, None) => CharSet::default().name().to_string(),
            };

            writeln!(out, "Current configuration:")?;
            writeln!(out, "  Charset: {}", charset)?;
            writeln!(out, "  Columns: {}", config.ascii.columns)?;
            writeln!(out, "  Invert: {}", yes_no(config.ascii.invert))?;
            writeln!(out, "  Color: {}", yes_no(config.ascii.color))?;
            writeln!(out, "  Row color: {:?}", config.ascii.row_color)?;
            writeln!(out, "  FPS limit: {}", config.stream.fps)?;
            writeln!(out, "  Mirror: {}", yes_no(config.stream.mirror))?;
            writeln!(out)?;

            if path.exists() {
                writeln!(out, "Config file: {} (exists)", path.display())?;
            } else {
                writeln!(out, "Config file: {} (not found)", path.display())?;
            }
        }
        ConfigAction::Init => {
            if path.exists() {
                return Err(CliError::ConfigExists(path));
            }
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG_TOML)?;
            writeln!(out, "Created config file: {}", path.display())?;
        }
    }
    Ok(())
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
