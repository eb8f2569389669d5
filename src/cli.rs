//! Command-line interface definitions and the per-file preview loop.

use clap::{ArgAction, Parser, ValueEnum};
use std::fmt::Display;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::decode;
use crate::error::PreviewError;
use crate::render::{self, Alignment, RenderConfig};
use crate::terminal::TerminalGeometry;

/// Exit code for a fully successful run.
pub const EXIT_SUCCESS: u8 = 0;
/// Exit code when anything failed: bad options, no files, or any file skipped.
pub const EXIT_FAILURE: u8 = 1;

// ==================== CLI Enums ====================

/// Horizontal image position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Position {
    #[default]
    Left,
    Center,
    Right,
}

impl From<Position> for Alignment {
    fn from(p: Position) -> Self {
        match p {
            Position::Left => Alignment::Left,
            Position::Center => Alignment::Center,
            Position::Right => Alignment::Right,
        }
    }
}

/// Parse a scale percentage without range checking.
///
/// Any integer is accepted so that out-of-range values, including negative
/// ones and ones too large for `i64` (which saturate), are rejected later
/// with the scale range message. Non-numeric input is a parse error.
fn parse_scale(s: &str) -> Result<i64, String> {
    let negative = s.starts_with('-');
    let digits = s.strip_prefix(['-', '+']).unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("'{}' is not a valid number", s));
    }
    let saturated = if negative { i64::MIN } else { i64::MAX };
    Ok(s.parse::<i64>().unwrap_or(saturated))
}

// ==================== CLI Arguments ====================

/// Preview images in the terminal using 256-color half blocks
#[derive(Parser, Debug)]
#[command(name = "ansi-preview")]
#[command(version, about = "Preview images in the terminal using 256-color half blocks", long_about = None)]
#[command(disable_version_flag = true)]
#[command(after_help = "EXAMPLES:
    ansi-preview photo.png
    ansi-preview -s 100 -p center logo.png banner.jpg")]
pub struct Args {
    /// Image files to preview, printed in order
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Image width as a percentage of the terminal width (1-100, default 50)
    #[arg(
        short = 's',
        long = "scale",
        value_name = "PERCENT",
        allow_negative_numbers = true,
        value_parser = parse_scale
    )]
    pub scale: Option<i64>,

    /// Horizontal alignment (default left)
    #[arg(short = 'p', long = "position", value_name = "POSITION")]
    pub position: Option<Position>,

    /// Config file path (default: <config dir>/ansi-preview/config.toml)
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: (),
}

// ==================== Run ====================

/// Writes one-line `error: <detail>` messages, optionally with a red prefix.
pub struct Reporter<E: Write> {
    sink: E,
    color: bool,
}

impl<E: Write> Reporter<E> {
    pub fn new(sink: E, color: bool) -> Self {
        Self { sink, color }
    }

    pub fn error(&mut self, detail: &dyn Display) {
        let prefix = if self.color {
            "\x1b[31merror\x1b[0m"
        } else {
            "error"
        };
        // Nothing useful left to do if stderr itself is gone
        let _ = writeln!(self.sink, "{}: {}", prefix, detail);
    }
}

/// Render every file named in `args` to `out`, reporting failures to `reporter`.
///
/// Files that fail to decode or render are reported and skipped; the rest
/// are still printed. Returns [`EXIT_FAILURE`] if anything failed.
pub fn run<O: Write, E: Write>(
    args: &Args,
    geometry: TerminalGeometry,
    out: &mut O,
    reporter: &mut Reporter<E>,
) -> u8 {
    let config = match Config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            reporter.error(&e);
            return EXIT_FAILURE;
        }
    };

    let render_config = match config.resolve(args.scale, args.position.map(Alignment::from)) {
        Ok(render_config) => render_config,
        Err(e) => {
            reporter.error(&e);
            return EXIT_FAILURE;
        }
    };

    if args.files.is_empty() {
        reporter.error(&PreviewError::NoInputFiles);
        return EXIT_FAILURE;
    }

    let mut failures = 0usize;
    for path in &args.files {
        let text = match preview_file(path, geometry, &render_config) {
            Ok(text) => text,
            Err(e) => {
                log::info!("Skipping {:?}: {}", path, e);
                reporter.error(&e);
                failures += 1;
                continue;
            }
        };

        if let Err(e) = writeln!(out, "{}", text).and_then(|_| out.flush()) {
            reporter.error(&format_args!("cannot write output: {}", e));
            return EXIT_FAILURE;
        }
    }

    log::info!(
        "Previewed {} of {} file(s)",
        args.files.len() - failures,
        args.files.len()
    );

    if failures > 0 {
        EXIT_FAILURE
    } else {
        EXIT_SUCCESS
    }
}

/// Decode, plan and render a single file.
pub fn preview_file(
    path: &Path,
    geometry: TerminalGeometry,
    config: &RenderConfig,
) -> Result<String, PreviewError> {
    let pixels = decode::decode(path)?;
    render::preview(&pixels, geometry, config)
}
