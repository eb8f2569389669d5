//! Terminal image rendering pipeline.
//!
//! An image goes through two stages:
//! 1. [`plan`] sizes it against the terminal and works out the left padding
//! 2. [`render`] box-averages it to that size and packs row pairs into
//!    half-block glyphs colored from the 256-color cube

mod dimensions;
mod downsample;
mod halfblock;
mod palette;

pub use dimensions::{plan, LayoutPlan};
pub use downsample::downsample;
pub use halfblock::{render, GLYPH};
pub use palette::{quantize, AnsiColor, ColorRole, RESET};

use serde::Deserialize;
use std::fmt;

use crate::decode::PixelBuffer;
use crate::error::PreviewError;
use crate::terminal::TerminalGeometry;

/// Default image width as a percentage of the terminal width.
pub const DEFAULT_SCALE_PERCENT: u32 = 50;

pub(crate) const SCALE_RANGE_MESSAGE: &str = "scale should be between 0..100.";

/// Horizontal placement of the image within the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    pub fn name(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Caller-supplied sizing and placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Image width as a percentage of the terminal width, 1..=100
    pub scale_percent: u32,
    pub alignment: Alignment,
}

impl RenderConfig {
    /// Build a config, rejecting a scale outside 1..=100.
    pub fn new(scale_percent: u32, alignment: Alignment) -> Result<Self, PreviewError> {
        let config = Self {
            scale_percent,
            alignment,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), PreviewError> {
        if !(1..=100).contains(&self.scale_percent) {
            return Err(PreviewError::invalid_config(SCALE_RANGE_MESSAGE));
        }
        Ok(())
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            scale_percent: DEFAULT_SCALE_PERCENT,
            alignment: Alignment::default(),
        }
    }
}

/// Plan and render one image in a single call.
pub fn preview(
    pixels: &PixelBuffer,
    geometry: TerminalGeometry,
    config: &RenderConfig,
) -> Result<String, PreviewError> {
    if pixels.is_empty() {
        return Err(PreviewError::EmptyImage);
    }
    let layout = plan(pixels.width(), pixels.height(), geometry, config)?;
    render(pixels, &layout)
}
