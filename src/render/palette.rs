//! 256-color palette quantization and escape sequences.

use std::fmt::Write;

/// Resets both foreground and background to the terminal defaults.
pub const RESET: &str = "\x1b[39;49;00m";

/// First index of the 6x6x6 color cube in the 256-color palette.
const CUBE_OFFSET: u8 = 16;

/// Which half of a cell a color paints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorRole {
    Foreground,
    Background,
}

impl ColorRole {
    fn sgr_prefix(self) -> &'static str {
        match self {
            ColorRole::Foreground => "38;5;",
            ColorRole::Background => "48;5;",
        }
    }
}

/// A color from the 216-entry cube (palette indices 16..=231).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnsiColor {
    pub index: u8,
}

impl AnsiColor {
    /// Nearest cube color for an RGB triple, channel by channel.
    pub fn from_rgb([r, g, b]: [u8; 3]) -> Self {
        Self {
            index: CUBE_OFFSET + 36 * quantize(r) + 6 * quantize(g) + quantize(b),
        }
    }

    /// Append the escape for `role` to `out`.
    pub fn write_escape(self, out: &mut String, role: ColorRole) {
        // Writing to a String cannot fail
        let _ = write!(out, "\x1b[{}{}m", role.sgr_prefix(), self.index);
    }
}

/// Map an 8-bit channel to one of the six cube levels.
///
/// Computes `round(v / 255 * 5)` in integers. No value of `v` lands exactly
/// on a half, so the rounding direction never matters.
#[inline]
pub fn quantize(v: u8) -> u8 {
    ((v as u16 * 5 + 127) / 255) as u8
}
