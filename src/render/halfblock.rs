//! Half-block text rendering.
//!
//! Each text cell shows two stacked pixels: the upper half block is drawn in
//! the foreground color (top pixel) over the background color (bottom pixel).

use super::downsample::downsample;
use super::palette::{AnsiColor, ColorRole, RESET};
use super::LayoutPlan;
use crate::decode::PixelBuffer;
use crate::error::PreviewError;

/// Upper half block, U+2580.
pub const GLYPH: char = '▀';

/// Render `pixels` as colored half-block text according to `plan`.
///
/// Produces `ceil(target_height / 2)` lines separated by `\n`, with no
/// trailing newline. When the target height is odd the last line has no
/// partner row: its cells are a foreground escape and a space.
///
/// # Errors
/// * [`PreviewError::EmptyImage`] if `pixels` has no pixels
/// * [`PreviewError::InvalidDimensions`] if the plan has a zero dimension
pub fn render(pixels: &PixelBuffer, plan: &LayoutPlan) -> Result<String, PreviewError> {
    let resized = downsample(pixels, plan.target_width, plan.target_height)?;

    let width = resized.width();
    let height = resized.height();
    let lines = height.div_ceil(2);

    // Paired cell: two escapes (<= 11 bytes each), glyph (3) and reset (11)
    let per_line = plan.left_pad as usize + width as usize * 36 + 1;
    let mut out = String::with_capacity(per_line * lines as usize);

    let padding = " ".repeat(plan.left_pad as usize);

    for line in 0..lines {
        let y = line * 2;
        if line > 0 {
            out.push('\n');
        }

        out.push_str(&padding);

        for x in 0..width {
            let fg = AnsiColor::from_rgb(resized.pixel(x, y));
            if y + 1 < height {
                let bg = AnsiColor::from_rgb(resized.pixel(x, y + 1));
                bg.write_escape(&mut out, ColorRole::Background);
                fg.write_escape(&mut out, ColorRole::Foreground);
                out.push(GLYPH);
            } else {
                fg.write_escape(&mut out, ColorRole::Foreground);
                out.push(' ');
            }
            out.push_str(RESET);
        }
    }

    log::debug!(
        "Rendered {}x{} pixels into {} lines ({} bytes)",
        width,
        height,
        lines,
        out.len()
    );
    Ok(out)
}
