//! Target size and padding calculation.

use super::{Alignment, RenderConfig};
use crate::error::PreviewError;
use crate::terminal::TerminalGeometry;

/// Where and how large an image is drawn, in pixels.
///
/// Each output line holds two pixel rows, so `target_height` is twice the
/// number of lines (rounded up).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutPlan {
    pub target_width: u32,
    pub target_height: u32,
    /// Spaces emitted before every output line
    pub left_pad: u32,
}

/// Compute target dimensions and left padding for an image.
///
/// The width is `columns * scale_percent / 100`, truncated. The height applies
/// the same scale factor to the native height, rounded to the nearest pixel,
/// so the aspect ratio is preserved.
///
/// # Errors
/// * [`PreviewError::InvalidConfig`] if the scale is outside 1..=100
/// * [`PreviewError::InvalidImage`] if `native_width` is zero
/// * [`PreviewError::InvalidDimensions`] if the height does not fit in a `u32`
///
/// # Example
/// ```
/// use ansi_preview::render::{plan, Alignment, RenderConfig};
/// use ansi_preview::terminal::TerminalGeometry;
///
/// let geometry = TerminalGeometry { columns: 80, rows: 24 };
/// let config = RenderConfig::new(50, Alignment::Center).unwrap();
/// let layout = plan(640, 480, geometry, &config).unwrap();
/// assert_eq!((layout.target_width, layout.target_height, layout.left_pad), (40, 30, 20));
/// ```
pub fn plan(
    native_width: u32,
    native_height: u32,
    geometry: TerminalGeometry,
    config: &RenderConfig,
) -> Result<LayoutPlan, PreviewError> {
    config.validate()?;
    if native_width == 0 {
        return Err(PreviewError::InvalidImage);
    }

    let columns = geometry.columns as u32;
    let target_width = columns * config.scale_percent / 100;

    // round(tw * nh / nw) without floats: (2 * tw * nh + nw) / (2 * nw)
    let nw = native_width as u64;
    let scaled = (2 * target_width as u64 * native_height as u64 + nw) / (2 * nw);
    let target_height =
        u32::try_from(scaled).map_err(|_| PreviewError::InvalidDimensions {
            width: target_width,
            height: u32::MAX,
        })?;

    let left_pad = match config.alignment {
        Alignment::Left => 0,
        Alignment::Center => columns.saturating_sub(target_width) / 2,
        Alignment::Right => columns.saturating_sub(target_width),
    };

    let layout = LayoutPlan {
        target_width,
        target_height,
        left_pad,
    };
    log::debug!(
        "Planned {}x{} -> {:?} for {} columns at {}% ({})",
        native_width,
        native_height,
        layout,
        columns,
        config.scale_percent,
        config.alignment
    );
    Ok(layout)
}
