//! Box-average resampling of pixel buffers.

use crate::decode::PixelBuffer;
use crate::error::PreviewError;

/// Resample a pixel buffer to `target_width x target_height`.
///
/// Each target pixel is the average of the source block it covers. Block
/// bounds are computed with truncating integer division, and blocks are
/// widened to one source pixel when upscaling so every target pixel has a
/// source. Channel averages also truncate.
///
/// Returns a new buffer; the input is never modified.
///
/// # Errors
/// * [`PreviewError::EmptyImage`] if the source has no pixels
/// * [`PreviewError::InvalidDimensions`] if either target dimension is zero
pub fn downsample(
    pixels: &PixelBuffer,
    target_width: u32,
    target_height: u32,
) -> Result<PixelBuffer, PreviewError> {
    if pixels.is_empty() {
        return Err(PreviewError::EmptyImage);
    }
    if target_width == 0 || target_height == 0 {
        return Err(PreviewError::InvalidDimensions {
            width: target_width,
            height: target_height,
        });
    }

    let src_w = pixels.width();
    let src_h = pixels.height();

    let mut data = Vec::with_capacity(target_width as usize * target_height as usize * 3);

    for ty in 0..target_height {
        let (start_y, end_y) = span(ty, target_height, src_h);
        for tx in 0..target_width {
            let (start_x, end_x) = span(tx, target_width, src_w);

            let mut sum = [0u64; 3];
            let mut count = 0u64;

            for py in start_y..end_y {
                for px in start_x..end_x {
                    let [r, g, b] = pixels.pixel(px, py);
                    sum[0] += r as u64;
                    sum[1] += g as u64;
                    sum[2] += b as u64;
                    count += 1;
                }
            }

            // span() never yields an empty range, so count >= 1
            data.extend_from_slice(&[
                (sum[0] / count) as u8,
                (sum[1] / count) as u8,
                (sum[2] / count) as u8,
            ]);
        }
    }

    PixelBuffer::from_rgb(target_width, target_height, data)
}

/// Source range `[start, end)` covered by target index `t` out of `target`.
#[inline]
fn span(t: u32, target: u32, source: u32) -> (u32, u32) {
    let start = (t as u64 * source as u64 / target as u64) as u32;
    let end = ((t as u64 + 1) * source as u64 / target as u64) as u32;
    let start = start.min(source - 1);
    (start, end.clamp(start + 1, source))
}
