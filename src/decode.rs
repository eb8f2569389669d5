//! Pixel buffers and image file decoding.

use std::path::Path;

use crate::error::PreviewError;

/// A decoded RGB image (3 bytes per pixel: R, G, B), row-major from the top-left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl PixelBuffer {
    /// Wrap packed RGB bytes.
    ///
    /// Fails with [`PreviewError::PixelData`] when `data` is not exactly
    /// `width * height * 3` bytes long.
    pub fn from_rgb(width: u32, height: u32, data: Vec<u8>) -> Result<Self, PreviewError> {
        let expected = width as usize * height as usize * 3;
        if data.len() != expected {
            return Err(PreviewError::PixelData {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// A buffer filled with a single color.
    pub fn solid(width: u32, height: u32, rgb: [u8; 3]) -> Self {
        let count = width as usize * height as usize;
        let mut data = Vec::with_capacity(count * 3);
        for _ in 0..count {
            data.extend_from_slice(&rgb);
        }
        Self {
            data,
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.data.is_empty()
    }

    /// RGB triple at `(x, y)`. Callers must stay within bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let idx = (y as usize * self.width as usize + x as usize) * 3;
        [self.data[idx], self.data[idx + 1], self.data[idx + 2]]
    }

    #[cfg(test)]
    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

/// Decode an image file into an RGB pixel buffer.
///
/// Alpha is dropped and animated formats contribute their first frame only.
pub fn decode(path: &Path) -> Result<PixelBuffer, PreviewError> {
    let to_error = |source| PreviewError::Decode {
        path: path.to_path_buf(),
        source,
    };

    let rgb = image::open(path).map_err(to_error)?.to_rgb8();
    let (width, height) = rgb.dimensions();
    log::info!("Decoded {:?} ({}x{})", path, width, height);

    PixelBuffer::from_rgb(width, height, rgb.into_raw())
}
