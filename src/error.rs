//! Error types for the preview pipeline.
//!
//! Every failure here is a deterministic function of the input, so callers
//! report it and move on to the next image instead of retrying.

use std::path::PathBuf;

/// Errors that can occur while planning, decoding or rendering a preview.
#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    /// Bad scale or position value, from the command line or the config file
    #[error("{0}")]
    InvalidConfig(String),

    #[error("no input files.")]
    NoInputFiles,

    /// The file could not be opened or is not a supported image
    #[error("cannot decode '{}': {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The image reports a zero native width, so no aspect ratio exists
    #[error("image has zero width.")]
    InvalidImage,

    #[error("cannot resize image to {width}x{height}.")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("image is empty.")]
    EmptyImage,

    /// Raw pixel data does not match the declared dimensions
    #[error("pixel data has {actual} bytes, expected {expected}.")]
    PixelData { expected: usize, actual: usize },
}

impl PreviewError {
    pub(crate) fn invalid_config(msg: impl Into<String>) -> Self {
        PreviewError::InvalidConfig(msg.into())
    }
}
