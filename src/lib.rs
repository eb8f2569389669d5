//! ansi-preview library crate.
//!
//! Renders raster images as 256-color half-block text for quick terminal
//! previews. The binary in `main.rs` is a thin wrapper over [`cli::run`].

pub mod cli;
pub mod config;
pub mod decode;
pub mod error;
pub mod render;
pub mod terminal;

pub use decode::PixelBuffer;
pub use error::PreviewError;
pub use render::{plan, render, Alignment, LayoutPlan, RenderConfig};
pub use terminal::TerminalGeometry;
