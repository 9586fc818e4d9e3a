//! Chromaplot Render — chromaticity-diagram rasterization, overlay drawing,
//! and export.
//!
//! Builds on `chromaplot-core` for all color math. The render pass is
//! synchronous: zoom window → background raster → overlay.

pub mod error;
pub mod export;
pub mod overlay;
pub mod pipeline;
pub mod raster;

pub use error::RenderError;
pub use pipeline::{RenderedScene, render_scene};
