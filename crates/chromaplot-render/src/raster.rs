//! Background raster: every pixel colored by its own chromaticity.
//!
//! Each pixel is inverse-mapped through the zoom window and shown at
//! luminance 1. The whole raster is regenerated on every render.

use chromaplot_core::ZoomWindow;
use chromaplot_core::convert::xy_to_srgb8;
use image::{Rgba, RgbaImage};

/// Luminance used for every background pixel.
const BACKGROUND_LUMINANCE: f64 = 1.0;

/// Fill a `width × height` raster with the colors of `window`.
///
/// Zero-sized dimensions produce an empty image.
pub fn rasterize(window: &ZoomWindow, width: u32, height: u32) -> RgbaImage {
    let image = RgbaImage::from_fn(width, height, |i, j| {
        let p = window.to_chromaticity(i, j, width, height);
        let c = xy_to_srgb8(p.x, p.y, BACKGROUND_LUMINANCE);
        Rgba([c.red, c.green, c.blue, u8::MAX])
    });
    tracing::debug!(
        "rasterized {}x{} background for window x=[{:.4}, {:.4}] y=[{:.4}, {:.4}]",
        width,
        height,
        window.x_min,
        window.x_max,
        window.y_min,
        window.y_max
    );
    image
}
