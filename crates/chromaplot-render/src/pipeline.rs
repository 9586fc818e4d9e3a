//! Top-level render pass: zoom window → background raster → overlay.

use std::path::Path;

use chromaplot_core::model::flatten;
use chromaplot_core::{
    DiagramConfig, PointSet, SetReport, ZoomWindow, compute_zoom_window, report_sets,
};
use image::RgbaImage;

use crate::error::RenderError;
use crate::export;
use crate::overlay::draw_overlay;
use crate::raster::rasterize;

/// Output of one render: the finished raster plus the classifications its
/// labels were drawn from.
#[derive(Debug, Clone)]
pub struct RenderedScene {
    /// Background and overlay, ready for display or export.
    pub image: RgbaImage,
    /// Window the raster was generated for.
    pub window: ZoomWindow,
    /// Per-set point and centroid classifications, in input order.
    pub reports: Vec<SetReport>,
}

impl RenderedScene {
    /// CSV export of every point's classification.
    pub fn to_csv_string(&self) -> Result<String, RenderError> {
        export::csv_string(&self.reports)
    }

    /// PNG-encode the raster in memory.
    pub fn encode_png(&self) -> Result<Vec<u8>, RenderError> {
        export::encode_png(&self.image)
    }

    /// Write the raster to `path` as PNG.
    pub fn save_png(&self, path: &Path) -> Result<(), RenderError> {
        self.image.save_with_format(path, image::ImageFormat::Png)?;
        tracing::info!("saved diagram to {}", path.display());
        Ok(())
    }
}

/// Render `sets` with `config`.
///
/// Runs to completion synchronously; nothing from a previous render is
/// reused.
pub fn render_scene(
    sets: &[PointSet],
    config: &DiagramConfig,
) -> Result<RenderedScene, RenderError> {
    config.validate()?;

    let window = compute_zoom_window(flatten(sets), &config.zoom);
    let reports = report_sets(sets, &config.classifier);
    tracing::debug!(
        "rendering {} sets ({} points) at {}x{}",
        sets.len(),
        flatten(sets).count(),
        config.width,
        config.height
    );

    let mut image = rasterize(&window, config.width, config.height);
    draw_overlay(&mut image, &reports, &window, &config.toggles)?;

    Ok(RenderedScene {
        image,
        window,
        reports,
    })
}
