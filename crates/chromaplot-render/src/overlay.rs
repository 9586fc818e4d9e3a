//! Vector overlay: set polygons, point markers, centroids, and
//! wavelength/purity labels drawn over the background raster.
//!
//! Uses the same chromaticity → pixel transform as the rasterizer, so marks
//! land on the pixels whose background shows their color.

use chromaplot_core::classify::purity_label;
use chromaplot_core::locus::locus_outline;
use chromaplot_core::{
    ChromaticityPoint, DisplayToggles, PointReport, SetReport, Wavelength, ZoomWindow,
};
use image::RgbaImage;
use image::buffer::ConvertBuffer;
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::error::RenderError;

/// Per-set colors, cycled by set index.
pub const SET_COLORS: [RGBColor; 6] = [
    RGBColor(0, 0, 0),       // black
    RGBColor(255, 255, 255), // white
    RGBColor(230, 25, 75),   // crimson
    RGBColor(0, 92, 230),    // blue
    RGBColor(255, 140, 0),   // orange
    RGBColor(128, 0, 160),   // violet
];

/// Opacity of polygon fills.
const FILL_ALPHA: f64 = 0.25;
/// Marker radius in pixels.
const POINT_RADIUS: i32 = 5;
/// Centroid cross half-size in pixels.
const CENTROID_SIZE: i32 = 7;
/// Label font size in pixels.
const LABEL_SIZE: f64 = 14.0;
/// Label offset from its anchor in pixels.
const LABEL_OFFSET: (i32, i32) = (8, -18);

type Canvas<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

/// Color for the set at `index`.
pub fn set_color(index: usize) -> RGBColor {
    SET_COLORS[index % SET_COLORS.len()]
}

/// Chromaticity → integer pixel mapping for one raster.
#[derive(Debug, Clone, Copy)]
struct Projection {
    window: ZoomWindow,
    width: u32,
    height: u32,
}

impl Projection {
    fn pixel(&self, point: ChromaticityPoint) -> (i32, i32) {
        let (px, py) = self.window.to_pixel(point, self.width, self.height);
        (px.round() as i32, py.round() as i32)
    }

    fn path(&self, points: impl Iterator<Item = ChromaticityPoint>) -> Vec<(i32, i32)> {
        points.map(|p| self.pixel(p)).collect()
    }
}

/// Draw the overlay for `reports` onto `image`.
///
/// - fill: sets with at least 3 points
/// - border: sets with at least 2 points, closed only with 3 or more
/// - points and per-point wavelength labels
/// - centroid marker with wavelength (one decimal) and purity (three decimals)
///
/// Labels that fail to render (e.g. no usable system font) are skipped with a
/// warning; other drawing failures are returned.
pub fn draw_overlay(
    image: &mut RgbaImage,
    reports: &[SetReport],
    window: &ZoomWindow,
    toggles: &DisplayToggles,
) -> Result<(), RenderError> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Ok(());
    }
    let projection = Projection {
        window: *window,
        width,
        height,
    };

    let mut rgb: image::RgbImage = image.convert();
    {
        let root = BitMapBackend::with_buffer(&mut rgb, (width, height)).into_drawing_area();

        if toggles.show_locus {
            let outline = projection.path(locus_outline());
            root.draw(&PathElement::new(outline, BLACK.mix(0.6).stroke_width(1)))
                .map_err(draw_error)?;
        }

        for report in reports {
            draw_set(&root, report, &projection, toggles)?;
        }

        root.present().map_err(draw_error)?;
    }
    *image = rgb.convert();
    Ok(())
}

fn draw_set(
    root: &Canvas<'_>,
    report: &SetReport,
    projection: &Projection,
    toggles: &DisplayToggles,
) -> Result<(), RenderError> {
    let color = set_color(report.index);
    let vertices = projection.path(report.points.iter().map(|p| p.point));

    if toggles.fill_polygons && vertices.len() >= 3 {
        root.draw(&Polygon::new(vertices.clone(), color.mix(FILL_ALPHA).filled()))
            .map_err(draw_error)?;
    }

    if toggles.show_borders && vertices.len() >= 2 {
        let mut border = vertices.clone();
        if vertices.len() >= 3 {
            border.push(vertices[0]);
        }
        root.draw(&PathElement::new(border, color.stroke_width(2)))
            .map_err(draw_error)?;
    }

    if toggles.show_points {
        for (point, &pos) in report.points.iter().zip(&vertices) {
            draw_point(root, point, pos, color, toggles.show_wavelengths)?;
        }
    }

    if toggles.show_centroids {
        if let Some(centroid) = &report.centroid {
            draw_centroid(root, centroid, projection.pixel(centroid.point), color)?;
        }
    }
    Ok(())
}

fn draw_point(
    root: &Canvas<'_>,
    point: &PointReport,
    pos: (i32, i32),
    color: RGBColor,
    labeled: bool,
) -> Result<(), RenderError> {
    root.draw(&Circle::new(pos, POINT_RADIUS, color.filled()))
        .map_err(draw_error)?;
    root.draw(&Circle::new(pos, POINT_RADIUS, outline_for(color).stroke_width(1)))
        .map_err(draw_error)?;

    if labeled {
        let unit = if point.classification.is_complementary { "" } else { " nm" };
        let text = format!("{}: {}{}", point.label, point.classification.point_label(), unit);
        draw_label(root, &text, offset(pos, LABEL_OFFSET));
    }
    Ok(())
}

fn draw_centroid(
    root: &Canvas<'_>,
    centroid: &PointReport,
    pos: (i32, i32),
    color: RGBColor,
) -> Result<(), RenderError> {
    root.draw(&Cross::new(pos, CENTROID_SIZE, outline_for(color).stroke_width(4)))
        .map_err(draw_error)?;
    root.draw(&Cross::new(pos, CENTROID_SIZE, color.stroke_width(2)))
        .map_err(draw_error)?;

    let wavelength = match centroid.classification.wavelength {
        Wavelength::Spectral(_) => format!("λ {} nm", centroid.classification.centroid_label()),
        Wavelength::NonSpectral => centroid.classification.centroid_label(),
    };
    draw_label(root, &wavelength, offset(pos, LABEL_OFFSET));
    draw_label(
        root,
        &format!("purity {}", purity_label(centroid.purity)),
        offset(pos, (LABEL_OFFSET.0, LABEL_OFFSET.1 + LABEL_SIZE as i32 + 2)),
    );
    Ok(())
}

/// Draw `text` at `pos`, logging instead of failing when text rendering is
/// unavailable.
fn draw_label(root: &Canvas<'_>, text: &str, pos: (i32, i32)) {
    let style = ("sans-serif", LABEL_SIZE).into_font().color(&BLACK);
    if let Err(e) = root.draw(&Text::new(text, pos, style)) {
        tracing::warn!("skipping overlay label {:?}: {}", text, e);
    }
}

/// Contrasting outline so black and white sets stay visible.
fn outline_for(color: RGBColor) -> RGBColor {
    if color == BLACK { WHITE } else { BLACK }
}

fn offset((x, y): (i32, i32), (dx, dy): (i32, i32)) -> (i32, i32) {
    (x.saturating_add(dx), y.saturating_add(dy))
}

fn draw_error(e: impl std::fmt::Display) -> RenderError {
    RenderError::Draw(e.to_string())
}
