//! Auto-zoom window over the active points, and the chromaticity ↔ pixel
//! transform shared by the rasterizer and the overlay.

use serde::{Deserialize, Serialize};

use crate::model::ChromaticityPoint;

/// Diagram domain bounds.
pub const DOMAIN_X_MAX: f64 = 0.8;
pub const DOMAIN_Y_MAX: f64 = 0.9;

/// Padding and degenerate-axis handling for [`compute_zoom_window`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomSettings {
    /// Added on each side of the point extents, per axis.
    pub padding: f64,
    /// Spans below this are treated as degenerate.
    pub epsilon: f64,
    /// Added on each side of a degenerate axis before re-clamping.
    pub fallback_margin: f64,
}

impl Default for ZoomSettings {
    fn default() -> Self {
        Self {
            padding: 0.02,
            epsilon: 1e-6,
            fallback_margin: 0.01,
        }
    }
}

/// A rectangle in chromaticity space. Always `x_min < x_max`, `y_min < y_max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomWindow {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ZoomWindow {
    /// The whole diagram domain.
    pub const FULL: Self = Self {
        x_min: 0.0,
        x_max: DOMAIN_X_MAX,
        y_min: 0.0,
        y_max: DOMAIN_Y_MAX,
    };

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Map pixel `(i, j)` of a `width × height` raster to chromaticity.
    ///
    /// ```text
    /// x = x_min + (i / (W − 1)) · (x_max − x_min)
    /// y = y_min + (1 − j / (H − 1)) · (y_max − y_min)
    /// ```
    ///
    /// Row 0 is the top of the image (maximum y).
    pub fn to_chromaticity(&self, i: u32, j: u32, width: u32, height: u32) -> ChromaticityPoint {
        let fx = unit_fraction(i, width);
        let fy = unit_fraction(j, height);
        ChromaticityPoint::new(
            self.x_min + fx * self.width(),
            self.y_min + (1.0 - fy) * self.height(),
        )
    }

    /// Map a chromaticity coordinate to fractional pixel coordinates. Inverse
    /// of [`Self::to_chromaticity`]; the result may lie outside the raster.
    pub fn to_pixel(&self, point: ChromaticityPoint, width: u32, height: u32) -> (f64, f64) {
        let sx = f64::from(width.saturating_sub(1));
        let sy = f64::from(height.saturating_sub(1));
        let fx = (point.x - self.x_min) / self.width();
        let fy = (point.y - self.y_min) / self.height();
        (fx * sx, (1.0 - fy) * sy)
    }
}

impl Default for ZoomWindow {
    fn default() -> Self {
        Self::FULL
    }
}

/// `index / (len − 1)`, with a single-pixel axis mapping to 0.
fn unit_fraction(index: u32, len: u32) -> f64 {
    if len <= 1 {
        0.0
    } else {
        f64::from(index) / f64::from(len - 1)
    }
}

/// Compute the padded bounding box of `points`, clamped to the domain.
///
/// Empty input (or input with no finite coordinates) yields
/// [`ZoomWindow::FULL`]. An axis whose span collapses below
/// `settings.epsilon` is widened by `settings.fallback_margin` on each side
/// and clamped again.
pub fn compute_zoom_window<I>(points: I, settings: &ZoomSettings) -> ZoomWindow
where
    I: IntoIterator<Item = ChromaticityPoint>,
{
    let mut extents: Option<[f64; 4]> = None;
    for p in points.into_iter().filter(|p| p.is_finite()) {
        let e = extents.get_or_insert([p.x, p.x, p.y, p.y]);
        e[0] = e[0].min(p.x);
        e[1] = e[1].max(p.x);
        e[2] = e[2].min(p.y);
        e[3] = e[3].max(p.y);
    }
    let Some([x_lo, x_hi, y_lo, y_hi]) = extents else {
        return ZoomWindow::FULL;
    };

    let (x_min, x_max) = fit_axis(x_lo, x_hi, DOMAIN_X_MAX, settings);
    let (y_min, y_max) = fit_axis(y_lo, y_hi, DOMAIN_Y_MAX, settings);
    ZoomWindow {
        x_min,
        x_max,
        y_min,
        y_max,
    }
}

fn fit_axis(lo: f64, hi: f64, domain_max: f64, settings: &ZoomSettings) -> (f64, f64) {
    let clamp = |v: f64| v.clamp(0.0, domain_max);
    let (mut min, mut max) = (clamp(lo - settings.padding), clamp(hi + settings.padding));
    if max - min < settings.epsilon {
        min = clamp(min - settings.fallback_margin);
        max = clamp(max + settings.fallback_margin);
    }
    (min, max)
}
