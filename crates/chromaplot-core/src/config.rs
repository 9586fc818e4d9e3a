//! Diagram configuration: raster size, classifier tuning, zoom behavior,
//! and display toggles.
//!
//! Every section is `#[serde(default)]`, so a config file only needs the
//! fields it overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::classify::Classifier;
use crate::error::ConfigError;
use crate::zoom::ZoomSettings;

/// Default raster width in pixels.
const DEFAULT_WIDTH: u32 = 900;
/// Default raster height in pixels.
const DEFAULT_HEIGHT: u32 = 720;

/// Which overlay layers are drawn on top of the background raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayToggles {
    /// Translucent fill for sets with at least 3 points.
    pub fill_polygons: bool,
    /// Point markers.
    pub show_points: bool,
    /// Set outlines for sets with at least 2 points.
    pub show_borders: bool,
    /// Centroid marker with wavelength and purity labels.
    pub show_centroids: bool,
    /// Per-point wavelength labels.
    pub show_wavelengths: bool,
    /// Spectral locus outline and line of purples.
    pub show_locus: bool,
}

impl Default for DisplayToggles {
    fn default() -> Self {
        Self {
            fill_polygons: true,
            show_points: true,
            show_borders: true,
            show_centroids: true,
            show_wavelengths: true,
            show_locus: true,
        }
    }
}

/// Complete configuration for one diagram render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagramConfig {
    /// Raster width in pixels.
    pub width: u32,
    /// Raster height in pixels.
    pub height: u32,
    pub classifier: Classifier,
    pub zoom: ZoomSettings,
    pub toggles: DisplayToggles,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            classifier: Classifier::default(),
            zoom: ZoomSettings::default(),
            toggles: DisplayToggles::default(),
        }
    }
}

impl DiagramConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&content)?;
        tracing::info!("loaded diagram config from {}", path.display());
        Ok(config)
    }

    /// Reject values that would break the render pipeline.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid("raster dimensions must be positive"));
        }
        if !(self.classifier.threshold.is_finite() && self.classifier.threshold >= 0.0) {
            return Err(ConfigError::Invalid("classifier threshold must be a non-negative number"));
        }
        if !self.classifier.reference_white.is_finite() {
            return Err(ConfigError::Invalid("reference white must be finite"));
        }
        let zoom = &self.zoom;
        if !(zoom.padding.is_finite() && zoom.padding >= 0.0) {
            return Err(ConfigError::Invalid("zoom padding must be a non-negative number"));
        }
        if !(zoom.epsilon > 0.0 && zoom.fallback_margin > zoom.epsilon) {
            return Err(ConfigError::Invalid(
                "zoom fallback margin must exceed a positive epsilon",
            ));
        }
        if !zoom.fallback_margin.is_finite() {
            return Err(ConfigError::Invalid("zoom fallback margin must be finite"));
        }
        Ok(())
    }
}
