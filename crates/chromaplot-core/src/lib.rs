//! Chromaplot Core — domain layer for CIE 1931 chromaticity analysis.
//!
//! This crate contains the colorimetry, spectral-locus matching,
//! dominant-wavelength/purity classification, and zoom-window math.
//! No drawing or file-format dependencies.

pub mod classify;
pub mod config;
pub mod convert;
pub mod error;
pub mod locus;
pub mod model;
pub mod report;
pub mod zoom;

// Re-exports for convenience.
pub use classify::{Classification, Classifier, Wavelength};
pub use config::{DiagramConfig, DisplayToggles};
pub use error::ConfigError;
pub use locus::{LocusMatch, LocusSample, SPECTRAL_LOCUS};
pub use model::{ChromaticityPoint, PointSet};
pub use report::{PointReport, SetReport, report_sets};
pub use zoom::{ZoomSettings, ZoomWindow, compute_zoom_window};
