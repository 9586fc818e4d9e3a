//! Dominant-wavelength and spectral-purity classification.
//!
//! A point is classified by its nearest spectral-locus sample rather than by
//! intersecting the white→point ray with the locus. This is cheap and
//! adequate for LED-like inputs near the locus, but points far from the
//! locus in ambiguous directions can be misclassified.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::locus::{self, LocusSample};
use crate::model::ChromaticityPoint;

/// Default maximum distance to the locus for a point to count as spectral.
pub const DEFAULT_THRESHOLD: f64 = 0.06;

/// Default reference white (equal-energy approximation).
pub const DEFAULT_REFERENCE_WHITE: ChromaticityPoint = ChromaticityPoint::new(0.3333, 0.3333);

/// Dominant wavelength of a classified point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Wavelength {
    /// Matched a locus sample within the threshold (nanometers).
    Spectral(u32),
    /// Too far from the locus; treated as the purple-line region.
    NonSpectral,
}

impl fmt::Display for Wavelength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spectral(nm) => write!(f, "{nm}"),
            Self::NonSpectral => write!(f, "Purple"),
        }
    }
}

/// Classification of one chromaticity point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Classification {
    pub wavelength: Wavelength,
    /// `true` when the point is non-spectral.
    pub is_complementary: bool,
    pub nearest_sample: LocusSample,
    pub distance_to_locus: f64,
}

impl Classification {
    /// Per-point label: whole nanometers, or "Purple".
    pub fn point_label(&self) -> String {
        self.wavelength.to_string()
    }

    /// Centroid label: nanometers with one decimal, or "Purple".
    pub fn centroid_label(&self) -> String {
        match self.wavelength {
            Wavelength::Spectral(nm) => format!("{:.1}", f64::from(nm)),
            Wavelength::NonSpectral => Wavelength::NonSpectral.to_string(),
        }
    }
}

/// Purity formatted with three decimals.
pub fn purity_label(purity: f64) -> String {
    format!("{purity:.3}")
}

/// Nearest-sample classifier with a tunable threshold and reference white.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Classifier {
    /// Maximum distance to the locus for a spectral classification.
    pub threshold: f64,
    /// White point that purity is measured from.
    pub reference_white: ChromaticityPoint,
}

impl Default for Classifier {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            reference_white: DEFAULT_REFERENCE_WHITE,
        }
    }
}

impl Classifier {
    /// Classify the dominant wavelength of `point`.
    ///
    /// `distance <= threshold` is spectral; anything farther is non-spectral
    /// and complementary.
    pub fn classify_wavelength(&self, point: ChromaticityPoint) -> Classification {
        let m = locus::nearest(point);
        let spectral = m.distance <= self.threshold;
        Classification {
            wavelength: if spectral {
                Wavelength::Spectral(m.sample.wavelength_nm)
            } else {
                Wavelength::NonSpectral
            },
            is_complementary: !spectral,
            nearest_sample: m.sample,
            distance_to_locus: m.distance,
        }
    }

    /// Spectral purity of `point` in [0, 1].
    pub fn classify_purity(&self, point: ChromaticityPoint) -> f64 {
        self.purity_of(point, &self.classify_wavelength(point))
    }

    /// Purity for an already computed classification of `point`.
    ///
    /// ```text
    /// non-spectral          → 1.0
    /// spectral              → min(|white − point| / |white − locus|, 1)
    /// locus == white        → 0.0
    /// ```
    pub fn purity_of(&self, point: ChromaticityPoint, classification: &Classification) -> f64 {
        if classification.is_complementary {
            return 1.0;
        }
        let white = self.reference_white;
        let to_locus = white.distance(classification.nearest_sample.coordinate);
        if to_locus == 0.0 {
            return 0.0;
        }
        (white.distance(point) / to_locus).min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locus::SPECTRAL_LOCUS;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_exact_locus_sample_is_spectral() {
        let classifier = Classifier::default();
        let s = SPECTRAL_LOCUS[24]; // 500nm
        let c = classifier.classify_wavelength(s.coordinate);
        assert_eq!(c.wavelength, Wavelength::Spectral(500));
        assert_eq!(c.distance_to_locus, 0.0);
        assert!(!c.is_complementary);
        assert!((classifier.classify_purity(s.coordinate) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_red_corner_is_orange_red() {
        let c = Classifier::default().classify_wavelength(ChromaticityPoint::new(0.64, 0.33));
        assert!(!c.is_complementary);
        match c.wavelength {
            Wavelength::Spectral(nm) => assert!((600..=620).contains(&nm), "got {nm}nm"),
            Wavelength::NonSpectral => panic!("red corner should be spectral"),
        }
    }

    #[test]
    fn test_white_point_is_non_spectral_with_full_purity() {
        let classifier = Classifier::default();
        let white = DEFAULT_REFERENCE_WHITE;
        let c = classifier.classify_wavelength(white);
        assert!(c.distance_to_locus > DEFAULT_THRESHOLD);
        assert_eq!(c.wavelength, Wavelength::NonSpectral);
        assert!(c.is_complementary);
        assert_eq!(classifier.classify_purity(white), 1.0);
    }

    #[test]
    fn test_purity_clamped_to_one() {
        // Just outside the 520nm sample, farther from white than the locus.
        let classifier = Classifier::default();
        let p = ChromaticityPoint::new(0.0743, 0.86);
        let c = classifier.classify_wavelength(p);
        assert_eq!(c.wavelength, Wavelength::Spectral(520));
        assert_eq!(classifier.classify_purity(p), 1.0);
    }

    #[test]
    fn test_purity_is_ratio_of_white_distances() {
        let classifier = Classifier::default();
        let p = ChromaticityPoint::new(0.66, 0.33);
        let c = classifier.classify_wavelength(p);
        let white = classifier.reference_white;
        let expected = white.distance(p) / white.distance(c.nearest_sample.coordinate);
        assert!(expected < 1.0);
        assert!((classifier.classify_purity(p) - expected).abs() < EPSILON);
    }

    #[test]
    fn test_purity_zero_when_white_coincides_with_locus() {
        let s = SPECTRAL_LOCUS[40]; // 580nm
        let classifier = Classifier {
            reference_white: s.coordinate,
            ..Classifier::default()
        };
        let p = ChromaticityPoint::new(s.coordinate.x + 0.01, s.coordinate.y);
        assert_eq!(classifier.classify_purity(p), 0.0);
    }

    #[test]
    fn test_threshold_is_configurable() {
        let p = ChromaticityPoint::new(0.3, 0.6);
        assert!(Classifier::default().classify_wavelength(p).is_complementary);
        let loose = Classifier {
            threshold: 0.1,
            ..Classifier::default()
        };
        assert_eq!(loose.classify_wavelength(p).wavelength, Wavelength::Spectral(555));
    }

    #[test]
    fn test_labels() {
        let classifier = Classifier::default();
        let spectral = classifier.classify_wavelength(SPECTRAL_LOCUS[46].coordinate);
        assert_eq!(spectral.point_label(), "610");
        assert_eq!(spectral.centroid_label(), "610.0");
        let purple = classifier.classify_wavelength(DEFAULT_REFERENCE_WHITE);
        assert_eq!(purple.point_label(), "Purple");
        assert_eq!(purple.centroid_label(), "Purple");
        assert_eq!(purity_label(0.12345), "0.123");
    }
}
