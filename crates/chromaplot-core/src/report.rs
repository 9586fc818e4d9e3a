//! Per-render classification results for every point and centroid.
//!
//! Reports are rebuilt on each render and consumed by the overlay labels
//! and by exporters. Nothing here is cached.

use serde::Serialize;

use crate::classify::{Classification, Classifier};
use crate::model::{ChromaticityPoint, PointSet};

/// Classification of a single point or centroid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointReport {
    /// "P1", "P2", ... for points; "Centroid" for centroids.
    pub label: String,
    pub point: ChromaticityPoint,
    pub classification: Classification,
    pub purity: f64,
}

impl PointReport {
    fn new(label: String, point: ChromaticityPoint, classifier: &Classifier) -> Self {
        let classification = classifier.classify_wavelength(point);
        let purity = classifier.purity_of(point, &classification);
        Self {
            label,
            point,
            classification,
            purity,
        }
    }
}

/// Classification results for one set, in display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SetReport {
    pub name: String,
    /// Position of the set in the input; selects the palette color.
    pub index: usize,
    pub points: Vec<PointReport>,
    /// Classified independently from the centroid coordinate. `None` for an
    /// empty set.
    pub centroid: Option<PointReport>,
}

/// Classify every point and every centroid of `sets`.
pub fn report_sets(sets: &[PointSet], classifier: &Classifier) -> Vec<SetReport> {
    sets.iter()
        .enumerate()
        .map(|(index, set)| SetReport {
            name: set.name.clone(),
            index,
            points: set
                .points
                .iter()
                .enumerate()
                .map(|(i, &p)| PointReport::new(PointSet::point_label(i), p, classifier))
                .collect(),
            centroid: set
                .centroid()
                .map(|c| PointReport::new("Centroid".to_string(), c, classifier)),
        })
        .collect()
}
