//! Point and point-set representation supplied by the UI layer.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// A CIE 1931 xy chromaticity coordinate.
///
/// The diagram domain is x ∈ [0, 0.8], y ∈ [0, 0.9]. Points outside of it
/// are still accepted; they simply fall outside the rendered window.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ChromaticityPoint {
    pub x: f64,
    pub y: f64,
}

impl ChromaticityPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// View this point as a 2D vector.
    pub const fn as_dvec2(self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Euclidean distance in the xy plane.
    pub fn distance(self, other: Self) -> f64 {
        self.as_dvec2().distance(other.as_dvec2())
    }

    /// Whether both coordinates are finite numbers.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<DVec2> for ChromaticityPoint {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<(f64, f64)> for ChromaticityPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// A named, ordered collection of points. Index 0 is displayed as "P1".
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PointSet {
    pub name: String,
    pub points: Vec<ChromaticityPoint>,
}

impl PointSet {
    pub fn new(name: impl Into<String>, points: Vec<ChromaticityPoint>) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }

    /// Arithmetic mean of the set's coordinates, or `None` for an empty set.
    pub fn centroid(&self) -> Option<ChromaticityPoint> {
        if self.points.is_empty() {
            return None;
        }
        let sum: DVec2 = self.points.iter().map(|p| p.as_dvec2()).sum();
        Some((sum / self.points.len() as f64).into())
    }

    /// Display label for the point at `index` ("P1", "P2", ...).
    pub fn point_label(index: usize) -> String {
        format!("P{}", index + 1)
    }
}

/// Every point across all sets, in set order then point order.
pub fn flatten(sets: &[PointSet]) -> impl Iterator<Item = ChromaticityPoint> + '_ {
    sets.iter().flat_map(|set| set.points.iter().copied())
}
