//! Spectral locus table and nearest-sample matching.
//!
//! The table holds CIE 1931 2° standard observer chromaticities from 380nm
//! to 780nm in 5nm steps. Beyond ~700nm the locus collapses onto a single
//! coordinate, so the long-wavelength tail repeats the same point.

use serde::Serialize;

use crate::model::ChromaticityPoint;

/// One tabulated point on the spectral locus.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LocusSample {
    /// Wavelength in nanometers.
    pub wavelength_nm: u32,
    /// Chromaticity of monochromatic light at this wavelength.
    pub coordinate: ChromaticityPoint,
}

const fn sample(wavelength_nm: u32, x: f64, y: f64) -> LocusSample {
    LocusSample {
        wavelength_nm,
        coordinate: ChromaticityPoint::new(x, y),
    }
}

/// Number of samples in [`SPECTRAL_LOCUS`].
pub const LOCUS_LEN: usize = 81;

/// The spectral locus, ascending by wavelength.
pub static SPECTRAL_LOCUS: [LocusSample; LOCUS_LEN] = [
    sample(380, 0.1741, 0.0050),
    sample(385, 0.1740, 0.0050),
    sample(390, 0.1738, 0.0049),
    sample(395, 0.1736, 0.0049),
    sample(400, 0.1733, 0.0048),
    sample(405, 0.1730, 0.0048),
    sample(410, 0.1726, 0.0048),
    sample(415, 0.1721, 0.0048),
    sample(420, 0.1714, 0.0051),
    sample(425, 0.1703, 0.0058),
    sample(430, 0.1689, 0.0069),
    sample(435, 0.1669, 0.0086),
    sample(440, 0.1644, 0.0109),
    sample(445, 0.1611, 0.0138),
    sample(450, 0.1566, 0.0177),
    sample(455, 0.1510, 0.0227),
    sample(460, 0.1440, 0.0297),
    sample(465, 0.1355, 0.0399),
    sample(470, 0.1241, 0.0578),
    sample(475, 0.1096, 0.0868),
    sample(480, 0.0913, 0.1327),
    sample(485, 0.0687, 0.2007),
    sample(490, 0.0454, 0.2950),
    sample(495, 0.0235, 0.4127),
    sample(500, 0.0082, 0.5384),
    sample(505, 0.0039, 0.6548),
    sample(510, 0.0139, 0.7502),
    sample(515, 0.0389, 0.8120),
    sample(520, 0.0743, 0.8338),
    sample(525, 0.1142, 0.8262),
    sample(530, 0.1547, 0.8059),
    sample(535, 0.1929, 0.7816),
    sample(540, 0.2296, 0.7543),
    sample(545, 0.2658, 0.7243),
    sample(550, 0.3016, 0.6923),
    sample(555, 0.3373, 0.6589),
    sample(560, 0.3731, 0.6245),
    sample(565, 0.4087, 0.5896),
    sample(570, 0.4441, 0.5547),
    sample(575, 0.4788, 0.5202),
    sample(580, 0.5125, 0.4866),
    sample(585, 0.5448, 0.4544),
    sample(590, 0.5752, 0.4242),
    sample(595, 0.6029, 0.3965),
    sample(600, 0.6270, 0.3725),
    sample(605, 0.6482, 0.3514),
    sample(610, 0.6658, 0.3340),
    sample(615, 0.6801, 0.3197),
    sample(620, 0.6915, 0.3083),
    sample(625, 0.7006, 0.2993),
    sample(630, 0.7079, 0.2920),
    sample(635, 0.7140, 0.2859),
    sample(640, 0.7190, 0.2809),
    sample(645, 0.7230, 0.2770),
    sample(650, 0.7260, 0.2740),
    sample(655, 0.7283, 0.2717),
    sample(660, 0.7300, 0.2700),
    sample(665, 0.7311, 0.2689),
    sample(670, 0.7320, 0.2680),
    sample(675, 0.7327, 0.2673),
    sample(680, 0.7334, 0.2666),
    sample(685, 0.7340, 0.2660),
    sample(690, 0.7344, 0.2656),
    sample(695, 0.7346, 0.2654),
    sample(700, 0.7347, 0.2653),
    sample(705, 0.7347, 0.2653),
    sample(710, 0.7347, 0.2653),
    sample(715, 0.7347, 0.2653),
    sample(720, 0.7347, 0.2653),
    sample(725, 0.7347, 0.2653),
    sample(730, 0.7347, 0.2653),
    sample(735, 0.7347, 0.2653),
    sample(740, 0.7347, 0.2653),
    sample(745, 0.7347, 0.2653),
    sample(750, 0.7347, 0.2653),
    sample(755, 0.7347, 0.2653),
    sample(760, 0.7347, 0.2653),
    sample(765, 0.7347, 0.2653),
    sample(770, 0.7347, 0.2653),
    sample(775, 0.7347, 0.2653),
    sample(780, 0.7347, 0.2653),
];

/// Result of a nearest-sample search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LocusMatch {
    pub sample: LocusSample,
    /// Euclidean xy distance from the query point to `sample`.
    pub distance: f64,
}

/// Find the locus sample closest to `point`.
///
/// Linear scan in table order. On equal distances the first sample wins,
/// i.e. the lowest wavelength.
pub fn nearest(point: ChromaticityPoint) -> LocusMatch {
    let first = LocusMatch {
        sample: SPECTRAL_LOCUS[0],
        distance: point.distance(SPECTRAL_LOCUS[0].coordinate),
    };
    SPECTRAL_LOCUS[1..].iter().fold(first, |best, sample| {
        let distance = point.distance(sample.coordinate);
        if distance < best.distance {
            LocusMatch {
                sample: *sample,
                distance,
            }
        } else {
            best
        }
    })
}

/// Outline of the visible gamut: every locus sample in order, closed by the
/// line of purples back to the first sample.
pub fn locus_outline() -> impl Iterator<Item = ChromaticityPoint> {
    SPECTRAL_LOCUS
        .iter()
        .map(|s| s.coordinate)
        .chain(std::iter::once(SPECTRAL_LOCUS[0].coordinate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    #[test]
    fn test_table_is_ascending_in_5nm_steps() {
        assert_eq!(SPECTRAL_LOCUS[0].wavelength_nm, 380);
        assert_eq!(SPECTRAL_LOCUS[LOCUS_LEN - 1].wavelength_nm, 780);
        for pair in SPECTRAL_LOCUS.windows(2) {
            assert_eq!(pair[1].wavelength_nm - pair[0].wavelength_nm, 5);
        }
    }

    #[test]
    fn test_nearest_exact_sample_has_zero_distance() {
        for s in &SPECTRAL_LOCUS[..64] {
            let m = nearest(s.coordinate);
            assert_eq!(m.distance, 0.0);
            assert_eq!(m.sample.coordinate, s.coordinate);
        }
        let m = nearest(ChromaticityPoint::new(0.1566, 0.0177));
        assert_eq!(m.sample.wavelength_nm, 450);
    }

    #[test]
    fn test_nearest_ties_resolve_to_lowest_wavelength() {
        // 700nm through 780nm share one coordinate.
        let m = nearest(ChromaticityPoint::new(0.7347, 0.2653));
        assert_eq!(m.sample.wavelength_nm, 700);
        let m = nearest(ChromaticityPoint::new(0.79, 0.25));
        assert_eq!(m.sample.wavelength_nm, 700);
    }

    #[test]
    fn test_nearest_matches_brute_force() {
        let mut rng = StdRng::seed_from_u64(0x1931);
        for _ in 0..500 {
            let p = ChromaticityPoint::new(rng.random_range(0.0..0.8), rng.random_range(0.0..0.9));
            let m = nearest(p);
            for s in &SPECTRAL_LOCUS {
                assert!(
                    m.distance <= p.distance(s.coordinate),
                    "{p:?}: {}nm at {} beats match {}nm at {}",
                    s.wavelength_nm,
                    p.distance(s.coordinate),
                    m.sample.wavelength_nm,
                    m.distance
                );
            }
        }
    }

    #[test]
    fn test_locus_outline_is_closed() {
        let outline: Vec<_> = locus_outline().collect();
        assert_eq!(outline.len(), LOCUS_LEN + 1);
        assert_eq!(outline.first(), outline.last());
    }
}
