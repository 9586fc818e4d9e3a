//! Color space conversion from CIE xyY to display-ready sRGB.
//!
//! The transforms use the published IEC 61966-2-1 constants with a D65
//! reference white.

use glam::{DMat3, DVec3};
use palette::Srgb;

/// CIE XYZ → linear sRGB (D65).
///
/// ```text
/// | R |   |  3.2404542 -1.5371385 -0.4985314 |   | X |
/// | G | = | -0.9692660  1.8760108  0.0415560 | × | Y |
/// | B |   |  0.0556434 -0.2040259  1.0572252 |   | Z |
/// ```
const XYZ_TO_LINEAR_SRGB: DMat3 = DMat3::from_cols(
    DVec3::new(3.2404542, -0.9692660, 0.0556434),
    DVec3::new(-1.5371385, 1.8760108, -0.2040259),
    DVec3::new(-0.4985314, 0.0415560, 1.0572252),
);

/// Upper bound of the linear segment of the sRGB encoding.
const SRGB_LINEAR_CUTOFF: f64 = 0.0031308;

/// Convert chromaticity plus luminance to CIE XYZ.
///
/// ```text
/// X = x · Y / y
/// Z = (1 − x − y) · Y / y
/// ```
///
/// `y == 0` yields black `(0, 0, 0)`.
pub fn to_xyz(x: f64, y: f64, luminance: f64) -> [f64; 3] {
    if y == 0.0 {
        return [0.0, 0.0, 0.0];
    }
    let scale = luminance / y;
    [x * scale, luminance, (1.0 - x - y) * scale]
}

/// Convert CIE XYZ to gamma-encoded sRGB.
///
/// Negative linear components (out of gamut) are clamped to 0 before
/// encoding. Values above 1 are left as-is; clamping to [0, 1] is the
/// caller's job.
///
/// ```text
/// L <= 0.0031308 → L × 12.92
/// L >  0.0031308 → 1.055 × L^(1/2.4) − 0.055
/// ```
pub fn to_display_color(xyz: [f64; 3]) -> [f64; 3] {
    let linear = XYZ_TO_LINEAR_SRGB * DVec3::from_array(xyz);
    linear.to_array().map(|c| encode_srgb(c.max(0.0)))
}

fn encode_srgb(linear: f64) -> f64 {
    if linear <= SRGB_LINEAR_CUTOFF {
        linear * 12.92
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}

/// Convert an xyY triple to an opaque 8-bit sRGB color.
///
/// Channels are clamped to [0, 1] before quantizing.
pub fn xy_to_srgb8(x: f64, y: f64, luminance: f64) -> Srgb<u8> {
    let [r, g, b] = to_display_color(to_xyz(x, y, luminance)).map(|c| c.clamp(0.0, 1.0));
    Srgb::new(r, g, b).into_format()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-4;

    #[test]
    fn test_to_xyz_zero_y_is_black() {
        assert_eq!(to_xyz(0.3, 0.0, 1.0), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_to_xyz_known_values() {
        let [x, y, z] = to_xyz(0.3127, 0.3290, 1.0);
        assert!((x - 0.950_456).abs() < EPSILON);
        assert!((y - 1.0).abs() < EPSILON);
        assert!((z - 1.089_058).abs() < EPSILON);
    }

    #[test]
    fn test_d65_white_maps_to_white() {
        let rgb = to_display_color(to_xyz(0.3127, 0.3290, 1.0));
        for c in rgb {
            assert!((c - 1.0).abs() < 1e-3, "channel {c} should be ~1.0");
        }
    }

    #[test]
    fn test_zero_luminance_is_black() {
        let rgb = to_display_color(to_xyz(0.4, 0.4, 0.0));
        assert_eq!(rgb, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_out_of_gamut_negative_clamped_before_encoding() {
        // Spectral green at 520nm is far outside sRGB: red goes negative.
        let rgb = to_display_color(to_xyz(0.0743, 0.8338, 1.0));
        assert_eq!(rgb[0], 0.0);
        assert!(rgb[1] > 1.0, "bright green is not re-clamped");
    }

    #[test]
    fn test_linear_segment_below_cutoff() {
        assert!((encode_srgb(0.002) - 0.002 * 12.92).abs() < 1e-12);
        assert!((encode_srgb(1.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_domain_grid_clamps_into_unit_range() {
        let steps = 40;
        for i in 0..=steps {
            for j in 1..=steps {
                let x = 0.8 * i as f64 / steps as f64;
                let y = 0.9 * j as f64 / steps as f64;
                let rgb = to_display_color(to_xyz(x, y, 1.0)).map(|c| c.clamp(0.0, 1.0));
                for c in rgb {
                    assert!((0.0..=1.0).contains(&c), "({x}, {y}) produced {c}");
                }
            }
        }
    }

    #[test]
    fn test_srgb8_red_corner_is_red_dominant() {
        let c = xy_to_srgb8(0.64, 0.33, 1.0);
        assert!(c.red > c.green && c.red > c.blue);
    }
}
