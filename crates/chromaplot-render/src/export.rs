//! Export data for the CSV and bitmap collaborators.
//!
//! CSV columns: `Set, Point, x, y, Wavelength, Purity`. One row per point;
//! centroids are not exported.

use std::io;

use chromaplot_core::SetReport;
use chromaplot_core::classify::purity_label;
use image::codecs::png::PngEncoder;
use image::{ImageEncoder, RgbaImage};
use serde::Serialize;

use crate::error::RenderError;

/// CSV header row.
pub const CSV_HEADER: [&str; 6] = ["Set", "Point", "x", "y", "Wavelength", "Purity"];

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    set: &'a str,
    point: &'a str,
    x: String,
    y: String,
    wavelength: String,
    purity: String,
}

/// Write the header and one row per point of `reports` to `writer`.
///
/// Wavelength is whole nanometers or `Purple`; purity has three decimals and
/// coordinates four.
pub fn write_csv<W: io::Write>(reports: &[SetReport], writer: W) -> Result<(), RenderError> {
    let mut csv = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv.write_record(CSV_HEADER)?;
    let mut rows = 0usize;
    for report in reports {
        for point in &report.points {
            csv.serialize(CsvRow {
                set: &report.name,
                point: &point.label,
                x: format!("{:.4}", point.point.x),
                y: format!("{:.4}", point.point.y),
                wavelength: point.classification.point_label(),
                purity: purity_label(point.purity),
            })?;
            rows += 1;
        }
    }
    csv.flush()?;
    tracing::debug!("exported {} CSV rows", rows);
    Ok(())
}

/// [`write_csv`] into a string.
pub fn csv_string(reports: &[SetReport]) -> Result<String, RenderError> {
    let mut buf = Vec::new();
    write_csv(reports, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Encode an RGBA raster as PNG bytes.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, RenderError> {
    let mut png = Vec::new();
    PngEncoder::new(&mut png).write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        image::ExtendedColorType::Rgba8,
    )?;
    Ok(png)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chromaplot_core::{ChromaticityPoint, Classifier, PointSet, report_sets};

    #[test]
    fn test_empty_export_is_header_only() {
        let csv = csv_string(&[]).expect("csv writes");
        assert_eq!(csv, "Set,Point,x,y,Wavelength,Purity\n");
    }

    #[test]
    fn test_rows_format_wavelength_and_purity() {
        let sets = vec![PointSet::new(
            "LED A",
            vec![ChromaticityPoint::new(0.6658, 0.334), ChromaticityPoint::new(0.3333, 0.3333)],
        )];
        let csv = csv_string(&report_sets(&sets, &Classifier::default())).expect("csv writes");
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "LED A,P1,0.6658,0.3340,610,1.000");
        assert_eq!(lines[2], "LED A,P2,0.3333,0.3333,Purple,1.000");
    }

    #[test]
    fn test_names_with_commas_are_quoted() {
        let sets = vec![PointSet::new("a,b", vec![ChromaticityPoint::new(0.3, 0.3)])];
        let csv = csv_string(&report_sets(&sets, &Classifier::default())).expect("csv writes");
        assert!(csv.lines().nth(1).is_some_and(|l| l.starts_with("\"a,b\",P1,")));
    }
}
