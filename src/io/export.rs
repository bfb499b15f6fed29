//! Export the sampled series to CSV.
//!
//! One row per grid redshift, meant to be easy to consume in spreadsheets or
//! downstream scripts.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::app::pipeline::ComparisonOutput;
use crate::error::{AppError, EXIT_NUMERIC, EXIT_OUTPUT};

pub const CSV_HEADER: &str =
    "z,w_lcdm,w_enhanced,h_lcdm,h_enhanced,d_lcdm,d_enhanced,f_lcdm,f_enhanced,cs2_enhanced";

/// Write the comparison series to a CSV file.
pub fn write_series_csv(path: &Path, run: &ComparisonOutput) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(EXIT_OUTPUT, format!("Failed to create export CSV '{}': {e}", path.display())))?;
    let mut file = BufWriter::new(file);

    writeln!(file, "{CSV_HEADER}")
        .map_err(|e| AppError::new(EXIT_OUTPUT, format!("Failed to write export CSV header: {e}")))?;

    let lcdm = &run.lcdm;
    let enh = &run.enhanced;
    for (i, &z) in run.grid.z.iter().enumerate() {
        let cs2 = enh.cs2.as_ref().map(|v| v[i]).unwrap_or(f64::NAN);
        let row = [
            z,
            lcdm.w[i],
            enh.w[i],
            lcdm.hubble[i],
            enh.hubble[i],
            lcdm.growth[i],
            enh.growth[i],
            lcdm.growth_rate[i],
            enh.growth_rate[i],
            cs2,
        ];
        if let Some(bad) = row.iter().position(|v| !v.is_finite()) {
            return Err(AppError::new(
                EXIT_NUMERIC,
                format!("Non-finite value in CSV column {bad} at z={z}."),
            ));
        }
        let cells: Vec<String> = row.iter().map(|v| format!("{v:.10}")).collect();
        writeln!(file, "{}", cells.join(","))
            .map_err(|e| AppError::new(EXIT_OUTPUT, format!("Failed to write export CSV row: {e}")))?;
    }

    file.flush()
        .map_err(|e| AppError::new(EXIT_OUTPUT, format!("Failed to flush export CSV: {e}")))?;
    tracing::info!(path = %path.display(), rows = run.grid.len(), "wrote CSV export");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::app::pipeline::run_comparison;
    use crate::domain::{IntegrationRule, ModelPair};

    #[test]
    fn csv_has_header_and_one_row_per_redshift() {
        let run = run_comparison(&ModelPair::default(), IntegrationRule::Reference).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("series.csv");
        write_series_csv(&path, &run).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(lines.len(), 101);
        assert!(lines[1].starts_with("0.0000000000,-1.0000000000,"));
        assert!(lines[100].starts_with("3.0000000000,"));
        assert!(lines.iter().skip(1).all(|l| l.split(',').count() == 10));
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let mut run = run_comparison(&ModelPair::default(), IntegrationRule::Reference).unwrap();
        run.enhanced.hubble[5] = f64::NAN;
        let dir = tempfile::tempdir().unwrap();
        let err = write_series_csv(&dir.path().join("bad.csv"), &run).unwrap_err();
        assert_eq!(err.exit_code(), EXIT_NUMERIC);
    }

    #[test]
    fn unwritable_path_is_an_output_error() {
        let run = run_comparison(&ModelPair::default(), IntegrationRule::Reference).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let err = write_series_csv(&dir.path().join("missing/sub/series.csv"), &run).unwrap_err();
        assert_eq!(err.exit_code(), EXIT_OUTPUT);
    }
}
