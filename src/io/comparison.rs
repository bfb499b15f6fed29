//! Read/write comparison JSON files.
//!
//! A comparison file is the portable record of one run:
//! - both parameter sets and the integration rule
//! - the redshift grid and every sampled series
//! - the Hubble-tension summary
//!
//! The schema is [`ComparisonFile`].

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::app::pipeline::{ComparisonOutput, ModelSeries};
use crate::domain::{IntegrationRule, ModelPair};
use crate::error::{AppError, EXIT_INPUT, EXIT_NUMERIC, EXIT_OUTPUT};
use crate::report::TensionSummary;

pub const TOOL_NAME: &str = "idt";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonFile {
    pub tool: String,
    pub generated_at: DateTime<Utc>,
    pub models: ModelPair,
    pub integration: IntegrationRule,
    pub z: Vec<f64>,
    pub lcdm: ModelSeries,
    pub enhanced: ModelSeries,
    pub tension: TensionSummary,
}

impl ComparisonFile {
    pub fn from_run(run: &ComparisonOutput) -> Self {
        Self {
            tool: TOOL_NAME.to_string(),
            generated_at: Utc::now(),
            models: run.models,
            integration: run.integration,
            z: run.grid.z.clone(),
            lcdm: run.lcdm.clone(),
            enhanced: run.enhanced.clone(),
            tension: run.tension,
        }
    }
}

/// Write a comparison JSON file.
///
/// JSON has no representation for NaN or infinity, so any non-finite sample
/// aborts the export.
pub fn write_comparison_json(path: &Path, run: &ComparisonOutput) -> Result<(), AppError> {
    for series in [&run.lcdm, &run.enhanced] {
        ensure_finite(series)?;
    }

    let file = File::create(path).map_err(|e| {
        AppError::new(EXIT_OUTPUT, format!("Failed to create comparison JSON '{}': {e}", path.display()))
    })?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &ComparisonFile::from_run(run))
        .map_err(|e| AppError::new(EXIT_OUTPUT, format!("Failed to write comparison JSON: {e}")))?;
    writer
        .flush()
        .map_err(|e| AppError::new(EXIT_OUTPUT, format!("Failed to flush comparison JSON: {e}")))?;

    tracing::info!(path = %path.display(), "wrote JSON export");
    Ok(())
}

/// Read a comparison JSON file.
pub fn read_comparison_json(path: &Path) -> Result<ComparisonFile, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::new(EXIT_INPUT, format!("Failed to open comparison JSON '{}': {e}", path.display()))
    })?;
    let parsed: ComparisonFile = serde_json::from_reader(file)
        .map_err(|e| AppError::new(EXIT_INPUT, format!("Invalid comparison JSON: {e}")))?;
    Ok(parsed)
}

fn ensure_finite(series: &ModelSeries) -> Result<(), AppError> {
    let columns: [(&str, Option<&Vec<f64>>); 5] = [
        ("w", Some(&series.w)),
        ("hubble", Some(&series.hubble)),
        ("growth", Some(&series.growth)),
        ("growth_rate", Some(&series.growth_rate)),
        ("cs2", series.cs2.as_ref()),
    ];
    for (name, values) in columns {
        let Some(values) = values else { continue };
        if let Some(i) = values.iter().position(|v| !v.is_finite()) {
            return Err(AppError::new(
                EXIT_NUMERIC,
                format!(
                    "Non-finite {name} value at index {i} for {}.",
                    series.kind.display_name()
                ),
            ));
        }
    }
    Ok(())
}
