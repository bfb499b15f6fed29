//! Parameter file loading.
//!
//! The file is JSON shaped like [`ModelPair`]; either section may be omitted
//! and then keeps its reference values. The hidden region is resolved the same
//! way for every source: when enabled, non-positive `z_transition`,
//! `amplitude` or `width` fall back to their defaults.

use std::fs::File;
use std::path::Path;

use crate::domain::ModelPair;
use crate::error::{AppError, EXIT_INPUT};

/// Read and resolve a parameter file.
pub fn read_params_file(path: &Path) -> Result<ModelPair, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::new(EXIT_INPUT, format!("Failed to open parameter file '{}': {e}", path.display()))
    })?;
    let raw: ModelPair = serde_json::from_reader(file)
        .map_err(|e| AppError::new(EXIT_INPUT, format!("Invalid parameter file: {e}")))?;

    resolve_params(raw)
}

/// Validate both parameter sets and apply the hidden-region defaults.
pub fn resolve_params(raw: ModelPair) -> Result<ModelPair, AppError> {
    raw.baseline.validate("baseline")?;
    raw.enhanced.cosmo.validate("enhanced")?;

    let mut models = raw;
    let (hidden_region, replaced) = raw.enhanced.hidden_region.resolve_defaults();
    if !hidden_region.enabled {
        tracing::warn!("hidden region disabled; Enhanced IDT reduces to a plain CPL fluid");
    }
    for field in replaced {
        tracing::debug!(param = field, "hidden region: using default value");
    }
    models.enhanced.hidden_region = hidden_region;

    tracing::info!(
        z_transition = hidden_region.z_transition,
        amplitude = hidden_region.amplitude,
        width = hidden_region.width,
        "resolved model parameters"
    );
    Ok(models)
}
