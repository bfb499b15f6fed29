//! Shared comparison pipeline used by the `compare` command and the exports.
//!
//! Keeping this in one place keeps the numeric workflow free of side effects:
//! grid -> per-model series -> tension summary
//!
//! Plotting, printing and file exports then only consume [`ComparisonOutput`].

use serde::{Deserialize, Serialize};

use crate::domain::{IntegrationRule, Model, ModelKind, ModelPair, RedshiftGrid};
use crate::error::AppError;
use crate::models::{
    CS2_FLUID, effective_cs2, equation_of_state, growth_factor, growth_rate, hubble_parameter,
    scale_factor,
};
use crate::report::{TensionSummary, compute_tension};

/// Observables of one model sampled on the redshift grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSeries {
    pub kind: ModelKind,
    /// Equation of state `w(z)`.
    pub w: Vec<f64>,
    /// Hubble parameter `H(z)` in km/s/Mpc.
    pub hubble: Vec<f64>,
    /// Growth factor `D(z)`.
    pub growth: Vec<f64>,
    /// Growth rate `f(z)`.
    pub growth_rate: Vec<f64>,
    /// Effective dark-energy sound speed (Enhanced only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cs2: Option<Vec<f64>>,
}

/// All computed outputs of a single comparison run.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonOutput {
    pub models: ModelPair,
    pub integration: IntegrationRule,
    pub grid: RedshiftGrid,
    pub lcdm: ModelSeries,
    pub enhanced: ModelSeries,
    pub tension: TensionSummary,
}

/// Evaluate both models on the standard grid.
pub fn run_comparison(models: &ModelPair, rule: IntegrationRule) -> Result<ComparisonOutput, AppError> {
    run_comparison_on_grid(models, rule, RedshiftGrid::standard())
}

/// Evaluate both models on a caller-provided grid.
pub fn run_comparison_on_grid(
    models: &ModelPair,
    rule: IntegrationRule,
    grid: RedshiftGrid,
) -> Result<ComparisonOutput, AppError> {
    models.baseline.validate("baseline")?;
    models.enhanced.cosmo.validate("enhanced")?;

    let reference_sigma8 = models.baseline.sigma8;

    tracing::info!(points = grid.len(), ?rule, "evaluating models on redshift grid");
    let lcdm = evaluate_model(&models.lcdm(), &grid, rule, reference_sigma8);
    let enhanced = evaluate_model(&models.enhanced(), &grid, rule, reference_sigma8);

    let tension = compute_tension(models);
    tracing::debug!(
        lcdm_sigma = tension.lcdm_sigma,
        enhanced_sigma = tension.enhanced_sigma,
        "computed Hubble tension"
    );

    Ok(ComparisonOutput {
        models: *models,
        integration: rule,
        grid,
        lcdm,
        enhanced,
        tension,
    })
}

/// Map every evaluator over the grid for one model.
pub fn evaluate_model(
    model: &Model,
    grid: &RedshiftGrid,
    rule: IntegrationRule,
    reference_sigma8: f64,
) -> ModelSeries {
    let z = &grid.z;
    let series = |f: &dyn Fn(f64) -> f64| -> Vec<f64> { z.iter().map(|&zi| f(zi)).collect() };

    let cs2 = match model {
        Model::Lcdm(_) => None,
        Model::Enhanced(params) => Some(series(&|zi| {
            effective_cs2(scale_factor(zi), CS2_FLUID, &params.hidden_region)
        })),
    };

    tracing::debug!(model = model.kind().display_name(), "evaluated series");

    ModelSeries {
        kind: model.kind(),
        w: series(&|zi| equation_of_state(zi, model)),
        hubble: series(&|zi| hubble_parameter(zi, model, rule)),
        growth: series(&|zi| growth_factor(zi, model, reference_sigma8)),
        growth_rate: series(&|zi| growth_rate(scale_factor(zi), model)),
        cs2,
    }
}
