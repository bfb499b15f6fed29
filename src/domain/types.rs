//! Shared domain types.
//!
//! Parameter sets are plain `Copy` records so evaluators can take them by
//! reference without any lookup. They are serializable so they can be:
//!
//! - loaded from a parameter file (`--params`)
//! - written into the JSON comparison export
//! - reloaded later for inspection

use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, EXIT_INPUT};
use crate::math::linspace;

/// Default location of the rendered figures.
pub const DEFAULT_OUTPUT_DIR: &str = "IDT-CLASS/output/plots";

/// Redshift range and resolution shared by every evaluator.
pub const GRID_Z_MIN: f64 = 0.0;
pub const GRID_Z_MAX: f64 = 3.0;
pub const GRID_STEPS: usize = 100;

/// Background cosmology shared by both models.
///
/// `h` is the dimensionless Hubble constant (`H0 = 100·h` km/s/Mpc), `w0`/`wa`
/// are the CPL coefficients of the dark-energy equation of state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CosmoParams {
    pub h: f64,
    pub omega_m: f64,
    pub sigma8: f64,
    pub w0: f64,
    pub wa: f64,
}

impl CosmoParams {
    /// Standard ΛCDM reference values.
    pub const LCDM: CosmoParams = CosmoParams {
        h: 0.6774,
        omega_m: 0.3075,
        sigma8: 0.8168,
        w0: -1.0,
        wa: 0.0,
    };

    /// Background of the Enhanced IDT model.
    pub const ENHANCED: CosmoParams = CosmoParams {
        h: 0.7324,
        omega_m: 0.3137,
        sigma8: 0.7509,
        w0: -0.92,
        wa: -0.14,
    };

    /// Present-day expansion rate in km/s/Mpc.
    pub fn h0(&self) -> f64 {
        100.0 * self.h
    }

    /// Reject values that cannot describe a background cosmology.
    pub fn validate(&self, label: &str) -> Result<(), AppError> {
        let positive = [("h", self.h), ("omega_m", self.omega_m), ("sigma8", self.sigma8)];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(AppError::new(
                    EXIT_INPUT,
                    format!("Invalid {label} parameter {name}={value} (must be finite and > 0)."),
                ));
            }
        }
        for (name, value) in [("w0", self.w0), ("wa", self.wa)] {
            if !value.is_finite() {
                return Err(AppError::new(
                    EXIT_INPUT,
                    format!("Invalid {label} parameter {name}={value} (must be finite)."),
                ));
            }
        }
        Ok(())
    }
}

/// Hidden-region transition applied on top of the CPL equation of state.
///
/// The effect is a smooth step `0.5·(1 − tanh((z − z_transition)/width))`:
/// ~1 well below the transition redshift, ~0 well above it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HiddenRegion {
    pub enabled: bool,
    pub z_transition: f64,
    pub amplitude: f64,
    pub width: f64,
}

impl HiddenRegion {
    pub const DEFAULT_Z_TRANSITION: f64 = 0.35;
    pub const DEFAULT_AMPLITUDE: f64 = 0.05;
    pub const DEFAULT_WIDTH: f64 = 0.1;

    /// A switched-off hidden region: the transition effect is identically zero.
    pub const DISABLED: HiddenRegion = HiddenRegion {
        enabled: false,
        z_transition: 0.0,
        amplitude: 0.0,
        width: 0.0,
    };

    /// Replace non-positive values of an enabled region with the defaults.
    ///
    /// Returns the resolved region and the names of the fields that were
    /// replaced. A disabled region is normalized to [`HiddenRegion::DISABLED`].
    pub fn resolve_defaults(self) -> (HiddenRegion, Vec<&'static str>) {
        if !self.enabled {
            return (HiddenRegion::DISABLED, Vec::new());
        }

        let mut out = self;
        let mut replaced = Vec::new();
        if !(out.z_transition > 0.0) {
            out.z_transition = Self::DEFAULT_Z_TRANSITION;
            replaced.push("z_transition");
        }
        if !(out.amplitude > 0.0) {
            out.amplitude = Self::DEFAULT_AMPLITUDE;
            replaced.push("amplitude");
        }
        if !(out.width > 0.0) {
            out.width = Self::DEFAULT_WIDTH;
            replaced.push("width");
        }
        (out, replaced)
    }
}

impl Default for HiddenRegion {
    fn default() -> Self {
        Self {
            enabled: true,
            z_transition: Self::DEFAULT_Z_TRANSITION,
            amplitude: Self::DEFAULT_AMPLITUDE,
            width: Self::DEFAULT_WIDTH,
        }
    }
}

/// Parameters of the Enhanced IDT model: CPL background plus hidden region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnhancedParams {
    #[serde(flatten)]
    pub cosmo: CosmoParams,
    #[serde(default)]
    pub hidden_region: HiddenRegion,
}

impl Default for EnhancedParams {
    fn default() -> Self {
        Self {
            cosmo: CosmoParams::ENHANCED,
            hidden_region: HiddenRegion::default(),
        }
    }
}

/// Which model an evaluator should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    Lcdm,
    Enhanced,
}

impl ModelKind {
    /// Human-readable label for reports and legends.
    pub fn display_name(self) -> &'static str {
        match self {
            ModelKind::Lcdm => "ΛCDM",
            ModelKind::Enhanced => "Enhanced IDT",
        }
    }
}

/// A model tag together with the parameters it is evaluated with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Model {
    Lcdm(CosmoParams),
    Enhanced(EnhancedParams),
}

impl Model {
    pub fn kind(&self) -> ModelKind {
        match self {
            Model::Lcdm(_) => ModelKind::Lcdm,
            Model::Enhanced(_) => ModelKind::Enhanced,
        }
    }

    pub fn cosmo(&self) -> &CosmoParams {
        match self {
            Model::Lcdm(cosmo) => cosmo,
            Model::Enhanced(params) => &params.cosmo,
        }
    }
}

/// The two parameter sets being compared.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelPair {
    #[serde(default = "default_baseline")]
    pub baseline: CosmoParams,
    #[serde(default)]
    pub enhanced: EnhancedParams,
}

fn default_baseline() -> CosmoParams {
    CosmoParams::LCDM
}

impl Default for ModelPair {
    fn default() -> Self {
        Self {
            baseline: CosmoParams::LCDM,
            enhanced: EnhancedParams::default(),
        }
    }
}

impl ModelPair {
    pub fn lcdm(&self) -> Model {
        Model::Lcdm(self.baseline)
    }

    pub fn enhanced(&self) -> Model {
        Model::Enhanced(self.enhanced)
    }
}

/// An observational H0 anchor (value ± 1σ, km/s/Mpc).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Measurement {
    pub name: &'static str,
    pub h0: f64,
    pub sigma: f64,
}

/// CMB-inferred H0.
pub const PLANCK: Measurement = Measurement {
    name: "Planck CMB",
    h0: 67.4,
    sigma: 0.5,
};

/// Distance-ladder H0.
pub const SHOES: Measurement = Measurement {
    name: "SH0ES",
    h0: 73.04,
    sigma: 1.04,
};

/// How the dark-energy dilution integral of the Enhanced model is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum IntegrationRule {
    /// Sum of all 1000 samples on `[0, z]` times the sample spacing.
    Reference,
    /// Composite trapezoidal rule on the same 1000 samples.
    Trapezoid,
}

/// Evenly spaced redshifts, both endpoints included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedshiftGrid {
    pub z: Vec<f64>,
}

impl RedshiftGrid {
    pub fn new(z_min: f64, z_max: f64, steps: usize) -> Result<Self, AppError> {
        if !(z_min.is_finite() && z_max.is_finite() && z_min >= 0.0 && z_max > z_min) {
            return Err(AppError::new(
                EXIT_INPUT,
                format!("Invalid redshift range: min={z_min}, max={z_max} (must be finite, >=0, and max>min)."),
            ));
        }
        if steps < 2 {
            return Err(AppError::new(EXIT_INPUT, "Redshift grid steps must be >= 2."));
        }
        Ok(Self {
            z: linspace(z_min, z_max, steps),
        })
    }

    /// The 100-point grid on `[0, 3]` used by the comparison.
    pub fn standard() -> Self {
        Self {
            z: linspace(GRID_Z_MIN, GRID_Z_MAX, GRID_STEPS),
        }
    }

    pub fn len(&self) -> usize {
        self.z.len()
    }

    pub fn is_empty(&self) -> bool {
        self.z.is_empty()
    }
}

/// Resolved options for one `idt compare` run.
#[derive(Debug, Clone)]
pub struct CompareConfig {
    pub output_dir: PathBuf,
    pub params: Option<PathBuf>,
    pub integration: IntegrationRule,
    pub plots: bool,
    pub export_csv: Option<PathBuf>,
    pub export_json: Option<PathBuf>,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            params: None,
            integration: IntegrationRule::Reference,
            plots: true,
            export_csv: None,
            export_json: None,
        }
    }
}
