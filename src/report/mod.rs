//! Reporting utilities: Hubble-tension summary and formatted terminal output.

pub mod format;

pub use format::*;

use serde::{Deserialize, Serialize};

use crate::domain::{Measurement, ModelPair, SHOES};

/// Tension of each model's H0 with the SH0ES measurement, in σ.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TensionSummary {
    pub lcdm_sigma: f64,
    pub enhanced_sigma: f64,
}

/// `|H0_model − H0_obs| / σ_obs`.
pub fn tension_sigma(h0_model: f64, measurement: &Measurement) -> f64 {
    (h0_model - measurement.h0).abs() / measurement.sigma
}

/// Tension of both models against SH0ES.
pub fn compute_tension(models: &ModelPair) -> TensionSummary {
    TensionSummary {
        lcdm_sigma: tension_sigma(models.baseline.h0(), &SHOES),
        enhanced_sigma: tension_sigma(models.enhanced.cosmo.h0(), &SHOES),
    }
}

/// Relative change of the Enhanced σ8 with respect to ΛCDM, in percent.
pub fn sigma8_change_percent(models: &ModelPair) -> f64 {
    (models.enhanced.cosmo.sigma8 / models.baseline.sigma8 - 1.0) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    use crate::domain::PLANCK;

    #[test]
    fn lcdm_tension_with_shoes() {
        let t = compute_tension(&ModelPair::default());
        assert_abs_diff_eq!(t.lcdm_sigma, (73.04 - 67.74) / 1.04, epsilon = 1e-12);
        assert_eq!(format!("{:.2}", t.lcdm_sigma), "5.10");
        assert_eq!(format!("{:.2}", t.enhanced_sigma), "0.19");
    }

    #[test]
    fn planck_against_shoes() {
        let t = tension_sigma(PLANCK.h0, &SHOES);
        assert_abs_diff_eq!(t, 5.64 / 1.04, epsilon = 1e-12);
    }

    #[test]
    fn sigma8_change() {
        let pct = sigma8_change_percent(&ModelPair::default());
        assert_eq!(format!("{pct:.1}"), "-8.1");
    }
}
