//! Growth factor `D(z)` from the `Ωm^γ` growth-index approximation.
//!
//! ΛCDM: `D = a·Ωm^0.55`.
//!
//! Enhanced IDT scales growth by `r = σ8/σ8_ref` (σ8 of the ΛCDM reference)
//! and perturbs the index: `γ = 0.55·(1 + 0.1·(1 − r))`, `D = a·Ωm^γ·r`.
//! This is a phenomenological scaling, not a solution of the growth equation.

use crate::domain::{CosmoParams, EnhancedParams, Model};
use crate::models::eos::scale_factor;

/// Growth index of ΛCDM.
pub const GROWTH_INDEX: f64 = 0.55;

/// ΛCDM growth factor.
pub fn growth_lcdm(z: f64, cosmo: &CosmoParams) -> f64 {
    scale_factor(z) * cosmo.omega_m.powf(GROWTH_INDEX)
}

/// Enhanced IDT growth factor relative to a reference σ8.
pub fn growth_enhanced(z: f64, params: &EnhancedParams, reference_sigma8: f64) -> f64 {
    let ratio = params.cosmo.sigma8 / reference_sigma8;
    let gamma = GROWTH_INDEX * (1.0 + 0.1 * (1.0 - ratio));
    scale_factor(z) * params.cosmo.omega_m.powf(gamma) * ratio
}

/// Growth factor for a tagged model.
///
/// `reference_sigma8` is only read by the Enhanced branch.
pub fn growth_factor(z: f64, model: &Model, reference_sigma8: f64) -> f64 {
    match model {
        Model::Lcdm(cosmo) => growth_lcdm(z, cosmo),
        Model::Enhanced(params) => growth_enhanced(z, params, reference_sigma8),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    use crate::domain::ModelPair;

    #[test]
    fn unit_ratio_matches_lcdm() {
        let pair = ModelPair::default();
        let same = EnhancedParams {
            cosmo: pair.baseline,
            ..pair.enhanced
        };
        for &z in &[0.0, 0.7, 3.0] {
            assert_eq!(
                growth_factor(z, &Model::Enhanced(same), pair.baseline.sigma8),
                growth_factor(z, &pair.lcdm(), pair.baseline.sigma8)
            );
        }
    }

    #[test]
    fn lcdm_today() {
        let d = growth_lcdm(0.0, &CosmoParams::LCDM);
        assert_relative_eq!(d, 0.3075_f64.powf(0.55), max_relative = 1e-15);
    }

    #[test]
    fn lower_sigma8_suppresses_growth() {
        let pair = ModelPair::default();
        let ratio = pair.enhanced.cosmo.sigma8 / pair.baseline.sigma8;
        let gamma = 0.55 * (1.0 + 0.1 * (1.0 - ratio));
        let expected = 0.5 * pair.enhanced.cosmo.omega_m.powf(gamma) * ratio;
        let d = growth_enhanced(1.0, &pair.enhanced, pair.baseline.sigma8);
        assert_relative_eq!(d, expected, max_relative = 1e-14);
        assert!(d < growth_lcdm(1.0, &pair.baseline));
    }

    #[test]
    fn growth_scales_with_a() {
        let cosmo = CosmoParams::LCDM;
        assert_relative_eq!(
            growth_lcdm(1.0, &cosmo),
            0.5 * growth_lcdm(0.0, &cosmo),
            max_relative = 1e-15
        );
    }
}
