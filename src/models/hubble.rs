//! Hubble parameter `H(z)` in km/s/Mpc.
//!
//! ΛCDM uses the flat Friedmann equation with constant dark-energy density.
//! The Enhanced model dilutes today's dark-energy density by its `w(z)` history:
//!
//! ```text
//! Ωde(z) = (1 − Ωm) · exp(3 · ∫₀^z (1 + w(z'))/(1 + z') dz')
//! ```
//!
//! The integral always uses [`DE_INTEGRATION_SAMPLES`] samples on `[0, z]`, so
//! its resolution coarsens as `z` grows. At `z = 0` the spacing is zero, the
//! integral vanishes and both branches return `H0`.

use crate::domain::{CosmoParams, EnhancedParams, IntegrationRule, Model};
use crate::math::{sample_sum, trapezoid};
use crate::models::eos::w_enhanced;

/// Number of samples on `[0, z]` for the dark-energy dilution integral.
pub const DE_INTEGRATION_SAMPLES: usize = 1000;

/// ΛCDM `H(z) = H0·sqrt(Ωm(1+z)³ + (1 − Ωm))`.
pub fn hubble_lcdm(z: f64, cosmo: &CosmoParams) -> f64 {
    let om = cosmo.omega_m;
    cosmo.h0() * (om * (1.0 + z).powi(3) + (1.0 - om)).sqrt()
}

/// `∫₀^z (1 + w(z'))/(1 + z') dz'` for the Enhanced model.
pub fn de_dilution_integral(z: f64, params: &EnhancedParams, rule: IntegrationRule) -> f64 {
    let integrand = |zp: f64| (1.0 + w_enhanced(zp, params)) / (1.0 + zp);
    match rule {
        IntegrationRule::Reference => sample_sum(integrand, 0.0, z, DE_INTEGRATION_SAMPLES),
        IntegrationRule::Trapezoid => trapezoid(integrand, 0.0, z, DE_INTEGRATION_SAMPLES),
    }
}

/// Dark-energy density parameter `Ωde(z)` (relative to today's critical density).
pub fn dark_energy_density(z: f64, params: &EnhancedParams, rule: IntegrationRule) -> f64 {
    (1.0 - params.cosmo.omega_m) * (3.0 * de_dilution_integral(z, params, rule)).exp()
}

/// Enhanced `H(z) = H0·sqrt(Ωm(1+z)³ + Ωde(z))`.
pub fn hubble_enhanced(z: f64, params: &EnhancedParams, rule: IntegrationRule) -> f64 {
    let cosmo = &params.cosmo;
    let omega_de = dark_energy_density(z, params, rule);
    cosmo.h0() * (cosmo.omega_m * (1.0 + z).powi(3) + omega_de).sqrt()
}

/// `H(z)` for a tagged model.
pub fn hubble_parameter(z: f64, model: &Model, rule: IntegrationRule) -> f64 {
    match model {
        Model::Lcdm(cosmo) => hubble_lcdm(z, cosmo),
        Model::Enhanced(params) => hubble_enhanced(z, params, rule),
    }
}
