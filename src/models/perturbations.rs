//! Perturbation-side quantities affected by the hidden region.
//!
//! These follow the same step `T(z)` as the equation of state:
//!
//! - growth rate `f = Ωm(a)^0.55 · (1 − 0.3·amplitude·T)`
//! - effective sound speed `cs2 · (1 − 0.5·amplitude·T)`, floored at [`CS2_FLOOR`]
//! - fluid perturbations scaled by `1 + amplitude·T`

use crate::domain::{CosmoParams, HiddenRegion, Model};
use crate::models::eos::transition;
use crate::models::growth::GROWTH_INDEX;

/// Lower bound on the effective dark-energy sound speed.
pub const CS2_FLOOR: f64 = 1.0e-6;

/// Rest-frame sound speed of a standard dark-energy fluid.
pub const CS2_FLUID: f64 = 1.0;

/// Matter fraction at scale factor `a` with dark energy diluting as `a^(−3·w0)`.
pub fn omega_m_at(a: f64, cosmo: &CosmoParams) -> f64 {
    let om = cosmo.omega_m;
    om / (om + (1.0 - om) * a.powf(-3.0 * cosmo.w0))
}

/// Logarithmic growth rate `f = d ln D / d ln a`.
pub fn growth_rate(a: f64, model: &Model) -> f64 {
    let base = omega_m_at(a, model.cosmo()).powf(GROWTH_INDEX);
    match model {
        Model::Lcdm(_) => base,
        Model::Enhanced(params) => {
            let hr = &params.hidden_region;
            let z = 1.0 / a - 1.0;
            base * (1.0 - 0.3 * hr.amplitude * transition(z, hr))
        }
    }
}

/// Effective sound speed squared near the hidden-region transition.
pub fn effective_cs2(a: f64, cs2: f64, hr: &HiddenRegion) -> f64 {
    if !hr.enabled {
        return cs2;
    }
    let z = 1.0 / a - 1.0;
    let modified = cs2 * (1.0 - 0.5 * hr.amplitude * transition(z, hr));
    modified.max(CS2_FLOOR)
}

/// Multiplier applied to dark-energy perturbations at redshift `z`.
pub fn modification_factor(z: f64, hr: &HiddenRegion) -> f64 {
    1.0 + hr.amplitude * transition(z, hr)
}

/// Dark-energy fluid perturbations in one Fourier mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DePerturbation {
    pub delta_rho: f64,
    pub rho_plus_p_theta: f64,
    pub delta_p: f64,
    /// Only tracked when matter density sources are requested.
    pub rho_plus_p_shear: Option<f64>,
}

impl DePerturbation {
    /// Perfect-fluid perturbations from density contrast `delta` and velocity
    /// divergence `theta`. A perfect fluid carries no shear.
    pub fn fluid(rho: f64, w: f64, cs2: f64, delta: f64, theta: f64, with_shear: bool) -> Self {
        let p = w * rho;
        Self {
            delta_rho: rho * delta,
            rho_plus_p_theta: (rho + p) * theta,
            delta_p: cs2 * rho * delta,
            rho_plus_p_shear: with_shear.then_some(0.0),
        }
    }

    /// Scale every component by the hidden-region factor at `z`.
    pub fn with_hidden_region(self, z: f64, hr: &HiddenRegion) -> Self {
        if !hr.enabled {
            return self;
        }
        let k = modification_factor(z, hr);
        Self {
            delta_rho: self.delta_rho * k,
            rho_plus_p_theta: self.rho_plus_p_theta * k,
            delta_p: self.delta_p * k,
            rho_plus_p_shear: self.rho_plus_p_shear.map(|s| s * k),
        }
    }
}
