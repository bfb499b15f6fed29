//! Dark-energy equation of state.
//!
//! - ΛCDM: `w = −1` at every redshift.
//! - Enhanced IDT: CPL `w0 + wa·(1 − a)` lowered by `amplitude · T(z)`, where
//!   `T(z) = 0.5·(1 − tanh((z − z_t)/width))` is the hidden-region step.
//!
//! `width = 0` is not guarded: the step divides by it.

use crate::domain::{CosmoParams, EnhancedParams, HiddenRegion, Model};

/// Equation of state of a cosmological constant.
pub const W_LAMBDA: f64 = -1.0;

/// Scale factor `a = 1/(1+z)`.
pub fn scale_factor(z: f64) -> f64 {
    1.0 / (1.0 + z)
}

/// ΛCDM equation of state broadcast over `z`.
pub fn w_lcdm(z: &[f64]) -> Vec<f64> {
    vec![W_LAMBDA; z.len()]
}

/// CPL equation of state `w0 + wa·(1 − a)`.
pub fn w_cpl(z: f64, cosmo: &CosmoParams) -> f64 {
    let a = scale_factor(z);
    cosmo.w0 + cosmo.wa * (1.0 - a)
}

/// Hidden-region step `T(z)`: 1 at low z, 0 at high z, `0` when disabled.
pub fn transition(z: f64, hr: &HiddenRegion) -> f64 {
    if !hr.enabled {
        return 0.0;
    }
    0.5 * (1.0 - ((z - hr.z_transition) / hr.width).tanh())
}

/// `dT/dz = −0.5·sech²(x)/width`, `x = (z − z_t)/width`.
pub fn transition_derivative(z: f64, hr: &HiddenRegion) -> f64 {
    if !hr.enabled {
        return 0.0;
    }
    let t = ((z - hr.z_transition) / hr.width).tanh();
    -0.5 * (1.0 - t * t) / hr.width
}

/// Enhanced IDT equation of state at a single redshift.
pub fn w_enhanced(z: f64, params: &EnhancedParams) -> f64 {
    let hr = &params.hidden_region;
    w_cpl(z, &params.cosmo) - hr.amplitude * transition(z, hr)
}

/// Enhanced IDT equation of state over a slice of redshifts.
pub fn w_enhanced_series(z: &[f64], params: &EnhancedParams) -> Vec<f64> {
    z.iter().map(|&zi| w_enhanced(zi, params)).collect()
}

/// `dw/da` of the Enhanced model at scale factor `a`.
///
/// The CPL part contributes `−wa`; the hidden region contributes
/// `−amplitude · dT/dz · dz/da` with `dz/da = −1/a²`.
pub fn dw_da_enhanced(a: f64, params: &EnhancedParams) -> f64 {
    let z = 1.0 / a - 1.0;
    let hr = &params.hidden_region;
    let dz_da = -1.0 / (a * a);
    -params.cosmo.wa - hr.amplitude * transition_derivative(z, hr) * dz_da
}

/// Closed form of `∫_a^1 w_cpl(a')/a' da' = w0·ln(1/a) + wa·(a − 1 − ln a)`.
pub fn cpl_log_integral(a: f64, cosmo: &CosmoParams) -> f64 {
    cosmo.w0 * (1.0 / a).ln() + cosmo.wa * (a - 1.0 - a.ln())
}

/// `∫_a^1 w_eff(a')/a' da'` with the hidden-region step frozen at its value at `a`.
///
/// Exact for the CPL part; the hidden-region shift `−amplitude·T` is treated
/// as constant over `[a, 1]`, so this is only accurate where `T` is flat.
pub fn frozen_transition_log_integral(a: f64, params: &EnhancedParams) -> f64 {
    let hr = &params.hidden_region;
    let z = 1.0 / a - 1.0;
    cpl_log_integral(a, &params.cosmo) + hr.amplitude * transition(z, hr) * a.ln()
}

/// Equation of state for a tagged model.
pub fn equation_of_state(z: f64, model: &Model) -> f64 {
    match model {
        Model::Lcdm(_) => W_LAMBDA,
        Model::Enhanced(params) => w_enhanced(z, params),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    use crate::domain::RedshiftGrid;
    use crate::math::trapezoid;

    fn reference() -> EnhancedParams {
        EnhancedParams::default()
    }

    #[test]
    fn lcdm_is_minus_one_on_grid() {
        let grid = RedshiftGrid::standard();
        let w = w_lcdm(&grid.z);
        assert_eq!(w.len(), grid.len());
        assert!(w.iter().all(|&v| v == -1.0));
    }

    #[test]
    fn transition_is_half_at_transition_redshift() {
        let p = reference();
        assert_abs_diff_eq!(transition(0.35, &p.hidden_region), 0.5, epsilon = 1e-15);
        assert!(transition(0.0, &p.hidden_region) > 0.99);
        assert!(transition(3.0, &p.hidden_region) < 1e-10);
    }

    #[test]
    fn enhanced_today() {
        // a = 1: CPL term is w0; T(0) = 0.5·(1 + tanh(3.5)).
        let p = reference();
        let expected = -0.92 - 0.05 * 0.5 * (1.0 + 3.5_f64.tanh());
        assert_abs_diff_eq!(w_enhanced(0.0, &p), expected, epsilon = 1e-15);
    }

    #[test]
    fn enhanced_tends_to_w0_plus_wa() {
        let p = reference();
        let w = w_enhanced(1.0e9, &p);
        assert_abs_diff_eq!(w, p.cosmo.w0 + p.cosmo.wa, epsilon = 1e-8);
    }

    #[test]
    fn hidden_region_lowers_w_below_transition_only() {
        let p = reference();
        for &z in &[0.0, 0.05, 0.1] {
            assert!(w_enhanced(z, &p) < w_cpl(z, &p.cosmo) - 0.04);
        }
        for &z in &[2.0, 2.5, 3.0] {
            assert_abs_diff_eq!(w_enhanced(z, &p), w_cpl(z, &p.cosmo), epsilon = 1e-9);
        }
    }

    #[test]
    fn disabled_region_reduces_to_cpl() {
        let p = EnhancedParams {
            hidden_region: HiddenRegion::DISABLED,
            ..reference()
        };
        for &z in &[0.0, 0.35, 1.7] {
            assert_eq!(w_enhanced(z, &p), w_cpl(z, &p.cosmo));
            assert_eq!(transition_derivative(z, &p.hidden_region), 0.0);
        }
    }

    #[test]
    fn transition_derivative_matches_finite_difference() {
        let hr = reference().hidden_region;
        let h = 1e-6;
        for &z in &[0.1, 0.3, 0.35, 0.5] {
            let fd = (transition(z + h, &hr) - transition(z - h, &hr)) / (2.0 * h);
            assert_abs_diff_eq!(transition_derivative(z, &hr), fd, epsilon = 1e-6);
        }
    }

    #[test]
    fn dw_da_matches_finite_difference() {
        let p = reference();
        let w_of_a = |a: f64| w_enhanced(1.0 / a - 1.0, &p);
        let h = 1e-6;
        for &a in &[0.5, 0.74, 0.9] {
            let fd = (w_of_a(a + h) - w_of_a(a - h)) / (2.0 * h);
            assert_abs_diff_eq!(dw_da_enhanced(a, &p), fd, epsilon = 1e-5);
        }
    }

    #[test]
    fn cpl_log_integral_vanishes_today() {
        assert_eq!(cpl_log_integral(1.0, &CosmoParams::ENHANCED), 0.0);
    }

    #[test]
    fn cpl_log_integral_matches_quadrature() {
        let cosmo = CosmoParams::ENHANCED;
        let f = |ap: f64| w_cpl(1.0 / ap - 1.0, &cosmo) / ap;
        for &a in &[0.25, 0.5, 0.8] {
            let numeric = trapezoid(f, a, 1.0, 2000);
            assert_abs_diff_eq!(cpl_log_integral(a, &cosmo), numeric, epsilon = 1e-6);
        }
        // a = 0.5: w0·ln 2 + wa·(ln 2 − 0.5).
        let ln2 = 2.0_f64.ln();
        assert_abs_diff_eq!(
            cpl_log_integral(0.5, &cosmo),
            -0.92 * ln2 - 0.14 * (ln2 - 0.5),
            epsilon = 1e-15
        );
    }

    #[test]
    fn frozen_transition_integral_where_step_is_flat() {
        let p = reference();
        // [a, 1] lies well below the transition, where T ≈ 1.
        let a = 0.95;
        let numeric = trapezoid(|ap: f64| w_enhanced(1.0 / ap - 1.0, &p) / ap, a, 1.0, 1000);
        assert_abs_diff_eq!(frozen_transition_log_integral(a, &p), numeric, epsilon = 1e-5);
    }

    #[test]
    fn frozen_transition_integral_without_hidden_region_is_cpl() {
        let p = EnhancedParams {
            hidden_region: HiddenRegion::DISABLED,
            ..reference()
        };
        for &a in &[0.3, 0.6, 1.0] {
            assert_eq!(frozen_transition_log_integral(a, &p), cpl_log_integral(a, &p.cosmo));
        }
    }

    #[test]
    fn tagged_dispatch() {
        let p = reference();
        assert_eq!(equation_of_state(1.2, &Model::Lcdm(CosmoParams::LCDM)), -1.0);
        assert_eq!(equation_of_state(1.2, &Model::Enhanced(p)), w_enhanced(1.2, &p));
    }

    proptest! {
        #[test]
        fn series_is_deterministic(z in proptest::collection::vec(0.0f64..3.0, 1..50)) {
            let p = reference();
            let a = w_enhanced_series(&z, &p);
            let b = w_enhanced_series(&z, &p);
            prop_assert_eq!(a.len(), z.len());
            for (x, y) in a.iter().zip(b.iter()) {
                prop_assert_eq!(x.to_bits(), y.to_bits());
            }
        }

        #[test]
        fn enhanced_stays_below_cpl(z in 0.0f64..3.0) {
            let p = reference();
            prop_assert!(w_enhanced(z, &p) <= w_cpl(z, &p.cosmo));
        }
    }
}
