//! Formatted terminal output.
//!
//! We keep formatting code in one place so the numeric pipeline stays free of
//! presentation details and output changes stay localized.

use std::path::Path;

use crate::app::pipeline::ComparisonOutput;
use crate::domain::EnhancedParams;
use crate::models::{dw_da_enhanced, w_cpl, w_enhanced};
use crate::report::sigma8_change_percent;

const TITLE: &str = "Enhanced Inflationary Domain Theory (IDT) with Hidden Regions";

/// Format the comparison summary.
///
/// `plots_dir` is the directory the figures were written to; the closing
/// line is omitted when no plots were rendered.
pub fn format_summary(run: &ComparisonOutput, plots_dir: Option<&Path>) -> String {
    let base = &run.models.baseline;
    let enh = &run.models.enhanced.cosmo;
    let hr = &run.models.enhanced.hidden_region;

    let mut out = String::new();

    out.push('\n');
    out.push_str(TITLE);
    out.push('\n');
    out.push_str(&"=".repeat(TITLE.chars().count()));
    out.push('\n');

    out.push_str("\nModel Parameters:\n");
    out.push_str(&format!(
        "  ΛCDM: H₀ = {:.2} km/s/Mpc, Ωₘ = {:.4}, σ₈ = {:.4}\n",
        base.h0(),
        base.omega_m,
        base.sigma8
    ));
    out.push_str(&format!(
        "  Enhanced IDT: H₀ = {:.2} km/s/Mpc, Ωₘ = {:.4}, σ₈ = {:.4}\n",
        enh.h0(),
        enh.omega_m,
        enh.sigma8
    ));
    out.push_str(&format!("                w₀ = {:.2}, wₐ = {:.2}\n", enh.w0, enh.wa));
    out.push_str(&format!(
        "                z_transition = {:.2}, amplitude = {:.2}\n",
        hr.z_transition, hr.amplitude
    ));

    out.push_str("\nHubble Tension:\n");
    out.push_str(&format!(
        "  ΛCDM: {:.2}σ tension with SH0ES\n",
        run.tension.lcdm_sigma
    ));
    out.push_str(&format!(
        "  Enhanced IDT: {:.2}σ tension with SH0ES\n",
        run.tension.enhanced_sigma
    ));

    out.push_str("\nStructure Formation:\n");
    out.push_str(&format!("  ΛCDM: σ₈ = {:.4}\n", base.sigma8));
    out.push_str(&format!(
        "  Enhanced IDT: σ₈ = {:.4} ({:.1}% change)\n",
        enh.sigma8,
        sigma8_change_percent(&run.models)
    ));

    if let Some(dir) = plots_dir {
        out.push_str(&format!("\nPlots saved to {}/\n", dir.display()));
    }

    out
}

/// Format the scale-factor table of the Enhanced equation of state.
///
/// Rows run over `a = 0.1, 0.2, …, 1.0`.
pub fn format_eos_table(params: &EnhancedParams) -> String {
    let hr = &params.hidden_region;
    let mut out = String::new();

    out.push_str("Hidden Regions Parameters:\n");
    out.push_str(&format!(
        "  Enabled: {}\n",
        if hr.enabled { "Yes" } else { "No" }
    ));
    if hr.enabled {
        out.push_str(&format!("  Transition redshift: z = {:.4}\n", hr.z_transition));
        out.push_str(&format!("  Amplitude: {:.4}\n", hr.amplitude));
        out.push_str(&format!("  Width: {:.4}\n", hr.width));
    }

    out.push_str("\nDark energy equation of state with hidden regions:\n");
    out.push_str(&format!(
        "{:>8} {:>10} {:>10} {:>12}\n",
        "a", "w(a)", "w_eff(a)", "dw_eff/da"
    ));
    out.push_str(&format!("{:-<8} {:-<10} {:-<10} {:-<12}\n", "", "", "", ""));

    for i in 1..=10 {
        let a = i as f64 / 10.0;
        let z = 1.0 / a - 1.0;
        out.push_str(&format!(
            "{:>8.2} {:>10.4} {:>10.4} {:>12.4}\n",
            a,
            w_cpl(z, &params.cosmo),
            w_enhanced(z, params),
            dw_da_enhanced(a, params),
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use crate::app::pipeline::run_comparison;
    use crate::domain::{HiddenRegion, IntegrationRule, ModelPair};

    fn summary(plots: Option<&Path>) -> String {
        let run = run_comparison(&ModelPair::default(), IntegrationRule::Reference).unwrap();
        format_summary(&run, plots)
    }

    #[test]
    fn summary_matches_reference_layout() {
        let dir = PathBuf::from("IDT-CLASS/output/plots");
        let expected = "\n\
Enhanced Inflationary Domain Theory (IDT) with Hidden Regions\n\
=============================================================\n\
\n\
Model Parameters:\n\
\x20 ΛCDM: H₀ = 67.74 km/s/Mpc, Ωₘ = 0.3075, σ₈ = 0.8168\n\
\x20 Enhanced IDT: H₀ = 73.24 km/s/Mpc, Ωₘ = 0.3137, σ₈ = 0.7509\n\
\x20               w₀ = -0.92, wₐ = -0.14\n\
\x20               z_transition = 0.35, amplitude = 0.05\n\
\n\
Hubble Tension:\n\
\x20 ΛCDM: 5.10σ tension with SH0ES\n\
\x20 Enhanced IDT: 0.19σ tension with SH0ES\n\
\n\
Structure Formation:\n\
\x20 ΛCDM: σ₈ = 0.8168\n\
\x20 Enhanced IDT: σ₈ = 0.7509 (-8.1% change)\n\
\n\
Plots saved to IDT-CLASS/output/plots/\n";
        assert_eq!(summary(Some(&dir)), expected);
    }

    #[test]
    fn summary_without_plots_omits_footer() {
        let text = summary(None);
        assert!(!text.contains("Plots saved"));
        assert!(text.ends_with("(-8.1% change)\n"));
    }

    #[test]
    fn eos_table_has_ten_rows() {
        let text = format_eos_table(&EnhancedParams::default());
        let rows: Vec<&str> = text
            .lines()
            .skip_while(|l| !l.starts_with("---"))
            .skip(1)
            .collect();
        assert_eq!(rows.len(), 10);
        assert!(rows[0].trim_start().starts_with("0.10"));
        assert!(rows[9].trim_start().starts_with("1.00"));
        // a = 1: CPL w is w0 and the hidden region lowers it by ~amplitude.
        assert!(rows[9].contains("-0.9200"));
        assert!(rows[9].contains("-0.9700"));
        assert!(text.contains("Enabled: Yes"));
    }

    #[test]
    fn eos_table_for_disabled_region() {
        let params = EnhancedParams {
            hidden_region: HiddenRegion::DISABLED,
            ..EnhancedParams::default()
        };
        let text = format_eos_table(&params);
        assert!(text.contains("Enabled: No"));
        assert!(!text.contains("Transition redshift"));
    }
}
