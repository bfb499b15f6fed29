//! Chart descriptions for the four comparison figures.
//!
//! Everything here is plain data computed from a [`ComparisonOutput`]: series,
//! bounds, labels and colors. Drawing lives in `plot::render`, so the numbers
//! that end up on a figure can be tested without a font stack or a bitmap.

use plotters::style::RGBColor;

use crate::app::pipeline::{ComparisonOutput, ModelSeries};
use crate::domain::{Measurement, ModelKind, PLANCK, SHOES};

pub const EOS_FILE: &str = "dark_energy_eos.png";
pub const HUBBLE_FILE: &str = "hubble_parameter.png";
pub const TENSION_FILE: &str = "hubble_tension.png";
pub const GROWTH_FILE: &str = "growth_factor.png";

pub const REDSHIFT_DESC: &str = "Redshift (z)";
pub const TRANSITION_LABEL: &str = "Hidden Region Transition";

pub const LCDM_COLOR: RGBColor = RGBColor(0, 0, 255);
pub const ENHANCED_COLOR: RGBColor = RGBColor(255, 0, 0);
pub const TRANSITION_COLOR: RGBColor = RGBColor(0, 0, 0);
pub const PLANCK_COLOR: RGBColor = RGBColor(0, 0, 255);
pub const SHOES_COLOR: RGBColor = RGBColor(0, 128, 0);

/// Fractional padding added to each side of the data range.
pub const AXIS_MARGIN: f64 = 0.05;

/// Number of dashes drawn for the transition marker.
pub const TRANSITION_DASHES: usize = 24;

/// One labelled line on a redshift chart.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSpec {
    pub label: &'static str,
    pub color: RGBColor,
    pub points: Vec<(f64, f64)>,
}

/// Dashed vertical marker spanning the full y range.
#[derive(Debug, Clone, PartialEq)]
pub struct VerticalMarker {
    pub label: &'static str,
    pub x: f64,
    /// `(y_start, y_end)` of each dash.
    pub dashes: Vec<(f64, f64)>,
}

/// A redshift-axis comparison chart.
#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    pub file_name: &'static str,
    pub caption: &'static str,
    pub x_desc: &'static str,
    pub y_desc: &'static str,
    pub lines: Vec<LineSpec>,
    pub marker: Option<VerticalMarker>,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
}

/// A measurement drawn as a dot with a ±1σ bar.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorPoint {
    pub label: &'static str,
    pub color: RGBColor,
    pub x: f64,
    pub value: f64,
    pub sigma: f64,
}

/// A horizontal reference line across the whole chart.
#[derive(Debug, Clone, PartialEq)]
pub struct HorizontalLine {
    pub label: &'static str,
    pub color: RGBColor,
    pub y: f64,
}

/// The measurement-vs-model H0 chart.
#[derive(Debug, Clone, PartialEq)]
pub struct TensionChart {
    pub file_name: &'static str,
    pub caption: &'static str,
    pub x_desc: &'static str,
    pub y_desc: &'static str,
    pub points: Vec<ErrorPoint>,
    pub lines: Vec<HorizontalLine>,
    /// Tick labels placed at x = 0, 1, …
    pub categories: Vec<&'static str>,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
}

/// `w(z)` for both models with the transition marker.
pub fn eos_chart(run: &ComparisonOutput) -> LineChart {
    redshift_chart(
        run,
        EOS_FILE,
        "Dark Energy Equation of State",
        "Dark Energy Equation of State w(z)",
        |s| &s.w,
    )
}

/// `H(z)` for both models with the transition marker.
pub fn hubble_chart(run: &ComparisonOutput) -> LineChart {
    redshift_chart(
        run,
        HUBBLE_FILE,
        "Hubble Parameter Evolution",
        "Hubble Parameter H(z) [km/s/Mpc]",
        |s| &s.hubble,
    )
}

/// `D(z)` for both models with the transition marker.
pub fn growth_chart(run: &ComparisonOutput) -> LineChart {
    redshift_chart(
        run,
        GROWTH_FILE,
        "Structure Growth Comparison",
        "Growth Factor D(z)",
        |s| &s.growth,
    )
}

/// Planck and SH0ES measurements against each model's H0.
pub fn tension_chart(run: &ComparisonOutput) -> TensionChart {
    let measurements: [(Measurement, RGBColor); 2] = [(PLANCK, PLANCK_COLOR), (SHOES, SHOES_COLOR)];

    let points: Vec<ErrorPoint> = measurements
        .iter()
        .enumerate()
        .map(|(i, (m, color))| ErrorPoint {
            label: m.name,
            color: *color,
            x: i as f64,
            value: m.h0,
            sigma: m.sigma,
        })
        .collect();

    let lines = vec![
        HorizontalLine {
            label: ModelKind::Lcdm.display_name(),
            color: LCDM_COLOR,
            y: run.models.baseline.h0(),
        },
        HorizontalLine {
            label: ModelKind::Enhanced.display_name(),
            color: ENHANCED_COLOR,
            y: run.models.enhanced.cosmo.h0(),
        },
    ];

    let y_values = points
        .iter()
        .flat_map(|p| [p.value - p.sigma, p.value + p.sigma])
        .chain(lines.iter().map(|l| l.y));

    TensionChart {
        file_name: TENSION_FILE,
        caption: "Hubble Tension Resolution",
        x_desc: "Measurement",
        y_desc: "H₀ [km/s/Mpc]",
        categories: points.iter().map(|p| p.label).collect(),
        x_range: (-0.5, points.len() as f64 - 0.5),
        y_range: padded_range(y_values),
        points,
        lines,
    }
}

fn redshift_chart(
    run: &ComparisonOutput,
    file_name: &'static str,
    caption: &'static str,
    y_desc: &'static str,
    column: fn(&ModelSeries) -> &Vec<f64>,
) -> LineChart {
    let z = &run.grid.z;
    let lines: Vec<LineSpec> = [(&run.lcdm, LCDM_COLOR), (&run.enhanced, ENHANCED_COLOR)]
        .into_iter()
        .map(|(series, color)| LineSpec {
            label: series.kind.display_name(),
            color,
            points: z.iter().copied().zip(column(series).iter().copied()).collect(),
        })
        .collect();

    let x_range = padded_range(z.iter().copied());
    let y_range = padded_range(lines.iter().flat_map(|l| l.points.iter().map(|p| p.1)));

    let hr = &run.models.enhanced.hidden_region;
    let marker = hr.enabled.then(|| VerticalMarker {
        label: TRANSITION_LABEL,
        x: hr.z_transition,
        dashes: dash_segments(y_range.0, y_range.1, TRANSITION_DASHES),
    });

    LineChart {
        file_name,
        caption,
        x_desc: REDSHIFT_DESC,
        y_desc,
        lines,
        marker,
        x_range,
        y_range,
    }
}

/// Data range widened by [`AXIS_MARGIN`] on each side.
///
/// Non-finite values are ignored. A flat range is widened around its value,
/// and an empty one becomes `(0, 1)`.
pub fn padded_range(values: impl IntoIterator<Item = f64>) -> (f64, f64) {
    let (lo, hi) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));

    if !lo.is_finite() {
        return (0.0, 1.0);
    }
    let span = hi - lo;
    if span <= 0.0 {
        let pad = if lo == 0.0 { 0.5 } else { lo.abs() * AXIS_MARGIN };
        return (lo - pad, hi + pad);
    }
    (lo - span * AXIS_MARGIN, hi + span * AXIS_MARGIN)
}

/// Split `[lo, hi]` into `count` dashes separated by equal gaps.
pub fn dash_segments(lo: f64, hi: f64, count: usize) -> Vec<(f64, f64)> {
    if count == 0 || hi <= lo {
        return Vec::new();
    }
    // dash, gap, dash, gap, …, dash
    let slots = 2 * count - 1;
    let step = (hi - lo) / slots as f64;
    (0..count)
        .map(|i| {
            let start = lo + (2 * i) as f64 * step;
            (start, start + step)
        })
        .collect()
}

/// Tick label for a categorical axis: the category whose index rounds to `x`.
pub fn category_label(x: f64, categories: &[&str]) -> String {
    let nearest = x.round();
    if (x - nearest).abs() > 1e-6 || nearest < 0.0 {
        return String::new();
    }
    categories
        .get(nearest as usize)
        .map(|c| c.to_string())
        .unwrap_or_default()
}
