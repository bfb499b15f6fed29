//! PNG rendering of the chart descriptions.
//!
//! Figures are 10x6 inches at 300 DPI. Each chart is drawn onto its own
//! bitmap; any plotters failure is surfaced as an output error.

use std::error::Error;
use std::path::{Path, PathBuf};

use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;

use crate::app::pipeline::ComparisonOutput;
use crate::error::{AppError, EXIT_OUTPUT};
use crate::plot::charts::{
    LineChart, TRANSITION_COLOR, TensionChart, category_label, eos_chart, growth_chart,
    hubble_chart, tension_chart,
};

type Plane = Cartesian2d<RangedCoordf64, RangedCoordf64>;

pub const FIGURE_SIZE: (u32, u32) = (3000, 1800);

const CAPTION_FONT: u32 = 60;
const DESC_FONT: u32 = 48;
const LABEL_FONT: u32 = 40;
const LINE_WIDTH: u32 = 5;
/// Width plotters reserves for a legend glyph before the label text.
const LEGEND_SLOT: i32 = 30;
const LEGEND_SWATCH: i32 = 20;
const LEGEND_DOT: i32 = 8;

/// Render the four comparison figures into `dir`, creating it if needed.
///
/// Returns the written paths in rendering order.
pub fn render_all(run: &ComparisonOutput, dir: &Path) -> Result<Vec<PathBuf>, AppError> {
    std::fs::create_dir_all(dir).map_err(|e| {
        AppError::new(EXIT_OUTPUT, format!("Failed to create plot directory '{}': {e}", dir.display()))
    })?;

    let mut written = Vec::with_capacity(4);
    for chart in [eos_chart(run), hubble_chart(run)] {
        written.push(write_line_chart(dir, &chart)?);
    }
    let tension = tension_chart(run);
    let path = dir.join(tension.file_name);
    draw_tension_chart(&path, &tension).map_err(|e| render_error(&path, e.as_ref()))?;
    tracing::info!(path = %path.display(), "wrote plot");
    written.push(path);
    written.push(write_line_chart(dir, &growth_chart(run))?);

    Ok(written)
}

fn write_line_chart(dir: &Path, chart: &LineChart) -> Result<PathBuf, AppError> {
    let path = dir.join(chart.file_name);
    draw_line_chart(&path, chart).map_err(|e| render_error(&path, e.as_ref()))?;
    tracing::info!(path = %path.display(), "wrote plot");
    Ok(path)
}

fn render_error(path: &Path, err: &dyn Error) -> AppError {
    AppError::new(EXIT_OUTPUT, format!("Failed to render plot '{}': {err}", path.display()))
}

fn draw_line_chart(path: &Path, desc: &LineChart) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(path, FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let (x0, x1) = desc.x_range;
    let (y0, y1) = desc.y_range;
    let mut chart = ChartBuilder::on(&root)
        .caption(desc.caption, ("sans-serif", CAPTION_FONT))
        .margin(40)
        .x_label_area_size(140)
        .y_label_area_size(200)
        .build_cartesian_2d(x0..x1, y0..y1)?;

    chart
        .configure_mesh()
        .x_desc(desc.x_desc)
        .y_desc(desc.y_desc)
        .label_style(("sans-serif", LABEL_FONT))
        .axis_desc_style(("sans-serif", DESC_FONT))
        .light_line_style(&BLACK.mix(0.04))
        .bold_line_style(&BLACK.mix(0.12))
        .draw()?;

    for line in &desc.lines {
        let color = line.color;
        chart
            .draw_series(LineSeries::new(
                line.points.iter().copied(),
                color.stroke_width(LINE_WIDTH),
            ))?
            .label(line.label)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + LEGEND_SWATCH, y)], color.stroke_width(LINE_WIDTH))
            });
    }

    if let Some(marker) = &desc.marker {
        let style = TRANSITION_COLOR.mix(0.5).stroke_width(LINE_WIDTH);
        let x = marker.x;
        chart
            .draw_series(
                marker
                    .dashes
                    .iter()
                    .map(move |&(a, b)| PathElement::new(vec![(x, a), (x, b)], style)),
            )?
            .label(marker.label)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + LEGEND_SWATCH / 2, y)], style)
            });
    }

    draw_legend(&mut chart)?;
    root.present()?;
    Ok(())
}

fn draw_tension_chart(path: &Path, desc: &TensionChart) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(path, FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let (x0, x1) = desc.x_range;
    let (y0, y1) = desc.y_range;
    let mut chart = ChartBuilder::on(&root)
        .caption(desc.caption, ("sans-serif", CAPTION_FONT))
        .margin(40)
        .x_label_area_size(140)
        .y_label_area_size(200)
        .build_cartesian_2d(x0..x1, y0..y1)?;

    let categories = &desc.categories;
    chart
        .configure_mesh()
        .x_desc(desc.x_desc)
        .y_desc(desc.y_desc)
        .x_labels(2 * categories.len() + 1)
        .x_label_formatter(&|v| category_label(*v, categories))
        .label_style(("sans-serif", LABEL_FONT))
        .axis_desc_style(("sans-serif", DESC_FONT))
        .light_line_style(&BLACK.mix(0.04))
        .bold_line_style(&BLACK.mix(0.12))
        .draw()?;

    for line in &desc.lines {
        let style = line.color.mix(0.7).stroke_width(LINE_WIDTH);
        chart
            .draw_series(LineSeries::new([(x0, line.y), (x1, line.y)], style))?
            .label(line.label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + LEGEND_SWATCH, y)], style));
    }

    // Cap half-width in data units.
    let cap = 0.02 * (x1 - x0);
    for point in &desc.points {
        let style = point.color.stroke_width(LINE_WIDTH);
        let (x, lo, hi) = (point.x, point.value - point.sigma, point.value + point.sigma);
        chart.draw_series([
            PathElement::new(vec![(x, lo), (x, hi)], style),
            PathElement::new(vec![(x - cap, lo), (x + cap, lo)], style),
            PathElement::new(vec![(x - cap, hi), (x + cap, hi)], style),
        ])?;

        let fill = point.color.filled();
        chart
            .draw_series(std::iter::once(Circle::new((x, point.value), 16, fill)))?
            .label(point.label)
            .legend(move |(x, y)| Circle::new((x + LEGEND_SWATCH / 2, y), LEGEND_DOT, fill));
    }

    draw_legend(&mut chart)?;
    root.present()?;
    Ok(())
}

fn draw_legend<'a>(chart: &mut ChartContext<'a, BitMapBackend<'a>, Plane>) -> Result<(), Box<dyn Error>> {
    chart
        .configure_series_labels()
        .label_font(("sans-serif", LABEL_FONT))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::app::pipeline::run_comparison;
    use crate::domain::{IntegrationRule, ModelPair};

    #[test]
    fn legend_glyphs_fit_their_slot() {
        assert!(LEGEND_SWATCH <= LEGEND_SLOT);
        assert!(LEGEND_SWATCH / 2 + LEGEND_DOT <= LEGEND_SLOT);
        assert!(LEGEND_SWATCH / 2 - LEGEND_DOT >= 0);
    }

    #[test]
    fn render_all_writes_four_figures() {
        let run = run_comparison(&ModelPair::default(), IntegrationRule::Reference).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("plots");

        let written = render_all(&run, &out).unwrap();

        let names: Vec<_> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            vec![
                "dark_energy_eos.png",
                "hubble_parameter.png",
                "hubble_tension.png",
                "growth_factor.png"
            ]
        );
        for path in &written {
            assert!(std::fs::metadata(path).unwrap().len() > 0);
        }
    }

    #[test]
    fn unusable_plot_directory_is_an_output_error() {
        let run = run_comparison(&ModelPair::default(), IntegrationRule::Reference).unwrap();
        let file = tempfile::NamedTempFile::new().unwrap();
        // A regular file cannot be used as the plot directory.
        let err = render_all(&run, &file.path().join("plots")).unwrap_err();
        assert_eq!(err.exit_code(), EXIT_OUTPUT);
    }
}
