//! Comparison chart rendering and report export.
//!
//! Renders the two estimate tables side by side as bar charts with a
//! reference line at each true value, and exports full reports as
//! pretty-printed JSON.

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use serde::Serialize;

use crate::compare::{ComparisonReport, GeneratorResults};
use crate::error::{McError, McResult};
use crate::estimators::Estimate;

/// Chart canvas size in pixels.
const CHART_SIZE: (u32, u32) = (1200, 600);

/// Bar fill for the π panel.
const SKY_BLUE: RGBColor = RGBColor(135, 206, 235);
/// Bar fill for the integral panel.
const LIGHT_BLUE: RGBColor = RGBColor(173, 216, 230);

/// Reference level for the π panel and the printed π table.
/// Intentionally the five-decimal display value rather than
/// [`std::f64::consts::PI`], so the line sits exactly at the labeled
/// height.
pub const PI_REFERENCE: f64 = 3.14159;
/// Reference level for the integral panel and the printed table.
pub const INTEGRAL_REFERENCE: f64 = 2.0;

fn chart_err<E: std::fmt::Display>(e: E) -> McError {
    McError::render(e.to_string())
}

/// Render both estimate tables side by side into one raster image.
///
/// The π estimates land on the left panel, the integral estimates on
/// the right, one bar per strategy in registration order, with a red
/// reference line at the true value. Parent directories of `path` are
/// created as needed.
///
/// # Errors
///
/// Returns an error if a parent directory cannot be created, the
/// backend cannot write the image, or a drawing primitive fails.
pub fn render_comparison(report: &ComparisonReport, path: &Path) -> McResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let panels = root.split_evenly((1, 2));

    draw_panel(
        &panels[0],
        &report.pi,
        "Pi Estimates from Different Generators",
        "Estimated Pi Value",
        PI_REFERENCE,
        "True Pi Value",
        SKY_BLUE,
    )?;
    draw_panel(
        &panels[1],
        &report.integral,
        "Integral Estimates from Different Generators",
        "Estimated Integral Value",
        INTEGRAL_REFERENCE,
        "True Integral Value",
        LIGHT_BLUE,
    )?;

    root.present().map_err(chart_err)?;
    Ok(())
}

fn draw_panel(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    results: &GeneratorResults,
    title: &str,
    y_label: &str,
    reference: f64,
    reference_label: &str,
    bar_color: RGBColor,
) -> McResult<()> {
    let names = results.names();
    let values = results.values();
    let n = names.len();

    // Headroom above the tallest bar; the reference line stays visible
    // even when every estimate falls short of it.
    let y_max = values.iter().copied().fold(reference, f64::max) * 1.15;

    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(-0.5..(n as f64 - 0.5), 0.0..y_max)
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Random Generators")
        .y_desc(y_label)
        .x_labels(n)
        .x_label_formatter(&|x: &f64| {
            let idx = x.round();
            if (x - idx).abs() < 0.01 && idx >= 0.0 && (idx as usize) < n {
                names[idx as usize].to_string()
            } else {
                String::new()
            }
        })
        .draw()
        .map_err(chart_err)?;

    chart
        .draw_series(values.iter().enumerate().map(|(i, value)| {
            Rectangle::new(
                [(i as f64 - 0.4, 0.0), (i as f64 + 0.4, *value)],
                bar_color.filled(),
            )
        }))
        .map_err(chart_err)?;

    chart
        .draw_series(std::iter::once(PathElement::new(
            vec![(-0.5, reference), (n as f64 - 0.5, reference)],
            RED.stroke_width(2),
        )))
        .map_err(chart_err)?
        .label(reference_label)
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.stroke_width(2)));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(chart_err)?;

    Ok(())
}

/// One exported estimate row.
#[derive(Debug, Serialize)]
struct RecordOut<'a> {
    generator: &'a str,
    #[serde(flatten)]
    estimate: Estimate,
}

/// Serialized shape of a full report.
#[derive(Debug, Serialize)]
struct ReportOut<'a> {
    samples: usize,
    seed: u64,
    pi: Vec<RecordOut<'a>>,
    integral: Vec<RecordOut<'a>>,
}

fn records(results: &GeneratorResults) -> Vec<RecordOut<'_>> {
    results
        .iter()
        .map(|(generator, estimate)| RecordOut {
            generator: generator.name(),
            estimate: *estimate,
        })
        .collect()
}

/// Export the report as pretty-printed JSON.
///
/// Strategy order in the exported arrays matches registration order.
/// Parent directories of `path` are created as needed.
///
/// # Errors
///
/// Returns an error if serialization or the filesystem write fails.
pub fn export_json(report: &ComparisonReport, path: &Path) -> McResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let out = ReportOut {
        samples: report.samples,
        seed: report.seed,
        pi: records(&report.pi),
        integral: records(&report.integral),
    };

    let json = serde_json::to_string_pretty(&out).map_err(|e| McError::serialization(e.to_string()))?;
    std::fs::write(path, json)?;

    Ok(())
}
