//! Reporting sink: plain-text results report and an SVG line chart.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use plotters::prelude::*;

use crate::bench::BenchmarkTable;

/// Log-scale axes cannot take zero, and sub-nanosecond averages round to
/// zero. Anything faster is plotted at this floor.
const MIN_PLOTTED_SECONDS: f64 = 1e-9;

const SERIES_COLORS: &[RGBColor] = &[RED, BLUE, GREEN];

/// Writes the results as one section per algorithm, each listing a
/// `Size <n>: <secs> seconds` line per configured size, in size order.
pub fn write_report<W: Write>(table: &BenchmarkTable, mut w: W) -> io::Result<()> {
    writeln!(w, "Benchmark Results:")?;
    for (name, durations) in table.rows() {
        writeln!(w)?;
        writeln!(w, "{name}:")?;
        for (size, duration) in table.sizes().iter().zip(durations) {
            writeln!(w, "Size {size}: {:.6} seconds", duration.as_secs_f64())?;
        }
    }
    Ok(())
}

pub fn save_report(table: &BenchmarkTable, path: &Path) -> io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    write_report(table, &mut w)?;
    w.flush()
}

/// Renders a line chart of the table to an SVG file: x = input size,
/// y = average seconds on a logarithmic axis, one series per algorithm.
pub fn render_chart(table: &BenchmarkTable, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let sizes = table.sizes();

    let mut y_min = f64::INFINITY;
    let mut y_max = 0.0f64;
    for (_, durations) in table.rows() {
        for duration in durations {
            let secs = duration.as_secs_f64().max(MIN_PLOTTED_SECONDS);
            y_min = y_min.min(secs);
            y_max = y_max.max(secs);
        }
    }
    if sizes.is_empty() || !y_min.is_finite() {
        return Ok(());
    }

    let x_max = sizes.iter().copied().max().unwrap_or(1) as f64;

    let root = SVGBackend::new(path, (1024, 640)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Runtime Benchmark of Sorting Algorithms", ("sans-serif", 28))
        .margin(16)
        .x_label_area_size(48)
        .y_label_area_size(72)
        .build_cartesian_2d(0f64..x_max * 1.05, (y_min / 2.0..y_max * 2.0).log_scale())?;

    chart
        .configure_mesh()
        .x_desc("Input Size (n)")
        .y_desc("Time (seconds)")
        .draw()?;

    for (idx, (name, durations)) in table.rows().enumerate() {
        let color = SERIES_COLORS[idx % SERIES_COLORS.len()];
        let points: Vec<(f64, f64)> = sizes
            .iter()
            .zip(durations)
            .map(|(&size, duration)| {
                (
                    size as f64,
                    duration.as_secs_f64().max(MIN_PLOTTED_SECONDS),
                )
            })
            .collect();
        chart
            .draw_series(LineSeries::new(points, &color))?
            .label(name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], color));
    }

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.8))
        .draw()?;

    root.present()?;
    Ok(())
}
