//! Runtime-vs-size chart rendering.

use plotters::prelude::*;
use std::path::Path;

use super::{group_by_program, ReportError, RuntimePoint};

/// Render a runtime-vs-size line chart, one series per program, to a PNG.
pub fn render_chart(
    points: &[RuntimePoint],
    output: &Path,
    title: &str,
) -> Result<(), ReportError> {
    if points.is_empty() {
        return Err(ReportError::EmptyLog);
    }

    let series = group_by_program(points);

    let x_min = points.iter().map(|p| p.size).min().unwrap_or(0) as f64;
    let mut x_max = points.iter().map(|p| p.size).max().unwrap_or(0) as f64;
    if x_max <= x_min {
        x_max = x_min + 1.0;
    }
    let max_runtime = points.iter().map(|p| p.runtime).fold(0.0_f64, f64::max);
    let y_max = if max_runtime > 0.0 {
        max_runtime * 1.1
    } else {
        1.0
    };

    let root = BitMapBackend::new(output, (1024, 768)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 40))
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, 0.0..y_max)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc("Input size")
        .y_desc("Runtime (seconds)")
        .draw()
        .map_err(render_err)?;

    for (index, (program, values)) in series.iter().enumerate() {
        let color = Palette99::pick(index).to_rgba();
        chart
            .draw_series(LineSeries::new(
                values.iter().map(|(size, runtime)| (*size as f64, *runtime)),
                color.stroke_width(2),
            ))
            .map_err(render_err)?
            .label(program.clone())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });

        chart
            .draw_series(
                values
                    .iter()
                    .map(|(size, runtime)| Circle::new((*size as f64, *runtime), 4, color.filled())),
            )
            .map_err(render_err)?;
    }

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.8))
        .draw()
        .map_err(render_err)?;

    root.present().map_err(render_err)?;

    Ok(())
}

fn render_err<E: std::fmt::Display>(err: E) -> ReportError {
    ReportError::Render(err.to_string())
}
