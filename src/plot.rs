//! Visualization utilities for generating charts

use crate::curves::Point;
use anyhow::{anyhow, Result};
use plotters::prelude::*;

/// Draws the observed points over the sampled smooth curve
pub fn plot_smooth_curve(observed: &[Point], smooth: &[Point], out_path: &str) -> Result<()> {
    if smooth.is_empty() { return Err(anyhow!("nothing to plot")); }
    let root = BitMapBackend::new(out_path, (1200, 700)).into_drawing_area();
    root.fill(&WHITE)?;

    let all = observed.iter().chain(smooth.iter());
    let (mut x_min, mut x_max) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
    for p in all {
        x_min = x_min.min(p.maturity);
        x_max = x_max.max(p.maturity);
        y_min = y_min.min(p.yield_pct);
        y_max = y_max.max(p.yield_pct);
    }
    let x_pad = ((x_max - x_min) * 0.05).max(0.1);
    let y_pad = ((y_max - y_min) * 0.10).max(0.05);

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Yield vs Maturity", ("sans-serif", 28))
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d((x_min - x_pad)..(x_max + x_pad), (y_min - y_pad)..(y_max + y_pad))?;
    chart
        .configure_mesh()
        .x_desc("Maturity (years)")
        .y_desc("Yield (%)")
        .draw()?;
    chart.draw_series(LineSeries::new(
        smooth.iter().map(|p| (p.maturity, p.yield_pct)),
        &BLACK,
    ))?;
    chart.draw_series(
        observed
            .iter()
            .map(|p| Circle::new((p.maturity, p.yield_pct), 5, RED.filled())),
    )?;
    root.present()?;
    Ok(())
}
