use ycurve::curves::{average_yield, load_curve_csv, sample_curve, Point};
use ycurve::interp::{CurveInterpolator, SmoothCurveConfig, YieldMap, DEFAULT_STEP_SIZE};
use ycurve::plot::plot_smooth_curve;
use ycurve::verifier::{verify_smooth_curve, Report};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use serde::Serialize;
use std::fs::{create_dir_all, File};
use std::io::Write;

#[derive(Parser, Debug)]
#[command(
    name = "ycurve",
    version,
    about = "Linear yield-curve interpolator"
)]
struct Args {
    /// CSV with label,maturity,yield columns. Uses the built-in 2Y/5Y/10Y curve when omitted.
    #[arg(long)]
    curve: Option<String>,

    /// Years between smooth-curve samples.
    #[arg(long, default_value_t = DEFAULT_STEP_SIZE)]
    step_size: f64,

    /// Maturities to query, comma separated.
    #[arg(
        long,
        value_delimiter = ',',
        allow_negative_numbers = true,
        default_values_t = [3.0, 3.5, 7.5, 1.0, 15.0]
    )]
    at: Vec<f64>,

    #[arg(long, default_value = "out")]
    out_dir: String,
    #[arg(long = "no-draw", action = clap::ArgAction::SetFalse, default_value_t = true)]
    draw: bool,
    /// Print one JSON document instead of the text report.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    json: bool,
    #[arg(long, action = clap::ArgAction::SetTrue)]
    verbose: bool,
}

#[derive(Serialize)]
struct Query {
    maturity: f64,
    #[serde(rename = "yield")]
    yield_pct: f64,
}

#[derive(Serialize)]
struct Summary<'a> {
    curve: &'a [Point],
    average_yield: Option<f64>,
    queries: Vec<Query>,
    smooth_curve: &'a [Point],
    report: &'a Report,
}

fn validate_inputs(args: &Args, curve: &[Point]) -> Result<()> {
    if !args.step_size.is_finite() || args.step_size <= 0.0 {
        return Err(anyhow!("step_size must be finite and > 0 (got {})", args.step_size));
    }
    if curve.len() < 2 {
        return Err(anyhow!("curve needs at least two points (got {})", curve.len()));
    }
    if let Some(m) = args.at.iter().find(|m| !m.is_finite()) {
        return Err(anyhow!("query maturities must be finite (got {})", m));
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let default_filter = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();

    let curve = match &args.curve {
        Some(path) => {
            let c = load_curve_csv(path)?;
            log::info!("loaded {} points from {}", c.len(), path);
            c
        }
        None => sample_curve(),
    };
    validate_inputs(&args, &curve)?;

    let interp = CurveInterpolator::new(SmoothCurveConfig { step_size: args.step_size });
    let queries = interp.interpolate_multiple(&curve, &args.at)?;
    let smooth = interp.generate_smooth_curve(&curve)?;
    let report = verify_smooth_curve(&curve, &smooth)?;
    if !report.endpoints_ok || !report.monotone_ok {
        log::warn!(
            "smooth curve check failed: endpoints_ok={} monotone_ok={}",
            report.endpoints_ok,
            report.monotone_ok
        );
    }

    create_dir_all(&args.out_dir)
        .with_context(|| format!("creating output directory {}", args.out_dir))?;
    let csv_path = format!("{}/smooth_curve.csv", &args.out_dir);
    write_smooth_curve_csv(&csv_path, &smooth, args.step_size, &report)?;
    log::info!("wrote {} points to {}", smooth.len(), csv_path);
    if args.draw {
        let png_path = format!("{}/smooth_curve.png", &args.out_dir);
        plot_smooth_curve(&curve, &smooth, &png_path)?;
        log::info!("wrote {}", png_path);
    }

    if args.json {
        let summary = Summary {
            curve: &curve,
            average_yield: average_yield(&curve),
            queries: queries.iter().map(|(maturity, yield_pct)| Query { maturity, yield_pct }).collect(),
            smooth_curve: &smooth,
            report: &report,
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_text_report(&args, &curve, &queries, &smooth, &report);
    }
    Ok(())
}

fn print_text_report(args: &Args, curve: &[Point], queries: &YieldMap, smooth: &[Point], report: &Report) {
    println!("=== Yield Curve ===");
    for p in curve {
        println!("{} - {}Y: {:.2}%", p.label, p.maturity, p.yield_pct);
    }
    if let Some(avg) = average_yield(curve) {
        println!("\nAverage Yield: {:.2}%", avg);
    }

    println!("\n=== Linear Interpolation ===");
    for (m, y) in queries.iter() {
        println!("{}Y yield (interpolated): {:.2}%", m, y);
    }

    println!("\n=== Smooth Yield Curve ({}Y intervals) ===", args.step_size);
    for p in smooth {
        println!("{:.1}Y: {:.2}%", p.maturity, p.yield_pct);
    }

    if args.verbose {
        println!(
            "\n[check] points={} range=[{}, {}] endpoints_ok={} monotone_ok={} knot_max_err={:.3e}",
            report.points,
            report.min_maturity,
            report.max_maturity,
            report.endpoints_ok,
            report.monotone_ok,
            report.knot_max_err
        );
    }
}

fn write_smooth_curve_csv(file_path: &str, smooth: &[Point], step_size: f64, report: &Report) -> Result<()> {
    let mut file = File::create(file_path).with_context(|| format!("creating {}", file_path))?;

    // Write metadata header
    writeln!(file, "# Smooth Yield Curve")?;
    writeln!(file, "# Step size: {}Y", step_size)?;
    writeln!(
        file,
        "# Range: {}Y to {}Y, {} points",
        report.min_maturity, report.max_maturity, report.points
    )?;
    writeln!(file)?;

    // header row comes from Point's field names
    let mut wtr = csv::Writer::from_writer(file);
    for p in smooth {
        wtr.serialize(p)?;
    }
    wtr.flush()?;
    Ok(())
}
