//! Consistency checks for a generated smooth curve

use crate::curves::Point;
use crate::interp::{CurveInterpolator, MATURITY_TOLERANCE};
use anyhow::{anyhow, Result};
use serde::Serialize;

/// Verification report for a smooth curve against its source observations
#[derive(Debug, Serialize)]
pub struct Report {
    /// Number of generated points
    pub points: usize,
    /// Shortest observed maturity
    pub min_maturity: f64,
    /// Longest observed maturity
    pub max_maturity: f64,
    /// First and last samples sit on the observed range boundaries
    pub endpoints_ok: bool,
    /// Sample maturities strictly increase
    pub monotone_ok: bool,
    /// Largest |interpolate(m_i) - y_i| over the observed points
    pub knot_max_err: f64,
}

/// Checks boundary coverage, ordering and knot reproduction of `smooth`.
pub fn verify_smooth_curve(curve: &[Point], smooth: &[Point]) -> Result<Report> {
    let (first, last) = match (smooth.first(), smooth.last()) {
        (Some(f), Some(l)) => (f, l),
        _ => return Err(anyhow!("smooth curve is empty")),
    };
    let min_maturity = curve.iter().map(|p| p.maturity).fold(f64::INFINITY, f64::min);
    let max_maturity = curve.iter().map(|p| p.maturity).fold(f64::NEG_INFINITY, f64::max);
    if !min_maturity.is_finite() || !max_maturity.is_finite() {
        return Err(anyhow!("source curve has no finite maturities"));
    }

    let endpoints_ok = (first.maturity - min_maturity).abs() < MATURITY_TOLERANCE
        && (last.maturity - max_maturity).abs() < MATURITY_TOLERANCE;
    let monotone_ok = smooth.windows(2).all(|w| w[0].maturity < w[1].maturity);

    let interp = CurveInterpolator::default();
    let mut knot_max_err = 0.0_f64;
    for p in curve {
        let y = interp.interpolate(curve, p.maturity)?;
        knot_max_err = knot_max_err.max((y - p.yield_pct).abs());
    }

    Ok(Report {
        points: smooth.len(),
        min_maturity,
        max_maturity,
        endpoints_ok,
        monotone_ok,
        knot_max_err,
    })
}
