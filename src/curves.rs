//! Curve points, sample data and simple curve statistics

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One observation on a yield curve.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Informational label, never used in computation
    pub label: String,
    /// Time to maturity in years
    pub maturity: f64,
    /// Yield in percent
    #[serde(rename = "yield")]
    pub yield_pct: f64,
}

impl Point {
    /// Builds a point from its label, maturity (years) and yield (percent).
    pub fn new(label: impl Into<String>, maturity: f64, yield_pct: f64) -> Self {
        Self { label: label.into(), maturity, yield_pct }
    }
}

/// Three-point sample curve: 2Y/1.8%, 5Y/2.2%, 10Y/2.5%.
pub fn sample_curve() -> Vec<Point> {
    vec![
        Point::new("2Y Bond", 2.0, 1.8),
        Point::new("5Y Bond", 5.0, 2.2),
        Point::new("10Y Bond", 10.0, 2.5),
    ]
}

/// Arithmetic mean of the yields, `None` for an empty curve.
pub fn average_yield(curve: &[Point]) -> Option<f64> {
    if curve.is_empty() { return None; }
    let sum: f64 = curve.iter().map(|p| p.yield_pct).sum();
    Some(sum / curve.len() as f64)
}

/// Reads a curve from a CSV file with `label,maturity,yield` columns.
///
/// Lines starting with `#` are skipped, so files written by the CLI can be
/// read back.
pub fn load_curve_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Point>> {
    let path = path.as_ref();
    let mut rdr = csv::ReaderBuilder::new()
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening curve file {}", path.display()))?;
    let mut points = Vec::new();
    for (row, rec) in rdr.deserialize::<Point>().enumerate() {
        let p = rec.with_context(|| format!("{}: bad curve row {}", path.display(), row + 1))?;
        points.push(p);
    }
    log::debug!("read {} points from {}", points.len(), path.display());
    Ok(points)
}
