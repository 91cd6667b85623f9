//! Piecewise-linear yield interpolation and extrapolation

use crate::curves::Point;
use crate::error::{CurveError, CurveResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Two maturities closer than this are treated as the same point.
pub const MATURITY_TOLERANCE: f64 = 1e-9;

/// Step used by [`CurveInterpolator::generate_smooth_curve`] unless configured.
pub const DEFAULT_STEP_SIZE: f64 = 0.5;

/// Upper bound on the points a single smooth-curve call may generate.
pub const MAX_SMOOTH_SAMPLES: usize = 1_000_000;

/// Sampling parameters for smooth-curve generation
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothCurveConfig {
    /// Distance in years between generated points (must be > 0)
    pub step_size: f64,
}

impl Default for SmoothCurveConfig {
    fn default() -> Self { Self { step_size: DEFAULT_STEP_SIZE } }
}

/// Linear interpolator over an unordered set of curve points.
///
/// Every call works on its own sorted copy of the input, so the caller's
/// ordering is never touched and no state is shared between calls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CurveInterpolator {
    /// Smooth-curve sampling configuration
    pub config: SmoothCurveConfig,
}

impl CurveInterpolator {
    /// Creates an interpolator with the given sampling configuration.
    pub fn new(config: SmoothCurveConfig) -> Self { Self { config } }

    /// Returns a copy using `step_size` for smooth-curve generation.
    pub fn with_step_size(mut self, step_size: f64) -> Self {
        self.config.step_size = step_size;
        self
    }

    /// Yield at `target` years.
    ///
    /// Exact maturities return the stored yield untouched. Targets inside the
    /// observed range use the bracketing pair; targets outside it extend the
    /// nearest edge segment without clamping.
    pub fn interpolate(&self, curve: &[Point], target: f64) -> CurveResult<f64> {
        let sorted = sorted_by_maturity(curve)?;
        if !target.is_finite() {
            return Err(CurveError::invalid_input(format!("target maturity must be finite (got {target})")));
        }

        if let Some(p) = sorted.iter().find(|p| (p.maturity - target).abs() < MATURITY_TOLERANCE) {
            return Ok(p.yield_pct);
        }

        let bracket = sorted
            .windows(2)
            .find(|w| w[0].maturity <= target && target <= w[1].maturity);
        let (lo, hi) = match bracket {
            Some(w) => (w[0], w[1]),
            None if target < sorted[0].maturity => {
                log::debug!("extrapolating below {}Y to {}Y", sorted[0].maturity, target);
                (sorted[0], sorted[1])
            }
            None => {
                let n = sorted.len();
                log::debug!("extrapolating above {}Y to {}Y", sorted[n - 1].maturity, target);
                (sorted[n - 2], sorted[n - 1])
            }
        };
        linear(lo, hi, target)
    }

    /// Evaluates every target independently; the first failure aborts the batch.
    pub fn interpolate_multiple(&self, curve: &[Point], targets: &[f64]) -> CurveResult<YieldMap> {
        let mut out = YieldMap::default();
        for &t in targets {
            out.insert(t, self.interpolate(curve, t)?);
        }
        Ok(out)
    }

    /// Samples the curve from its shortest to its longest maturity every
    /// `config.step_size` years.
    ///
    /// The step is accumulated, so the last sampled maturity can drift off
    /// the longest maturity; when it does, an extra point is evaluated
    /// exactly there.
    pub fn generate_smooth_curve(&self, curve: &[Point]) -> CurveResult<Vec<Point>> {
        let sorted = sorted_by_maturity(curve)?;
        let step = self.config.step_size;
        if !step.is_finite() || step <= 0.0 {
            return Err(CurveError::invalid_input(format!("step size must be finite and > 0 (got {step})")));
        }
        let min = sorted[0].maturity;
        let max = sorted[sorted.len() - 1].maturity;
        if (max - min) / step >= MAX_SMOOTH_SAMPLES as f64 {
            return Err(CurveError::invalid_input(format!(
                "step size {step} over [{min}, {max}] needs more than {MAX_SMOOTH_SAMPLES} samples"
            )));
        }

        let mut smooth = Vec::new();
        let mut m = min;
        while m <= max {
            smooth.push(self.sample(curve, m)?);
            let next = m + step;
            if next == m {
                return Err(CurveError::invalid_input(format!(
                    "step size {step} is below the float resolution at {m}Y"
                )));
            }
            m = next;
        }
        // m starts at min <= max, so the loop ran at least once
        if let Some(last) = smooth.last().map(|p| p.maturity) {
            if (last - max).abs() > MATURITY_TOLERANCE {
                log::debug!("step drift left last sample at {last}Y; appending {max}Y");
                smooth.push(self.sample(curve, max)?);
            }
        }
        Ok(smooth)
    }

    fn sample(&self, curve: &[Point], maturity: f64) -> CurveResult<Point> {
        let y = self.interpolate(curve, maturity)?;
        Ok(Point::new(format!("{maturity:.1}Y Interpolated"), maturity, y))
    }
}

/// Stable ascending sort of borrowed points.
///
/// Preconditions fail in order: empty curve, single point, non-finite
/// maturity.
fn sorted_by_maturity(curve: &[Point]) -> CurveResult<Vec<&Point>> {
    if curve.is_empty() { return Err(CurveError::empty_curve()); }
    if curve.len() == 1 { return Err(CurveError::single_point()); }
    if let Some(p) = curve.iter().find(|p| !p.maturity.is_finite()) {
        return Err(CurveError::invalid_input(format!(
            "point '{}' has a non-finite maturity ({})", p.label, p.maturity
        )));
    }
    let mut sorted: Vec<&Point> = curve.iter().collect();
    sorted.sort_by(|a, b| a.maturity.total_cmp(&b.maturity));
    Ok(sorted)
}

/// y = y1 + (x - x1) * (y2 - y1) / (x2 - x1)
fn linear(lo: &Point, hi: &Point, x: f64) -> CurveResult<f64> {
    let (x1, y1, x2, y2) = (lo.maturity, lo.yield_pct, hi.maturity, hi.yield_pct);
    if (x2 - x1).abs() < MATURITY_TOLERANCE {
        return Err(CurveError::DegenerateBracket { lower: x1, upper: x2 });
    }
    Ok(y1 + (x - x1) * (y2 - y1) / (x2 - x1))
}

/// Yields keyed by the queried maturity.
///
/// Keys compare bit-for-bit with `-0.0` folded into `0.0`; re-inserting a
/// maturity overwrites its value but keeps its original position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct YieldMap {
    entries: Vec<(f64, f64)>,
    index: HashMap<u64, usize>,
}

impl YieldMap {
    /// Inserts or overwrites the yield for `maturity`.
    pub fn insert(&mut self, maturity: f64, yield_pct: f64) {
        match self.index.get(&key(maturity)) {
            Some(&i) => self.entries[i].1 = yield_pct,
            None => {
                self.index.insert(key(maturity), self.entries.len());
                self.entries.push((maturity, yield_pct));
            }
        }
    }

    /// Yield stored for `maturity`, if it was queried.
    pub fn get(&self, maturity: f64) -> Option<f64> {
        self.index.get(&key(maturity)).map(|&i| self.entries[i].1)
    }

    /// Whether `maturity` was queried.
    pub fn contains_key(&self, maturity: f64) -> bool { self.index.contains_key(&key(maturity)) }

    /// Number of distinct maturities.
    pub fn len(&self) -> usize { self.entries.len() }

    /// True when nothing was queried.
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// `(maturity, yield)` pairs in first-query order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ { self.entries.iter().copied() }
}

fn key(maturity: f64) -> u64 {
    // -0.0 == 0.0 but the bit patterns differ
    if maturity == 0.0 { 0.0f64.to_bits() } else { maturity.to_bits() }
}
