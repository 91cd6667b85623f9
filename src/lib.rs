#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(missing_docs)]
//! Library entry for the yield-curve interpolator.
//!
//! Computes yields at arbitrary maturities from a sparse set of observed
//! (maturity, yield) points by piecewise-linear interpolation inside the
//! observed range and linear extrapolation of the edge segments outside it.
//!
//! # Modules
//! - [`curves`]: Curve points, sample data, CSV loading
//! - [`interp`]: Interpolation, batch queries, smooth-curve sampling
//! - [`error`]: Error taxonomy
//! - [`verifier`]: Smooth-curve consistency checks
//! - [`plot`]: Visualization (optional in binaries)

/// Curve points, sample data and simple statistics
pub mod curves;

/// Error taxonomy for the interpolation core
pub mod error;

/// Piecewise-linear interpolation and smooth-curve generation
pub mod interp;

/// Verification tools for generated smooth curves
pub mod verifier;

/// Visualization utilities for generating charts
pub mod plot;

pub use curves::Point;
pub use error::{CurveError, CurveResult};
pub use interp::{CurveInterpolator, SmoothCurveConfig, YieldMap};
