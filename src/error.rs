//! Error taxonomy for curve interpolation

use thiserror::Error;

/// Result alias used by the interpolation core.
pub type CurveResult<T> = Result<T, CurveError>;

/// Errors raised by [`crate::interp::CurveInterpolator`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// A precondition on the curve, the query or the step size failed.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The two points chosen for extrapolation share a maturity.
    #[error("degenerate bracket: points at {lower}Y and {upper}Y share a maturity")]
    DegenerateBracket {
        /// Maturity of the lower point
        lower: f64,
        /// Maturity of the upper point
        upper: f64,
    },
}

impl CurveError {
    /// Builds an [`CurveError::InvalidInput`] from any message.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub(crate) fn empty_curve() -> Self {
        Self::invalid_input("curve cannot be null or empty")
    }

    pub(crate) fn single_point() -> Self {
        Self::invalid_input("cannot interpolate with only one point; at least two points are required")
    }
}
