//! Newton-Gregory Interpolation
//!
//! Implements global polynomial interpolation using the
//! [Newton-Gregory finite-difference method](https://en.wikipedia.org/wiki/Newton_polynomial),
//! in forward and backward form.
//!
//! Coefficients come from a triangular [`DifferenceTable`]; evaluation
//! accumulates difference terms scaled by running products of
//! `(value - x[..])` over factorials. The x-samples are assumed uniformly
//! spaced at unit step and strictly increasing; neither is enforced.

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{impl_common_cfg, CommonCfg};
use crate::interpolation::difference::{DifferenceTable, Orientation};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::midpoint;
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::traits::Interpolant;

/// Newton-Gregory interpolation configuration
///
/// # Fields
/// - `common`      : [`CommonCfg`]
/// - `orientation` : [`Orientation`]; [`Orientation::Forward`] by default
///
/// # Construction
/// - Use [`NewtonGregoryCfg::new`] then optional setters.
#[derive(Debug, Clone, Copy)]
pub struct NewtonGregoryCfg<'a> {
    common: CommonCfg<'a>,
    orientation: Orientation,
}
impl<'a> NewtonGregoryCfg<'a> {
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new(),
            orientation: Orientation::Forward,
        }
    }

    pub fn with_orientation(mut self, v: Orientation) -> Self {
        self.orientation = v;
        self
    }
}
impl_common_cfg!(NewtonGregoryCfg<'a>);

/// Exact factorial of a small non-negative integer.
///
/// Table orders stay small, so double precision holds k! exactly and no
/// overflow handling is needed.
#[inline]
fn factorial(k: usize) -> f64 {
    let mut f = 1.0;
    for i in 2..=k {
        f *= i as f64;
    }
    f
}

/// Evaluates the forward Newton-Gregory polynomial at `value`.
///
/// Expands about `x[0]`, reading coefficients from row 0:
///
/// ```text
/// P(value) = diff[0][0]
///          + Σ_{k=1}^{n-1} diff[0][k] * (value - x[0])...(value - x[k-1]) / k!
/// ```
///
/// The caller guarantees `x` covers the table's row count and that `diff`
/// was built as [`Orientation::Forward`]; evaluation itself has no
/// failure modes.
pub fn evaluate_forward(x: &[f64], diff: &DifferenceTable, value: f64) -> f64 {
    let n = diff.n();

    let mut result  = diff.get(0, 0);
    let mut product = 1.0;
    for k in 1..n {
        product *= value - x[k - 1];
        result  += diff.get(0, k) * product / factorial(k);
    }

    result
}

/// Evaluates the backward Newton-Gregory polynomial at `value`.
///
/// Expands about `x[n-1]`, reading coefficients from row n-1 with
/// products over `(value - x[n-1])(value - x[n-2])...(value - x[n-k])`.
pub fn evaluate_backward(x: &[f64], diff: &DifferenceTable, value: f64) -> f64 {
    let n = diff.n();

    let mut result  = diff.get(n - 1, 0);
    let mut product = 1.0;
    for k in 1..n {
        product *= value - x[n - k];
        result  += diff.get(n - 1, k) * product / factorial(k);
    }

    result
}

/// A Newton-Gregory interpolant bound to its x-samples and a prebuilt
/// [`DifferenceTable`].
///
/// This is the evaluator handed to midpoint sampling, and to any host
/// that wants repeated point evaluation without rebuilding the table.
#[derive(Debug, Clone)]
pub struct NewtonGregory<'a> {
    x: &'a [f64],
    diff: DifferenceTable,
}

impl<'a> NewtonGregory<'a> {
    /// Builds the difference table for `(x, y)` in the given orientation
    /// and binds it for evaluation.
    ///
    /// `x` and `y` must be equal-length and non-empty; the pipeline entry
    /// point validates this.
    pub fn new(x: &'a [f64], y: &[f64], orientation: Orientation) -> Self {
        Self {
            x,
            diff: DifferenceTable::build(y, orientation),
        }
    }

    pub fn diff(&self) -> &DifferenceTable {
        &self.diff
    }

    /// Consumes the interpolant, releasing the table.
    pub fn into_table(self) -> DifferenceTable {
        self.diff
    }
}

impl Interpolant for NewtonGregory<'_> {
    fn eval(&self, value: f64) -> f64 {
        match self.diff.orientation() {
            Orientation::Forward  => evaluate_forward(self.x, &self.diff, value),
            Orientation::Backward => evaluate_backward(self.x, &self.diff, value),
        }
    }
}

/// Performs Newton-Gregory interpolation over the data in [`CommonCfg`].
///
/// # Behavior
/// - Validates that `x` and `y` are non-empty and of equal length before
///   any table is built; nothing else about the samples is checked.
/// - Builds the [`DifferenceTable`] in the configured [`Orientation`].
/// - Evaluates the interpolant at `cfg.common.value()`.
/// - Evaluates the interpolant at the midpoint of every adjacent sample
///   pair.
///
/// # Returns
/// [`InterpolationReport`] containing
/// - `algorithm_name` : `"newton_gregory_forward"` or `"newton_gregory_backward"`
/// - `n_provided`     : number of (x, y) data points
/// - `result`         : interpolated value at the query point
/// - `midpoints`      : interpolated values at adjacent-pair midpoints
/// - `table`          : the difference table, for tabular display
///
/// # Errors
/// - [`InterpolationError::EmptyInput`] if either sample sequence is empty.
/// - [`InterpolationError::UnequalLength`] if `x` and `y` differ in length.
pub fn interpolate(cfg: NewtonGregoryCfg) -> Result<InterpolationReport, InterpolationError> {
    cfg.common.validate()?;

    let x     = cfg.common.x();
    let y     = cfg.common.y();
    let value = cfg.common.value();

    let algorithm = match cfg.orientation {
        Orientation::Forward  => Algorithm::NewtonGregoryForward,
        Orientation::Backward => Algorithm::NewtonGregoryBackward,
    };

    let interp    = NewtonGregory::new(x, y, cfg.orientation);
    let result    = interp.eval(value);
    let midpoints = midpoint::sample(x, |xq| interp.eval(xq));

    Ok(InterpolationReport::new(
        algorithm,
        x.len(),
        result,
        midpoints,
        interp.into_table(),
    ))
}
