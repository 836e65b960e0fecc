//! Defines the struct returned by the interpolation pipeline.
//!
//! [`InterpolationReport`] bundles everything a display layer needs:
//! the interpolated value at the query point, the full difference table
//! for tabular rendering, and the evaluated midpoints for chart markers.

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::difference::DifferenceTable;

/// Summary of an interpolation run.
///
/// [`InterpolationReport`]
/// - `algorithm_name` : name of the method variant (e.g. `"newton_gregory_forward"`)
/// - `n_provided`     : number of input data points `(x, y)`
/// - `result`         : interpolated value at the query point
/// - `midpoints`      : interpolated values at adjacent-pair midpoints
/// - `table`          : the triangular difference table
#[derive(Debug, Clone)]
pub struct InterpolationReport {
    pub algorithm_name: &'static str,
    pub n_provided: usize,
    pub result: f64,
    pub midpoints: Vec<f64>,
    pub table: DifferenceTable,
}

impl InterpolationReport {
    pub fn new(
        algorithm: Algorithm,
        n_provided: usize,
        result: f64,
        midpoints: Vec<f64>,
        table: DifferenceTable,
    ) -> Self {
        Self {
            algorithm_name: algorithm.algorithm_name(),
            n_provided,
            result,
            midpoints,
            table,
        }
    }
}

/// Formats a value for display: integral values render without a decimal
/// part, others to five decimal places with trailing zeros trimmed.
pub fn format_value(v: f64) -> String {
    if v.fract() == 0.0 {
        return format!("{}", v);
    }

    let fixed = format!("{:.5}", v);
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}
