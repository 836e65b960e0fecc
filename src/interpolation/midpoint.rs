//! Midpoint sampling.
//!
//! Derives the midpoints between consecutive x-samples and evaluates a
//! bound interpolant there. The evaluated midpoints feed the annotated
//! chart markers of downstream display layers.

/// Midpoint of each adjacent sample pair: `(x[i] + x[i+1]) / 2`.
///
/// Empty when there is at most one sample.
pub fn midpoints(x: &[f64]) -> Vec<f64> {
    let n = x.len();
    if n < 2 {
        return Vec::new();
    }

    let mut mids = Vec::with_capacity(n - 1);
    for i in 0..n - 1 {
        mids.push((x[i] + x[i + 1]) / 2.0);
    }

    mids
}

/// Evaluates `evaluate` at the midpoint of every adjacent pair in `x`.
///
/// `evaluate` is an interpolant already bound to its difference table and
/// orientation. Returns one value per pair: length `n - 1` for `n`
/// samples, empty when there is at most one sample.
pub fn sample<F>(x: &[f64], evaluate: F) -> Vec<f64>
where
    F: Fn(f64) -> f64,
{
    midpoints(x).iter().map(|&m| evaluate(m)).collect()
}
