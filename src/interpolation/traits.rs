/// A polynomial interpolant bound to its samples.
///
/// Evaluation is infallible: malformed numeric input surfaces as a
/// non-finite result, not as a structured error.
pub trait Interpolant {
    /// evaluates single point
    /// defined separately in each method
    fn eval(&self, value: f64) -> f64;

    /// evaluates many points
    #[inline]
    fn eval_many(&self, values: &[f64]) -> Vec<f64> {
        values.iter().map(|&v| self.eval(v)).collect()
    }
}
