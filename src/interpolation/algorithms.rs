//! Defines the interpolation algorithm variants
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods.

/// Interpolation algorithm variants.
/// - [`Algorithm::NewtonGregoryForward`]  differences anchored at the first sample
/// - [`Algorithm::NewtonGregoryBackward`] differences anchored at the last sample
#[derive(Debug, Copy, Clone)]
pub enum Algorithm {
    NewtonGregoryForward,
    NewtonGregoryBackward,
}

impl Algorithm {
    pub fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::NewtonGregoryForward  => "newton_gregory_forward",
            Algorithm::NewtonGregoryBackward => "newton_gregory_backward",
        }
    }
}
