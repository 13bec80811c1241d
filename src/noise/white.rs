//! White noise generator implementation.

use crate::Source;
use rand::Rng;

/// A white noise generator.
///
/// White noise has equal power across all frequencies. Each sample is an
/// independent draw, uniformly distributed over `[-amplitude, amplitude]`.
/// The caller supplies the RNG, so a seeded generator gives a repeatable
/// sequence.
pub struct WhiteNoise<R: Rng> {
    amplitude: f64,
    rng: R,
}

impl<R: Rng> WhiteNoise<R> {
    /// Creates a white noise generator drawing from `rng`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use wavegen::{Source, WhiteNoise};
    ///
    /// let rng = rand::rngs::StdRng::seed_from_u64(42);
    /// let mut noise = WhiteNoise::new(0.5, rng);
    /// assert!((-0.5..=0.5).contains(&noise.next_sample()));
    /// ```
    pub fn new(amplitude: f64, rng: R) -> Self {
        Self { amplitude, rng }
    }
}

impl<R: Rng> Source for WhiteNoise<R> {
    fn next_sample(&mut self) -> f64 {
        self.rng.gen_range(-self.amplitude..=self.amplitude)
    }
}
