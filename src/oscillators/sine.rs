//! Sine wave oscillator implementation.

use super::phasor::Phasor;
use crate::Source;
use std::f64::consts::PI;

/// A sine wave oscillator: `amplitude · sin(2π · f · t)`.
///
/// The first sample (t = 0) is 0.0.
pub struct SineOscillator {
    phasor: Phasor,
    amplitude: f64,
}

impl SineOscillator {
    /// Creates a new sine oscillator.
    ///
    /// # Arguments
    ///
    /// * `frequency` - Frequency of the sine wave in Hz
    /// * `amplitude` - Peak value
    /// * `sample_rate` - Sample rate in Hz (e.g., 44100.0 for CD quality)
    ///
    /// # Examples
    ///
    /// ```
    /// use wavegen::{SineOscillator, Source};
    ///
    /// let mut osc = SineOscillator::new(440.0, 0.5, 44100.0);
    /// assert_eq!(osc.next_sample(), 0.0);
    /// ```
    pub fn new(frequency: f64, amplitude: f64, sample_rate: f64) -> Self {
        Self {
            phasor: Phasor::new(frequency, sample_rate),
            amplitude,
        }
    }
}

impl Source for SineOscillator {
    fn next_sample(&mut self) -> f64 {
        self.amplitude * (self.phasor.next_phase() * 2.0 * PI).sin()
    }
}
