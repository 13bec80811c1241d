//! Triangle wave oscillator implementation.

use super::phasor::Phasor;
use crate::Source;

/// A symmetric triangle wave oscillator.
///
/// The waveform rises linearly from `-amplitude` to `amplitude` over the
/// first half of the period, then falls linearly back over the second half.
pub struct TriangleOscillator {
    phasor: Phasor,
    amplitude: f64,
}

impl TriangleOscillator {
    /// Creates a new triangle oscillator.
    ///
    /// # Examples
    ///
    /// ```
    /// use wavegen::{Source, TriangleOscillator};
    ///
    /// let mut osc = TriangleOscillator::new(440.0, 1.0, 44100.0);
    /// assert_eq!(osc.next_sample(), -1.0);
    /// ```
    pub fn new(frequency: f64, amplitude: f64, sample_rate: f64) -> Self {
        Self {
            phasor: Phasor::new(frequency, sample_rate),
            amplitude,
        }
    }
}

impl Source for TriangleOscillator {
    fn next_sample(&mut self) -> f64 {
        let phase = self.phasor.next_phase();
        let unit = if phase < 0.5 {
            // Rising: -1.0 to 1.0 over phase 0.0 to 0.5
            4.0 * phase - 1.0
        } else {
            // Falling: 1.0 to -1.0 over phase 0.5 to 1.0
            3.0 - 4.0 * phase
        };
        self.amplitude * unit
    }
}
