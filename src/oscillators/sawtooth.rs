//! Sawtooth wave oscillator implementation.

use super::phasor::Phasor;
use crate::Source;

/// A sawtooth wave oscillator.
///
/// The waveform rises linearly from `-amplitude` toward `amplitude` over
/// each period, then drops back to `-amplitude` at the next period start.
pub struct SawtoothOscillator {
    phasor: Phasor,
    amplitude: f64,
}

impl SawtoothOscillator {
    /// Creates a new sawtooth oscillator.
    ///
    /// # Arguments
    ///
    /// * `frequency` - Frequency of the sawtooth wave in Hz
    /// * `amplitude` - Peak value
    /// * `sample_rate` - Sample rate in Hz
    pub fn new(frequency: f64, amplitude: f64, sample_rate: f64) -> Self {
        Self {
            phasor: Phasor::new(frequency, sample_rate),
            amplitude,
        }
    }
}

impl Source for SawtoothOscillator {
    fn next_sample(&mut self) -> f64 {
        self.amplitude * (2.0 * self.phasor.next_phase() - 1.0)
    }
}
