//! Square wave oscillator implementation.

use super::phasor::Phasor;
use crate::Source;

/// A 50% duty cycle square wave.
///
/// Outputs `+amplitude` for the first half of each period and `-amplitude`
/// for the second, which is `amplitude · sign(sin(2π · f · t))` with each
/// zero crossing resolved to the level that follows it.
pub struct SquareOscillator {
    phasor: Phasor,
    amplitude: f64,
}

impl SquareOscillator {
    pub fn new(frequency: f64, amplitude: f64, sample_rate: f64) -> Self {
        Self {
            phasor: Phasor::new(frequency, sample_rate),
            amplitude,
        }
    }
}

impl Source for SquareOscillator {
    fn next_sample(&mut self) -> f64 {
        if self.phasor.next_phase() < 0.5 {
            self.amplitude
        } else {
            -self.amplitude
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_two_levels() {
        let mut osc = SquareOscillator::new(10.0, 0.5, 1000.0);
        let mut buffer = vec![0.0; 1000];
        osc.process(&mut buffer);
        assert!(buffer.iter().all(|&s| s == 0.5 || s == -0.5));
    }

    #[test]
    fn test_edges_on_exact_half_periods() {
        // 100 samples per period: exactly 50 high then 50 low, every period
        let mut osc = SquareOscillator::new(10.0, 1.0, 1000.0);
        let mut buffer = vec![0.0; 1000];
        osc.process(&mut buffer);
        for (i, &s) in buffer.iter().enumerate() {
            let expected = if i % 100 < 50 { 1.0 } else { -1.0 };
            assert_eq!(s, expected, "sample {i}");
        }
    }
}
