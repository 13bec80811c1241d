//! FFT magnitude spectrum.
//!
//! Computes the one-sided amplitude spectrum of a real signal: bins from
//! 0 Hz up to (but not including) the Nyquist bin, each scaled by `2/N` so
//! that a sinusoid of amplitude `A` centred on a bin reads approximately `A`.

use crate::error::{Error, Result};
use crate::generator::Signal;
use rustfft::FftPlanner;
use rustfft::num_complex::Complex64;
use tracing::debug;

/// One-sided magnitude spectrum of a [`Signal`].
///
/// `frequencies[k] = k · sample_rate / N` and `magnitudes[k] = 2/N · |X_k|`
/// for `k in [0, N/2)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    frequencies: Vec<f64>,
    magnitudes: Vec<f64>,
}

impl Spectrum {
    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    pub fn magnitudes(&self) -> &[f64] {
        &self.magnitudes
    }

    pub fn len(&self) -> usize {
        self.magnitudes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.magnitudes.is_empty()
    }

    /// Spacing between adjacent bins in Hz, `None` with fewer than two bins.
    pub fn bin_width(&self) -> Option<f64> {
        match self.frequencies.as_slice() {
            [first, second, ..] => Some(second - first),
            _ => None,
        }
    }

    /// Frequency and magnitude of the strongest bin.
    pub fn peak(&self) -> Option<(f64, f64)> {
        self.magnitudes
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(k, &m)| (self.frequencies[k], m))
    }

    /// Iterates `(frequency, magnitude)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.frequencies
            .iter()
            .copied()
            .zip(self.magnitudes.iter().copied())
    }
}

/// Computes the one-sided FFT magnitude spectrum of `signal`.
///
/// Fails with `EmptySignal` when there are no samples.
///
/// # Examples
///
/// ```
/// use wavegen::{SignalParameters, Waveform, generate, spectrum};
///
/// let params = SignalParameters::new(Waveform::Sine, 1000.0, 1.0, 8000.0, 1.0);
/// let spec = spectrum(&generate(&params).unwrap()).unwrap();
/// let (freq, mag) = spec.peak().unwrap();
/// assert_eq!(freq, 1000.0);
/// assert!((mag - 1.0).abs() < 1e-6);
/// ```
pub fn spectrum(signal: &Signal) -> Result<Spectrum> {
    if signal.is_empty() {
        return Err(Error::EmptySignal);
    }
    let fs = signal.sample_rate();

    let n = signal.len();
    let mut buffer: Vec<Complex64> = signal
        .samples()
        .iter()
        .map(|&s| Complex64::new(s, 0.0))
        .collect();

    let mut planner = FftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(n);
    fft.process(&mut buffer);

    let half = n / 2;
    let scale = 2.0 / n as f64;
    let magnitudes = buffer[..half].iter().map(|c| c.norm() * scale).collect();
    let frequencies = (0..half).map(|k| k as f64 * fs / n as f64).collect();

    debug!(bins = half, sample_rate = fs, "computed spectrum");

    Ok(Spectrum {
        frequencies,
        magnitudes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{SignalParameters, Waveform, generate};

    fn sine(f: f64, a: f64, fs: f64, dur: f64) -> Signal {
        generate(&SignalParameters::new(Waveform::Sine, f, a, fs, dur)).unwrap()
    }

    #[test]
    fn test_lengths_are_half_n() {
        for n in [1usize, 2, 7, 8, 1001] {
            let signal = Signal::from_samples(1000.0, vec![0.5; n]).unwrap();
            let spec = spectrum(&signal).unwrap();
            assert_eq!(spec.len(), n / 2);
            assert_eq!(spec.frequencies().len(), n / 2);
        }
    }

    #[test]
    fn test_bin_frequencies() {
        let spec = spectrum(&sine(100.0, 1.0, 1000.0, 1.0)).unwrap();
        assert_eq!(spec.frequencies()[0], 0.0);
        assert_eq!(spec.frequencies()[1], 1.0);
        assert_eq!(spec.frequencies()[499], 499.0);
        assert_eq!(spec.bin_width(), Some(1.0));
    }

    #[test]
    fn test_peak_within_one_bin() {
        for (f, fs, dur) in [(440.0, 44100.0, 1.0), (1234.5, 8000.0, 0.5), (60.0, 1000.0, 0.3)] {
            let spec = spectrum(&sine(f, 1.0, fs, dur)).unwrap();
            let (peak_freq, _) = spec.peak().unwrap();
            let width = spec.bin_width().unwrap();
            assert!(
                (peak_freq - f).abs() <= width,
                "peak {peak_freq} vs {f} (bin width {width})"
            );
        }
    }

    #[test]
    fn test_on_bin_amplitude_recovered() {
        let spec = spectrum(&sine(50.0, 0.5, 1000.0, 1.0)).unwrap();
        let (freq, mag) = spec.peak().unwrap();
        assert_eq!(freq, 50.0);
        assert!((mag - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_magnitudes_non_negative_and_finite() {
        let signal = generate(&SignalParameters::new(
            Waveform::WhiteNoise,
            0.0,
            1.0,
            4000.0,
            0.25,
        ))
        .unwrap();
        let spec = spectrum(&signal).unwrap();
        assert!(spec.magnitudes().iter().all(|m| m.is_finite() && *m >= 0.0));
    }

    #[test]
    fn test_deterministic() {
        let signal = generate(&SignalParameters::new(
            Waveform::WhiteNoise,
            0.0,
            1.0,
            2000.0,
            0.1,
        ))
        .unwrap();
        assert_eq!(spectrum(&signal).unwrap(), spectrum(&signal).unwrap());
    }

    #[test]
    fn test_empty_signal() {
        let signal = Signal::from_samples(1000.0, Vec::new()).unwrap();
        assert!(matches!(spectrum(&signal), Err(Error::EmptySignal)));
    }

    #[test]
    fn test_single_sample_has_no_bins() {
        let spec = spectrum(&Signal::from_samples(1000.0, vec![1.0]).unwrap()).unwrap();
        assert!(spec.is_empty());
        assert_eq!(spec.peak(), None);
        assert_eq!(spec.bin_width(), None);
    }

    #[test]
    fn test_dc_reads_double() {
        // One-sided 2/N scaling doubles the DC bin
        let spec = spectrum(&Signal::from_samples(100.0, vec![0.5; 100]).unwrap()).unwrap();
        assert!((spec.magnitudes()[0] - 1.0).abs() < 1e-12);
    }
}
