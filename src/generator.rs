//! Waveform synthesis.
//!
//! `generate` turns a set of [`SignalParameters`] into a [`Signal`]: an
//! evenly spaced time axis starting at zero and the matching amplitude
//! samples. Every call produces a fresh value; nothing is retained between
//! calls.

use crate::error::{Error, Result};
use crate::noise::WhiteNoise;
use crate::oscillators::{SawtoothOscillator, SineOscillator, SquareOscillator, TriangleOscillator};
use crate::signals::Source;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Largest number of samples a single generation pass will allocate.
///
/// 2^26 samples is a little over 11 minutes at 96 kHz (512 MiB of `f64`).
/// Parameters whose `rate · duration` exceeds it are rejected with
/// `InvalidParameter { name: "sample_count", .. }` before any allocation.
pub const MAX_SAMPLES: usize = 1 << 26;

/// The closed set of waveforms the generator can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Waveform {
    #[default]
    Sine,
    Square,
    #[serde(alias = "saw")]
    Sawtooth,
    #[serde(alias = "tri")]
    Triangle,
    #[serde(alias = "white-noise", alias = "noise")]
    WhiteNoise,
}

impl Waveform {
    /// All waveforms, in display order.
    pub const ALL: [Waveform; 5] = [
        Waveform::Sine,
        Waveform::Square,
        Waveform::Sawtooth,
        Waveform::Triangle,
        Waveform::WhiteNoise,
    ];

    /// Whether the waveform repeats with a period of `1 / frequency`.
    ///
    /// Non-periodic waveforms ignore the frequency parameter.
    pub fn is_periodic(self) -> bool {
        !matches!(self, Waveform::WhiteNoise)
    }

    pub fn name(self) -> &'static str {
        match self {
            Waveform::Sine => "Sine",
            Waveform::Square => "Square",
            Waveform::Sawtooth => "Sawtooth",
            Waveform::Triangle => "Triangle",
            Waveform::WhiteNoise => "WhiteNoise",
        }
    }
}

impl fmt::Display for Waveform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Waveform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "sine" | "sin" => Ok(Waveform::Sine),
            "square" | "sq" => Ok(Waveform::Square),
            "sawtooth" | "saw" => Ok(Waveform::Sawtooth),
            "triangle" | "tri" => Ok(Waveform::Triangle),
            "whitenoise" | "white-noise" | "white_noise" | "noise" => Ok(Waveform::WhiteNoise),
            _ => Err(Error::UnknownWaveform(s.to_string())),
        }
    }
}

/// Parameters for one generation pass.
///
/// The defaults match a one-second 440 Hz sine at full scale, sampled at
/// 44.1 kHz.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalParameters {
    pub waveform: Waveform,
    /// Ignored for `WhiteNoise`
    pub frequency_hz: f64,
    pub amplitude: f64,
    pub sample_rate_hz: f64,
    pub duration_sec: f64,
}

impl Default for SignalParameters {
    fn default() -> Self {
        Self {
            waveform: Waveform::Sine,
            frequency_hz: 440.0,
            amplitude: 1.0,
            sample_rate_hz: 44100.0,
            duration_sec: 1.0,
        }
    }
}

impl SignalParameters {
    pub fn new(
        waveform: Waveform,
        frequency_hz: f64,
        amplitude: f64,
        sample_rate_hz: f64,
        duration_sec: f64,
    ) -> Self {
        Self {
            waveform,
            frequency_hz,
            amplitude,
            sample_rate_hz,
            duration_sec,
        }
    }

    /// Checks every generation precondition.
    ///
    /// Fails with `InvalidParameter` naming the first offending field. The
    /// frequency is only checked for periodic waveforms. A sample count
    /// above [`MAX_SAMPLES`] is reported as `sample_count`.
    pub fn validate(&self) -> Result<()> {
        positive("sample_rate_hz", self.sample_rate_hz)?;
        positive("duration_sec", self.duration_sec)?;
        let requested = (self.sample_rate_hz * self.duration_sec).floor();
        if requested > MAX_SAMPLES as f64 {
            return Err(Error::invalid("sample_count", requested));
        }
        positive("amplitude", self.amplitude)?;
        if self.waveform.is_periodic() {
            positive("frequency_hz", self.frequency_hz)?;
        }
        Ok(())
    }

    /// Number of samples a generation pass produces: `floor(rate · duration)`.
    ///
    /// Only meaningful once [`validate`](Self::validate) has passed.
    pub fn sample_count(&self) -> usize {
        (self.sample_rate_hz * self.duration_sec).floor() as usize
    }
}

fn positive(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::invalid(name, value))
    }
}

/// A sampled signal: a time axis and the amplitude at each instant.
///
/// `times` and `samples` always have the same length, and
/// `times[i] == i / sample_rate`.
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    sample_rate: f64,
    times: Vec<f64>,
    samples: Vec<f64>,
}

impl Signal {
    /// Wraps raw samples, rebuilding the time axis from the sample rate.
    ///
    /// Fails with `InvalidParameter` when the rate is not a positive finite
    /// number, or when any sample is NaN or infinite.
    pub fn from_samples(sample_rate: f64, samples: Vec<f64>) -> Result<Self> {
        positive("sample_rate_hz", sample_rate)?;
        if let Some(bad) = samples.iter().find(|s| !s.is_finite()) {
            return Err(Error::invalid("samples", *bad));
        }
        let times = (0..samples.len())
            .map(|i| i as f64 / sample_rate)
            .collect();
        Ok(Self {
            sample_rate,
            times,
            samples,
        })
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Covered time span in seconds (`len / sample_rate`).
    pub fn duration(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate
    }

    /// Largest absolute sample value, 0.0 for an empty signal.
    pub fn peak(&self) -> f64 {
        self.samples.iter().fold(0.0_f64, |acc, s| acc.max(s.abs()))
    }

    /// Iterates `(time, amplitude)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.times.iter().copied().zip(self.samples.iter().copied())
    }
}

/// Generates a signal with the thread-local RNG for noise.
///
/// # Examples
///
/// ```
/// use wavegen::{SignalParameters, Waveform, generate};
///
/// let params = SignalParameters::new(Waveform::Sine, 1000.0, 1.0, 8000.0, 1.0);
/// let signal = generate(&params).unwrap();
/// assert_eq!(signal.len(), 8000);
/// assert!(signal.samples()[0].abs() < 1e-12);
/// ```
pub fn generate(params: &SignalParameters) -> Result<Signal> {
    generate_with_rng(params, rand::thread_rng())
}

/// Generates a signal, drawing noise samples from `rng`.
///
/// The RNG is only consulted for `WhiteNoise`; periodic waveforms are
/// fully determined by the parameters.
pub fn generate_with_rng<R: Rng>(params: &SignalParameters, rng: R) -> Result<Signal> {
    params.validate()?;

    let fs = params.sample_rate_hz;
    let f = params.frequency_hz;
    let a = params.amplitude;
    let mut samples = vec![0.0; params.sample_count()];

    match params.waveform {
        Waveform::Sine => SineOscillator::new(f, a, fs).process(&mut samples),
        Waveform::Square => SquareOscillator::new(f, a, fs).process(&mut samples),
        Waveform::Sawtooth => SawtoothOscillator::new(f, a, fs).process(&mut samples),
        Waveform::Triangle => TriangleOscillator::new(f, a, fs).process(&mut samples),
        Waveform::WhiteNoise => WhiteNoise::new(a, rng).process(&mut samples),
    }

    debug!(
        waveform = %params.waveform,
        samples = samples.len(),
        sample_rate = fs,
        "generated signal"
    );

    Signal::from_samples(fs, samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn params(waveform: Waveform, f: f64, a: f64, fs: f64, dur: f64) -> SignalParameters {
        SignalParameters::new(waveform, f, a, fs, dur)
    }

    #[test]
    fn test_length_matches_floor_rate_times_duration() {
        for waveform in Waveform::ALL {
            for (fs, dur) in [(8000.0, 1.0), (44100.0, 0.1), (1000.0, 0.2505), (96000.0, 0.5)] {
                let p = params(waveform, 440.0, 1.0, fs, dur);
                let signal = generate(&p).unwrap();
                let expected = (fs * dur).floor() as usize;
                assert_eq!(signal.len(), expected, "{waveform} {fs} {dur}");
                assert_eq!(signal.times().len(), expected);
            }
        }
    }

    #[test]
    fn test_time_axis() {
        let signal = generate(&params(Waveform::Sine, 10.0, 1.0, 1000.0, 1.0)).unwrap();
        assert_eq!(signal.times()[0], 0.0);
        assert!((signal.times()[1] - 0.001).abs() < 1e-15);
        // Half-open: the duration endpoint is excluded
        assert!(*signal.times().last().unwrap() < 1.0);
        assert!((signal.times()[999] - 0.999).abs() < 1e-12);
    }

    #[test]
    fn test_sine_starts_at_zero_and_repeats() {
        let signal = generate(&params(Waveform::Sine, 1000.0, 1.0, 8000.0, 1.0)).unwrap();
        let s = signal.samples();
        assert!(s[0].abs() < 1e-12);
        // 8 samples per period
        for i in 0..100 {
            assert!((s[i] - s[i + 8]).abs() < 1e-9);
        }
        assert!((s[2] - 1.0).abs() < 1e-9);
    }

    fn periodic_formula(waveform: Waveform, i: usize, period: usize) -> f64 {
        let r = (i % period) as f64 / period as f64;
        match waveform {
            Waveform::Sine => (2.0 * std::f64::consts::PI * r).sin(),
            Waveform::Square => {
                if (i % period) < period / 2 {
                    1.0
                } else {
                    -1.0
                }
            }
            Waveform::Sawtooth => 2.0 * r - 1.0,
            Waveform::Triangle => {
                if r < 0.5 {
                    4.0 * r - 1.0
                } else {
                    3.0 - 4.0 * r
                }
            }
            Waveform::WhiteNoise => unreachable!(),
        }
    }

    #[test]
    fn test_periodic_waveforms_match_formula_at_integer_periods() {
        // (f, fs, samples per period)
        for (f, fs, period) in [(1000.0, 96000.0, 96), (100.0, 8000.0, 80)] {
            for waveform in Waveform::ALL.into_iter().filter(|w| w.is_periodic()) {
                let signal = generate(&params(waveform, f, 1.0, fs, 1.0)).unwrap();
                for (i, &s) in signal.samples().iter().enumerate() {
                    let expected = periodic_formula(waveform, i, period);
                    assert!(
                        (s - expected).abs() < 1e-9,
                        "{waveform} f={f} fs={fs} sample {i}: {s} vs {expected}"
                    );
                }
            }

            let saw = generate(&params(Waveform::Sawtooth, f, 1.0, fs, 1.0)).unwrap();
            for start in (0..saw.len()).step_by(period) {
                assert_eq!(saw.samples()[start], -1.0, "period start {start}");
            }
        }
    }

    #[test]
    fn test_square_is_plus_minus_amplitude() {
        let signal = generate(&params(Waveform::Square, 10.0, 1.0, 1000.0, 1.0)).unwrap();
        assert!(
            signal
                .samples()
                .iter()
                .all(|&s| (s - 1.0).abs() < 1e-12 || (s + 1.0).abs() < 1e-12)
        );
    }

    #[test]
    fn test_amplitude_scaling() {
        for waveform in Waveform::ALL {
            let signal = generate(&params(waveform, 100.0, 0.25, 8000.0, 0.5)).unwrap();
            assert!(signal.peak() <= 0.25 + 1e-12, "{waveform}");
        }
    }

    #[test]
    fn test_sawtooth_and_triangle_differ() {
        let saw = generate(&params(Waveform::Sawtooth, 100.0, 1.0, 8000.0, 0.1)).unwrap();
        let tri = generate(&params(Waveform::Triangle, 100.0, 1.0, 8000.0, 0.1)).unwrap();
        assert_ne!(saw.samples(), tri.samples());
        // Triangle peaks mid-period, sawtooth is still at zero there
        assert!((tri.samples()[40] - 1.0).abs() < 1e-9);
        assert!(saw.samples()[40].abs() < 1e-9);
    }

    #[test]
    fn test_noise_ignores_frequency() {
        let p = params(Waveform::WhiteNoise, -5.0, 1.0, 1000.0, 1.0);
        assert!(generate(&p).is_ok());
    }

    #[test]
    fn test_noise_bounded_with_small_mean() {
        let p = params(Waveform::WhiteNoise, 0.0, 1.0, 10000.0, 1.0);
        let signal = generate_with_rng(&p, StdRng::seed_from_u64(1234)).unwrap();
        assert_eq!(signal.len(), 10000);
        assert!(signal.samples().iter().all(|s| (-1.0..=1.0).contains(s)));
        let mean = signal.samples().iter().sum::<f64>() / signal.len() as f64;
        // Std of the mean is 1/sqrt(3 * 10000) ~= 0.0058
        assert!(mean.abs() < 0.03, "mean {mean}");
    }

    #[test]
    fn test_invalid_parameters() {
        let cases = [
            (params(Waveform::Sine, 0.0, 1.0, 1000.0, 1.0), "frequency_hz"),
            (params(Waveform::Square, -1.0, 1.0, 1000.0, 1.0), "frequency_hz"),
            (params(Waveform::Sine, 10.0, 0.0, 1000.0, 1.0), "amplitude"),
            (params(Waveform::Sine, 10.0, 1.0, 0.0, 1.0), "sample_rate_hz"),
            (params(Waveform::Sine, 10.0, 1.0, 1000.0, -2.0), "duration_sec"),
            (params(Waveform::WhiteNoise, 10.0, -1.0, 1000.0, 1.0), "amplitude"),
            (params(Waveform::Sine, f64::NAN, 1.0, 1000.0, 1.0), "frequency_hz"),
            (params(Waveform::Sine, 10.0, 1.0, f64::INFINITY, 1.0), "sample_rate_hz"),
        ];
        for (p, field) in cases {
            match generate(&p) {
                Err(Error::InvalidParameter { name, .. }) => assert_eq!(name, field),
                other => panic!("Expected InvalidParameter({field}), got {other:?}"),
            }
        }
    }

    #[test]
    fn test_oversized_request_is_rejected_before_allocating() {
        let cases = [
            params(Waveform::Sine, 10.0, 1.0, 1e300, 1.0),
            params(Waveform::Sine, 10.0, 1.0, 1e12, 1.0),
            params(Waveform::WhiteNoise, 10.0, 1.0, 96000.0, 1e6),
        ];
        for p in cases {
            match generate(&p) {
                Err(Error::InvalidParameter { name, value }) => {
                    assert_eq!(name, "sample_count");
                    assert!(value > MAX_SAMPLES as f64);
                }
                other => panic!("Expected InvalidParameter(sample_count), got {other:?}"),
            }
        }
    }

    #[test]
    fn test_max_samples_is_allowed() {
        let p = params(Waveform::Sine, 10.0, 1.0, MAX_SAMPLES as f64, 1.0);
        assert!(p.validate().is_ok());
        let p = params(Waveform::Sine, 10.0, 1.0, MAX_SAMPLES as f64 + 1.0, 1.0);
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_sub_sample_duration_is_empty() {
        let signal = generate(&params(Waveform::Sine, 10.0, 1.0, 1000.0, 0.0005)).unwrap();
        assert!(signal.is_empty());
    }

    #[test]
    fn test_waveform_parsing() {
        assert_eq!("Sine".parse::<Waveform>().unwrap(), Waveform::Sine);
        assert_eq!("SAW".parse::<Waveform>().unwrap(), Waveform::Sawtooth);
        assert_eq!("white-noise".parse::<Waveform>().unwrap(), Waveform::WhiteNoise);
        assert!(matches!(
            "pulse".parse::<Waveform>(),
            Err(Error::UnknownWaveform(_))
        ));
        for waveform in Waveform::ALL {
            assert_eq!(waveform.to_string().parse::<Waveform>().unwrap(), waveform);
        }
    }

    #[test]
    fn test_signal_accessors() {
        let signal = Signal::from_samples(4.0, vec![0.5, -2.0, 1.0]).unwrap();
        assert_eq!(signal.times(), &[0.0, 0.25, 0.5]);
        assert_eq!(signal.peak(), 2.0);
        assert_eq!(signal.duration(), 0.75);
        let pairs: Vec<_> = signal.iter().collect();
        assert_eq!(pairs[1], (0.25, -2.0));
    }

    #[test]
    fn test_from_samples_rejects_bad_rate() {
        for rate in [0.0, -8000.0, f64::NAN, f64::INFINITY] {
            match Signal::from_samples(rate, vec![0.1, 0.2]) {
                Err(Error::InvalidParameter { name, .. }) => assert_eq!(name, "sample_rate_hz"),
                other => panic!("Expected InvalidParameter for rate {rate}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_from_samples_rejects_non_finite_samples() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            match Signal::from_samples(1000.0, vec![0.1, bad, 0.2]) {
                Err(Error::InvalidParameter { name, .. }) => assert_eq!(name, "samples"),
                other => panic!("Expected InvalidParameter for sample {bad}, got {other:?}"),
            }
        }
        assert!(Signal::from_samples(1000.0, Vec::new()).unwrap().is_empty());
    }
}
