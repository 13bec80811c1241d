//! Wavegen - basic waveform generation and spectrum analysis
//!
//! This library synthesizes sine, square, sawtooth, triangle and white noise
//! signals, computes their one-sided FFT magnitude spectrum, and exports
//! both to WAV and CSV files.
//!
//! ```
//! use wavegen::{SignalParameters, Waveform, generate, spectrum};
//!
//! let params = SignalParameters::new(Waveform::Square, 10.0, 1.0, 1000.0, 1.0);
//! let signal = generate(&params)?;
//! let spec = spectrum(&signal)?;
//! assert_eq!(signal.len(), 1000);
//! assert_eq!(spec.len(), 500);
//! # Ok::<(), wavegen::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod generator;
pub mod noise;
pub mod oscillators;
#[cfg(feature = "plot")]
pub mod plot;
pub mod signals;
pub mod spectrum;

// Re-export commonly used types at the crate root
pub use config::Config;
pub use error::{Error, Result};
pub use export::{export_signal_csv, export_spectrum_csv, export_wav, read_signal_csv};
pub use generator::{MAX_SAMPLES, Signal, SignalParameters, Waveform, generate, generate_with_rng};
pub use noise::WhiteNoise;
pub use oscillators::{SawtoothOscillator, SineOscillator, SquareOscillator, TriangleOscillator};
#[cfg(feature = "plot")]
pub use plot::{plot_signal, plot_spectrum};
pub use signals::Source;
pub use spectrum::{Spectrum, spectrum};
