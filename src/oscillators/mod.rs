//! Periodic oscillators.
//!
//! Each oscillator maps the phase of the current sample to a waveform in
//! [-amplitude, amplitude]. The phase comes from the sample index in closed
//! form (see `Phasor`), so sample `i` always matches the waveform at
//! `t = i / sample_rate`.

mod phasor;
mod sawtooth;
mod sine;
mod square;
mod triangle;

pub use sawtooth::SawtoothOscillator;
pub use sine::SineOscillator;
pub use square::SquareOscillator;
pub use triangle::TriangleOscillator;
