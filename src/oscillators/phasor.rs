//! Sample-indexed phase for the periodic oscillators.

/// Tracks the sample index and derives the phase from it in closed form.
///
/// The phase of sample `i` is `frac(i · frequency / sample_rate)`. It is
/// recomputed per sample rather than accumulated, so a sample that falls
/// exactly on a period boundary gets phase 0.0 and never 0.999...
#[derive(Debug, Clone)]
pub(crate) struct Phasor {
    index: u64,
    frequency: f64,
    sample_rate: f64,
}

impl Phasor {
    pub(crate) fn new(frequency: f64, sample_rate: f64) -> Self {
        Self {
            index: 0,
            frequency,
            sample_rate,
        }
    }

    /// Phase of the current sample in [0.0, 1.0), then advances one sample.
    #[inline]
    pub(crate) fn next_phase(&mut self) -> f64 {
        let phase = (self.index as f64 * self.frequency / self.sample_rate).fract();
        self.index += 1;
        phase
    }
}
