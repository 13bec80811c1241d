//! Streaming sample source trait.
//!
//! A `Source` produces one sample at a time. Oscillators and noise
//! generators implement it, and `generate` drives them to fill a buffer.

/// Common interface for all sample sources.
///
/// The trait provides two fundamental operations:
/// - Single sample generation via `next_sample()`
/// - Batch processing via `process()`
pub trait Source {
    /// Generates the next sample from the source.
    ///
    /// # Returns
    ///
    /// A sample value within the source's amplitude bounds
    fn next_sample(&mut self) -> f64;

    /// Generates multiple samples into a buffer.
    ///
    /// Default implementation calls `next_sample()` for each element.
    ///
    /// # Arguments
    ///
    /// * `buffer` - Mutable slice to fill with samples
    fn process(&mut self, buffer: &mut [f64]) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter(f64);

    impl Source for Counter {
        fn next_sample(&mut self) -> f64 {
            self.0 += 1.0;
            self.0
        }
    }

    #[test]
    fn test_default_process_calls_next_sample() {
        let mut counter = Counter(0.0);
        let mut buffer = vec![0.0; 4];
        counter.process(&mut buffer);
        assert_eq!(buffer, vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_process_empty_buffer() {
        let mut counter = Counter(0.0);
        counter.process(&mut []);
        assert_eq!(counter.0, 0.0);
    }
}
