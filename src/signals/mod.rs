//! Sample source abstraction.
//!
//! The `Source` trait is implemented by every oscillator and noise generator.

mod source;

pub use source::Source;
