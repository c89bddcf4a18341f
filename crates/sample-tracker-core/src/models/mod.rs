//! Domain models for the sample tracker.

mod sample;

pub use sample::*;
