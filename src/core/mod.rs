//! Core utilities shared across features.

pub mod datetime;
pub mod random;
pub mod traits;

pub use random::{FixedRandom, RandomSource, ThreadRandom};
pub use traits::DueDated;
