//! Random source abstraction.
//!
//! The companion's dialog selection and the urgency reminder throttle both
//! draw randomness through this trait so tests can substitute a
//! deterministic source.

use rand::Rng;

/// A source of uniform random draws.
pub trait RandomSource {
    /// Uniform draw in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Uniform index in `[0, len)`. `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            clippy::cast_precision_loss
        )]
        let index = (self.next_f64() * len as f64) as usize;
        index.min(len - 1)
    }
}

/// Production source backed by the thread-local rand RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_f64(&mut self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Deterministic source that always returns the same value (useful for testing).
#[derive(Debug, Clone, Copy)]
pub struct FixedRandom(pub f64);

impl RandomSource for FixedRandom {
    fn next_f64(&mut self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_random_in_unit_range() {
        let mut rng = ThreadRandom;
        for _ in 0..100 {
            let v = rng.next_f64();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_pick_index_bounds() {
        assert_eq!(FixedRandom(0.0).pick_index(5), 0);
        assert_eq!(FixedRandom(0.5).pick_index(5), 2);
        // A draw arbitrarily close to 1.0 must still stay in range.
        assert_eq!(FixedRandom(0.999_999).pick_index(5), 4);
        assert_eq!(FixedRandom(1.0).pick_index(5), 4);
    }

    #[test]
    fn test_pick_index_single_candidate() {
        assert_eq!(FixedRandom(0.9).pick_index(1), 0);
    }
}
