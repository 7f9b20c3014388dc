//! Injectable source of uniform randomness.
//!
//! The drawing stages only ever need "a uniform float in `[0, 1)`". Keeping
//! that behind [`RandomSource`] lets callers use the thread RNG for normal
//! renders and a seeded [`StdRng`] for reproducible output.

use rand::Rng;
use rand::rngs::{StdRng, ThreadRng};

/// A stream of uniform floats in `[0, 1)`.
pub trait RandomSource {
    /// Next uniform value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Uniform value in `[low, high)`.
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        self.next_f64().mul_add(high - low, low)
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    fn index(&mut self, len: usize) -> usize {
        let i = (self.next_f64() * len as f64) as usize;
        i.min(len.saturating_sub(1))
    }
}

impl RandomSource for StdRng {
    fn next_f64(&mut self) -> f64 {
        self.random()
    }
}

impl RandomSource for ThreadRng {
    fn next_f64(&mut self) -> f64 {
        self.random()
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    /// Replays a fixed sequence of values, cycling when exhausted.
    struct Replay {
        values: Vec<f64>,
        pos: usize,
    }

    impl RandomSource for Replay {
        fn next_f64(&mut self) -> f64 {
            let v = self.values[self.pos % self.values.len()];
            self.pos += 1;
            v
        }
    }

    #[test]
    fn uniform_maps_unit_interval_onto_range() {
        let mut rng = Replay {
            values: vec![0.0, 0.5, 0.999],
            pos: 0,
        };
        assert!((rng.uniform(-8.0, 8.0) - -8.0).abs() < 1e-12);
        assert!(rng.uniform(-8.0, 8.0).abs() < 1e-12);
        assert!(rng.uniform(-8.0, 8.0) < 8.0);
    }

    #[test]
    fn index_stays_in_bounds() {
        let mut rng = Replay {
            values: vec![0.0, 0.999_999_999, 0.5],
            pos: 0,
        };
        assert_eq!(rng.index(10), 0);
        assert_eq!(rng.index(10), 9);
        assert_eq!(rng.index(10), 5);
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let (va, vb) = (a.next_f64(), b.next_f64());
            assert!((0.0..1.0).contains(&va));
            assert!(va.to_bits() == vb.to_bits());
        }
    }

    #[test]
    fn thread_rng_values_are_in_unit_interval() {
        let mut rng = rand::rng();
        for _ in 0..100 {
            assert!((0.0..1.0).contains(&rng.next_f64()));
        }
    }
}
