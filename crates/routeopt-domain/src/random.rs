//! Random source abstraction
//!
//! The generator takes its random source as a parameter so callers can pin a
//! seed and make the output reproducible.

use rand::prelude::*;
use rand::rngs::SmallRng;
use std::cell::RefCell;

/// Provides uniformly distributed random values.
pub trait Random {
    /// Produces a real value uniformly distributed on the half-open
    /// interval [min, max)
    fn uniform_real(&self, min: f64, max: f64) -> f64;

    /// Picks an index uniformly from 0..len. `len` must be non-zero.
    fn pick_index(&self, len: usize) -> usize;
}

/// Default random implementation backed by a small fast RNG.
pub struct DefaultRandom {
    rng: RefCell<SmallRng>,
}

impl DefaultRandom {
    /// Create an entropy-seeded source
    pub fn new() -> Self {
        Self {
            rng: RefCell::new(SmallRng::from_entropy()),
        }
    }

    /// Create a seeded source for reproducible draws
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: RefCell::new(SmallRng::seed_from_u64(seed)),
        }
    }
}

impl Default for DefaultRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl Random for DefaultRandom {
    fn uniform_real(&self, min: f64, max: f64) -> f64 {
        if (min - max).abs() < f64::EPSILON {
            return min;
        }

        debug_assert!(min < max);
        self.rng.borrow_mut().gen_range(min..max)
    }

    fn pick_index(&self, len: usize) -> usize {
        debug_assert!(len > 0);
        self.rng.borrow_mut().gen_range(0..len)
    }
}
