//! Pluggable randomness for agent output.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use std::sync::{Arc, Mutex};

/// Uniform choices used by the agents.
pub trait RandomSource: Send {
    /// Index in `0..n`. Returns 0 when `n` is 0.
    fn below(&mut self, n: usize) -> usize;

    /// Value in `low..=high`.
    fn between(&mut self, low: u32, high: u32) -> u32;
}

impl<R: RngCore + Send> RandomSource for R {
    fn below(&mut self, n: usize) -> usize {
        if n == 0 { 0 } else { self.gen_range(0..n) }
    }

    fn between(&mut self, low: u32, high: u32) -> u32 {
        if high <= low {
            low
        } else {
            self.gen_range(low..=high)
        }
    }
}

/// Replays a fixed list of raw values, cycling when exhausted.
///
/// Each value is reduced into the requested range, so `0` always picks the
/// first choice or the lower bound.
#[derive(Debug, Clone)]
pub struct FixedSequence {
    values: Vec<u64>,
    pos: usize,
}

impl FixedSequence {
    pub fn new(values: Vec<u64>) -> Self {
        Self { values, pos: 0 }
    }

    fn next_raw(&mut self) -> u64 {
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.pos % self.values.len()];
        self.pos += 1;
        value
    }
}

impl RandomSource for FixedSequence {
    fn below(&mut self, n: usize) -> usize {
        let raw = self.next_raw();
        if n == 0 { 0 } else { (raw % n as u64) as usize }
    }

    fn between(&mut self, low: u32, high: u32) -> u32 {
        let raw = self.next_raw();
        if high <= low {
            low
        } else {
            low + (raw % (u64::from(high - low) + 1)) as u32
        }
    }
}

/// A random source shared by every agent tool.
pub type SharedRandom = Arc<Mutex<Box<dyn RandomSource>>>;

pub fn shared(source: impl RandomSource + 'static) -> SharedRandom {
    Arc::new(Mutex::new(Box::new(source)))
}

/// Seeded `StdRng` when `seed` is given, entropy-seeded otherwise.
pub fn from_seed(seed: Option<u64>) -> SharedRandom {
    match seed {
        Some(seed) => shared(StdRng::seed_from_u64(seed)),
        None => shared(StdRng::from_entropy()),
    }
}
