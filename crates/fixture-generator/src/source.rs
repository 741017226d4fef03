//! Pluggable sources of uniform randomness.
//!
//! A [`RandomSource`] yields doubles that are expected to lie in `[0, 1)`.
//! The source cannot enforce that contract itself, so every consumer in this
//! crate validates the value it draws (see [`crate::random_between`]).

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Source of uniform doubles in `[0, 1)`.
pub trait RandomSource: Send + Sync {
    /// Draw the next double. Implementations should return `0.0 <= d < 1.0`.
    fn next_double(&self) -> f64;
}

impl<S: RandomSource + ?Sized> RandomSource for &S {
    fn next_double(&self) -> f64 {
        (**self).next_double()
    }
}

impl<S: RandomSource + ?Sized> RandomSource for Box<S> {
    fn next_double(&self) -> f64 {
        (**self).next_double()
    }
}

/// Default source backed by `rand`'s thread-local generator.
///
/// Each thread samples its own generator, so a single value can be shared
/// across threads without locking.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_double(&self) -> f64 {
        rand::rng().random::<f64>()
    }
}

/// Wraps a caller-supplied `rand` generator.
///
/// The generator sits behind a mutex; concurrent callers serialize on it.
#[derive(Debug)]
pub struct RngSource<R> {
    rng: Mutex<R>,
}

impl<R: RngCore + Send> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl RngSource<StdRng> {
    /// Create a reproducible source from a seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: RngCore + Send> RandomSource for RngSource<R> {
    fn next_double(&self) -> f64 {
        // A panic while holding the lock cannot leave an RNG half-updated.
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        rng.random::<f64>()
    }
}

/// Replays a fixed sequence of doubles, cycling when exhausted.
///
/// Values are returned as given, including out-of-contract ones, which makes
/// this source useful for exercising validation paths.
#[derive(Debug)]
pub struct SequenceSource {
    values: Vec<f64>,
    index: AtomicUsize,
}

impl SequenceSource {
    /// Create a source replaying `values`. An empty list behaves like `constant(0.0)`.
    pub fn new(mut values: Vec<f64>) -> Self {
        if values.is_empty() {
            values.push(0.0);
        }
        Self {
            values,
            index: AtomicUsize::new(0),
        }
    }

    /// A source that always returns `value`.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// `steps` evenly spaced values covering `[0, 1)`: `0, 1/steps, ..., (steps-1)/steps`.
    pub fn sweep(steps: usize) -> Self {
        let steps = steps.max(1);
        Self::new((0..steps).map(|i| i as f64 / steps as f64).collect())
    }

    /// Number of values drawn so far.
    pub fn draws(&self) -> usize {
        self.index.load(Ordering::SeqCst)
    }
}

impl Clone for SequenceSource {
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
            index: AtomicUsize::new(self.index.load(Ordering::SeqCst)),
        }
    }
}

impl RandomSource for SequenceSource {
    fn next_double(&self) -> f64 {
        let idx = self.index.fetch_add(1, Ordering::SeqCst);
        self.values[idx % self.values.len()]
    }
}
