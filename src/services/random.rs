// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Uniform random draws for the weight projection.

use rand::Rng;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Source of uniform draws in `[0, 1)`.
pub trait RandomSource: Send + Sync {
    fn next_unit(&self) -> f64;
}

/// Thread-local RNG from `rand`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_unit(&self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Replays a fixed list of draws, cycling when exhausted.
///
/// An empty list yields 0.5, which leaves the baseline unperturbed.
#[derive(Debug, Default)]
pub struct SequenceRandom {
    draws: Vec<f64>,
    next: AtomicUsize,
}

impl SequenceRandom {
    pub fn new(draws: Vec<f64>) -> Self {
        Self {
            draws,
            next: AtomicUsize::new(0),
        }
    }

    /// Every draw returns `value`.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for SequenceRandom {
    fn next_unit(&self) -> f64 {
        if self.draws.is_empty() {
            return 0.5;
        }
        let index = self.next.fetch_add(1, Ordering::Relaxed);
        self.draws[index % self.draws.len()]
    }
}
