// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod clock;
pub mod random;
pub mod routine;
pub mod schedule;
pub mod weight;

pub use clock::{Clock, FixedClock, SystemClock};
pub use random::{RandomSource, SequenceRandom, ThreadRandom};
pub use routine::RoutineGenerator;
pub use weight::WeightProjector;
