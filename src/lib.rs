// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Training App API: workout routine generation and weight projection
//!
//! This crate provides the backend API the training app frontend calls to
//! build a templated weekly routine from a fitness profile and to project
//! weight forward from recorded history.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use services::{Clock, RandomSource, RoutineGenerator, WeightProjector};
use std::sync::Arc;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub clock: Arc<dyn Clock>,
    pub routine_generator: RoutineGenerator,
    pub weight_projector: WeightProjector,
}

impl AppState {
    /// Wire the services around a clock and a random source.
    pub fn new(config: Config, clock: Arc<dyn Clock>, random: Arc<dyn RandomSource>) -> Self {
        Self {
            config,
            routine_generator: RoutineGenerator::new(clock.clone()),
            weight_projector: WeightProjector::new(clock.clone(), random),
            clock,
        }
    }
}
