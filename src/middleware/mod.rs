// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Middleware modules (security headers, panic recovery).

pub mod panic;
pub mod security;

pub use panic::panic_response;
pub use security::add_security_headers;
