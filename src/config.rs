// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.

use std::env;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_FRONTEND_URL: &str = "http://localhost:5173";
const DEFAULT_MAX_PREDICTION_DAYS: u32 = 365;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// Frontend origin allowed by CORS
    pub frontend_url: String,
    /// Echo internal error messages to clients in 500 responses.
    /// Leaks implementation details; keep off outside local development.
    pub expose_error_details: bool,
    /// Upper bound on `days_ahead` for weight projection
    pub max_prediction_days: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            frontend_url: DEFAULT_FRONTEND_URL.to_string(),
            expose_error_details: false,
            max_prediction_days: DEFAULT_MAX_PREDICTION_DAYS,
        }
    }
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            port: match lookup("PORT") {
                Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
                    name: "PORT",
                    value: raw,
                })?,
                None => DEFAULT_PORT,
            },
            frontend_url: lookup("FRONTEND_URL")
                .map(|v| v.trim().to_string())
                .unwrap_or_else(|| DEFAULT_FRONTEND_URL.to_string()),
            expose_error_details: match lookup("EXPOSE_ERROR_DETAILS") {
                Some(raw) => parse_flag("EXPOSE_ERROR_DETAILS", &raw)?,
                None => false,
            },
            max_prediction_days: match lookup("MAX_PREDICTION_DAYS") {
                Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
                    name: "MAX_PREDICTION_DAYS",
                    value: raw,
                })?,
                None => DEFAULT_MAX_PREDICTION_DAYS,
            },
        })
    }
}

fn parse_flag(name: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::Invalid {
            name,
            value: raw.to_string(),
        }),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}
