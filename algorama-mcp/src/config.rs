//! Server configuration from the environment

use algorama_catalog::{Sweep, DEFAULT_DERIVATIVE_STEP, DEFAULT_SAMPLES, DEFAULT_X_MAX, DEFAULT_X_MIN};
use algorama_core::Real;
use std::env;
use std::str::FromStr;

pub const ENV_X_MIN: &str = "ALGORAMA_X_MIN";
pub const ENV_X_MAX: &str = "ALGORAMA_X_MAX";
pub const ENV_SAMPLES: &str = "ALGORAMA_SAMPLES";
pub const ENV_DERIVATIVE_STEP: &str = "ALGORAMA_DERIVATIVE_STEP";

/// Defaults applied when a tool call leaves a parameter out
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ServerConfig {
    pub sweep: Sweep,
    pub derivative_step: Real,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            sweep: Sweep::default(),
            derivative_step: DEFAULT_DERIVATIVE_STEP,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Unparseable or inconsistent values fall back to the defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let x_min = parse_or(&lookup, ENV_X_MIN, DEFAULT_X_MIN);
        let x_max = parse_or(&lookup, ENV_X_MAX, DEFAULT_X_MAX);
        let samples = parse_or(&lookup, ENV_SAMPLES, DEFAULT_SAMPLES);

        let sweep = Sweep::new(x_min, x_max, samples).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "ignoring configured sweep");
            Sweep::default()
        });

        let mut derivative_step = parse_or(&lookup, ENV_DERIVATIVE_STEP, DEFAULT_DERIVATIVE_STEP);
        if !(derivative_step.is_finite() && derivative_step > 0.0) {
            tracing::warn!(value = derivative_step, "{} must be positive, using default", ENV_DERIVATIVE_STEP);
            derivative_step = DEFAULT_DERIVATIVE_STEP;
        }

        Self { sweep, derivative_step }
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + Copy,
{
    match lookup(key) {
        None => default,
        Some(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!(key, value = %raw, "unparseable setting, using default");
                default
            }
        },
    }
}
