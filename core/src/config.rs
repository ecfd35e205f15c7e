//! Configuration for the equivalency engine.
//!
//! `EquivOptions` centralizes comparison thresholds and limit behavior to
//! avoid hardcoded constants scattered throughout the codebase.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What to do when `max_failures` is reached mid-run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LimitBehavior {
    /// Stop recording further failures, add a warning, mark the report
    /// incomplete, and keep comparing.
    ReturnPartialResult,
    /// Abort the run with [`crate::EquivError::LimitsExceeded`].
    ReturnError,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EquivOptions {
    /// Maximum nesting depth the recursive walk descends to.
    #[serde(alias = "max_recursion_depth")]
    pub max_depth: u32,
    /// Maximum number of failures recorded in one run.
    pub max_failures: usize,
    /// Absolute tolerance applied to numeric comparisons.
    pub float_tolerance: f64,
    pub on_limit_exceeded: LimitBehavior,
}

impl Default for EquivOptions {
    fn default() -> Self {
        Self {
            max_depth: 32,
            max_failures: 1_024,
            float_tolerance: 0.0,
            on_limit_exceeded: LimitBehavior::ReturnPartialResult,
        }
    }
}

impl EquivOptions {
    /// Exact comparison: zero tolerance, the defaults.
    pub fn exact() -> Self {
        Self::default()
    }

    /// Numeric comparison with a small absolute tolerance.
    pub fn approximate() -> Self {
        Self {
            float_tolerance: 1e-9,
            ..Default::default()
        }
    }

    pub fn builder() -> EquivOptionsBuilder {
        EquivOptionsBuilder {
            inner: EquivOptions::default(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.float_tolerance.is_finite() || self.float_tolerance < 0.0 {
            return Err(ConfigError::InvalidTolerance {
                value: self.float_tolerance,
            });
        }
        if self.max_depth == 0 {
            return Err(ConfigError::NonPositiveLimit {
                field: "max_depth",
                value: 0,
            });
        }
        if self.max_failures == 0 {
            return Err(ConfigError::NonPositiveLimit {
                field: "max_failures",
                value: 0,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("float_tolerance must be finite and non-negative (got {value})")]
    InvalidTolerance { value: f64 },
    #[error("{field} must be greater than zero (got {value})")]
    NonPositiveLimit { field: &'static str, value: u64 },
}

#[derive(Debug, Clone)]
pub struct EquivOptionsBuilder {
    inner: EquivOptions,
}

impl Default for EquivOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EquivOptionsBuilder {
    pub fn new() -> Self {
        EquivOptions::builder()
    }

    pub fn max_depth(mut self, value: u32) -> Self {
        self.inner.max_depth = value;
        self
    }

    pub fn max_failures(mut self, value: usize) -> Self {
        self.inner.max_failures = value;
        self
    }

    pub fn float_tolerance(mut self, value: f64) -> Self {
        self.inner.float_tolerance = value;
        self
    }

    pub fn on_limit_exceeded(mut self, value: LimitBehavior) -> Self {
        self.inner.on_limit_exceeded = value;
        self
    }

    pub fn build(self) -> Result<EquivOptions, ConfigError> {
        self.inner.validate()?;
        Ok(self.inner)
    }
}
