//! Failures and reports produced by the equivalency engine.
//!
//! This module defines the types that represent detected differences:
//! - [`Failure`]: One reported difference (shape, member, or value level)
//! - [`EquivalencyReport`]: A versioned collection of failures
//! - [`EquivalencySummary`]: Run metadata emitted alongside streamed failures
//! - [`EquivError`]: Errors the engine itself can raise

use crate::error_codes;
use crate::value::{Value, ValueKind};
use thiserror::Error;

/// A single reported difference between the actual and expected values.
///
/// Each variant carries the rendered context `path` plus structured detail;
/// `Display` renders the human-readable message. The enum is marked
/// `#[non_exhaustive]` to allow future additions.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind")]
#[non_exhaustive]
pub enum Failure {
    /// A multi-dimensional array was compared against an absent value.
    ArrayComparedToAbsent { path: String },
    /// A multi-dimensional array was compared against a non-array value.
    ArrayComparedToNonArray { path: String, actual: ValueKind },
    /// The actual array's rank differs from the expected array's rank.
    RankMismatch {
        path: String,
        expected_rank: usize,
        actual_rank: usize,
    },
    /// One dimension of the actual array has the wrong length.
    DimensionLengthMismatch {
        path: String,
        dimension: usize,
        expected_len: usize,
        actual_len: usize,
    },
    /// A linear collection has the wrong number of items.
    LengthMismatch {
        path: String,
        expected_len: usize,
        actual_len: usize,
    },
    /// The actual value has a different runtime kind than expected.
    KindMismatch {
        path: String,
        expected: ValueKind,
        actual: ValueKind,
    },
    /// An expected map member is absent from the actual map.
    MemberMissing { path: String, name: String },
    /// The actual map carries a member the expected map does not.
    MemberUnexpected { path: String, name: String },
    /// Two scalar values are not equivalent.
    ValueMismatch {
        path: String,
        expected: Value,
        actual: Value,
    },
}

impl Failure {
    /// The rendered context path this failure was reported at.
    pub fn path(&self) -> &str {
        match self {
            Failure::ArrayComparedToAbsent { path }
            | Failure::ArrayComparedToNonArray { path, .. }
            | Failure::RankMismatch { path, .. }
            | Failure::DimensionLengthMismatch { path, .. }
            | Failure::LengthMismatch { path, .. }
            | Failure::KindMismatch { path, .. }
            | Failure::MemberMissing { path, .. }
            | Failure::MemberUnexpected { path, .. }
            | Failure::ValueMismatch { path, .. } => path,
        }
    }
}

impl std::fmt::Display for Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Failure::ArrayComparedToAbsent { path } => {
                write!(
                    f,
                    "{path}: cannot compare a multi-dimensional array to an absent value"
                )
            }
            Failure::ArrayComparedToNonArray { path, actual } => {
                write!(
                    f,
                    "{path}: cannot compare a multi-dimensional array to something else (found a {actual} value)"
                )
            }
            Failure::RankMismatch {
                path,
                expected_rank,
                actual_rank,
            } => {
                write!(
                    f,
                    "{path}: expected the array to have {expected_rank} dimension(s), but it has {actual_rank}"
                )
            }
            Failure::DimensionLengthMismatch {
                path,
                dimension,
                expected_len,
                actual_len,
            } => {
                write!(
                    f,
                    "{path}: expected dimension {dimension} to contain {expected_len} item(s), but found {actual_len}"
                )
            }
            Failure::LengthMismatch {
                path,
                expected_len,
                actual_len,
            } => {
                write!(
                    f,
                    "{path}: expected {expected_len} item(s), but found {actual_len}"
                )
            }
            Failure::KindMismatch {
                path,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{path}: expected a {expected} value, but found a {actual} value"
                )
            }
            Failure::MemberMissing { path, name } => {
                write!(f, "{path}: expected member '{name}', but it was missing")
            }
            Failure::MemberUnexpected { path, name } => {
                write!(f, "{path}: found unexpected member '{name}'")
            }
            Failure::ValueMismatch {
                path,
                expected,
                actual,
            } => {
                write!(f, "{path}: expected {expected}, but found {actual}")
            }
        }
    }
}

/// Errors raised by verification APIs.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EquivError {
    #[error(
        "[DEQ_CORE_001] failure limit exceeded: {count} failure(s) recorded (limit: {max}). Suggestion: raise `max_failures` or set `on_limit_exceeded` to `return_partial_result`."
    )]
    LimitsExceeded { count: usize, max: usize },

    #[error("[DEQ_CORE_002] sink error: {message}. Suggestion: check the output destination and retry.")]
    SinkError { message: String },

    #[error("[DEQ_CORE_003] internal error: {message}. Suggestion: report a bug with a minimal reproduction.")]
    InternalError { message: String },
}

impl EquivError {
    pub fn code(&self) -> &'static str {
        match self {
            EquivError::LimitsExceeded { .. } => error_codes::CORE_LIMITS_EXCEEDED,
            EquivError::SinkError { .. } => error_codes::CORE_SINK_ERROR,
            EquivError::InternalError { .. } => error_codes::CORE_INTERNAL_ERROR,
        }
    }
}

/// Run metadata emitted alongside streamed failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquivalencySummary {
    /// Whether the run completed without truncation or depth cut-offs.
    pub complete: bool,
    /// Warnings explaining why results are incomplete (when `complete == false`).
    pub warnings: Vec<String>,
    /// Total number of failures emitted.
    pub failure_count: usize,
}

/// A versioned collection of failures from one verification run.
///
/// # Incomplete results
///
/// Limit behaviors and the recursion guard can produce partial results. In
/// that case `complete == false` and `warnings` contains at least one
/// human-readable explanation.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EquivalencyReport {
    /// Schema version (currently "1").
    pub version: String,
    /// The reported failures, in walk order.
    pub failures: Vec<Failure>,
    /// Whether every reachable comparison was performed and recorded.
    #[serde(default = "default_complete")]
    pub complete: bool,
    /// Warnings generated during the run. Non-empty when limits were hit.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

fn default_complete() -> bool {
    true
}

impl EquivalencyReport {
    pub const SCHEMA_VERSION: &'static str = "1";

    pub fn new(failures: Vec<Failure>) -> EquivalencyReport {
        EquivalencyReport {
            version: Self::SCHEMA_VERSION.to_string(),
            failures,
            complete: true,
            warnings: Vec::new(),
        }
    }

    pub fn with_partial_result(failures: Vec<Failure>, warning: String) -> EquivalencyReport {
        EquivalencyReport {
            version: Self::SCHEMA_VERSION.to_string(),
            failures,
            complete: false,
            warnings: vec![warning],
        }
    }

    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
        self.complete = false;
    }

    /// `true` iff no failures were recorded and the run was complete.
    pub fn equivalent(&self) -> bool {
        self.complete && self.failures.is_empty()
    }

    pub fn summary(&self) -> EquivalencySummary {
        EquivalencySummary {
            complete: self.complete,
            warnings: self.warnings.clone(),
            failure_count: self.failures.len(),
        }
    }
}
