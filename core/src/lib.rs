//! Deep Equiv: a structural-equivalency engine for test assertions.
//!
//! This crate provides functionality for:
//! - Comparing runtime-typed values ([`Value`]) for deep structural equality
//! - Comparing rectangular N-rank arrays ([`NdArray`]) element by element,
//!   with shape validation and row-major index enumeration
//! - Accumulating every difference into an [`EquivalencyReport`] with
//!   human-readable failure paths (e.g. `item[1,2]`)
//! - Streaming failures to a sink and serializing reports to JSON
//!
//! # Quick Start
//!
//! ```
//! use deep_equiv::{verify, EquivOptions, NdArray, Value};
//!
//! # fn main() -> Result<(), deep_equiv::ArrayShapeError> {
//! let n = |v: f64| Value::Number(v);
//! let expected = Value::Array(NdArray::new(
//!     vec![2, 2],
//!     vec![n(1.0), n(2.0), n(3.0), n(4.0)],
//! )?);
//! let actual = Value::Array(NdArray::new(
//!     vec![2, 2],
//!     vec![n(1.0), n(2.0), n(3.0), n(5.0)],
//! )?);
//!
//! let report = verify(&actual, &expected, &EquivOptions::default());
//! assert!(!report.equivalent());
//! assert_eq!(report.failures.len(), 1);
//! assert_eq!(report.failures[0].path(), "item[1,1]");
//! # Ok(())
//! # }
//! ```

mod config;
mod context;
mod cursor;
mod engine;
pub(crate) mod error_codes;
mod indexing;
mod output;
mod report;
mod scope;
mod sink;
mod value;

pub use config::{ConfigError, EquivOptions, EquivOptionsBuilder, LimitBehavior};
pub use context::ValidationContext;
pub use cursor::{IndexCursor, IndexWalk};
pub use engine::{
    standard_pipeline, try_verify, try_verify_streaming, verify, Comparands, Engine,
    EquivalencyStep, LinearStep, MapMemberStep, MultiDimArrayStep, ScalarStep, StepResult,
};
pub use indexing::{indices_to_label, label_to_indices};
pub use output::json::{deserialize_report, report_to_failure_lines, serialize_report};
pub use output::json_lines::JsonLinesSink;
pub use report::{EquivError, EquivalencyReport, EquivalencySummary, Failure};
pub use scope::{AssertionScope, Condition};
pub use sink::{CallbackSink, FailureSink, VecSink};
pub use value::{ArrayShapeError, NdArray, Value, ValueKind};
