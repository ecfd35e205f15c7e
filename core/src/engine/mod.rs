//! Core equivalency engine.
//!
//! Provides the main entry points [`verify`]/[`try_verify`] for comparing two
//! values and producing an [`EquivalencyReport`] of every difference.
//!
//! ## Module Structure
//!
//! - `shape`: Shape compatibility validation for multi-dimensional arrays
//! - `multidim`: The multi-dimensional array step (index enumeration and
//!   per-element delegation)
//! - `linear`: The linear sequence step (rank-1 collections)
//! - `map_members`: The map/member step (named-member union and triage)
//! - `scalar`: The terminal scalar step
//!
//! Comparands flow through an ordered pipeline of steps; the first step that
//! takes ownership of a node completes it, others decline with
//! [`StepResult::ContinueToNextStep`]. Element mismatches never abort the
//! walk; the engine reports every difference in one pass.

mod linear;
mod map_members;
mod multidim;
mod scalar;
mod shape;

use crate::config::{EquivOptions, LimitBehavior};
use crate::context::ValidationContext;
use crate::report::{EquivError, EquivalencyReport, EquivalencySummary};
use crate::scope::AssertionScope;
use crate::sink::FailureSink;
use crate::value::Value;

pub use linear::LinearStep;
pub use map_members::MapMemberStep;
pub use multidim::MultiDimArrayStep;
pub use scalar::ScalarStep;

/// The pair of values under comparison at one recursion point.
#[derive(Debug, Clone, Copy)]
pub struct Comparands<'v> {
    pub actual: &'v Value,
    pub expected: &'v Value,
}

/// Outcome of offering comparands to one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    /// The step does not own this kind of node; try the next step.
    ContinueToNextStep,
    /// The step fully handled the node (failures, if any, are recorded).
    AssertionCompleted,
}

/// One stage of the comparison pipeline.
pub trait EquivalencyStep {
    fn handle(
        &self,
        comparands: Comparands<'_>,
        ctx: &ValidationContext,
        engine: &mut Engine<'_>,
    ) -> Result<StepResult, EquivError>;
}

/// The standard pipeline, in dispatch order.
pub fn standard_pipeline() -> &'static [&'static (dyn EquivalencyStep + Sync)] {
    static PIPELINE: [&(dyn EquivalencyStep + Sync); 4] = [
        &MultiDimArrayStep,
        &LinearStep,
        &MapMemberStep,
        &ScalarStep,
    ];
    &PIPELINE
}

/// The recursive validator: owns the scope and drives the step pipeline.
#[derive(Debug)]
pub struct Engine<'o> {
    options: &'o EquivOptions,
    scope: AssertionScope<'o>,
}

impl<'o> Engine<'o> {
    pub fn new(options: &'o EquivOptions) -> Engine<'o> {
        Engine {
            options,
            scope: AssertionScope::new(options),
        }
    }

    pub fn options(&self) -> &EquivOptions {
        self.options
    }

    pub fn scope(&mut self) -> &mut AssertionScope<'o> {
        &mut self.scope
    }

    /// Compare one pair of values, dispatching through the step pipeline.
    ///
    /// Re-entrant: steps call back into this for nested elements and
    /// members. Depth beyond `max_depth` is not descended into; the report
    /// is marked incomplete instead.
    pub fn compare_recursively(
        &mut self,
        comparands: Comparands<'_>,
        ctx: &ValidationContext,
    ) -> Result<(), EquivError> {
        if ctx.depth() > self.options.max_depth as usize {
            self.scope.mark_incomplete(format!(
                "recursion depth limit of {} reached at {}; deeper values were not compared",
                self.options.max_depth,
                ctx.path()
            ));
            return Ok(());
        }

        for step in standard_pipeline() {
            match step.handle(comparands, ctx, self)? {
                StepResult::AssertionCompleted => return Ok(()),
                StepResult::ContinueToNextStep => {}
            }
        }

        // The scalar step is terminal, so falling through means a step
        // declined a node it claims to own.
        Err(EquivError::InternalError {
            message: format!("no equivalency step handled the value at {}", ctx.path()),
        })
    }

    pub fn into_report(self) -> EquivalencyReport {
        self.scope.into_report()
    }
}

/// Compare `actual` against `expected` and return a report of every
/// difference.
///
/// Infallible: a failure-limit overflow in [`LimitBehavior::ReturnError`]
/// mode is downgraded to a truncated, incomplete report. Use [`try_verify`]
/// to surface it as an error instead.
pub fn verify(actual: &Value, expected: &Value, options: &EquivOptions) -> EquivalencyReport {
    let mut downgraded = options.clone();
    downgraded.on_limit_exceeded = LimitBehavior::ReturnPartialResult;
    match try_verify(actual, expected, &downgraded) {
        Ok(report) => report,
        Err(e) => EquivalencyReport::with_partial_result(Vec::new(), e.to_string()),
    }
}

/// Compare `actual` against `expected`, honoring `on_limit_exceeded`.
pub fn try_verify(
    actual: &Value,
    expected: &Value,
    options: &EquivOptions,
) -> Result<EquivalencyReport, EquivError> {
    let mut engine = Engine::new(options);
    engine.compare_recursively(Comparands { actual, expected }, &ValidationContext::root())?;
    Ok(engine.into_report())
}

/// Compare two values and stream every failure into `sink`, in walk order.
///
/// Failures are buffered in the scope during the walk and replayed into the
/// sink once the walk completes, so the emission order is deterministic.
pub fn try_verify_streaming<S: FailureSink>(
    actual: &Value,
    expected: &Value,
    options: &EquivOptions,
    sink: &mut S,
) -> Result<EquivalencySummary, EquivError> {
    let report = try_verify(actual, expected, options)?;
    let summary = report.summary();
    sink.begin()?;
    for failure in report.failures {
        sink.report(failure)?;
    }
    sink.finish()?;
    Ok(summary)
}
