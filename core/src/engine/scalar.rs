//! The terminal scalar step: leaf values compared for equality.

use super::{Comparands, Engine, EquivalencyStep, StepResult};
use crate::context::ValidationContext;
use crate::report::{EquivError, Failure};
use crate::value::Value;

/// Always completes the node. Numeric comparison honors `float_tolerance`;
/// NaN compares equal to NaN so an expected NaN is assertable.
pub struct ScalarStep;

impl EquivalencyStep for ScalarStep {
    fn handle(
        &self,
        comparands: Comparands<'_>,
        ctx: &ValidationContext,
        engine: &mut Engine<'_>,
    ) -> Result<StepResult, EquivError> {
        let tolerance = engine.options().float_tolerance;
        let equal = scalar_equal(comparands.actual, comparands.expected, tolerance);
        engine
            .scope()
            .for_condition(equal)
            .fail_with(|| Failure::ValueMismatch {
                path: ctx.path(),
                expected: comparands.expected.clone(),
                actual: comparands.actual.clone(),
            })?;
        Ok(StepResult::AssertionCompleted)
    }
}

fn scalar_equal(actual: &Value, expected: &Value, tolerance: f64) -> bool {
    match (actual, expected) {
        (Value::Number(a), Value::Number(e)) => numbers_equal(*a, *e, tolerance),
        _ => actual == expected,
    }
}

fn numbers_equal(actual: f64, expected: f64, tolerance: f64) -> bool {
    if actual.is_nan() && expected.is_nan() {
        return true;
    }
    if actual == expected {
        return true;
    }
    (actual - expected).abs() <= tolerance
}
