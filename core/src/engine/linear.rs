//! The linear sequence step: rank-1 collections compared element by element.

use super::{Comparands, Engine, EquivalencyStep, StepResult};
use crate::context::ValidationContext;
use crate::report::{EquivError, Failure};
use crate::value::Value;

/// Handles `Seq` values and arrays of rank 0 or 1, so callers never need to
/// re-wrap a low-rank array as a sequence.
pub struct LinearStep;

fn linear_view(value: &Value) -> Option<&[Value]> {
    match value {
        Value::Seq(items) => Some(items),
        Value::Array(array) if array.rank() <= 1 => Some(array.elements()),
        _ => None,
    }
}

impl EquivalencyStep for LinearStep {
    fn handle(
        &self,
        comparands: Comparands<'_>,
        ctx: &ValidationContext,
        engine: &mut Engine<'_>,
    ) -> Result<StepResult, EquivError> {
        let Some(expected_items) = linear_view(comparands.expected) else {
            return Ok(StepResult::ContinueToNextStep);
        };

        let Some(actual_items) = linear_view(comparands.actual) else {
            let actual_kind = comparands.actual.kind();
            let expected_kind = comparands.expected.kind();
            engine
                .scope()
                .for_condition(false)
                .fail_with(|| Failure::KindMismatch {
                    path: ctx.path(),
                    expected: expected_kind,
                    actual: actual_kind,
                })?;
            return Ok(StepResult::AssertionCompleted);
        };

        engine
            .scope()
            .for_condition(actual_items.len() == expected_items.len())
            .fail_with(|| Failure::LengthMismatch {
                path: ctx.path(),
                expected_len: expected_items.len(),
                actual_len: actual_items.len(),
            })?;

        // A length mismatch does not stop element comparison; the common
        // prefix is still walked so all differences surface in one pass.
        for (index, (actual_item, expected_item)) in
            actual_items.iter().zip(expected_items).enumerate()
        {
            let child = ctx.as_collection_item(&index.to_string());
            engine.compare_recursively(
                Comparands {
                    actual: actual_item,
                    expected: expected_item,
                },
                &child,
            )?;
        }

        Ok(StepResult::AssertionCompleted)
    }
}
