//! The multi-dimensional array step.
//!
//! Owns comparisons whose expected value is an array of rank 2 or higher.
//! Rank-1 and rank-0 arrays are declined and flow through the linear path,
//! as do plain sequences. When shapes are compatible, every index tuple of
//! the expected array is enumerated in row-major order and each element
//! pair is delegated back to the engine, tagged with its index-path label.

use super::{shape, Comparands, Engine, EquivalencyStep, StepResult};
use crate::context::ValidationContext;
use crate::cursor::IndexCursor;
use crate::indexing::indices_to_label;
use crate::report::EquivError;
use crate::value::Value;

pub struct MultiDimArrayStep;

impl EquivalencyStep for MultiDimArrayStep {
    fn handle(
        &self,
        comparands: Comparands<'_>,
        ctx: &ValidationContext,
        engine: &mut Engine<'_>,
    ) -> Result<StepResult, EquivError> {
        let Value::Array(expected) = comparands.expected else {
            return Ok(StepResult::ContinueToNextStep);
        };
        if expected.rank() < 2 {
            return Ok(StepResult::ContinueToNextStep);
        }

        if !shape::are_comparable(comparands.actual, expected, ctx, engine.scope())? {
            // Incompatible shapes were already reported; nothing to walk.
            return Ok(StepResult::AssertionCompleted);
        }

        // An empty cross-product is vacuously equal; no cursor is built.
        if expected.total_len() == 0 {
            return Ok(StepResult::AssertionCompleted);
        }

        let Value::Array(actual) = comparands.actual else {
            // Shape validation only passes for arrays.
            return Err(EquivError::InternalError {
                message: format!("shape-validated actual at {} is not an array", ctx.path()),
            });
        };

        let mut cursor = IndexCursor::new(expected.shape());
        loop {
            let indices = cursor.current_indices();
            let label = indices_to_label(&indices);
            let (Some(actual_element), Some(expected_element)) =
                (actual.get(&indices), expected.get(&indices))
            else {
                return Err(EquivError::InternalError {
                    message: format!(
                        "element [{label}] missing after shape validation at {}",
                        ctx.path()
                    ),
                });
            };

            let child = ctx.as_collection_item(&label);
            engine.compare_recursively(
                Comparands {
                    actual: actual_element,
                    expected: expected_element,
                },
                &child,
            )?;

            if !cursor.advance() {
                break;
            }
        }

        Ok(StepResult::AssertionCompleted)
    }
}
