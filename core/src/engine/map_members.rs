//! The map/member step: named members matched by key, then recursed into.

use super::{Comparands, Engine, EquivalencyStep, StepResult};
use crate::context::ValidationContext;
use crate::report::{EquivError, Failure};
use crate::value::Value;
use std::collections::BTreeSet;

pub struct MapMemberStep;

impl EquivalencyStep for MapMemberStep {
    fn handle(
        &self,
        comparands: Comparands<'_>,
        ctx: &ValidationContext,
        engine: &mut Engine<'_>,
    ) -> Result<StepResult, EquivError> {
        let Value::Map(expected_members) = comparands.expected else {
            return Ok(StepResult::ContinueToNextStep);
        };

        let Value::Map(actual_members) = comparands.actual else {
            let actual_kind = comparands.actual.kind();
            engine
                .scope()
                .for_condition(false)
                .fail_with(|| Failure::KindMismatch {
                    path: ctx.path(),
                    expected: comparands.expected.kind(),
                    actual: actual_kind,
                })?;
            return Ok(StepResult::AssertionCompleted);
        };

        let mut names: BTreeSet<&String> = BTreeSet::new();
        names.extend(expected_members.keys());
        names.extend(actual_members.keys());

        for name in names {
            match (actual_members.get(name), expected_members.get(name)) {
                (None, Some(_)) => {
                    engine
                        .scope()
                        .for_condition(false)
                        .fail_with(|| Failure::MemberMissing {
                            path: ctx.path(),
                            name: name.clone(),
                        })?;
                }
                (Some(_), None) => {
                    engine
                        .scope()
                        .for_condition(false)
                        .fail_with(|| Failure::MemberUnexpected {
                            path: ctx.path(),
                            name: name.clone(),
                        })?;
                }
                (Some(actual_member), Some(expected_member)) => {
                    let child = ctx.as_member(name);
                    engine.compare_recursively(
                        Comparands {
                            actual: actual_member,
                            expected: expected_member,
                        },
                        &child,
                    )?;
                }
                (None, None) => {}
            }
        }

        Ok(StepResult::AssertionCompleted)
    }
}
