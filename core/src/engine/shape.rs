//! Shape compatibility validation for multi-dimensional comparisons.

use crate::context::ValidationContext;
use crate::report::{EquivError, Failure};
use crate::scope::AssertionScope;
use crate::value::{NdArray, Value};

/// Check whether `actual` is an array whose shape matches `expected`.
///
/// Every violated condition is reported independently: an absent or
/// non-array actual gates the rest (shape checks are undefined without an
/// array to inspect), but a rank mismatch does not stop dimension checks,
/// and every mismatching dimension length is reported, so a single call can
/// surface several independent failures. Dimensions beyond the shorter rank
/// are not meaningful and are not reported.
pub(super) fn are_comparable(
    actual: &Value,
    expected: &NdArray,
    ctx: &ValidationContext,
    scope: &mut AssertionScope<'_>,
) -> Result<bool, EquivError> {
    if actual.is_null() {
        scope
            .for_condition(false)
            .fail_with(|| Failure::ArrayComparedToAbsent { path: ctx.path() })?;
        return Ok(false);
    }

    let Value::Array(actual) = actual else {
        let kind = actual.kind();
        scope
            .for_condition(false)
            .fail_with(|| Failure::ArrayComparedToNonArray {
                path: ctx.path(),
                actual: kind,
            })?;
        return Ok(false);
    };

    let rank_ok = scope
        .for_condition(actual.rank() == expected.rank())
        .fail_with(|| Failure::RankMismatch {
            path: ctx.path(),
            expected_rank: expected.rank(),
            actual_rank: actual.rank(),
        })?;

    let mut dims_ok = true;
    for dimension in 0..expected.rank().min(actual.rank()) {
        let expected_len = expected.shape()[dimension];
        let actual_len = actual.shape()[dimension];
        let ok = scope
            .for_condition(actual_len == expected_len)
            .fail_with(|| Failure::DimensionLengthMismatch {
                path: ctx.path(),
                dimension,
                expected_len,
                actual_len,
            })?;
        dims_ok &= ok;
    }

    Ok(rank_ok && dims_ok)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EquivOptions;

    fn array(shape: &[usize]) -> NdArray {
        let total: usize = shape.iter().product();
        NdArray::new(
            shape.to_vec(),
            (0..total).map(|v| Value::Number(v as f64)).collect(),
        )
        .expect("consistent shape")
    }

    fn check(actual: &Value, expected: &NdArray) -> (bool, Vec<Failure>) {
        let options = EquivOptions::default();
        let mut scope = AssertionScope::new(&options);
        let ok = are_comparable(actual, expected, &ValidationContext::root(), &mut scope)
            .expect("no limits in play");
        (ok, scope.failures().to_vec())
    }

    #[test]
    fn matching_shapes_are_comparable_without_failures() {
        let (ok, failures) = check(&Value::Array(array(&[2, 3])), &array(&[2, 3]));
        assert!(ok);
        assert!(failures.is_empty());
    }

    #[test]
    fn absent_actual_gates_all_other_checks() {
        let (ok, failures) = check(&Value::Null, &array(&[2, 3]));
        assert!(!ok);
        assert_eq!(failures.len(), 1);
        assert!(matches!(failures[0], Failure::ArrayComparedToAbsent { .. }));
    }

    #[test]
    fn non_array_actual_reports_only_the_kind_failure() {
        let (ok, failures) = check(&Value::Text("grid".into()), &array(&[2, 3]));
        assert!(!ok);
        assert_eq!(failures.len(), 1);
        assert!(matches!(
            failures[0],
            Failure::ArrayComparedToNonArray { .. }
        ));
    }

    #[test]
    fn rank_mismatch_still_checks_shared_dimensions() {
        let (ok, failures) = check(&Value::Array(array(&[3, 3, 1])), &array(&[2, 3]));
        assert!(!ok);
        assert_eq!(failures.len(), 2);
        assert!(matches!(
            failures[0],
            Failure::RankMismatch {
                expected_rank: 2,
                actual_rank: 3,
                ..
            }
        ));
        assert!(matches!(
            failures[1],
            Failure::DimensionLengthMismatch {
                dimension: 0,
                expected_len: 2,
                actual_len: 3,
                ..
            }
        ));
    }

    #[test]
    fn every_mismatching_dimension_is_reported() {
        let (ok, failures) = check(&Value::Array(array(&[1, 3, 5])), &array(&[2, 3, 4]));
        assert!(!ok);
        assert_eq!(failures.len(), 2);
        assert!(matches!(
            failures[0],
            Failure::DimensionLengthMismatch { dimension: 0, .. }
        ));
        assert!(matches!(
            failures[1],
            Failure::DimensionLengthMismatch { dimension: 2, .. }
        ));
    }
}
