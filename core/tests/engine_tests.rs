mod common;

use common::{map, nd, num, seq, text};
use deep_equiv::{
    try_verify, verify, EquivOptions, Failure, LimitBehavior, Value,
};

#[test]
fn root_scalar_mismatch_is_reported_at_subject() {
    let report = verify(&num(1.0), &num(2.0), &EquivOptions::default());
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].path(), "subject");
}

#[test]
fn map_members_recurse_with_member_paths() {
    let expected = map(vec![
        ("grid", nd(&[2, 2], &[1.0, 2.0, 3.0, 4.0])),
        ("name", text("run-1")),
    ]);
    let actual = map(vec![
        ("grid", nd(&[2, 2], &[1.0, 2.0, 3.0, 9.0])),
        ("name", text("run-1")),
    ]);

    let report = verify(&actual, &expected, &EquivOptions::default());
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].path(), "grid[1,1]");
}

#[test]
fn missing_and_unexpected_members_both_surface() {
    let expected = map(vec![("a", num(1.0)), ("b", num(2.0))]);
    let actual = map(vec![("b", num(2.0)), ("c", num(3.0))]);

    let report = verify(&actual, &expected, &EquivOptions::default());
    assert_eq!(report.failures.len(), 2);
    assert!(matches!(
        &report.failures[0],
        Failure::MemberMissing { name, .. } if name == "a"
    ));
    assert!(matches!(
        &report.failures[1],
        Failure::MemberUnexpected { name, .. } if name == "c"
    ));
}

#[test]
fn sequence_length_mismatch_still_compares_the_common_prefix() {
    let expected = seq(&[1.0, 2.0, 3.0]);
    let actual = seq(&[1.0, 9.0, 3.0, 4.0]);

    let report = verify(&actual, &expected, &EquivOptions::default());
    assert_eq!(report.failures.len(), 2);
    assert!(matches!(
        report.failures[0],
        Failure::LengthMismatch {
            expected_len: 3,
            actual_len: 4,
            ..
        }
    ));
    assert_eq!(report.failures[1].path(), "item[1]");
}

#[test]
fn rank_one_array_and_sequence_are_interchangeable() {
    let expected = nd(&[3], &[1.0, 2.0, 3.0]);
    let actual = seq(&[1.0, 2.0, 3.0]);

    let report = verify(&actual, &expected, &EquivOptions::default());
    assert!(report.equivalent());
}

#[test]
fn jagged_sequences_flow_through_the_linear_path() {
    let expected = Value::Seq(vec![seq(&[1.0, 2.0]), seq(&[3.0])]);
    let actual = Value::Seq(vec![seq(&[1.0, 2.0]), seq(&[4.0])]);

    let report = verify(&actual, &expected, &EquivOptions::default());
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].path(), "item[1][0]");
}

#[test]
fn depth_limit_marks_report_incomplete_instead_of_failing() {
    let mut expected = num(1.0);
    let mut actual = num(1.0);
    for _ in 0..10 {
        expected = Value::Seq(vec![expected]);
        actual = Value::Seq(vec![actual]);
    }

    let options = EquivOptions::builder()
        .max_depth(3)
        .build()
        .expect("valid options");
    let report = verify(&actual, &expected, &options);
    assert!(!report.complete);
    assert!(!report.equivalent());
    assert!(report.warnings[0].contains("depth limit"));
    assert!(report.failures.is_empty());
}

#[test]
fn approximate_options_absorb_tiny_numeric_drift() {
    let expected = nd(&[2, 2], &[1.0, 2.0, 3.0, 4.0]);
    let actual = nd(&[2, 2], &[1.0 + 1e-12, 2.0, 3.0, 4.0 - 1e-12]);

    let exact = verify(&actual, &expected, &EquivOptions::exact());
    assert_eq!(exact.failures.len(), 2);

    let approximate = verify(&actual, &expected, &EquivOptions::approximate());
    assert!(approximate.equivalent());
}

#[test]
fn nan_elements_are_equivalent_to_nan() {
    let expected = nd(&[2, 1], &[f64::NAN, 1.0]);
    let actual = nd(&[2, 1], &[f64::NAN, 1.0]);

    let report = verify(&actual, &expected, &EquivOptions::default());
    assert!(report.equivalent());
}

#[test]
fn try_verify_surfaces_limit_overflow_as_an_error() {
    let expected = nd(&[2, 3], &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    let actual = nd(&[2, 3], &[9.0, 9.0, 9.0, 9.0, 9.0, 9.0]);

    let options = EquivOptions::builder()
        .max_failures(2)
        .on_limit_exceeded(LimitBehavior::ReturnError)
        .build()
        .expect("valid options");
    let err = try_verify(&actual, &expected, &options).expect_err("limit should trip");
    assert_eq!(err.code(), "DEQ_CORE_001");
}

#[test]
fn expected_map_against_scalar_actual_is_a_kind_mismatch() {
    let expected = map(vec![("a", num(1.0))]);
    let actual = num(1.0);

    let report = verify(&actual, &expected, &EquivOptions::default());
    assert_eq!(report.failures.len(), 1);
    assert!(matches!(report.failures[0], Failure::KindMismatch { .. }));
}
