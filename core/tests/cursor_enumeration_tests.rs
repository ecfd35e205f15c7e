use deep_equiv::{IndexCursor, indices_to_label, label_to_indices};
use std::collections::BTreeSet;

#[test]
fn shape_2x3_enumerates_in_documented_order() {
    let tuples: Vec<Vec<usize>> = IndexCursor::walk(&[2, 3]).collect();
    assert_eq!(
        tuples,
        vec![
            vec![0, 0],
            vec![0, 1],
            vec![0, 2],
            vec![1, 0],
            vec![1, 1],
            vec![1, 2],
        ]
    );
}

#[test]
fn tuple_count_is_the_product_of_the_shape() {
    let shapes: [&[usize]; 5] = [&[2, 3, 4], &[3, 1, 2], &[5], &[1, 1, 1, 1], &[4, 4]];
    for shape in shapes {
        let expected: usize = shape.iter().product();
        assert_eq!(
            IndexCursor::walk(shape).count(),
            expected,
            "shape {shape:?}"
        );
    }
}

#[test]
fn tuples_are_unique_and_cover_the_cross_product() {
    let shape = [3, 2, 4];
    let tuples: Vec<Vec<usize>> = IndexCursor::walk(&shape).collect();
    let distinct: BTreeSet<&Vec<usize>> = tuples.iter().collect();
    assert_eq!(distinct.len(), tuples.len());

    for tuple in &tuples {
        assert_eq!(tuple.len(), shape.len());
        for (idx, len) in tuple.iter().zip(shape.iter()) {
            assert!(idx < len, "tuple {tuple:?} out of bounds for {shape:?}");
        }
    }
}

#[test]
fn order_is_lexicographic_with_last_coordinate_fastest() {
    let tuples: Vec<Vec<usize>> = IndexCursor::walk(&[2, 3, 2]).collect();
    for pair in tuples.windows(2) {
        assert!(pair[0] < pair[1], "{:?} !< {:?}", pair[0], pair[1]);
    }

    // The innermost coordinate changes between every adjacent pair that
    // shares its outer coordinates.
    for pair in tuples.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        if prev[..2] == next[..2] {
            assert_eq!(next[2], prev[2] + 1);
        }
    }
}

#[test]
fn zero_length_dimension_enumerates_nothing() {
    assert_eq!(IndexCursor::walk(&[0, 5]).count(), 0);
    assert_eq!(IndexCursor::walk(&[5, 0]).count(), 0);
}

#[test]
fn a_fresh_cursor_restarts_from_scratch() {
    let shape = [2, 2, 3];
    let first: Vec<Vec<usize>> = IndexCursor::walk(&shape).collect();
    let second: Vec<Vec<usize>> = IndexCursor::walk(&shape).collect();
    assert_eq!(first, second);
}

#[test]
fn manual_do_while_consumption_matches_the_iterator() {
    let shape = [3, 2];
    let walked: Vec<Vec<usize>> = IndexCursor::walk(&shape).collect();

    let mut cursor = IndexCursor::new(&shape);
    let mut manual = Vec::new();
    loop {
        manual.push(cursor.current_indices());
        if !cursor.advance() {
            break;
        }
    }
    assert_eq!(manual, walked);
}

#[test]
fn labels_round_trip_for_every_tuple() {
    for tuple in IndexCursor::walk(&[2, 3, 2]) {
        let label = indices_to_label(&tuple);
        assert_eq!(label_to_indices(&label), Some(tuple));
    }
}
