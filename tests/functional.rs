//! Behavioral tests for the functor toolkit: the algebraic identities each
//! functor promises, and the ordering/predicate laws the sparse iteration
//! layer relies on.

use spindrift::functional::{
    BinaryFn, CoordinateOrdering, DiagonalIndex, DivideValue, IsValidCooIndex, IsValidEllIndex,
    OccupiedDiagonal, PlusValue, SpeedThreshold, UnaryFn,
};

#[test]
fn plus_and_divide_constants_match_scalar_arithmetic() {
    let samples = [-4.0f64, -0.5, 0.0, 0.25, 3.0, 1e9];
    let constants = [-2.0f64, 0.5, 7.0];

    for &v in &constants {
        let add = PlusValue::new(v);
        let div = DivideValue::new(v);
        for &x in &samples {
            assert_eq!(add.call(x), x + v);
            assert_eq!(div.call(x), x / v);
        }
    }
}

#[test]
fn occupied_diagonal_offsets_by_row_count() {
    for &rows in &[1i64, 4, 100] {
        let diag = OccupiedDiagonal::new(rows);
        for i in 0..rows {
            for j in 0..rows {
                let d = diag.call((i, j));
                assert_eq!(d, j - i + rows);
                // in-bounds coordinates always land on a non-negative diagonal
                assert!(d >= 0);
            }
        }
    }

    // the main diagonal of a 10-row matrix is diagonal 10
    assert_eq!(OccupiedDiagonal::new(10i32).call((3, 3)), 10);
    // subdiagonals sit below it, superdiagonals above
    assert_eq!(OccupiedDiagonal::new(10i32).call((3, 0)), 7);
    assert_eq!(OccupiedDiagonal::new(10i32).call((0, 3)), 13);
}

#[test]
fn diagonal_index_linearizes_diagonal_major_buffers() {
    let idx = DiagonalIndex::new(16i32);

    assert_eq!(idx.call((0, 0)), 0);
    assert_eq!(idx.call((5, 0)), 5);
    assert_eq!(idx.call((5, 2)), 37);

    for row in 0..16i64 {
        for diag in 0..8i64 {
            assert_eq!(DiagonalIndex::new(16i64).call((row, diag)), diag * 16 + row);
        }
    }
}

#[test]
fn ell_predicate_rejects_out_of_bounds_rows_and_empty_slots() {
    let valid = IsValidEllIndex::new(4i32);

    assert!(valid.call((0, 0)));
    assert!(valid.call((3, 7)));

    // padded slot sentinel
    assert!(!valid.call((0, -1)));
    assert!(!valid.call((3, -1)));
    // row out of bounds
    assert!(!valid.call((4, 0)));
    assert!(!valid.call((100, 2)));

    // exhaustive over a small window: false exactly when row >= rows or col == -1
    for i in 0..6i32 {
        for j in -1..6i32 {
            assert_eq!(valid.call((i, j)), i < 4 && j != -1);
        }
    }
}

#[test]
fn coo_predicate_requires_in_bounds_indices_and_nonzero_value() {
    let valid = IsValidCooIndex::new(3i64, 4i64);

    assert!(valid.call((0, 0, 1.0f64)));
    assert!(valid.call((2, 3, -0.5f64)));

    // zero values are dead entries
    assert!(!valid.call((1, 1, 0.0f64)));
    // either index out of range kills the entry
    assert!(!valid.call((-1, 0, 1.0f64)));
    assert!(!valid.call((3, 0, 1.0f64)));
    assert!(!valid.call((0, -1, 1.0f64)));
    assert!(!valid.call((0, 4, 1.0f64)));

    for i in -1..4i64 {
        for j in -1..5i64 {
            for &v in &[0.0f64, 2.0] {
                let expected = (0..3).contains(&i) && (0..4).contains(&j) && v != 0.0;
                assert_eq!(valid.call((i, j, v)), expected);
            }
        }
    }
}

#[test]
fn coordinate_ordering_is_a_strict_weak_order() {
    let cmp = CoordinateOrdering;
    let coords: Vec<(i32, i32)> = vec![
        (0, 0),
        (0, 1),
        (0, 5),
        (1, 0),
        (1, 1),
        (2, 0),
        (2, 2),
        (5, 1),
    ];

    // irreflexive
    for &a in &coords {
        assert!(!cmp.call(a, a));
    }

    // transitive, and consistent with lexicographic comparison
    for &a in &coords {
        for &b in &coords {
            assert_eq!(cmp.call(a, b), a < b);
            for &c in &coords {
                if cmp.call(a, b) && cmp.call(b, c) {
                    assert!(cmp.call(a, c));
                }
            }
        }
    }

    // antisymmetric for distinct pairs
    for &a in &coords {
        for &b in &coords {
            if a != b {
                assert_ne!(cmp.call(a, b), cmp.call(b, a));
            }
        }
    }
}

#[test]
fn speed_threshold_matches_its_cost_model() {
    let decide = SpeedThreshold::new(100, 0.5, 10);

    // 0.5 * 60 < 100
    assert!(decide.call(40));
    // 0.5 * 5 < 100
    assert!(decide.call(95));
    // remaining below the breakeven floor
    assert!(decide.call(99));

    // both sub-conditions false: 2.0 * 100 >= 100 and 100 >= 0
    let decide = SpeedThreshold::new(100, 2.0, 0);
    assert!(!decide.call(0));

    // crossing point for the speed condition: 2.0 * remaining < 100
    let decide = SpeedThreshold::new(100, 2.0, 0);
    assert!(!decide.call(50));
    assert!(decide.call(51));
}

#[test]
fn speed_threshold_answers_false_past_the_last_row() {
    // consumed counts beyond the total must not panic; the remainder wraps
    // and neither sub-condition can hold
    let decide = SpeedThreshold::new(100, 0.5, 10);

    assert!(!decide.call(101));
    assert!(!decide.call(150));

    // at exactly the last row nothing remains and the handoff is free
    assert!(decide.call(100));
}
