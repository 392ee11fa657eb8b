//! Functors over zipped streams: tuple combiners, coordinate comparators,
//! and the index predicates/projections used when iterating sparse formats.

use std::marker::PhantomData;

use num_traits::{PrimInt, Signed, Zero};

use super::value::{BinaryOp, Divides, EqualTo, NotEqualTo, Plus};
use super::{BinaryFn, UnaryFn};

/// Applies the operation tag `Op` across a 2-tuple: `f((a, b)) = a ⊕ b`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Combine<Op> {
    op: PhantomData<Op>,
}

impl<Op> Combine<Op> {
    #[inline]
    pub const fn new() -> Self {
        Self { op: PhantomData }
    }
}

impl<T, Op: BinaryOp<T>> UnaryFn<(T, T)> for Combine<Op> {
    type Output = Op::Output;

    #[inline]
    fn call(&self, t: (T, T)) -> Self::Output {
        Op::apply(t.0, t.1)
    }
}

/// `f((a, b)) = a + b`
pub type SumTuple = Combine<Plus>;
/// `f((a, b)) = a / b`
pub type DivideTuple = Combine<Divides>;
/// `f((a, b)) = a == b`
pub type EqualTuple = Combine<EqualTo>;
/// `f((a, b)) = a != b`
pub type NotEqualTuple = Combine<NotEqualTo>;

/// Lexicographic ordering over `(row, col)` coordinate pairs: row first,
/// then column. A strict weak ordering, suitable as a sort comparator for
/// coordinate-format entries.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CoordinateOrdering;

impl<I: Copy + Ord> BinaryFn<(I, I)> for CoordinateOrdering {
    type Output = bool;

    #[inline]
    fn call(&self, a: (I, I), b: (I, I)) -> bool {
        let (i1, j1) = a;
        let (i2, j2) = b;

        i1 < i2 || (i1 == i2 && j1 < j2)
    }
}

/// Maps a `(row, col)` coordinate to the index of the diagonal it occupies,
/// offset by the row count so the result is never negative for in-bounds
/// coordinates: `f((i, j)) = j - i + num_rows`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OccupiedDiagonal<I> {
    pub num_rows: I,
}

impl<I> OccupiedDiagonal<I> {
    #[inline]
    pub const fn new(num_rows: I) -> Self {
        Self { num_rows }
    }
}

impl<I: PrimInt> UnaryFn<(I, I)> for OccupiedDiagonal<I> {
    type Output = I;

    #[inline]
    fn call(&self, t: (I, I)) -> I {
        let (i, j) = t;

        // summed before the subtraction so unsigned index types don't wrap
        j + self.num_rows - i
    }
}

/// Converts a logical `(row, diagonal)` coordinate into a linear offset into
/// a diagonal-major dense buffer: `f((row, diag)) = diag * pitch + row`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagonalIndex<I> {
    pub pitch: I,
}

impl<I> DiagonalIndex<I> {
    #[inline]
    pub const fn new(pitch: I) -> Self {
        Self { pitch }
    }
}

impl<I: PrimInt> UnaryFn<(I, I)> for DiagonalIndex<I> {
    type Output = I;

    #[inline]
    fn call(&self, t: (I, I)) -> I {
        let (row, diag) = t;

        diag * self.pitch + row
    }
}

/// Cost-model decision used when choosing between two processing strategies
/// for the tail of a row-partitioned workload.
///
/// Given the number of rows already consumed, returns `true` when handing the
/// remaining rows to the alternate strategy is estimated cheaper:
/// `relative_speed * remaining < num_rows`, or the remainder is below the
/// fixed breakeven threshold. A consumed count past `num_rows` never
/// panics; it simply answers `false`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedThreshold {
    pub num_rows: usize,
    pub relative_speed: f32,
    pub breakeven_threshold: usize,
}

impl SpeedThreshold {
    #[inline]
    pub const fn new(num_rows: usize, relative_speed: f32, breakeven_threshold: usize) -> Self {
        Self {
            num_rows,
            relative_speed,
            breakeven_threshold,
        }
    }
}

impl UnaryFn<usize> for SpeedThreshold {
    type Output = bool;

    #[inline]
    fn call(&self, rows: usize) -> bool {
        // wraps when `rows` exceeds the total, which makes both branches
        // false instead of panicking
        let remaining = self.num_rows.wrapping_sub(rows);

        self.relative_speed * (remaining as f32) < self.num_rows as f32
            || remaining < self.breakeven_threshold
    }
}

/// Validity predicate for ELL-format entries: a `(row, col)` slot is live iff
/// the row is in bounds and the column is not the format's empty-slot
/// sentinel (`-1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsValidEllIndex<I> {
    pub num_rows: I,
}

impl<I> IsValidEllIndex<I> {
    #[inline]
    pub const fn new(num_rows: I) -> Self {
        Self { num_rows }
    }
}

impl<I: PrimInt + Signed> UnaryFn<(I, I)> for IsValidEllIndex<I> {
    type Output = bool;

    #[inline]
    fn call(&self, t: (I, I)) -> bool {
        let (i, j) = t;

        i < self.num_rows && j != -I::one()
    }
}

/// Validity predicate for COO-format triplets: a `(row, col, value)` entry is
/// live iff both indices lie in `[0, count)` and the value is nonzero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsValidCooIndex<I> {
    pub num_rows: I,
    pub num_cols: I,
}

impl<I> IsValidCooIndex<I> {
    #[inline]
    pub const fn new(num_rows: I, num_cols: I) -> Self {
        Self { num_rows, num_cols }
    }
}

impl<I: PrimInt + Signed, V: Zero> UnaryFn<(I, I, V)> for IsValidCooIndex<I> {
    type Output = bool;

    #[inline]
    fn call(&self, t: (I, I, V)) -> bool {
        let (i, j, value) = t;

        (i >= I::zero() && i < self.num_rows)
            && (j >= I::zero() && j < self.num_cols)
            && !value.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tuple_combiners_apply_across_the_pair() {
        assert_eq!(SumTuple::new().call((1.5f64, 2.5)), 4.0);
        assert_eq!(DivideTuple::new().call((9.0f32, 3.0)), 3.0);
        assert!(EqualTuple::new().call((7i32, 7)));
        assert!(NotEqualTuple::new().call((7i32, 8)));
    }

    #[test]
    fn coordinate_ordering_is_row_major_lexicographic() {
        let cmp = CoordinateOrdering;

        assert!(cmp.call((0, 5), (1, 0)));
        assert!(cmp.call((2, 1), (2, 3)));
        assert!(!cmp.call((2, 3), (2, 3)));
        assert!(!cmp.call((3, 0), (2, 9)));
    }
}
