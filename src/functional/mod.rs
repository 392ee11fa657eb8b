//! Small, pure functors for building lazy per-element transforms.
//!
//! Everything here is a cheap, `Copy` value type carrying at most one piece
//! of captured state (a bound right-hand operand, or index extents for the
//! sparse-format predicates). A functor is applied once per element by an
//! external parallel-transform engine, so every application must be
//! independent: no I/O, no allocation, no shared mutable state, and no
//! panicking paths. Numeric edge cases (division by zero, square root of a
//! negative) follow the IEEE semantics of the scalar type instead of
//! signaling an error.
//!
//! The contract with the engine is the two call traits below plus `Copy`:
//! [`UnaryFn`] for elementwise transforms over a single stream, and
//! [`BinaryFn`] for comparators over pairs of elements. Zipped streams are
//! passed as native tuples, so e.g. a predicate over `(row, col, value)`
//! triplets is a `UnaryFn<(I, I, V)>`.
//!
//! # Example
//!
//! ```
//! use spindrift::functional::{PlusValue, Square, UnaryFn};
//!
//! let shift = PlusValue::new(1.5f64);
//! assert_eq!(shift.call(2.0), 3.5);
//!
//! let sq = Square;
//! assert_eq!(sq.call(3.0f32), 9.0);
//! ```

mod tuple;
mod value;

pub use tuple::*;
pub use value::*;

/// A pure function of one argument.
///
/// Implementors must be side-effect-free: the engine applying them makes no
/// guarantee about invocation order or concurrency.
pub trait UnaryFn<T> {
    type Output;

    fn call(&self, x: T) -> Self::Output;
}

/// A pure function of two arguments, used for comparators over paired
/// streams.
pub trait BinaryFn<A, B = A> {
    type Output;

    fn call(&self, a: A, b: B) -> Self::Output;
}
