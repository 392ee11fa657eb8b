//! Elementwise functors: a bound-constant family built from operation tags,
//! plus a handful of standalone unary transforms.

use std::marker::PhantomData;
use std::ops::{Add, Div, Mul, Rem};

use num_complex::{Complex32, Complex64};
use num_traits::{One, Zero};

use super::UnaryFn;

/// An operation tag: a zero-sized type naming a binary computation.
///
/// Tags exist so one generic functor, [`BindValue`], can cover the whole
/// "operand ⊕ constant" family without a struct per operation.
pub trait BinaryOp<T> {
    type Output;

    fn apply(x: T, y: T) -> Self::Output;
}

macro_rules! arith_op {
    ($(#[$doc:meta])* $name:ident, $bound:ident, $method:ident) => {
        $(#[$doc])*
        #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
        pub struct $name;

        impl<T: $bound<Output = T>> BinaryOp<T> for $name {
            type Output = T;

            #[inline]
            fn apply(x: T, y: T) -> T {
                x.$method(y)
            }
        }
    };
}

arith_op!(
    /// `x + y`
    Plus, Add, add
);
arith_op!(
    /// `x / y`
    Divides, Div, div
);
arith_op!(
    /// `x % y`
    Modulus, Rem, rem
);
arith_op!(
    /// `x * y`
    Multiplies, Mul, mul
);

macro_rules! compare_op {
    ($(#[$doc:meta])* $name:ident, $op:tt) => {
        $(#[$doc])*
        #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
        pub struct $name;

        impl<T: PartialOrd> BinaryOp<T> for $name {
            type Output = bool;

            #[inline]
            fn apply(x: T, y: T) -> bool {
                x $op y
            }
        }
    };
}

compare_op!(
    /// `x > y`
    Greater, >
);
compare_op!(
    /// `x >= y`
    GreaterEqual, >=
);
compare_op!(
    /// `x < y`
    Less, <
);
compare_op!(
    /// `x <= y`
    LessEqual, <=
);

/// `x == y`
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EqualTo;

impl<T: PartialEq> BinaryOp<T> for EqualTo {
    type Output = bool;

    #[inline]
    fn apply(x: T, y: T) -> bool {
        x == y
    }
}

/// `x != y`
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NotEqualTo;

impl<T: PartialEq> BinaryOp<T> for NotEqualTo {
    type Output = bool;

    #[inline]
    fn apply(x: T, y: T) -> bool {
        x != y
    }
}

/// A unary functor that applies `Op` with a captured right-hand operand:
/// `f(x) = x ⊕ value`.
///
/// Prefer the aliases ([`PlusValue`], [`DivideValue`], ...) in signatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BindValue<T, Op> {
    pub value: T,
    op: PhantomData<Op>,
}

impl<T, Op> BindValue<T, Op> {
    #[inline]
    pub const fn new(value: T) -> Self {
        Self {
            value,
            op: PhantomData,
        }
    }
}

impl<T: Copy, Op: BinaryOp<T>> UnaryFn<T> for BindValue<T, Op> {
    type Output = Op::Output;

    #[inline]
    fn call(&self, x: T) -> Self::Output {
        Op::apply(x, self.value)
    }
}

/// `f(x) = x + value`
pub type PlusValue<T> = BindValue<T, Plus>;
/// `f(x) = x / value`
pub type DivideValue<T> = BindValue<T, Divides>;
/// `f(x) = x % value`
pub type ModulusValue<T> = BindValue<T, Modulus>;
/// `f(x) = x * value`
pub type MultipliesValue<T> = BindValue<T, Multiplies>;
/// `f(x) = x > value`
pub type GreaterValue<T> = BindValue<T, Greater>;
/// `f(x) = x >= value`
pub type GreaterEqualValue<T> = BindValue<T, GreaterEqual>;
/// `f(x) = x < value`
pub type LessValue<T> = BindValue<T, Less>;
/// `f(x) = x <= value`
pub type LessEqualValue<T> = BindValue<T, LessEqual>;

/// `f(x) = 0`, ignoring the operand.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ZeroFn;

impl<T: Zero> UnaryFn<T> for ZeroFn {
    type Output = T;

    #[inline]
    fn call(&self, _x: T) -> T {
        T::zero()
    }
}

/// `f(x) = x * x`
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Square;

impl<T: Copy + Mul<Output = T>> UnaryFn<T> for Square {
    type Output = T;

    #[inline]
    fn call(&self, x: T) -> T {
        x * x
    }
}

/// `f(x) = sqrt(x)` — the principal square root.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Sqrt;

impl<T: num_traits::Float> UnaryFn<T> for Sqrt {
    type Output = T;

    #[inline]
    fn call(&self, x: T) -> T {
        x.sqrt()
    }
}

/// Magnitude of a scalar: `|x|` for reals, the modulus for complex numbers.
///
/// This is the absolute-value dispatch point for [`Absolute`]; the result is
/// always the backing real type.
pub trait Magnitude {
    type Real;

    fn magnitude(self) -> Self::Real;
}

impl Magnitude for f32 {
    type Real = f32;

    #[inline]
    fn magnitude(self) -> f32 {
        self.abs()
    }
}

impl Magnitude for f64 {
    type Real = f64;

    #[inline]
    fn magnitude(self) -> f64 {
        self.abs()
    }
}

impl Magnitude for Complex32 {
    type Real = f32;

    #[inline]
    fn magnitude(self) -> f32 {
        self.norm()
    }
}

impl Magnitude for Complex64 {
    type Real = f64;

    #[inline]
    fn magnitude(self) -> f64 {
        self.norm()
    }
}

/// `f(x) = |x|`
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Absolute;

impl<T: Magnitude> UnaryFn<T> for Absolute {
    type Output = T::Real;

    #[inline]
    fn call(&self, x: T) -> T::Real {
        x.magnitude()
    }
}

/// `f(x) = 1 / x`
///
/// Reciprocal of zero follows the scalar type's division semantics
/// (infinity for IEEE floats).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Reciprocal;

impl<T: One + Div<Output = T>> UnaryFn<T> for Reciprocal {
    type Output = T;

    #[inline]
    fn call(&self, x: T) -> T {
        T::one() / x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bound_constant_functors_apply_their_operation() {
        assert_eq!(PlusValue::new(2.0f64).call(0.5), 2.5);
        assert_eq!(DivideValue::new(4.0f32).call(10.0), 2.5);
        assert_eq!(ModulusValue::new(3i32).call(10), 1);
        assert_eq!(MultipliesValue::new(-2.0f64).call(1.5), -3.0);
    }

    #[test]
    fn comparison_functors_compare_against_the_bound_value() {
        let gt = GreaterValue::new(1.0f64);
        assert!(gt.call(1.5));
        assert!(!gt.call(1.0));

        assert!(GreaterEqualValue::new(1.0f64).call(1.0));
        assert!(LessValue::new(0i64).call(-3));
        assert!(LessEqualValue::new(7u32).call(7));
    }

    #[test]
    fn functors_are_plain_copyable_values() {
        let f = PlusValue::new(3.0f32);
        let g = f; // Copy
        assert_eq!(f.call(1.0), g.call(1.0));
        assert_eq!(f.value, 3.0);
    }

    #[test]
    fn divide_by_zero_follows_ieee_semantics() {
        let recip = Reciprocal;
        assert_eq!(recip.call(0.5f64), 2.0);
        assert!(recip.call(0.0f64).is_infinite());

        assert!(DivideValue::new(0.0f32).call(1.0).is_infinite());
        assert!(DivideValue::new(0.0f32).call(0.0).is_nan());
    }

    #[test]
    fn standalone_unary_functors() {
        assert_eq!(ZeroFn.call(42.0f64), 0.0);
        assert_eq!(Square.call(-3.0f64), 9.0);
        assert_eq!(Sqrt.call(16.0f32), 4.0);
        assert!(Sqrt.call(-1.0f64).is_nan());
    }

    #[test]
    fn absolute_takes_magnitudes() {
        use num_complex::Complex64;

        assert_eq!(Absolute.call(-2.5f32), 2.5);
        assert_eq!(Absolute.call(Complex64::new(3.0, 4.0)), 5.0);
    }
}
