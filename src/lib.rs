//! Building blocks for GPU sparse linear algebra: a typed dispatch layer over
//! cuBLAS plus a toolkit of small, pure functors for per-element transforms.
//!
//! The crate has two independent halves:
//!
//! - The **BLAS dispatch layer** (`CublasContext`, its level-1 through
//!   level-3 methods, and the `raw` traits), available with the `cuda`
//!   feature. Each BLAS
//!   primitive is resolved to exactly one vendor symbol per scalar type at
//!   compile time, and vendor status codes are surfaced verbatim — nothing is
//!   retried or reinterpreted on this side of the FFI boundary.
//! - The **[`functional`] toolkit**: cheap copyable callables (add a constant,
//!   square, reciprocal, sparse-index validity predicates, and friends) meant
//!   to be applied once per element by an external parallel-transform engine.
//!   These are always compiled and have no GPU dependency of their own.
//!
//! # Indexing
//!
//! **The dispatch layer uses 1-based indexing for index-producing reductions,
//! reflecting cuBLAS' behavior. For example, `CublasContext::amax` writes a
//! 1-based index.**
//!
//! # Synchronization
//!
//! BLAS calls are queued on the `cust::stream::Stream` passed to them and are
//! asynchronous with respect to the host. Results are only guaranteed visible
//! after `stream.synchronize()`.
//!
//! # Feature Flags
//!
//! - `cuda`: enables the dispatch layer. Links against `libcublas` and pulls
//!   in `cust` for device memory and streams. Off by default so the functor
//!   toolkit can be used (and tested) on machines without the CUDA toolkit.

#![allow(clippy::too_many_arguments)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use num_complex::{Complex32, Complex64};

pub mod functional;

#[cfg(feature = "cuda")]
mod context;
#[cfg(feature = "cuda")]
pub mod error;
#[cfg(feature = "cuda")]
mod level1;
#[cfg(feature = "cuda")]
mod level2;
#[cfg(feature = "cuda")]
mod level3;
#[cfg(feature = "cuda")]
pub mod raw;
#[cfg(feature = "cuda")]
pub mod sys;

#[cfg(feature = "cuda")]
pub use context::CublasContext;
#[cfg(feature = "cuda")]
pub use level2::MatrixOp;

/// A scalar type the dispatch layer knows how to route to a vendor routine.
///
/// Implemented for exactly four types: `f32`, `f64`, [`Complex32`], and
/// [`Complex64`]. The trait is sealed; the set cannot be extended because
/// every (operation, scalar type) pair must map to a concrete cuBLAS symbol.
pub trait BlasScalar: private::Sealed + Copy + 'static {
    /// The backing precision. For complex numbers this is the component
    /// float type, and for floats it is just themselves.
    type Real: Float;

    /// The single-letter type code cuBLAS keys its symbol names on:
    /// `s`, `d`, `c`, or `z`.
    const TYPE_CODE: &'static str;

    /// The prefix used by reductions that produce a real result from this
    /// scalar type (`nrm2`, `asum`): `s`, `d`, `sc`, or `dz`.
    const REDUCTION_CODE: &'static str;
}

impl BlasScalar for f32 {
    type Real = f32;
    const TYPE_CODE: &'static str = "s";
    const REDUCTION_CODE: &'static str = "s";
}

impl BlasScalar for f64 {
    type Real = f64;
    const TYPE_CODE: &'static str = "d";
    const REDUCTION_CODE: &'static str = "d";
}

impl BlasScalar for Complex32 {
    type Real = f32;
    const TYPE_CODE: &'static str = "c";
    const REDUCTION_CODE: &'static str = "sc";
}

impl BlasScalar for Complex64 {
    type Real = f64;
    const TYPE_CODE: &'static str = "z";
    const REDUCTION_CODE: &'static str = "dz";
}

/// Trait describing either 32 or 64 bit floats.
pub trait Float: private::Sealed + BlasScalar {}
impl Float for f32 {}
impl Float for f64 {}

/// Trait describing either 32 or 64 bit complex numbers.
pub trait Complex: private::Sealed + BlasScalar {}
impl Complex for Complex32 {}
impl Complex for Complex64 {}

// The dispatch layer reinterprets `Complex32`/`Complex64` pointers as the
// vendor's `cuComplex`/`cuDoubleComplex`, which are two consecutive floats
// with no padding. That is only sound because `num_complex::Complex<T>` is
// `#[repr(C)]` with fields `re, im`; these assertions pin the contract down
// so a layout change fails the build instead of corrupting device data.
const _: () = assert!(core::mem::size_of::<Complex32>() == 2 * core::mem::size_of::<f32>());
const _: () = assert!(core::mem::align_of::<Complex32>() == core::mem::align_of::<f32>());
const _: () = assert!(core::mem::size_of::<Complex64>() == 2 * core::mem::size_of::<f64>());
const _: () = assert!(core::mem::align_of::<Complex64>() == core::mem::align_of::<f64>());

pub(crate) mod private {
    use num_complex::{Complex32, Complex64};

    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
    impl Sealed for Complex32 {}
    impl Sealed for Complex64 {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_codes_follow_vendor_naming() {
        assert_eq!(<f32 as BlasScalar>::TYPE_CODE, "s");
        assert_eq!(<f64 as BlasScalar>::TYPE_CODE, "d");
        assert_eq!(<Complex32 as BlasScalar>::TYPE_CODE, "c");
        assert_eq!(<Complex64 as BlasScalar>::TYPE_CODE, "z");
    }

    #[test]
    fn reduction_codes_use_mixed_prefixes_for_complex() {
        assert_eq!(<f32 as BlasScalar>::REDUCTION_CODE, "s");
        assert_eq!(<f64 as BlasScalar>::REDUCTION_CODE, "d");
        assert_eq!(<Complex32 as BlasScalar>::REDUCTION_CODE, "sc");
        assert_eq!(<Complex64 as BlasScalar>::REDUCTION_CODE, "dz");
    }
}
