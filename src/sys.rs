//! Raw bindings to the subset of cuBLAS v2 the dispatch layer forwards to.
//!
//! Names and layouts mirror `cublas_v2.h` so that each generic entry point in
//! [`crate::raw`] resolves to exactly one symbol here. Complex arguments use
//! the vendor's [`cuComplex`]/[`cuDoubleComplex`] pair-of-floats layout;
//! see the layout assertions in the crate root for why reinterpreting
//! `num_complex` pointers into these is sound.

#![allow(non_camel_case_types, non_snake_case)]

use std::os::raw::{c_char, c_int, c_void};

/// Opaque cuBLAS library context.
#[repr(C)]
pub struct cublasContext {
    _unused: [u8; 0],
}

pub type cublasHandle_t = *mut cublasContext;
pub type cudaStream_t = *mut c_void;

/// The vendor's native single precision complex layout: two consecutive
/// floats, real part first.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct cuComplex {
    pub x: f32,
    pub y: f32,
}

/// The vendor's native double precision complex layout.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct cuDoubleComplex {
    pub x: f64,
    pub y: f64,
}

/// Status code returned by every cuBLAS entry point.
///
/// A transparent wrapper over the C enum's integer representation rather
/// than a Rust enum: the library may hand back a code this header subset
/// does not name (newer toolkits add variants), and that must stay a
/// well-defined value on the Rust side.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct cublasStatus_t(pub i32);

impl cublasStatus_t {
    pub const CUBLAS_STATUS_SUCCESS: Self = Self(0);
    pub const CUBLAS_STATUS_NOT_INITIALIZED: Self = Self(1);
    pub const CUBLAS_STATUS_ALLOC_FAILED: Self = Self(3);
    pub const CUBLAS_STATUS_INVALID_VALUE: Self = Self(7);
    pub const CUBLAS_STATUS_ARCH_MISMATCH: Self = Self(8);
    pub const CUBLAS_STATUS_MAPPING_ERROR: Self = Self(11);
    pub const CUBLAS_STATUS_EXECUTION_FAILED: Self = Self(13);
    pub const CUBLAS_STATUS_INTERNAL_ERROR: Self = Self(14);
    pub const CUBLAS_STATUS_NOT_SUPPORTED: Self = Self(15);
    pub const CUBLAS_STATUS_LICENSE_ERROR: Self = Self(16);
}

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum cublasOperation_t {
    CUBLAS_OP_N = 0,
    CUBLAS_OP_T = 1,
    CUBLAS_OP_C = 2,
}

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum cublasPointerMode_t {
    CUBLAS_POINTER_MODE_HOST = 0,
    CUBLAS_POINTER_MODE_DEVICE = 1,
}

#[link(name = "cublas")]
extern "C" {
    // ------------------------------------------------------------------
    // handle management
    // ------------------------------------------------------------------
    pub fn cublasCreate_v2(handle: *mut cublasHandle_t) -> cublasStatus_t;
    pub fn cublasDestroy_v2(handle: cublasHandle_t) -> cublasStatus_t;
    pub fn cublasGetVersion_v2(handle: cublasHandle_t, version: *mut c_int) -> cublasStatus_t;
    pub fn cublasSetStream_v2(handle: cublasHandle_t, stream: cudaStream_t) -> cublasStatus_t;
    pub fn cublasSetPointerMode_v2(
        handle: cublasHandle_t,
        mode: cublasPointerMode_t,
    ) -> cublasStatus_t;
    pub fn cublasGetStatusString(status: cublasStatus_t) -> *const c_char;

    // ------------------------------------------------------------------
    // level 1: amax
    // ------------------------------------------------------------------
    pub fn cublasIsamax_v2(
        handle: cublasHandle_t,
        n: c_int,
        x: *const f32,
        incx: c_int,
        result: *mut c_int,
    ) -> cublasStatus_t;
    pub fn cublasIdamax_v2(
        handle: cublasHandle_t,
        n: c_int,
        x: *const f64,
        incx: c_int,
        result: *mut c_int,
    ) -> cublasStatus_t;
    pub fn cublasIcamax_v2(
        handle: cublasHandle_t,
        n: c_int,
        x: *const cuComplex,
        incx: c_int,
        result: *mut c_int,
    ) -> cublasStatus_t;
    pub fn cublasIzamax_v2(
        handle: cublasHandle_t,
        n: c_int,
        x: *const cuDoubleComplex,
        incx: c_int,
        result: *mut c_int,
    ) -> cublasStatus_t;

    // ------------------------------------------------------------------
    // level 1: asum
    // ------------------------------------------------------------------
    pub fn cublasSasum_v2(
        handle: cublasHandle_t,
        n: c_int,
        x: *const f32,
        incx: c_int,
        result: *mut f32,
    ) -> cublasStatus_t;
    pub fn cublasDasum_v2(
        handle: cublasHandle_t,
        n: c_int,
        x: *const f64,
        incx: c_int,
        result: *mut f64,
    ) -> cublasStatus_t;
    pub fn cublasScasum_v2(
        handle: cublasHandle_t,
        n: c_int,
        x: *const cuComplex,
        incx: c_int,
        result: *mut f32,
    ) -> cublasStatus_t;
    pub fn cublasDzasum_v2(
        handle: cublasHandle_t,
        n: c_int,
        x: *const cuDoubleComplex,
        incx: c_int,
        result: *mut f64,
    ) -> cublasStatus_t;

    // ------------------------------------------------------------------
    // level 1: axpy
    // ------------------------------------------------------------------
    pub fn cublasSaxpy_v2(
        handle: cublasHandle_t,
        n: c_int,
        alpha: *const f32,
        x: *const f32,
        incx: c_int,
        y: *mut f32,
        incy: c_int,
    ) -> cublasStatus_t;
    pub fn cublasDaxpy_v2(
        handle: cublasHandle_t,
        n: c_int,
        alpha: *const f64,
        x: *const f64,
        incx: c_int,
        y: *mut f64,
        incy: c_int,
    ) -> cublasStatus_t;
    pub fn cublasCaxpy_v2(
        handle: cublasHandle_t,
        n: c_int,
        alpha: *const cuComplex,
        x: *const cuComplex,
        incx: c_int,
        y: *mut cuComplex,
        incy: c_int,
    ) -> cublasStatus_t;
    pub fn cublasZaxpy_v2(
        handle: cublasHandle_t,
        n: c_int,
        alpha: *const cuDoubleComplex,
        x: *const cuDoubleComplex,
        incx: c_int,
        y: *mut cuDoubleComplex,
        incy: c_int,
    ) -> cublasStatus_t;

    // ------------------------------------------------------------------
    // level 1: copy
    // ------------------------------------------------------------------
    pub fn cublasScopy_v2(
        handle: cublasHandle_t,
        n: c_int,
        x: *const f32,
        incx: c_int,
        y: *mut f32,
        incy: c_int,
    ) -> cublasStatus_t;
    pub fn cublasDcopy_v2(
        handle: cublasHandle_t,
        n: c_int,
        x: *const f64,
        incx: c_int,
        y: *mut f64,
        incy: c_int,
    ) -> cublasStatus_t;
    pub fn cublasCcopy_v2(
        handle: cublasHandle_t,
        n: c_int,
        x: *const cuComplex,
        incx: c_int,
        y: *mut cuComplex,
        incy: c_int,
    ) -> cublasStatus_t;
    pub fn cublasZcopy_v2(
        handle: cublasHandle_t,
        n: c_int,
        x: *const cuDoubleComplex,
        incx: c_int,
        y: *mut cuDoubleComplex,
        incy: c_int,
    ) -> cublasStatus_t;

    // ------------------------------------------------------------------
    // level 1: dot / dotu / dotc
    // ------------------------------------------------------------------
    pub fn cublasSdot_v2(
        handle: cublasHandle_t,
        n: c_int,
        x: *const f32,
        incx: c_int,
        y: *const f32,
        incy: c_int,
        result: *mut f32,
    ) -> cublasStatus_t;
    pub fn cublasDdot_v2(
        handle: cublasHandle_t,
        n: c_int,
        x: *const f64,
        incx: c_int,
        y: *const f64,
        incy: c_int,
        result: *mut f64,
    ) -> cublasStatus_t;
    pub fn cublasCdotu_v2(
        handle: cublasHandle_t,
        n: c_int,
        x: *const cuComplex,
        incx: c_int,
        y: *const cuComplex,
        incy: c_int,
        result: *mut cuComplex,
    ) -> cublasStatus_t;
    pub fn cublasCdotc_v2(
        handle: cublasHandle_t,
        n: c_int,
        x: *const cuComplex,
        incx: c_int,
        y: *const cuComplex,
        incy: c_int,
        result: *mut cuComplex,
    ) -> cublasStatus_t;
    pub fn cublasZdotu_v2(
        handle: cublasHandle_t,
        n: c_int,
        x: *const cuDoubleComplex,
        incx: c_int,
        y: *const cuDoubleComplex,
        incy: c_int,
        result: *mut cuDoubleComplex,
    ) -> cublasStatus_t;
    pub fn cublasZdotc_v2(
        handle: cublasHandle_t,
        n: c_int,
        x: *const cuDoubleComplex,
        incx: c_int,
        y: *const cuDoubleComplex,
        incy: c_int,
        result: *mut cuDoubleComplex,
    ) -> cublasStatus_t;

    // ------------------------------------------------------------------
    // level 1: nrm2
    // ------------------------------------------------------------------
    pub fn cublasSnrm2_v2(
        handle: cublasHandle_t,
        n: c_int,
        x: *const f32,
        incx: c_int,
        result: *mut f32,
    ) -> cublasStatus_t;
    pub fn cublasDnrm2_v2(
        handle: cublasHandle_t,
        n: c_int,
        x: *const f64,
        incx: c_int,
        result: *mut f64,
    ) -> cublasStatus_t;
    pub fn cublasScnrm2_v2(
        handle: cublasHandle_t,
        n: c_int,
        x: *const cuComplex,
        incx: c_int,
        result: *mut f32,
    ) -> cublasStatus_t;
    pub fn cublasDznrm2_v2(
        handle: cublasHandle_t,
        n: c_int,
        x: *const cuDoubleComplex,
        incx: c_int,
        result: *mut f64,
    ) -> cublasStatus_t;

    // ------------------------------------------------------------------
    // level 1: scal (by a real scalar)
    // ------------------------------------------------------------------
    pub fn cublasSscal_v2(
        handle: cublasHandle_t,
        n: c_int,
        alpha: *const f32,
        x: *mut f32,
        incx: c_int,
    ) -> cublasStatus_t;
    pub fn cublasDscal_v2(
        handle: cublasHandle_t,
        n: c_int,
        alpha: *const f64,
        x: *mut f64,
        incx: c_int,
    ) -> cublasStatus_t;
    pub fn cublasCsscal_v2(
        handle: cublasHandle_t,
        n: c_int,
        alpha: *const f32,
        x: *mut cuComplex,
        incx: c_int,
    ) -> cublasStatus_t;
    pub fn cublasZdscal_v2(
        handle: cublasHandle_t,
        n: c_int,
        alpha: *const f64,
        x: *mut cuDoubleComplex,
        incx: c_int,
    ) -> cublasStatus_t;

    // ------------------------------------------------------------------
    // level 1: swap
    // ------------------------------------------------------------------
    pub fn cublasSswap_v2(
        handle: cublasHandle_t,
        n: c_int,
        x: *mut f32,
        incx: c_int,
        y: *mut f32,
        incy: c_int,
    ) -> cublasStatus_t;
    pub fn cublasDswap_v2(
        handle: cublasHandle_t,
        n: c_int,
        x: *mut f64,
        incx: c_int,
        y: *mut f64,
        incy: c_int,
    ) -> cublasStatus_t;
    pub fn cublasCswap_v2(
        handle: cublasHandle_t,
        n: c_int,
        x: *mut cuComplex,
        incx: c_int,
        y: *mut cuComplex,
        incy: c_int,
    ) -> cublasStatus_t;
    pub fn cublasZswap_v2(
        handle: cublasHandle_t,
        n: c_int,
        x: *mut cuDoubleComplex,
        incx: c_int,
        y: *mut cuDoubleComplex,
        incy: c_int,
    ) -> cublasStatus_t;

    // ------------------------------------------------------------------
    // level 2: gemv
    // ------------------------------------------------------------------
    pub fn cublasSgemv_v2(
        handle: cublasHandle_t,
        trans: cublasOperation_t,
        m: c_int,
        n: c_int,
        alpha: *const f32,
        a: *const f32,
        lda: c_int,
        x: *const f32,
        incx: c_int,
        beta: *const f32,
        y: *mut f32,
        incy: c_int,
    ) -> cublasStatus_t;
    pub fn cublasDgemv_v2(
        handle: cublasHandle_t,
        trans: cublasOperation_t,
        m: c_int,
        n: c_int,
        alpha: *const f64,
        a: *const f64,
        lda: c_int,
        x: *const f64,
        incx: c_int,
        beta: *const f64,
        y: *mut f64,
        incy: c_int,
    ) -> cublasStatus_t;
    pub fn cublasCgemv_v2(
        handle: cublasHandle_t,
        trans: cublasOperation_t,
        m: c_int,
        n: c_int,
        alpha: *const cuComplex,
        a: *const cuComplex,
        lda: c_int,
        x: *const cuComplex,
        incx: c_int,
        beta: *const cuComplex,
        y: *mut cuComplex,
        incy: c_int,
    ) -> cublasStatus_t;
    pub fn cublasZgemv_v2(
        handle: cublasHandle_t,
        trans: cublasOperation_t,
        m: c_int,
        n: c_int,
        alpha: *const cuDoubleComplex,
        a: *const cuDoubleComplex,
        lda: c_int,
        x: *const cuDoubleComplex,
        incx: c_int,
        beta: *const cuDoubleComplex,
        y: *mut cuDoubleComplex,
        incy: c_int,
    ) -> cublasStatus_t;

    // ------------------------------------------------------------------
    // level 3: gemm
    // ------------------------------------------------------------------
    pub fn cublasSgemm_v2(
        handle: cublasHandle_t,
        transa: cublasOperation_t,
        transb: cublasOperation_t,
        m: c_int,
        n: c_int,
        k: c_int,
        alpha: *const f32,
        a: *const f32,
        lda: c_int,
        b: *const f32,
        ldb: c_int,
        beta: *const f32,
        c: *mut f32,
        ldc: c_int,
    ) -> cublasStatus_t;
    pub fn cublasDgemm_v2(
        handle: cublasHandle_t,
        transa: cublasOperation_t,
        transb: cublasOperation_t,
        m: c_int,
        n: c_int,
        k: c_int,
        alpha: *const f64,
        a: *const f64,
        lda: c_int,
        b: *const f64,
        ldb: c_int,
        beta: *const f64,
        c: *mut f64,
        ldc: c_int,
    ) -> cublasStatus_t;
    pub fn cublasCgemm_v2(
        handle: cublasHandle_t,
        transa: cublasOperation_t,
        transb: cublasOperation_t,
        m: c_int,
        n: c_int,
        k: c_int,
        alpha: *const cuComplex,
        a: *const cuComplex,
        lda: c_int,
        b: *const cuComplex,
        ldb: c_int,
        beta: *const cuComplex,
        c: *mut cuComplex,
        ldc: c_int,
    ) -> cublasStatus_t;
    pub fn cublasZgemm_v2(
        handle: cublasHandle_t,
        transa: cublasOperation_t,
        transb: cublasOperation_t,
        m: c_int,
        n: c_int,
        k: c_int,
        alpha: *const cuDoubleComplex,
        a: *const cuDoubleComplex,
        lda: c_int,
        b: *const cuDoubleComplex,
        ldb: c_int,
        beta: *const cuDoubleComplex,
        c: *mut cuDoubleComplex,
        ldc: c_int,
    ) -> cublasStatus_t;
}
