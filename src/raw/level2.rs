use crate::{sys::*, BlasScalar};
use cust::memory::DeviceCopy;
use num_complex::{Complex32, Complex64};
use std::os::raw::c_int;

/// Matrix-vector primitives. One vendor symbol per scalar type.
pub trait Level2: BlasScalar + DeviceCopy {
    unsafe fn gemv(
        handle: cublasHandle_t,
        trans: cublasOperation_t,
        m: c_int,
        n: c_int,
        alpha: *const Self,
        a: *const Self,
        lda: c_int,
        x: *const Self,
        incx: c_int,
        beta: *const Self,
        y: *mut Self,
        incy: c_int,
    ) -> cublasStatus_t;
}

impl Level2 for f32 {
    unsafe fn gemv(
        handle: cublasHandle_t,
        trans: cublasOperation_t,
        m: c_int,
        n: c_int,
        alpha: *const Self,
        a: *const Self,
        lda: c_int,
        x: *const Self,
        incx: c_int,
        beta: *const Self,
        y: *mut Self,
        incy: c_int,
    ) -> cublasStatus_t {
        cublasSgemv_v2(handle, trans, m, n, alpha, a, lda, x, incx, beta, y, incy)
    }
}

impl Level2 for f64 {
    unsafe fn gemv(
        handle: cublasHandle_t,
        trans: cublasOperation_t,
        m: c_int,
        n: c_int,
        alpha: *const Self,
        a: *const Self,
        lda: c_int,
        x: *const Self,
        incx: c_int,
        beta: *const Self,
        y: *mut Self,
        incy: c_int,
    ) -> cublasStatus_t {
        cublasDgemv_v2(handle, trans, m, n, alpha, a, lda, x, incx, beta, y, incy)
    }
}

impl Level2 for Complex32 {
    unsafe fn gemv(
        handle: cublasHandle_t,
        trans: cublasOperation_t,
        m: c_int,
        n: c_int,
        alpha: *const Self,
        a: *const Self,
        lda: c_int,
        x: *const Self,
        incx: c_int,
        beta: *const Self,
        y: *mut Self,
        incy: c_int,
    ) -> cublasStatus_t {
        cublasCgemv_v2(
            handle,
            trans,
            m,
            n,
            alpha.cast(),
            a.cast(),
            lda,
            x.cast(),
            incx,
            beta.cast(),
            y.cast(),
            incy,
        )
    }
}

impl Level2 for Complex64 {
    unsafe fn gemv(
        handle: cublasHandle_t,
        trans: cublasOperation_t,
        m: c_int,
        n: c_int,
        alpha: *const Self,
        a: *const Self,
        lda: c_int,
        x: *const Self,
        incx: c_int,
        beta: *const Self,
        y: *mut Self,
        incy: c_int,
    ) -> cublasStatus_t {
        cublasZgemv_v2(
            handle,
            trans,
            m,
            n,
            alpha.cast(),
            a.cast(),
            lda,
            x.cast(),
            incx,
            beta.cast(),
            y.cast(),
            incy,
        )
    }
}
