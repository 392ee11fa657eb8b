use crate::{sys::*, BlasScalar};
use cust::memory::DeviceCopy;
use num_complex::{Complex32, Complex64};
use std::os::raw::c_int;

/// Matrix-matrix primitives. One vendor symbol per scalar type.
pub trait Level3: BlasScalar + DeviceCopy {
    unsafe fn gemm(
        handle: cublasHandle_t,
        transa: cublasOperation_t,
        transb: cublasOperation_t,
        m: c_int,
        n: c_int,
        k: c_int,
        alpha: *const Self,
        a: *const Self,
        lda: c_int,
        b: *const Self,
        ldb: c_int,
        beta: *const Self,
        c: *mut Self,
        ldc: c_int,
    ) -> cublasStatus_t;
}

impl Level3 for f32 {
    unsafe fn gemm(
        handle: cublasHandle_t,
        transa: cublasOperation_t,
        transb: cublasOperation_t,
        m: c_int,
        n: c_int,
        k: c_int,
        alpha: *const Self,
        a: *const Self,
        lda: c_int,
        b: *const Self,
        ldb: c_int,
        beta: *const Self,
        c: *mut Self,
        ldc: c_int,
    ) -> cublasStatus_t {
        cublasSgemm_v2(
            handle, transa, transb, m, n, k, alpha, a, lda, b, ldb, beta, c, ldc,
        )
    }
}

impl Level3 for f64 {
    unsafe fn gemm(
        handle: cublasHandle_t,
        transa: cublasOperation_t,
        transb: cublasOperation_t,
        m: c_int,
        n: c_int,
        k: c_int,
        alpha: *const Self,
        a: *const Self,
        lda: c_int,
        b: *const Self,
        ldb: c_int,
        beta: *const Self,
        c: *mut Self,
        ldc: c_int,
    ) -> cublasStatus_t {
        cublasDgemm_v2(
            handle, transa, transb, m, n, k, alpha, a, lda, b, ldb, beta, c, ldc,
        )
    }
}

impl Level3 for Complex32 {
    unsafe fn gemm(
        handle: cublasHandle_t,
        transa: cublasOperation_t,
        transb: cublasOperation_t,
        m: c_int,
        n: c_int,
        k: c_int,
        alpha: *const Self,
        a: *const Self,
        lda: c_int,
        b: *const Self,
        ldb: c_int,
        beta: *const Self,
        c: *mut Self,
        ldc: c_int,
    ) -> cublasStatus_t {
        cublasCgemm_v2(
            handle,
            transa,
            transb,
            m,
            n,
            k,
            alpha.cast(),
            a.cast(),
            lda,
            b.cast(),
            ldb,
            beta.cast(),
            c.cast(),
            ldc,
        )
    }
}

impl Level3 for Complex64 {
    unsafe fn gemm(
        handle: cublasHandle_t,
        transa: cublasOperation_t,
        transb: cublasOperation_t,
        m: c_int,
        n: c_int,
        k: c_int,
        alpha: *const Self,
        a: *const Self,
        lda: c_int,
        b: *const Self,
        ldb: c_int,
        beta: *const Self,
        c: *mut Self,
        ldc: c_int,
    ) -> cublasStatus_t {
        cublasZgemm_v2(
            handle,
            transa,
            transb,
            m,
            n,
            k,
            alpha.cast(),
            a.cast(),
            lda,
            b.cast(),
            ldb,
            beta.cast(),
            c.cast(),
            ldc,
        )
    }
}
