//! Matrix-matrix operations.

use crate::{
    context::CublasContext,
    error::{Error, ToResult},
    raw::Level3,
    MatrixOp,
};
use cust::memory::{GpuBox, GpuBuffer};
use cust::stream::Stream;

type Result<T = (), E = Error> = std::result::Result<T, E>;

#[track_caller]
fn check_gemm<T: Level3>(
    m: usize,
    n: usize,
    k: usize,
    a: &impl GpuBuffer<T>,
    lda: usize,
    op_a: MatrixOp,
    b: &impl GpuBuffer<T>,
    ldb: usize,
    op_b: MatrixOp,
    c: &mut impl GpuBuffer<T>,
    ldc: usize,
) {
    assert!(m > 0 && n > 0 && k > 0, "m, n, and k must be at least 1");

    if op_a == MatrixOp::None {
        assert!(lda >= m, "lda must be at least m if op_a is None");

        assert!(
            a.len() >= lda * k,
            "matrix A's length must be at least lda * k"
        );
    } else {
        assert!(lda >= k, "lda must be at least k if op_a transposes");

        assert!(
            a.len() >= lda * m,
            "matrix A's length must be at least lda * m"
        );
    }

    if op_b == MatrixOp::None {
        assert!(ldb >= k, "ldb must be at least k if op_b is None");

        assert!(
            b.len() >= ldb * n,
            "matrix B's length must be at least ldb * n"
        );
    } else {
        assert!(ldb >= n, "ldb must be at least n if op_b transposes");

        assert!(
            b.len() >= ldb * k,
            "matrix B's length must be at least ldb * k"
        );
    }

    assert!(ldc >= m, "ldc must be at least m");

    assert!(
        c.len() >= ldc * n,
        "matrix C's length must be at least ldc * n"
    );
}

impl CublasContext {
    /// General Matrix Multiplication:
    /// `C = alpha * op(A) * op(B) + beta * C` over column-major matrices with
    /// explicit leading dimensions.
    ///
    /// # Panics
    ///
    /// Panics if any of the following conditions are not met:
    /// - `m > 0 && n > 0 && k > 0`
    /// - `lda >= m` and `a.len() >= lda * k` if `op_a == MatrixOp::None`
    /// - `lda >= k` and `a.len() >= lda * m` otherwise
    /// - `ldb >= k` and `b.len() >= ldb * n` if `op_b == MatrixOp::None`
    /// - `ldb >= n` and `b.len() >= ldb * k` otherwise
    /// - `ldc >= m`
    /// - `c.len() >= ldc * n`
    ///
    /// # Errors
    ///
    /// Returns the vendor status verbatim if the kernel execution failed.
    #[track_caller]
    pub fn gemm<T: Level3>(
        &mut self,
        stream: &Stream,
        m: usize,
        n: usize,
        k: usize,
        alpha: &impl GpuBox<T>,
        a: &impl GpuBuffer<T>,
        lda: usize,
        op_a: MatrixOp,
        beta: &impl GpuBox<T>,
        b: &impl GpuBuffer<T>,
        ldb: usize,
        op_b: MatrixOp,
        c: &mut impl GpuBuffer<T>,
        ldc: usize,
    ) -> Result {
        check_gemm(m, n, k, a, lda, op_a, b, ldb, op_b, c, ldc);

        let transa = op_a.to_raw();
        let transb = op_b.to_raw();

        self.with_stream(stream, |ctx| unsafe {
            Ok(T::gemm(
                ctx.raw,
                transa,
                transb,
                m as i32,
                n as i32,
                k as i32,
                alpha.as_device_ptr().as_raw(),
                a.as_device_ptr().as_raw(),
                lda as i32,
                b.as_device_ptr().as_raw(),
                ldb as i32,
                beta.as_device_ptr().as_raw(),
                c.as_device_ptr().as_raw_mut(),
                ldc as i32,
            )
            .to_result()?)
        })
    }
}
