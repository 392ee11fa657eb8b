//! Matrix-vector operations.
//!
//! Matrices are column-major with an explicit leading dimension, as cuBLAS
//! requires. The host-side "layout order" flag of row-major BLAS front ends
//! collapses to choosing a [`MatrixOp`] here.

use crate::{
    context::CublasContext,
    error::{Error, ToResult},
    raw::Level2,
    sys,
};
use cust::memory::{GpuBox, GpuBuffer};
use cust::stream::Stream;

type Result<T = (), E = Error> = std::result::Result<T, E>;

/// Whether and how a matrix operand is transposed before the operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatrixOp {
    /// Use the matrix as stored.
    None,
    /// Transpose the matrix.
    Transpose,
    /// Transpose the matrix and conjugate every element.
    ConjugateTranspose,
}

impl MatrixOp {
    pub(crate) fn to_raw(self) -> sys::cublasOperation_t {
        match self {
            MatrixOp::None => sys::cublasOperation_t::CUBLAS_OP_N,
            MatrixOp::Transpose => sys::cublasOperation_t::CUBLAS_OP_T,
            MatrixOp::ConjugateTranspose => sys::cublasOperation_t::CUBLAS_OP_C,
        }
    }
}

#[track_caller]
fn check_gemv<T: Level2>(
    m: usize,
    n: usize,
    a: &impl GpuBuffer<T>,
    lda: usize,
    op_a: MatrixOp,
    x: &impl GpuBuffer<T>,
    x_stride: Option<usize>,
    y: &mut impl GpuBuffer<T>,
    y_stride: Option<usize>,
) {
    assert!(m > 0 && n > 0, "m and n must be at least 1");
    assert!(lda >= m, "lda must be at least m");
    assert!(
        a.len() >= lda * n,
        "matrix A's length must be at least lda * n"
    );

    // op swaps which extent the vectors must cover
    let (x_len, y_len) = if op_a == MatrixOp::None {
        (n, m)
    } else {
        (m, n)
    };
    assert!(
        x.len() >= x_len * x_stride.unwrap_or(1),
        "x is too short for the requested extents"
    );
    assert!(
        y.len() >= y_len * y_stride.unwrap_or(1),
        "y is too short for the requested extents"
    );
}

impl CublasContext {
    /// Same as [`CublasContext::gemv`] but with explicit vector strides.
    ///
    /// # Panics
    ///
    /// Panics if the buffers are not long enough for the extents and strides
    /// requested.
    ///
    /// # Example
    ///
    /// ```
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # let _a = cust::quick_init()?;
    /// # use spindrift::{CublasContext, MatrixOp};
    /// # use cust::prelude::*;
    /// # use cust::memory::DeviceBox;
    /// # use cust::util::SliceExt;
    /// # let stream = Stream::new(StreamFlags::DEFAULT, None)?;
    /// let mut ctx = CublasContext::new()?;
    /// let alpha = DeviceBox::new(&1.0f32)?;
    /// let beta = DeviceBox::new(&0.0f32)?;
    /// // 2x2 identity, column-major
    /// let a = [1.0f32, 0.0, 0.0, 1.0].as_dbuf()?;
    /// // read every other element of x
    /// let x = [3.0f32, 9.0, 4.0, 9.0].as_dbuf()?;
    /// let mut y = [0.0f32; 2].as_dbuf()?;
    ///
    /// ctx.gemv_strided(
    ///     &stream, 2, 2, &alpha, &a, 2, MatrixOp::None, &x, Some(2), &beta, &mut y, None,
    /// )?;
    ///
    /// stream.synchronize()?;
    ///
    /// assert_eq!(&y.as_host_vec()?, &[3.0, 4.0]);
    /// # Ok(())
    /// # }
    /// ```
    #[track_caller]
    pub fn gemv_strided<T: Level2>(
        &mut self,
        stream: &Stream,
        m: usize,
        n: usize,
        alpha: &impl GpuBox<T>,
        a: &impl GpuBuffer<T>,
        lda: usize,
        op_a: MatrixOp,
        x: &impl GpuBuffer<T>,
        x_stride: Option<usize>,
        beta: &impl GpuBox<T>,
        y: &mut impl GpuBuffer<T>,
        y_stride: Option<usize>,
    ) -> Result {
        check_gemv(m, n, a, lda, op_a, x, x_stride, y, y_stride);

        let trans = op_a.to_raw();

        self.with_stream(stream, |ctx| unsafe {
            Ok(T::gemv(
                ctx.raw,
                trans,
                m as i32,
                n as i32,
                alpha.as_device_ptr().as_raw(),
                a.as_device_ptr().as_raw(),
                lda as i32,
                x.as_device_ptr().as_raw(),
                x_stride.unwrap_or(1) as i32,
                beta.as_device_ptr().as_raw(),
                y.as_device_ptr().as_raw_mut(),
                y_stride.unwrap_or(1) as i32,
            )
            .to_result()?)
        })
    }

    /// General Matrix-Vector multiplication:
    /// `y = alpha * op(A) * x + beta * y` where `A` is an `m x n` column-major
    /// matrix with leading dimension `lda`.
    ///
    /// # Panics
    ///
    /// Panics if any of the following conditions are not met:
    /// - `m > 0 && n > 0`
    /// - `lda >= m`
    /// - `a.len() >= lda * n`
    /// - `x.len() >= n` and `y.len() >= m` if `op_a == MatrixOp::None`
    ///   (swapped otherwise)
    ///
    /// # Errors
    ///
    /// Returns the vendor status verbatim if the kernel execution failed.
    #[track_caller]
    pub fn gemv<T: Level2>(
        &mut self,
        stream: &Stream,
        m: usize,
        n: usize,
        alpha: &impl GpuBox<T>,
        a: &impl GpuBuffer<T>,
        lda: usize,
        op_a: MatrixOp,
        x: &impl GpuBuffer<T>,
        beta: &impl GpuBox<T>,
        y: &mut impl GpuBuffer<T>,
    ) -> Result {
        self.gemv_strided(stream, m, n, alpha, a, lda, op_a, x, None, beta, y, None)
    }
}
