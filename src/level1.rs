//! Scalar and vector operations.
//!
//! # Complex scaling
//!
//! [`scal`](CublasContext::scal) is **permanently unsupported for complex
//! scalar types**: the dispatch entry reports
//! [`ExecutionFailed`](crate::error::CublasError::ExecutionFailed) for any
//! input and leaves the buffer untouched, rather than invoking a vendor
//! routine. Callers that need complex scaling must do it through their own
//! elementwise transform.

use crate::{
    context::CublasContext,
    error::{Error, ToResult},
    raw::{ComplexLevel1, FloatLevel1, Level1},
};
use cust::memory::{GpuBox, GpuBuffer};
use cust::stream::Stream;

type Result<T = (), E = Error> = std::result::Result<T, E>;

fn check_stride<T: Level1>(x: &impl GpuBuffer<T>, n: usize, stride: Option<usize>) {
    let raw_len = x.len();
    let needed_len = n * stride.unwrap_or(1);
    assert!(
        raw_len >= needed_len,
        "Buffer is not long enough! required_len is {} ({} stride * {} n) but the buffer length is {}",
        needed_len,
        stride.unwrap_or(1),
        n,
        raw_len
    );
}

impl CublasContext {
    /// Same as [`CublasContext::amax`] but with an explicit stride.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is not long enough for the stride and length requested.
    pub fn amax_strided<T: Level1>(
        &mut self,
        stream: &Stream,
        x: &impl GpuBuffer<T>,
        n: usize,
        stride: Option<usize>,
        result: &mut impl GpuBox<i32>,
    ) -> Result {
        check_stride(x, n, stride);

        self.with_stream(stream, |ctx| unsafe {
            Ok(T::amax(
                ctx.raw,
                n as i32,
                x.as_device_ptr().as_raw(),
                stride.unwrap_or(1) as i32,
                result.as_device_ptr().as_raw_mut(),
            )
            .to_result()?)
        })
    }

    /// Finds the index of the largest element inside of the GPU buffer by
    /// absolute value (by magnitude for complex numbers), writing the
    /// resulting index into `result`. The index is 1-based, not 0-based.
    ///
    /// # Example
    ///
    /// ```
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # let _a = cust::quick_init()?;
    /// # use spindrift::CublasContext;
    /// # use cust::prelude::*;
    /// # use cust::memory::DeviceBox;
    /// # use cust::util::SliceExt;
    /// # let stream = Stream::new(StreamFlags::DEFAULT, None)?;
    /// let mut ctx = CublasContext::new()?;
    /// let data = [0.0f32, 1.0, 0.5, 5.0].as_dbuf()?;
    /// let mut result = DeviceBox::new(&0)?;
    ///
    /// ctx.amax(&stream, &data, &mut result)?;
    ///
    /// stream.synchronize()?;
    ///
    /// assert_eq!(result.as_host_value()?, 4);
    /// # Ok(())
    /// # }
    /// ```
    pub fn amax<T: Level1>(
        &mut self,
        stream: &Stream,
        x: &impl GpuBuffer<T>,
        result: &mut impl GpuBox<i32>,
    ) -> Result {
        self.amax_strided(stream, x, x.len(), None, result)
    }

    /// Same as [`CublasContext::asum`] but with an explicit stride.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is not long enough for the stride and length requested.
    pub fn asum_strided<T: Level1>(
        &mut self,
        stream: &Stream,
        x: &impl GpuBuffer<T>,
        n: usize,
        stride: Option<usize>,
        result: &mut impl GpuBox<T::Real>,
    ) -> Result {
        check_stride(x, n, stride);

        self.with_stream(stream, |ctx| unsafe {
            Ok(T::asum(
                ctx.raw,
                n as i32,
                x.as_device_ptr().as_raw(),
                stride.unwrap_or(1) as i32,
                result.as_device_ptr().as_raw_mut(),
            )
            .to_result()?)
        })
    }

    /// Sums the absolute values (magnitudes for complex numbers) of the
    /// elements of `x`, writing the real-typed sum into `result`.
    pub fn asum<T: Level1>(
        &mut self,
        stream: &Stream,
        x: &impl GpuBuffer<T>,
        result: &mut impl GpuBox<T::Real>,
    ) -> Result {
        self.asum_strided(stream, x, x.len(), None, result)
    }

    /// Same as [`CublasContext::axpy`] but with an explicit stride.
    ///
    /// # Panics
    ///
    /// Panics if the buffers are not long enough for the stride and length requested.
    pub fn axpy_strided<T: Level1>(
        &mut self,
        stream: &Stream,
        alpha: &impl GpuBox<T>,
        n: usize,
        x: &impl GpuBuffer<T>,
        x_stride: Option<usize>,
        y: &mut impl GpuBuffer<T>,
        y_stride: Option<usize>,
    ) -> Result {
        check_stride(x, n, x_stride);
        check_stride(y, n, y_stride);

        self.with_stream(stream, |ctx| unsafe {
            Ok(T::axpy(
                ctx.raw,
                n as i32,
                alpha.as_device_ptr().as_raw(),
                x.as_device_ptr().as_raw(),
                x_stride.unwrap_or(1) as i32,
                y.as_device_ptr().as_raw_mut(),
                y_stride.unwrap_or(1) as i32,
            )
            .to_result()?)
        })
    }

    /// Multiplies `n` elements in `x` by `alpha`, then adds the result to `y`,
    /// overwriting `y` with the result.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` are not long enough for the requested length `n`.
    ///
    /// # Example
    ///
    /// ```
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # let _a = cust::quick_init()?;
    /// # use spindrift::CublasContext;
    /// # use cust::prelude::*;
    /// # use cust::memory::DeviceBox;
    /// # use cust::util::SliceExt;
    /// # let stream = Stream::new(StreamFlags::DEFAULT, None)?;
    /// let mut ctx = CublasContext::new()?;
    /// let alpha = DeviceBox::new(&2.0)?;
    /// let x = [1.0, 2.0, 3.0, 4.0].as_dbuf()?;
    /// let mut y = [1.0; 4].as_dbuf()?;
    ///
    /// ctx.axpy(&stream, &alpha, x.len(), &x, &mut y)?;
    ///
    /// stream.synchronize()?;
    ///
    /// let result = y.as_host_vec()?;
    /// assert_eq!(&result, &[3.0, 5.0, 7.0, 9.0]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn axpy<T: Level1>(
        &mut self,
        stream: &Stream,
        alpha: &impl GpuBox<T>,
        n: usize,
        x: &impl GpuBuffer<T>,
        y: &mut impl GpuBuffer<T>,
    ) -> Result {
        self.axpy_strided(stream, alpha, n, x, None, y, None)
    }

    /// Same as [`CublasContext::copy`] but with an explicit stride.
    ///
    /// # Panics
    ///
    /// Panics if the buffers are not long enough for the stride and length requested.
    pub fn copy_strided<T: Level1>(
        &mut self,
        stream: &Stream,
        n: usize,
        x: &impl GpuBuffer<T>,
        x_stride: Option<usize>,
        y: &mut impl GpuBuffer<T>,
        y_stride: Option<usize>,
    ) -> Result {
        check_stride(x, n, x_stride);
        check_stride(y, n, y_stride);

        self.with_stream(stream, |ctx| unsafe {
            Ok(T::copy(
                ctx.raw,
                n as i32,
                x.as_device_ptr().as_raw(),
                x_stride.unwrap_or(1) as i32,
                y.as_device_ptr().as_raw_mut(),
                y_stride.unwrap_or(1) as i32,
            )
            .to_result()?)
        })
    }

    /// Copies `n` elements from `x` into `y`, overriding any previous data
    /// inside `y`.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` are not large enough for the requested amount of elements.
    pub fn copy<T: Level1>(
        &mut self,
        stream: &Stream,
        n: usize,
        x: &impl GpuBuffer<T>,
        y: &mut impl GpuBuffer<T>,
    ) -> Result {
        self.copy_strided(stream, n, x, None, y, None)
    }

    /// Same as [`CublasContext::dot`] but with an explicit stride.
    ///
    /// # Panics
    ///
    /// Panics if the buffers are not long enough for the stride and length requested.
    pub fn dot_strided<T: FloatLevel1>(
        &mut self,
        stream: &Stream,
        n: usize,
        x: &impl GpuBuffer<T>,
        x_stride: Option<usize>,
        y: &impl GpuBuffer<T>,
        y_stride: Option<usize>,
        result: &mut impl GpuBox<T>,
    ) -> Result {
        check_stride(x, n, x_stride);
        check_stride(y, n, y_stride);

        self.with_stream(stream, |ctx| unsafe {
            Ok(T::dot(
                ctx.raw,
                n as i32,
                x.as_device_ptr().as_raw(),
                x_stride.unwrap_or(1) as i32,
                y.as_device_ptr().as_raw(),
                y_stride.unwrap_or(1) as i32,
                result.as_device_ptr().as_raw_mut(),
            )
            .to_result()?)
        })
    }

    /// Computes the dot product of two float vectors, writing the scalar
    /// result into `result`.
    pub fn dot<T: FloatLevel1>(
        &mut self,
        stream: &Stream,
        x: &impl GpuBuffer<T>,
        y: &impl GpuBuffer<T>,
        result: &mut impl GpuBox<T>,
    ) -> Result {
        let n = x.len().min(y.len());
        self.dot_strided(stream, n, x, None, y, None, result)
    }

    /// Same as [`CublasContext::dotu`] but with an explicit stride.
    ///
    /// # Panics
    ///
    /// Panics if the buffers are not long enough for the stride and length requested.
    pub fn dotu_strided<T: ComplexLevel1>(
        &mut self,
        stream: &Stream,
        n: usize,
        x: &impl GpuBuffer<T>,
        x_stride: Option<usize>,
        y: &impl GpuBuffer<T>,
        y_stride: Option<usize>,
        result: &mut impl GpuBox<T>,
    ) -> Result {
        check_stride(x, n, x_stride);
        check_stride(y, n, y_stride);

        self.with_stream(stream, |ctx| unsafe {
            Ok(T::dotu(
                ctx.raw,
                n as i32,
                x.as_device_ptr().as_raw(),
                x_stride.unwrap_or(1) as i32,
                y.as_device_ptr().as_raw(),
                y_stride.unwrap_or(1) as i32,
                result.as_device_ptr().as_raw_mut(),
            )
            .to_result()?)
        })
    }

    /// Computes the unconjugated dot product of two complex vectors.
    pub fn dotu<T: ComplexLevel1>(
        &mut self,
        stream: &Stream,
        x: &impl GpuBuffer<T>,
        y: &impl GpuBuffer<T>,
        result: &mut impl GpuBox<T>,
    ) -> Result {
        let n = x.len().min(y.len());
        self.dotu_strided(stream, n, x, None, y, None, result)
    }

    /// Same as [`CublasContext::dotc`] but with an explicit stride.
    ///
    /// # Panics
    ///
    /// Panics if the buffers are not long enough for the stride and length requested.
    pub fn dotc_strided<T: ComplexLevel1>(
        &mut self,
        stream: &Stream,
        n: usize,
        x: &impl GpuBuffer<T>,
        x_stride: Option<usize>,
        y: &impl GpuBuffer<T>,
        y_stride: Option<usize>,
        result: &mut impl GpuBox<T>,
    ) -> Result {
        check_stride(x, n, x_stride);
        check_stride(y, n, y_stride);

        self.with_stream(stream, |ctx| unsafe {
            Ok(T::dotc(
                ctx.raw,
                n as i32,
                x.as_device_ptr().as_raw(),
                x_stride.unwrap_or(1) as i32,
                y.as_device_ptr().as_raw(),
                y_stride.unwrap_or(1) as i32,
                result.as_device_ptr().as_raw_mut(),
            )
            .to_result()?)
        })
    }

    /// Computes the conjugated dot product of two complex vectors: `x` is
    /// conjugated elementwise before the multiply.
    pub fn dotc<T: ComplexLevel1>(
        &mut self,
        stream: &Stream,
        x: &impl GpuBuffer<T>,
        y: &impl GpuBuffer<T>,
        result: &mut impl GpuBox<T>,
    ) -> Result {
        let n = x.len().min(y.len());
        self.dotc_strided(stream, n, x, None, y, None, result)
    }

    /// Same as [`CublasContext::nrm2`] but with an explicit stride.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is not long enough for the stride and length requested.
    pub fn nrm2_strided<T: Level1>(
        &mut self,
        stream: &Stream,
        x: &impl GpuBuffer<T>,
        n: usize,
        stride: Option<usize>,
        result: &mut impl GpuBox<T::Real>,
    ) -> Result {
        check_stride(x, n, stride);

        self.with_stream(stream, |ctx| unsafe {
            Ok(T::nrm2(
                ctx.raw,
                n as i32,
                x.as_device_ptr().as_raw(),
                stride.unwrap_or(1) as i32,
                result.as_device_ptr().as_raw_mut(),
            )
            .to_result()?)
        })
    }

    /// Computes the euclidian norm of `x`, writing the real-typed result into
    /// `result`.
    pub fn nrm2<T: Level1>(
        &mut self,
        stream: &Stream,
        x: &impl GpuBuffer<T>,
        result: &mut impl GpuBox<T::Real>,
    ) -> Result {
        self.nrm2_strided(stream, x, x.len(), None, result)
    }

    /// Same as [`CublasContext::scal`] but with an explicit stride.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is not long enough for the stride and length requested.
    pub fn scal_strided<T: Level1>(
        &mut self,
        stream: &Stream,
        alpha: &impl GpuBox<T::Real>,
        n: usize,
        x: &mut impl GpuBuffer<T>,
        stride: Option<usize>,
    ) -> Result {
        check_stride(x, n, stride);

        self.with_stream(stream, |ctx| unsafe {
            Ok(T::scal(
                ctx.raw,
                n as i32,
                alpha.as_device_ptr().as_raw(),
                x.as_device_ptr().as_raw_mut(),
                stride.unwrap_or(1) as i32,
            )
            .to_result()?)
        })
    }

    /// Scales `x` in place by the real scalar `alpha`.
    ///
    /// # Errors
    ///
    /// For `Complex32`/`Complex64` buffers this always returns
    /// [`ExecutionFailed`](crate::error::CublasError::ExecutionFailed) and
    /// leaves `x` untouched; see the module docs.
    pub fn scal<T: Level1>(
        &mut self,
        stream: &Stream,
        alpha: &impl GpuBox<T::Real>,
        n: usize,
        x: &mut impl GpuBuffer<T>,
    ) -> Result {
        self.scal_strided(stream, alpha, n, x, None)
    }

    /// Same as [`CublasContext::swap`] but with an explicit stride.
    ///
    /// # Panics
    ///
    /// Panics if the buffers are not long enough for the stride and length requested.
    pub fn swap_strided<T: Level1>(
        &mut self,
        stream: &Stream,
        n: usize,
        x: &mut impl GpuBuffer<T>,
        x_stride: Option<usize>,
        y: &mut impl GpuBuffer<T>,
        y_stride: Option<usize>,
    ) -> Result {
        check_stride(x, n, x_stride);
        check_stride(y, n, y_stride);

        self.with_stream(stream, |ctx| unsafe {
            Ok(T::swap(
                ctx.raw,
                n as i32,
                x.as_device_ptr().as_raw_mut(),
                x_stride.unwrap_or(1) as i32,
                y.as_device_ptr().as_raw_mut(),
                y_stride.unwrap_or(1) as i32,
            )
            .to_result()?)
        })
    }

    /// Swaps the first `n` elements of `x` and `y` elementwise.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` are not large enough for the requested amount of elements.
    pub fn swap<T: Level1>(
        &mut self,
        stream: &Stream,
        n: usize,
        x: &mut impl GpuBuffer<T>,
        y: &mut impl GpuBuffer<T>,
    ) -> Result {
        self.swap_strided(stream, n, x, None, y, None)
    }
}
