//! The cuBLAS handle wrapper everything else hangs off of.

use crate::{error::*, sys};
use cust::stream::Stream;
use std::mem::{self, MaybeUninit};
use std::ptr;

type Result<T, E = Error> = std::result::Result<T, E>;

/// The central structure required to issue any BLAS call. It owns a cuBLAS
/// handle and the library-internal allocations behind it.
///
/// # Multithreaded Usage
///
/// Sharing one context across threads is legal for cuBLAS but slow and easy
/// to misuse, so it is not exposed here. Create a context per thread, as the
/// cuBLAS docs recommend.
///
/// # Multi-Device Usage
///
/// A context is tied to the CUDA context that was current when it was
/// created; create one per device.
///
/// # Pointer Mode
///
/// The context is created in device pointer mode: scalar operands and scalar
/// results (`alpha`, dot products, norms, indices) live in device memory and
/// are passed as [`GpuBox`](cust::memory::GpuBox) values by the typed
/// methods. Nothing is read back to the host implicitly.
#[derive(Debug)]
pub struct CublasContext {
    pub(crate) raw: sys::cublasHandle_t,
}

impl CublasContext {
    /// Creates a new cuBLAS context, allocating all of the required host and
    /// device memory.
    pub fn new() -> Result<Self> {
        let mut raw = MaybeUninit::uninit();
        unsafe {
            sys::cublasCreate_v2(raw.as_mut_ptr()).to_result()?;
            sys::cublasSetPointerMode_v2(
                raw.assume_init(),
                sys::cublasPointerMode_t::CUBLAS_POINTER_MODE_DEVICE,
            )
            .to_result()?;
            let raw = raw.assume_init();
            log::trace!("created cuBLAS context {:p}", raw);
            Ok(Self { raw })
        }
    }

    /// Tries to destroy a [`CublasContext`], returning an error if it fails.
    pub fn drop(mut ctx: CublasContext) -> DropResult<CublasContext> {
        if ctx.raw.is_null() {
            return Ok(());
        }

        unsafe {
            let inner = mem::replace(&mut ctx.raw, ptr::null_mut());
            match sys::cublasDestroy_v2(inner).to_result() {
                Ok(()) => {
                    log::trace!("destroyed cuBLAS context {:p}", inner);
                    mem::forget(ctx);
                    Ok(())
                }
                Err(e) => Err((e, CublasContext { raw: inner })),
            }
        }
    }

    /// Returns the major, minor, and patch versions of the cuBLAS library.
    pub fn version(&self) -> (u32, u32, u32) {
        let mut raw = MaybeUninit::<u32>::uninit();
        unsafe {
            // getVersion can't fail
            sys::cublasGetVersion_v2(self.raw, raw.as_mut_ptr().cast())
                .to_result()
                .unwrap();

            let raw = raw.assume_init();
            (raw / 1000, (raw % 1000) / 100, raw % 100)
        }
    }

    /// Executes a given closure with the context's work queued on a specific
    /// CUDA [`Stream`]: sets the stream on the handle, runs the closure, then
    /// resets the stream back to NULL.
    ///
    /// Work queued this way is asynchronous relative to the host; call
    /// `stream.synchronize()` before reading results.
    pub fn with_stream<T, F: FnOnce(&mut Self) -> Result<T>>(
        &mut self,
        stream: &Stream,
        func: F,
    ) -> Result<T> {
        unsafe {
            // cudaStream_t is the same as CUstream
            sys::cublasSetStream_v2(self.raw, stream.as_inner() as sys::cudaStream_t)
                .to_result()?;
            let res = func(self)?;
            // reset the stream back to NULL in case the caller drops the
            // stream and then issues a raw sys call with this handle.
            sys::cublasSetStream_v2(self.raw, ptr::null_mut()).to_result()?;
            Ok(res)
        }
    }
}

impl Drop for CublasContext {
    fn drop(&mut self) {
        unsafe {
            log::trace!("dropping cuBLAS context {:p}", self.raw);
            sys::cublasDestroy_v2(self.raw);
        }
    }
}
