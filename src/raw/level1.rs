use crate::{sys::*, BlasScalar};
use cust::memory::DeviceCopy;
use num_complex::{Complex32, Complex64};
use std::os::raw::c_int;

/// Scalar and vector primitives available for every supported scalar type.
///
/// `scal` scales by a *real* scalar of the backing precision, which is why
/// its alpha is `Self::Real` rather than `Self`.
pub trait Level1: BlasScalar + DeviceCopy {
    unsafe fn amax(
        handle: cublasHandle_t,
        n: c_int,
        x: *const Self,
        incx: c_int,
        result: *mut c_int,
    ) -> cublasStatus_t;
    unsafe fn asum(
        handle: cublasHandle_t,
        n: c_int,
        x: *const Self,
        incx: c_int,
        result: *mut Self::Real,
    ) -> cublasStatus_t;
    unsafe fn axpy(
        handle: cublasHandle_t,
        n: c_int,
        alpha: *const Self,
        x: *const Self,
        incx: c_int,
        y: *mut Self,
        incy: c_int,
    ) -> cublasStatus_t;
    unsafe fn copy(
        handle: cublasHandle_t,
        n: c_int,
        x: *const Self,
        incx: c_int,
        y: *mut Self,
        incy: c_int,
    ) -> cublasStatus_t;
    unsafe fn nrm2(
        handle: cublasHandle_t,
        n: c_int,
        x: *const Self,
        incx: c_int,
        result: *mut Self::Real,
    ) -> cublasStatus_t;
    unsafe fn scal(
        handle: cublasHandle_t,
        n: c_int,
        alpha: *const Self::Real,
        x: *mut Self,
        incx: c_int,
    ) -> cublasStatus_t;
    unsafe fn swap(
        handle: cublasHandle_t,
        n: c_int,
        x: *mut Self,
        incx: c_int,
        y: *mut Self,
        incy: c_int,
    ) -> cublasStatus_t;
}

impl Level1 for f32 {
    unsafe fn amax(
        handle: cublasHandle_t,
        n: c_int,
        x: *const Self,
        incx: c_int,
        result: *mut c_int,
    ) -> cublasStatus_t {
        cublasIsamax_v2(handle, n, x, incx, result)
    }
    unsafe fn asum(
        handle: cublasHandle_t,
        n: c_int,
        x: *const Self,
        incx: c_int,
        result: *mut Self::Real,
    ) -> cublasStatus_t {
        cublasSasum_v2(handle, n, x, incx, result)
    }
    unsafe fn axpy(
        handle: cublasHandle_t,
        n: c_int,
        alpha: *const Self,
        x: *const Self,
        incx: c_int,
        y: *mut Self,
        incy: c_int,
    ) -> cublasStatus_t {
        cublasSaxpy_v2(handle, n, alpha, x, incx, y, incy)
    }
    unsafe fn copy(
        handle: cublasHandle_t,
        n: c_int,
        x: *const Self,
        incx: c_int,
        y: *mut Self,
        incy: c_int,
    ) -> cublasStatus_t {
        cublasScopy_v2(handle, n, x, incx, y, incy)
    }
    unsafe fn nrm2(
        handle: cublasHandle_t,
        n: c_int,
        x: *const Self,
        incx: c_int,
        result: *mut Self::Real,
    ) -> cublasStatus_t {
        cublasSnrm2_v2(handle, n, x, incx, result)
    }
    unsafe fn scal(
        handle: cublasHandle_t,
        n: c_int,
        alpha: *const Self::Real,
        x: *mut Self,
        incx: c_int,
    ) -> cublasStatus_t {
        cublasSscal_v2(handle, n, alpha, x, incx)
    }
    unsafe fn swap(
        handle: cublasHandle_t,
        n: c_int,
        x: *mut Self,
        incx: c_int,
        y: *mut Self,
        incy: c_int,
    ) -> cublasStatus_t {
        cublasSswap_v2(handle, n, x, incx, y, incy)
    }
}

impl Level1 for f64 {
    unsafe fn amax(
        handle: cublasHandle_t,
        n: c_int,
        x: *const Self,
        incx: c_int,
        result: *mut c_int,
    ) -> cublasStatus_t {
        cublasIdamax_v2(handle, n, x, incx, result)
    }
    unsafe fn asum(
        handle: cublasHandle_t,
        n: c_int,
        x: *const Self,
        incx: c_int,
        result: *mut Self::Real,
    ) -> cublasStatus_t {
        cublasDasum_v2(handle, n, x, incx, result)
    }
    unsafe fn axpy(
        handle: cublasHandle_t,
        n: c_int,
        alpha: *const Self,
        x: *const Self,
        incx: c_int,
        y: *mut Self,
        incy: c_int,
    ) -> cublasStatus_t {
        cublasDaxpy_v2(handle, n, alpha, x, incx, y, incy)
    }
    unsafe fn copy(
        handle: cublasHandle_t,
        n: c_int,
        x: *const Self,
        incx: c_int,
        y: *mut Self,
        incy: c_int,
    ) -> cublasStatus_t {
        cublasDcopy_v2(handle, n, x, incx, y, incy)
    }
    unsafe fn nrm2(
        handle: cublasHandle_t,
        n: c_int,
        x: *const Self,
        incx: c_int,
        result: *mut Self::Real,
    ) -> cublasStatus_t {
        cublasDnrm2_v2(handle, n, x, incx, result)
    }
    unsafe fn scal(
        handle: cublasHandle_t,
        n: c_int,
        alpha: *const Self::Real,
        x: *mut Self,
        incx: c_int,
    ) -> cublasStatus_t {
        cublasDscal_v2(handle, n, alpha, x, incx)
    }
    unsafe fn swap(
        handle: cublasHandle_t,
        n: c_int,
        x: *mut Self,
        incx: c_int,
        y: *mut Self,
        incy: c_int,
    ) -> cublasStatus_t {
        cublasDswap_v2(handle, n, x, incx, y, incy)
    }
}

impl Level1 for Complex32 {
    unsafe fn amax(
        handle: cublasHandle_t,
        n: c_int,
        x: *const Self,
        incx: c_int,
        result: *mut c_int,
    ) -> cublasStatus_t {
        cublasIcamax_v2(handle, n, x.cast(), incx, result)
    }
    unsafe fn asum(
        handle: cublasHandle_t,
        n: c_int,
        x: *const Self,
        incx: c_int,
        result: *mut Self::Real,
    ) -> cublasStatus_t {
        cublasScasum_v2(handle, n, x.cast(), incx, result)
    }
    unsafe fn axpy(
        handle: cublasHandle_t,
        n: c_int,
        alpha: *const Self,
        x: *const Self,
        incx: c_int,
        y: *mut Self,
        incy: c_int,
    ) -> cublasStatus_t {
        cublasCaxpy_v2(handle, n, alpha.cast(), x.cast(), incx, y.cast(), incy)
    }
    unsafe fn copy(
        handle: cublasHandle_t,
        n: c_int,
        x: *const Self,
        incx: c_int,
        y: *mut Self,
        incy: c_int,
    ) -> cublasStatus_t {
        cublasCcopy_v2(handle, n, x.cast(), incx, y.cast(), incy)
    }
    unsafe fn nrm2(
        handle: cublasHandle_t,
        n: c_int,
        x: *const Self,
        incx: c_int,
        result: *mut Self::Real,
    ) -> cublasStatus_t {
        cublasScnrm2_v2(handle, n, x.cast(), incx, result)
    }
    // Scaling complex vectors is not wired through: the contract is a fixed
    // execution failure and an untouched buffer. See the module docs on
    // `level1` for the caller-facing statement of the gap.
    // TODO: forward to cublasCsscal_v2 once complex scaling is supported.
    unsafe fn scal(
        _handle: cublasHandle_t,
        _n: c_int,
        _alpha: *const Self::Real,
        _x: *mut Self,
        _incx: c_int,
    ) -> cublasStatus_t {
        cublasStatus_t::CUBLAS_STATUS_EXECUTION_FAILED
    }
    unsafe fn swap(
        handle: cublasHandle_t,
        n: c_int,
        x: *mut Self,
        incx: c_int,
        y: *mut Self,
        incy: c_int,
    ) -> cublasStatus_t {
        cublasCswap_v2(handle, n, x.cast(), incx, y.cast(), incy)
    }
}

impl Level1 for Complex64 {
    unsafe fn amax(
        handle: cublasHandle_t,
        n: c_int,
        x: *const Self,
        incx: c_int,
        result: *mut c_int,
    ) -> cublasStatus_t {
        cublasIzamax_v2(handle, n, x.cast(), incx, result)
    }
    unsafe fn asum(
        handle: cublasHandle_t,
        n: c_int,
        x: *const Self,
        incx: c_int,
        result: *mut Self::Real,
    ) -> cublasStatus_t {
        cublasDzasum_v2(handle, n, x.cast(), incx, result)
    }
    unsafe fn axpy(
        handle: cublasHandle_t,
        n: c_int,
        alpha: *const Self,
        x: *const Self,
        incx: c_int,
        y: *mut Self,
        incy: c_int,
    ) -> cublasStatus_t {
        cublasZaxpy_v2(handle, n, alpha.cast(), x.cast(), incx, y.cast(), incy)
    }
    unsafe fn copy(
        handle: cublasHandle_t,
        n: c_int,
        x: *const Self,
        incx: c_int,
        y: *mut Self,
        incy: c_int,
    ) -> cublasStatus_t {
        cublasZcopy_v2(handle, n, x.cast(), incx, y.cast(), incy)
    }
    unsafe fn nrm2(
        handle: cublasHandle_t,
        n: c_int,
        x: *const Self,
        incx: c_int,
        result: *mut Self::Real,
    ) -> cublasStatus_t {
        cublasDznrm2_v2(handle, n, x.cast(), incx, result)
    }
    // Same deliberate gap as the Complex32 impl.
    // TODO: forward to cublasZdscal_v2 once complex scaling is supported.
    unsafe fn scal(
        _handle: cublasHandle_t,
        _n: c_int,
        _alpha: *const Self::Real,
        _x: *mut Self,
        _incx: c_int,
    ) -> cublasStatus_t {
        cublasStatus_t::CUBLAS_STATUS_EXECUTION_FAILED
    }
    unsafe fn swap(
        handle: cublasHandle_t,
        n: c_int,
        x: *mut Self,
        incx: c_int,
        y: *mut Self,
        incy: c_int,
    ) -> cublasStatus_t {
        cublasZswap_v2(handle, n, x.cast(), incx, y.cast(), incy)
    }
}

/// Level-1 methods exclusive to floats.
pub trait FloatLevel1: Level1 {
    unsafe fn dot(
        handle: cublasHandle_t,
        n: c_int,
        x: *const Self,
        incx: c_int,
        y: *const Self,
        incy: c_int,
        result: *mut Self,
    ) -> cublasStatus_t;
}

impl FloatLevel1 for f32 {
    unsafe fn dot(
        handle: cublasHandle_t,
        n: c_int,
        x: *const Self,
        incx: c_int,
        y: *const Self,
        incy: c_int,
        result: *mut Self,
    ) -> cublasStatus_t {
        cublasSdot_v2(handle, n, x, incx, y, incy, result)
    }
}

impl FloatLevel1 for f64 {
    unsafe fn dot(
        handle: cublasHandle_t,
        n: c_int,
        x: *const Self,
        incx: c_int,
        y: *const Self,
        incy: c_int,
        result: *mut Self,
    ) -> cublasStatus_t {
        cublasDdot_v2(handle, n, x, incx, y, incy, result)
    }
}

/// Level-1 methods exclusive to complex numbers.
pub trait ComplexLevel1: Level1 {
    unsafe fn dotu(
        handle: cublasHandle_t,
        n: c_int,
        x: *const Self,
        incx: c_int,
        y: *const Self,
        incy: c_int,
        result: *mut Self,
    ) -> cublasStatus_t;
    unsafe fn dotc(
        handle: cublasHandle_t,
        n: c_int,
        x: *const Self,
        incx: c_int,
        y: *const Self,
        incy: c_int,
        result: *mut Self,
    ) -> cublasStatus_t;
}

impl ComplexLevel1 for Complex32 {
    unsafe fn dotu(
        handle: cublasHandle_t,
        n: c_int,
        x: *const Self,
        incx: c_int,
        y: *const Self,
        incy: c_int,
        result: *mut Self,
    ) -> cublasStatus_t {
        cublasCdotu_v2(handle, n, x.cast(), incx, y.cast(), incy, result.cast())
    }
    unsafe fn dotc(
        handle: cublasHandle_t,
        n: c_int,
        x: *const Self,
        incx: c_int,
        y: *const Self,
        incy: c_int,
        result: *mut Self,
    ) -> cublasStatus_t {
        cublasCdotc_v2(handle, n, x.cast(), incx, y.cast(), incy, result.cast())
    }
}

impl ComplexLevel1 for Complex64 {
    unsafe fn dotu(
        handle: cublasHandle_t,
        n: c_int,
        x: *const Self,
        incx: c_int,
        y: *const Self,
        incy: c_int,
        result: *mut Self,
    ) -> cublasStatus_t {
        cublasZdotu_v2(handle, n, x.cast(), incx, y.cast(), incy, result.cast())
    }
    unsafe fn dotc(
        handle: cublasHandle_t,
        n: c_int,
        x: *const Self,
        incx: c_int,
        y: *const Self,
        incy: c_int,
        result: *mut Self,
    ) -> cublasStatus_t {
        cublasZdotc_v2(handle, n, x.cast(), incx, y.cast(), incy, result.cast())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    // The complex scal entry points are a documented permanent failure and
    // must not dereference anything, so calling them with null pointers is
    // fine (and proves they don't touch the buffer).
    #[test]
    fn complex_scal_reports_execution_failure_without_touching_memory() {
        unsafe {
            let status = <Complex32 as Level1>::scal(ptr::null_mut(), 4, ptr::null(), ptr::null_mut(), 1);
            assert_eq!(status, cublasStatus_t::CUBLAS_STATUS_EXECUTION_FAILED);

            let status = <Complex64 as Level1>::scal(ptr::null_mut(), 4, ptr::null(), ptr::null_mut(), 1);
            assert_eq!(status, cublasStatus_t::CUBLAS_STATUS_EXECUTION_FAILED);
        }
    }
}
