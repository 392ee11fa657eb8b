//! Vendor status codes, surfaced verbatim.
//!
//! This layer never retries or translates failures: a cuBLAS status other
//! than success maps one-to-one onto a [`CublasError`] variant and is handed
//! straight back to the caller.

use std::{ffi::CStr, fmt::Display};

use crate::sys;
use cust::error::CudaError;

/// Result that contains the un-dropped value on error.
pub type DropResult<T> = std::result::Result<(), (CublasError, T)>;

#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CublasError {
    NotInitialized,
    AllocFailed,
    InvalidValue,
    ArchMismatch,
    MappingError,
    ExecutionFailed,
    InternalError,
    NotSupported,
    LicenseError,
    /// A status code this binding does not name (newer toolkits add codes),
    /// carried through untouched.
    Unknown(i32),
}

impl std::error::Error for CublasError {}

impl Display for CublasError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        unsafe {
            let ptr = sys::cublasGetStatusString(self.into_raw());
            let cow = CStr::from_ptr(ptr).to_string_lossy();
            f.write_str(cow.as_ref())
        }
    }
}

pub trait ToResult {
    fn to_result(self) -> Result<(), CublasError>;
}

impl ToResult for sys::cublasStatus_t {
    fn to_result(self) -> Result<(), CublasError> {
        use CublasError::*;

        Err(match self {
            sys::cublasStatus_t::CUBLAS_STATUS_SUCCESS => return Ok(()),
            sys::cublasStatus_t::CUBLAS_STATUS_NOT_INITIALIZED => NotInitialized,
            sys::cublasStatus_t::CUBLAS_STATUS_ALLOC_FAILED => AllocFailed,
            sys::cublasStatus_t::CUBLAS_STATUS_INVALID_VALUE => InvalidValue,
            sys::cublasStatus_t::CUBLAS_STATUS_ARCH_MISMATCH => ArchMismatch,
            sys::cublasStatus_t::CUBLAS_STATUS_MAPPING_ERROR => MappingError,
            sys::cublasStatus_t::CUBLAS_STATUS_EXECUTION_FAILED => ExecutionFailed,
            sys::cublasStatus_t::CUBLAS_STATUS_INTERNAL_ERROR => InternalError,
            sys::cublasStatus_t::CUBLAS_STATUS_NOT_SUPPORTED => NotSupported,
            sys::cublasStatus_t::CUBLAS_STATUS_LICENSE_ERROR => LicenseError,
            sys::cublasStatus_t(code) => Unknown(code),
        })
    }
}

impl CublasError {
    pub fn into_raw(self) -> sys::cublasStatus_t {
        use CublasError::*;

        match self {
            NotInitialized => sys::cublasStatus_t::CUBLAS_STATUS_NOT_INITIALIZED,
            AllocFailed => sys::cublasStatus_t::CUBLAS_STATUS_ALLOC_FAILED,
            InvalidValue => sys::cublasStatus_t::CUBLAS_STATUS_INVALID_VALUE,
            ArchMismatch => sys::cublasStatus_t::CUBLAS_STATUS_ARCH_MISMATCH,
            MappingError => sys::cublasStatus_t::CUBLAS_STATUS_MAPPING_ERROR,
            ExecutionFailed => sys::cublasStatus_t::CUBLAS_STATUS_EXECUTION_FAILED,
            InternalError => sys::cublasStatus_t::CUBLAS_STATUS_INTERNAL_ERROR,
            NotSupported => sys::cublasStatus_t::CUBLAS_STATUS_NOT_SUPPORTED,
            LicenseError => sys::cublasStatus_t::CUBLAS_STATUS_LICENSE_ERROR,
            Unknown(code) => sys::cublasStatus_t(code),
        }
    }
}

/// Any error the dispatch layer can surface: a cuBLAS status code or a CUDA
/// driver error from the stream/memory layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Error {
    Cublas(CublasError),
    Cuda(CudaError),
}

impl From<CublasError> for Error {
    fn from(err: CublasError) -> Self {
        Self::Cublas(err)
    }
}

impl From<CudaError> for Error {
    fn from(err: CudaError) -> Self {
        Self::Cuda(err)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Cublas(e) => Some(e),
            Self::Cuda(e) => Some(e),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cublas(_) => write!(f, "cuBLAS error"),
            Self::Cuda(_) => write!(f, "CUDA error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_maps_to_ok() {
        assert_eq!(sys::cublasStatus_t::CUBLAS_STATUS_SUCCESS.to_result(), Ok(()));
    }

    #[test]
    fn named_statuses_round_trip() {
        for status in [
            sys::cublasStatus_t::CUBLAS_STATUS_NOT_INITIALIZED,
            sys::cublasStatus_t::CUBLAS_STATUS_ALLOC_FAILED,
            sys::cublasStatus_t::CUBLAS_STATUS_INVALID_VALUE,
            sys::cublasStatus_t::CUBLAS_STATUS_ARCH_MISMATCH,
            sys::cublasStatus_t::CUBLAS_STATUS_MAPPING_ERROR,
            sys::cublasStatus_t::CUBLAS_STATUS_EXECUTION_FAILED,
            sys::cublasStatus_t::CUBLAS_STATUS_INTERNAL_ERROR,
            sys::cublasStatus_t::CUBLAS_STATUS_NOT_SUPPORTED,
            sys::cublasStatus_t::CUBLAS_STATUS_LICENSE_ERROR,
        ] {
            let err = status.to_result().unwrap_err();
            assert_eq!(err.into_raw(), status);
        }
    }

    #[test]
    fn unrecognized_statuses_pass_through_their_code() {
        // codes newer toolkits return but this header subset does not name
        let err = sys::cublasStatus_t(42).to_result().unwrap_err();
        assert_eq!(err, CublasError::Unknown(42));
        assert_eq!(err.into_raw(), sys::cublasStatus_t(42));
    }
}
