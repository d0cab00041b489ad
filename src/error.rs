//! Error types for splinr

use crate::dtype::DType;
use thiserror::Error;

/// Result type alias using splinr's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during program generation or execution
///
/// Generation errors (`UnsupportedOrder`, `UnsupportedBoundaryMode`,
/// `UnsupportedDType`) are detected synchronously before any program text or
/// buffer state is produced; there is never a partially generated program.
#[derive(Error, Debug)]
pub enum Error {
    /// Spline order outside the supported range for an operation
    #[error("Unsupported spline order {order} for operation '{op}'")]
    UnsupportedOrder {
        /// The rejected order
        order: usize,
        /// The operation name
        op: &'static str,
    },

    /// Boundary mode not in the recognized set
    #[error("Unsupported boundary mode '{mode}'")]
    UnsupportedBoundaryMode {
        /// The rejected mode string
        mode: String,
    },

    /// Unsupported dtype for a code-generation slot
    #[error("Unsupported dtype {dtype:?} for operation '{op}'")]
    UnsupportedDType {
        /// The unsupported dtype
        dtype: DType,
        /// The operation name
        op: &'static str,
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },
}
