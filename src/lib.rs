//! # splinr
//!
//! **B-spline prefilter kernel generation for batched GPU signal lines.**
//!
//! splinr produces the numerical program that converts raw samples into
//! B-spline interpolation coefficients: a causal/anticausal recursive (IIR)
//! filter per line, parameterized by spline order (2-5), boundary-extension
//! mode, and numeric precision. It also evaluates the closed-form B-spline
//! interpolation weights for orders 1-5.
//!
//! ## Architecture
//!
//! ```text
//! order, mode ──> FilterProgram (structured op sequence)
//!                     ├── runtime::cpu     interprets it in f64
//!                     └── runtime::wgpu    renders WGSL, caches, dispatches
//! spline_weights(order, x) ──> interpolation weight vector (independent)
//! ```
//!
//! The prefilter runs one worker per line over a flat `(n_lines, len_x)`
//! buffer; within a line the recursion is strictly sequential (each element
//! depends on its updated neighbor), so parallelism exists only across
//! lines.
//!
//! ## Quick Start
//!
//! ```rust
//! use splinr::prelude::*;
//!
//! // Convert samples to cubic spline coefficients on the host
//! let mut line = [1.0, 4.0, 1.0, 4.0, 1.0];
//! splinr::runtime::cpu::spline_filter1d(&mut line, 3, BoundaryMode::Mirror)?;
//!
//! // Interpolating at an integer knot reproduces the original sample
//! let v = splinr::runtime::cpu::interpolate_line(&line, 3, ResolvedMode::Mirror, 1.0)?;
//! assert!((v - 4.0).abs() < 1e-9);
//! # Ok::<(), splinr::error::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cpu` (default): host reference executor
//! - `wgpu` (default): WGSL generation, kernel cache, and dispatch
//! - `rayon`: multi-threaded CPU batch filtering

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dtype;
pub mod error;
pub mod runtime;
pub mod spline;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::dtype::{DType, KernelParams};
    pub use crate::error::{Error, Result};
    pub use crate::spline::{
        BoundaryMode, FilterOp, FilterProgram, ResolvedMode, get_gain, get_poles, spline_weights,
    };

    #[cfg(feature = "wgpu")]
    pub use crate::runtime::wgpu::{PipelineCache, SplineKernel, get_or_generate_kernel};
}
