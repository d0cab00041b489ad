//! Execution backends for prefilter programs
//!
//! The CPU backend interprets a [`crate::spline::FilterProgram`] directly;
//! the WebGPU backend renders it to WGSL and dispatches it over a flat grid
//! of per-line workers.

#[cfg(feature = "cpu")]
pub mod cpu;

#[cfg(feature = "wgpu")]
pub mod wgpu;
