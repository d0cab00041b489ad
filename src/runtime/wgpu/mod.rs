//! WebGPU backend: WGSL generation, kernel caching, and dispatch
//!
//! The contract of this backend is a correct, parameterized kernel plus its
//! launch shape; producing the `(n_lines, len_x)` buffer from an arbitrary
//! N-dimensional array (axis permutation, reshape) is the caller's job.

pub mod cache;
pub mod generator;
pub mod pipeline;

pub use cache::{KernelKey, SplineKernel, get_or_generate_kernel};
pub use generator::generate_spline_prefilter_shader;
pub use pipeline::{
    PipelineCache, SplinePrefilterParams, WORKGROUP_SIZE, launch_spline_prefilter, workgroup_count,
};
