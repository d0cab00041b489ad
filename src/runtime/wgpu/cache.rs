//! Global kernel cache for generated prefilter shaders
//!
//! Generation is a pure function of the key, so redundant generation would
//! be harmless; the cache only saves the rendering work and guarantees that
//! every launch site for one configuration shares one source string.

use super::generator::{entry_point_name, generate_spline_prefilter_shader};
use crate::dtype::KernelParams;
use crate::error::Result;
use crate::spline::boundary::{BoundaryMode, ResolvedMode};
use crate::spline::program::FilterProgram;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

/// Full configuration of one generated kernel
///
/// The mode is stored resolved, so `nearest`, `constant`, and `mirror`
/// requests share a single cache entry (they generate identical source).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct KernelKey {
    /// Resolved boundary mode
    pub mode: ResolvedMode,
    /// Spline order
    pub order: usize,
    /// Numeric precision tags
    pub params: KernelParams,
}

/// A generated, ready-to-compile prefilter kernel
#[derive(Debug)]
pub struct SplineKernel {
    /// Configuration this kernel was generated for
    pub key: KernelKey,
    /// Complete WGSL module source
    pub source: String,
    /// Name of the batch entry point in `source`
    pub entry_point: String,
}

impl SplineKernel {
    /// Stable module name for pipeline-level caching
    pub fn module_name(&self) -> String {
        format!(
            "spline_prefilter_{}_{}_{}_{}_{}",
            self.key.mode,
            self.key.order,
            self.key.params.index,
            self.key.params.data,
            self.key.params.pole
        )
    }
}

/// Global kernel cache: configuration key -> generated kernel
static KERNEL_CACHE: OnceLock<Mutex<HashMap<KernelKey, Arc<SplineKernel>>>> = OnceLock::new();

/// Get or generate the prefilter kernel for a configuration
///
/// Identical configurations return the same `Arc` (and therefore
/// byte-identical source). Unsupported orders, modes, or dtypes fail
/// before anything is inserted.
pub fn get_or_generate_kernel(
    order: usize,
    mode: BoundaryMode,
    params: KernelParams,
) -> Result<Arc<SplineKernel>> {
    let key = KernelKey {
        mode: mode.resolve(),
        order,
        params,
    };

    let cache = KERNEL_CACHE.get_or_init(|| Mutex::new(HashMap::new()));
    let mut cache_guard = cache.lock().unwrap_or_else(|e| e.into_inner());

    if let Some(kernel) = cache_guard.get(&key) {
        return Ok(kernel.clone());
    }

    let program = FilterProgram::build(order, mode)?;
    let source = generate_spline_prefilter_shader(&program, &params)?;
    let kernel = Arc::new(SplineKernel {
        key,
        source,
        entry_point: entry_point_name(&params)?,
    });
    cache_guard.insert(key, kernel.clone());

    Ok(kernel)
}
