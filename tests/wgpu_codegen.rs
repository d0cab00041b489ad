//! Integration tests for WGSL generation and the kernel cache
//!
//! No device is needed: sources are validated with naga's WGSL frontend,
//! the same parser wgpu feeds shaders through at module creation.

#![cfg(feature = "wgpu")]

use std::sync::Arc;

use splinr::dtype::{DType, KernelParams};
use splinr::runtime::wgpu::{
    WORKGROUP_SIZE, generate_spline_prefilter_shader, get_or_generate_kernel, workgroup_count,
};
use splinr::spline::{BoundaryMode, FilterProgram};

fn validate_wgsl_syntax(source: &str) {
    use wgpu::naga::front::wgsl;
    let mut frontend = wgsl::Frontend::new();
    if let Err(e) = frontend.parse(source) {
        panic!("WGSL parse error: {e}\n\nShader:\n{source}");
    }
}

// ============================================================================
// Generated source structure
// ============================================================================

#[test]
fn test_generated_source_shape() {
    let kernel = get_or_generate_kernel(3, BoundaryMode::Mirror, KernelParams::default()).unwrap();
    assert_eq!(kernel.entry_point, "spline_prefilter_f32");
    assert!(kernel.source.contains("fn spline_prefilter1d(base: u32, n: u32)"));
    assert!(kernel.source.contains("@workgroup_size(256)"));
    assert!(kernel.source.contains("var<storage, read_write> data: array<f32>"));
    assert!(kernel.source.contains("struct SplinePrefilterParams"));
    validate_wgsl_syntax(&kernel.source);
}

#[test]
fn test_every_configuration_parses() {
    let param_sets = [
        KernelParams::default(),
        KernelParams {
            index: DType::I32,
            data: DType::F32,
            pole: DType::F32,
        },
        KernelParams {
            index: DType::U32,
            data: DType::F16,
            pole: DType::F16,
        },
        KernelParams {
            index: DType::I32,
            data: DType::F16,
            pole: DType::F32,
        },
    ];
    for mode in [
        BoundaryMode::Mirror,
        BoundaryMode::Wrap,
        BoundaryMode::Reflect,
    ] {
        for order in 2..=5 {
            let program = FilterProgram::build(order, mode).unwrap();
            for params in &param_sets {
                let source = generate_spline_prefilter_shader(&program, params).unwrap();
                validate_wgsl_syntax(&source);
            }
        }
    }
}

#[test]
fn test_pole_count_in_source() {
    // One causal and one anticausal sweep per pole.
    for (order, n_poles) in [(2, 1), (3, 1), (4, 2), (5, 2)] {
        let program = FilterProgram::build(order, BoundaryMode::Wrap).unwrap();
        let source =
            generate_spline_prefilter_shader(&program, &KernelParams::default()).unwrap();
        let sweeps = source.matches("// causal filter for the current pole").count();
        assert_eq!(sweeps, n_poles, "order {}", order);
    }
}

// ============================================================================
// Cache behavior
// ============================================================================

#[test]
fn test_identical_keys_byte_identical_programs() {
    let params = KernelParams::default();
    let a = get_or_generate_kernel(4, BoundaryMode::Reflect, params).unwrap();
    let b = get_or_generate_kernel(4, BoundaryMode::Reflect, params).unwrap();
    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(a.source, b.source);
}

#[test]
fn test_mode_aliases_hit_same_cache_entry() {
    let params = KernelParams::default();
    let mirror = get_or_generate_kernel(5, BoundaryMode::Mirror, params).unwrap();
    let nearest = get_or_generate_kernel(5, BoundaryMode::Nearest, params).unwrap();
    let constant = get_or_generate_kernel(5, BoundaryMode::Constant, params).unwrap();
    assert!(Arc::ptr_eq(&mirror, &nearest));
    assert!(Arc::ptr_eq(&mirror, &constant));
    assert_eq!(mirror.source, nearest.source);
    assert_eq!(mirror.source, constant.source);
}

// ============================================================================
// Launch shape
// ============================================================================

#[test]
fn test_flat_launch_shape_covers_lines() {
    assert_eq!(WORKGROUP_SIZE, 256);
    assert_eq!(workgroup_count(1), 1);
    assert_eq!(workgroup_count(255), 1);
    assert_eq!(workgroup_count(256), 1);
    assert_eq!(workgroup_count(257), 2);
    // Every line gets a worker, and no workgroup is wasted beyond rounding.
    for n_lines in [1usize, 100, 4096, 100_000] {
        let groups = workgroup_count(n_lines) as usize;
        assert!(groups * 256 >= n_lines);
        assert!((groups - 1) * 256 < n_lines);
    }
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_generation_errors() {
    let params = KernelParams::default();
    assert!(matches!(
        get_or_generate_kernel(6, BoundaryMode::Mirror, params),
        Err(splinr::error::Error::UnsupportedOrder { order: 6, .. })
    ));
    assert!(matches!(
        get_or_generate_kernel(
            3,
            BoundaryMode::Mirror,
            KernelParams {
                data: DType::F64,
                ..KernelParams::default()
            }
        ),
        Err(splinr::error::Error::UnsupportedDType { .. })
    ));
    assert!(matches!(
        get_or_generate_kernel(
            3,
            BoundaryMode::Mirror,
            KernelParams {
                index: DType::F32,
                ..KernelParams::default()
            }
        ),
        Err(splinr::error::Error::UnsupportedDType { .. })
    ));
}
