//! WGSL shader generation for the batched spline prefilter
//!
//! WGSL has no templates, so one shader is generated per
//! (order, mode, precision) configuration from the structured
//! [`FilterProgram`]. The shader carries a module-private
//! `spline_prefilter1d` routine (the per-line program) and a batch entry
//! point that assigns one invocation per line, offset `line_idx * len_x`
//! into the flat storage buffer. Rendering is deterministic: equal inputs
//! produce byte-identical source.

use crate::dtype::{DType, KernelParams};
use crate::error::{Error, Result};
use crate::spline::boundary::ResolvedMode;
use crate::spline::program::{FilterOp, FilterProgram};

/// WGSL type name for a given DType
pub fn wgsl_type(dtype: DType) -> Result<&'static str> {
    match dtype {
        DType::F32 => Ok("f32"),
        DType::F16 => Ok("f16"), // Requires extension
        DType::I32 => Ok("i32"),
        DType::U32 => Ok("u32"),
        _ => Err(Error::UnsupportedDType {
            dtype,
            op: "wgpu_shader",
        }),
    }
}

/// Short suffix for entry point names (e.g. "spline_prefilter_f32")
pub fn dtype_suffix(dtype: DType) -> Result<&'static str> {
    wgsl_type(dtype)
}

/// Validate a parameter set for the prefilter kernel slots
///
/// Index arithmetic must be an integer tag, data and pole floating point;
/// anything WGSL cannot express (notably F64) is rejected here, before any
/// source is rendered.
pub fn validate_params(params: &KernelParams) -> Result<()> {
    wgsl_type(params.index)?;
    wgsl_type(params.data)?;
    wgsl_type(params.pole)?;
    if !params.index.is_int() {
        return Err(Error::UnsupportedDType {
            dtype: params.index,
            op: "spline_prefilter index",
        });
    }
    if !params.data.is_float() {
        return Err(Error::UnsupportedDType {
            dtype: params.data,
            op: "spline_prefilter data",
        });
    }
    if !params.pole.is_float() {
        return Err(Error::UnsupportedDType {
            dtype: params.pole,
            op: "spline_prefilter pole",
        });
    }
    Ok(())
}

/// Entry point name for a parameter set
pub fn entry_point_name(params: &KernelParams) -> Result<String> {
    Ok(format!("spline_prefilter_{}", dtype_suffix(params.data)?))
}

/// Index-type literal: `3` for i32, `3u` for u32
fn idx_lit(index: DType, v: i64) -> String {
    match index {
        DType::U32 => format!("{}u", v),
        _ => format!("{}", v),
    }
}

fn causal_init_wgsl(mode: ResolvedMode, i: &str, d: &str, p: &str, one: &str) -> String {
    match mode {
        ResolvedMode::Mirror => format!(
            r#"    // causal init for mode=mirror
    z_i = z;
    z_n_1 = pow(z, {p}(n - {one}));
    data[base] = data[base] + {d}(z_n_1) * data[base + n - {one}];
    for (var i: {i} = {one}; i < n - {one}; i = i + {one}) {{
        data[base] = data[base] + {d}(z_i) * (data[base + i] + {d}(z_n_1) * data[base + n - {one} - i]);
        z_i = z_i * z;
    }}
    data[base] = data[base] / {d}(1.0 - z_n_1 * z_n_1);
"#
        ),
        ResolvedMode::Wrap => format!(
            r#"    // causal init for mode=wrap
    z_i = z;
    for (var i: {i} = {one}; i < n; i = i + {one}) {{
        data[base] = data[base] + {d}(z_i) * data[base + n - i];
        z_i = z_i * z;
    }}
    data[base] = data[base] / {d}(1.0 - z_i); // z_i = pow(z, n)
"#
        ),
        ResolvedMode::Reflect => format!(
            r#"    // causal init for mode=reflect
    z_i = z;
    z_n = pow(z, {p}(n));
    c0 = data[base];
    data[base] = data[base] + {d}(z_n) * data[base + n - {one}];
    for (var i: {i} = {one}; i < n; i = i + {one}) {{
        data[base] = data[base] + {d}(z_i) * (data[base + i] + {d}(z_n) * data[base + n - {one} - i]);
        z_i = z_i * z;
    }}
    data[base] = data[base] * {d}(z / (1.0 - z_n * z_n));
    data[base] = data[base] + c0;
"#
        ),
    }
}

fn anticausal_init_wgsl(mode: ResolvedMode, i: &str, d: &str, one: &str, zero: &str) -> String {
    match mode {
        ResolvedMode::Mirror => format!(
            r#"    // anti-causal init for mode=mirror
    data[base + n - {one}] = (data[base + n - {one}] + {d}(z) * data[base + n - {one} - {one}]) * {d}(z / (z * z - 1.0));
"#
        ),
        ResolvedMode::Wrap => format!(
            r#"    // anti-causal init for mode=wrap
    z_i = z;
    for (var i: {i} = {zero}; i < n - {one}; i = i + {one}) {{
        data[base + n - {one}] = data[base + n - {one}] + {d}(z_i) * data[base + i];
        z_i = z_i * z;
    }}
    data[base + n - {one}] = data[base + n - {one}] * {d}(z / (z_i - 1.0)); // z_i = pow(z, n)
"#
        ),
        ResolvedMode::Reflect => format!(
            r#"    // anti-causal init for mode=reflect
    data[base + n - {one}] = data[base + n - {one}] * {d}(z / (z - 1.0));
"#
        ),
    }
}

fn causal_sweep_wgsl(i: &str, d: &str, one: &str) -> String {
    format!(
        r#"    // causal filter for the current pole
    for (var i: {i} = {one}; i < n; i = i + {one}) {{
        data[base + i] = data[base + i] + {d}(z) * data[base + i - {one}];
    }}
"#
    )
}

fn anticausal_sweep_wgsl(index: DType, i: &str, d: &str, one: &str, zero: &str) -> String {
    // u32 counters cannot run the natural `n-2..=0` descent without
    // underflow, so the unsigned variant iterates one ahead.
    match index {
        DType::U32 => format!(
            r#"    // anti-causal filter for the current pole
    for (var i: {i} = n - {one}; i >= {one}; i = i - {one}) {{
        let j = i - {one};
        data[base + j] = {d}(z) * (data[base + i] - data[base + j]);
    }}
"#
        ),
        _ => format!(
            r#"    // anti-causal filter for the current pole
    for (var i: {i} = n - {one} - {one}; i >= {zero}; i = i - {one}) {{
        data[base + i] = {d}(z) * (data[base + i + {one}] - data[base + i]);
    }}
"#
        ),
    }
}

/// Generate the WGSL shader implementing `program` for a parameter set
///
/// The returned source contains `spline_prefilter1d(base, n)` plus the
/// batch entry point named by [`entry_point_name`], dispatched over a flat
/// grid of `n_lines` workers (see [`super::pipeline::workgroup_count`]).
pub fn generate_spline_prefilter_shader(
    program: &FilterProgram,
    params: &KernelParams,
) -> Result<String> {
    validate_params(params)?;
    let i = wgsl_type(params.index)?;
    let d = wgsl_type(params.data)?;
    let p = wgsl_type(params.pole)?;
    let suffix = dtype_suffix(params.data)?;

    let one = idx_lit(params.index, 1);
    let zero = idx_lit(params.index, 0);

    let mut code = String::new();
    if params.data == DType::F16 || params.pole == DType::F16 {
        code.push_str("enable f16;\n\n");
    }
    code.push_str(&format!(
        r#"// Auto-generated spline prefilter shader (order {order}, mode {mode})

struct SplinePrefilterParams {{
    n_lines: u32,
    len_x: u32,
}}

@group(0) @binding(0) var<storage, read_write> data: array<{d}>;
@group(0) @binding(1) var<uniform> params: SplinePrefilterParams;

fn spline_prefilter1d(base: {i}, n: {i}) {{
    var z: {p};
    var z_i: {p};
"#,
        order = program.order(),
        mode = program.mode(),
    ));

    // Temporaries specific to the boundary mode
    match program.mode() {
        ResolvedMode::Mirror => {
            code.push_str(&format!("    var z_n_1: {p};\n"));
        }
        ResolvedMode::Reflect => {
            code.push_str(&format!("    var z_n: {p};\n    var c0: {d};\n"));
        }
        ResolvedMode::Wrap => {}
    }

    for op in program.ops() {
        match *op {
            FilterOp::CausalInit { mode, pole } => {
                code.push_str(&format!("\n    // select the current pole\n    z = {:?};\n", pole));
                code.push_str(&causal_init_wgsl(mode, i, d, p, &one));
            }
            FilterOp::CausalSweep { .. } => {
                code.push_str(&causal_sweep_wgsl(i, d, &one));
            }
            FilterOp::AnticausalInit { mode, .. } => {
                code.push_str(&anticausal_init_wgsl(mode, i, d, &one, &zero));
            }
            FilterOp::AnticausalSweep { .. } => {
                code.push_str(&anticausal_sweep_wgsl(params.index, i, d, &one, &zero));
            }
        }
    }

    code.push_str(&format!(
        r#"}}

@compute @workgroup_size(256)
fn spline_prefilter_{suffix}(@builtin(global_invocation_id) global_id: vec3<u32>) {{
    let line_idx = global_id.x;
    if (line_idx >= params.n_lines) {{
        return;
    }}
    // offset of the current line in the flat (n_lines, len_x) buffer
    spline_prefilter1d({i}(line_idx) * {i}(params.len_x), {i}(params.len_x));
}}
"#
    ));

    Ok(code)
}
