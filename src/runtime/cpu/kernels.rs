//! f64 kernels interpreting a [`FilterProgram`] on the host
//!
//! Loop bodies match the generated GPU kernel statement-for-statement so
//! the two backends are numerically comparable (up to precision of the
//! kernel's data/pole types).

use crate::error::Result;
use crate::spline::boundary::ResolvedMode;
use crate::spline::program::{FilterOp, FilterProgram};
use crate::spline::weights::spline_weights;

/// Seed `c[0]` for the causal sweep from the boundary extension
pub(super) fn causal_init(c: &mut [f64], mode: ResolvedMode, z: f64) {
    let n = c.len();
    match mode {
        ResolvedMode::Mirror => {
            // Geometric series over the mirrored-in samples, normalized by
            // the period 2(n-1) of the whole-sample reflection.
            let z_n_1 = z.powi(n as i32 - 1);
            c[0] += z_n_1 * c[n - 1];
            let mut z_i = z;
            for i in 1..n - 1 {
                c[0] += z_i * (c[i] + z_n_1 * c[n - 1 - i]);
                z_i *= z;
            }
            c[0] /= 1.0 - z_n_1 * z_n_1;
        }
        ResolvedMode::Wrap => {
            let mut z_i = z;
            for i in 1..n {
                c[0] += z_i * c[n - i];
                z_i *= z;
            }
            c[0] /= 1.0 - z_i; // z_i = z^n
        }
        ResolvedMode::Reflect => {
            // The half-sample reflection preserves the endpoint value, so
            // the correction is blended back onto the original c[0].
            let mut z_i = z;
            let z_n = z.powi(n as i32);
            let c0 = c[0];
            c[0] += z_n * c[n - 1];
            for i in 1..n {
                c[0] += z_i * (c[i] + z_n * c[n - 1 - i]);
                z_i *= z;
            }
            c[0] *= z / (1.0 - z_n * z_n);
            c[0] += c0;
        }
    }
}

/// Seed `c[n-1]` for the anticausal sweep from the boundary extension
pub(super) fn anticausal_init(c: &mut [f64], mode: ResolvedMode, z: f64) {
    let n = c.len();
    match mode {
        ResolvedMode::Mirror => {
            c[n - 1] = (z * c[n - 2] + c[n - 1]) * z / (z * z - 1.0);
        }
        ResolvedMode::Wrap => {
            let mut z_i = z;
            for i in 0..n - 1 {
                c[n - 1] += z_i * c[i];
                z_i *= z;
            }
            c[n - 1] *= z / (z_i - 1.0); // z_i = z^n
        }
        ResolvedMode::Reflect => {
            c[n - 1] *= z / (z - 1.0);
        }
    }
}

/// Run one full prefilter program over a single line in place
///
/// The caller has already validated `c.len() >= 2`; the boundary formulas
/// are undefined for shorter lines.
pub(super) fn prefilter_line_kernel(c: &mut [f64], program: &FilterProgram) {
    let n = c.len();
    for op in program.ops() {
        match *op {
            FilterOp::CausalInit { mode, pole } => causal_init(c, mode, pole),
            FilterOp::CausalSweep { pole } => {
                for i in 1..n {
                    c[i] += pole * c[i - 1];
                }
            }
            FilterOp::AnticausalInit { mode, pole } => anticausal_init(c, mode, pole),
            FilterOp::AnticausalSweep { pole } => {
                for i in (0..n - 1).rev() {
                    c[i] = pole * (c[i + 1] - c[i]);
                }
            }
        }
    }
}

/// Map an out-of-range coefficient index back into `0..n` for a mode
///
/// Mirror repeats with period `2(n-1)` about the end samples, reflect with
/// period `2n` about the half-sample edges, wrap with period `n`.
pub fn extend_index(mode: ResolvedMode, index: isize, n: usize) -> usize {
    let n = n as isize;
    match mode {
        ResolvedMode::Mirror => {
            if n == 1 {
                return 0;
            }
            let period = 2 * n - 2;
            let m = index.rem_euclid(period);
            if m >= n { (period - m) as usize } else { m as usize }
        }
        ResolvedMode::Wrap => index.rem_euclid(n) as usize,
        ResolvedMode::Reflect => {
            let period = 2 * n;
            let m = index.rem_euclid(period);
            if m >= n {
                (2 * n - 1 - m) as usize
            } else {
                m as usize
            }
        }
    }
}

/// Evaluate the spline at coordinate `x` over prefiltered coefficients
pub(super) fn interpolate_line_kernel(
    coeffs: &[f64],
    order: usize,
    mode: ResolvedMode,
    x: f64,
) -> Result<f64> {
    let weights = spline_weights(order, x)?;
    let anchor = if order & 1 == 1 {
        x.floor()
    } else {
        (x + 0.5).floor()
    };
    let start = anchor as isize - (order / 2) as isize;

    let mut acc = 0.0;
    for (k, &w) in weights.iter().enumerate() {
        acc += w * coeffs[extend_index(mode, start + k as isize, coeffs.len())];
    }
    Ok(acc)
}
