//! CPU reference executor
//!
//! Interprets a [`FilterProgram`] directly over host buffers in f64. This
//! is the numerical ground truth the generated GPU kernels are compared
//! against, and a usable fallback when no device is around.

mod kernels;

pub use kernels::extend_index;

use crate::error::{Error, Result};
use crate::spline::boundary::{BoundaryMode, ResolvedMode};
use crate::spline::poles::{get_gain, get_poles};
use crate::spline::program::FilterProgram;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Validate a line length against the boundary formulas' `n >= 2` domain
fn check_line_length(len_x: usize) -> Result<()> {
    if len_x < 2 {
        return Err(Error::InvalidArgument {
            arg: "len_x",
            reason: format!("line length {} too short, prefilter needs at least 2", len_x),
        });
    }
    Ok(())
}

/// Prefilter a single line in place
///
/// Runs every op of `program` over `c`. Rejects lines shorter than 2
/// samples before touching any data.
pub fn prefilter_line(c: &mut [f64], program: &FilterProgram) -> Result<()> {
    check_line_length(c.len())?;
    kernels::prefilter_line_kernel(c, program);
    Ok(())
}

/// Prefilter a `(n_lines, len_x)` batch in place
///
/// `data` is a flat buffer of `n_lines` contiguous lines filtered along
/// the trailing dimension, the same layout the batch kernel consumes.
/// Lines are independent; with the `rayon` feature they run in parallel.
pub fn prefilter_batch(data: &mut [f64], len_x: usize, program: &FilterProgram) -> Result<()> {
    check_line_length(len_x)?;
    if data.len() % len_x != 0 {
        return Err(Error::InvalidArgument {
            arg: "data",
            reason: format!(
                "buffer length {} is not a multiple of line length {}",
                data.len(),
                len_x
            ),
        });
    }

    #[cfg(feature = "rayon")]
    data.par_chunks_mut(len_x)
        .for_each(|line| kernels::prefilter_line_kernel(line, program));

    #[cfg(not(feature = "rayon"))]
    for line in data.chunks_mut(len_x) {
        kernels::prefilter_line_kernel(line, program);
    }

    Ok(())
}

/// Convert raw samples into spline coefficients in place
///
/// Applies the normalization gain and then the full prefilter for
/// `(order, mode)`, so that [`interpolate_line`] over the result
/// reproduces the input at integer coordinates. This is the 1-D
/// `spline_filter` of the surrounding array layer.
pub fn spline_filter1d(line: &mut [f64], order: usize, mode: BoundaryMode) -> Result<()> {
    let program = FilterProgram::build(order, mode)?;
    let gain = get_gain(get_poles(order)?);
    check_line_length(line.len())?;
    for v in line.iter_mut() {
        *v *= gain;
    }
    kernels::prefilter_line_kernel(line, &program);
    Ok(())
}

/// Evaluate the spline of `order` at coordinate `x` over coefficients
///
/// `coeffs` must already be prefiltered for the same order and mode.
/// Out-of-range basis taps are resolved through the mode's index
/// extension.
pub fn interpolate_line(coeffs: &[f64], order: usize, mode: ResolvedMode, x: f64) -> Result<f64> {
    if coeffs.is_empty() {
        return Err(Error::InvalidArgument {
            arg: "coeffs",
            reason: "empty coefficient line".to_string(),
        });
    }
    kernels::interpolate_line_kernel(coeffs, order, mode, x)
}
