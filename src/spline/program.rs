//! Structured prefilter program
//!
//! A [`FilterProgram`] is the backend-neutral description of one full
//! prefilter pass over a single line: an ordered sequence of tagged
//! operations over a mutable 1-D buffer. Backends either interpret it
//! directly (CPU) or render it to kernel source (WGSL). Keeping the
//! program as data rather than text keeps the per-mode boundary algebra in
//! one place and lets structural tests compare programs directly.

use super::boundary::{BoundaryMode, ResolvedMode};
use super::poles::get_poles;
use crate::error::Result;

/// One operation of a prefilter program
///
/// Within a sweep, every element depends on its already-updated neighbor;
/// sweeps are inherently sequential along the line. Parallelism exists only
/// across lines.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FilterOp {
    /// Seed `c[0]` for the forward pass from the boundary extension
    CausalInit {
        /// Boundary rule selecting the initialization formula
        mode: ResolvedMode,
        /// Active filter pole
        pole: f64,
    },
    /// Forward recursion `c[i] += z * c[i-1]` for `i = 1..n`
    CausalSweep {
        /// Active filter pole
        pole: f64,
    },
    /// Seed `c[n-1]` for the backward pass from the boundary extension
    AnticausalInit {
        /// Boundary rule selecting the initialization formula
        mode: ResolvedMode,
        /// Active filter pole
        pole: f64,
    },
    /// Backward recursion `c[i] = z * (c[i+1] - c[i])` for `i = n-2..=0`
    AnticausalSweep {
        /// Active filter pole
        pole: f64,
    },
}

/// Complete prefilter program for one (order, mode) configuration
///
/// Immutable once built. Each pole of the order contributes four ops in
/// fixed sequence: causal init, causal sweep, anticausal init, anticausal
/// sweep. Poles are processed in table order, which matters: the passes do
/// not commute under finite precision.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterProgram {
    order: usize,
    mode: ResolvedMode,
    ops: Vec<FilterOp>,
}

impl FilterProgram {
    /// Build the prefilter program for a spline order and boundary mode
    ///
    /// Fails with [`crate::error::Error::UnsupportedOrder`] for orders
    /// outside 2-5, before any op is emitted. Mode aliases are resolved
    /// here, so `nearest`/`constant` produce a program identical to
    /// `mirror`'s.
    pub fn build(order: usize, mode: BoundaryMode) -> Result<Self> {
        let poles = get_poles(order)?;
        let mode = mode.resolve();

        let mut ops = Vec::with_capacity(poles.len() * 4);
        for &pole in poles {
            ops.push(FilterOp::CausalInit { mode, pole });
            ops.push(FilterOp::CausalSweep { pole });
            ops.push(FilterOp::AnticausalInit { mode, pole });
            ops.push(FilterOp::AnticausalSweep { pole });
        }

        Ok(Self { order, mode, ops })
    }

    /// Spline order this program prefilters for
    pub fn order(&self) -> usize {
        self.order
    }

    /// Resolved boundary mode recorded by every init op
    pub fn mode(&self) -> ResolvedMode {
        self.mode
    }

    /// The ordered operation sequence
    pub fn ops(&self) -> &[FilterOp] {
        &self.ops
    }
}
