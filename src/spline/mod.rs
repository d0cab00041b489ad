//! Core spline-filter mathematics
//!
//! Backend-neutral pieces of the prefilter: the pole table and gain, the
//! boundary-mode taxonomy, the structured per-line filter program, and the
//! closed-form interpolation weights. Everything here is a pure function of
//! (order, mode); nothing touches a device.

pub mod boundary;
pub mod poles;
pub mod program;
pub mod weights;

pub use boundary::{BoundaryMode, ResolvedMode};
pub use poles::{get_gain, get_poles};
pub use program::{FilterOp, FilterProgram};
pub use weights::spline_weights;
