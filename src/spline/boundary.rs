//! Boundary-extension modes for the recursive prefilter
//!
//! The causal and anticausal sweeps each need the filter state seeded at
//! their starting end of the line. How that seed is computed depends on the
//! out-of-range extension policy, and each supported policy has a closed
//! form (geometric series over the extended samples). The formulas live in
//! the executors and renderers; this module owns the mode taxonomy.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Out-of-range sample extension policy
///
/// `Nearest` and `Constant` are accepted for API compatibility with the
/// host array layer but share `Mirror`'s initialization math; see
/// [`BoundaryMode::resolve`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BoundaryMode {
    /// Whole-sample symmetric reflection: `d c b | a b c d | c b a`
    Mirror,
    /// Periodic extension: `b c d | a b c d | a b c`
    Wrap,
    /// Half-sample symmetric reflection: `c b a | a b c d | d c b`
    Reflect,
    /// Edge-value extension; filtered with mirror initialization
    Nearest,
    /// Constant-fill extension; filtered with mirror initialization
    Constant,
}

/// Boundary mode after folding aliases, the form programs record
///
/// Only these three have distinct prefilter initialization math.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ResolvedMode {
    /// Whole-sample symmetric reflection
    Mirror,
    /// Periodic extension
    Wrap,
    /// Half-sample symmetric reflection
    Reflect,
}

impl BoundaryMode {
    /// Fold mode aliases down to the three distinct initialization rules
    ///
    /// `nearest` and `constant` reuse the mirror initialization. This is
    /// carried over intentionally from the reference implementation (it is
    /// an approximation for true constant extension, not an oversight to
    /// fix); downstream numerical comparisons depend on the shared math.
    pub fn resolve(self) -> ResolvedMode {
        match self {
            BoundaryMode::Mirror | BoundaryMode::Nearest | BoundaryMode::Constant => {
                ResolvedMode::Mirror
            }
            BoundaryMode::Wrap => ResolvedMode::Wrap,
            BoundaryMode::Reflect => ResolvedMode::Reflect,
        }
    }
}

impl FromStr for BoundaryMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "mirror" => Ok(BoundaryMode::Mirror),
            "wrap" => Ok(BoundaryMode::Wrap),
            "reflect" => Ok(BoundaryMode::Reflect),
            "nearest" => Ok(BoundaryMode::Nearest),
            "constant" => Ok(BoundaryMode::Constant),
            _ => Err(Error::UnsupportedBoundaryMode {
                mode: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for BoundaryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BoundaryMode::Mirror => "mirror",
            BoundaryMode::Wrap => "wrap",
            BoundaryMode::Reflect => "reflect",
            BoundaryMode::Nearest => "nearest",
            BoundaryMode::Constant => "constant",
        };
        write!(f, "{}", name)
    }
}

impl fmt::Display for ResolvedMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResolvedMode::Mirror => "mirror",
            ResolvedMode::Wrap => "wrap",
            ResolvedMode::Reflect => "reflect",
        };
        write!(f, "{}", name)
    }
}
