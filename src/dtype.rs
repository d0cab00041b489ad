//! Numeric precision tags for kernel generation
//!
//! The generated prefilter program is parameterized by three independent
//! precisions: one for index arithmetic, one for the filtered data, and one
//! for the pole constants and intermediate filter state. These are pure
//! code-generation parameters; no host value ever carries these types.

use std::fmt;

/// Numeric types a generated kernel can be parameterized with
///
/// This is a tag, not a container: it selects the type names and literal
/// forms emitted into kernel source. Which tags are legal for which slot is
/// decided by the target-language renderer (e.g. WGSL has no `f64`).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum DType {
    /// 64-bit floating point
    F64,
    /// 32-bit floating point
    F32,
    /// 16-bit floating point (requires the WebGPU f16 extension)
    F16,
    /// 32-bit signed integer
    I32,
    /// 32-bit unsigned integer
    U32,
}

impl DType {
    /// Size of one element in bytes
    pub const fn size_in_bytes(&self) -> usize {
        match self {
            DType::F64 => 8,
            DType::F32 | DType::I32 | DType::U32 => 4,
            DType::F16 => 2,
        }
    }

    /// Whether this is a floating-point tag
    pub const fn is_float(&self) -> bool {
        matches!(self, DType::F64 | DType::F32 | DType::F16)
    }

    /// Whether this is an integer tag
    pub const fn is_int(&self) -> bool {
        matches!(self, DType::I32 | DType::U32)
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DType::F64 => "f64",
            DType::F32 => "f32",
            DType::F16 => "f16",
            DType::I32 => "i32",
            DType::U32 => "u32",
        };
        write!(f, "{}", name)
    }
}

/// Precision tags for one generated prefilter kernel
///
/// `index` drives loop counters and offset arithmetic, `data` the filtered
/// buffer elements, and `pole` the filter constants and geometric-series
/// state. Distinct slots because pole recursions lose accuracy faster than
/// the data they feed; the original keeps poles in double even for float
/// data.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct KernelParams {
    /// Index arithmetic type (must be an integer tag)
    pub index: DType,
    /// Filtered data element type
    pub data: DType,
    /// Pole constant and filter-state type
    pub pole: DType,
}

impl Default for KernelParams {
    fn default() -> Self {
        Self {
            index: DType::U32,
            data: DType::F32,
            pole: DType::F32,
        }
    }
}
