//! Data type system for geneig matrices
//!
//! This module provides the `DType` enum naming the element types the solver
//! accepts, the `Element` trait mapping Rust types onto it, and the complex
//! number types used for Hermitian inputs.

pub mod complex;
mod element;

pub use complex::{Complex64, Complex128};
pub use element::Element;

use std::fmt;

// ============================================================================
// DType Enum
// ============================================================================

/// Element types supported by the generalized eigensolver
///
/// Real inputs are symmetric-definite problems, complex inputs are
/// Hermitian-definite problems. Eigenvalues are always real and use
/// [`DType::real_dtype`].
///
/// # Discriminant Values (Serialization Stability)
///
/// - Floats: F64=0, F32=1
/// - Complex: Complex64=40, Complex128=41
///
/// Existing values are NEVER changed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DType {
    /// 64-bit floating point
    F64 = 0,
    /// 32-bit floating point
    F32 = 1,
    /// 64-bit complex (two f32: re, im)
    Complex64 = 40,
    /// 128-bit complex (two f64: re, im)
    Complex128 = 41,
}

impl DType {
    /// All supported dtypes, real types first
    pub const ALL: [DType; 4] = [Self::F32, Self::F64, Self::Complex64, Self::Complex128];

    /// Returns true if this is a complex number type
    #[inline]
    pub const fn is_complex(self) -> bool {
        matches!(self, Self::Complex64 | Self::Complex128)
    }

    /// The real dtype with the same working precision.
    ///
    /// This is the dtype of the eigenvalue output.
    #[inline]
    pub const fn real_dtype(self) -> Self {
        match self {
            Self::F32 | Self::Complex64 => Self::F32,
            Self::F64 | Self::Complex128 => Self::F64,
        }
    }

    /// Short name for display (e.g., "f32", "c128")
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::F64 => "f64",
            Self::F32 => "f32",
            Self::Complex64 => "c64",
            Self::Complex128 => "c128",
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}
