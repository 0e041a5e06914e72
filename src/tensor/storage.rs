//! Storage: host memory tagged with its element type

use crate::dtype::{Complex64, Complex128, DType};

/// Owned, contiguous element buffer for a tensor
///
/// One variant per supported [`DType`]; the variant is the runtime dtype tag.
#[derive(Clone, Debug, PartialEq)]
pub enum Storage {
    /// 64-bit floating point data
    F64(Vec<f64>),
    /// 32-bit floating point data
    F32(Vec<f32>),
    /// Interleaved single-precision complex data
    Complex64(Vec<Complex64>),
    /// Interleaved double-precision complex data
    Complex128(Vec<Complex128>),
}

impl Storage {
    /// Allocate `len` zero-initialized elements of `dtype`
    pub fn zeros(len: usize, dtype: DType) -> Self {
        match dtype {
            DType::F64 => Self::F64(vec![0.0; len]),
            DType::F32 => Self::F32(vec![0.0; len]),
            DType::Complex64 => Self::Complex64(vec![Complex64::ZERO; len]),
            DType::Complex128 => Self::Complex128(vec![Complex128::ZERO; len]),
        }
    }

    /// Element type of this buffer
    pub fn dtype(&self) -> DType {
        match self {
            Self::F64(_) => DType::F64,
            Self::F32(_) => DType::F32,
            Self::Complex64(_) => DType::Complex64,
            Self::Complex128(_) => DType::Complex128,
        }
    }

    /// Number of elements (not bytes)
    pub fn len(&self) -> usize {
        match self {
            Self::F64(data) => data.len(),
            Self::F32(data) => data.len(),
            Self::Complex64(data) => data.len(),
            Self::Complex128(data) => data.len(),
        }
    }

    /// Whether the buffer holds no elements
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
