//! CPU implementation of the generalized eigenproblem algorithms
//!
//! This module implements [`GeneralizedEigenAlgorithms`] for [`CpuClient`].
//! All kernels follow the algorithm documented on the trait, operate on dense
//! row-major buffers and are written once against [`LinalgElement`], so f32,
//! f64, Complex64 and Complex128 share a single implementation.
//!
//! # Module Structure
//!
//! - `cholesky`: Cholesky factorization, triangular solves, reduction to standard form
//! - `tridiagonal`: Householder tridiagonalization of a Hermitian matrix
//! - `eig_tridiagonal`: implicit QL on the symmetric tridiagonal matrix
//! - `eig_generalized`: the per-pair solver
//! - `batch`: per-pair dispatch over a batched tensor

mod batch;
pub(crate) mod cholesky;
mod eig_generalized;
pub(crate) mod eig_tridiagonal;
pub(crate) mod tridiagonal;

#[cfg(test)]
mod tests;

pub use eig_generalized::{generalized_eigh_into, generalized_eigh_slices};
pub use eig_tridiagonal::MAX_QL_ITERATIONS;

use super::CpuClient;
use crate::algorithm::linalg::{
    EigenMode, GeneralizedEigenAlgorithms, GeneralizedEigenDecomposition, validate_matrix_pair,
};
use crate::dtype::{Complex64, Complex128, DType};
use crate::error::Result;
use crate::tensor::Tensor;

impl GeneralizedEigenAlgorithms for CpuClient {
    fn generalized_eigh(
        &self,
        a: &Tensor,
        b: &Tensor,
        mode: EigenMode,
    ) -> Result<GeneralizedEigenDecomposition> {
        let n = validate_matrix_pair(a, b)?;

        match a.dtype() {
            DType::F32 => batch::generalized_eigh_batch::<f32>(self, a, b, n, mode),
            DType::F64 => batch::generalized_eigh_batch::<f64>(self, a, b, n, mode),
            DType::Complex64 => batch::generalized_eigh_batch::<Complex64>(self, a, b, n, mode),
            DType::Complex128 => batch::generalized_eigh_batch::<Complex128>(self, a, b, n, mode),
        }
    }
}
