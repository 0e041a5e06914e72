//! Algorithm contract for backends solving generalized eigenproblems

use super::{EigenMode, GeneralizedEigenDecomposition};
use crate::error::Result;
use crate::tensor::Tensor;

/// Generalized symmetric/Hermitian-definite eigendecomposition.
///
/// Solves `A @ x = λ B @ x` for every pair in a batch, where `A` is
/// symmetric (Hermitian) and `B` is symmetric (Hermitian) positive-definite.
///
/// # Algorithm (all backends)
///
/// ```text
/// 1. n == 0: return empty outputs, no factorization
/// 2. B = L @ L^H                       (Cholesky, lower triangle of B)
/// 3. C = L^-1 @ A @ L^-H               (triangular solves, lower triangle of A)
/// 4. C = Q @ T @ Q^H                   (Householder tridiagonalization)
/// 5. T = W @ diag(λ) @ W^T             (implicit QL with shifts)
/// 6. sort λ ascending, permute W
/// 7. X = L^-H @ (Q @ W)                (only when vectors are requested)
/// ```
///
/// Backends MUST match in:
/// - Which triangles are read (lower only)
/// - Failure detection: non-positive Cholesky pivot, QL non-convergence and
///   non-finite input all surface as `Error::NumericalFailure`
/// - Fail-fast batching: one failing pair fails the whole invocation
pub trait GeneralizedEigenAlgorithms {
    /// Solve every pair of a `[..., n, n]` batch.
    ///
    /// `a` and `b` must share shape and dtype. Eigenvalues are returned in the
    /// real dtype matching the input precision.
    fn generalized_eigh(
        &self,
        a: &Tensor,
        b: &Tensor,
        mode: EigenMode,
    ) -> Result<GeneralizedEigenDecomposition>;
}
