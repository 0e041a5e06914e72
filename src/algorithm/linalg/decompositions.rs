//! Result and configuration types for the generalized eigendecomposition

use crate::tensor::Tensor;

/// What the solver computes, fixed for a whole invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EigenMode {
    /// Eigenvalues only; no eigenvector accumulation or back-transform
    #[default]
    ValuesOnly,
    /// Eigenvalues and B-orthonormal eigenvectors
    ValuesAndVectors,
}

impl EigenMode {
    /// Map a `compute_v` style flag onto a mode
    pub const fn from_compute_v(compute_v: bool) -> Self {
        if compute_v {
            Self::ValuesAndVectors
        } else {
            Self::ValuesOnly
        }
    }

    /// Whether eigenvectors are produced
    pub const fn computes_vectors(self) -> bool {
        matches!(self, Self::ValuesAndVectors)
    }

    /// Number of output tensors this mode produces
    pub const fn num_outputs(self) -> usize {
        if self.computes_vectors() { 2 } else { 1 }
    }
}

/// Generalized eigendecomposition result: A @ X = B @ X @ diag(λ)
///
/// For a batch of pairs with shape `[..., n, n]`:
/// - `eigenvalues`: `[..., n]`, real dtype of the input, ascending per pair
/// - `eigenvectors`: `[..., n, n]`, input dtype; column `i` of pair `k` is the
///   eigenvector for `eigenvalues[k, i]`, normalized so that X^H @ B @ X = I
#[derive(Debug, Clone)]
pub struct GeneralizedEigenDecomposition {
    /// Eigenvalues λ [..., n] (ascending within each pair)
    pub eigenvalues: Tensor,

    /// Eigenvector matrices X [..., n, n], present in `ValuesAndVectors` mode
    pub eigenvectors: Option<Tensor>,
}

impl GeneralizedEigenDecomposition {
    /// Output tensors in order: eigenvalues, then eigenvectors if computed
    pub fn into_outputs(self) -> Vec<Tensor> {
        let mut outputs = vec![self.eigenvalues];
        outputs.extend(self.eigenvectors);
        outputs
    }
}

/// Eigenpairs of a single matrix pair, as plain buffers
#[derive(Debug, Clone, PartialEq)]
pub struct GeneralizedEigenPair<T, R> {
    /// Ascending eigenvalues [n]
    pub eigenvalues: Vec<R>,
    /// Row-major eigenvector matrix [n × n], present in `ValuesAndVectors` mode
    pub eigenvectors: Option<Vec<T>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_flag() {
        assert_eq!(EigenMode::from_compute_v(true), EigenMode::ValuesAndVectors);
        assert_eq!(EigenMode::from_compute_v(false), EigenMode::ValuesOnly);
        assert_eq!(EigenMode::ValuesAndVectors.num_outputs(), 2);
        assert_eq!(EigenMode::default().num_outputs(), 1);
    }
}
