//! Generalized symmetric/Hermitian-definite eigensolver for a single matrix pair

use super::super::householder::{LinalgElement, argsort_ascending, permute_columns, permute_vector};
use super::cholesky::{
    back_substitute_conj_transpose, cholesky_lower, ensure_lower_finite, hermitian_from_lower,
    reduce_to_standard,
};
use super::eig_tridiagonal::implicit_ql;
use super::tridiagonal::tridiagonalize;
use crate::algorithm::linalg::{EigenMode, GeneralizedEigenPair};
use crate::error::{Error, Result};

/// Solve `A @ x = λ B @ x` for one [n × n] pair, writing into caller buffers.
///
/// Algorithm: Cholesky reduction
/// 1. Reject non-finite entries in the lower triangles of A and B
/// 2. B = L @ L^H (lower triangle of B)
/// 3. C = L^-1 @ A @ L^-H (lower triangle of A, two forward substitutions)
/// 4. C = Q @ T @ Q^H (Householder tridiagonalization, Q only if needed)
/// 5. Implicit QL on T, rotations accumulated into Q
/// 6. Sort eigenvalues ascending (stable), permute the columns of Q to match
/// 7. X = L^-H @ Q (back substitution)
///
/// `a` and `b` must hold `n * n` elements, `values` exactly `n` and `vectors`,
/// when present, `n * n`; anything else is `InvalidArgument`. Nothing is
/// written to either output buffer unless the whole solve succeeds.
pub fn generalized_eigh_into<T: LinalgElement>(
    a: &[T],
    b: &[T],
    n: usize,
    values: &mut [T::Real],
    vectors: Option<&mut [T]>,
) -> Result<()> {
    let nn = n * n;
    check_len("a", a.len(), nn, n)?;
    check_len("b", b.len(), nn, n)?;
    check_len("values", values.len(), n, n)?;
    if let Some(out) = vectors.as_deref() {
        check_len("vectors", out.len(), nn, n)?;
    }
    if n == 0 {
        return Ok(());
    }

    ensure_lower_finite(a, n)?;
    ensure_lower_finite(b, n)?;

    let l = cholesky_lower(b, n)?;

    let mut c = a.to_vec();
    hermitian_from_lower(&mut c, n);
    reduce_to_standard(&l, &mut c, n);

    let mut q = vectors.is_some().then(|| vec![T::zero(); n * n]);
    let tri = tridiagonalize(&mut c, n, q.as_deref_mut());
    let eigenvalues = implicit_ql(tri, q.as_deref_mut())?;

    let order = argsort_ascending(&eigenvalues);
    values.copy_from_slice(&permute_vector(&eigenvalues, &order));

    if let (Some(out), Some(z)) = (vectors, q) {
        let mut x = permute_columns(&z, n, n, &order);
        back_substitute_conj_transpose(&l, &mut x, n, n);
        out.copy_from_slice(&x);
    }

    Ok(())
}

fn check_len(arg: &'static str, len: usize, expected: usize, n: usize) -> Result<()> {
    if len != expected {
        return Err(Error::invalid_argument(
            arg,
            format!("buffer holds {len} elements but n = {n} needs {expected}"),
        ));
    }
    Ok(())
}

/// Solve a single pair given as plain row-major buffers.
///
/// `a` and `b` must each hold `n * n` elements; only their lower triangles are
/// read.
///
/// ```
/// use geneig::prelude::*;
/// use geneig::runtime::cpu::generalized_eigh_slices;
///
/// let a = [2.0f64, 0.0, 0.0, 3.0];
/// let b = [1.0f64, 0.0, 0.0, 1.0];
/// let pair = generalized_eigh_slices(&a, &b, 2, EigenMode::ValuesOnly).unwrap();
/// assert_eq!(pair.eigenvalues, vec![2.0, 3.0]);
/// assert!(pair.eigenvectors.is_none());
/// ```
pub fn generalized_eigh_slices<T: LinalgElement>(
    a: &[T],
    b: &[T],
    n: usize,
    mode: EigenMode,
) -> Result<GeneralizedEigenPair<T, T::Real>> {
    let mut eigenvalues = vec![<T::Real as num_traits::Zero>::zero(); n];
    let mut eigenvectors = mode.computes_vectors().then(|| vec![T::zero(); n * n]);
    generalized_eigh_into(a, b, n, &mut eigenvalues, eigenvectors.as_deref_mut())?;

    Ok(GeneralizedEigenPair {
        eigenvalues,
        eigenvectors,
    })
}
